//! Classic interview drills: array, string and list manipulation, stacks and
//! queues, bit tricks, searching and sorting, window and two-pointer
//! techniques, a C-style string library, and the building blocks of
//! embedded firmware. Every topic ships runnable demos (see [`catalog`]).

pub mod arrays;
pub mod bits;
pub mod cyclic_list;
pub mod linked_list;
pub mod search_sort;
pub mod sliding_window;
pub mod stack_queue;
pub mod string_library;
pub mod strings;
pub mod two_pointer;

pub mod embedded;

pub mod catalog;
pub mod config;
mod demos;
pub mod error;
pub mod report;

pub use catalog::Topic;
pub use config::DrillConfig;
pub use error::{DrillError, Result};
pub use report::Reporter;
