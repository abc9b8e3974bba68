//! Host-testable models of firmware building blocks: buffers, state
//! machines, wire formats, checksums, fixed-point math, input
//! debouncing, sensor filters, static allocators, software timers and an
//! event-driven main loop.

pub mod crc;
pub mod debounce;
pub mod endian;
pub mod event_queue;
pub mod filter;
pub mod fixed_point;
pub mod memory_pool;
pub mod protocol;
pub mod ring_buffer;
pub mod state_machine;
pub mod timer;
