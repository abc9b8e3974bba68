//! Runnable walkthroughs, one group per topic. Each demo prints its inputs
//! and results through the `Reporter` and fails with `Mismatch` when two
//! approaches disagree or a known answer comes out wrong.

mod algorithms;
mod embedded;
mod lists;
mod sequences;

use crate::catalog::{Demo, Topic};
use crate::config::DrillConfig;
use crate::error::{DrillError, Result};
use crate::report::Reporter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Debug;

pub(crate) fn for_topic(topic: Topic) -> &'static [Demo] {
    match topic {
        Topic::Arrays => sequences::ARRAYS,
        Topic::Strings => sequences::STRINGS,
        Topic::LinkedList => lists::LINKED_LIST,
        Topic::CyclicList => lists::CYCLIC_LIST,
        Topic::StackQueue => lists::STACK_QUEUE,
        Topic::Bits => algorithms::BITS,
        Topic::SearchSort => algorithms::SEARCH_SORT,
        Topic::SlidingWindow => sequences::SLIDING_WINDOW,
        Topic::TwoPointer => sequences::TWO_POINTER,
        Topic::StringLibrary => algorithms::STRING_LIBRARY,
        Topic::Embedded => embedded::EMBEDDED,
    }
}

/// Prints `label: actual` and fails unless it equals `expected`.
fn check<T: PartialEq + Debug>(r: &mut Reporter, label: &str, actual: T, expected: T) -> Result<()> {
    r.line(label, format!("{actual:?}"));
    if actual == expected {
        Ok(())
    } else {
        Err(DrillError::mismatch(label, expected, actual))
    }
}

/// Two methods for the same answer must agree.
fn agree<T: PartialEq + Debug>(r: &mut Reporter, what: &str, a: T, b: T) -> Result<()> {
    if a == b {
        r.ok(&format!("{what} agree: {a:?}"));
        Ok(())
    } else {
        Err(DrillError::mismatch(what, a, b))
    }
}

fn rng(config: &DrillConfig) -> StdRng {
    StdRng::seed_from_u64(config.run.seed)
}

/// `len` values in `-range..range`.
fn random_values(config: &DrillConfig, len: usize, range: i32) -> Vec<i32> {
    let mut rng = rng(config);
    (0..len).map(|_| rng.gen_range(-range..range)).collect()
}

/// Caps quadratic reference implementations on large configured samples.
const BRUTE_FORCE_LIMIT: usize = 500;

fn brute_sample_len(config: &DrillConfig) -> usize {
    config.run.sample_size.min(BRUTE_FORCE_LIMIT)
}
