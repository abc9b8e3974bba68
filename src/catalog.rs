//! Topic registry: which demos exist and how to run them.

use crate::config::DrillConfig;
use crate::demos;
use crate::error::{DrillError, Result};
use crate::report::Reporter;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Arrays,
    Strings,
    LinkedList,
    CyclicList,
    StackQueue,
    Bits,
    SearchSort,
    SlidingWindow,
    TwoPointer,
    StringLibrary,
    Embedded,
}

impl Topic {
    pub const ALL: [Topic; 11] = [
        Topic::Arrays,
        Topic::Strings,
        Topic::LinkedList,
        Topic::CyclicList,
        Topic::StackQueue,
        Topic::Bits,
        Topic::SearchSort,
        Topic::SlidingWindow,
        Topic::TwoPointer,
        Topic::StringLibrary,
        Topic::Embedded,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Topic::Arrays => "arrays",
            Topic::Strings => "strings",
            Topic::LinkedList => "linked_list",
            Topic::CyclicList => "cyclic_list",
            Topic::StackQueue => "stack_queue",
            Topic::Bits => "bits",
            Topic::SearchSort => "search_sort",
            Topic::SlidingWindow => "sliding_window",
            Topic::TwoPointer => "two_pointer",
            Topic::StringLibrary => "string_library",
            Topic::Embedded => "embedded",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Topic::Arrays => "Array manipulation",
            Topic::Strings => "String manipulation",
            Topic::LinkedList => "Singly linked lists",
            Topic::CyclicList => "Cycles and shared nodes",
            Topic::StackQueue => "Stacks and queues",
            Topic::Bits => "Recursion and bit manipulation",
            Topic::SearchSort => "Searching and sorting",
            Topic::SlidingWindow => "Sliding window",
            Topic::TwoPointer => "Two pointers",
            Topic::StringLibrary => "C string library",
            Topic::Embedded => "Embedded building blocks",
        }
    }

    pub fn demos(self) -> &'static [Demo] {
        demos::for_topic(self)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive; `-` and `_` are interchangeable.
impl FromStr for Topic {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Topic::ALL
            .iter()
            .copied()
            .find(|t| t.name() == normalized)
            .ok_or_else(|| DrillError::UnknownTopic(s.to_string()))
    }
}

pub type DemoFn = fn(&mut Reporter, &DrillConfig) -> Result<()>;

#[derive(Clone, Copy)]
pub struct Demo {
    pub name: &'static str,
    pub run: DemoFn,
}

impl fmt::Debug for Demo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Demo").field("name", &self.name).finish()
    }
}

/// What `drills list --json` prints for each topic.
#[derive(Debug, Serialize)]
pub struct TopicSummary {
    pub topic: Topic,
    pub title: &'static str,
    pub demos: Vec<&'static str>,
}

pub fn summaries() -> Vec<TopicSummary> {
    Topic::ALL
        .iter()
        .map(|&topic| TopicSummary {
            topic,
            title: topic.title(),
            demos: topic.demos().iter().map(|d| d.name).collect(),
        })
        .collect()
}

/// Outcome of running a batch of demos.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: Vec<String>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Runs every demo of `topic`.
pub fn run_topic(topic: Topic, reporter: &mut Reporter, config: &DrillConfig) -> RunSummary {
    run_demos(topic, topic.demos(), reporter, config)
}

/// Runs `demos` under the heading of `topic`. A failing demo is reported and
/// recorded but does not stop the rest.
pub fn run_demos(
    topic: Topic,
    demos: &[Demo],
    reporter: &mut Reporter,
    config: &DrillConfig,
) -> RunSummary {
    let mut summary = RunSummary::default();
    reporter.section(topic.title());
    for demo in demos {
        reporter.detail(format!("running {topic}::{}", demo.name));
        match (demo.run)(reporter, config) {
            Ok(()) => summary.passed += 1,
            Err(err) => {
                reporter.error(format!("{topic}::{}: {err}", demo.name));
                summary.failed.push(format!("{topic}::{}", demo.name));
            }
        }
    }
    summary
}

pub fn run_topics(topics: &[Topic], reporter: &mut Reporter, config: &DrillConfig) -> RunSummary {
    let mut total = RunSummary::default();
    for &topic in topics {
        let summary = run_topic(topic, reporter, config);
        total.passed += summary.passed;
        total.failed.extend(summary.failed);
    }
    total
}

/// Runs the topics the config selects.
pub fn run_configured(reporter: &mut Reporter, config: &DrillConfig) -> Result<RunSummary> {
    let topics = config.selected_topics()?;
    Ok(run_topics(&topics, reporter, config))
}
