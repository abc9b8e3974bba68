//! Runner configuration, loaded from TOML or JSON.

use crate::catalog::Topic;
use crate::error::{DrillError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub const MAX_SAMPLE_SIZE: usize = 1_000_000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillConfig {
    pub output: OutputConfig,
    pub run: RunConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub color: bool,
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Topic names to run; empty means every topic.
    pub topics: Vec<String>,
    /// Seed for randomly generated demo inputs.
    pub seed: u64,
    /// Length of randomly generated arrays.
    pub sample_size: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            verbose: false,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            topics: Vec::new(),
            seed: 42,
            sample_size: 1_000,
        }
    }
}

// =============================================================================
// Milestone 1: Loading
// =============================================================================

impl DrillConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Picks the format from the extension; anything but `.json` is TOML.
    /// The loaded config is validated before it is returned.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|err| DrillError::Config(err.to_string()))
    }

    /// Command-line flags win over file values.
    pub fn apply_overrides(&mut self, no_color: bool, verbose: bool, seed: Option<u64>) {
        if no_color {
            self.output.color = false;
        }
        if verbose {
            self.output.verbose = true;
        }
        if let Some(seed) = seed {
            self.run.seed = seed;
        }
    }

    // =========================================================================
    // Milestone 2: Validation with accumulated errors
    // =========================================================================

    /// Reports every problem at once rather than stopping at the first.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        if self.run.sample_size == 0 {
            problems.push("run.sample_size must be at least 1".to_string());
        } else if self.run.sample_size > MAX_SAMPLE_SIZE {
            problems.push(format!(
                "run.sample_size {} exceeds the maximum of {MAX_SAMPLE_SIZE}",
                self.run.sample_size
            ));
        }

        for name in &self.run.topics {
            if Topic::from_str(name).is_err() {
                let mut message = format!("run.topics: unknown topic '{name}'");
                if let Some(suggestion) = suggest_topic(name) {
                    message.push_str(&format!(" (did you mean '{suggestion}'?)"));
                }
                problems.push(message);
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(DrillError::Config(problems.join("; ")))
        }
    }

    /// The configured topics in catalog order, or all of them when none are named.
    pub fn selected_topics(&self) -> Result<Vec<Topic>> {
        if self.run.topics.is_empty() {
            return Ok(Topic::ALL.to_vec());
        }
        let mut topics = self
            .run
            .topics
            .iter()
            .map(|name| Topic::from_str(name))
            .collect::<Result<Vec<_>>>()?;
        topics.sort();
        topics.dedup();
        Ok(topics)
    }
}

// =============================================================================
// Milestone 3: Typo suggestions
// =============================================================================

pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();

    for i in 1..=a.len() {
        let mut curr = vec![i; b.len() + 1];
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        prev = curr;
    }
    prev[b.len()]
}

/// Closest topic name within an edit distance of 2.
pub fn suggest_topic(typo: &str) -> Option<&'static str> {
    const MAX_DISTANCE: usize = 2;
    let typo = typo.to_ascii_lowercase();
    Topic::ALL
        .iter()
        .map(|t| (t.name(), levenshtein_distance(&typo, t.name())))
        .filter(|&(_, d)| d <= MAX_DISTANCE)
        .min_by_key(|&(_, d)| d)
        .map(|(name, _)| name)
}
