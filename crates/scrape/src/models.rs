// ABOUTME: Serializable output models: leaderboard entries, the payload and the build log.
// ABOUTME: Field order mirrors the JSON files written by the pipeline.

use serde::{Deserialize, Serialize};

use crate::section::Section;

/// One ranked entry of a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    /// Benchmark section entry with its numeric score.
    Score { name: String, score: f64 },
    /// Text section entry with its raw value.
    Value { name: String, value: String },
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Entry::Score { name, .. } | Entry::Value { name, .. } => name,
        }
    }

    pub fn score(&self) -> Option<f64> {
        match self {
            Entry::Score { score, .. } => Some(*score),
            Entry::Value { .. } => None,
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Entry::Score { .. } => None,
            Entry::Value { value, .. } => Some(value),
        }
    }
}

/// One row of the page's main model table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub organization: String,
    pub organization_logo: String,
    pub model: String,
    pub license: String,
    pub parameters_b: String,
    pub context: String,
    pub input_per_m: String,
    pub output_per_m: String,
    pub gpqa: String,
    pub mmlu: String,
    pub mmlu_pro: String,
}

/// Contents of `top-leaderboards.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub code: Vec<Entry>,
    #[serde(default)]
    pub multimodal: Vec<Entry>,
    #[serde(default)]
    pub knowledge: Vec<Entry>,
    #[serde(default)]
    pub longest_context: Vec<Entry>,
    #[serde(default)]
    pub cheapest: Vec<Entry>,
    #[serde(default)]
    pub fastest: Vec<Entry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<Vec<TableRow>>,
}

impl Payload {
    pub fn section(&self, section: Section) -> &[Entry] {
        match section {
            Section::Code => &self.code,
            Section::Multimodal => &self.multimodal,
            Section::Knowledge => &self.knowledge,
            Section::LongestContext => &self.longest_context,
            Section::Cheapest => &self.cheapest,
            Section::Fastest => &self.fastest,
        }
    }

    pub fn section_mut(&mut self, section: Section) -> &mut Vec<Entry> {
        match section {
            Section::Code => &mut self.code,
            Section::Multimodal => &mut self.multimodal,
            Section::Knowledge => &mut self.knowledge,
            Section::LongestContext => &mut self.longest_context,
            Section::Cheapest => &mut self.cheapest,
            Section::Fastest => &mut self.fastest,
        }
    }

    pub fn counts(&self) -> Counts {
        Counts {
            code: self.code.len(),
            multimodal: self.multimodal.len(),
            knowledge: self.knowledge.len(),
            longest_context: self.longest_context.len(),
            cheapest: self.cheapest.len(),
            fastest: self.fastest.len(),
        }
    }
}

/// Number of entries per section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    pub code: usize,
    pub multimodal: usize,
    pub knowledge: usize,
    pub longest_context: usize,
    pub cheapest: usize,
    pub fastest: usize,
}

impl Counts {
    pub fn get(&self, section: Section) -> usize {
        match section {
            Section::Code => self.code,
            Section::Multimodal => self.multimodal,
            Section::Knowledge => self.knowledge,
            Section::LongestContext => self.longest_context,
            Section::Cheapest => self.cheapest,
            Section::Fastest => self.fastest,
        }
    }

    /// Single-line summary, e.g. `code=5 multimodal=5 ...`.
    pub fn summary(&self) -> String {
        Section::ALL
            .iter()
            .map(|s| format!("{}={}", s.key(), self.get(*s)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Contents of `build-log.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildLog {
    pub fetched_from: String,
    pub utc: String,
    pub counts: Counts,
}
