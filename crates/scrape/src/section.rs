// ABOUTME: The six leaderboard sections and the heading text used to locate each card.
// ABOUTME: Also classifies sections as benchmark (scored) or text (raw value) lists.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// How a section's captured value is turned into an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Value is reduced to a numeric `score`.
    Benchmark,
    /// Value is kept as raw text.
    Text,
}

/// One of the fixed leaderboard sections, in payload order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Code,
    Multimodal,
    Knowledge,
    LongestContext,
    Cheapest,
    Fastest,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Code,
        Section::Multimodal,
        Section::Knowledge,
        Section::LongestContext,
        Section::Cheapest,
        Section::Fastest,
    ];

    /// JSON key of the section.
    pub fn key(self) -> &'static str {
        match self {
            Section::Code => "code",
            Section::Multimodal => "multimodal",
            Section::Knowledge => "knowledge",
            Section::LongestContext => "longest_context",
            Section::Cheapest => "cheapest",
            Section::Fastest => "fastest",
        }
    }

    /// Heading text shown above the section's card on the page.
    pub fn title(self) -> &'static str {
        match self {
            Section::Code => "Best LLM - Code",
            Section::Multimodal => "Best Multimodal LLM",
            Section::Knowledge => "Best LLM - Knowledge",
            Section::LongestContext => "Longest Context Model",
            Section::Cheapest => "Cheapest API Provider",
            Section::Fastest => "Fastest API Provider",
        }
    }

    /// Alternate heading patterns tried when the title itself is not found.
    pub fn aliases(self) -> &'static [Regex] {
        &ALIASES[self.index()]
    }

    pub fn kind(self) -> SectionKind {
        match self {
            Section::Code | Section::Multimodal | Section::Knowledge => SectionKind::Benchmark,
            Section::LongestContext | Section::Cheapest | Section::Fastest => SectionKind::Text,
        }
    }

    pub fn is_benchmark(self) -> bool {
        self.kind() == SectionKind::Benchmark
    }

    fn index(self) -> usize {
        match self {
            Section::Code => 0,
            Section::Multimodal => 1,
            Section::Knowledge => 2,
            Section::LongestContext => 3,
            Section::Cheapest => 4,
            Section::Fastest => 5,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(&format!("(?i){}", p)).unwrap())
        .collect()
}

static ALIASES: Lazy<[Vec<Regex>; 6]> = Lazy::new(|| {
    [
        compile(&[r"best\s+llm.*code", r"aider\s+polyglot"]),
        compile(&[r"best\s+multimodal\s+llm", r"mmmu\s+benchmark"]),
        compile(&[r"best\s+llm.*knowledge", r"gpqa\s+benchmark"]),
        compile(&[r"longest\s+context", r"max\s+input\s+tokens"]),
        compile(&[r"cheapest\s+api\s+provider", r"input\s+cost"]),
        compile(&[r"fastest\s+api\s+provider", r"throughput"]),
    ]
});
