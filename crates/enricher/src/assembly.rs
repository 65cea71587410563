//! Section assembly: ordered fragments joined into one prompt.
//!
//! A section is only emitted when it has at least one line; the heading is
//! dropped with it. Every section after the base prompt is preceded by a
//! blank line.

use crate::token;
use serde::{Deserialize, Serialize};

/// An assembled prompt plus a record of what went into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedPrompt {
    /// The final prompt text.
    pub text: String,
    /// Emitted sections, in output order.
    pub sections: Vec<SectionStats>,
    /// Estimated token count of `text`.
    pub estimated_tokens: usize,
}

/// Statistics for one emitted section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionStats {
    /// Section name.
    pub name: String,
    /// Content lines, excluding the heading.
    pub lines: usize,
}

impl EnrichedPrompt {
    /// Whether a section with `name` was emitted.
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.iter().any(|s| s.name == name)
    }
}

/// Collects fragments for a single enrichment call.
pub(crate) struct PromptBuilder {
    fragments: Vec<String>,
    sections: Vec<SectionStats>,
}

impl PromptBuilder {
    /// Start a prompt with `base` as its opening section.
    pub(crate) fn new(base: &str) -> Self {
        Self {
            fragments: vec![base.to_string()],
            sections: vec![SectionStats {
                name: "base".into(),
                lines: base.lines().count(),
            }],
        }
    }

    /// Append a headed section; skipped entirely when `lines` is empty.
    pub(crate) fn section(&mut self, name: &str, heading: &str, lines: Vec<String>) -> &mut Self {
        if lines.is_empty() {
            return self;
        }
        self.sections.push(SectionStats {
            name: name.into(),
            lines: lines.len(),
        });
        self.fragments.push(String::new());
        self.fragments.push(heading.to_string());
        self.fragments.extend(lines);
        self
    }

    /// Append a pre-formatted block that carries its own heading.
    pub(crate) fn block(&mut self, name: &str, text: &str) -> &mut Self {
        self.sections.push(SectionStats {
            name: name.into(),
            lines: text.lines().count().saturating_sub(1),
        });
        self.fragments.push(String::new());
        self.fragments.push(text.to_string());
        self
    }

    pub(crate) fn finish(self) -> EnrichedPrompt {
        let text = self.fragments.join("\n");
        EnrichedPrompt {
            estimated_tokens: token::estimate_tokens(&text),
            text,
            sections: self.sections,
        }
    }
}
