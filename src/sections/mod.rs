//! Strength evaluation sections
//!
//! Each section scores one independent aspect of the password and contributes
//! its own advisory feedback.

mod dictionary;
mod length;
mod pattern;
mod variety;

pub use dictionary::dictionary_section;
pub use length::length_section;
pub use pattern::pattern_section;
pub use variety::variety_section;

/// Score and feedback contributed by a single section.
///
/// `feedback` is empty when the section is satisfied; the pattern section may
/// contribute more than one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionOutcome {
    pub score: u8,
    pub feedback: Vec<String>,
}

impl SectionOutcome {
    pub(crate) fn passed(score: u8) -> Self {
        Self {
            score,
            feedback: Vec::new(),
        }
    }

    pub(crate) fn flagged(score: u8, message: impl Into<String>) -> Self {
        Self {
            score,
            feedback: vec![message.into()],
        }
    }
}
