//! Length section - scores password length in four bands.

use super::SectionOutcome;

/// Maximum contribution of the length section.
pub const LENGTH_MAX: u8 = 30;

/// Scores length at 0/10/20/30 for <8, 8–11, 12–15 and ≥16 characters, with
/// advice scaled to how short the password is.
pub fn length_section(password: &str) -> SectionOutcome {
    match password.chars().count() {
        0..=7 => SectionOutcome::flagged(0, "Password is too short (under 8 characters)"),
        8..=11 => SectionOutcome::flagged(10, "Use at least 12 characters"),
        12..=15 => SectionOutcome::flagged(20, "Consider using 16 or more characters"),
        _ => SectionOutcome::passed(LENGTH_MAX),
    }
}
