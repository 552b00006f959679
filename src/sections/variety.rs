//! Character variety section - presence checks for the four character types.

use super::SectionOutcome;

/// Maximum contribution of the variety section.
pub const VARIETY_MAX: u8 = 30;

/// Scores character variety: +7 for lowercase, +7 for uppercase, +8 for
/// digits and +8 for anything outside `[A-Za-z0-9]`. Presence checks only,
/// never counts. Absent types are reported as one combined message.
pub fn variety_section(password: &str) -> SectionOutcome {
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| !c.is_ascii_alphanumeric());

    let mut score = 0;
    if has_lower {
        score += 7;
    }
    if has_upper {
        score += 7;
    }
    if has_digit {
        score += 8;
    }
    if has_special {
        score += 8;
    }

    if score == VARIETY_MAX {
        return SectionOutcome::passed(score);
    }

    let missing: Vec<&str> = [
        (!has_lower).then_some("lowercase"),
        (!has_upper).then_some("uppercase"),
        (!has_digit).then_some("numbers"),
        (!has_special).then_some("special characters"),
    ]
    .into_iter()
    .flatten()
    .collect();

    SectionOutcome::flagged(score, format!("Missing: {}", missing.join(", ")))
}
