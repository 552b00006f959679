//! Pattern section - penalizes three-character runs and repeats.

use super::SectionOutcome;

/// Starting (and maximum) contribution of the pattern section.
pub const PATTERN_MAX: u8 = 20;

const RUN_PENALTY: u8 = 10;

/// Scores pattern hygiene, starting at 20 and applying two independent
/// penalties over every window of three consecutive characters:
///
/// - −10 for any run with a constant character-code step of at most one
///   ("abc", "321", and degenerate zero-step runs like "111");
/// - −10 for any three identical consecutive characters.
///
/// A single match anywhere triggers the full penalty; both penalties can
/// apply, flooring the score at zero. Each triggered penalty contributes its
/// own message.
pub fn pattern_section(password: &str) -> SectionOutcome {
    let codes: Vec<i64> = password.chars().map(|c| i64::from(u32::from(c))).collect();

    let sequential = codes.windows(3).any(|w| {
        let step = w[1] - w[0];
        step.abs() <= 1 && w[2] - w[1] == step
    });
    let repeated = codes.windows(3).any(|w| w[0] == w[1] && w[1] == w[2]);

    let mut score = PATTERN_MAX;
    let mut feedback = Vec::new();
    if sequential {
        score -= RUN_PENALTY;
        feedback.push("Avoid sequential characters like \"abc\" or \"321\"".to_string());
    }
    if repeated {
        score -= RUN_PENALTY;
        feedback.push("Avoid repeating the same character three times in a row".to_string());
    }

    SectionOutcome { score, feedback }
}
