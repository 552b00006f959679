//! Dictionary section - checks the password against the known-weak list.

use super::SectionOutcome;
use crate::dictionary::Dictionary;
use zeroize::Zeroize;

/// Maximum contribution of the dictionary section.
pub const DICTIONARY_MAX: u8 = 20;

/// Scores 0 when the lower-cased password exactly matches a dictionary entry
/// or contains any entry of length ≥ 4 as a substring, 20 otherwise.
pub fn dictionary_section(password: &str, dictionary: &Dictionary) -> SectionOutcome {
    let mut lowered = password.to_lowercase();
    let common = dictionary.is_common(&lowered);
    lowered.zeroize();

    if common {
        SectionOutcome::flagged(0, "This is a commonly used password")
    } else {
        SectionOutcome::passed(DICTIONARY_MAX)
    }
}
