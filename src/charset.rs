//! Character classes and effective-pool construction for generation.

use crate::generator::GenerationConfig;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const DEFAULT_SPECIAL: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?";

/// Ambiguous glyphs removed from every class when `exclude_similar` is set.
pub const SIMILAR: &[char] = &['l', 'I', '1', 'O', '0'];

/// Builds the enabled character classes, similarity-filtered and deduplicated.
///
/// Classes that end up empty after filtering are omitted, so every returned
/// class can satisfy the one-character coverage guarantee. Deduplication keeps
/// per-character sampling uniform even when a custom special set repeats a
/// character or overlaps another class.
pub fn enabled_classes(config: &GenerationConfig) -> Vec<Vec<char>> {
    let mut classes = Vec::new();

    if config.uppercase {
        classes.push(filter_class(UPPERCASE.chars(), config.exclude_similar));
    }
    if config.lowercase {
        classes.push(filter_class(LOWERCASE.chars(), config.exclude_similar));
    }
    if config.numbers {
        classes.push(filter_class(DIGITS.chars(), config.exclude_similar));
    }
    if config.special {
        let set = config.custom_special.as_deref().unwrap_or(DEFAULT_SPECIAL);
        classes.push(filter_class(set.chars(), config.exclude_similar));
    }
    if config.spaces {
        classes.push(vec![' ']);
    }

    classes.retain(|class| !class.is_empty());
    classes
}

/// Union of the given classes: each distinct character appears exactly once.
pub fn pool(classes: &[Vec<char>]) -> Vec<char> {
    let mut pool: Vec<char> = Vec::new();
    for class in classes {
        for &c in class {
            if !pool.contains(&c) {
                pool.push(c);
            }
        }
    }
    pool
}

fn filter_class(chars: impl Iterator<Item = char>, exclude_similar: bool) -> Vec<char> {
    let mut class: Vec<char> = Vec::new();
    for c in chars {
        if exclude_similar && SIMILAR.contains(&c) {
            continue;
        }
        if !class.contains(&c) {
            class.push(c);
        }
    }
    class
}
