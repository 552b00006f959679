//! Secure password generation.

use secrecy::SecretString;
use thiserror::Error;
use zeroize::Zeroize;

use crate::charset;
use crate::rng::{self, OsEntropy, RandomSource};

/// Options for a single generation request.
///
/// `length` is expected in the 4–64 range but is not clamped; out-of-range
/// values simply propagate into the feasibility checks. `count` passwords are
/// produced per call, each from an independent synthesis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub special: bool,
    pub spaces: bool,
    /// Replaces the default special set when `special` is enabled.
    pub custom_special: Option<String>,
    /// Removes the ambiguous glyphs `l I 1 O 0` from every class.
    pub exclude_similar: bool,
    pub allow_duplicates: bool,
    pub count: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            numbers: true,
            special: true,
            spaces: false,
            custom_special: None,
            exclude_similar: false,
            allow_duplicates: true,
            count: 1,
        }
    }
}

/// Configuration and constraint errors from [`Generator::generate`].
///
/// These are hard failures: the generator never shortens, pads, or otherwise
/// silently repairs an infeasible request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("no characters available: enable at least one non-empty character class")]
    EmptyPool,
    #[error(
        "cannot build a {requested}-character password without repeats: \
         only {available} distinct characters available"
    )]
    InfeasibleLength { requested: usize, available: usize },
    #[error("length {requested} is too short to cover all {classes} selected character classes")]
    ClassCoverage { requested: usize, classes: usize },
}

/// Stateless password generator over a [`RandomSource`].
///
/// The default source is [`OsEntropy`]; substituting anything that is not a
/// CSPRNG breaks the security contract (see [`RandomSource`]).
#[derive(Debug, Clone, Default)]
pub struct Generator<S: RandomSource = OsEntropy> {
    source: S,
}

impl Generator {
    pub fn new() -> Self {
        Self { source: OsEntropy }
    }
}

impl<S: RandomSource> Generator<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Generates `config.count` independent passwords.
    ///
    /// Fails as a unit: if any single synthesis fails, no passwords are
    /// returned.
    pub fn generate(&mut self, config: &GenerationConfig) -> Result<Vec<SecretString>, GenerateError> {
        let mut passwords = Vec::with_capacity(config.count);
        for _ in 0..config.count {
            passwords.push(self.generate_one(config)?);
        }
        Ok(passwords)
    }

    /// Single-password synthesis: seed one character per enabled class, fill
    /// the remainder from the effective pool, then shuffle so the seeding
    /// order is not observable in the output.
    fn generate_one(&mut self, config: &GenerationConfig) -> Result<SecretString, GenerateError> {
        let classes = charset::enabled_classes(config);
        let pool = charset::pool(&classes);

        if pool.is_empty() {
            return Err(GenerateError::EmptyPool);
        }
        if classes.len() > config.length {
            return Err(GenerateError::ClassCoverage {
                requested: config.length,
                classes: classes.len(),
            });
        }
        if !config.allow_duplicates && config.length > pool.len() {
            return Err(GenerateError::InfeasibleLength {
                requested: config.length,
                available: pool.len(),
            });
        }

        let mut out: Vec<char> = Vec::with_capacity(config.length);

        // Coverage: one uniform draw from each class's own set, so every
        // requested class appears regardless of its share of the pool.
        for class in &classes {
            let c = if config.allow_duplicates {
                class[self.source.uniform(class.len())]
            } else {
                // Classes may overlap through a custom special set, so a
                // seed drawn for an earlier class can consume a character
                // this class would otherwise offer.
                let unused: Vec<char> =
                    class.iter().copied().filter(|c| !out.contains(c)).collect();
                if unused.is_empty() {
                    return Err(GenerateError::InfeasibleLength {
                        requested: config.length,
                        available: pool.len(),
                    });
                }
                unused[self.source.uniform(unused.len())]
            };
            out.push(c);
        }

        // Fill up to length from the full pool, or from the not-yet-used
        // subset when repeats are disallowed.
        if config.allow_duplicates {
            while out.len() < config.length {
                out.push(pool[self.source.uniform(pool.len())]);
            }
        } else {
            let mut remaining: Vec<char> =
                pool.iter().copied().filter(|c| !out.contains(c)).collect();
            while out.len() < config.length {
                if remaining.is_empty() {
                    return Err(GenerateError::InfeasibleLength {
                        requested: config.length,
                        available: pool.len(),
                    });
                }
                let idx = self.source.uniform(remaining.len());
                out.push(remaining.swap_remove(idx));
            }
            remaining.zeroize();
        }

        rng::shuffle(&mut self.source, &mut out);

        let password: String = out.iter().collect();
        out.zeroize();
        Ok(SecretString::new(password.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashSet;

    fn digits_only(length: usize) -> GenerationConfig {
        GenerationConfig {
            length,
            uppercase: false,
            lowercase: false,
            special: false,
            ..GenerationConfig::default()
        }
    }

    fn generate_one(config: &GenerationConfig) -> Result<String, GenerateError> {
        let mut generator = Generator::new();
        let passwords = generator.generate(config)?;
        Ok(passwords[0].expose_secret().to_string())
    }

    #[test]
    fn test_exact_length_and_pool_membership() {
        let config = GenerationConfig {
            length: 24,
            spaces: true,
            ..GenerationConfig::default()
        };
        let pool = charset::pool(&charset::enabled_classes(&config));
        let password = generate_one(&config).unwrap();
        assert_eq!(password.chars().count(), 24);
        for c in password.chars() {
            assert!(pool.contains(&c), "character {c:?} outside effective pool");
        }
    }

    #[test]
    fn test_every_enabled_class_is_covered() {
        let config = GenerationConfig {
            length: 8,
            ..GenerationConfig::default()
        };
        for _ in 0..50 {
            let password = generate_one(&config).unwrap();
            assert!(password.chars().any(|c| c.is_ascii_uppercase()));
            assert!(password.chars().any(|c| c.is_ascii_lowercase()));
            assert!(password.chars().any(|c| c.is_ascii_digit()));
            assert!(
                password
                    .chars()
                    .any(|c| charset::DEFAULT_SPECIAL.contains(c))
            );
        }
    }

    #[test]
    fn test_no_repeats_when_duplicates_disallowed() {
        let config = GenerationConfig {
            length: 40,
            allow_duplicates: false,
            ..GenerationConfig::default()
        };
        for _ in 0..20 {
            let password = generate_one(&config).unwrap();
            let distinct: HashSet<char> = password.chars().collect();
            assert_eq!(distinct.len(), 40, "repeat found in {password:?}");
        }
    }

    #[test]
    fn test_batch_count_and_independence() {
        let mut generator = Generator::new();
        let config = GenerationConfig {
            count: 5,
            ..GenerationConfig::default()
        };
        let passwords = generator.generate(&config).unwrap();
        assert_eq!(passwords.len(), 5);
        for p in &passwords {
            assert_eq!(p.expose_secret().chars().count(), 16);
        }
    }

    #[test]
    fn test_empty_pool_is_an_error() {
        let config = GenerationConfig {
            uppercase: false,
            lowercase: false,
            numbers: false,
            special: false,
            ..GenerationConfig::default()
        };
        assert_eq!(generate_one(&config), Err(GenerateError::EmptyPool));
    }

    #[test]
    fn test_infeasible_uniqueness_is_an_error() {
        let config = GenerationConfig {
            length: 3,
            uppercase: false,
            lowercase: false,
            numbers: false,
            custom_special: Some("ab".to_string()),
            allow_duplicates: false,
            ..GenerationConfig::default()
        };
        assert_eq!(
            generate_one(&config),
            Err(GenerateError::InfeasibleLength {
                requested: 3,
                available: 2
            })
        );
    }

    #[test]
    fn test_uniqueness_feasible_at_pool_boundary() {
        // Ten distinct digits cover a three-character no-repeat request.
        let config = GenerationConfig {
            allow_duplicates: false,
            ..digits_only(3)
        };
        let password = generate_one(&config).unwrap();
        assert_eq!(password.chars().count(), 3);
        let distinct: HashSet<char> = password.chars().collect();
        assert_eq!(distinct.len(), 3);
    }

    #[test]
    fn test_length_below_class_count_is_an_error() {
        let config = GenerationConfig {
            length: 2,
            ..GenerationConfig::default()
        };
        assert_eq!(
            generate_one(&config),
            Err(GenerateError::ClassCoverage {
                requested: 2,
                classes: 4
            })
        );
    }

    #[test]
    fn test_similar_glyphs_never_appear_when_excluded() {
        let config = GenerationConfig {
            length: 32,
            special: false,
            exclude_similar: true,
            ..GenerationConfig::default()
        };
        for _ in 0..20 {
            let password = generate_one(&config).unwrap();
            for c in password.chars() {
                assert!(!charset::SIMILAR.contains(&c), "similar glyph {c:?} leaked");
            }
        }
    }

    #[test]
    fn test_marginal_frequencies_roughly_uniform() {
        let mut generator = Generator::new();
        let config = digits_only(16);
        let mut counts = [0usize; 10];
        let runs = 2_000;
        for _ in 0..runs {
            let passwords = generator.generate(&config).unwrap();
            for c in passwords[0].expose_secret().chars() {
                counts[c.to_digit(10).unwrap() as usize] += 1;
            }
        }
        // 32,000 draws, expected 3,200 per digit; tolerance is ~7 sigma.
        for (digit, &c) in counts.iter().enumerate() {
            assert!(
                (2_800..=3_600).contains(&c),
                "digit {digit} count {c} far from uniform"
            );
        }
    }
}
