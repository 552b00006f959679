//! Secure password generation and strength evaluation
//!
//! Two independent engines:
//!
//! - [`Generator`] synthesizes passwords from character-class rules using
//!   operating-system entropy, with unbiased sampling, a one-character-per-
//!   class coverage guarantee, an optional no-repeat constraint and an
//!   unbiased final shuffle.
//! - [`StrengthEvaluator`] scores arbitrary passwords with a deterministic
//!   heuristic (length, variety, pattern and dictionary sub-scores) against
//!   an injected common-password [`Dictionary`].
//!
//! # Features
//!
//! - `async` (default): Enables channel delivery of evaluation results
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_FORGE_DICTIONARY_PATH`: Custom path to a common-password file used
//!   by [`Dictionary::load`] (default: the embedded list)
//!
//! # Example
//!
//! ```rust
//! use pwd_forge::{GenerationConfig, Generator, StrengthEvaluator};
//!
//! let mut generator = Generator::new();
//! let passwords = generator.generate(&GenerationConfig::default())?;
//!
//! let evaluator = StrengthEvaluator::with_builtin_dictionary();
//! let result = evaluator.evaluate(&passwords[0]);
//!
//! println!("Score: {} ({})", result.score, result.label);
//! for advice in &result.feedback {
//!     println!("- {advice}");
//! }
//! # Ok::<(), pwd_forge::GenerateError>(())
//! ```

mod charset;
mod dictionary;
mod evaluator;
mod generator;
mod rng;
mod sections;
mod types;

// Public API
pub use dictionary::{DICTIONARY_PATH_ENV, Dictionary, DictionaryError};
pub use evaluator::StrengthEvaluator;
pub use generator::{GenerateError, GenerationConfig, Generator};
pub use rng::{OsEntropy, RandomSource};
pub use types::{StrengthLevel, StrengthResult, SubScores};
