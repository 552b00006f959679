//! Password strength evaluator - section orchestration and composition.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::dictionary::Dictionary;
use crate::sections::{dictionary_section, length_section, pattern_section, variety_section};
use crate::types::{StrengthResult, SubScores};

/// Scores arbitrary passwords against a fixed known-weak dictionary.
///
/// The dictionary is injected at construction and never mutated, so one
/// evaluator can be shared freely across threads for concurrent read-only
/// evaluation. `evaluate` is a pure function of its input: identical input
/// always yields an identical result, and no input can make it fail.
#[derive(Debug, Clone)]
pub struct StrengthEvaluator {
    dictionary: Dictionary,
}

impl StrengthEvaluator {
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    /// Evaluator backed by the embedded common-password list.
    pub fn with_builtin_dictionary() -> Self {
        Self::new(Dictionary::builtin())
    }

    /// Evaluates a password held in a [`SecretString`].
    pub fn evaluate(&self, password: &SecretString) -> StrengthResult {
        self.evaluate_str(password.expose_secret())
    }

    /// Evaluates an optional password; `None` degrades to the same
    /// zero-score result as an empty string.
    pub fn evaluate_opt(&self, password: Option<&SecretString>) -> StrengthResult {
        match password {
            Some(password) => self.evaluate(password),
            None => required_result(),
        }
    }

    /// Core evaluation: runs the four sections in order (length, variety,
    /// pattern, dictionary), sums their sub-scores into the 0–100 composite
    /// and collects their feedback in the same order. When every section is
    /// satisfied a single positive message is emitted instead.
    pub fn evaluate_str(&self, password: &str) -> StrengthResult {
        if password.is_empty() {
            return required_result();
        }

        let length = length_section(password);
        let variety = variety_section(password);
        let pattern = pattern_section(password);
        let dictionary = dictionary_section(password, &self.dictionary);

        let sub_scores = SubScores {
            length: length.score,
            variety: variety.score,
            pattern: pattern.score,
            dictionary: dictionary.score,
        };

        let mut feedback = length.feedback;
        feedback.extend(variety.feedback);
        feedback.extend(pattern.feedback);
        feedback.extend(dictionary.feedback);
        if feedback.is_empty() {
            feedback.push("Excellent password strength".to_string());
        }

        StrengthResult::from_parts(sub_scores, feedback)
    }

    /// Runs the evaluation and delivers the result over a channel.
    #[cfg(feature = "async")]
    pub async fn evaluate_tx(&self, password: &SecretString, tx: mpsc::Sender<StrengthResult>) {
        let result = self.evaluate(password);
        if let Err(_e) = tx.send(result).await {
            #[cfg(feature = "tracing")]
            tracing::error!("failed to send strength result: {}", _e);
        }
    }
}

fn required_result() -> StrengthResult {
    StrengthResult::from_parts(
        SubScores::default(),
        vec!["Password is required".to_string()],
    )
}
