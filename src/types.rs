//! Strength evaluation result types.

/// Qualitative strength band, a pure function of the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    /// Maps a 0–100 score to its band (inclusive upper bounds 20/40/60/80).
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=20 => Self::VeryWeak,
            21..=40 => Self::Weak,
            41..=60 => Self::Medium,
            61..=80 => Self::Strong,
            _ => Self::VeryStrong,
        }
    }

    /// Presentation color (hex) for this band.
    ///
    /// The enum is closed, so the match is total; there is no reachable
    /// "unknown" case to fall back to.
    pub fn color(self) -> &'static str {
        match self {
            Self::VeryWeak => "#e74c3c",
            Self::Weak => "#e67e22",
            Self::Medium => "#f1c40f",
            Self::Strong => "#2ecc71",
            Self::VeryStrong => "#27ae60",
        }
    }

    /// Human-readable label for this band.
    pub fn label(self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }
}

/// The four independent contributions summed into the composite score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubScores {
    /// 0, 10, 20 or 30.
    pub length: u8,
    /// 0–30.
    pub variety: u8,
    /// 0–20, penalized down from 20.
    pub pattern: u8,
    /// 0 or 20.
    pub dictionary: u8,
}

impl SubScores {
    pub fn total(&self) -> u8 {
        self.length + self.variety + self.pattern + self.dictionary
    }
}

/// Outcome of a strength evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthResult {
    /// 0–100, sum of the four sub-scores.
    pub score: u8,
    pub level: StrengthLevel,
    pub sub_scores: SubScores,
    /// Advisory messages, ordered length, variety, pattern, dictionary.
    pub feedback: Vec<String>,
    pub color: &'static str,
    pub label: &'static str,
}

impl StrengthResult {
    pub(crate) fn from_parts(sub_scores: SubScores, feedback: Vec<String>) -> Self {
        let score = sub_scores.total();
        let level = StrengthLevel::from_score(score);
        Self {
            score,
            level,
            sub_scores,
            feedback,
            color: level.color(),
            label: level.label(),
        }
    }
}
