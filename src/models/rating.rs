//! Self-reported recall confidence for a studied card.
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceRating {
    Again,
    Hard,
    Good,
    Easy,
}

impl ConfidenceRating {
    pub const ALL: [ConfidenceRating; 4] = [
        ConfidenceRating::Again,
        ConfidenceRating::Hard,
        ConfidenceRating::Good,
        ConfidenceRating::Easy,
    ];

    /// Parses a lowercase label. Anything else yields `None`, which the
    /// scheduler treats as the default branch rather than an error.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "again" => Some(Self::Again),
            "hard" => Some(Self::Hard),
            "good" => Some(Self::Good),
            "easy" => Some(Self::Easy),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Again => "again",
            Self::Hard => "hard",
            Self::Good => "good",
            Self::Easy => "easy",
        }
    }

    /// Button copy shown next to each rating.
    ///
    /// `Again` advertises "~2h" but its 0.1 day interval floors to zero whole
    /// days, so the card is due again immediately.
    pub fn hint(self) -> &'static str {
        match self {
            Self::Again => "~2h",
            Self::Hard => "1d",
            Self::Good => "3d",
            Self::Easy => "7d",
        }
    }
}

impl fmt::Display for ConfidenceRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
