use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Keyword used when a mood label is not recognised.
pub const DEFAULT_KEYWORD: &str = "inspiration";

/// How the user feels, which decides the keyword quotes are filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Anxious,
    Motivated,
    Tired,
    Lonely,
    Love,
}

impl Mood {
    /// All moods in display order. The first one is the default selection.
    pub const ALL: [Self; 8] = [
        Self::Happy,
        Self::Sad,
        Self::Angry,
        Self::Anxious,
        Self::Motivated,
        Self::Tired,
        Self::Lonely,
        Self::Love,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Sad => "Sad",
            Self::Angry => "Angry",
            Self::Anxious => "Anxious",
            Self::Motivated => "Motivated",
            Self::Tired => "Tired",
            Self::Lonely => "Lonely",
            Self::Love => "Love",
        }
    }

    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Happy => "happiness",
            Self::Sad => "hope",
            Self::Angry => "peace",
            Self::Anxious => "calm",
            Self::Motivated => "success",
            Self::Tired => "inspiration",
            Self::Lonely => "life",
            Self::Love => "love",
        }
    }

    /// The mood after this one, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The mood before this one, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl Default for Mood {
    fn default() -> Self {
        Self::ALL[0]
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mood {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::InvalidData(format!("unknown mood: {wanted}")))
    }
}

/// Keyword for a free-form mood label, falling back to [`DEFAULT_KEYWORD`].
pub fn keyword_for_label(label: &str) -> &'static str {
    label
        .parse::<Mood>()
        .map(Mood::keyword)
        .unwrap_or(DEFAULT_KEYWORD)
}
