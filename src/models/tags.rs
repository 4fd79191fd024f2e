use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Long,
    Short,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Long => "long",
            Direction::Short => "short",
        }
    }
}

/// Strategy tag assigned by the trader at entry. Unrecognized tags from
/// imports fold into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Setup {
    Breakout,
    Pullback,
    Reversal,
    Trend,
    Range,
    Scalp,
    News,
    #[default]
    #[serde(other)]
    Other,
}

impl fmt::Display for Setup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Setup {
    pub fn as_str(&self) -> &'static str {
        match self {
            Setup::Breakout => "breakout",
            Setup::Pullback => "pullback",
            Setup::Reversal => "reversal",
            Setup::Trend => "trend",
            Setup::Range => "range",
            Setup::Scalp => "scalp",
            Setup::News => "news",
            Setup::Other => "other",
        }
    }
}

/// Psychological state logged alongside the trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Calm,
    Confident,
    Neutral,
    Anxious,
    Greedy,
    Fearful,
    Tired,
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Calm => "calm",
            Mood::Confident => "confident",
            Mood::Neutral => "neutral",
            Mood::Anxious => "anxious",
            Mood::Greedy => "greedy",
            Mood::Fearful => "fearful",
            Mood::Tired => "tired",
            Mood::Unknown => "unknown",
        }
    }
}

/// Market session the trader tagged the entry with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Session {
    London,
    NewYork,
    Tokyo,
    Sydney,
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Session {
    pub fn as_str(&self) -> &'static str {
        match self {
            Session::London => "london",
            Session::NewYork => "new_york",
            Session::Tokyo => "tokyo",
            Session::Sydney => "sydney",
            Session::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupQuality {
    APlus,
    Good,
    Average,
    Poor,
}

impl fmt::Display for SetupQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupQuality::APlus => write!(f, "a_plus"),
            SetupQuality::Good => write!(f, "good"),
            SetupQuality::Average => write!(f, "average"),
            SetupQuality::Poor => write!(f, "poor"),
        }
    }
}
