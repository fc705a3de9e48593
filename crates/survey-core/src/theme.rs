use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the three fixed visual proposals a respondent reviews.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Green,
    Purple,
    Blue,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl Theme {
    /// Display order used by the review tabs, the progress tracker and every
    /// aggregation bucket.
    pub const ALL: [Theme; 3] = [Theme::Green, Theme::Purple, Theme::Blue];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Green => "green",
            Theme::Purple => "purple",
            Theme::Blue => "blue",
        }
    }

    pub fn document_name(self) -> &'static str {
        match self {
            Theme::Green => "Green_proposal.pdf",
            Theme::Purple => "Purple_proposal.pdf",
            Theme::Blue => "Blue_proposal.pdf",
        }
    }

    pub fn hex_color(self) -> &'static str {
        match self {
            Theme::Green => "#22c55e",
            Theme::Purple => "#a855f7",
            Theme::Blue => "#3b82f6",
        }
    }

    /// Key into the string table for the short theme label.
    pub fn label_key(self) -> &'static str {
        match self {
            Theme::Green => "progress.green",
            Theme::Purple => "progress.purple",
            Theme::Blue => "progress.blue",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Theme::Green => 0,
            Theme::Purple => 1,
            Theme::Blue => 2,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "green" => Ok(Theme::Green),
            "purple" => Ok(Theme::Purple),
            "blue" => Ok(Theme::Blue),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Which themes the respondent has marked as viewed. Flags only ever move
/// from false to true.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewProgress {
    pub green: bool,
    pub purple: bool,
    pub blue: bool,
}

impl ViewProgress {
    pub fn is_viewed(&self, theme: Theme) -> bool {
        match theme {
            Theme::Green => self.green,
            Theme::Purple => self.purple,
            Theme::Blue => self.blue,
        }
    }

    /// Returns a copy with `theme` set. Already-set flags are left alone.
    pub fn with_viewed(mut self, theme: Theme) -> Self {
        match theme {
            Theme::Green => self.green = true,
            Theme::Purple => self.purple = true,
            Theme::Blue => self.blue = true,
        }
        self
    }

    pub fn all_viewed(&self) -> bool {
        self.green && self.purple && self.blue
    }

    pub fn viewed_count(&self) -> usize {
        Theme::ALL.iter().filter(|t| self.is_viewed(**t)).count()
    }

    pub fn remaining(&self) -> Vec<Theme> {
        Theme::ALL
            .into_iter()
            .filter(|t| !self.is_viewed(*t))
            .collect()
    }
}
