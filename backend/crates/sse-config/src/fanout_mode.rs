use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Configured fan-out strategy for broadcast groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FanoutMode {
    #[default]
    Concurrent,
    Sequential,
}

impl FromStr for FanoutMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "concurrent" => Ok(Self::Concurrent),
            "sequential" => Ok(Self::Sequential),
            _ => Err(()),
        }
    }
}

impl fmt::Display for FanoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Concurrent => f.write_str("concurrent"),
            Self::Sequential => f.write_str("sequential"),
        }
    }
}
