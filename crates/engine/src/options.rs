use std::fmt;
use std::str::FromStr;

use crate::classify;

/// Which files a walk pass picks up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `*`: every file, with or without an extension.
    Any,
    /// Files that have an extension and whose name ends with this text.
    ///
    /// The text is compared as given, so `go` also matches `demo.cargo`.
    Suffix(String),
}

impl Selector {
    #[must_use]
    pub fn matches(&self, file_name: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Suffix(suffix) => {
                classify::extension(file_name).is_some() && file_name.ends_with(suffix.as_str())
            }
        }
    }
}

impl FromStr for Selector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err("empty extension selector".to_string()),
            "*" => Ok(Self::Any),
            other => Ok(Self::Suffix(other.to_string())),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("*"),
            Self::Suffix(suffix) => f.write_str(suffix),
        }
    }
}
