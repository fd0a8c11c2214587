use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shell syntax used for the generated command shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AliasStyle {
    /// fish abbreviations: `abbr --add name 'cmd'`
    Abbr,
    /// POSIX-ish aliases for bash and zsh: `alias name='cmd'`
    Alias,
}

impl Default for AliasStyle {
    fn default() -> Self {
        Self::Abbr
    }
}

impl fmt::Display for AliasStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AliasStyle::Abbr => write!(f, "abbr"),
            AliasStyle::Alias => write!(f, "alias"),
        }
    }
}

impl FromStr for AliasStyle {
    type Err = AliasStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "abbr" | "fish" => Ok(AliasStyle::Abbr),
            "alias" | "bash" | "zsh" => Ok(AliasStyle::Alias),
            _ => Err(AliasStyleError(s.to_string())),
        }
    }
}

impl AliasStyle {
    /// Render one shortcut definition binding `name` to `command`
    pub fn shortcut(&self, name: &str, command: &str) -> String {
        match self {
            AliasStyle::Abbr => format!("abbr --add {} '{}'", name, command),
            AliasStyle::Alias => format!("alias {}='{}'", name, command),
        }
    }
}

/// Unknown alias style name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasStyleError(pub String);

impl fmt::Display for AliasStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unsupported alias style: '{}'. Supported styles are: abbr, alias",
            self.0
        )
    }
}

impl std::error::Error for AliasStyleError {}
