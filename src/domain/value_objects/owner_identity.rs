use std::fmt;

/// Token that marks a checkout as belonging to the operator
///
/// The token is stored lower-cased; matching is a case-insensitive substring
/// search of the raw `.git/config` text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerIdentity(String);

impl OwnerIdentity {
    /// Create an identity from a token such as a GitHub user name
    pub fn new(token: impl AsRef<str>) -> Self {
        Self(token.as_ref().to_lowercase())
    }

    /// Whether `config_text` belongs to this identity
    pub fn owns(&self, config_text: &str) -> bool {
        is_owned_by(&self.0, config_text)
    }

    /// Lower-cased token
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ownership predicate over raw git config text
///
/// An empty identity never matches.
pub fn is_owned_by(identity: &str, config_text: &str) -> bool {
    if identity.is_empty() {
        return false;
    }
    config_text
        .to_lowercase()
        .contains(&identity.to_lowercase())
}
