use std::fmt;

/// Shell variable name derived from a repository name
///
/// Upper-cases the name and replaces `-` and `.` with `_`. Other characters
/// are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnvVarName(String);

impl EnvVarName {
    /// Derive the variable name for a repository
    pub fn from_repo_name(name: &str) -> Self {
        let ident = name
            .to_uppercase()
            .chars()
            .map(|c| match c {
                '-' | '.' => '_',
                other => other,
            })
            .collect();
        Self(ident)
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EnvVarName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EnvVarName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
