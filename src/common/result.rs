use crate::common::error::RosterError;

/// Result alias used across the crate
///
/// # Examples
///
/// ```
/// use repo_roster::common::result::RosterResult;
/// use repo_roster::common::error::RosterError;
///
/// fn example_function() -> RosterResult<String> {
///     Ok("success".to_string())
/// }
///
/// fn example_with_error() -> RosterResult<()> {
///     Err(RosterError::config_error("identity must not be empty"))
/// }
/// ```
pub type RosterResult<T> = Result<T, RosterError>;

/// Conversion helpers from foreign `Result` types
pub trait ResultExt<T, E> {
    /// Convert an I/O style error into a file system error tied to `path`
    ///
    /// ```
    /// use repo_roster::common::result::{RosterResult, ResultExt};
    /// use std::path::PathBuf;
    ///
    /// let result: Result<String, std::io::Error> = Err(std::io::Error::new(
    ///     std::io::ErrorKind::NotFound, "file not found"
    /// ));
    /// let converted: RosterResult<String> =
    ///     result.with_filesystem_error("Failed to read", Some(PathBuf::from("/x")));
    /// assert!(converted.is_err());
    /// ```
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> RosterResult<T>
    where
        E: Into<std::io::Error>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> RosterResult<T>
    where
        E: Into<std::io::Error>,
    {
        self.map_err(|e| RosterError::filesystem_error_with_source(message, path, e.into()))
    }
}

/// Helpers for chaining `RosterResult` values
pub trait RosterResultExt<T> {
    /// Log the error at `warn` level and turn the result into an `Option`
    fn to_option_logged(self) -> Option<T>;
}

impl<T> RosterResultExt<T> for RosterResult<T> {
    fn to_option_logged(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        }
    }
}
