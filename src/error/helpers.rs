use super::{ErrorCode, ReportError};
use std::path::Path;

/// Extension trait for convenient error conversion
pub trait ErrorExt<T> {
    /// Convert to a configuration error about `path`
    fn to_config_error(self, message: impl Into<String>, path: &Path) -> Result<T, ReportError>;

    /// Convert to a write failure about `path`
    fn to_write_failure(self, message: impl Into<String>, path: &Path) -> Result<T, ReportError>;
}

impl<T, E> ErrorExt<T> for Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn to_config_error(self, message: impl Into<String>, path: &Path) -> Result<T, ReportError> {
        self.map_err(|e| {
            ReportError::config_with_code(
                ErrorCode::CONFIG_PATH_ERROR,
                message,
                Some(path.to_path_buf()),
            )
            .with_source(e)
        })
    }

    fn to_write_failure(self, message: impl Into<String>, path: &Path) -> Result<T, ReportError> {
        self.map_err(|e| {
            ReportError::write_failure(ErrorCode::WRITE_IO_ERROR, message, path).with_source(e)
        })
    }
}
