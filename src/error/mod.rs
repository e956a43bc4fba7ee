use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod codes;
pub mod helpers;

pub use codes::{describe_error_code, ErrorCode};
pub use helpers::ErrorExt;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// The unified error type for the report pipeline
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] Input not found: {}", .path.display())]
    InputNotFound {
        code: u16,
        path: PathBuf,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] Unreadable input {}: {message}", .path.display())]
    InputUnreadable {
        code: u16,
        message: String,
        path: PathBuf,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] Schema mismatch in {table}: {message}")]
    SchemaMismatch {
        code: u16,
        message: String,
        table: String,
        column: Option<String>,
    },

    #[error("[E{code:04}] Invalid value in {table}: {message}")]
    InvalidValue {
        code: u16,
        message: String,
        table: String,
        column: String,
        /// 1-based spreadsheet row, header included
        row: usize,
    },

    #[error("[E{code:04}] Failed to write {}: {message}", .path.display())]
    WriteFailure {
        code: u16,
        message: String,
        path: PathBuf,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] {message}")]
    Other {
        code: u16,
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },
}

impl ReportError {
    /// Create a configuration error with specific code and file
    pub fn config_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    pub fn input_not_found(path: impl Into<PathBuf>) -> Self {
        Self::InputNotFound {
            code: ErrorCode::INPUT_NOT_FOUND,
            path: path.into(),
            source: None,
        }
    }

    /// Create an unreadable-input error with specific code
    pub fn input_unreadable(code: u16, message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::InputUnreadable {
            code,
            message: message.into(),
            path: path.into(),
            source: None,
        }
    }

    /// Create a schema error for a missing column
    pub fn missing_column(table: impl Into<String>, column: impl Into<String>) -> Self {
        let column = column.into();
        Self::SchemaMismatch {
            code: ErrorCode::SCHEMA_MISSING_COLUMN,
            message: format!("expected column '{}' is missing", column),
            table: table.into(),
            column: Some(column),
        }
    }

    /// Create a schema error with specific code
    pub fn schema_with_code(code: u16, message: impl Into<String>, table: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            code,
            message: message.into(),
            table: table.into(),
            column: None,
        }
    }

    /// Create an invalid-value error pointing at a single cell
    pub fn invalid_value(
        code: u16,
        message: impl Into<String>,
        table: impl Into<String>,
        column: impl Into<String>,
        row: usize,
    ) -> Self {
        Self::InvalidValue {
            code,
            message: message.into(),
            table: table.into(),
            column: column.into(),
            row,
        }
    }

    /// Create a write error with specific code
    pub fn write_failure(code: u16, message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::WriteFailure {
            code,
            message: message.into(),
            path: path.into(),
            source: None,
        }
    }

    pub fn other_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Other {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error to this error
    ///
    /// Schema and value errors describe cell contents and carry no source;
    /// they are returned unchanged.
    pub fn with_source(mut self, source: impl Into<BoxedSource>) -> Self {
        match &mut self {
            Self::Config { source: src, .. }
            | Self::InputNotFound { source: src, .. }
            | Self::InputUnreadable { source: src, .. }
            | Self::WriteFailure { source: src, .. }
            | Self::Other { source: src, .. } => {
                *src = Some(source.into());
            }
            Self::SchemaMismatch { .. } | Self::InvalidValue { .. } => {}
        }
        self
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::InputNotFound { .. } => 3,
            Self::InputUnreadable { .. } => 4,
            Self::SchemaMismatch { .. } => 5,
            Self::InvalidValue { .. } => 6,
            Self::WriteFailure { .. } => 7,
            Self::Other { .. } => 1,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::InputNotFound { code, .. }
            | Self::InputUnreadable { code, .. }
            | Self::SchemaMismatch { code, .. }
            | Self::InvalidValue { code, .. }
            | Self::WriteFailure { code, .. }
            | Self::Other { code, .. } => *code,
        }
    }

    /// The file this error is about, when there is one
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Config { path, .. } => path.as_deref(),
            Self::InputNotFound { path, .. }
            | Self::InputUnreadable { path, .. }
            | Self::WriteFailure { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message, path, .. } => {
                if let Some(p) = path {
                    format!("Configuration problem in {}: {}", p.display(), message)
                } else {
                    format!("Configuration problem: {}", message)
                }
            }
            Self::InputNotFound { path, .. } => {
                format!("Input file not found: {}", path.display())
            }
            Self::InputUnreadable { message, path, .. } => {
                format!("Could not read {}: {}", path.display(), message)
            }
            Self::SchemaMismatch { message, table, .. } => {
                format!("The {} table does not look right: {}", table, message)
            }
            Self::InvalidValue {
                message,
                table,
                column,
                row,
                ..
            } => format!(
                "Bad value in the {} table, column '{}', row {}: {}",
                table, column, row, message
            ),
            Self::WriteFailure { message, path, .. } => {
                format!("Could not write {}: {}", path.display(), message)
            }
            Self::Other { message, .. } => message.clone(),
        }
    }

    /// Get a developer-friendly error message with full chain
    pub fn developer_message(&self) -> String {
        let mut msg = format!("{} ({})", self, describe_error_code(self.code()));
        let mut current = std::error::Error::source(self);
        while let Some(cause) = current {
            msg.push_str(&format!("\n  caused by: {}", cause));
            current = std::error::Error::source(cause);
        }
        msg
    }
}

/// Type alias for Results using ReportError
pub type Result<T> = std::result::Result<T, ReportError>;

/// Type alias for application Results (using anyhow for flexibility)
pub type AppResult<T> = anyhow::Result<T>;
