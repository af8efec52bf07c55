//! Structured error handling and exit codes.

use serde::Serialize;

use crate::clusters::ClusterError;
use crate::scanner::ScanError;

/// Exit codes for the hashcluster application.
///
/// - 0: Success (all clusters assembled and written)
/// - 1: General error (I/O failure while reading or writing)
/// - 2: Invalid input (missing input directory, unusable hash key)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitCode {
    /// Success: every cluster was assembled and written.
    Success = 0,
    /// General error: An unexpected error occurred.
    GeneralError = 1,
    /// Invalid input: the input layout or its contents cannot be clustered.
    InvalidInput = 2,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "HC000",
            Self::GeneralError => "HC001",
            Self::InvalidInput => "HC002",
        }
    }

    /// Pick the exit code for an error returned by [`crate::run_app`].
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        for cause in err.chain() {
            if let Some(scan) = cause.downcast_ref::<ScanError>() {
                if matches!(
                    scan,
                    ScanError::NotFound(_)
                        | ScanError::NotADirectory(_)
                        | ScanError::IsADirectory(_)
                        | ScanError::InvalidUtf8(_)
                ) {
                    return Self::InvalidInput;
                }
            }
            if cause.downcast_ref::<ClusterError>().is_some() {
                return Self::InvalidInput;
            }
        }
        Self::GeneralError
    }
}

/// Structured error information for JSON output.
#[derive(Debug, Serialize)]
pub struct StructuredError {
    /// The error code (e.g., "HC001")
    pub code: String,
    /// The exit code number
    pub exit_code: i32,
    /// Human-readable error message
    pub message: String,
    /// Causes below the top-level message, outermost first
    pub causes: Vec<String>,
}

impl StructuredError {
    /// Create a new structured error from an anyhow error and an exit code.
    #[must_use]
    pub fn new(err: &anyhow::Error, exit_code: ExitCode) -> Self {
        Self {
            code: exit_code.code_prefix().to_string(),
            exit_code: exit_code.as_i32(),
            message: err.to_string(),
            causes: err.chain().skip(1).map(ToString::to_string).collect(),
        }
    }
}
