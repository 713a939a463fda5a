use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Per-repository failures never change the exit code; only problems that
/// stop the crawl from starting do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The crawl ran over every configured ecosystem
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors or bad option combinations)
    InvalidArguments = 2,
    /// Application error (unreadable config file, output directory cannot be created, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the crawl pipeline.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Missing API credential for metadata mode\n\n💡 Hint: Pass --token or set the GITHUB_TOKEN environment variable")]
    MissingCredential,

    #[error("Unknown ecosystem: {name}\n\n💡 Hint: Known ecosystems are: {known}")]
    UnknownEcosystem { name: String, known: String },

    #[error("Invalid repository identity: {value}\nReason: {reason}")]
    InvalidIdentity { value: String, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to create output directory: {path}\nDetails: {details}")]
    OutputDirectoryError { path: PathBuf, details: String },

    #[error("Code search request failed for {query}\nDetails: {details}")]
    SearchRequestError { query: String, details: String },

    #[error("Failed to clone {url}\nDetails: {details}")]
    CloneError { url: String, details: String },

    #[error("Failed to run {tool}\nDetails: {details}\n\n💡 Hint: Make sure {tool} is installed and on PATH, or pass its location explicitly")]
    ToolError { tool: String, details: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
