//! Error types for acp-bench

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl BenchError {
    /// Error code for diagnostics
    pub fn error_code(&self) -> &'static str {
        match self {
            BenchError::Json(_) => "codec_error",
            BenchError::Io(_) => "io_error",
            BenchError::Config(_) => "invalid_args",
        }
    }

    /// Process exit code
    pub fn exit_code(&self) -> i32 {
        match self {
            BenchError::Config(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, BenchError>;
