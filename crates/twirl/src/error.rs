// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types shared by every spinner operation.

use thiserror::Error;

/// Errors raised while configuring or driving a spinner.
///
/// Validation errors are raised at the call that introduced the bad value
/// (builder, setter, config load), never from the render thread.
#[derive(Debug, Error)]
pub enum SpinnerError {
    #[error("'{value}': unsupported {kind}. Supported {kind}s: {supported}")]
    InvalidArgument {
        kind: &'static str,
        value: String,
        supported: String,
    },

    #[error("Invalid UTF-8 input: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Unknown spinner '{0}'")]
    UnknownSpinner(String),

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to register signal handler: {0}")]
    Signal(#[source] std::io::Error),
}

impl SpinnerError {
    /// Build an `InvalidArgument` error listing every supported name.
    pub(crate) fn invalid(kind: &'static str, value: &str, supported: &[&str]) -> Self {
        SpinnerError::InvalidArgument {
            kind,
            value: value.to_string(),
            supported: supported.join(", "),
        }
    }
}

pub type Result<T> = std::result::Result<T, SpinnerError>;
