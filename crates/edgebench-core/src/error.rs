//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Analysis Service Errors
    // ─────────────────────────────────────────────────────────────
    /// The editor buffer is blank; no request was issued.
    #[error("Please enter some Python code")]
    EmptyInput,

    /// Network or protocol failure talking to the analysis service.
    #[error("Error analyzing code: {message}")]
    Transport { message: String },

    /// The service answered with an `error` field. Shown verbatim.
    #[error("{message}")]
    Analysis { message: String },

    /// The export request failed.
    #[error("Error exporting tests{}", export_suffix(.detail))]
    Export { detail: Option<String> },

    // ─────────────────────────────────────────────────────────────
    // Editor / Clipboard Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Editor error: {message}")]
    Editor { message: String },

    #[error("Clipboard error: {message}")]
    Clipboard { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel closed unexpectedly")]
    ChannelClosed,
}

fn export_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {d}"))
        .unwrap_or_default()
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn analysis(message: impl Into<String>) -> Self {
        Self::Analysis {
            message: message.into(),
        }
    }

    /// Export failure without further detail (non-success HTTP status).
    pub fn export() -> Self {
        Self::Export { detail: None }
    }

    /// Export failure carrying the underlying cause.
    pub fn export_with(detail: impl Into<String>) -> Self {
        Self::Export {
            detail: Some(detail.into()),
        }
    }

    pub fn editor(message: impl Into<String>) -> Self {
        Self::Editor {
            message: message.into(),
        }
    }

    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error should trigger application exit
    ///
    /// User-action failures are reported and the app keeps running. A
    /// terminal that cannot be taken back or a closed message channel is not
    /// recoverable.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::TerminalInit(_) | Error::ChannelClosed)
    }
}
