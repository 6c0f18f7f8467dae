//! Analysis service contract

use edgebench_core::{AnalysisResponse, Error, ExportBlob, ExportFormat, Result};

/// Remote analysis operations.
///
/// Each call issues at most one request and never retries; failures are
/// surfaced to the caller as-is.
#[trait_variant::make(AnalysisService: Send)]
pub trait LocalAnalysisService {
    /// Analyze a source buffer.
    ///
    /// Fails with [`Error::EmptyInput`] before any request when the buffer is
    /// blank, [`Error::Transport`] when the round-trip fails, and
    /// [`Error::Analysis`] when the service reports an error.
    async fn analyze(&self, code: &str) -> Result<AnalysisResponse>;

    /// Export generated tests for a source buffer in `format`.
    async fn export_tests(&self, code: &str, format: ExportFormat) -> Result<ExportBlob>;
}

/// Reject a buffer that is empty after trimming whitespace.
pub fn require_code(code: &str) -> Result<()> {
    if code.trim().is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(())
}
