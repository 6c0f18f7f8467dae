//! # edgebench-client - Analysis Service Client
//!
//! Talks to the remote analysis service over HTTP and maps transport and
//! payload failures onto [`edgebench_core::Error`].
//!
//! Depends on [`edgebench_core`] for the data model and error handling.
//!
//! ## Public API
//!
//! ### Service Contract
//! - [`AnalysisService`] - Async `analyze` / `export_tests` contract (`Send` futures)
//! - [`LocalAnalysisService`] - Same contract without the `Send` bound
//! - [`require_code()`] - Blank-buffer guard applied before any request
//!
//! ### HTTP Implementation
//! - [`HttpAnalysisClient`] - `reqwest`-based client for `POST /analyze` and `POST /export`

pub mod http;
pub mod service;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use http::{HttpAnalysisClient, DEFAULT_TIMEOUT};
pub use service::{require_code, AnalysisService, LocalAnalysisService};
