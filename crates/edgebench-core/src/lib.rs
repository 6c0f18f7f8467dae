//! # edgebench-core - Core Domain Types
//!
//! Foundation crate for edgebench. Provides the analysis service data model,
//! shared domain types, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Analysis Data Model (`analysis`)
//! - [`AnalysisRequest`], [`ExportRequest`] - Request bodies
//! - [`AnalysisBody`] - Parsed `/analyze` body (service error or report)
//! - [`AnalysisResponse`] - Metrics plus ordered [`FunctionReport`]s
//! - [`MetricsReport`], [`Suggestion`], [`EdgeCase`] - Report parts
//! - [`ExportBlob`] - Downloaded export artifact
//!
//! ### Domain Types (`types`)
//! - [`Theme`] - Light/dark theme and its editor scheme
//! - [`CategoryFilter`] - Active edge-case category selection
//! - [`ExportFormat`] - Supported export formats
//! - [`AppPhase`] - Application lifecycle phase
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use edgebench_core::prelude::*;
//! ```

pub mod analysis;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use analysis::{
    AnalysisBody, AnalysisRequest, AnalysisResponse, EdgeCase, ExportBlob, ExportRequest,
    FunctionArg, FunctionReport, MetricsReport, Suggestion,
};
pub use error::{Error, Result};
pub use types::{AppPhase, CategoryFilter, ExportFormat, Theme, ALL_CATEGORIES};
