//! Analysis report: model builder, rendered panel and control registry
//!
//! - `model`: [`ReportModel::build`] maps a response to renderer input
//! - `panel`: [`ReportPanel`] holds the rendered cards and their state
//! - `controls`: control ids and their registered bindings

pub mod controls;
pub mod model;
pub mod panel;

pub use controls::{CardId, CaseId, ControlBinding, ControlId, ControlRegistry};
pub use model::{FunctionModel, ReportModel};
pub use panel::{CaseCard, CopyLabel, FunctionCard, ReportPanel, COPIED_LABEL, COPY_LABEL};
