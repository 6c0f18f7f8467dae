//! Custom widget components

mod editor_pane;
mod filter_bar;
mod header;
mod help;
mod metrics_panel;
mod notifications;
mod report_view;
mod status_bar;

pub use editor_pane::EditorPane;
pub use filter_bar::FilterBar;
pub use header::MainHeader;
pub use help::HelpOverlay;
pub use metrics_panel::MetricsPanel;
pub use notifications::NotificationStack;
pub use report_view::ReportView;
pub use status_bar::StatusBar;
