//! Main render/view function (View in TEA pattern)


use edgebench_app::state::{AppState, UiMode};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::Palette;

/// Render the complete UI (View function in TEA)
///
/// Pure: reads the state and draws it, nothing else.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let palette = Palette::for_theme(state.session.theme);

    frame.render_widget(Block::default().style(Style::default().bg(palette.bg)), area);

    let areas = layout::create(area);

    let project_name = state.project_path.file_name().and_then(|n| n.to_str());
    frame.render_widget(widgets::MainHeader::new(project_name, palette), areas.header);

    frame.render_widget(widgets::EditorPane::new(&state.session.editor), areas.editor);

    frame.render_widget(
        widgets::MetricsPanel::new(state.report.metrics(), palette),
        areas.metrics,
    );

    let options = state.session.filter.options(state.report.categories());
    frame.render_widget(
        widgets::FilterBar::new(&options, state.session.filter.active(), palette),
        areas.filter_bar,
    );

    frame.render_widget(
        widgets::ReportView::new(&state.report, state.selected_control(), palette)
            .focused(state.ui_mode == UiMode::Normal),
        areas.report,
    );

    frame.render_widget(widgets::StatusBar::new(state, palette), areas.status);

    if !state.notifications.is_empty() {
        frame.render_widget(
            widgets::NotificationStack::new(&state.notifications, palette),
            areas.editor.union(areas.report),
        );
    }

    if state.ui_mode == UiMode::Help {
        frame.render_widget(widgets::HelpOverlay::new(palette), area);
    }
}
