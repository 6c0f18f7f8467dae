//! Status bar widget
//!
//! Displays the request state, theme, export format, server, and the
//! position of the control cursor.

use edgebench_app::state::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, Palette};

pub struct StatusBar<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    fn state_indicator(&self) -> Span<'static> {
        let p = self.palette;
        let (label, color) = if self.state.is_analyzing() {
            ("◐ Analyzing", p.status_yellow)
        } else if self.state.is_exporting() {
            ("◐ Exporting", p.status_blue)
        } else {
            ("● Ready", p.status_green)
        };
        Span::styled(label, ratatui::style::Style::default().fg(color))
    }

    fn cursor_info(&self) -> Option<Span<'static>> {
        let total = self.state.report.control_order().len();
        (total > 0).then(|| {
            Span::styled(
                format!("{}/{}", self.state.cursor + 1, total),
                styles::text_secondary(self.palette),
            )
        })
    }

    fn build_segments(&self) -> Vec<Span<'static>> {
        let p = self.palette;
        let separator = || Span::styled(" │ ", styles::text_muted(p));

        let mut segments = vec![Span::raw(" "), self.state_indicator()];

        segments.push(separator());
        segments.push(Span::styled(
            format!("theme {}", self.state.session.theme),
            styles::text_secondary(p),
        ));

        segments.push(separator());
        segments.push(Span::styled(
            format!("export {}", self.state.export_format),
            styles::text_secondary(p),
        ));

        segments.push(separator());
        segments.push(Span::styled(
            self.state.settings.server.base_url.clone(),
            styles::text_muted(p),
        ));

        if let Some(cursor) = self.cursor_info() {
            segments.push(separator());
            segments.push(cursor);
        }

        if let Some(path) = &self.state.last_export {
            segments.push(separator());
            segments.push(Span::styled(
                format!("saved {}", path.display()),
                styles::text_muted(p),
            ));
        }

        segments
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = ratatui::style::Style::default().bg(self.palette.card_bg);
        Paragraph::new(Line::from(self.build_segments()))
            .style(style)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_state, state_with_report, test_response, TestTerminal};
    use crate::theme::palette::LIGHT;
    use std::path::PathBuf;

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::with_size(120, 1);
        term.render_widget(StatusBar::new(state, &LIGHT), Rect::new(0, 0, 120, 1));
        term
    }

    #[test]
    fn test_idle_state_shows_ready() {
        let state = create_test_state();
        let term = render(&state);

        assert!(term.buffer_contains("● Ready"));
        assert!(term.buffer_contains("theme light"));
        assert!(term.buffer_contains("export pytest"));
        assert!(term.buffer_contains("http://127.0.0.1:5000"));
    }

    #[test]
    fn test_in_flight_analysis_is_shown() {
        let mut state = create_test_state();
        state.analyses_in_flight = 1;
        assert!(render(&state).buffer_contains("Analyzing"));
    }

    #[test]
    fn test_cursor_position_with_report() {
        let state = state_with_report(test_response());
        assert!(render(&state).buffer_contains("1/1"));
    }

    #[test]
    fn test_last_export_path() {
        let mut state = create_test_state();
        state.last_export = Some(PathBuf::from("/tmp/test_cases.pytest.py"));
        assert!(render(&state).buffer_contains("saved /tmp/test_cases.pytest.py"));
    }
}
