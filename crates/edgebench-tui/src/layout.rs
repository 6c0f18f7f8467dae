//! Screen layout definitions for the TUI
//!
//! Header on top, status bar at the bottom. Between them the editor pane on
//! the left and the report column (metrics, filter bar, cards) on the right.
//! Narrow terminals stack the editor above the report column.

use ratatui::layout::{Constraint, Layout, Rect};

/// Below this width the editor and report are stacked
pub const STACK_BELOW_WIDTH: u16 = 100;

const METRICS_HEIGHT: u16 = 4;
const FILTER_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub editor: Rect,
    pub metrics: Rect,
    pub filter_bar: Rect,
    pub report: Rect,
    pub status: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let [header, body, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(6),
        Constraint::Length(1),
    ])
    .areas(area);

    let [editor, report_column] = if area.width < STACK_BELOW_WIDTH {
        Layout::vertical([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(body)
    } else {
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(body)
    };

    let [metrics, filter_bar, report] = Layout::vertical([
        Constraint::Length(METRICS_HEIGHT),
        Constraint::Length(FILTER_HEIGHT),
        Constraint::Min(3),
    ])
    .areas(report_column);

    ScreenAreas {
        header,
        editor,
        metrics,
        filter_bar,
        report,
        status,
    }
}

/// Centered rectangle for overlays, clamped to `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_layout_puts_editor_left() {
        let layout = create(Rect::new(0, 0, 120, 40));

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.status.y, 39);
        assert_eq!(layout.editor.y, layout.metrics.y);
        assert!(layout.editor.x < layout.metrics.x);
        assert_eq!(layout.metrics.height, METRICS_HEIGHT);
        assert_eq!(layout.filter_bar.height, FILTER_HEIGHT);
    }

    #[test]
    fn test_narrow_layout_stacks_editor_above_report() {
        let layout = create(Rect::new(0, 0, 80, 40));

        assert_eq!(layout.editor.x, layout.metrics.x);
        assert!(layout.editor.y < layout.metrics.y);
    }

    #[test]
    fn test_report_column_is_contiguous() {
        let layout = create(Rect::new(0, 0, 120, 40));

        assert_eq!(layout.filter_bar.y, layout.metrics.y + layout.metrics.height);
        assert_eq!(layout.report.y, layout.filter_bar.y + layout.filter_bar.height);
        assert_eq!(
            layout.metrics.height + layout.filter_bar.height + layout.report.height,
            layout.editor.height
        );
    }

    #[test]
    fn test_centered_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered(area, 40, 4), Rect::new(0, 3, 20, 4));
    }
}
