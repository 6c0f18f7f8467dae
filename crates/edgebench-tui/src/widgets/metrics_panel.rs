//! Metrics panel: total complexity and the Halstead counts.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use edgebench_core::MetricsReport;

use crate::theme::{styles, Palette};

/// Shown for a count the service did not report
const MISSING: &str = "-";

pub struct MetricsPanel<'a> {
    metrics: Option<&'a MetricsReport>,
    palette: &'a Palette,
}

impl<'a> MetricsPanel<'a> {
    pub fn new(metrics: Option<&'a MetricsReport>, palette: &'a Palette) -> Self {
        Self { metrics, palette }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        let Some(m) = self.metrics else {
            return vec![Line::from(Span::styled(
                " Run an analysis to see metrics",
                styles::text_muted(p),
            ))];
        };

        let field = |label: &str, value: String| {
            vec![
                Span::styled(format!(" {label}: "), styles::text_secondary(p)),
                Span::styled(value, styles::accent_bold(p)),
            ]
        };

        let mut first = field("Total complexity", m.total_complexity.to_string());
        if let Some(rank) = &m.complexity_rank {
            first.push(Span::styled(format!(" ({rank})"), styles::text_muted(p)));
        }
        if let Some(lines) = m.total_lines {
            first.extend(field("Lines", lines.to_string()));
        }

        let mut second = Vec::new();
        for (label, value) in [("h1", m.h1), ("h2", m.h2), ("N1", m.n1), ("N2", m.n2)] {
            let value = value.map_or_else(|| MISSING.to_string(), |v| v.to_string());
            second.extend(field(label, value));
        }

        vec![Line::from(first), Line::from(second)]
    }
}

impl Widget for MetricsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.palette, false).title(" metrics ");
        Paragraph::new(self.lines()).block(block).render(area, buf);
    }
}
