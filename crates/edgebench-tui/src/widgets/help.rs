//! Help overlay listing the key bindings.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use crate::layout::centered;
use crate::theme::{styles, Palette};

const BINDINGS: &[(&str, &str)] = &[
    ("a / Ctrl+R", "analyze the buffer"),
    ("e", "edit the buffer in $EDITOR"),
    ("t", "toggle light/dark theme"),
    ("j k / ↑ ↓", "move between controls"),
    ("g G / Home End", "first / last control"),
    ("Enter / Space", "activate control"),
    ("c", "copy the selected case"),
    ("f F / Tab", "next / previous filter"),
    ("0-9", "select filter"),
    ("x", "export tests"),
    ("p", "cycle export format"),
    ("? / F1", "toggle this help"),
    ("q / Ctrl+C", "quit"),
];

pub struct HelpOverlay<'a> {
    palette: &'a Palette,
}

impl<'a> HelpOverlay<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let key_width = BINDINGS.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, action)| {
                Line::from(vec![
                    Span::styled(format!(" {key:<key_width$}  "), styles::keybinding(p)),
                    Span::styled(*action, styles::text_primary(p)),
                ])
            })
            .collect();

        let height = lines.len() as u16 + 2;
        let rect = centered(area, 56, height);
        Clear.render(rect, buf);
        Paragraph::new(lines)
            .block(styles::modal_block(p, " keys "))
            .render(rect, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;

    #[test]
    fn test_lists_bindings() {
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(HelpOverlay::new(&DARK), area);

        assert!(term.buffer_contains("keys"));
        assert!(term.buffer_contains("analyze the buffer"));
        assert!(term.buffer_contains("cycle export format"));
    }
}
