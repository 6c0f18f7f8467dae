//! Header bar widget
//!
//! Shows the app title, the project name, and the main keybindings.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{styles, Palette};

const SHORTCUTS: [(&str, &str); 6] = [
    ("a", "analyze"),
    ("e", "edit"),
    ("t", "theme"),
    ("x", "export"),
    ("?", "help"),
    ("q", "quit"),
];

pub struct MainHeader<'a> {
    project_name: Option<&'a str>,
    palette: &'a Palette,
}

impl<'a> MainHeader<'a> {
    pub fn new(project_name: Option<&'a str>, palette: &'a Palette) -> Self {
        Self {
            project_name,
            palette,
        }
    }

    fn shortcuts_line(&self) -> Line<'static> {
        let p = self.palette;
        let mut spans = Vec::with_capacity(SHORTCUTS.len() * 3);
        for (key, label) in SHORTCUTS {
            spans.push(Span::styled(key, styles::keybinding(p)));
            spans.push(Span::styled(format!(" {label}"), styles::text_muted(p)));
            spans.push(Span::raw("  "));
        }
        Line::from(spans)
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled("edgebench", styles::accent_bold(p)),
            Span::styled(" / ", styles::text_muted(p)),
            Span::styled(
                self.project_name.unwrap_or("untitled").to_string(),
                styles::text_secondary(p),
            ),
        ]);
        let title_width = title.width() as u16;
        buf.set_line(inner.x, inner.y, &title, inner.width);

        // Shortcuts are right-aligned and dropped when they would overlap
        let shortcuts = self.shortcuts_line();
        let shortcuts_width = shortcuts.width() as u16;
        if title_width + shortcuts_width + 2 <= inner.width {
            let x = inner.x + inner.width - shortcuts_width;
            buf.set_line(x, inner.y, &shortcuts, shortcuts_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::LIGHT;

    #[test]
    fn test_header_shows_title_and_project() {
        let mut term = TestTerminal::new();
        let area = Rect::new(0, 0, 120, 3);
        term.render_widget(MainHeader::new(Some("shop"), &LIGHT), area);

        assert!(term.line_contains(1, "edgebench / shop"));
        assert!(term.line_contains(1, "a analyze"));
    }

    #[test]
    fn test_header_drops_shortcuts_when_narrow() {
        let mut term = TestTerminal::with_size(30, 3);
        term.render_widget(MainHeader::new(Some("shop"), &LIGHT), Rect::new(0, 0, 30, 3));

        assert!(term.buffer_contains("edgebench"));
        assert!(!term.buffer_contains("analyze"));
    }
}
