//! Category filter bar
//!
//! One entry per filter option, prefixed with the digit that selects it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use edgebench_core::CategoryFilter;

use crate::theme::{styles, Palette};

pub struct FilterBar<'a> {
    options: &'a [CategoryFilter],
    active: &'a CategoryFilter,
    palette: &'a Palette,
}

impl<'a> FilterBar<'a> {
    pub fn new(options: &'a [CategoryFilter], active: &'a CategoryFilter, palette: &'a Palette) -> Self {
        Self {
            options,
            active,
            palette,
        }
    }

    fn line(&self) -> Line<'static> {
        let p = self.palette;
        let mut spans = vec![Span::raw(" ")];
        for (index, option) in self.options.iter().enumerate() {
            // Only the first ten options get a digit
            if index < 10 {
                spans.push(Span::styled(format!("{index}"), styles::keybinding(p)));
                spans.push(Span::raw(" "));
            }
            let style = if option == self.active {
                styles::focused_selected(p)
            } else {
                styles::text_secondary(p)
            };
            spans.push(Span::styled(format!(" {} ", option.label()), style));
            spans.push(Span::raw("  "));
        }
        Line::from(spans)
    }
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.palette, false).title(" filter ");
        Paragraph::new(self.line()).block(block).render(area, buf);
    }
}
