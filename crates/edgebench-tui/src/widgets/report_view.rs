//! Report view: collapsible function cards with their edge-case sub-cards
//!
//! Each card header is a toggle control. An open card shows its signature,
//! the suggestions block (when the function has suggestions), and the cases
//! that pass the active filter, each with a copy control.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use edgebench_app::report::{CaseCard, ControlId, FunctionCard, ReportPanel};

use crate::theme::{styles, Palette};

pub struct ReportView<'a> {
    panel: &'a ReportPanel,
    selected: Option<ControlId>,
    focused: bool,
    palette: &'a Palette,
}

/// Rendered lines plus the index of the selected control's line
struct ReportLines {
    lines: Vec<Line<'static>>,
    selected_line: Option<usize>,
}

impl<'a> ReportView<'a> {
    pub fn new(panel: &'a ReportPanel, selected: Option<ControlId>, palette: &'a Palette) -> Self {
        Self {
            panel,
            selected,
            focused: true,
            palette,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn build_lines(&self) -> ReportLines {
        let mut out = ReportLines {
            lines: Vec::new(),
            selected_line: None,
        };
        for card in self.panel.cards() {
            self.push_card(card, &mut out);
        }
        out
    }

    fn push_card(&self, card: &FunctionCard, out: &mut ReportLines) {
        let p = self.palette;
        let control = ControlId::Toggle(card.id);
        let is_selected = self.selected == Some(control);
        if is_selected {
            out.selected_line = Some(out.lines.len());
        }

        let marker = if card.is_open() { "▾" } else { "▸" };
        let mut header = vec![
            Span::styled(format!(" {marker} "), styles::accent(p)),
            Span::styled(card.name.clone(), styles::accent_bold(p)),
        ];
        if let Some(complexity) = card.complexity {
            header.push(Span::styled(
                format!("  complexity {complexity}"),
                styles::text_muted(p),
            ));
        }
        let visible = card.visible_cases().count();
        header.push(Span::styled(
            format!("  {visible}/{} cases", card.cases.len()),
            styles::text_muted(p),
        ));
        out.lines.push(selectable(Line::from(header), is_selected, p));

        if !card.is_open() {
            return;
        }

        if let Some(signature) = &card.signature {
            out.lines.push(Line::from(vec![
                Span::raw("   "),
                Span::styled(signature.clone(), styles::text_secondary(p)),
            ]));
        }

        if let Some(suggestions) = &card.suggestions {
            out.lines.push(Line::from(Span::styled(
                "   Suggestions",
                styles::text_primary(p).add_modifier(ratatui::style::Modifier::BOLD),
            )));
            for suggestion in suggestions {
                out.lines.push(Line::from(vec![
                    Span::styled("   • ", styles::text_muted(p)),
                    Span::styled(format!("{}: ", suggestion.kind), styles::keybinding(p)),
                    Span::styled(suggestion.message.clone(), styles::text_primary(p)),
                ]));
            }
        }

        for case in card.visible_cases() {
            self.push_case(case, out);
        }
        out.lines.push(Line::default());
    }

    fn push_case(&self, case: &CaseCard, out: &mut ReportLines) {
        let p = self.palette;
        let is_selected = self.selected == Some(ControlId::Copy(case.id));
        if is_selected {
            out.selected_line = Some(out.lines.len());
        }

        let title = Line::from(vec![
            Span::raw("   "),
            Span::styled(format!("[{}]", case.category()), styles::badge(p)),
            Span::raw(" "),
            Span::styled(case.description.clone(), styles::text_primary(p)),
            Span::raw("  "),
            Span::styled(format!("[{}]", case.copy_label().text()), styles::keybinding(p)),
        ]);
        out.lines.push(selectable(title, is_selected, p));

        for code_line in case.code().lines() {
            out.lines.push(Line::from(vec![
                Span::styled("     │ ", styles::text_muted(p)),
                Span::styled(code_line.to_string(), Style::default().fg(p.string)),
            ]));
        }
    }
}

fn selectable(line: Line<'static>, selected: bool, p: &Palette) -> Line<'static> {
    if selected {
        line.style(styles::focused_selected(p))
    } else {
        line
    }
}

/// First line to draw so that `selected` stays inside a window of `height`
fn scroll_offset(selected: Option<usize>, height: usize) -> usize {
    match selected {
        Some(line) if height > 0 && line >= height => line + 1 - height,
        _ => 0,
    }
}

impl Widget for ReportView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, self.focused).title(" report ");
        let inner = block.inner(area);

        if self.panel.cards().is_empty() {
            let message = if self.panel.is_empty() {
                " No analysis yet. Press a to analyze the buffer."
            } else {
                " No functions found."
            };
            Paragraph::new(Line::from(Span::styled(message, styles::text_muted(p))))
                .block(block)
                .render(area, buf);
            return;
        }

        let ReportLines {
            lines,
            selected_line,
        } = self.build_lines();
        let offset = scroll_offset(selected_line, inner.height as usize);
        let offset = u16::try_from(offset).unwrap_or(u16::MAX);
        Paragraph::new(lines)
            .block(block)
            .scroll((offset, 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{state_with_report, test_case, test_function, test_metrics, TestTerminal};
    use crate::theme::palette::LIGHT;
    use edgebench_app::report::{CardId, CaseId};
    use edgebench_core::AnalysisResponse;

    fn render(panel: &ReportPanel, selected: Option<ControlId>, width: u16, height: u16) -> TestTerminal {
        let mut term = TestTerminal::with_size(width, height);
        term.render_widget(
            ReportView::new(panel, selected, &LIGHT),
            Rect::new(0, 0, width, height),
        );
        term
    }

    #[test]
    fn test_empty_panel_shows_placeholder() {
        let panel = ReportPanel::default();
        let term = render(&panel, None, 60, 5);
        assert!(term.buffer_contains("No analysis yet"));
    }

    #[test]
    fn test_closed_card_shows_only_header() {
        let state = state_with_report(crate::test_utils::test_response());
        let term = render(&state.report, None, 80, 10);

        assert!(term.buffer_contains("▸ f"));
        assert!(term.buffer_contains("2/2 cases"));
        assert!(!term.buffer_contains("Suggestions"));
        assert!(!term.buffer_contains("[boundary]"));
    }

    #[test]
    fn test_open_card_shows_suggestions_and_cases() {
        let mut state = state_with_report(crate::test_utils::test_response());
        state.report.toggle(CardId(0));
        let term = render(&state.report, None, 80, 16);

        assert!(term.buffer_contains("▾ f"));
        assert!(term.buffer_contains("Suggestions"));
        assert!(term.buffer_contains("documentation: Add a docstring"));
        assert!(term.buffer_contains("[boundary] zero"));
        assert!(term.buffer_contains("│ assert f(0) == 0"));
        assert_eq!(term.count("[Copy]"), 2);
    }

    #[test]
    fn test_no_suggestions_block_without_suggestions() {
        let response = AnalysisResponse {
            metrics: test_metrics(1),
            functions: vec![test_function(
                "g",
                Vec::new(),
                vec![test_case("empty", "boundary", "assert g([]) is None")],
            )],
        };
        let mut state = state_with_report(response);
        state.report.toggle(CardId(0));
        let term = render(&state.report, None, 80, 10);

        assert!(term.buffer_contains("[boundary] empty"));
        assert!(!term.buffer_contains("Suggestions"));
    }

    #[test]
    fn test_confirmed_copy_label_is_shown() {
        let mut state = state_with_report(crate::test_utils::test_response());
        state.report.toggle(CardId(0));
        state.report.confirm_copy(CaseId::new(0, 1));
        let term = render(&state.report, None, 80, 16);

        assert_eq!(term.count("[Copied!]"), 1);
        assert_eq!(term.count("[Copy]"), 1);
    }

    #[test]
    fn test_selected_control_scrolls_into_view() {
        let cases: Vec<_> = (0..20)
            .map(|i| test_case(&format!("case {i}"), "typical", "assert True"))
            .collect();
        let response = AnalysisResponse {
            metrics: test_metrics(1),
            functions: vec![test_function("h", Vec::new(), cases)],
        };
        let mut state = state_with_report(response);
        state.report.toggle(CardId(0));

        let term = render(&state.report, Some(ControlId::Copy(CaseId::new(0, 19))), 60, 8);
        assert!(term.buffer_contains("case 19"));
        assert!(!term.buffer_contains("▾ h"));
    }

    #[test]
    fn test_scroll_offset_keeps_selection_visible() {
        assert_eq!(scroll_offset(None, 5), 0);
        assert_eq!(scroll_offset(Some(3), 5), 0);
        assert_eq!(scroll_offset(Some(5), 5), 1);
        assert_eq!(scroll_offset(Some(12), 5), 8);
    }
}
