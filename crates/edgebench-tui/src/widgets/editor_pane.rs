//! Editor pane widget
//!
//! Renders the editor buffer read-only, honoring the component options:
//! line numbers, line wrapping and tab size. Python tokens are colored with
//! the palette of the editor's color scheme.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use edgebench_app::editor::EditorAdapter;

use crate::theme::{styles, Palette};

const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

pub struct EditorPane<'a> {
    editor: &'a EditorAdapter,
}

impl<'a> EditorPane<'a> {
    pub fn new(editor: &'a EditorAdapter) -> Self {
        Self { editor }
    }

    fn palette(&self) -> &'static Palette {
        Palette::for_scheme(&self.editor.options().theme)
    }

    /// Display rows for the buffer, at most `max_rows`
    fn rows(&self, width: u16, max_rows: usize) -> Vec<Line<'static>> {
        let options = self.editor.options();
        let p = self.palette();
        let line_count = self.editor.line_count().max(1);
        let gutter = if options.line_numbers {
            line_count.to_string().len() + 1
        } else {
            0
        };
        let text_width = (width as usize).saturating_sub(gutter).max(1);

        let mut rows = Vec::new();
        let source = self.editor.get_value();
        let lines: Vec<&str> = if source.is_empty() {
            vec![""]
        } else {
            source.lines().collect()
        };

        for (index, line) in lines.into_iter().enumerate() {
            let cells = highlight(&expand_tabs(line, options.tab_size as usize), p);
            let chunks = if options.line_wrapping {
                wrap_cells(&cells, text_width)
            } else {
                vec![truncate_cells(&cells, text_width)]
            };

            for (chunk_index, chunk) in chunks.into_iter().enumerate() {
                if rows.len() >= max_rows {
                    return rows;
                }
                let mut spans = Vec::new();
                if options.line_numbers {
                    let number = if chunk_index == 0 {
                        format!("{:>w$} ", index + 1, w = gutter - 1)
                    } else {
                        " ".repeat(gutter)
                    };
                    spans.push(Span::styled(number, Style::default().fg(p.line_number)));
                }
                spans.extend(group_cells(&chunk));
                rows.push(Line::from(spans));
            }
        }
        rows
    }
}

impl Widget for EditorPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette();
        let options = self.editor.options();
        let title = format!(" editor · {} · {} ", options.mode, options.theme);
        let block = styles::glass_block(p, false)
            .title(Span::styled(title, styles::text_secondary(p)))
            .style(Style::default().bg(p.bg));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let rows = self.rows(inner.width, inner.height as usize);
        Paragraph::new(rows).render(inner, buf);
    }
}

/// One display cell: a character and its style
type Cell = (char, Style);

fn expand_tabs(line: &str, tab_size: usize) -> String {
    let tab_size = tab_size.max(1);
    let mut out = String::with_capacity(line.len());
    let mut column = 0;
    for ch in line.chars() {
        if ch == '\t' {
            let pad = tab_size - column % tab_size;
            out.extend(std::iter::repeat(' ').take(pad));
            column += pad;
        } else {
            out.push(ch);
            column += ch.width().unwrap_or(0);
        }
    }
    out
}

/// Style each character of one source line
fn highlight(line: &str, p: &Palette) -> Vec<Cell> {
    let chars: Vec<char> = line.chars().collect();
    let plain = styles::text_primary(p);
    let mut cells = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        if ch == '#' {
            let style = Style::default().fg(p.comment);
            cells.extend(chars[i..].iter().map(|&c| (c, style)));
            break;
        } else if ch == '"' || ch == '\'' {
            let style = Style::default().fg(p.string);
            let start = i;
            i += 1;
            while i < chars.len() && chars[i] != ch {
                if chars[i] == '\\' {
                    i += 1;
                }
                i += 1;
            }
            let end = (i + 1).min(chars.len());
            cells.extend(chars[start..end].iter().map(|&c| (c, style)));
            i = end;
        } else if ch.is_ascii_digit() {
            let style = Style::default().fg(p.number);
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '.' || chars[i] == '_') {
                cells.push((chars[i], style));
                i += 1;
            }
        } else if ch.is_alphabetic() || ch == '_' {
            let start = i;
            while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let style = if KEYWORDS.contains(&word.as_str()) {
                Style::default().fg(p.keyword)
            } else {
                plain
            };
            cells.extend(chars[start..i].iter().map(|&c| (c, style)));
        } else {
            cells.push((ch, plain));
            i += 1;
        }
    }
    cells
}

fn wrap_cells(cells: &[Cell], width: usize) -> Vec<Vec<Cell>> {
    let mut rows = vec![Vec::new()];
    let mut used = 0;
    for &(ch, style) in cells {
        let w = ch.width().unwrap_or(0);
        if used + w > width && used > 0 {
            rows.push(Vec::new());
            used = 0;
        }
        if let Some(row) = rows.last_mut() {
            row.push((ch, style));
        }
        used += w;
    }
    rows
}

fn truncate_cells(cells: &[Cell], width: usize) -> Vec<Cell> {
    let mut used = 0;
    cells
        .iter()
        .take_while(|(ch, _)| {
            used += ch.width().unwrap_or(0);
            used <= width
        })
        .copied()
        .collect()
}

/// Merge runs of equally styled cells into spans
fn group_cells(cells: &[Cell]) -> Vec<Span<'static>> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut text = String::new();
    let mut current: Option<Style> = None;
    for &(ch, style) in cells {
        if current.is_some_and(|s| s != style) {
            spans.push(Span::styled(std::mem::take(&mut text), current.unwrap_or_default()));
        }
        current = Some(style);
        text.push(ch);
    }
    if let Some(style) = current {
        spans.push(Span::styled(text, style));
    }
    spans
}
