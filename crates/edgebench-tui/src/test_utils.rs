//! Test utilities for TUI rendering verification
//!
//! Provides helpers for testing widgets and full-screen rendering
//! using ratatui's TestBackend.
//!
//! # Example
//!
//! ```ignore
//! let mut term = TestTerminal::new();
//! term.render_widget(MetricsPanel::new(Some(&metrics), &LIGHT), term.area());
//! assert!(term.buffer_contains("Total complexity"));
//! ```

use edgebench_app::handler::update;
use edgebench_app::{AppState, Message};
use edgebench_core::{AnalysisResponse, EdgeCase, FunctionReport, MetricsReport, Suggestion};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 120;
pub const TEST_HEIGHT: u16 = 40;

/// Compact terminal for testing the stacked layout
pub const COMPACT_WIDTH: u16 = 60;
pub const COMPACT_HEIGHT: u16 = 24;

/// Test utility wrapper around ratatui's TestBackend terminal.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame with a custom rendering function (like `render::view`)
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    /// Count non-overlapping occurrences of `text` across all lines
    pub fn count(&self, text: &str) -> usize {
        buffer_to_string(self.buffer()).matches(text).count()
    }

    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&get_line_content(buffer, y));
        result.push('\n');
    }
    result
}

fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

pub fn test_metrics(total_complexity: i64) -> MetricsReport {
    MetricsReport {
        total_complexity,
        h1: Some(2.0),
        h2: Some(2.0),
        n1: Some(3.0),
        n2: Some(3.0),
        total_lines: None,
        complexity_rank: None,
    }
}

pub fn test_case(description: &str, category: &str, code: &str) -> EdgeCase {
    EdgeCase {
        description: description.to_string(),
        category: category.to_string(),
        code: code.to_string(),
    }
}

pub fn test_function(name: &str, suggestions: Vec<Suggestion>, cases: Vec<EdgeCase>) -> FunctionReport {
    FunctionReport {
        name: name.to_string(),
        suggestions: Some(suggestions),
        edge_cases: cases,
        complexity: None,
        args: Vec::new(),
        returns: None,
    }
}

/// Two cases in two categories plus one suggestion
pub fn test_response() -> AnalysisResponse {
    AnalysisResponse {
        metrics: test_metrics(1),
        functions: vec![test_function(
            "f",
            vec![Suggestion {
                kind: "documentation".into(),
                message: "Add a docstring".into(),
            }],
            vec![
                test_case("zero", "boundary", "assert f(0) == 0"),
                test_case("one", "typical", "assert f(1) == 1"),
            ],
        )],
    }
}

pub fn create_test_state() -> AppState {
    AppState::new()
}

/// State with `response` applied through the update loop
pub fn state_with_report(response: AnalysisResponse) -> AppState {
    let mut state = create_test_state();
    let request = state.session.requests.issue();
    update(&mut state, Message::AnalysisCompleted { request, response });
    state
}
