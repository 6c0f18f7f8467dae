//! Editor adapter and external editor launch.
//!
//! [`EditorAdapter`] is the boundary to the text-editing component: it owns
//! the buffer and the component options and exposes `create`, `get_value`,
//! `set_value` and `set_option`. Actual editing happens in the user's editor
//! on a temporary file whose contents are read back with `set_value`.

use std::env;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;

use tempfile::NamedTempFile;

use edgebench_core::prelude::*;
use edgebench_core::Theme;

/// Buffer shown before the user has typed anything.
pub const SAMPLE_CODE: &str = r#"def calculate_discount(price: float, discount_percent: float) -> float:
    """Apply a percentage discount to a price."""
    if price < 0:
        raise ValueError("Price cannot be negative")
    if not 0 <= discount_percent <= 100:
        raise ValueError("Discount must be between 0 and 100")
    discount = price * (discount_percent / 100)
    return round(price - discount, 2)
"#;

// ─────────────────────────────────────────────────────────────────────────────
// Options
// ─────────────────────────────────────────────────────────────────────────────

/// Value accepted by [`EditorAdapter::set_option`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Text(String),
    Flag(bool),
    Number(u32),
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        Self::Number(value)
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Flag(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Editor component options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorOptions {
    pub mode: String,
    /// Color scheme name (`github` or `monokai`)
    pub theme: String,
    pub line_numbers: bool,
    pub indent_unit: u32,
    pub auto_close_brackets: bool,
    pub match_brackets: bool,
    pub line_wrapping: bool,
    pub tab_size: u32,
}

impl EditorOptions {
    /// Python editing defaults with the color scheme of `theme`
    pub fn for_theme(theme: Theme) -> Self {
        Self {
            mode: "python".to_string(),
            theme: theme.editor_scheme().to_string(),
            line_numbers: true,
            indent_unit: 4,
            auto_close_brackets: true,
            match_brackets: true,
            line_wrapping: true,
            tab_size: 4,
        }
    }

    pub fn get(&self, name: &str) -> Option<OptionValue> {
        let value = match name {
            "mode" => OptionValue::Text(self.mode.clone()),
            "theme" => OptionValue::Text(self.theme.clone()),
            "lineNumbers" => OptionValue::Flag(self.line_numbers),
            "indentUnit" => OptionValue::Number(self.indent_unit),
            "autoCloseBrackets" => OptionValue::Flag(self.auto_close_brackets),
            "matchBrackets" => OptionValue::Flag(self.match_brackets),
            "lineWrapping" => OptionValue::Flag(self.line_wrapping),
            "tabSize" => OptionValue::Number(self.tab_size),
            _ => return None,
        };
        Some(value)
    }

    fn set(&mut self, name: &str, value: OptionValue) -> Result<()> {
        match (name, value) {
            ("mode", OptionValue::Text(v)) => self.mode = v,
            ("theme", OptionValue::Text(v)) => self.theme = v,
            ("lineNumbers", OptionValue::Flag(v)) => self.line_numbers = v,
            ("indentUnit", OptionValue::Number(v)) => self.indent_unit = v,
            ("autoCloseBrackets", OptionValue::Flag(v)) => self.auto_close_brackets = v,
            ("matchBrackets", OptionValue::Flag(v)) => self.match_brackets = v,
            ("lineWrapping", OptionValue::Flag(v)) => self.line_wrapping = v,
            ("tabSize", OptionValue::Number(v)) => self.tab_size = v.max(1),
            (name, value) if self.get(name).is_some() => {
                return Err(Error::editor(format!(
                    "invalid value `{value}` for option `{name}`"
                )))
            }
            (name, _) => return Err(Error::editor(format!("unknown option `{name}`"))),
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Adapter
// ─────────────────────────────────────────────────────────────────────────────

/// The editor component as seen by the rest of the application
#[derive(Debug, Clone)]
pub struct EditorAdapter {
    value: String,
    options: EditorOptions,
    /// Bumped on every `set_value`
    revision: u64,
}

impl EditorAdapter {
    pub fn create(options: EditorOptions, initial: impl Into<String>) -> Self {
        Self {
            value: initial.into(),
            options,
            revision: 0,
        }
    }

    pub fn get_value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, text: impl Into<String>) {
        self.value = text.into();
        self.revision += 1;
    }

    /// Change one option by its component name (`theme`, `tabSize`, ...).
    ///
    /// Unknown names and values of the wrong kind are rejected and leave the
    /// options unchanged.
    pub fn set_option(&mut self, name: &str, value: impl Into<OptionValue>) -> Result<()> {
        self.options.set(name, value.into())
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn line_count(&self) -> usize {
        self.value.lines().count()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// External editor
// ─────────────────────────────────────────────────────────────────────────────

/// Something that lets the user edit a buffer and returns the new text
pub trait EditorLauncher: Send {
    fn edit(&mut self, text: &str) -> Result<String>;
}

/// Pick the editor command: configured, then `$VISUAL`, `$EDITOR`, `vi`
pub fn resolve_editor_command(configured: Option<&str>) -> String {
    configured
        .map(str::to_string)
        .filter(|value| !value.trim().is_empty())
        .or_else(|| env::var("VISUAL").ok().filter(|v| !v.trim().is_empty()))
        .or_else(|| env::var("EDITOR").ok().filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| "vi".to_owned())
}

/// Runs a shell editor command on a temporary `.py` file
#[derive(Debug, Clone)]
pub struct ExternalEditor {
    command: String,
}

impl ExternalEditor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Write `text` to a temp file, wait for the editor to exit and read the
    /// file back. The temp file is removed on every path.
    pub fn run(&self, text: &str) -> Result<String> {
        let temp = buffer_file(text)?;
        launch_editor_command(&self.command, temp.path())?;
        let edited = fs::read_to_string(temp.path()).map_err(|e| {
            Error::editor(format!(
                "failed to read back {}: {e}",
                temp.path().display()
            ))
        })?;
        debug!("Editor returned {} bytes", edited.len());
        Ok(edited)
    }
}

impl EditorLauncher for ExternalEditor {
    fn edit(&mut self, text: &str) -> Result<String> {
        self.run(text)
    }
}

/// Exclusively created `edgebench-*.py` file holding `content`, deleted on drop
fn buffer_file(content: &str) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("edgebench-")
        .suffix(".py")
        .tempfile()
        .map_err(|e| Error::editor(format!("failed to create buffer file: {e}")))?;
    file.write_all(content.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| {
            Error::editor(format!(
                "failed to write buffer file {}: {e}",
                file.path().display()
            ))
        })?;
    Ok(file)
}

fn launch_editor_command(command: &str, path: &Path) -> Result<()> {
    let path_text = path.to_string_lossy();
    if path_text.starts_with('-') {
        return Err(Error::editor("invalid editor temp path"));
    }

    info!("Launching editor: {}", command);
    let status = Command::new("sh")
        .arg("-lc")
        .arg(format!("{command} {}", shell_single_quote(&path_text)))
        .status()
        .map_err(|e| Error::editor(format!("failed to run editor command `{command}`: {e}")))?;

    if !status.success() {
        return Err(Error::editor(format!(
            "editor command failed with status {status}"
        )));
    }
    Ok(())
}

fn shell_single_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}
