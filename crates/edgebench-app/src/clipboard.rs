//! Clipboard bridge (OSC 52)
//!
//! Snippets reach the system clipboard through the terminal's OSC 52 escape
//! sequence. A raw snippet cannot be embedded there: `ESC`, `BEL`, quotes and
//! newlines would terminate or corrupt the sequence. The payload is therefore
//! base64 encoded, and [`decode_snippet`] recovers the exact original bytes.

use std::io::{self, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use edgebench_core::prelude::*;

const OSC52_PREFIX: &str = "\x1b]52;c;";
const OSC52_TERMINATOR: &str = "\x1b\\";

/// Encode a snippet for embedding in an escape sequence
pub fn encode_snippet(snippet: &str) -> String {
    STANDARD.encode(snippet.as_bytes())
}

/// Inverse of [`encode_snippet`]
pub fn decode_snippet(encoded: &str) -> Result<String> {
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| Error::clipboard(format!("invalid clipboard payload: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| Error::clipboard(format!("clipboard payload is not UTF-8: {e}")))
}

/// Full OSC 52 "set clipboard" sequence for `text`
pub fn osc52_sequence(text: &str) -> String {
    format!("{OSC52_PREFIX}{}{OSC52_TERMINATOR}", encode_snippet(text))
}

/// Recover the text carried by an OSC 52 sequence. Accepts either the `ST`
/// or the `BEL` terminator.
pub fn parse_osc52(sequence: &str) -> Result<String> {
    let payload = sequence
        .strip_prefix(OSC52_PREFIX)
        .and_then(|rest| {
            rest.strip_suffix(OSC52_TERMINATOR)
                .or_else(|| rest.strip_suffix('\x07'))
        })
        .ok_or_else(|| Error::clipboard("not an OSC 52 clipboard sequence"))?;
    decode_snippet(payload)
}

/// Destination for copied text
pub trait ClipboardSink: Send {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Writes OSC 52 sequences to a terminal stream
pub struct Osc52Clipboard<W> {
    out: W,
}

impl Osc52Clipboard<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> ClipboardSink for Osc52Clipboard<W> {
    /// Completion is the successful flush of the sequence.
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.out
            .write_all(osc52_sequence(text).as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(|e| Error::clipboard(format!("failed to write to terminal: {e}")))?;
        debug!("Copied {} bytes via OSC 52", text.len());
        Ok(())
    }
}
