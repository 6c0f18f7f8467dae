//! Export download writer
//!
//! The exported blob is written to a uniquely named temp file in the export
//! directory and persisted under its final name once complete. Failed writes
//! drop the temp file, so nothing partial is left behind.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use edgebench_core::prelude::*;
use edgebench_core::ExportBlob;

/// Directory exports are saved to: configured, platform download dir, cwd
pub fn export_dir(configured: Option<&Path>) -> PathBuf {
    configured
        .map(Path::to_path_buf)
        .or_else(dirs::download_dir)
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Save `blob` as `<dir>/<blob.filename>` and return the final path.
///
/// Concurrent saves of the same name each write their own temp file; the
/// last one persisted wins.
pub fn save_download(dir: &Path, blob: &ExportBlob) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .map_err(|e| Error::export_with(format!("cannot create {}: {e}", dir.display())))?;

    let target = dir.join(&blob.filename);
    let mut partial = tempfile::Builder::new()
        .prefix(&format!(".{}.", blob.filename))
        .suffix(".part")
        .tempfile_in(dir)
        .map_err(|e| Error::export_with(format!("cannot create temp file in {}: {e}", dir.display())))?;

    partial
        .write_all(&blob.bytes)
        .and_then(|()| partial.flush())
        .map_err(|e| Error::export_with(format!("cannot write {}: {e}", partial.path().display())))?;
    partial
        .persist(&target)
        .map_err(|e| Error::export_with(format!("cannot move export into place: {}", e.error)))?;

    info!("Saved export to {:?} ({} bytes)", target, blob.bytes.len());
    Ok(target)
}
