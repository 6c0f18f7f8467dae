//! Configuration file parsing for edgebench
//!
//! Supports:
//! - `.edgebench/config.toml` - Workbench settings (server, UI, editor, export)

pub mod settings;
pub mod types;

pub use settings::{config_path, init_config_dir, load_settings};
pub use types::*;
