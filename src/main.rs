//! edgebench - a terminal workbench for code analysis reports
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use edgebench::CliOverrides;
use edgebench_core::{logging, ExportFormat};

/// edgebench - analyze Python code and browse generated edge-case tests
#[derive(Parser, Debug)]
#[command(name = "edgebench")]
#[command(about = "A terminal workbench for code analysis reports", long_about = None)]
struct Args {
    /// Project directory (holds .edgebench/config.toml)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Analysis service base URL
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Load this file into the editor buffer
    #[arg(long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Export format: pytest or unittest
    #[arg(long)]
    format: Option<ExportFormat>,

    /// Directory for exported test files
    #[arg(long, value_name = "DIR")]
    export_dir: Option<PathBuf>,

    /// Start with the dark theme
    #[arg(long)]
    dark: bool,

    /// Write a default .edgebench/config.toml and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    // Get project path from args or use current directory
    let project_path = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init_config {
        let path = edgebench::init_config(&project_path)?;
        eprintln!("Config written to {}", path.display());
        return Ok(());
    }

    let overrides = CliOverrides {
        server: args.server,
        file: args.file,
        format: args.format,
        export_dir: args.export_dir,
        dark: args.dark,
    };

    if let Err(e) = edgebench::run_with_project(&project_path, overrides).await {
        eprintln!("Logs: {}", logging::get_log_directory().display());
        return Err(e.into());
    }
    Ok(())
}
