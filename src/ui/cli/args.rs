// Wed Jan 15 2026 - Alex

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sweet-error")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Prints a formatted error report and exits", long_about = None)]
pub struct Args {
    /// Message lines, printed in order
    pub messages: Vec<String>,

    /// Parse every message as a JSON value
    #[arg(long)]
    pub json: bool,

    #[arg(short, long)]
    pub name: Option<String>,

    #[arg(short, long)]
    pub code: Option<String>,

    /// Exit code or signal name, e.g. 2 or SIGTERM
    #[arg(short, long)]
    pub exit_code: Option<String>,

    /// label, coords or full
    #[arg(short, long)]
    pub location_style: Option<String>,

    /// Disable per-word colors
    #[arg(long)]
    pub no_color: bool,

    /// Disable every ANSI escape
    #[arg(long)]
    pub plain: bool,

    #[arg(long)]
    pub ascii: bool,

    #[arg(long)]
    pub no_exit: bool,

    #[arg(short, long)]
    pub width: Option<usize>,

    /// JSON file with report options
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(width) = self.width {
            if width == 0 {
                return Err("--width must be at least 1".to_string());
            }
        }

        if let Some(ref path) = self.config {
            if !path.exists() {
                return Err(format!("Config file does not exist: {:?}", path));
            }
        }

        Ok(())
    }
}
