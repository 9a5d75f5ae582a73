//! Command line arguments

use clap::Parser;
use redalert_config::Config;
use std::path::PathBuf;

/// Command line arguments
#[derive(Parser, Debug, Default)]
#[command(name = "redalert", author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level, overrides the configuration file
    #[arg(
        short,
        long,
        ignore_case = true,
        value_parser = ["trace", "debug", "info", "warn", "error"]
    )]
    pub log_level: Option<String>,

    /// Read the alert history from a JSON file instead of the network
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Export charts as PNG files and exit without opening the form
    #[arg(long)]
    pub headless: bool,

    /// Area whose hourly chart is exported in headless mode
    #[arg(long, requires = "headless")]
    pub area: Option<String>,

    /// Directory exported charts are written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

impl Args {
    /// Fold flag values into the loaded configuration
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.chart.output_dir = dir.display().to_string();
        }
        if !self.headless && config.logging.file.is_none() {
            // the form owns stdout
            config.logging.file = Some("redalert.log".to_string());
        }
    }
}
