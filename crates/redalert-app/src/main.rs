//! Red Alert Data - Main Entry Point

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::{error, info};

use redalert_app::{export, load_records, tui, Args};
use redalert_common::init_logging;
use redalert_config::ConfigLoader;
use redalert_graphs::AlertDashboard;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    if let Err(err) = run(args).await {
        error!("Fatal error: {:#}", err);
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let mut config = ConfigLoader::load(args.config.as_deref())?;
    args.apply_to(&mut config);

    init_logging(config.logging_config()).map_err(|e| anyhow!(e))?;
    info!("Starting Red Alert Data v{}", env!("CARGO_PKG_VERSION"));

    let records = load_records(&config, args.input.as_deref()).await?;
    let dashboard = AlertDashboard::new(records, config.chart.clone())?;
    let output_dir = PathBuf::from(&config.chart.output_dir);

    if args.headless {
        let written = export::export_all(&dashboard, args.area.as_deref(), &output_dir).await?;
        for path in &written {
            println!("{}", path.display());
        }
        info!("Exported {} charts", written.len());
        return Ok(());
    }

    let export_dir = config.chart.export_png.then_some(output_dir.as_path());
    tui::run_form(&dashboard, export_dir).await?;

    info!("Shutting down");
    Ok(())
}
