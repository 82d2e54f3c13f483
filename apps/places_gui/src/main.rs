use std::path::PathBuf;

mod config;
mod controller;
mod map;
mod ui;

use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::config::{load_settings, ConfigError, MapSettings};
use crate::ui::PlacesApp;

#[derive(Debug, Parser)]
#[command(name = "places", about = "Drop pins on a world map and note what is there")]
struct Args {
    /// Settings file; defaults to places/places.toml under the user config dir.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Tile URL template with {s}, {z}, {x} and {y} placeholders.
    #[arg(long)]
    tile_url: Option<String>,
    #[arg(long)]
    attribution: Option<String>,
    #[arg(long, default_value = "info")]
    log_filter: String,
}

fn resolve_settings(args: &Args) -> Result<MapSettings, ConfigError> {
    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(tile_url) = &args.tile_url {
        settings.tile_url = tile_url.clone();
    }
    if let Some(attribution) = &args.attribution {
        settings.attribution = attribution.clone();
    }
    settings.validate()?;
    Ok(settings)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let filter = EnvFilter::try_new(&args.log_filter).unwrap_or_else(|err| {
        eprintln!("invalid --log-filter {:?} ({err}); using info", args.log_filter);
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = resolve_settings(&args)?;
    tracing::info!(tile_url = %settings.tile_url, "starting places");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Places")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Places",
        options,
        Box::new(move |cc| Ok(Box::new(PlacesApp::new(&cc.egui_ctx, &settings)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop ui exited with error: {err}"))
}
