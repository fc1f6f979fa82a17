mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use view_binder::default_bindings;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{RadioViewApp, StartupConfig};

#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    base_url: Option<String>,
    #[arg(long)]
    playlist_owner_id: Option<i64>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let startup = StartupConfig {
        base_url: args.base_url,
        playlist_owner_id: args.playlist_owner_id,
    };
    let settings = match startup.settings() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!("{err:#}");
            eprintln!("{err:#}");
            return Ok(());
        }
    };
    tracing::info!(base_url = %settings.base_url, "starting radio view");

    let table = default_bindings(&settings);
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    let app = RadioViewApp::new(&table, cmd_tx, ui_rx);
    backend_bridge::runtime::launch(table, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Radio View")
            .with_inner_size([900.0, 760.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native("Radio View", options, Box::new(|_cc| Ok(Box::new(app))))
}
