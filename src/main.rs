use std::process::ExitCode;

use eframe::egui;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use workout_tables::config::Config;
use workout_tables::storage::FileStore;
use workout_tables::store::TableStore;
use workout_tables::view::WorkoutTablesApp;

/// Log level comes from `RUST_LOG` when set, `workout_tables=info` otherwise.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("workout_tables=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    info!(data_dir = %config.data_dir.display(), "starting workout tables");

    let store = TableStore::load(FileStore::new(&config.data_dir));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(config.window_size),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Workout Tables",
        options,
        Box::new(move |cc| Ok(Box::new(WorkoutTablesApp::new(cc, &config, store)))),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("window closed with an error: {}", e);
            ExitCode::FAILURE
        }
    }
}
