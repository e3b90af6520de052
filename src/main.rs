// src/main.rs
use anyhow::Result;
use eframe::egui;

mod app;
mod config;
mod file;
mod report;
mod state;
mod ui;
mod utils;

use app::DukaApp;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_title("Duka"),
        ..Default::default()
    };

    eframe::run_native(
        "Duka",
        options,
        Box::new(|_cc| Box::new(DukaApp::new())),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
