mod game;
mod game_app;

use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::game_app::GameApp;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .init();

    eframe::run_native(
        "Tic-Tac-Toe",
        eframe::NativeOptions::default(),
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(GameApp::default()))
        }),
    )
}
