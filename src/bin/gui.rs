// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use book_scrape::{config::state::GuiState, gui, log};
use eframe::egui::ViewportBuilder;

fn main() {
    if let Err(e) = log::init() {
        eprintln!("Logging disabled: {e}");
    }

    let size = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Book Scraper Automation")
            .with_inner_size([size.window_w, size.window_h]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
