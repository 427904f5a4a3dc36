// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex, mpsc},
};

use eframe::egui;

use crate::{
    config::{options::{AppOptions, ScrapeOptions}, state::AppState},
    scrape::{ScrapeError, ScrapeReport},
    session::Session,
    store::ScrapeCache,
};

use super::{actions, components};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Book Scraper Automation",
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(App::new(AppState::new(AppOptions::default()))))
        }),
    )?;
    Ok(())
}

/// A scrape running on the worker thread.
pub struct PendingRun {
    pub opts: ScrapeOptions,
    pub rx: mpsc::Receiver<Result<ScrapeReport, ScrapeError>>,
}

pub struct App {
    // options + text fields (UI thread only)
    pub state: AppState,

    // table, filters, page, phase
    pub session: Session,

    // finished runs by fetch parameters; lives as long as the process
    pub cache: ScrapeCache,

    // status line (worker progress writes here)
    pub status: Arc<Mutex<String>>,

    pub pending: Option<PendingRun>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!(
            "Init: pages={} export={} download_dir={}",
            state.options.scrape.pages,
            state.options.export.path.display(),
            state.options.export.download_dir().display()
        );
        Self {
            state,
            session: Session::new(),
            cache: ScrapeCache::new(),
            status: Arc::new(Mutex::new(s!("Click Scrape to fetch the catalogue."))),
            pending: None,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Map the download dir text field onto ExportOptions if it was edited.
    pub fn sync_download_dir(&mut self) {
        let gui = &mut self.state.gui;
        if gui.download_dir_dirty {
            self.state.options.export.set_download_dir(&gui.download_dir_text);
            gui.download_dir_dirty = false;
            logf!(
                "UI: Download dir set → {}",
                self.state.options.export.download_dir().display()
            );
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll_scrape(self);

        egui::SidePanel::left("scrape")
            .resizable(false)
            .min_width(220.0)
            .show(ctx, |ui| {
                components::scrape_panel::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.small(egui::RichText::new("Built with egui").color(egui::Color32::GRAY));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::filter_bar::draw(ui, self);

            ui.separator();

            components::export_bar::draw(ui, self);

            ui.separator();

            components::pager::draw(ui, self);

            components::data_table::draw(ui, self);
        });
    }
}
