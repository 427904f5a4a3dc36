// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::progress::{self, Progress};

/// Writes a percentage counter into the shared status line after each page
/// and asks egui to repaint so the UI thread picks it up.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    done: u32,
    total: u32,
    records: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx, done: 0, total: 0, records: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: u32) {
        self.total = total;
        self.set_status(format!("Scraping {total} page(s)…"));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, page: u32, records: usize) {
        self.done += 1;
        self.records += records;
        self.set_status(format!(
            "Fetched page {} ({}/{}, {}%), {} books so far",
            page,
            self.done,
            self.total,
            progress::percent(self.done, self.total),
            self.records
        ));
    }
    fn item_failed(&mut self, page: u32, reason: &str) {
        self.set_status(format!("Page {page} failed: {reason}"));
    }
    fn finish(&mut self) {
        logd!("Progress: finished {}/{} pages, {} records", self.done, self.total, self.records);
    }
}
