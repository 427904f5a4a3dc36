// src/gui/components/scrape_panel.rs

use eframe::egui::{self, Spinner};

use crate::{
    config::{consts::MAX_PAGES, options::OnMalformed},
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Book Scraper Automation");
    ui.label("Fetch catalogue pages and browse the results.");
    ui.separator();

    let busy = app.session.is_scraping();

    ui.add_enabled_ui(!busy, |ui| {
        let opts = &mut app.state.options.scrape;

        if ui
            .checkbox(&mut opts.full_catalogue, format!("Full catalogue ({MAX_PAGES} pages, no cache)"))
            .changed()
        {
            logf!("UI: full_catalogue → {}", opts.full_catalogue);
        }

        ui.add_enabled_ui(!opts.full_catalogue, |ui| {
            let resp = ui.add(egui::Slider::new(&mut opts.pages, 1..=MAX_PAGES).text("Pages"));
            if resp.drag_stopped() || resp.lost_focus() {
                logd!("UI: pages → {}", opts.pages);
            }
        });

        if ui.checkbox(&mut opts.strip_currency_symbol, "Strip currency symbol").changed() {
            logf!("UI: strip_currency_symbol → {}", opts.strip_currency_symbol);
        }

        let before = opts.on_malformed;
        egui::ComboBox::from_label("On malformed page")
            .selected_text(malformed_label(opts.on_malformed))
            .show_ui(ui, |ui| {
                for v in [OnMalformed::Abort, OnMalformed::Truncate] {
                    ui.selectable_value(&mut opts.on_malformed, v, malformed_label(v));
                }
            });
        if opts.on_malformed != before {
            logf!("UI: on_malformed → {:?}", opts.on_malformed);
        }
    });

    ui.add_space(8.0);

    ui.horizontal(|ui| {
        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;
        let button = egui::Button::new(egui::RichText::new("SCRAPE").color(black).strong()).fill(red);
        if ui.add_enabled(!busy, button).clicked() {
            actions::scrape(app, ui.ctx());
        }
        if busy {
            ui.add(Spinner::new());
        }
    });

    ui.add_space(8.0);
    ui.separator();

    if let Some(t) = app.session.table() {
        ui.label(format!("Collected: {} books", t.len()));
    }
    ui.label(format!("Cached runs: {}", app.cache.len()));
}

fn malformed_label(v: OnMalformed) -> &'static str {
    match v {
        OnMalformed::Abort => "Abort run",
        OnMalformed::Truncate => "Keep earlier pages",
    }
}
