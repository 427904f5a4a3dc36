// src/gui/components/data_table.rs
//
// Draws the current page of the filtered view. Purely a view: reads the
// session, never writes it.

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{config::consts::THUMB_WIDTH, gui::app::App};

const HEADERS: [&str; 6] = ["#", "Image", "Title", "Price", "Rating", "Stock"];
const ROW_H: f32 = 84.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.session.table().is_none() {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("No data yet. Click SCRAPE to fetch the catalogue.").italics());
        });
        return;
    }

    let view = app.session.page_view();
    if view.is_empty() {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("No books on this page.").italics());
        });
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::exact(40.0))
        .column(Column::exact(THUMB_WIDTH as f32 + 8.0))
        .column(Column::remainder().at_least(240.0).clip(true))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(80.0))
        .header(22.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_H, view.rows.len(), |mut row| {
                let i = row.index();
                let r = &view.rows[i].record;

                row.col(|ui| {
                    ui.label((view.offset + i).to_string());
                });
                row.col(|ui| {
                    ui.add(
                        egui::Image::from_uri(r.image_url.as_str())
                            .max_width(THUMB_WIDTH as f32)
                            .max_height(ROW_H - 4.0),
                    )
                    .on_hover_text(r.image_url.as_str());
                });
                row.col(|ui| {
                    ui.add(egui::Label::new(r.title.as_str()).truncate())
                        .on_hover_text(r.title.as_str());
                });
                row.col(|ui| {
                    ui.label(r.price.as_str());
                });
                row.col(|ui| {
                    ui.label(r.rating.as_str());
                });
                row.col(|ui| {
                    ui.label(r.stock.as_str());
                });
            });
        });
}
