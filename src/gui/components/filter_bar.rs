// src/gui/components/filter_bar.rs

use eframe::egui;

use crate::{
    gui::{actions, app::App},
    view::RatingFilter,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let ready = app.session.table().is_some();

    ui.add_enabled_ui(ready, |ui| {
        ui.horizontal(|ui| {
            let mut rating = app.session.filters().rating;
            egui::ComboBox::from_label("Filter by rating")
                .selected_text(rating.to_string())
                .show_ui(ui, |ui| {
                    for choice in RatingFilter::choices() {
                        ui.selectable_value(&mut rating, choice, choice.to_string());
                    }
                });

            ui.add_space(16.0);

            let mut query = app.session.filters().query.clone();
            ui.label("Search book title:");
            let resp = ui.add(
                egui::TextEdit::singleline(&mut query)
                    .hint_text("any part of the title")
                    .desired_width(260.0),
            );

            let mut changed = false;
            if app.session.set_rating(rating) {
                logf!("UI: rating → {}", rating);
                changed = true;
            }
            if resp.changed() && app.session.set_query(&query) {
                logd!("UI: search → {:?}", query);
                changed = true;
            }

            if changed {
                logd!("View: {} of {} rows", app.session.filtered().len(),
                    app.session.table().map(|t| t.len()).unwrap_or(0));
                actions::refresh_export(app);
            }
        });
    });
}
