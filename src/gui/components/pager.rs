// src/gui/components/pager.rs

use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.session.table().is_none() {
        return;
    }

    let total = app.session.total_pages();
    let mut page = app.session.page();

    ui.horizontal(|ui| {
        ui.label("Select Page:");
        let resp = ui.add(egui::DragValue::new(&mut page).range(1..=total).speed(0.1));
        if ui.add_enabled(page > 1, egui::Button::new("◀")).clicked() {
            page -= 1;
        }
        if ui.add_enabled(page < total, egui::Button::new("▶")).clicked() {
            page += 1;
        }
        if resp.changed() {
            logd!("UI: page → {}", page);
        }

        ui.add_space(16.0);
        ui.label(format!(
            "Showing page {} of {} ({} matching)",
            page.clamp(1, total),
            total,
            app.session.filtered().len()
        ));
    });

    app.session.set_page(page);
}
