// src/gui/components/export_bar.rs

use eframe::egui;

use crate::{
    config::consts::EXPORT_FILE,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Download to:");
        if ui
            .add(
                egui::TextEdit::singleline(&mut app.state.gui.download_dir_text)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(320.0),
            )
            .changed()
        {
            app.state.gui.download_dir_dirty = true;
            logd!("UI: download_dir_text changed (dirty=true) → {}", app.state.gui.download_dir_text);
        }
        ui.label(format!("/{EXPORT_FILE}"));
    });

    ui.horizontal(|ui| {
        let ready = app.session.table().is_some();

        if ui.add_enabled(ready, egui::Button::new("Copy")).clicked() {
            actions::copy(app, ui.ctx());
        }

        if ui.add_enabled(ready, egui::Button::new("Download JSON")).clicked() {
            actions::download(app);
        }

        ui.label(format!("Status: {}", app.status_text()));
    });
}
