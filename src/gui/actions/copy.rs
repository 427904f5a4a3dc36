// src/gui/actions/copy.rs
use eframe::egui;

use crate::{gui::app::App, view};

/// Current page as an HTML table, thumbnails included.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let page = app.session.page_view();

    if page.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but the current page is empty");
        return;
    }

    logf!("Copy: page={}/{}, rows={}", page.page, page.total_pages, page.rows.len());
    ui_ctx.copy_text(view::to_html_table(&page));
    app.status(format!("Copied {} row(s) as HTML", page.rows.len()));
}
