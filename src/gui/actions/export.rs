// src/gui/actions/export.rs
use crate::{file, gui::app::App};

/// Rewrite the export file from the current filtered view.
/// Called after every scrape and every filter change.
pub fn refresh_export(app: &mut App) {
    if app.session.table().is_none() {
        return;
    }
    let export = &app.state.options.export;
    match app.session.write_export(export) {
        Ok(bytes) => logd!(
            "Export: Wrote {} rows ({} bytes) → {}",
            app.session.filtered().len(),
            bytes.len(),
            export.path.display()
        ),
        Err(e) => {
            loge!("Export: Error: {}", e);
            app.status(format!("Export error: {e}"));
        }
    }
}

/// Offer the export file: copy its bytes under the fixed file name into the
/// download directory.
pub fn download(app: &mut App) {
    if app.session.table().is_none() {
        logd!("Download: Clicked, but there's nothing to export");
        app.status("Nothing to download yet");
        return;
    }

    app.sync_download_dir();

    // Make sure the file reflects the current view even if a write failed earlier.
    refresh_export(app);

    let export = &app.state.options.export;
    let res = file::read_download(&export.path).and_then(|d| {
        logf!("Download: Begin {} ({}, {} bytes)", d.file_name, d.mime, d.bytes.len());
        file::save_download(export, &d)
    });

    let msg = match res {
        Ok(path) => {
            logf!("Download: OK → {}", path.display());
            format!("Saved {}", path.display())
        }
        Err(e) => {
            loge!("Download: Error: {}", e);
            format!("Download error: {e}")
        }
    };
    app.status(msg);
}
