// src/gui/actions/scrape.rs
use std::{sync::mpsc, thread};

use eframe::egui;

use crate::{
    core::net::HttpSource,
    gui::{app::{App, PendingRun}, progress::GuiProgress},
    progress::Progress,
    scrape::{self, ScrapeError, ScrapeReport},
};

/// Start a run. Served from the cache when possible; otherwise the page loop
/// runs on one worker thread (pages still fetched one at a time) and the
/// result is picked up by `poll_scrape`.
pub fn scrape(app: &mut App, ctx: &egui::Context) {
    if !app.session.begin_scrape() {
        logd!("Scrape: Clicked while a run is in flight");
        return;
    }

    let opts = app.state.options.scrape.clone();
    logf!(
        "Scrape: Begin pages={} full={} strip_symbol={} on_malformed={:?}",
        opts.effective_pages(),
        opts.full_catalogue,
        opts.strip_currency_symbol,
        opts.on_malformed
    );

    if let Some(table) = app.cache.lookup(&opts) {
        let report = ScrapeReport::cached(table, opts.effective_pages());
        finish(app, Ok(report));
        return;
    }

    let (tx, rx) = mpsc::channel();
    let status = app.status.clone();
    let worker_ctx = ctx.clone();
    let worker_opts = opts.clone();

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status, worker_ctx.clone());
        prog.log(&format!("Connecting to {}", worker_opts.page_url(1)));
        let res = HttpSource::new(&worker_opts)
            .map_err(ScrapeError::Client)
            .and_then(|mut src| scrape::collect_books(&worker_opts, &mut src, Some(&mut prog)));
        let _ = tx.send(res);
        worker_ctx.request_repaint();
    });

    app.pending = Some(PendingRun { opts, rx });
}

/// Pick up a finished run, if any.
pub fn poll_scrape(app: &mut App) {
    let Some(pending) = app.pending.as_ref() else { return };

    let res = match pending.rx.try_recv() {
        Ok(res) => res,
        Err(mpsc::TryRecvError::Empty) => return,
        Err(mpsc::TryRecvError::Disconnected) => {
            loge!("Scrape: Worker ended without a result");
            app.pending = None;
            app.session.fail_scrape();
            app.status("Error: scrape worker stopped unexpectedly");
            return;
        }
    };

    if let Some(pending) = app.pending.take() {
        if let Ok(report) = &res {
            if app.cache.remember(&pending.opts, report) {
                logf!("Cache: Stored run (entries={})", app.cache.len());
            }
        }
    }
    finish(app, res);
}

fn finish(app: &mut App, res: Result<ScrapeReport, ScrapeError>) {
    match res {
        Ok(report) => {
            let rows = report.table.len();
            logf!(
                "Scrape: OK rows={} pages={}/{} cached={}",
                rows,
                report.pages_fetched,
                report.requested,
                report.from_cache
            );

            app.session.finish_scrape(report.table.clone());
            super::refresh_export(app);

            let msg = match &report.stopped {
                None if report.from_cache => format!("Scraping completed! {rows} books (cached)"),
                None => format!("Scraping completed! {rows} books from {} page(s)", report.pages_fetched),
                Some(stop) => {
                    loge!("Scrape: {}", stop);
                    format!(
                        "Scraped {rows} books from {} of {} page(s); {stop}",
                        report.pages_fetched, report.requested
                    )
                }
            };
            app.status(msg);
        }
        Err(e) => {
            loge!("Scrape: Error: {}", e);
            app.session.fail_scrape();
            app.status(format!("Error: {e}"));
        }
    }
}
