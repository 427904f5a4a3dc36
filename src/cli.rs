// src/cli.rs
//
// Headless run: scrape once, apply the same filters the GUI offers, write
// the export and print a summary.

use std::path::PathBuf;

use clap::Parser;

use crate::{
    config::{
        consts::{DEFAULT_PAGES, EXPORT_FILE, MAX_PAGES},
        options::{ExportOptions, OnMalformed, ScrapeOptions},
    },
    progress::{self, Progress},
    scrape,
    session::Session,
    store::ScrapeCache,
    view::RatingFilter,
};

#[derive(Debug, Parser)]
#[command(name = "cli", version, about = "Scrape the books.toscrape.com catalogue and export JSON")]
pub struct Args {
    /// Catalogue pages to fetch
    #[arg(short, long, default_value_t = DEFAULT_PAGES,
          value_parser = clap::value_parser!(u32).range(1..=(MAX_PAGES as i64)))]
    pub pages: u32,

    /// Fetch the whole catalogue (overrides --pages)
    #[arg(long)]
    pub full: bool,

    /// All, One, Two, Three, Four or Five
    #[arg(short, long, default_value = "All")]
    pub rating: RatingFilter,

    /// Case-insensitive title substring
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Drop the currency symbol from prices
    #[arg(long)]
    pub strip_currency: bool,

    /// Keep earlier pages when a page is malformed instead of failing
    #[arg(long)]
    pub keep_partial: bool,

    /// Export path
    #[arg(short, long, default_value = EXPORT_FILE)]
    pub out: PathBuf,
}

impl Args {
    pub fn scrape_options(&self) -> ScrapeOptions {
        ScrapeOptions {
            pages: self.pages,
            full_catalogue: self.full,
            strip_currency_symbol: self.strip_currency,
            on_malformed: if self.keep_partial { OnMalformed::Truncate } else { OnMalformed::Abort },
            ..ScrapeOptions::default()
        }
    }
}

struct CliProgress {
    done: u32,
    total: u32,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: u32) {
        self.total = total;
        eprintln!("Scraping {total} page(s)…");
    }
    fn item_done(&mut self, page: u32, records: usize) {
        self.done += 1;
        eprintln!(
            "  page {page}: {records} books ({}%)",
            progress::percent(self.done, self.total)
        );
    }
    fn item_failed(&mut self, page: u32, reason: &str) {
        eprintln!("  page {page}: {reason}");
    }
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();

    if let Err(e) = crate::log::init() {
        eprintln!("Logging disabled: {e}");
    }

    let opts = args.scrape_options();
    logf!("CLI: Begin pages={} rating={} search={:?}", opts.effective_pages(), args.rating, args.search);

    let mut cache = ScrapeCache::new();
    let mut prog = CliProgress { done: 0, total: 0 };
    let report = scrape::run_live(&opts, &mut cache, Some(&mut prog))?;

    if let Some(stop) = &report.stopped {
        eprintln!("Warning: {stop}");
    }

    let mut session = Session::new();
    session.finish_scrape(report.table.clone());
    session.set_rating(args.rating);
    session.set_query(&args.search);

    let mut export = ExportOptions::default();
    export.path = args.out.clone();
    let bytes = session.write_export(&export)?;

    logf!("CLI: Exported {} rows → {}", session.filtered().len(), export.path.display());
    println!(
        "Scraped {} books from {}/{} page(s); exported {} ({} bytes) to {}",
        report.table.len(),
        report.pages_fetched,
        report.requested,
        session.filtered().len(),
        bytes.len(),
        export.path.display()
    );
    Ok(())
}
