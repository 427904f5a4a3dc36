// src/scrape/scrape.rs
//
// The scrape loop: page 1..=N, strictly in order, one request at a time.
//
//   fetch failure  → stop, keep what was collected (never an error)
//   malformed page → OnMalformed::Abort fails the run,
//                    OnMalformed::Truncate stops like a fetch failure

use std::{fmt, sync::Arc};

use crate::{
    config::options::{OnMalformed, ScrapeOptions},
    core::net::{FetchError, HttpSource},
    data::{BookTable, Collector},
    progress::Progress,
    specs::{ExtractionError, catalogue::CatalogueSpec},
    store::ScrapeCache,
};

/// Where catalogue pages come from. The live site in production,
/// fixtures in tests.
pub trait PageSource {
    /// Markup of the 1-based catalogue page.
    fn fetch_page(&mut self, page: u32) -> Result<String, FetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Client(FetchError),
    #[error("page {page} is malformed: {source}")]
    Malformed { page: u32, source: ExtractionError },
}

/// Why a run ended before its last page.
#[derive(Debug)]
pub enum StopReason {
    Fetch { page: u32, error: FetchError },
    Malformed { page: u32, error: ExtractionError },
}

impl StopReason {
    pub fn page(&self) -> u32 {
        match self {
            StopReason::Fetch { page, .. } | StopReason::Malformed { page, .. } => *page,
        }
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Fetch { page, error } => write!(f, "stopped at page {page}: {error}"),
            StopReason::Malformed { page, error } => write!(f, "stopped at malformed page {page}: {error}"),
        }
    }
}

#[derive(Debug)]
pub struct ScrapeReport {
    pub table: Arc<BookTable>,
    /// Pages asked for.
    pub requested: u32,
    /// Pages that made it into the table.
    pub pages_fetched: u32,
    pub stopped: Option<StopReason>,
    pub from_cache: bool,
}

impl ScrapeReport {
    pub fn cached(table: Arc<BookTable>, requested: u32) -> Self {
        Self { table, requested, pages_fetched: requested, stopped: None, from_cache: true }
    }

    pub fn is_complete(&self) -> bool {
        self.stopped.is_none()
    }
}

pub fn collect_books(
    opts: &ScrapeOptions,
    source: &mut dyn PageSource,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ScrapeReport, ScrapeError> {
    let total = opts.effective_pages();
    let spec = CatalogueSpec::from_options(opts);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
    }

    let mut collector = Collector::new();
    let mut stopped = None;

    for page in 1..=total {
        let html = match source.fetch_page(page) {
            Ok(html) => html,
            Err(error) => {
                loge!("Scrape: page {} fetch failed, stopping: {}", page, error);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(page, &error.to_string());
                }
                stopped = Some(StopReason::Fetch { page, error });
                break;
            }
        };

        match spec.extract(&html) {
            Ok(records) => {
                logd!("Scrape: page {} → {} records", page, records.len());
                let n = records.len();
                collector.push_page(records);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(page, n);
                }
            }
            Err(error) => {
                loge!("Scrape: page {} malformed: {}", page, error);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(page, &error.to_string());
                }
                match opts.on_malformed {
                    OnMalformed::Abort => {
                        if let Some(p) = progress.as_deref_mut() {
                            p.finish();
                        }
                        return Err(ScrapeError::Malformed { page, source: error });
                    }
                    OnMalformed::Truncate => {
                        stopped = Some(StopReason::Malformed { page, error });
                        break;
                    }
                }
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(ScrapeReport {
        requested: total,
        pages_fetched: collector.pages(),
        table: Arc::new(collector.finish()),
        stopped,
        from_cache: false,
    })
}

/// Serve from `cache` when the options allow it, otherwise scrape `source`
/// and remember a complete run.
pub fn run_cached(
    opts: &ScrapeOptions,
    cache: &mut ScrapeCache,
    source: &mut dyn PageSource,
    progress: Option<&mut dyn Progress>,
) -> Result<ScrapeReport, ScrapeError> {
    if let Some(table) = cache.lookup(opts) {
        return Ok(ScrapeReport::cached(table, opts.effective_pages()));
    }
    let report = collect_books(opts, source, progress)?;
    cache.remember(opts, &report);
    Ok(report)
}

/// One run against the live site.
pub fn run_live(
    opts: &ScrapeOptions,
    cache: &mut ScrapeCache,
    progress: Option<&mut dyn Progress>,
) -> Result<ScrapeReport, ScrapeError> {
    if let Some(table) = cache.lookup(opts) {
        return Ok(ScrapeReport::cached(table, opts.effective_pages()));
    }
    let mut source = HttpSource::new(opts).map_err(ScrapeError::Client)?;
    let report = collect_books(opts, &mut source, progress)?;
    cache.remember(opts, &report);
    Ok(report)
}
