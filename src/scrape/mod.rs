// src/scrape/mod.rs
mod scrape;

pub use scrape::{
    PageSource,
    ScrapeError,
    ScrapeReport,
    StopReason,
    collect_books,
    run_cached,
    run_live,
};
