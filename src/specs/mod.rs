// src/specs/mod.rs
//! # Page specs
//!
//! A spec knows *where the ground truth lives in the HTML* of one kind of page
//! and how to turn it into typed records. Specs are pure: they take markup and
//! return records or an `ExtractionError`. Fetching, looping and caching live
//! in `scrape` and `store`.
//!
//! ## Conventions
//! - CSS selectors via `scraper`, parsed with the `selector!` macro.
//! - Entries are numbered from 0 in document order; errors name the entry and
//!   the field so a broken page can be diagnosed from the log line alone.
//! - No partial records: a missing or empty field fails the page.
//!
//! ## Testing notes
//! Specs are tested offline against saved fixtures (`tests/fixtures/`).

pub mod catalogue;

use crate::data::RecordError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractionError {
    #[error("bad selector {css:?}: {reason}")]
    Selector { css: &'static str, reason: String },
    #[error("entry {entry}: missing {field}")]
    MissingElement { entry: usize, field: &'static str },
    #[error("entry {entry}: {field} has no `{attr}` attribute")]
    MissingAttribute { entry: usize, field: &'static str, attr: &'static str },
    #[error("entry {entry}: {source}")]
    Record { entry: usize, source: RecordError },
    #[error("entry {entry}: unknown rating token {token:?}")]
    UnknownRating { entry: usize, token: String },
    #[error("entry {entry}: bad image path: {source}")]
    ImageUrl { entry: usize, source: url::ParseError },
}
