// src/store.rs
//
// In-memory scrape cache. A run is looked up by the parameters that decide
// what gets fetched and how it is extracted; entries never expire within a
// process. Only runs that reached their last page are remembered, so a
// transient fetch failure does not pin a truncated table.

use std::{collections::HashMap, sync::Arc};

use crate::config::options::ScrapeOptions;
use crate::data::BookTable;
use crate::scrape::ScrapeReport;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScrapeKey {
    page_url_template: String,
    catalogue_base: String,
    pages: u32,
    strip_currency_symbol: bool,
}

impl From<&ScrapeOptions> for ScrapeKey {
    fn from(o: &ScrapeOptions) -> Self {
        Self {
            page_url_template: o.page_url_template.clone(),
            catalogue_base: o.catalogue_base.clone(),
            pages: o.effective_pages(),
            strip_currency_symbol: o.strip_currency_symbol,
        }
    }
}

#[derive(Debug, Default)]
pub struct ScrapeCache {
    entries: HashMap<ScrapeKey, Arc<BookTable>>,
}

impl ScrapeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &ScrapeKey) -> Option<Arc<BookTable>> {
        self.entries.get(key).cloned()
    }

    pub fn insert(&mut self, key: ScrapeKey, table: Arc<BookTable>) {
        self.entries.insert(key, table);
    }

    /// Cached table for these options, if caching applies to them.
    pub fn lookup(&self, opts: &ScrapeOptions) -> Option<Arc<BookTable>> {
        if !opts.uses_cache() {
            return None;
        }
        let hit = self.get(&ScrapeKey::from(opts));
        match &hit {
            Some(t) => logf!("Cache: hit pages={} rows={}", opts.effective_pages(), t.len()),
            None => logd!("Cache: miss pages={}", opts.effective_pages()),
        }
        hit
    }

    /// Store a finished run. Returns whether it was kept.
    pub fn remember(&mut self, opts: &ScrapeOptions, report: &ScrapeReport) -> bool {
        if !opts.uses_cache() || report.from_cache || !report.is_complete() {
            return false;
        }
        self.insert(ScrapeKey::from(opts), Arc::clone(&report.table));
        logd!("Cache: stored pages={} entries={}", opts.effective_pages(), self.len());
        true
    }
}
