// src/session.rs
//
// UI session state, owned by the frontend and passed by reference into the
// presenter and exporter.
//
//   Idle → Scraping → Ready(table) ⟲ filter/paginate → Scraping …
//
// A failed run falls back to Ready when a previous table exists (stale
// results stay on screen), otherwise to Idle.

use std::sync::Arc;

use crate::config::options::ExportOptions;
use crate::data::BookTable;
use crate::file::{self, ExportError};
use crate::view::{self, Filters, PageView, RatingFilter};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Scraping,
    Ready,
}

#[derive(Debug, Default)]
pub struct Session {
    phase: Phase,
    table: Option<Arc<BookTable>>,
    filters: Filters,
    /// Filtered copy of `table`, rebuilt whenever table or filters change.
    filtered: BookTable,
    page: usize,
}

impl Session {
    pub fn new() -> Self {
        Self { page: 1, ..Self::default() }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_scraping(&self) -> bool {
        self.phase == Phase::Scraping
    }

    pub fn table(&self) -> Option<&BookTable> {
        self.table.as_deref()
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn filtered(&self) -> &BookTable {
        &self.filtered
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Enter Scraping. Refused while a run is in flight.
    pub fn begin_scrape(&mut self) -> bool {
        if self.is_scraping() {
            return false;
        }
        self.phase = Phase::Scraping;
        true
    }

    /// A run produced a table: replace, refilter, back to page 1.
    pub fn finish_scrape(&mut self, table: Arc<BookTable>) {
        self.table = Some(table);
        self.phase = Phase::Ready;
        self.page = 1;
        self.refilter();
    }

    pub fn fail_scrape(&mut self) {
        self.phase = if self.table.is_some() { Phase::Ready } else { Phase::Idle };
    }

    /// Returns true when the filter actually changed.
    pub fn set_rating(&mut self, rating: RatingFilter) -> bool {
        if self.filters.rating == rating {
            return false;
        }
        self.filters.rating = rating;
        self.refilter();
        true
    }

    pub fn set_query(&mut self, query: &str) -> bool {
        if self.filters.query == query {
            return false;
        }
        self.filters.query = s!(query);
        self.refilter();
        true
    }

    /// Clamped to the current page range.
    pub fn set_page(&mut self, page: usize) {
        self.page = view::clamp_page(page, self.total_pages());
    }

    pub fn total_pages(&self) -> usize {
        view::total_pages(self.filtered.len(), crate::config::consts::ITEMS_PER_PAGE)
    }

    pub fn page_view(&self) -> PageView {
        view::paginate_default(&self.filtered, self.page)
    }

    /// Write the filtered table to the export path.
    pub fn write_export(&self, export: &ExportOptions) -> Result<Vec<u8>, ExportError> {
        file::write_export(&export.path, &self.filtered)
    }

    fn refilter(&mut self) {
        self.filtered = match &self.table {
            Some(t) => self.filters.apply(t),
            None => BookTable::empty(),
        };
        self.page = view::clamp_page(self.page, self.total_pages());
    }
}
