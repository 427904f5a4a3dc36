// tests/scrape_loop.rs
//
// The page loop driven by fixture pages instead of the live site.

use book_scrape::config::options::{OnMalformed, ScrapeOptions};
use book_scrape::core::net::FetchError;
use book_scrape::progress::{NullProgress, Progress};
use book_scrape::scrape::{self, PageSource, ScrapeError, StopReason};
use book_scrape::specs::ExtractionError;
use book_scrape::store::ScrapeCache;

const PAGE: &str = include_str!("fixtures/catalogue_page.html");
const PER_PAGE: usize = 4;

/// Serves the fixture for every page except the ones told to fail.
struct FixtureSource {
    fail_at: Option<u32>,
    malformed_at: Option<u32>,
    calls: Vec<u32>,
}

impl FixtureSource {
    fn ok() -> Self {
        Self { fail_at: None, malformed_at: None, calls: Vec::new() }
    }
    fn failing_at(page: u32) -> Self {
        Self { fail_at: Some(page), ..Self::ok() }
    }
    fn malformed_at(page: u32) -> Self {
        Self { malformed_at: Some(page), ..Self::ok() }
    }
}

impl PageSource for FixtureSource {
    fn fetch_page(&mut self, page: u32) -> Result<String, FetchError> {
        self.calls.push(page);
        if self.fail_at == Some(page) {
            return Err(FetchError::Status { url: format!("page-{page}.html"), status: 404 });
        }
        if self.malformed_at == Some(page) {
            return Ok(PAGE.replace(r#"<p class="price_color">Â£53.74</p>"#, ""));
        }
        Ok(PAGE.to_string())
    }
}

fn opts(pages: u32) -> ScrapeOptions {
    ScrapeOptions { pages, ..ScrapeOptions::default() }
}

#[derive(Default)]
struct Recorder {
    begun: Option<u32>,
    done: Vec<u32>,
    failed: Vec<u32>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: u32) { self.begun = Some(total); }
    fn item_done(&mut self, page: u32, _records: usize) { self.done.push(page); }
    fn item_failed(&mut self, page: u32, _reason: &str) { self.failed.push(page); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn collects_every_requested_page_in_order() {
    let mut src = FixtureSource::ok();
    let report = scrape::collect_books(&opts(3), &mut src, None).unwrap();
    assert_eq!(src.calls, vec![1, 2, 3]);
    assert_eq!(report.table.len(), 3 * PER_PAGE);
    assert_eq!(report.pages_fetched, 3);
    assert!(report.is_complete());
    // duplicates across pages are kept
    assert_eq!(report.table.records()[0], report.table.records()[PER_PAGE]);
}

#[test]
fn row_count_never_exceeds_pages_times_entries() {
    for n in [1u32, 2, 7] {
        let report = scrape::collect_books(&opts(n), &mut FixtureSource::ok(), None).unwrap();
        assert!(report.table.len() <= n as usize * PER_PAGE);
    }
}

#[test]
fn fetch_failure_truncates_to_earlier_pages() {
    let mut src = FixtureSource::failing_at(3);
    let mut rec = Recorder::default();
    let report = scrape::collect_books(&opts(5), &mut src, Some(&mut rec)).unwrap();

    assert_eq!(src.calls, vec![1, 2, 3]);
    assert_eq!(report.table.len(), 2 * PER_PAGE);
    assert_eq!(report.pages_fetched, 2);
    assert!(matches!(report.stopped, Some(StopReason::Fetch { page: 3, .. })));

    assert_eq!(rec.begun, Some(5));
    assert_eq!(rec.done, vec![1, 2]);
    assert_eq!(rec.failed, vec![3]);
    assert!(rec.finished);
}

#[test]
fn failure_on_first_page_gives_empty_table() {
    let report = scrape::collect_books(&opts(4), &mut FixtureSource::failing_at(1), None).unwrap();
    assert!(report.table.is_empty());
    assert_eq!(report.stopped.as_ref().map(|s| s.page()), Some(1));
}

#[test]
fn malformed_page_aborts_by_default() {
    let mut src = FixtureSource::malformed_at(2);
    let err = scrape::collect_books(&opts(4), &mut src, None).unwrap_err();
    match err {
        ScrapeError::Malformed { page, source } => {
            assert_eq!(page, 2);
            assert_eq!(source, ExtractionError::MissingElement { entry: 1, field: "price" });
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(src.calls, vec![1, 2]);
}

#[test]
fn malformed_page_can_truncate_instead() {
    let o = ScrapeOptions { on_malformed: OnMalformed::Truncate, ..opts(4) };
    let report = scrape::collect_books(&o, &mut FixtureSource::malformed_at(2), None).unwrap();
    assert_eq!(report.table.len(), PER_PAGE);
    assert!(matches!(report.stopped, Some(StopReason::Malformed { page: 2, .. })));
}

#[test]
fn cache_serves_same_parameters_without_fetching() {
    let mut cache = ScrapeCache::new();
    let mut first = FixtureSource::ok();
    let a = scrape::run_cached(&opts(2), &mut cache, &mut first, Some(&mut NullProgress)).unwrap();
    assert!(!a.from_cache);
    assert_eq!(cache.len(), 1);

    let mut second = FixtureSource::ok();
    let b = scrape::run_cached(&opts(2), &mut cache, &mut second, None).unwrap();
    assert!(b.from_cache);
    assert!(second.calls.is_empty());
    assert!(std::sync::Arc::ptr_eq(&a.table, &b.table));

    let mut third = FixtureSource::ok();
    let c = scrape::run_cached(&opts(3), &mut cache, &mut third, None).unwrap();
    assert!(!c.from_cache);
    assert_eq!(third.calls, vec![1, 2, 3]);
    assert_eq!(cache.len(), 2);
}

#[test]
fn truncated_runs_are_not_cached() {
    let mut cache = ScrapeCache::new();
    scrape::run_cached(&opts(3), &mut cache, &mut FixtureSource::failing_at(2), None).unwrap();
    assert!(cache.is_empty());
}

#[test]
fn full_catalogue_bypasses_cache() {
    let mut cache = ScrapeCache::new();
    let o = ScrapeOptions::full_catalogue();
    let mut src = FixtureSource::ok();
    let report = scrape::run_cached(&o, &mut cache, &mut src, None).unwrap();
    assert_eq!(src.calls.len(), 50);
    assert_eq!(report.table.len(), 50 * PER_PAGE);
    assert!(cache.is_empty());
}
