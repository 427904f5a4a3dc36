// src/progress.rs
/// Lightweight progress reporting for a scrape run.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of pages requested.
    fn begin(&mut self, _total: u32) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one catalogue page was fetched and extracted.
    fn item_done(&mut self, _page: u32, _records: usize) {}

    /// Called when the run stops at `page`.
    fn item_failed(&mut self, _page: u32, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Whole-number percentage, 0 when nothing was requested.
pub fn percent(done: u32, total: u32) -> u32 {
    if total == 0 { 0 } else { done.min(total) * 100 / total }
}
