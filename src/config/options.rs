// src/config/options.rs
use std::path::{Path, PathBuf};
use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// What to do when a fetched page does not have the expected markup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OnMalformed {
    /// Fail the whole run with a diagnostic; nothing is collected.
    #[default]
    Abort,
    /// Stop at the malformed page and keep the pages collected before it.
    Truncate,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Catalogue page URL; `{n}` is replaced by the 1-based page number.
    pub page_url_template: String,
    /// Base that relative image paths are resolved against.
    pub catalogue_base: String,
    /// Requested page count (1..=MAX_PAGES). Ignored when `full_catalogue` is set.
    pub pages: u32,
    /// Always fetch MAX_PAGES pages and bypass the cache.
    pub full_catalogue: bool,
    pub strip_currency_symbol: bool,
    pub on_malformed: OnMalformed,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            page_url_template: s!(PAGE_URL_TEMPLATE),
            catalogue_base: s!(CATALOGUE_BASE),
            pages: DEFAULT_PAGES,
            full_catalogue: false,
            strip_currency_symbol: false,
            on_malformed: OnMalformed::Abort,
        }
    }
}

impl ScrapeOptions {
    /// Fixed 50-page run without caching.
    pub fn full_catalogue() -> Self {
        Self { full_catalogue: true, ..Self::default() }
    }

    pub fn effective_pages(&self) -> u32 {
        if self.full_catalogue { MAX_PAGES } else { self.pages.clamp(1, MAX_PAGES) }
    }

    pub fn uses_cache(&self) -> bool {
        !self.full_catalogue
    }

    pub fn page_url(&self, page: u32) -> String {
        self.page_url_template.replace("{n}", &page.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    /// Export written on every view rebuild (working directory by default).
    pub path: PathBuf,
    /// Where "Download JSON" puts its copy.
    download_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(EXPORT_FILE),
            download_dir: default_download_dir(),
        }
    }
}

impl ExportOptions {
    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// Parse GUI text into the download directory. Blank → default.
    pub fn set_download_dir(&mut self, text: &str) {
        let s = text.trim();
        self.download_dir = if s.is_empty() { default_download_dir() } else { PathBuf::from(s) };
    }

    /// Download target; the file name is fixed.
    pub fn download_path(&self) -> PathBuf {
        self.download_dir.join(EXPORT_FILE)
    }
}

fn default_download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}
