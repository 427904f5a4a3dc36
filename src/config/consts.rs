// src/config/consts.rs

// Site
pub const PAGE_URL_TEMPLATE: &str = "https://books.toscrape.com/catalogue/page-{n}.html";
pub const CATALOGUE_BASE: &str = "https://books.toscrape.com/catalogue/";
pub const USER_AGENT: &str = concat!("book_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Scrape
pub const MAX_PAGES: u32 = 50;
pub const DEFAULT_PAGES: u32 = 10;

// Markup artifacts
pub const MOJIBAKE_CURRENCY: &str = "Â";
pub const CURRENCY_SYMBOL: char = '£';
pub const TRAVERSAL_PREFIX: &str = "../../";

// View
pub const ITEMS_PER_PAGE: usize = 50;
pub const THUMB_WIDTH: u32 = 60;

// Export
pub const EXPORT_FILE: &str = "books.json";
pub const EXPORT_MIME: &str = "application/json";

// Logging
pub const LOG_FILE: &str = ".store/debug.log";
pub const LOG_FILTER: &str = "info";
