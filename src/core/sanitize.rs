// src/core/sanitize.rs

use url::Url;

use crate::config::consts::{CURRENCY_SYMBOL, MOJIBAKE_CURRENCY, TRAVERSAL_PREFIX};

/// Collapse runs of whitespace to a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Price text as shown on the site. `Â` comes from the page being decoded
/// as Latin-1 somewhere upstream and is always dropped; the currency symbol
/// only when asked.
pub fn clean_price(raw: &str, strip_symbol: bool) -> String {
    let s = raw.replace(MOJIBAKE_CURRENCY, "");
    let s = s.trim();
    if strip_symbol {
        s.trim_start_matches(CURRENCY_SYMBOL).trim().to_string()
    } else {
        s.to_string()
    }
}

/// Drop leading `../../` segments from a relative image path.
pub fn strip_traversal(src: &str) -> &str {
    src.trim_start_matches(TRAVERSAL_PREFIX)
}

/// Absolute thumbnail URL for an `img src` found on a catalogue page.
pub fn resolve_image_url(base: &str, src: &str) -> Result<String, url::ParseError> {
    let base = Url::parse(base)?;
    Ok(base.join(strip_traversal(src.trim()))?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://books.toscrape.com/catalogue/";

    #[test]
    fn price_drops_mojibake_and_optionally_symbol() {
        assert_eq!(clean_price("Â£51.77", false), "£51.77");
        assert_eq!(clean_price(" Â£51.77 ", true), "51.77");
        assert_eq!(clean_price("£9.00", false), "£9.00");
    }

    #[test]
    fn image_url_strips_double_traversal() {
        let u = resolve_image_url(BASE, "../../media/cache/2c/da/x.jpg").unwrap();
        assert_eq!(u, "https://books.toscrape.com/catalogue/media/cache/2c/da/x.jpg");
    }

    #[test]
    fn image_url_resolves_single_parent() {
        let u = resolve_image_url(BASE, "../media/cache/2c/da/x.jpg").unwrap();
        assert_eq!(u, "https://books.toscrape.com/media/cache/2c/da/x.jpg");
    }

    #[test]
    fn normalize_ws_collapses() {
        assert_eq!(normalize_ws("\n   In   stock\n "), "In stock");
    }
}
