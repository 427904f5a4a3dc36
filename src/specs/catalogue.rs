// src/specs/catalogue.rs
//
// Catalogue listing page (`/catalogue/page-N.html`).
//
// Each book is an `<article class="product_pod">`:
//   <div class="image_container"><a><img src="../media/..." class="thumbnail"></a></div>
//   <p class="star-rating Three">…</p>
//   <h3><a href="…" title="Full Title">Short title…</a></h3>
//   <div class="product_price">
//     <p class="price_color">£51.77</p>
//     <p class="instock availability"><i class="icon-ok"></i> In stock</p>
//   </div>

use scraper::{ElementRef, Html, Selector};

use crate::config::options::ScrapeOptions;
use crate::core::sanitize::{clean_price, normalize_ws, resolve_image_url};
use crate::data::{BookRecord, Rating};

use super::ExtractionError;

struct Selectors {
    entry: Selector,
    title: Selector,
    price: Selector,
    rating: Selector,
    stock: Selector,
    image: Selector,
}

impl Selectors {
    fn new() -> Result<Self, ExtractionError> {
        Ok(Self {
            entry: selector!("article.product_pod")?,
            title: selector!("h3 a")?,
            price: selector!("p.price_color")?,
            rating: selector!("p.star-rating")?,
            stock: selector!("p.instock.availability")?,
            image: selector!("img")?,
        })
    }
}

#[derive(Clone, Debug)]
pub struct CatalogueSpec {
    catalogue_base: String,
    strip_currency_symbol: bool,
}

impl CatalogueSpec {
    pub fn new(catalogue_base: impl Into<String>, strip_currency_symbol: bool) -> Self {
        Self { catalogue_base: catalogue_base.into(), strip_currency_symbol }
    }

    pub fn from_options(opts: &ScrapeOptions) -> Self {
        Self::new(opts.catalogue_base.clone(), opts.strip_currency_symbol)
    }

    /// All book entries on one page, in document order.
    /// The first malformed entry fails the whole page.
    pub fn extract(&self, html: &str) -> Result<Vec<BookRecord>, ExtractionError> {
        let sel = Selectors::new()?;
        let doc = Html::parse_document(html);

        doc.select(&sel.entry)
            .enumerate()
            .map(|(entry, el)| self.extract_entry(&sel, entry, el))
            .collect()
    }

    fn extract_entry(
        &self,
        sel: &Selectors,
        entry: usize,
        el: ElementRef<'_>,
    ) -> Result<BookRecord, ExtractionError> {
        let title = attr_of(el, &sel.title, entry, "title", "title")?;

        let price = clean_price(&text_of(el, &sel.price, entry, "price")?, self.strip_currency_symbol);

        let rating = {
            let class = attr_of(el, &sel.rating, entry, "rating", "class")?;
            let token = class
                .split_whitespace()
                .nth(1)
                .ok_or(ExtractionError::MissingElement { entry, field: "rating token" })?;
            token
                .parse::<Rating>()
                .map_err(|_| ExtractionError::UnknownRating { entry, token: s!(token) })?
        };

        let stock = normalize_ws(&text_of(el, &sel.stock, entry, "stock")?);

        let src = attr_of(el, &sel.image, entry, "image", "src")?;
        let image_url = resolve_image_url(&self.catalogue_base, src)
            .map_err(|source| ExtractionError::ImageUrl { entry, source })?;

        BookRecord::new(title, price, rating, stock, image_url)
            .map_err(|source| ExtractionError::Record { entry, source })
    }
}

fn first<'a>(
    el: ElementRef<'a>,
    sel: &Selector,
    entry: usize,
    field: &'static str,
) -> Result<ElementRef<'a>, ExtractionError> {
    el.select(sel)
        .next()
        .ok_or(ExtractionError::MissingElement { entry, field })
}

fn text_of(
    el: ElementRef<'_>,
    sel: &Selector,
    entry: usize,
    field: &'static str,
) -> Result<String, ExtractionError> {
    Ok(first(el, sel, entry, field)?.text().collect())
}

fn attr_of<'a>(
    el: ElementRef<'a>,
    sel: &Selector,
    entry: usize,
    field: &'static str,
    attr: &'static str,
) -> Result<&'a str, ExtractionError> {
    first(el, sel, entry, field)?
        .value()
        .attr(attr)
        .ok_or(ExtractionError::MissingAttribute { entry, field, attr })
}
