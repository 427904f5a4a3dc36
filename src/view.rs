// src/view.rs
//
// Presenter: everything between the collected table and what the user sees.
//
// Order is fixed: rating filter → title search → pagination → thumbnails.
// Filters return new tables; the collected table is never touched.

use std::fmt;

use crate::config::consts::{ITEMS_PER_PAGE, THUMB_WIDTH};
use crate::data::{BookRecord, BookTable, Rating};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RatingFilter {
    #[default]
    All,
    Only(Rating),
}

impl RatingFilter {
    /// Choices in selector order: All, One..Five.
    pub fn choices() -> impl Iterator<Item = RatingFilter> {
        std::iter::once(RatingFilter::All).chain(Rating::ALL.into_iter().map(RatingFilter::Only))
    }

    pub fn matches(self, r: Rating) -> bool {
        match self {
            RatingFilter::All => true,
            RatingFilter::Only(want) => want == r,
        }
    }
}

impl fmt::Display for RatingFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingFilter::All => f.write_str("All"),
            RatingFilter::Only(r) => fmt::Display::fmt(r, f),
        }
    }
}

impl std::str::FromStr for RatingFilter {
    type Err = crate::data::UnknownRating;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" { Ok(RatingFilter::All) } else { s.parse().map(RatingFilter::Only) }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filters {
    pub rating: RatingFilter,
    pub query: String,
}

impl Filters {
    /// Rating first, then title search.
    pub fn apply(&self, table: &BookTable) -> BookTable {
        search_title(&filter_rating(table, self.rating), &self.query)
    }

    pub fn is_noop(&self) -> bool {
        self.rating == RatingFilter::All && self.query.is_empty()
    }
}

pub fn filter_rating(table: &BookTable, rating: RatingFilter) -> BookTable {
    match rating {
        RatingFilter::All => table.clone(),
        _ => table.filtered(|r| rating.matches(r.rating)),
    }
}

/// Case-insensitive literal substring match on the title.
pub fn search_title(table: &BookTable, query: &str) -> BookTable {
    if query.is_empty() {
        return table.clone();
    }
    let needle = query.to_lowercase();
    table.filtered(|r| r.title.to_lowercase().contains(&needle))
}

/// `floor(total / page_size) + 1`.
///
/// Kept as the tool has always counted: an exactly-full last page is followed
/// by one empty page, and an empty result still has one page.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total / page_size.max(1) + 1
}

/// Clamp a requested page number into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// `<img>` tag for inline rendering of a thumbnail.
pub fn thumbnail_tag(image_url: &str) -> String {
    format!(r#"<img src="{image_url}" width="{THUMB_WIDTH}">"#)
}

/// One displayed row: the record plus its derived thumbnail tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayRow {
    pub record: BookRecord,
    pub image: String,
}

impl From<&BookRecord> for DisplayRow {
    fn from(r: &BookRecord) -> Self {
        Self { image: thumbnail_tag(&r.image_url), record: r.clone() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageView {
    /// 1-based, already clamped.
    pub page: usize,
    pub total_pages: usize,
    /// Rows in the whole filtered table.
    pub total_rows: usize,
    /// Index of the first row of this page within the filtered table.
    pub offset: usize,
    pub rows: Vec<DisplayRow>,
}

impl PageView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// "Showing page X of Y"
    pub fn caption(&self) -> String {
        format!("Showing page {} of {}", self.page, self.total_pages)
    }
}

pub fn paginate(table: &BookTable, page: usize, page_size: usize) -> PageView {
    let page_size = page_size.max(1);
    let total_rows = table.len();
    let total_pages = total_pages(total_rows, page_size);
    let page = clamp_page(page, total_pages);

    let start = (page - 1) * page_size;
    let rows = table
        .records()
        .iter()
        .skip(start)
        .take(page_size)
        .map(DisplayRow::from)
        .collect();

    PageView { page, total_pages, total_rows, offset: start, rows }
}

/// Default page size.
pub fn paginate_default(table: &BookTable, page: usize) -> PageView {
    paginate(table, page, ITEMS_PER_PAGE)
}

/// The page as an HTML table. Text cells are escaped; the image cell is
/// emitted as markup so it renders as a thumbnail.
pub fn to_html_table(view: &PageView) -> String {
    use html_escape::encode_text;

    let mut out = String::from("<table border=\"1\" class=\"dataframe\">\n  <thead>\n    <tr style=\"text-align: right;\">\n      <th></th>\n");
    for h in ["title", "price", "rating", "stock", "image_url", "image"] {
        out.push_str(&format!("      <th>{h}</th>\n"));
    }
    out.push_str("    </tr>\n  </thead>\n  <tbody>\n");

    for (i, row) in view.rows.iter().enumerate() {
        let r = &row.record;
        out.push_str("    <tr>\n");
        out.push_str(&format!("      <th>{}</th>\n", view.offset + i));
        for cell in [r.title.as_str(), r.price.as_str(), r.rating.as_str(), r.stock.as_str(), r.image_url.as_str()] {
            out.push_str(&format!("      <td>{}</td>\n", encode_text(cell)));
        }
        out.push_str(&format!("      <td>{}</td>\n", row.image));
        out.push_str("    </tr>\n");
    }

    out.push_str("  </tbody>\n</table>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(title: &str, rating: Rating) -> BookRecord {
        BookRecord::new(title, "£1.00", rating, "In stock", format!("https://img/{title}.jpg")).unwrap()
    }

    fn table(n: usize) -> BookTable {
        (0..n).map(|i| rec(&format!("Book {i}"), Rating::Three)).collect()
    }

    #[test]
    fn exact_multiple_gets_trailing_empty_page() {
        assert_eq!(total_pages(50, 50), 2);
        assert_eq!(total_pages(49, 50), 1);
        assert_eq!(total_pages(51, 50), 2);
        assert_eq!(total_pages(0, 50), 1);
    }

    #[test]
    fn clamp_keeps_page_in_range() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(9, 3), 3);
        assert_eq!(clamp_page(2, 0), 1);
    }

    #[test]
    fn page_two_of_fifty_rows_is_empty() {
        let t = table(50);
        let v = paginate(&t, 2, 50);
        assert_eq!(v.total_pages, 2);
        assert!(v.is_empty());
        assert_eq!(v.caption(), "Showing page 2 of 2");
    }

    #[test]
    fn empty_result_is_one_empty_page() {
        let v = paginate(&BookTable::empty(), 5, 50);
        assert_eq!((v.page, v.total_pages, v.rows.len()), (1, 1, 0));
    }

    #[test]
    fn second_page_starts_after_first() {
        let t = table(120);
        let v = paginate(&t, 3, 50);
        assert_eq!(v.offset, 100);
        assert_eq!(v.rows.len(), 20);
        assert_eq!(v.rows[0].record.title, "Book 100");
    }

    #[test]
    fn thumbnail_tag_has_fixed_width() {
        assert_eq!(thumbnail_tag("https://x/a.jpg"), r#"<img src="https://x/a.jpg" width="60">"#);
    }

    #[test]
    fn rating_filter_round_trips_through_text() {
        let labels: Vec<String> = RatingFilter::choices().map(|c| c.to_string()).collect();
        assert_eq!(labels, ["All", "One", "Two", "Three", "Four", "Five"]);
        for c in RatingFilter::choices() {
            assert_eq!(c.to_string().parse::<RatingFilter>(), Ok(c));
        }
    }

    #[test]
    fn html_table_escapes_text_but_not_image() {
        let t: BookTable = vec![rec("Tom & Jerry", Rating::One)].into_iter().collect();
        let html = to_html_table(&paginate(&t, 1, 50));
        assert!(html.contains("<td>Tom &amp; Jerry</td>"));
        assert!(html.contains(r#"<td><img src="https://img/Tom & Jerry.jpg" width="60"></td>"#));
        assert!(html.contains("<th>0</th>"));
    }
}
