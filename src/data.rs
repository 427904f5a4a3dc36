// src/data.rs
//
// Canonical record types.
//
// - BookRecord: one catalogue entry, all five fields required.
// - BookTable:  ordered, immutable sequence of records for one scrape run.
//               Filters build new tables; nothing mutates a collected one.
// - Collector:  the only way to grow a table, used by the scrape loop.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rating {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Rating {
    pub const ALL: [Rating; 5] = [Rating::One, Rating::Two, Rating::Three, Rating::Four, Rating::Five];

    pub fn as_str(self) -> &'static str {
        match self {
            Rating::One   => "One",
            Rating::Two   => "Two",
            Rating::Three => "Three",
            Rating::Four  => "Four",
            Rating::Five  => "Five",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rating token {0:?}")]
pub struct UnknownRating(pub String);

impl FromStr for Rating {
    type Err = UnknownRating;

    /// Word tokens only, exactly as the site spells them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rating::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRating(s!(s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("field `{0}` is empty")]
    EmptyField(&'static str),
}

/// Field order matches the export schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub price: String,
    pub rating: Rating,
    pub stock: String,
    pub image_url: String,
}

impl BookRecord {
    pub fn new(
        title: impl Into<String>,
        price: impl Into<String>,
        rating: Rating,
        stock: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Result<Self, RecordError> {
        let rec = Self {
            title: title.into(),
            price: price.into(),
            rating,
            stock: stock.into(),
            image_url: image_url.into(),
        };
        for (name, value) in [
            ("title", &rec.title),
            ("price", &rec.price),
            ("stock", &rec.stock),
            ("image_url", &rec.image_url),
        ] {
            if value.trim().is_empty() {
                return Err(RecordError::EmptyField(name));
            }
        }
        Ok(rec)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookTable {
    records: Vec<BookRecord>,
}

impl BookTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[BookRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BookRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// New table with the records that pass `keep`, order preserved.
    pub fn filtered<F>(&self, keep: F) -> Self
    where
        F: Fn(&BookRecord) -> bool,
    {
        Self { records: self.records.iter().filter(|r| keep(r)).cloned().collect() }
    }
}

impl FromIterator<BookRecord> for BookTable {
    fn from_iter<I: IntoIterator<Item = BookRecord>>(iter: I) -> Self {
        Self { records: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a BookTable {
    type Item = &'a BookRecord;
    type IntoIter = std::slice::Iter<'a, BookRecord>;
    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Accumulates records in fetch order.
#[derive(Debug, Default)]
pub struct Collector {
    records: Vec<BookRecord>,
    pages: u32,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one page worth of records.
    pub fn push_page(&mut self, records: Vec<BookRecord>) {
        self.records.extend(records);
        self.pages += 1;
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn finish(self) -> BookTable {
        BookTable { records: self.records }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(title: &str, rating: Rating) -> BookRecord {
        BookRecord::new(title, "£1.00", rating, "In stock", "https://x/y.jpg").unwrap()
    }

    #[test]
    fn rating_parses_word_tokens_only() {
        assert_eq!("Three".parse::<Rating>(), Ok(Rating::Three));
        assert!("three".parse::<Rating>().is_err());
        assert!("3".parse::<Rating>().is_err());
    }

    #[test]
    fn record_rejects_empty_fields() {
        let err = BookRecord::new("T", "  ", Rating::One, "In stock", "u").unwrap_err();
        assert_eq!(err, RecordError::EmptyField("price"));
        let err = BookRecord::new("", "£1", Rating::One, "In stock", "u").unwrap_err();
        assert_eq!(err, RecordError::EmptyField("title"));
    }

    #[test]
    fn collector_keeps_fetch_order_and_duplicates() {
        let mut c = Collector::new();
        c.push_page(vec![rec("A", Rating::One), rec("B", Rating::Two)]);
        c.push_page(vec![rec("A", Rating::One)]);
        assert_eq!(c.pages(), 2);
        let t = c.finish();
        let titles: Vec<&str> = t.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", "A"]);
    }

    #[test]
    fn filtered_returns_new_table() {
        let t: BookTable = vec![rec("A", Rating::One), rec("B", Rating::Two)].into_iter().collect();
        let f = t.filtered(|r| r.rating == Rating::Two);
        assert_eq!(f.len(), 1);
        assert_eq!(t.len(), 2);
    }
}
