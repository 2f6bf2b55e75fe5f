// src/extract.rs
//
// Pulls one category/country cutoff (EB1 India by default) out of a bulletin page.
//
// Bulletins are loosely structured HTML with several cutoff tables. The page
// layout is the only thing telling the tables apart: the final action table
// comes before the dates-for-filing table. So:
//
//   1. Walk tables in document order.
//   2. Header row (first row): find the column whose text contains the column label.
//      No such column → the table is skipped.
//   3. Body rows: the first row whose first cell equals the row label holds the code.
//      No such row, or the row is too short → the table is skipped.
//   4. Each code found fills the next slot (see `ExtractOptions::slots`); stop at two.
//
// Nothing in here fails. Anything unexpected degrades to `CategoryDate::Unavailable`.

use chrono::NaiveDate;

use crate::bulletin::{CategoryDate, DateKind, Month};
use crate::config::options::ExtractOptions;
use crate::core::html::{self, Table};
use crate::core::sanitize::{contains_ci, equals_ci};

/// Code printed when there is no backlog.
pub const CURRENT: &str = "C";
/// Code printed when no visas are available.
pub const UNAVAILABLE: &str = "U";
/// Two-digit years from here up are read as 19xx.
const YY_PIVOT: i32 = 69;

#[derive(Clone, Debug)]
pub struct Extractor {
    column_label: String,
    row_label: String,
    slots: [DateKind; 2],
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(&ExtractOptions::default())
    }
}

impl Extractor {
    pub fn new(opts: &ExtractOptions) -> Self {
        Self {
            column_label: opts.column_label.clone(),
            row_label: opts.row_label.clone(),
            slots: opts.slots,
        }
    }

    /// Returns `(final_action, filing)` for one bulletin page.
    /// `bulletin_date` is what a "C" (current) code resolves to.
    pub fn extract(&self, doc: &str, bulletin_date: NaiveDate) -> (CategoryDate, CategoryDate) {
        self.extract_tables(&html::tables(doc), bulletin_date)
    }

    /// Same as `extract`, on tables that are already parsed.
    pub fn extract_tables(&self, tables: &[Table], bulletin_date: NaiveDate) -> (CategoryDate, CategoryDate) {
        let found: Vec<CategoryDate> = tables
            .iter()
            .filter_map(|t| self.read_code(t))
            .take(self.slots.len())
            .map(|code| decode(code, bulletin_date))
            .collect();

        let mut final_action = CategoryDate::Unavailable;
        let mut filing = CategoryDate::Unavailable;
        for (kind, value) in self.slots.iter().zip(found) {
            match kind {
                DateKind::FinalAction => final_action = value,
                DateKind::Filing => filing = value,
            }
        }
        logd!("Extract: {bulletin_date} final_action={final_action} filing={filing}");
        (final_action, filing)
    }

    /// Raw code at (row label, column label), if this table has both.
    fn read_code<'t>(&self, table: &'t Table) -> Option<&'t str> {
        let col = table
            .header()?
            .iter()
            .position(|h| contains_ci(h, &self.column_label))?;

        let row = table
            .body()
            .iter()
            .find(|r| r.first().is_some_and(|c| equals_ci(c, &self.row_label)))?;

        row.get(col).map(|c| c.trim())
    }
}

/// Decode one cell: "C" → current (the bulletin date), "U" → unavailable,
/// `DDMONYY` → that date, anything else → unavailable.
pub fn decode(code: &str, bulletin_date: NaiveDate) -> CategoryDate {
    match code {
        CURRENT => CategoryDate::Current(bulletin_date),
        UNAVAILABLE => CategoryDate::Unavailable,
        other => match parse_compact_date(other) {
            Some(d) => CategoryDate::Dated(d),
            None => {
                logd!("Extract: Unrecognized code '{other}'");
                CategoryDate::Unavailable
            }
        },
    }
}

/// `15JAN24` style: two-digit day, three-letter month (any case), two-digit year.
/// Years `69..=99` are 19xx, `00..=68` are 20xx.
pub fn parse_compact_date(code: &str) -> Option<NaiveDate> {
    let b = code.as_bytes();
    if b.len() != 7 {
        return None;
    }
    let shape_ok = b[..2].iter().all(u8::is_ascii_digit)
        && b[2..5].iter().all(u8::is_ascii_alphabetic)
        && b[5..].iter().all(u8::is_ascii_digit);
    if !shape_ok {
        return None;
    }
    let day: u32 = code[..2].parse().ok()?;
    let month = Month::ALL
        .into_iter()
        .find(|m| m.name()[..3].eq_ignore_ascii_case(&code[2..5]))?;
    let yy: i32 = code[5..].parse().ok()?;
    let year = if yy >= YY_PIVOT { 1900 + yy } else { 2000 + yy };
    NaiveDate::from_ymd_opt(year, month.number(), day)
}
