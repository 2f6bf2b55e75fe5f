// src/bulletin.rs
//
// Bulletin identity (year + month), the derived bulletin date, and the
// per-category date values pulled out of a bulletin.

use std::fmt;

use chrono::{Datelike, NaiveDate};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

use Month::*;

impl Month {
    pub const ALL: [Month; 12] = [
        January, February, March, April, May, June,
        July, August, September, October, November, December,
    ];

    /// Lowercase English name; used for store file names and bulletin addresses.
    pub fn name(self) -> &'static str {
        match self {
            January => "january",
            February => "february",
            March => "march",
            April => "april",
            May => "may",
            June => "june",
            July => "july",
            August => "august",
            September => "september",
            October => "october",
            November => "november",
            December => "december",
        }
    }

    /// Exact lowercase name match only.
    pub fn from_name(name: &str) -> Option<Month> {
        Month::ALL.into_iter().find(|m| m.name() == name)
    }

    /// 1..=12
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    pub fn from_number(n: u32) -> Option<Month> {
        Month::ALL.get(n.checked_sub(1)? as usize).copied()
    }

    fn opens_fiscal_year(self) -> bool {
        matches!(self, October | November | December)
    }
}

/// One published bulletin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BulletinKey {
    pub year: i32,
    pub month: Month,
}

impl BulletinKey {
    pub fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// The US fiscal year starts in October.
    pub fn fiscal_year(&self) -> i32 {
        if self.month.opens_fiscal_year() { self.year + 1 } else { self.year }
    }

    /// First day of the bulletin's month. `None` only for years chrono can't represent.
    pub fn bulletin_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.number(), 1)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        // month() is always 1..=12
        let month = Month::from_number(date.month()).unwrap_or(January);
        Self { year: date.year(), month }
    }

    pub fn next(&self) -> Self {
        match self.month {
            December => Self::new(self.year + 1, January),
            m => Self::new(self.year, Month::ALL[m as usize + 1]),
        }
    }
}

impl fmt::Display for BulletinKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month.name(), self.year)
    }
}

/// A priority date cutoff as printed in one cell of a bulletin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryDate {
    Dated(NaiveDate),
    /// "C": no backlog; the cutoff is the bulletin's own date.
    Current(NaiveDate),
    /// "U", unparsable, or not found.
    Unavailable,
}

impl CategoryDate {
    pub fn date(&self) -> Option<NaiveDate> {
        match *self {
            CategoryDate::Dated(d) | CategoryDate::Current(d) => Some(d),
            CategoryDate::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, CategoryDate::Unavailable)
    }
}

impl fmt::Display for CategoryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryDate::Dated(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            CategoryDate::Current(_) => f.write_str("C"),
            CategoryDate::Unavailable => f.write_str("U"),
        }
    }
}

/// Which cutoff table a date came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateKind {
    FinalAction,
    Filing,
}

/// Dates extracted from one bulletin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtractionRecord {
    pub key: BulletinKey,
    pub bulletin_date: NaiveDate,
    pub final_action: CategoryDate,
    pub filing: CategoryDate,
}

impl ExtractionRecord {
    pub fn get(&self, kind: DateKind) -> CategoryDate {
        match kind {
            DateKind::FinalAction => self.final_action,
            DateKind::Filing => self.filing,
        }
    }
}

/// Records ordered by bulletin date.
pub type Series = Vec<ExtractionRecord>;
