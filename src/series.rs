// src/series.rs
//
// Stored bulletins → time series of extracted dates, oldest first.

use std::io;

use chrono::{Datelike, NaiveDate};

use crate::{
    bulletin::{BulletinKey, ExtractionRecord, Series},
    config::consts::MAX_PAST_YEARS,
    extract::Extractor,
    store::BulletinStore,
};

/// First calendar year of a `window_years` lookback. The lookback is capped
/// at `MAX_PAST_YEARS`.
pub fn first_year(today: NaiveDate, window_years: u32) -> i32 {
    today.year() - window_years.min(MAX_PAST_YEARS) as i32
}

/// Keeps bulletins from January of `today.year - window_years` onwards.
pub fn in_window(key: &BulletinKey, window_years: u32, today: NaiveDate) -> bool {
    key.year >= first_year(today, window_years)
}

/// Extract every in-window document, sorted by bulletin date whatever the input order.
pub fn build_series<I>(documents: I, window_years: u32, today: NaiveDate, extractor: &Extractor) -> Series
where
    I: IntoIterator<Item = (BulletinKey, String)>,
{
    let mut docs: Vec<(NaiveDate, BulletinKey, String)> = documents
        .into_iter()
        .filter(|(key, _)| in_window(key, window_years, today))
        .filter_map(|(key, doc)| Some((key.bulletin_date()?, key, doc)))
        .collect();
    docs.sort_by_key(|(date, key, _)| (*date, *key));

    docs.into_iter()
        .map(|(bulletin_date, key, doc)| {
            let (final_action, filing) = extractor.extract(&doc, bulletin_date);
            ExtractionRecord { key, bulletin_date, final_action, filing }
        })
        .collect()
}

/// `build_series` over everything in the store. Unreadable files are logged and skipped.
pub fn scan_store(
    store: &BulletinStore,
    window_years: u32,
    today: NaiveDate,
    extractor: &Extractor,
) -> io::Result<Series> {
    let mut keys: Vec<BulletinKey> = store
        .scan()?
        .into_iter()
        .map(|(key, _)| key)
        .filter(|key| in_window(key, window_years, today))
        .collect();
    keys.sort();
    logf!("Scan: {} bulletin(s) in window under {}", keys.len(), store.root().display());

    let docs = keys.into_iter().filter_map(|key| match store.read(&key) {
        Ok(doc) => Some((key, doc)),
        Err(e) => {
            loge!("Scan: Could not read {key}: {e}");
            None
        }
    });
    Ok(build_series(docs, window_years, today, extractor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bulletin::Month::*;

    #[test]
    fn window_is_inclusive_of_lower_year() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert!(in_window(&BulletinKey::new(2023, January), 2, today));
        assert!(!in_window(&BulletinKey::new(2022, December), 2, today));
        assert!(in_window(&BulletinKey::new(2025, April), 0, today));
        assert!(!in_window(&BulletinKey::new(2024, December), 0, today));
    }

    #[test]
    fn huge_lookback_is_capped() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert_eq!(first_year(today, u32::MAX), 2025 - MAX_PAST_YEARS as i32);
        assert_eq!(first_year(today, 2_147_483_648), 1995);
        assert!(in_window(&BulletinKey::new(2025, January), u32::MAX, today));
        assert!(!in_window(&BulletinKey::new(1994, December), u32::MAX, today));
    }
}
