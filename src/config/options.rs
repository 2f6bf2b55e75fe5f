// src/config/options.rs
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::bulletin::DateKind;
use super::consts::*;

/// Everything a run needs. Built from defaults, then the settings file,
/// then command-line flags; components get the part they need at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub store: StoreOptions,
    pub fetch: FetchOptions,
    pub extract: ExtractOptions,
    pub chart: ChartOptions,
    /// How many calendar years before the current one to include.
    pub past_years: u32,
    /// Skip the fetch phase; chart whatever is already stored.
    pub offline: bool,
    pub verbose: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            store: StoreOptions::default(),
            fetch: FetchOptions::default(),
            extract: ExtractOptions::default(),
            chart: ChartOptions::default(),
            past_years: PAST_YEARS,
            offline: false,
            verbose: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    pub root: PathBuf,
    /// File extension for stored documents, without the dot.
    pub ext: String,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self { root: PathBuf::from(STORE_DIR), ext: s!(STORE_EXT) }
    }
}

impl StoreOptions {
    pub fn log_path(&self) -> PathBuf {
        self.root.join(LOG_FILE)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    /// Address with `{fiscal_year}`, `{year}` and `{month}` placeholders.
    pub url_template: String,
    pub workers: usize,
    pub pause_ms: u64,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            url_template: s!(URL_TEMPLATE),
            workers: WORKERS,
            pause_ms: REQUEST_PAUSE_MS,
            timeout_secs: TIMEOUT_SECS,
            user_agent: s!(USER_AGENT),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Header text that marks the country column (substring match).
    pub column_label: String,
    /// First-cell text that marks the category row (exact match).
    pub row_label: String,
    /// Which date each matching table holds, in page order.
    pub slots: [DateKind; 2],
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            column_label: s!(COLUMN_LABEL),
            row_label: s!(ROW_LABEL),
            // Bulletins print final action dates before dates for filing.
            slots: [DateKind::FinalAction, DateKind::Filing],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartOptions {
    /// Priority date the gap line measures against.
    pub target_date: NaiveDate,
}

impl Default for ChartOptions {
    fn default() -> Self {
        let (y, m, d) = TARGET_DATE;
        Self { target_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default() }
    }
}
