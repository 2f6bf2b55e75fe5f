// src/config/consts.rs

// Bulletin source
pub const URL_TEMPLATE: &str = "https://travel.state.gov/content/travel/en/legal/visa-law0/visa-bulletin/{fiscal_year}/visa-bulletin-for-{month}-{year}.html";
pub const USER_AGENT: &str = "bulletin_plot/0.3";
pub const TIMEOUT_SECS: u64 = 30;

// Local cache
pub const STORE_DIR: &str = "bulletins";
pub const STORE_EXT: &str = "html";
pub const LOG_FILE: &str = "debug.log";
pub const CONFIG_FILE: &str = "bulletin.cfg";

// Extraction
pub const COLUMN_LABEL: &str = "INDIA";
pub const ROW_LABEL: &str = "1st";

// Run
pub const PAST_YEARS: u32 = 3;
pub const MAX_PAST_YEARS: u32 = 30;
pub const TARGET_DATE: (i32, u32, u32) = (2024, 1, 1); // priority date being tracked

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms
