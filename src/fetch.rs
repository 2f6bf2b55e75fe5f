// src/fetch.rs
//
// Fill the local store with every bulletin in the run window that isn't there yet.
// Keys are independent: a pool of workers pulls them off a shared index, and the
// caller blocks until every key has reported back.

use std::{
    error::Error,
    path::PathBuf,
    sync::{Arc, atomic::{AtomicUsize, Ordering}, mpsc},
    thread,
    time::Duration,
};

use chrono::NaiveDate;
use reqwest::blocking::Client;

use crate::{
    bulletin::{BulletinKey, Month},
    config::{consts::JITTER_MS, options::FetchOptions},
    core::net,
    progress::Progress,
    series,
    store::BulletinStore,
};

pub type SourceError = Box<dyn Error + Send + Sync>;

/// Where bulletins come from. `Ok(None)` means "not published".
pub trait Source: Send + Sync {
    fn fetch(&self, key: &BulletinKey) -> Result<Option<String>, SourceError>;
}

/// Fill `{fiscal_year}`, `{year}` and `{month}` in an address template.
pub fn build_url(template: &str, key: &BulletinKey) -> String {
    template
        .replace("{fiscal_year}", &key.fiscal_year().to_string())
        .replace("{year}", &key.year.to_string())
        .replace("{month}", key.month.name())
}

/// The travel.state.gov bulletin pages.
pub struct HttpSource {
    client: Client,
    url_template: String,
}

impl HttpSource {
    pub fn new(opts: &FetchOptions) -> Result<Self, Box<dyn Error>> {
        Ok(Self { client: net::client(opts)?, url_template: opts.url_template.clone() })
    }

    pub fn url(&self, key: &BulletinKey) -> String {
        build_url(&self.url_template, key)
    }
}

impl Source for HttpSource {
    fn fetch(&self, key: &BulletinKey) -> Result<Option<String>, SourceError> {
        Ok(net::http_get(&self.client, &self.url(key))?)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Saved(PathBuf),
    /// Non-success response; try again on a later run.
    Unpublished,
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FetchSummary {
    /// Keys in the window that were already stored (never re-fetched).
    pub present: usize,
    pub requested: usize,
    pub saved: usize,
    pub unpublished: usize,
    pub failed: usize,
}

/// Every key from January of `today.year - past_years` through next month.
/// Bulletins come out ahead of their month, so next month may already exist;
/// anything later can't.
pub fn window(today: NaiveDate, past_years: u32) -> Vec<BulletinKey> {
    let first = BulletinKey::new(series::first_year(today, past_years), Month::January);
    let last = BulletinKey::from_date(today).next();

    let mut keys = Vec::new();
    let mut k = first;
    while k <= last {
        keys.push(k);
        k = k.next();
    }
    keys
}

/// Window keys split into (missing from store, already stored count).
pub fn plan(store: &BulletinStore, today: NaiveDate, past_years: u32) -> (Vec<BulletinKey>, usize) {
    let (present, missing): (Vec<_>, Vec<_>) = window(today, past_years)
        .into_iter()
        .partition(|k| store.exists(k));
    (missing, present.len())
}

/// Fetch and store every key in `keys`. Returns only after all of them are done.
pub fn fetch_missing(
    store: &BulletinStore,
    source: Arc<dyn Source>,
    keys: Vec<BulletinKey>,
    opts: &FetchOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> FetchSummary {
    let mut summary = FetchSummary { requested: keys.len(), ..Default::default() };

    if let Some(p) = progress.as_deref_mut() {
        p.begin(keys.len());
    }
    if keys.is_empty() {
        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        return summary;
    }

    let keys = Arc::new(keys);
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<(BulletinKey, FetchOutcome)>();

    let workers = opts.workers.min(keys.len()).max(1);
    let pause_ms = opts.pause_ms;

    let mut handles = Vec::with_capacity(workers);
    for _ in 0..workers {
        let keys = Arc::clone(&keys);
        let idx = Arc::clone(&counter);
        let source = Arc::clone(&source);
        let store = store.clone();
        let tx = res_tx.clone();

        handles.push(thread::spawn(move || {
            loop {
                let i = idx.fetch_add(1, Ordering::Relaxed);
                if i >= keys.len() {
                    break;
                }
                let key = keys[i];
                let outcome = fetch_one(&store, source.as_ref(), &key);
                let _ = tx.send((key, outcome));
                if pause_ms > 0 {
                    let jitter = (key.year as u64 * 12 + key.month.number() as u64) % JITTER_MS;
                    thread::sleep(Duration::from_millis(pause_ms + jitter)); // be polite
                }
            }
        }));
    }
    drop(res_tx); // main thread is sole receiver now

    for _ in 0..keys.len() {
        let Ok((key, outcome)) = res_rx.recv() else {
            break; // workers ended early
        };
        match &outcome {
            FetchOutcome::Saved(path) => {
                summary.saved += 1;
                logf!("Saved bulletin for {key} → {}", path.display());
            }
            FetchOutcome::Unpublished => {
                summary.unpublished += 1;
                logf!("Failed to fetch bulletin for {key} (not published)");
            }
            FetchOutcome::Failed(msg) => {
                summary.failed += 1;
                loge!("Failed to fetch bulletin for {key}: {msg}");
            }
        }
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&key, &outcome);
        }
    }

    for h in handles {
        if h.join().is_err() {
            loge!("Fetch: a worker panicked");
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    summary
}

fn fetch_one(store: &BulletinStore, source: &dyn Source, key: &BulletinKey) -> FetchOutcome {
    match source.fetch(key) {
        Ok(Some(doc)) => match store.save(key, &doc) {
            Ok(path) => FetchOutcome::Saved(path),
            Err(e) => FetchOutcome::Failed(format!("save failed: {e}")),
        },
        Ok(None) => FetchOutcome::Unpublished,
        Err(e) => FetchOutcome::Failed(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bulletin::Month::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn url_uses_fiscal_year_for_q4() {
        let t = "https://x/{fiscal_year}/visa-bulletin-for-{month}-{year}.html";
        assert_eq!(build_url(t, &BulletinKey::new(2024, November)), "https://x/2025/visa-bulletin-for-november-2024.html");
        assert_eq!(build_url(t, &BulletinKey::new(2024, March)), "https://x/2024/visa-bulletin-for-march-2024.html");
    }

    #[test]
    fn window_runs_through_next_month() {
        let keys = window(ymd(2025, 6, 20), 2);
        assert_eq!(keys.first(), Some(&BulletinKey::new(2023, January)));
        assert_eq!(keys.last(), Some(&BulletinKey::new(2025, July)));
        assert_eq!(keys.len(), 12 * 2 + 7);
    }

    #[test]
    fn window_in_december_reaches_into_next_year() {
        let keys = window(ymd(2024, 12, 1), 0);
        assert_eq!(keys.first(), Some(&BulletinKey::new(2024, January)));
        assert_eq!(keys.last(), Some(&BulletinKey::new(2025, January)));
    }

    #[test]
    fn window_never_exceeds_capped_lookback() {
        let keys = window(ymd(2025, 3, 10), 1_000_000);
        assert_eq!(keys.first(), Some(&BulletinKey::new(1995, January)));
        assert_eq!(keys.len(), 30 * 12 + 4);
    }
}
