// src/pipeline.rs
//
// One batch: fetch what's missing (and wait for it), then scan + extract.

use std::{error::Error, sync::Arc};

use chrono::{Local, NaiveDate};

use crate::{
    bulletin::Series,
    config::Options,
    extract::Extractor,
    fetch::{self, FetchSummary, HttpSource, Source},
    progress::Progress,
    series,
    store::BulletinStore,
};

/// What a run produced.
#[derive(Clone, Debug, Default)]
pub struct RunReport {
    /// `None` when the fetch phase was skipped (offline).
    pub fetch: Option<FetchSummary>,
    pub series: Series,
}

/// Run against the live bulletin site, dated today.
pub fn run(opts: &Options, progress: Option<&mut dyn Progress>) -> Result<RunReport, Box<dyn Error>> {
    let today = Local::now().date_naive();
    let source: Option<Arc<dyn Source>> = if opts.offline {
        None
    } else {
        Some(Arc::new(HttpSource::new(&opts.fetch)?))
    };
    run_with(opts, today, source, progress)
}

/// Run with an explicit date and bulletin source. `source = None` skips fetching.
pub fn run_with(
    opts: &Options,
    today: NaiveDate,
    source: Option<Arc<dyn Source>>,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunReport, Box<dyn Error>> {
    let store = BulletinStore::new(&opts.store.root, &opts.store.ext);
    logf!(
        "Run: Begin today={today} past_years={} store={} offline={}",
        opts.past_years,
        store.root().display(),
        source.is_none()
    );

    let fetch = match source {
        Some(source) => {
            let (missing, present) = fetch::plan(&store, today, opts.past_years);
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("{present} bulletin(s) cached, fetching {}…", missing.len()));
            }
            let mut summary = fetch::fetch_missing(&store, source, missing, &opts.fetch, progress.as_deref_mut());
            summary.present = present;
            logf!(
                "Run: Fetch done saved={} unpublished={} failed={} present={}",
                summary.saved, summary.unpublished, summary.failed, summary.present
            );
            Some(summary)
        }
        None => None,
    };

    if let Some(p) = progress.as_deref_mut() {
        p.log("Extracting dates…");
    }
    let extractor = Extractor::new(&opts.extract);
    let series = series::scan_store(&store, opts.past_years, today, &extractor)?;
    logf!("Run: Extracted {} record(s)", series.len());

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Extracted {} bulletin(s)", series.len()));
    }
    Ok(RunReport { fetch, series })
}
