// src/config/file.rs
//
// Optional `key=value` settings file. Lines starting with '#' are comments,
// unknown keys are ignored, and a value that doesn't parse leaves the
// current setting alone.

use std::{fs, io, path::{Path, PathBuf}};

use chrono::NaiveDate;

use crate::bulletin::DateKind;
use super::{consts::MAX_PAST_YEARS, options::Options};

/// Apply `path` on top of `opts`. Returns `Ok(false)` when the file doesn't exist.
pub fn load(path: &Path, opts: &mut Options) -> io::Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let text = fs::read_to_string(path)?;
    apply(&text, opts);
    logf!("Config: Loaded {}", path.display());
    Ok(true)
}

pub fn apply(text: &str, opts: &mut Options) {
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some((key, val)) = line.split_once('=') else { continue };
        let (key, val) = (key.trim(), val.trim());

        let ok = match key {
            "store_dir" => { opts.store.root = PathBuf::from(val); true }
            "ext" => set_nonempty(&mut opts.store.ext, val.trim_start_matches('.')),
            "url_template" => set_nonempty(&mut opts.fetch.url_template, val),
            "user_agent" => set_nonempty(&mut opts.fetch.user_agent, val),
            "workers" => set_parsed(&mut opts.fetch.workers, val),
            "pause_ms" => set_parsed(&mut opts.fetch.pause_ms, val),
            "timeout_secs" => set_parsed(&mut opts.fetch.timeout_secs, val),
            "column_label" => set_nonempty(&mut opts.extract.column_label, val),
            "row_label" => set_nonempty(&mut opts.extract.row_label, val),
            "slots" => match parse_slots(val) {
                Some(slots) => { opts.extract.slots = slots; true }
                None => false,
            },
            "target_date" => match parse_date(val) {
                Some(d) => { opts.chart.target_date = d; true }
                None => false,
            },
            "past_years" => match val.parse::<u32>() {
                Ok(n) if n <= MAX_PAST_YEARS => { opts.past_years = n; true }
                _ => false,
            },
            "offline" => { opts.offline = parse_bool(val); true }
            "verbose" => { opts.verbose = parse_bool(val); true }
            _ => { logd!("Config: Ignoring unknown key '{key}'"); true }
        };
        if !ok {
            loge!("Config: Bad value for '{key}': '{val}'");
        }
    }
}

fn set_nonempty(slot: &mut String, val: &str) -> bool {
    if val.is_empty() { return false; }
    *slot = s!(val);
    true
}

fn set_parsed<T: std::str::FromStr>(slot: &mut T, val: &str) -> bool {
    match val.parse() {
        Ok(v) => { *slot = v; true }
        Err(_) => false,
    }
}

fn parse_bool(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true") || val.eq_ignore_ascii_case("yes")
}

/// `YYYY-MM-DD`
pub fn parse_date(val: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(val.trim(), "%Y-%m-%d").ok()
}

/// `final_action,filing` or `filing,final_action`
pub fn parse_slots(val: &str) -> Option<[DateKind; 2]> {
    let kinds: Vec<DateKind> = val
        .split(',')
        .map(|p| match p.trim().to_ascii_lowercase().as_str() {
            "final_action" | "final" => Some(DateKind::FinalAction),
            "filing" => Some(DateKind::Filing),
            _ => None,
        })
        .collect::<Option<_>>()?;
    match kinds.as_slice() {
        [a, b] if a != b => Some([*a, *b]),
        _ => None,
    }
}
