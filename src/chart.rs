// src/chart.rs
//
// Frontend-agnostic chart model: which records get plotted, date <-> axis
// conversion, the gap readout, and point picking. The egui view lives in
// `gui::components::chart`.

use std::{fmt, io, process::Command};

use chrono::{Datelike, NaiveDate};

use crate::bulletin::{BulletinKey, Series};
use crate::fetch::build_url;

/// A record with both dates resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartPoint {
    pub key: BulletinKey,
    pub bulletin: NaiveDate,
    pub final_action: NaiveDate,
    pub filing: NaiveDate,
}

/// Records where either date is unavailable are dropped; order is kept.
pub fn plottable(series: &Series) -> Vec<ChartPoint> {
    series
        .iter()
        .filter_map(|r| {
            Some(ChartPoint {
                key: r.key,
                bulletin: r.bulletin_date,
                final_action: r.final_action.date()?,
                filing: r.filing.date()?,
            })
        })
        .collect()
}

/// Dates on a plot axis are days since 0001-01-01.
pub fn to_axis(d: NaiveDate) -> f64 {
    d.num_days_from_ce() as f64
}

pub fn from_axis(x: f64) -> Option<NaiveDate> {
    if !x.is_finite() || x.abs() > i32::MAX as f64 {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
}

/// Distance between two dates in the bulletin-watcher's rough units:
/// 365-day years, 30-day months.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gap {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    /// `from` is already past `to`.
    pub passed: bool,
}

impl Gap {
    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        let total = (to - from).num_days();
        let d = total.abs();
        Self {
            years: d / 365,
            months: (d % 365) / 30,
            days: (d % 365) % 30,
            passed: total < 0,
        }
    }
}

impl fmt::Display for Gap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} years, {} months, {} days", self.years, self.months, self.days)?;
        if self.passed {
            f.write_str(" past")?;
        }
        Ok(())
    }
}

/// Gap from the latest plotted filing date to `target`.
pub fn filing_gap(points: &[ChartPoint], target: NaiveDate) -> Option<(NaiveDate, Gap)> {
    let latest = points.last()?.filing;
    Some((latest, Gap::between(latest, target)))
}

/// Point under the pointer, if any marker (filing or final action) is within
/// `radius` screen units. `to_screen` maps (x, y) axis values to screen space.
pub fn hit_test<F>(points: &[ChartPoint], pointer: (f32, f32), radius: f32, to_screen: F) -> Option<BulletinKey>
where
    F: Fn(f64, f64) -> (f32, f32),
{
    let dist2 = |(x, y): (f32, f32)| (x - pointer.0).powi(2) + (y - pointer.1).powi(2);
    points
        .iter()
        .flat_map(|p| {
            let x = to_axis(p.bulletin);
            [
                (p.key, dist2(to_screen(x, to_axis(p.filing)))),
                (p.key, dist2(to_screen(x, to_axis(p.final_action)))),
            ]
        })
        .filter(|(_, d)| *d <= radius * radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(key, _)| key)
}

/// What happens when a plotted bulletin is selected.
pub type BulletinHandler = Box<dyn FnMut(&BulletinKey) + Send>;

/// Opens the bulletin's page in the system browser.
pub fn browser_handler(url_template: String) -> BulletinHandler {
    Box::new(move |key| {
        let url = build_url(&url_template, key);
        logf!("Chart: Opening {url}");
        if let Err(e) = open_in_browser(&url) {
            loge!("Chart: Could not open {url}: {e}");
        }
    })
}

fn open_in_browser(url: &str) -> io::Result<()> {
    #[cfg(target_os = "macos")]
    Command::new("open").arg(url).spawn()?;
    #[cfg(target_os = "windows")]
    Command::new("cmd").args(["/C", "start", "", url]).spawn()?;
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    Command::new("xdg-open").arg(url).spawn()?;
    Ok(())
}
