// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::{
    bulletin::{BulletinKey, Series},
    chart,
    config::{self, consts::{CONFIG_FILE, MAX_PAST_YEARS}, Options},
    fetch::FetchOutcome,
    log::{self, Level},
    pipeline,
    progress::Progress,
};

pub const USAGE: &str = "\
Usage: bulletin_plot [YEARS] [options]

  YEARS                  past years to include, 0 to 30 (default 3)
  -s, --store DIR        bulletin cache directory (default ./bulletins)
  -c, --config FILE      settings file (default ./bulletin.cfg if present)
      --target DATE      priority date for the gap readout, YYYY-MM-DD
      --offline          don't fetch; use cached bulletins only
  -v, --verbose          debug lines in <store>/debug.log
  -h, --help             this text";

pub enum Command {
    Run(Options),
    Help,
}

/// Parse the process arguments.
pub fn from_env() -> Result<Command, Box<dyn Error>> {
    parse_args(env::args().skip(1))
}

/// Defaults, then the settings file, then flags.
pub fn parse_args<I>(args: I) -> Result<Command, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();

    let mut opts = Options::default();
    let explicit_cfg = args
        .iter()
        .position(|a| a == "-c" || a == "--config")
        .map(|i| args.get(i + 1).map(PathBuf::from).ok_or("Missing value for --config"))
        .transpose()?;
    match &explicit_cfg {
        Some(p) => {
            if !config::file::load(p, &mut opts)? {
                return Err(format!("Config file not found: {}", p.display()).into());
            }
        }
        None => { config::file::load(&PathBuf::from(CONFIG_FILE), &mut opts)?; }
    }

    let mut it = args.into_iter();
    while let Some(a) = it.next() {
        match a.as_str() {
            "-c" | "--config" => { it.next(); } // already applied
            "-s" | "--store" => opts.store.root = PathBuf::from(it.next().ok_or("Missing store directory")?),
            "--target" => {
                let v = it.next().ok_or("Missing value for --target")?;
                opts.chart.target_date = config::file::parse_date(&v)
                    .ok_or_else(|| format!("Bad date for --target: {v} (want YYYY-MM-DD)"))?;
            }
            "--offline" => opts.offline = true,
            "-v" | "--verbose" => opts.verbose = true,
            "-h" | "--help" => return Ok(Command::Help),
            other if !other.starts_with('-') => {
                opts.past_years = parse_years(other)
                    .ok_or_else(|| format!("YEARS must be a whole number from 0 to {MAX_PAST_YEARS}, got '{other}'"))?;
            }
            _ => return Err(format!("Unknown arg: {a}").into()),
        }
    }
    Ok(Command::Run(opts))
}

fn parse_years(v: &str) -> Option<u32> {
    v.parse().ok().filter(|n| *n <= MAX_PAST_YEARS)
}

/// Send the file log to `<store>/debug.log`.
pub fn init_logging(opts: &Options) {
    let level = if opts.verbose { Level::Debug } else { Level::Info };
    log::init(&opts.store.log_path(), level);
}

/// Prints fetch progress to stderr.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, key: &BulletinKey, outcome: &FetchOutcome) {
        match outcome {
            FetchOutcome::Saved(_) => eprintln!("Saved bulletin for {key}"),
            FetchOutcome::Unpublished => eprintln!("Failed to fetch bulletin for {key}"),
            FetchOutcome::Failed(e) => eprintln!("Failed to fetch bulletin for {key}: {e}"),
        }
    }
}

/// Fetch, extract, print the series table.
pub fn run(opts: &Options) -> Result<(), Box<dyn Error>> {
    let mut progress = ConsoleProgress;
    let report = pipeline::run(opts, Some(&mut progress))?;
    print!("{}", render_text(&report.series, opts.chart.target_date));
    Ok(())
}

/// Plain-text rendition: every record, then the gap for the plotted ones.
pub fn render_text(series: &Series, target: chrono::NaiveDate) -> String {
    let points = chart::plottable(series);
    if points.is_empty() {
        return s!("Nothing to display\n");
    }

    let mut out = format!("{:<10}  {:<12}  {:<12}\n", "Bulletin", "Final action", "Filing");
    for r in series {
        out.push_str(&format!(
            "{:<10}  {:<12}  {:<12}\n",
            r.bulletin_date.format("%Y-%m").to_string(),
            r.final_action.to_string(),
            r.filing.to_string(),
        ));
    }
    if let Some((latest, gap)) = chart::filing_gap(&points, target) {
        out.push_str(&format!("\nLatest filing date {latest} → target {target}: {gap}\n"));
    }
    out
}
