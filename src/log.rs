// src/log.rs
//
// Leveled append-only file log. Operator-facing progress goes through
// `progress::Progress`; this is for after-the-fact debugging.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Error,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Error => "ERROR",
        }
    }
}

struct Sink {
    path: Option<PathBuf>,
    min: Level,
}

static SINK: Mutex<Sink> = Mutex::new(Sink { path: None, min: Level::Info });
static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Point the log at `path` (parent dirs created) and set the lowest level written.
/// Until this is called nothing is written.
pub fn init(path: &Path, min: Level) {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            let _ = fs::create_dir_all(parent);
        }
    }
    start();
    if let Ok(mut sink) = SINK.lock() {
        sink.path = Some(path.to_path_buf());
        sink.min = min;
    }
}

pub fn write_log(level: Level, msg: &str) {
    let Ok(sink) = SINK.lock() else { return };
    if level < sink.min {
        return;
    }
    let Some(path) = sink.path.as_ref() else { return };

    let elapsed = fmt_elapsed(start().elapsed().as_millis());
    let line = format!("[{elapsed}][{}] {msg}\n", level.tag());

    // Lock is still held here, so concurrent workers never interleave lines.
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = file.write_all(line.as_bytes());
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Info, &format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Debug, &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Error, &format!($($arg)*))
    };
}
