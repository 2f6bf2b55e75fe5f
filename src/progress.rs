// src/progress.rs
use crate::bulletin::BulletinKey;
use crate::fetch::FetchOutcome;

/// Coarse progress for the operator. Frontends (GUI/CLI) implement this;
/// the pipeline calls it from the coordinating thread only.
pub trait Progress {
    /// Called before fetching with the number of bulletins that will be requested.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One bulletin request finished, whatever the outcome.
    fn item_done(&mut self, _key: &BulletinKey, _outcome: &FetchOutcome) {}

    /// Fetch phase over (the barrier has been passed).
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
