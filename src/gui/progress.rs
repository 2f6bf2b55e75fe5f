// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::bulletin::BulletinKey;
use crate::fetch::FetchOutcome;
use crate::progress::Progress;

/// Writes into the window's status line from the pipeline thread.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx, done: 0, total: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn item_done(&mut self, key: &BulletinKey, outcome: &FetchOutcome) {
        self.done += 1;
        let what = match outcome {
            FetchOutcome::Saved(_) => "Saved",
            FetchOutcome::Unpublished => "Not published",
            FetchOutcome::Failed(_) => "Failed",
        };
        self.set_status(format!("{what}: {key} ({}/{})", self.done, self.total));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status("All bulletins cached");
        } else {
            self.set_status(format!("Fetch complete ({}/{})", self.done, self.total));
        }
    }
}
