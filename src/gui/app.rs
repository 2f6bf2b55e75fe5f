// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
    thread,
};

use eframe::egui;

use crate::{
    bulletin::{BulletinKey, Series},
    chart::{self, BulletinHandler, ChartPoint},
    config::{consts::MAX_PAST_YEARS, Options},
    pipeline,
};

use super::{components, progress::GuiProgress};

type RunResult = Result<Series, String>;

pub fn run(native: eframe::NativeOptions, options: Options, handler: BulletinHandler) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "EB1 India Bulletin Progression",
        native,
        Box::new(move |cc| Ok(Box::new(App::new(&cc.egui_ctx, options, handler)))),
    )?;
    Ok(())
}

pub struct App {
    pub options: Options,

    // status/progress (pipeline thread writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    finished: Arc<Mutex<Option<RunResult>>>,

    // what's on screen
    pub series: Series,
    pub points: Vec<ChartPoint>,
    pub selected: Option<BulletinKey>,

    on_select: BulletinHandler,
}

impl App {
    pub fn new(ctx: &egui::Context, options: Options, on_select: BulletinHandler) -> Self {
        let mut app = Self {
            options,
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            finished: Arc::new(Mutex::new(None)),
            series: Series::new(),
            points: Vec::new(),
            selected: None,
            on_select,
        };
        app.start_run(ctx);
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Fetch + extract on a worker thread; the window keeps painting meanwhile.
    pub fn start_run(&mut self, ctx: &egui::Context) {
        if self.running {
            return;
        }
        self.running = true;
        self.status("Starting…");
        logf!("UI: Run begin past_years={}", self.options.past_years);

        let options = self.options.clone();
        let status = Arc::clone(&self.status);
        let finished = Arc::clone(&self.finished);
        let ctx = ctx.clone();

        thread::spawn(move || {
            let mut prog = GuiProgress::new(status, ctx.clone());
            let res = pipeline::run(&options, Some(&mut prog))
                .map(|report| report.series)
                .map_err(|e| e.to_string());
            if let Ok(mut slot) = finished.lock() {
                *slot = Some(res);
            }
            ctx.request_repaint();
        });
    }

    /// Pick up a finished run, if there is one.
    fn poll_run(&mut self) {
        let done = self.finished.lock().ok().and_then(|mut slot| slot.take());
        let Some(res) = done else { return };
        self.running = false;

        match res {
            Ok(series) => {
                self.points = chart::plottable(&series);
                self.series = series;
                logf!("UI: Run done records={} plotted={}", self.series.len(), self.points.len());
                if self.points.is_empty() {
                    self.status("Nothing to display");
                } else {
                    self.status(format!("Ready: {} bulletin(s) plotted", self.points.len()));
                }
            }
            Err(e) => {
                loge!("UI: Run failed: {e}");
                self.status(format!("Error: {e}"));
            }
        }
    }

    pub fn select(&mut self, key: BulletinKey) {
        self.selected = Some(key);
        (self.on_select)(&key);
    }

    fn gap_text(&self) -> Option<String> {
        let target = self.options.chart.target_date;
        let (latest, gap) = chart::filing_gap(&self.points, target)?;
        Some(format!("Latest filing date {latest} → target {target}: {gap}"))
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_run();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("EB1 India: Final Action and Filing Dates Progression");
            ui.horizontal(|ui| {
                ui.label("Past years:");
                ui.add_enabled(
                    !self.running,
                    egui::DragValue::new(&mut self.options.past_years).range(0..=MAX_PAST_YEARS),
                );
                if ui.add_enabled(!self.running, egui::Button::new("Refresh")).clicked() {
                    self.start_run(ctx);
                }
                if self.running {
                    ui.add(egui::Spinner::new());
                }
                ui.separator();
                ui.label(self.status_text());
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("gap").show(ctx, |ui| {
            match self.gap_text() {
                Some(t) => ui.label(t),
                None => ui.weak("No filing dates yet"),
            };
        });

        egui::SidePanel::left("series")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| {
                components::series_table::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::chart::draw(ui, self);
        });
    }
}
