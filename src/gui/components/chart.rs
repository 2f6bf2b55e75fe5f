// src/gui/components/chart.rs
//
// Filing date, final action date and the bulletin date itself, plotted
// against bulletin date. Clicking a marker hands its bulletin to the
// app's handler.

use std::ops::RangeInclusive;

use eframe::egui::{self, Color32};
use egui_plot::{Corner, GridMark, Legend, Line, LineStyle, MarkerShape, Plot, PlotPoint, Points};

use crate::chart::{self, ChartPoint};
use crate::gui::app::App;

const FILING: Color32 = Color32::from_rgb(0x2e, 0xcc, 0x71);
const FINAL_ACTION: Color32 = Color32::from_rgb(0x34, 0x98, 0xdb);
const CURRENT: Color32 = Color32::from_rgb(0xe7, 0x4c, 0x3c);

/// Pick radius around markers, in points.
const PICK_RADIUS: f32 = 8.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.points.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(if app.running { "Loading…" } else { "Nothing to display" });
        });
        return;
    }

    let filing = series(&app.points, |p| p.filing);
    let final_action = series(&app.points, |p| p.final_action);
    let current = series(&app.points, |p| p.bulletin);

    let resp = Plot::new("eb1_progress")
        .legend(Legend::default().position(Corner::LeftTop))
        .x_axis_label("Bulletin Date")
        .y_axis_label("Date")
        .x_axis_formatter(date_ticks)
        .y_axis_formatter(date_ticks)
        .label_formatter(|name, value| {
            let x = chart::from_axis(value.x).map(|d| d.to_string()).unwrap_or_default();
            let y = chart::from_axis(value.y).map(|d| d.to_string()).unwrap_or_default();
            if name.is_empty() { format!("{x}\n{y}") } else { format!("{name}\nbulletin {x}\ndate {y}") }
        })
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new("Date of Filing", filing.clone()).color(FILING).width(2.0));
            plot_ui.points(
                Points::new("Date of Filing", filing)
                    .shape(MarkerShape::Circle)
                    .radius(3.0)
                    .color(FILING),
            );
            plot_ui.line(Line::new("Final Action Date", final_action.clone()).color(FINAL_ACTION).width(2.0));
            plot_ui.points(
                Points::new("Final Action Date", final_action)
                    .shape(MarkerShape::Square)
                    .radius(3.0)
                    .color(FINAL_ACTION),
            );
            plot_ui.line(
                Line::new("Current Date", current)
                    .color(CURRENT)
                    .width(1.5)
                    .style(LineStyle::dashed_loose()),
            );
        });

    if resp.response.clicked() {
        let Some(pos) = resp.response.interact_pointer_pos() else { return };
        let hit = chart::hit_test(&app.points, (pos.x, pos.y), PICK_RADIUS, |x, y| {
            let p = resp.transform.position_from_point(&PlotPoint::new(x, y));
            (p.x, p.y)
        });
        if let Some(key) = hit {
            logf!("UI: Selected {key}");
            app.select(key);
        }
    }
}

fn series(points: &[ChartPoint], y: impl Fn(&ChartPoint) -> chrono::NaiveDate) -> Vec<[f64; 2]> {
    points
        .iter()
        .map(|p| [chart::to_axis(p.bulletin), chart::to_axis(y(p))])
        .collect()
}

fn date_ticks(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    chart::from_axis(mark.value)
        .map(|d| d.format("%Y-%m").to_string())
        .unwrap_or_default()
}
