// src/gui/components/series_table.rs
//
// Every extracted bulletin, including the ones the chart drops.
// "C" = current, "U" = unavailable. Clicking a bulletin selects it.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::bulletin::BulletinKey;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut clicked: Option<BulletinKey> = None;

    TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .column(Column::initial(110.0).at_least(80.0).clip(true))
        .column(Column::initial(90.0).at_least(60.0))
        .column(Column::remainder().at_least(60.0))
        .header(22.0, |mut header| {
            header.col(|ui| { ui.strong("Bulletin"); });
            header.col(|ui| { ui.strong("Final action"); });
            header.col(|ui| { ui.strong("Filing"); });
        })
        .body(|mut body| {
            for rec in &app.series {
                let selected = app.selected == Some(rec.key);
                body.row(18.0, |mut row| {
                    row.set_selected(selected);
                    row.col(|ui| {
                        let label = format!("{} {}", &rec.key.month.name()[..3], rec.key.year);
                        if ui.link(label).clicked() {
                            clicked = Some(rec.key);
                        }
                    });
                    row.col(|ui| { cell(ui, &rec.final_action.to_string(), rec.final_action.is_available()); });
                    row.col(|ui| { cell(ui, &rec.filing.to_string(), rec.filing.is_available()); });
                });
            }
        });

    if let Some(key) = clicked {
        app.select(key);
    }
}

fn cell(ui: &mut egui::Ui, text: &str, available: bool) {
    if available {
        ui.label(text);
    } else {
        ui.label(RichText::new(text).weak());
    }
}
