//! Event schedule page with one tab per festival night.

use eframe::egui::{self, Margin, RichText, Ui};
use egui_phosphor::regular::{CLOCK, MUSIC_NOTES, TROPHY};

use crate::models::SkillLevel;

use super::app::App;
use super::components::{self, colors};

pub fn show(app: &mut App, ui: &mut Ui) {
    components::panel_header(ui, "Event Schedule");

    ui.add_space(8.0);

    // Day tabs
    ui.horizontal(|ui| {
        for (i, day) in app.data.festival_days.iter().enumerate() {
            let text = format!("Day {} - {}", i + 1, day.date.format("%b %-d"));
            if ui.selectable_label(app.schedule_day == i, text).clicked() {
                app.schedule_day = i;
            }
        }
    });

    ui.separator();

    let Some(day) = app.data.festival_days.get(app.schedule_day).cloned() else {
        ui.label(RichText::new("Schedule to be announced.").italics());
        return;
    };

    egui::ScrollArea::vertical().id_salt("schedule_scroll").show(ui, |ui| {
        ui.add_space(12.0);

        egui::Frame::new()
            .fill(ui.visuals().extreme_bg_color)
            .inner_margin(Margin::same(15))
            .corner_radius(egui::CornerRadius::same(8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&day.title).size(20.0).strong().color(colors::PRIMARY));
                    components::badge(ui, &day.theme, colors::ACCENT);
                });
                ui.add_space(4.0);
                ui.label(format!("{CLOCK} Gates open {} | {}", day.time, day.date.format("%A, %B %-d, %Y")));
                ui.add_space(6.0);
                ui.label(&day.description);

                let headliners: Vec<&str> = day
                    .celebrity_ids
                    .iter()
                    .filter_map(|id| app.data.celebrities.iter().find(|c| &c.id == id))
                    .map(|c| c.name.as_str())
                    .collect();
                if !headliners.is_empty() {
                    ui.add_space(6.0);
                    ui.label(RichText::new(format!("{MUSIC_NOTES} Performing: {}", headliners.join(", "))).strong());
                }
            });

        ui.add_space(16.0);

        // Workshops
        ui.label(RichText::new("Workshops").size(16.0).strong());
        ui.add_space(6.0);
        if day.workshops.is_empty() {
            ui.label(RichText::new("No workshops scheduled for this day.").weak());
        }
        for workshop in &day.workshops {
            egui::Frame::new()
                .fill(ui.visuals().extreme_bg_color)
                .inner_margin(Margin::same(12))
                .corner_radius(egui::CornerRadius::same(8))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(&workshop.title).strong());
                            ui.label(RichText::new(format!("with {}", workshop.instructor)).small().weak());
                        });
                        ui.add_space(12.0);
                        ui.label(format!("{CLOCK} {} ({})", workshop.time, workshop.duration));
                        ui.add_space(12.0);
                        components::badge(ui, workshop.level.label(), level_color(workshop.level));
                    });
                });
            ui.add_space(4.0);
        }

        ui.add_space(12.0);

        // Competitions
        ui.label(RichText::new("Competitions").size(16.0).strong());
        ui.add_space(6.0);
        if day.competitions.is_empty() {
            ui.label(RichText::new("No competitions scheduled for this day.").weak());
        }
        for competition in &day.competitions {
            egui::Frame::new()
                .fill(ui.visuals().extreme_bg_color)
                .inner_margin(Margin::same(12))
                .corner_radius(egui::CornerRadius::same(8))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(&competition.title).strong());
                            ui.label(RichText::new(&competition.category).small().weak());
                        });
                        ui.add_space(12.0);
                        ui.label(format!("{CLOCK} {}", competition.time));
                    });
                    if !competition.prizes.is_empty() {
                        ui.add_space(4.0);
                        ui.label(
                            RichText::new(format!("{TROPHY} Prizes: {}", competition.prizes.join(" | ")))
                                .small()
                                .color(colors::WARNING),
                        );
                    }
                });
            ui.add_space(4.0);
        }

        ui.add_space(16.0);
    });
}

fn level_color(level: SkillLevel) -> egui::Color32 {
    match level {
        SkillLevel::Beginner => colors::SUCCESS,
        SkillLevel::Intermediate => colors::WARNING,
        SkillLevel::Advanced => colors::ERROR,
    }
}
