//! Artist lineup page with the headliner carousel.

use eframe::egui::{self, Align, Layout, Margin, RichText, Ui};
use egui_phosphor::regular::{CALENDAR_BLANK, CARET_LEFT, CARET_RIGHT, CLOCK, STAR};

use super::app::App;
use super::components::{self, colors};

pub fn show(app: &mut App, ui: &mut Ui) {
    components::panel_header(ui, "Artist Lineup");

    egui::ScrollArea::vertical().id_salt("lineup_scroll").show(ui, |ui| {
        ui.add_space(8.0);
        ui.label(RichText::new("One headliner takes the stage every night.").weak());
        ui.add_space(16.0);

        if app.data.celebrities.is_empty() {
            ui.label(RichText::new("Lineup to be announced.").italics());
            return;
        }

        let current = app.lineup_carousel.current();
        let celebrity = app.data.celebrities[current].clone();

        ui.horizontal(|ui| {
            let card_width = 560.0;
            let controls = 2.0 * 32.0;
            let pad = ((ui.available_width() - card_width - controls) / 2.0).max(0.0);
            ui.add_space(pad);

            if ui
                .add_sized([32.0, 220.0], egui::Button::new(RichText::new(CARET_LEFT).size(20.0)))
                .clicked()
            {
                app.lineup_carousel.prev();
            }

            egui::Frame::new()
                .fill(ui.visuals().extreme_bg_color)
                .inner_margin(Margin::same(20))
                .corner_radius(egui::CornerRadius::same(8))
                .show(ui, |ui| {
                    ui.set_width(card_width - 40.0);
                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&celebrity.name).size(26.0).strong().color(colors::PRIMARY));
                            if celebrity.meet_and_greet {
                                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                    components::badge(ui, &format!("{STAR} Meet & Greet"), colors::WARNING);
                                });
                            }
                        });

                        ui.add_space(6.0);
                        ui.label(&celebrity.bio);
                        ui.add_space(10.0);

                        ui.horizontal(|ui| {
                            ui.label(format!("{CALENDAR_BLANK} {}", celebrity.performance_date.format("%B %-d, %Y")));
                            ui.add_space(12.0);
                            ui.label(format!("{CLOCK} {} onwards", celebrity.performance_time));
                        });

                        if !celebrity.past_performances.is_empty() {
                            ui.add_space(10.0);
                            ui.label(RichText::new("Past performances").small().strong());
                            ui.label(RichText::new(celebrity.past_performances.join(" | ")).small().weak());
                        }

                        let socials: Vec<String> = [
                            celebrity.instagram.as_ref().map(|h| format!("Instagram: {h}")),
                            celebrity.facebook.as_ref().map(|h| format!("Facebook: {h}")),
                        ]
                        .into_iter()
                        .flatten()
                        .collect();
                        if !socials.is_empty() {
                            ui.add_space(8.0);
                            ui.label(RichText::new(socials.join("    ")).small().color(colors::ACCENT));
                        }
                    });
                });

            if ui
                .add_sized([32.0, 220.0], egui::Button::new(RichText::new(CARET_RIGHT).size(20.0)))
                .clicked()
            {
                app.lineup_carousel.next();
            }
        });

        ui.add_space(12.0);

        // Dot navigation
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                let dots = app.lineup_carousel.len();
                let total_width = dots as f32 * (12.0 + ui.spacing().item_spacing.x);
                let pad = ((ui.available_width() - total_width) / 2.0).max(0.0);
                ui.add_space(pad);
                for i in 0..dots {
                    let active = i == app.lineup_carousel.current();
                    let color = if active { colors::PRIMARY } else { colors::NEUTRAL };
                    let (rect, response) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::click());
                    ui.painter().circle_filled(rect.center(), if active { 5.0 } else { 4.0 }, color);
                    if response.clicked() {
                        app.lineup_carousel.jump_to(i);
                    }
                }
            });
        });

        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("{} of {}", current + 1, app.lineup_carousel.len()))
                    .small()
                    .weak(),
            );
        });
    });
}
