//! Pass catalog page where bookings start.

use eframe::egui::{self, Margin, RichText, Ui};
use egui_phosphor::regular::{CHECK, USER, USERS, USERS_THREE};

use crate::models::BookingKind;

use super::app::App;
use super::components::{self, colors};

pub fn show(app: &mut App, ui: &mut Ui) {
    components::panel_header(ui, "Festival Passes");

    egui::ScrollArea::vertical().id_salt("passes_scroll").show(ui, |ui| {
        ui.add_space(8.0);

        // Booking type toggle
        ui.horizontal(|ui| {
            ui.label(RichText::new("Booking type:").strong());
            for kind in [BookingKind::FullEvent, BookingKind::SingleDay] {
                if ui.selectable_label(app.booking_kind == kind, kind.label()).clicked() {
                    app.booking_kind = kind;
                }
            }
        });

        // Day picker, single-day bookings only
        if app.booking_kind == BookingKind::SingleDay {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label("Days:");
                for (i, day) in app.data.festival_days.iter().enumerate() {
                    let day_number = i as u32 + 1;
                    let mut picked = app.booking_days.contains(&day_number);
                    let label = format!("Day {} ({})", day_number, day.date.format("%b %-d"));
                    if ui.checkbox(&mut picked, label).changed() {
                        if picked {
                            app.booking_days.push(day_number);
                            app.booking_days.sort_unstable();
                        } else {
                            app.booking_days.retain(|d| *d != day_number);
                        }
                    }
                }
            });
            if app.booking_days.is_empty() {
                ui.label(RichText::new("Pick at least one day to book a single day pass.").small().color(colors::WARNING));
            }
        }

        ui.add_space(16.0);

        let days_ok = app.booking_kind == BookingKind::FullEvent || !app.booking_days.is_empty();
        let day_count = app.config.festival.day_count();
        let passes = app.data.pass_types.clone();
        let mut open_pass: Option<String> = None;

        ui.horizontal_top(|ui| {
            for pass in &passes {
                egui::Frame::new()
                    .fill(ui.visuals().extreme_bg_color)
                    .inner_margin(Margin::same(15))
                    .corner_radius(egui::CornerRadius::same(8))
                    .show(ui, |ui| {
                        ui.set_width(220.0);
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(format!("{}  {}", pass_icon(&pass.id), pass.name))
                                    .size(17.0)
                                    .strong()
                                    .color(colors::PRIMARY),
                            );
                            ui.label(RichText::new(&pass.description).small().weak());
                            ui.add_space(8.0);

                            match app.booking_kind {
                                BookingKind::FullEvent => {
                                    ui.label(
                                        RichText::new(app.format_amount(pass.full_event_price))
                                            .size(22.0)
                                            .strong(),
                                    );
                                    ui.label(RichText::new("all days included").small().weak());
                                    let savings = pass.full_event_savings(day_count);
                                    if savings > 0 {
                                        components::badge(
                                            ui,
                                            &format!("Save {}", app.format_amount(savings as u32)),
                                            colors::SUCCESS,
                                        );
                                    }
                                }
                                BookingKind::SingleDay => {
                                    ui.label(
                                        RichText::new(app.format_amount(pass.single_day_price))
                                            .size(22.0)
                                            .strong(),
                                    );
                                    ui.label(RichText::new("per day").small().weak());
                                    if !app.booking_days.is_empty() {
                                        let total = pass.single_day_price * app.booking_days.len() as u32;
                                        ui.label(
                                            RichText::new(format!(
                                                "{} days: {}",
                                                app.booking_days.len(),
                                                app.format_amount(total)
                                            ))
                                            .small(),
                                        );
                                    }
                                }
                            }

                            ui.add_space(8.0);
                            for feature in &pass.features {
                                ui.label(RichText::new(format!("{CHECK} {feature}")).small());
                            }
                            ui.add_space(10.0);

                            ui.label(RichText::new(format!("Covers up to {} person(s)", pass.max_persons)).small().weak());
                            ui.add_space(6.0);

                            let button = ui.add_enabled(
                                days_ok,
                                egui::Button::new(RichText::new("Book Now").color(egui::Color32::WHITE))
                                    .fill(colors::PRIMARY),
                            );
                            if button.clicked() {
                                open_pass = Some(pass.id.clone());
                            }
                            if !days_ok {
                                button.on_hover_text("Select at least one day first");
                            }
                        });
                    });
                ui.add_space(4.0);
            }
        });

        if let Some(pass_id) = open_pass {
            app.open_booking(&pass_id);
        }

        ui.add_space(16.0);
    });
}

fn pass_icon(pass_id: &str) -> &'static str {
    match pass_id {
        "couple" => USERS,
        "family" => USERS_THREE,
        _ => USER,
    }
}
