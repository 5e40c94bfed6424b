//! Settings panel for festival, booking, and interface configuration.

use chrono::NaiveDate;
use eframe::egui::{self, RichText};
use egui_phosphor::regular::CHECK;

use crate::models::IntegrationStatus;
use crate::roles::{AdminSection, Role};

use super::app::{App, SettingsForm};
use super::components::{badge, colors, panel_header};

/// Parse date from multiple formats: "2000-1-1", "2000/1/1", "2000 1 1", "2000.1.1"
fn parse_flexible_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    let parts: Vec<&str> = input
        .split(['-', '/', ' ', '.'])
        .filter(|s| !s.is_empty())
        .collect();

    if parts.len() != 3 {
        return None;
    }

    let year: i32 = parts[0].parse().ok()?;
    let month: u32 = parts[1].parse().ok()?;
    let day: u32 = parts[2].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Renders one date field backed by a text buffer. Invalid input turns
/// red and reverts on focus loss.
fn date_field(ui: &mut egui::Ui, buffer: &mut String, value: &mut NaiveDate, modified: &mut bool) {
    let valid = parse_flexible_date(buffer).is_some();
    let response = ui.add(
        egui::TextEdit::singleline(buffer)
            .desired_width(100.0)
            .hint_text("YYYY-MM-DD")
            .text_color(if valid {
                ui.visuals().text_color()
            } else {
                egui::Color32::from_rgb(220, 50, 50)
            }),
    );
    if response.changed()
        && let Some(date) = parse_flexible_date(buffer)
    {
        *value = date;
        *modified = true;
    }
    if response.lost_focus() {
        if let Some(date) = parse_flexible_date(buffer) {
            *value = date;
            *buffer = date.format("%Y-%m-%d").to_string();
        } else {
            *buffer = value.format("%Y-%m-%d").to_string();
        }
    }
}

/// Show the settings panel.
pub fn show(app: &mut App, ui: &mut egui::Ui) {
    panel_header(ui, "Settings");

    egui::ScrollArea::vertical().id_salt("settings_scroll").show(ui, |ui| {
        // Festival identity
        ui.group(|ui| {
            ui.heading("Festival");
            ui.add_space(5.0);

            egui::Grid::new("festival_settings_grid")
                .num_columns(2)
                .spacing([10.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Name:");
                    if ui.text_edit_singleline(&mut app.config.festival.name).changed() {
                        app.config_modified = true;
                    }
                    ui.end_row();

                    ui.label("Tagline:");
                    if ui.text_edit_singleline(&mut app.config.festival.tagline).changed() {
                        app.config_modified = true;
                    }
                    ui.end_row();

                    ui.label("Start date:");
                    date_field(
                        ui,
                        &mut app.settings_form.start_date_input,
                        &mut app.config.festival.start_date,
                        &mut app.config_modified,
                    );
                    ui.end_row();

                    ui.label("End date:");
                    date_field(
                        ui,
                        &mut app.settings_form.end_date_input,
                        &mut app.config.festival.end_date,
                        &mut app.config_modified,
                    );
                    ui.end_row();

                    ui.label("Gates open (HH:MM):");
                    if ui
                        .add(egui::TextEdit::singleline(&mut app.config.festival.opening_time).desired_width(60.0))
                        .changed()
                    {
                        app.config_modified = true;
                    }
                    ui.end_row();

                    ui.label("Venue:");
                    if ui.text_edit_singleline(&mut app.config.festival.venue_label).changed() {
                        app.config_modified = true;
                    }
                    ui.end_row();

                    ui.label("Currency symbol:");
                    if ui
                        .add(egui::TextEdit::singleline(&mut app.config.festival.currency_symbol).desired_width(40.0))
                        .changed()
                    {
                        app.config_modified = true;
                    }
                    ui.end_row();
                });

            ui.label(RichText::new("Date fields accept: YYYY-MM-DD, YYYY/M/D, YYYY.M.D").small().weak());
        });

        ui.add_space(15.0);

        // Simulated payment processor
        ui.group(|ui| {
            ui.heading("Booking");
            ui.add_space(5.0);

            egui::Grid::new("booking_settings_grid")
                .num_columns(2)
                .spacing([10.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Booking ID prefix:");
                    if ui
                        .add(egui::TextEdit::singleline(&mut app.config.booking.id_prefix).desired_width(100.0))
                        .changed()
                    {
                        app.config_modified = true;
                    }
                    ui.end_row();

                    ui.label("Settlement delay (ms):");
                    let mut delay_str = app.config.booking.settle_delay_ms.to_string();
                    if ui
                        .add(egui::TextEdit::singleline(&mut delay_str).desired_width(80.0))
                        .changed()
                        && let Ok(delay) = delay_str.parse()
                    {
                        app.config.booking.settle_delay_ms = delay;
                        app.config_modified = true;
                    }
                    ui.end_row();

                    ui.label("Settlement timeout (s):");
                    let mut timeout_str = app.config.booking.settle_timeout_secs.to_string();
                    if ui
                        .add(egui::TextEdit::singleline(&mut timeout_str).desired_width(80.0))
                        .changed()
                        && let Ok(timeout) = timeout_str.parse()
                    {
                        app.config.booking.settle_timeout_secs = timeout;
                        app.config_modified = true;
                    }
                    ui.end_row();

                    ui.label("Decline above:");
                    let mut limit_str = app.config.booking.decline_above.to_string();
                    if ui
                        .add(egui::TextEdit::singleline(&mut limit_str).desired_width(80.0))
                        .changed()
                        && let Ok(limit) = limit_str.parse()
                    {
                        app.config.booking.decline_above = limit;
                        app.config_modified = true;
                    }
                    ui.end_row();
                });

            ui.label(
                RichText::new("The simulated processor declines any payment above the threshold.")
                    .small()
                    .weak(),
            );
        });

        ui.add_space(15.0);

        // Interface options
        ui.group(|ui| {
            ui.heading("Interface");
            ui.add_space(5.0);

            if ui
                .checkbox(&mut app.config.ui.show_countdown, "Show countdown on the home page")
                .changed()
            {
                app.config_modified = true;
            }

            ui.horizontal(|ui| {
                ui.label("Default admin role:");
                let current = Role::parse(&app.config.ui.default_admin_role)
                    .map_or("super-admin", |r| r.as_str());
                egui::ComboBox::from_id_salt("default_admin_role")
                    .width(130.0)
                    .selected_text(current)
                    .show_ui(ui, |ui| {
                        for role in Role::ADMIN_ROLES {
                            if ui
                                .selectable_label(current == role.as_str(), role.label())
                                .clicked()
                            {
                                app.config.ui.default_admin_role = role.as_str().to_string();
                                app.config_modified = true;
                            }
                        }
                    });
            });
        });

        ui.add_space(15.0);

        // Who sees what, read only
        ui.group(|ui| {
            ui.heading("Access Matrix");
            ui.add_space(5.0);

            egui::Grid::new("access_matrix_grid")
                .num_columns(5)
                .striped(true)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.strong("Section");
                    for role in Role::ADMIN_ROLES {
                        ui.strong(role.label());
                    }
                    ui.end_row();

                    for section in AdminSection::ALL {
                        ui.label(section.label());
                        for role in Role::ADMIN_ROLES {
                            if role.can_view(section) {
                                ui.colored_label(colors::SUCCESS, CHECK);
                            } else {
                                ui.label(RichText::new("-").weak());
                            }
                        }
                        ui.end_row();
                    }
                });
        });

        ui.add_space(15.0);

        // Processor hookups, read only
        ui.group(|ui| {
            ui.heading("Payment Gateways");
            ui.add_space(5.0);

            egui::Grid::new("gateways_grid")
                .num_columns(4)
                .striped(true)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.strong("Gateway");
                    ui.strong("Status");
                    ui.strong("Fee");
                    ui.strong("Methods");
                    ui.end_row();

                    for gateway in &app.data.payment_gateways {
                        ui.label(RichText::new(&gateway.name).strong());
                        badge(ui, gateway.status.label(), integration_color(gateway.status));
                        ui.label(&gateway.fee_label);
                        ui.label(RichText::new(gateway.methods.join(", ")).small());
                        ui.end_row();
                    }
                });
        });

        ui.add_space(15.0);

        ui.group(|ui| {
            ui.heading("Integrations");
            ui.add_space(5.0);

            egui::Grid::new("integrations_grid")
                .num_columns(4)
                .striped(true)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.strong("Service");
                    ui.strong("Provider");
                    ui.strong("Status");
                    ui.strong("Last used");
                    ui.end_row();

                    for hookup in &app.data.integrations {
                        ui.label(RichText::new(&hookup.name).strong());
                        ui.label(&hookup.provider);
                        badge(ui, hookup.status.label(), integration_color(hookup.status));
                        ui.label(RichText::new(&hookup.last_used).small().weak());
                        ui.end_row();
                    }
                });
        });

        ui.add_space(20.0);

        // Action buttons
        ui.horizontal(|ui| {
            let save_btn = egui::Button::new("Save Settings");
            if ui.add_enabled(app.config_modified, save_btn).clicked() {
                app.save_config();
            }

            if app.config_modified {
                ui.label(RichText::new("(unsaved changes)").color(colors::WARNING).italics());
            }

            if ui.button("Reset to Defaults").clicked() {
                app.config = crate::config::AppConfig::default();
                app.settings_form = SettingsForm::from_config(&app.config);
                app.config_modified = true;
            }
        });

        ui.add_space(16.0);
    });
}

fn integration_color(status: IntegrationStatus) -> egui::Color32 {
    match status {
        IntegrationStatus::Active => colors::SUCCESS,
        IntegrationStatus::Inactive => colors::NEUTRAL,
    }
}
