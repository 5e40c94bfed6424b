//! Attendance tracking: gate totals, hourly flow, and the live entry feed.

use eframe::egui::{self, Grid, ProgressBar, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{FILE_XLS, WARNING};

use crate::models::{AlertSeverity, EntryDirection, EntryEvent, ZoneStatus};

use super::app::App;
use super::components::{self, colors};

pub fn show(app: &mut App, ui: &mut Ui) {
    components::panel_header(ui, "Attendance Tracking");

    egui::ScrollArea::vertical().id_salt("attendance_scroll").show(ui, |ui| {
        ui.add_space(8.0);

        let entries: u32 = app.data.gates.iter().map(|g| g.entries).sum();
        let exits: u32 = app.data.gates.iter().map(|g| g.exits).sum();
        let inside: u32 = app.data.gates.iter().map(|g| g.current).sum();
        let peak = app.data.hourly_flow.iter().max_by_key(|h| h.entries);

        ui.horizontal(|ui| {
            components::stat_card(ui, "Total Entries", &components::group_indian(u64::from(entries)), "Today");
            components::stat_card(ui, "Total Exits", &components::group_indian(u64::from(exits)), "Today");
            components::stat_card(ui, "Currently Inside", &components::group_indian(u64::from(inside)), "All gates");
            components::stat_card(
                ui,
                "Peak Hour",
                peak.map_or("-", |h| h.hour.as_str()),
                "Busiest entry window",
            );
        });

        ui.add_space(12.0);

        // Alert banners
        for alert in &app.data.alerts {
            let color = match alert.severity {
                AlertSeverity::Warning => colors::WARNING,
                AlertSeverity::Error => colors::ERROR,
            };
            egui::Frame::new()
                .fill(color.gamma_multiply(0.15))
                .inner_margin(egui::Margin::same(10))
                .corner_radius(egui::CornerRadius::same(8))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.colored_label(color, WARNING);
                        ui.label(&alert.message);
                        ui.label(RichText::new(&alert.raised).small().weak());
                    });
                });
            ui.add_space(4.0);
        }

        ui.add_space(8.0);

        // Gate table, scoped by the gate picker
        let gate_names: Vec<String> = app.data.gates.iter().map(|g| g.gate.clone()).collect();
        ui.horizontal(|ui| {
            ui.label(RichText::new("Gate Activity").size(16.0).strong());
            egui::ComboBox::from_id_salt("gate_filter")
                .selected_text(app.gate_filter.clone().unwrap_or_else(|| "All Gates".to_string()))
                .width(140.0)
                .show_ui(ui, |ui| {
                    if ui.selectable_label(app.gate_filter.is_none(), "All Gates").clicked() {
                        app.gate_filter = None;
                    }
                    for name in &gate_names {
                        if ui
                            .selectable_label(app.gate_filter.as_deref() == Some(name.as_str()), name)
                            .clicked()
                        {
                            app.gate_filter = Some(name.clone());
                        }
                    }
                });
            if components::styled_button_with_icon(ui, FILE_XLS, "Export Entry Log").clicked() {
                app.export_entry_log();
            }
        });
        ui.add_space(6.0);

        Grid::new("gates_grid")
            .num_columns(6)
            .striped(true)
            .min_col_width(70.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.strong("Gate");
                ui.strong("Entries");
                ui.strong("Exits");
                ui.strong("Inside");
                ui.strong("Capacity");
                ui.strong("Occupancy");
                ui.end_row();

                let picked = app.gate_filter.as_deref();
                for gate in app.data.gates.iter().filter(|g| picked.is_none_or(|p| g.gate == p)) {
                    ui.label(&gate.gate);
                    ui.label(components::group_indian(u64::from(gate.entries)));
                    ui.label(components::group_indian(u64::from(gate.exits)));
                    ui.label(components::group_indian(u64::from(gate.current)));
                    ui.label(components::group_indian(u64::from(gate.capacity)));
                    ui.add(
                        ProgressBar::new(gate.occupancy_fraction())
                            .desired_width(140.0)
                            .show_percentage()
                            .fill(zone_color(gate.status())),
                    );
                    ui.end_row();
                }
            });

        ui.add_space(16.0);

        ui.columns(2, |columns| {
            // Hourly flow
            columns[0].label(RichText::new("Hourly Flow").size(16.0).strong());
            columns[0].add_space(6.0);
            Grid::new("hourly_grid")
                .num_columns(4)
                .striped(true)
                .min_col_width(60.0)
                .spacing([12.0, 6.0])
                .show(&mut columns[0], |ui| {
                    ui.strong("Hour");
                    ui.strong("Entries");
                    ui.strong("Exits");
                    ui.strong("Net");
                    ui.end_row();

                    for flow in &app.data.hourly_flow {
                        ui.label(&flow.hour);
                        ui.label(flow.entries.to_string());
                        ui.label(flow.exits.to_string());
                        let net = flow.net();
                        let color = if net >= 0 { colors::SUCCESS } else { colors::ERROR };
                        ui.colored_label(color, format!("{net:+}"));
                        ui.end_row();
                    }
                });

            // Recent entries, same gate scope as the table
            columns[1].label(RichText::new("Recent Scans").size(16.0).strong());
            columns[1].add_space(6.0);
            ScrollArea::vertical()
                .id_salt("recent_scans")
                .max_height(260.0)
                .show(&mut columns[1], |ui| {
                    let picked = app.gate_filter.as_deref();
                    let scans: Vec<&EntryEvent> = app
                        .data
                        .recent_entries
                        .iter()
                        .filter(|e| picked.is_none_or(|p| e.gate == p))
                        .collect();
                    if scans.is_empty() {
                        ui.label(RichText::new("No scans at this gate yet.").small().weak());
                    }
                    for event in scans {
                        egui::Frame::new()
                            .fill(ui.visuals().extreme_bg_color)
                            .inner_margin(egui::Margin::same(8))
                            .corner_radius(egui::CornerRadius::same(6))
                            .show(ui, |ui| {
                                ui.horizontal(|ui| {
                                    ui.vertical(|ui| {
                                        ui.label(RichText::new(&event.attendee).strong());
                                        ui.label(
                                            RichText::new(format!("{} | {}", event.ticket_id, event.gate))
                                                .small()
                                                .weak(),
                                        );
                                    });
                                    ui.add_space(8.0);
                                    ui.label(RichText::new(&event.time).small());
                                    let color = match event.direction {
                                        EntryDirection::Entered => colors::SUCCESS,
                                        EntryDirection::Exited => colors::ACCENT,
                                    };
                                    components::badge(ui, event.direction.label(), color);
                                });
                            });
                        ui.add_space(4.0);
                    }
                });
        });

        ui.add_space(16.0);
    });
}

fn zone_color(status: ZoneStatus) -> egui::Color32 {
    match status {
        ZoneStatus::Normal => colors::SUCCESS,
        ZoneStatus::Warning => colors::WARNING,
        ZoneStatus::Critical => colors::ERROR,
    }
}
