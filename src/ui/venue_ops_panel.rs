//! Venue operations: zone occupancy, equipment state, and escalation contacts.

use eframe::egui::{self, Grid, ProgressBar, RichText, Ui};
use egui_phosphor::regular::PHONE;

use crate::models::{FacilityStatus, ZoneStatus};

use super::app::App;
use super::components::{self, colors};

pub fn show(app: &mut App, ui: &mut Ui) {
    components::panel_header(ui, "Venue Management");

    egui::ScrollArea::vertical().id_salt("venue_ops_scroll").show(ui, |ui| {
        ui.add_space(8.0);

        let occupancy: u32 = app.data.venue_zones.iter().map(|z| z.occupancy).sum();
        let capacity: u32 = app.data.venue_zones.iter().map(|z| z.capacity).sum();
        let crowded = app
            .data
            .venue_zones
            .iter()
            .filter(|z| z.status() != ZoneStatus::Normal)
            .count();

        ui.horizontal(|ui| {
            components::stat_card(ui, "Zones", &app.data.venue_zones.len().to_string(), "Monitored areas");
            components::stat_card(
                ui,
                "Occupancy",
                &components::group_indian(u64::from(occupancy)),
                &format!("of {}", components::group_indian(u64::from(capacity))),
            );
            components::stat_card(ui, "Crowded Zones", &crowded.to_string(), "Above normal levels");
        });

        ui.add_space(12.0);

        ui.label(RichText::new("Zone Occupancy").size(16.0).strong());
        ui.add_space(6.0);

        for zone in &app.data.venue_zones {
            egui::Frame::new()
                .fill(ui.visuals().extreme_bg_color)
                .inner_margin(egui::Margin::same(12))
                .corner_radius(egui::CornerRadius::same(8))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&zone.name).strong());
                        components::badge(ui, zone.status().label(), zone_color(zone.status()));
                        ui.label(
                            RichText::new(format!(
                                "{} / {}",
                                components::group_indian(u64::from(zone.occupancy)),
                                components::group_indian(u64::from(zone.capacity))
                            ))
                            .small(),
                        );
                        ui.label(RichText::new(format!("updated {}", zone.updated)).small().weak());
                    });
                    ui.add(
                        ProgressBar::new(zone.occupancy_fraction())
                            .desired_width(ui.available_width())
                            .show_percentage()
                            .fill(zone_color(zone.status())),
                    );
                    if !zone.facilities.is_empty() {
                        ui.add_space(4.0);
                        ui.label(RichText::new(zone.facilities.join(" | ")).small().weak());
                    }
                });
            ui.add_space(6.0);
        }

        ui.add_space(12.0);

        ui.label(RichText::new("Facility Status").size(16.0).strong());
        ui.add_space(6.0);

        Grid::new("facility_units_grid")
            .num_columns(5)
            .striped(true)
            .min_col_width(80.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.strong("Facility");
                ui.strong("Status");
                ui.strong("Last Check");
                ui.strong("Next Maintenance");
                ui.strong("Technician");
                ui.end_row();

                for unit in &app.data.facility_units {
                    ui.label(&unit.name);
                    components::badge(ui, unit.status.label(), facility_color(unit.status));
                    ui.label(&unit.last_check);
                    ui.label(unit.next_maintenance.format("%Y-%m-%d").to_string());
                    ui.label(&unit.technician);
                    ui.end_row();
                }
            });

        ui.add_space(16.0);

        egui::Frame::new()
            .fill(ui.visuals().extreme_bg_color)
            .inner_margin(egui::Margin::same(15))
            .corner_radius(egui::CornerRadius::same(8))
            .show(ui, |ui| {
                ui.label(RichText::new("Emergency Contacts").size(16.0).strong());
                ui.add_space(8.0);
                for contact in &app.data.emergency_contacts {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&contact.role).strong());
                        ui.label(&contact.name);
                        ui.label(RichText::new(format!("{PHONE} {}", contact.phone)).small());
                    });
                }
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

fn facility_color(status: FacilityStatus) -> egui::Color32 {
    match status {
        FacilityStatus::Operational => colors::SUCCESS,
        FacilityStatus::Standby => colors::ACCENT,
        FacilityStatus::Maintenance => colors::WARNING,
        FacilityStatus::Offline => colors::ERROR,
    }
}
