//! Venue page: location, facilities, parking, and guidelines.

use eframe::egui::{self, Margin, RichText, Ui};
use egui_phosphor::regular::{CHECK, MAP_PIN, PHONE, WARNING, X};

use super::app::{App, VenueTab};
use super::components::{self, colors};

const HELPLINES: [(&str, &str); 4] = [
    ("Event Helpline", "+91 98765 43210"),
    ("Medical Emergency", "+91 98765 43211"),
    ("Security", "+91 98765 43212"),
    ("Lost & Found", "+91 98765 43213"),
];

pub fn show(app: &mut App, ui: &mut Ui) {
    components::panel_header(ui, "Venue Information");

    ui.add_space(8.0);

    ui.horizontal(|ui| {
        for tab in VenueTab::ALL {
            if ui.selectable_label(app.venue_tab == tab, tab.name()).clicked() {
                app.venue_tab = tab;
            }
        }
    });

    ui.separator();

    egui::ScrollArea::vertical().id_salt("venue_scroll").show(ui, |ui| {
        ui.add_space(12.0);
        match app.venue_tab {
            VenueTab::Overview => show_overview(app, ui),
            VenueTab::Facilities => show_facilities(app, ui),
            VenueTab::Parking => show_parking(app, ui),
            VenueTab::Guidelines => show_guidelines(app, ui),
        }
        ui.add_space(16.0);
    });
}

fn show_overview(app: &App, ui: &mut Ui) {
    egui::Frame::new()
        .fill(ui.visuals().extreme_bg_color)
        .inner_margin(Margin::same(15))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(RichText::new(&app.data.venue.name).size(20.0).strong().color(colors::PRIMARY));
            ui.add_space(6.0);
            ui.label(format!("{MAP_PIN} {}", app.data.venue.address));
            ui.add_space(4.0);
            ui.label(RichText::new("Easily accessible by metro, bus, and private vehicles.").weak());
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!(
                    "Location: {:.4}, {:.4}",
                    app.data.venue.lat, app.data.venue.lng
                ))
                .small()
                .weak(),
            );
        });

    ui.add_space(12.0);

    ui.horizontal(|ui| {
        components::stat_card(
            ui,
            "Capacity",
            &components::group_indian(u64::from(app.data.venue.capacity)),
            "per night",
        );
        components::stat_card(ui, "Entry Points", &app.data.venue.entry_points.len().to_string(), "gates");
        components::stat_card(ui, "Parking Zones", &app.data.venue.parking_zones.len().to_string(), "zones");
    });
}

fn show_facilities(app: &App, ui: &mut Ui) {
    for facility in &app.data.facilities {
        egui::Frame::new()
            .fill(ui.visuals().extreme_bg_color)
            .inner_margin(Margin::same(12))
            .corner_radius(egui::CornerRadius::same(8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    if facility.available {
                        ui.colored_label(colors::SUCCESS, CHECK);
                    } else {
                        ui.colored_label(colors::ERROR, X);
                    }
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&facility.name).strong());
                        ui.label(RichText::new(&facility.description).small().weak());
                    });
                });
            });
        ui.add_space(4.0);
    }
}

fn show_parking(app: &App, ui: &mut Ui) {
    ui.label(RichText::new("Entry Points").size(16.0).strong());
    ui.add_space(6.0);
    for (i, entry) in app.data.venue.entry_points.iter().enumerate() {
        ui.label(format!("{}. {}", i + 1, entry));
    }

    ui.add_space(12.0);

    ui.label(RichText::new("Parking Zones").size(16.0).strong());
    ui.add_space(6.0);
    let symbol = app.config.festival.currency_symbol.clone();
    for zone in &app.data.venue.parking_zones {
        ui.horizontal(|ui| {
            ui.label(zone);
            components::badge(ui, &format!("{symbol}50/day"), colors::ACCENT);
        });
    }

    ui.add_space(12.0);
    ui.label(
        RichText::new(
            "Parking is available on a first-come, first-served basis. \
             We recommend arriving early or using public transportation.",
        )
        .small()
        .weak(),
    );
}

fn show_guidelines(app: &App, ui: &mut Ui) {
    for guideline in &app.data.guidelines {
        egui::Frame::new()
            .fill(ui.visuals().extreme_bg_color)
            .inner_margin(Margin::same(12))
            .corner_radius(egui::CornerRadius::same(8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(colors::WARNING, WARNING);
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&guideline.title).strong());
                        ui.label(RichText::new(&guideline.description).small().weak());
                    });
                });
            });
        ui.add_space(4.0);
    }

    ui.add_space(12.0);

    egui::Frame::new()
        .fill(ui.visuals().extreme_bg_color)
        .inner_margin(Margin::same(15))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(RichText::new("Need Help?").size(16.0).strong());
            ui.add_space(6.0);
            for (label, number) in HELPLINES {
                ui.label(format!("{PHONE} {label}: {number}"));
            }
        });
}
