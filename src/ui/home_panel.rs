//! Landing page: hero block, countdown, and quick links.

use chrono::Local;
use eframe::egui::{self, Align, Layout, Margin, RichText, Ui};
use egui_phosphor::regular::{CALENDAR_BLANK, MAP_PIN, MUSIC_NOTES, TICKET};

use super::app::{App, SiteSection};
use super::components::{self, colors};

/// Render the home page. Returns the section a quick link navigated to.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<SiteSection> {
    let mut nav = None;

    egui::ScrollArea::vertical().id_salt("home_scroll").show(ui, |ui| {
        ui.add_space(20.0);

        // Hero block
        egui::Frame::new()
            .fill(ui.visuals().extreme_bg_color)
            .inner_margin(Margin::same(30))
            .corner_radius(egui::CornerRadius::same(8))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(&app.config.festival.name)
                            .size(42.0)
                            .strong()
                            .color(colors::PRIMARY),
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new(&app.config.festival.tagline).size(18.0).weak());
                    ui.add_space(12.0);
                    ui.label(format!(
                        "{CALENDAR_BLANK} {}    {MAP_PIN} {}",
                        app.config.festival.date_line(),
                        app.config.festival.venue_label
                    ));
                });
            });

        ui.add_space(20.0);

        // Countdown to opening night
        if app.config.ui.show_countdown {
            let (days, hours, minutes, seconds) = app.config.festival.countdown_from(Local::now().naive_local());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("Festival Begins In").size(16.0).strong());
            });
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let total_width = 4.0 * 150.0 + 3.0 * ui.spacing().item_spacing.x;
                let pad = ((ui.available_width() - total_width) / 2.0).max(0.0);
                ui.add_space(pad);
                components::stat_card(ui, "Days", &days.to_string(), "");
                components::stat_card(ui, "Hours", &format!("{hours:02}"), "");
                components::stat_card(ui, "Minutes", &format!("{minutes:02}"), "");
                components::stat_card(ui, "Seconds", &format!("{seconds:02}"), "");
            });
            ui.add_space(20.0);
        }

        // Call to action
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                let total_width = 280.0;
                let pad = ((ui.available_width() - total_width) / 2.0).max(0.0);
                ui.add_space(pad);
                if components::primary_button_with_icon(ui, TICKET, "Book Your Pass Now").clicked() {
                    nav = Some(SiteSection::Passes);
                }
                ui.add_space(8.0);
                if components::styled_button_with_icon(ui, MUSIC_NOTES, "View Lineup").clicked() {
                    nav = Some(SiteSection::Lineup);
                }
            });
        });

        ui.add_space(24.0);
        ui.separator();
        ui.add_space(16.0);

        // Headline numbers
        ui.horizontal(|ui| {
            let total_width = 4.0 * 150.0 + 3.0 * ui.spacing().item_spacing.x;
            let pad = ((ui.available_width() - total_width) / 2.0).max(0.0);
            ui.add_space(pad);
            components::stat_card(ui, "Headliners", &app.data.celebrities.len().to_string(), "on the main stage");
            components::stat_card(
                ui,
                "Festival Days",
                &app.config.festival.day_count().to_string(),
                "of dance and music",
            );
            components::stat_card(
                ui,
                "Venue Capacity",
                &components::group_indian(u64::from(app.data.venue.capacity)),
                "per night",
            );
            components::stat_card(ui, "Pass Options", &app.data.pass_types.len().to_string(), "tiers to pick from");
        });

        ui.add_space(24.0);

        // Quick links into the deeper pages
        ui.with_layout(Layout::top_down(Align::Center), |ui| {
            ui.horizontal(|ui| {
                let card_size = egui::vec2(200.0, 120.0);
                let total_width = 3.0 * card_size.x + 2.0 * ui.spacing().item_spacing.x;
                let pad = ((ui.available_width() - total_width) / 2.0).max(0.0);
                ui.add_space(pad);

                if components::dashboard_card(ui, "Artist Lineup", "Meet this year's headliners", MUSIC_NOTES, card_size)
                    .clicked()
                {
                    nav = Some(SiteSection::Lineup);
                }
                if components::dashboard_card(
                    ui,
                    "Event Schedule",
                    "Workshops, competitions and showtimes",
                    CALENDAR_BLANK,
                    card_size,
                )
                .clicked()
                {
                    nav = Some(SiteSection::Schedule);
                }
                if components::dashboard_card(ui, "Venue & Directions", "How to get there and what's inside", MAP_PIN, card_size)
                    .clicked()
                {
                    nav = Some(SiteSection::Venue);
                }
            });
        });

        ui.add_space(20.0);
    });

    nav
}
