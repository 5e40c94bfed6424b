//! Event management: the run-of-show timeline and performer engagements.

use eframe::egui::{self, Grid, RichText, Ui};

use crate::models::{LineupStatus, ScheduleKind};

use super::app::{App, EventsTab};
use super::components::{self, colors};

pub fn show(app: &mut App, ui: &mut Ui) {
    components::panel_header(ui, "Event Management");

    ui.add_space(8.0);

    ui.horizontal(|ui| {
        if ui
            .selectable_label(app.events_tab == EventsTab::Schedule, "Run of Show")
            .clicked()
        {
            app.events_tab = EventsTab::Schedule;
        }
        if ui
            .selectable_label(app.events_tab == EventsTab::Lineup, "Performer Bookings")
            .clicked()
        {
            app.events_tab = EventsTab::Lineup;
        }
    });

    ui.separator();

    egui::ScrollArea::vertical().id_salt("events_scroll").show(ui, |ui| {
        ui.add_space(12.0);
        match app.events_tab {
            EventsTab::Schedule => show_schedule(app, ui),
            EventsTab::Lineup => show_lineup(app, ui),
        }
        ui.add_space(16.0);
    });
}

fn show_schedule(app: &mut App, ui: &mut Ui) {
    // Day strip. The run of show is the same template every night; the
    // heading and roster below follow the chosen day.
    let day_tabs: Vec<String> = app
        .data
        .festival_days
        .iter()
        .enumerate()
        .map(|(i, day)| format!("Day {} - {}", i + 1, day.date.format("%b %-d")))
        .collect();
    ui.horizontal(|ui| {
        for (i, label) in day_tabs.iter().enumerate() {
            if ui.selectable_label(app.events_day == i, label).clicked() {
                app.events_day = i;
            }
        }
    });

    ui.add_space(10.0);

    if let Some(day) = app.data.festival_days.get(app.events_day).cloned() {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&day.title).size(16.0).strong());
            components::badge(ui, &day.theme, colors::ACCENT);
        });
        let headliners: Vec<String> = day
            .celebrity_ids
            .iter()
            .filter_map(|id| app.data.celebrities.iter().find(|c| &c.id == id))
            .map(|c| c.name.clone())
            .collect();
        if headliners.is_empty() {
            ui.label(RichText::new("No headliner booked for this day yet.").small().weak());
        } else {
            ui.label(RichText::new(format!("Headliners: {}", headliners.join(", "))).small());
        }
        ui.label(
            RichText::new(format!(
                "{} workshop(s), {} competition(s) scheduled",
                day.workshops.len(),
                day.competitions.len()
            ))
            .small()
            .weak(),
        );
    }

    ui.add_space(12.0);

    let expected: u32 = app.data.schedule_items.iter().map(|s| s.expected_attendees).sum();

    ui.horizontal(|ui| {
        components::stat_card(ui, "Slots", &app.data.schedule_items.len().to_string(), "Nightly run of show");
        components::stat_card(
            ui,
            "Expected Attendees",
            &components::group_indian(u64::from(expected)),
            "Summed over slots",
        );
    });

    ui.add_space(12.0);

    Grid::new("schedule_items_grid")
        .num_columns(7)
        .striped(true)
        .min_col_width(60.0)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.strong("Time");
            ui.strong("Duration");
            ui.strong("Slot");
            ui.strong("Type");
            ui.strong("Expected");
            ui.strong("Area");
            ui.strong("Host");
            ui.end_row();

            for item in &app.data.schedule_items {
                ui.label(&item.time);
                ui.label(format!("{} min", item.duration_min));
                ui.label(RichText::new(&item.title).strong());
                components::badge(ui, item.kind.label(), kind_color(item.kind));
                ui.label(components::group_indian(u64::from(item.expected_attendees)));
                ui.label(&item.venue_area);
                ui.label(item.host.as_deref().unwrap_or("-"));
                ui.end_row();
            }
        });
}

fn show_lineup(app: &App, ui: &mut Ui) {
    let confirmed = app
        .data
        .celebrity_bookings
        .iter()
        .filter(|b| b.status == LineupStatus::Confirmed)
        .count();
    let fees: u64 = app.data.celebrity_bookings.iter().map(|b| u64::from(b.fee)).sum();

    ui.horizontal(|ui| {
        components::stat_card(ui, "Engagements", &app.data.celebrity_bookings.len().to_string(), "This season");
        components::stat_card(ui, "Confirmed", &confirmed.to_string(), "Signed and sealed");
        components::stat_card(
            ui,
            "Committed Fees",
            &components::money(&app.config.festival.currency_symbol, fees),
            "Across all performers",
        );
    });

    ui.add_space(12.0);

    for booking in &app.data.celebrity_bookings {
        egui::Frame::new()
            .fill(ui.visuals().extreme_bg_color)
            .inner_margin(egui::Margin::same(12))
            .corner_radius(egui::CornerRadius::same(8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&booking.name).size(15.0).strong());
                        ui.label(
                            RichText::new(format!(
                                "{} at {}",
                                booking.performance_date.format("%B %-d, %Y"),
                                booking.performance_time
                            ))
                            .small()
                            .weak(),
                        );
                        ui.label(RichText::new(&booking.contact).small().weak());
                    });
                    ui.add_space(16.0);
                    components::badge(ui, booking.status.label(), lineup_color(booking.status));
                    ui.label(
                        RichText::new(format!(
                            "Fee: {}",
                            components::money(&app.config.festival.currency_symbol, u64::from(booking.fee))
                        ))
                        .strong(),
                    );
                });
                if !booking.requirements.is_empty() {
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("Requirements: {}", booking.requirements.join(", "))).small());
                }
            });
        ui.add_space(6.0);
    }
}

fn kind_color(kind: ScheduleKind) -> egui::Color32 {
    match kind {
        ScheduleKind::Performance => colors::PRIMARY,
        ScheduleKind::Workshop => colors::ACCENT,
        ScheduleKind::Competition => colors::WARNING,
        ScheduleKind::Ceremony => colors::SUCCESS,
        ScheduleKind::Community | ScheduleKind::Logistics => colors::NEUTRAL,
    }
}

fn lineup_color(status: LineupStatus) -> egui::Color32 {
    match status {
        LineupStatus::Confirmed => colors::SUCCESS,
        LineupStatus::Pending => colors::WARNING,
        LineupStatus::Cancelled => colors::ERROR,
    }
}
