//! Admin overview panel with stats, navigation cards, quick actions, and
//! the session activity log.

use eframe::egui::{self, Color32, CornerRadius, Margin, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{CHART_LINE_UP, CLIPBOARD_TEXT, CLOCK, TICKET, WARNING};

use crate::models::AlertSeverity;
use crate::roles::AdminSection;

use super::app::{App, LogLevel};
use super::components::{self, dashboard_card};

/// Show the overview panel.
///
/// Returns `Some(section)` if navigation is requested.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<AdminSection> {
    let mut next_section = None;

    ScrollArea::vertical().id_salt("overview_scroll").show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);

            ui.label(RichText::new(&app.config.festival.name).size(32.0).strong());
            ui.add_space(5.0);
            ui.label(RichText::new("Festival Operations Dashboard").size(14.0).weak());

            ui.add_space(20.0);

            // Stat cards row
            let total_revenue: u64 = app.data.daily_revenue.iter().map(|d| d.revenue).sum();
            let tickets_sold: u32 = app.data.tickets.iter().map(|t| t.quantity).sum();
            let inside: u32 = app.data.gates.iter().map(|g| g.current).sum();

            ui.horizontal(|ui| {
                let available = ui.available_width();
                let start_offset = ((available - 680.0) / 2.0).max(0.0);
                ui.add_space(start_offset);

                components::stat_card(
                    ui,
                    "Total Revenue",
                    &components::money(&app.config.festival.currency_symbol, total_revenue),
                    "Across all sales days",
                );
                components::stat_card(ui, "Bookings", &app.data.tickets.len().to_string(), "Confirmed orders");
                components::stat_card(
                    ui,
                    "Tickets Sold",
                    &components::group_indian(u64::from(tickets_sold)),
                    "Attendees covered",
                );
                components::stat_card(
                    ui,
                    "Currently Inside",
                    &components::group_indian(u64::from(inside)),
                    "Across all gates",
                );
            });

            ui.add_space(20.0);

            // Navigation cards row, only sections this role may open
            let cards = [
                (AdminSection::Tickets, TICKET, "Manage Bookings", "Search, filter, export"),
                (AdminSection::Attendance, CLOCK, "Gate Activity", "Live entry flow"),
                (AdminSection::Revenue, CHART_LINE_UP, "Revenue", "Sales by pass and day"),
                (AdminSection::Reports, CLIPBOARD_TEXT, "Reports", "Summaries & exports"),
            ];
            let visible: Vec<_> = cards.into_iter().filter(|(s, ..)| app.role.can_view(*s)).collect();

            let available = ui.available_width();
            let num_cards = visible.len() as f32;
            let spacing = 30.0;
            let total_spacing = spacing * (num_cards - 1.0);
            let card_width = ((available - total_spacing) / num_cards).clamp(150.0, 250.0);
            let card_size = egui::vec2(card_width, card_width * 0.75);
            let total_width = card_width * num_cards + total_spacing;
            let start_offset = ((available - total_width) / 2.0).max(0.0);

            ui.horizontal(|ui| {
                ui.add_space(start_offset);
                for (i, (section, icon, title, description)) in visible.iter().copied().enumerate() {
                    if dashboard_card(ui, title, description, icon, card_size).clicked() {
                        next_section = Some(section);
                    }
                    if i + 1 < visible.len() {
                        ui.add_space(spacing);
                    }
                }
            });

            ui.add_space(20.0);
        });

        // Two-column layout: Quick Actions | Recent Activity
        let available_width = ui.available_width();
        let column_width = (available_width - 40.0) / 2.0;

        ui.horizontal(|ui| {
            ui.add_space(10.0);

            // Left column - Quick Actions
            ui.vertical(|ui| {
                ui.set_width(column_width);

                egui::Frame::new()
                    .fill(ui.style().visuals.extreme_bg_color)
                    .inner_margin(Margin::same(15))
                    .corner_radius(CornerRadius::same(8))
                    .show(ui, |ui| {
                        ui.set_min_width(column_width - 30.0);

                        ui.label(RichText::new("Quick Actions").strong());
                        ui.add_space(10.0);

                        if app.role.can_view(AdminSection::Tickets) && ui.button("Export Tickets").clicked() {
                            app.export_tickets();
                        }

                        ui.add_space(5.0);

                        if ui.button("Export Entry Log").clicked() {
                            app.export_entry_log();
                        }

                        ui.add_space(5.0);

                        if app.role.can_view(AdminSection::Reports) && ui.button("Generate Report").clicked() {
                            next_section = Some(AdminSection::Reports);
                        }
                    });
            });

            ui.add_space(20.0);

            // Right column - Recent Activity
            ui.vertical(|ui| {
                ui.set_width(column_width);

                egui::Frame::new()
                    .fill(ui.style().visuals.extreme_bg_color)
                    .inner_margin(Margin::same(15))
                    .corner_radius(CornerRadius::same(8))
                    .show(ui, |ui| {
                        ui.set_min_width(column_width - 30.0);

                        ui.label(RichText::new("Recent Activity").strong());
                        ui.add_space(10.0);

                        ScrollArea::vertical().id_salt("activity_log").max_height(150.0).show(ui, |ui| {
                            if app.log_messages.is_empty() {
                                ui.label(RichText::new("No recent activity").weak());
                            } else {
                                for entry in app.log_messages.iter().rev().take(10) {
                                    let color = match entry.level {
                                        LogLevel::Info => Color32::GRAY,
                                        LogLevel::Success => components::colors::SUCCESS,
                                        LogLevel::Warning => Color32::from_rgb(230, 180, 50),
                                        LogLevel::Error => Color32::from_rgb(230, 100, 100),
                                    };

                                    ui.horizontal(|ui| {
                                        ui.label(
                                            RichText::new(entry.timestamp.format("%H:%M:%S").to_string())
                                                .small()
                                                .color(Color32::DARK_GRAY),
                                        );
                                        ui.label(RichText::new(&entry.message).color(color));
                                    });
                                }
                            }
                        });
                    });
            });
        });

        ui.add_space(20.0);

        // Today's schedule and open alerts
        egui::Frame::new()
            .fill(ui.style().visuals.extreme_bg_color)
            .inner_margin(Margin::same(15))
            .outer_margin(Margin::symmetric(10, 0))
            .corner_radius(CornerRadius::same(8))
            .show(ui, |ui| {
                ui.label(RichText::new("Today's Schedule").strong());
                ui.add_space(10.0);

                for note in &app.data.schedule_notes {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&note.time).small().strong());
                        ui.label(&note.name);
                        if note.upcoming {
                            components::badge(ui, "upcoming", components::colors::ACCENT);
                        }
                    });
                }

                ui.add_space(10.0);
                ui.label(RichText::new("Open Alerts").strong());
                ui.add_space(10.0);

                if app.data.alerts.is_empty() {
                    ui.label(RichText::new("No open alerts").weak());
                }
                for alert in &app.data.alerts {
                    let color = match alert.severity {
                        AlertSeverity::Warning => components::colors::WARNING,
                        AlertSeverity::Error => components::colors::ERROR,
                    };
                    ui.horizontal(|ui| {
                        ui.colored_label(color, WARNING);
                        ui.label(&alert.message);
                        ui.label(RichText::new(&alert.raised).small().weak());
                    });
                }
            });

        ui.add_space(20.0);
    });

    next_section
}
