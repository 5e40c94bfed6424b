//! Revenue analytics: totals, pass-type breakdown, and the daily trend.

use eframe::egui::{self, Grid, ProgressBar, RichText, Ui};
use egui_phosphor::regular::FILE_XLS;

use super::app::App;
use super::components::{self, colors};

pub fn show(app: &mut App, ui: &mut Ui) {
    components::panel_header(ui, "Revenue Analytics");

    egui::ScrollArea::vertical().id_salt("revenue_scroll").show(ui, |ui| {
        ui.add_space(8.0);

        let symbol = app.config.festival.currency_symbol.clone();
        let total: u64 = app.data.daily_revenue.iter().map(|d| d.revenue).sum();
        let bookings: u32 = app.data.daily_revenue.iter().map(|d| d.bookings).sum();
        let average = if bookings > 0 { total / u64::from(bookings) } else { 0 };
        let best_day = app.data.daily_revenue.iter().max_by_key(|d| d.revenue);

        ui.horizontal(|ui| {
            components::stat_card(ui, "Total Revenue", &components::money(&symbol, total), "All sales days");
            components::stat_card(ui, "Bookings", &components::group_indian(u64::from(bookings)), "Paid orders");
            components::stat_card(ui, "Avg per Booking", &components::money(&symbol, average), "Mean order value");
            components::stat_card(
                ui,
                "Best Day",
                &best_day.map_or("-".to_string(), |d| d.date.format("%b %-d").to_string()),
                &best_day.map_or(String::new(), |d| components::money(&symbol, d.revenue)),
            );
        });

        ui.add_space(16.0);

        ui.columns(2, |columns| {
            // Revenue by pass tier
            columns[0].label(RichText::new("Revenue by Pass Type").size(16.0).strong());
            columns[0].add_space(8.0);
            for slice in &app.data.revenue_by_pass {
                columns[0].horizontal(|ui| {
                    ui.label(RichText::new(&slice.label).strong());
                    ui.label(RichText::new(format!("{} bookings", slice.bookings)).small().weak());
                });
                columns[0].add(
                    ProgressBar::new(slice.percentage / 100.0)
                        .desired_width(280.0)
                        .text(format!("{} ({:.1}%)", components::money(&symbol, slice.revenue), slice.percentage))
                        .fill(colors::PRIMARY),
                );
                columns[0].add_space(8.0);
            }

            // Payment method split
            columns[1].label(RichText::new("Payment Methods").size(16.0).strong());
            columns[1].add_space(8.0);
            for share in &app.data.payment_methods {
                columns[1].horizontal(|ui| {
                    ui.label(RichText::new(&share.method).strong());
                });
                columns[1].add(
                    ProgressBar::new(share.percentage / 100.0)
                        .desired_width(280.0)
                        .text(format!("{} ({:.1}%)", components::money(&symbol, share.revenue), share.percentage))
                        .fill(colors::ACCENT),
                );
                columns[1].add_space(8.0);
            }
        });

        ui.add_space(16.0);

        // Daily trend
        ui.horizontal(|ui| {
            ui.label(RichText::new("Daily Revenue").size(16.0).strong());
            if components::styled_button_with_icon(ui, FILE_XLS, "Export").clicked() {
                app.export_daily_revenue();
            }
        });
        ui.add_space(6.0);

        let max_revenue = app.data.daily_revenue.iter().map(|d| d.revenue).max().unwrap_or(1).max(1);

        Grid::new("daily_revenue_grid")
            .num_columns(4)
            .striped(true)
            .min_col_width(80.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.strong("Date");
                ui.strong("Revenue");
                ui.strong("Bookings");
                ui.strong("");
                ui.end_row();

                for day in &app.data.daily_revenue {
                    ui.label(day.date.format("%Y-%m-%d").to_string());
                    ui.label(components::money(&symbol, day.revenue));
                    ui.label(day.bookings.to_string());
                    ui.add(
                        ProgressBar::new(day.revenue as f32 / max_revenue as f32)
                            .desired_width(200.0)
                            .fill(colors::PRIMARY),
                    );
                    ui.end_row();
                }
            });

        ui.add_space(16.0);
    });
}
