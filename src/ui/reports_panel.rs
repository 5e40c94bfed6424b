//! Reports: pick a summary, preview it, and write it to disk.

use eframe::egui::{self, Margin, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{CLOCK, FILE_XLS, FLOPPY_DISK};

use crate::export::{self, ReportKind};

use super::app::App;
use super::components::{self, colors};

const SCHEDULED: [(&str, &str); 3] = [
    ("Daily Sales Summary", "Every day at 9:00 AM"),
    ("Weekly Revenue Report", "Mondays at 8:00 AM"),
    ("Gate Closing Report", "Every night at 1:00 AM"),
];

pub fn show(app: &mut App, ui: &mut Ui) {
    components::panel_header(ui, "Reports");

    egui::ScrollArea::vertical().id_salt("reports_scroll").show(ui, |ui| {
        ui.add_space(8.0);

        // Report kind picker
        ui.horizontal(|ui| {
            for kind in ReportKind::ALL {
                let selected = app.report_kind == kind;
                let fill = if selected {
                    colors::PRIMARY.gamma_multiply(0.2)
                } else {
                    ui.visuals().extreme_bg_color
                };
                let response = egui::Frame::new()
                    .fill(fill)
                    .inner_margin(Margin::same(12))
                    .corner_radius(egui::CornerRadius::same(8))
                    .show(ui, |ui| {
                        ui.set_width(160.0);
                        ui.vertical(|ui| {
                            ui.label(RichText::new(kind.label()).strong());
                            ui.label(RichText::new(kind.description()).small().weak());
                        });
                    })
                    .response
                    .interact(egui::Sense::click());
                if response.clicked() {
                    app.report_kind = kind;
                }
            }
        });

        ui.add_space(12.0);

        ui.horizontal(|ui| {
            if components::primary_button_with_icon(ui, FLOPPY_DISK, "Generate JSON Report").clicked() {
                app.generate_report();
            }

            match app.report_kind {
                ReportKind::Sales => {
                    if components::styled_button_with_icon(ui, FILE_XLS, "Export Bookings").clicked() {
                        app.export_tickets();
                    }
                }
                ReportKind::Attendance => {
                    if components::styled_button_with_icon(ui, FILE_XLS, "Export Entry Log").clicked() {
                        app.export_entry_log();
                    }
                }
                ReportKind::Financial => {
                    if components::styled_button_with_icon(ui, FILE_XLS, "Export Daily Revenue").clicked() {
                        app.export_daily_revenue();
                    }
                }
                ReportKind::Operational => {}
            }
        });

        ui.add_space(12.0);

        // Preview of the summary the JSON export would contain
        ui.label(RichText::new("Preview").size(16.0).strong());
        ui.add_space(6.0);
        let summary = export::report_summary(app.report_kind, &app.data);
        let pretty = serde_json::to_string_pretty(&summary).unwrap_or_else(|_| "{}".to_string());
        egui::Frame::new()
            .fill(ui.visuals().extreme_bg_color)
            .inner_margin(Margin::same(10))
            .corner_radius(egui::CornerRadius::same(8))
            .show(ui, |ui| {
                ScrollArea::vertical().id_salt("report_preview").max_height(220.0).show(ui, |ui| {
                    ui.label(RichText::new(pretty).monospace().small());
                });
            });

        ui.add_space(16.0);

        ui.columns(2, |columns| {
            // Reports generated this session
            columns[0].label(RichText::new("Recent Reports").size(16.0).strong());
            columns[0].add_space(6.0);
            if app.generated_reports.is_empty() {
                columns[0].label(RichText::new("No reports generated this session.").weak());
            }
            for report in app.generated_reports.iter().rev() {
                columns[0].horizontal(|ui| {
                    ui.label(RichText::new(&report.name).strong());
                    components::badge(ui, report.kind.label(), colors::ACCENT);
                    ui.label(RichText::new(report.created.format("%H:%M:%S").to_string()).small().weak());
                });
            }

            // Standing schedule, display only
            columns[1].label(RichText::new("Scheduled Reports").size(16.0).strong());
            columns[1].add_space(6.0);
            for (name, cadence) in SCHEDULED {
                columns[1].horizontal(|ui| {
                    ui.label(CLOCK);
                    ui.vertical(|ui| {
                        ui.label(RichText::new(name).strong());
                        ui.label(RichText::new(cadence).small().weak());
                    });
                });
            }
        });

        ui.add_space(16.0);
    });
}
