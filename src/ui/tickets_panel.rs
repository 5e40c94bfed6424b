//! Ticket management: searchable booking table with bulk actions.

use eframe::egui::{self, Grid, RichText, ScrollArea, TextEdit, Ui};
use egui_phosphor::regular::{ENVELOPE, FILE_XLS, MAGNIFYING_GLASS, TRASH, X};

use crate::models::{EntryStatus, PaymentStatus, TicketRecord, TicketStatus};

use super::app::{App, DeleteTarget};
use super::components::{self, colors};

pub fn show(app: &mut App, ui: &mut Ui) {
    components::panel_header(ui, "Ticket Management");

    ui.add_space(8.0);

    // Summary cards
    let confirmed = app.data.tickets.iter().filter(|t| t.status == TicketStatus::Confirmed).count();
    let pending = app.data.tickets.iter().filter(|t| t.status == TicketStatus::Pending).count();
    let revenue: u64 = app
        .data
        .tickets
        .iter()
        .filter(|t| t.payment_status == PaymentStatus::Completed)
        .map(|t| u64::from(t.total_amount))
        .sum();

    ui.horizontal(|ui| {
        components::stat_card(ui, "Total Bookings", &app.data.tickets.len().to_string(), "All time");
        components::stat_card(ui, "Confirmed", &confirmed.to_string(), "Ready for entry");
        components::stat_card(ui, "Pending", &pending.to_string(), "Awaiting payment");
        components::stat_card(
            ui,
            "Collected",
            &components::money(&app.config.festival.currency_symbol, revenue),
            "Settled payments",
        );
    });

    ui.add_space(12.0);

    // Filter row
    ui.horizontal(|ui| {
        ui.label(MAGNIFYING_GLASS);
        ui.add(
            TextEdit::singleline(&mut app.ticket_filter.search)
                .hint_text("Search customer, booking ID, or email")
                .desired_width(240.0),
        );

        ui.label("Status:");
        egui::ComboBox::from_id_salt("ticket_status_filter")
            .width(110.0)
            .selected_text(app.ticket_filter.status.map_or("All", |s| s.label()))
            .show_ui(ui, |ui| {
                if ui.selectable_label(app.ticket_filter.status.is_none(), "All").clicked() {
                    app.ticket_filter.status = None;
                }
                for status in TicketStatus::ALL {
                    if ui
                        .selectable_label(app.ticket_filter.status == Some(status), status.label())
                        .clicked()
                    {
                        app.ticket_filter.status = Some(status);
                    }
                }
            });

        if components::styled_button(ui, "Clear Filters").clicked() {
            app.ticket_filter = Default::default();
        }
    });

    ui.add_space(6.0);

    // Rows are cloned out so selection and deletes can mutate freely
    let visible: Vec<TicketRecord> = app
        .data
        .tickets
        .iter()
        .filter(|t| app.ticket_filter.matches(t))
        .cloned()
        .collect();
    let visible_ids: Vec<String> = visible.iter().map(|t| t.id.clone()).collect();

    ui.label(
        RichText::new(format!("Showing {} of {} bookings", visible.len(), app.data.tickets.len()))
            .small()
            .weak(),
    );

    // Bulk action bar
    if !app.ticket_selection.is_empty() {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("{} selected", app.ticket_selection.len())).strong());
            if components::styled_button_with_icon(ui, FILE_XLS, "Export Data").clicked() {
                app.export_tickets();
            }
            if components::styled_button_with_icon(ui, ENVELOPE, "Send Email").clicked() {
                app.log_warning("Send Email is not available in the demo build");
            }
            if components::styled_button(ui, "Mark Confirmed").clicked() {
                app.log_warning("Mark Confirmed is not available in the demo build");
            }
            if components::styled_button(ui, "Cancel Booking").clicked() {
                app.log_warning("Cancel Booking is not available in the demo build");
            }
            if components::styled_button_with_icon(ui, X, "Clear Selection").clicked() {
                app.ticket_selection.clear();
            }
        });
    } else {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if components::styled_button_with_icon(ui, FILE_XLS, "Export Data").clicked() {
                app.export_tickets();
            }
            ui.label(RichText::new("Exports follow the current filter.").small().weak());
        });
    }

    ui.add_space(8.0);

    let mut delete_target: Option<DeleteTarget> = None;
    let can_delete = app.role.can_delete();

    ScrollArea::vertical().id_salt("tickets_table").show(ui, |ui| {
        Grid::new("tickets_grid")
            .num_columns(10)
            .striped(true)
            .min_col_width(40.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                // Header
                let mut all = app.ticket_selection.all_selected(&visible_ids);
                if ui.checkbox(&mut all, "").changed() {
                    app.ticket_selection.toggle_all(&visible_ids);
                }
                ui.strong("Booking ID");
                ui.strong("Customer");
                ui.strong("Pass Type");
                ui.strong("Qty");
                ui.strong("Amount");
                ui.strong("Booked");
                ui.strong("Status");
                ui.strong("Entry");
                ui.strong("Actions");
                ui.end_row();

                for ticket in &visible {
                    let mut checked = app.ticket_selection.contains(&ticket.id);
                    if ui.checkbox(&mut checked, "").changed() {
                        app.ticket_selection.toggle(&ticket.id);
                    }

                    ui.label(&ticket.booking_id);
                    ui.vertical(|ui| {
                        ui.label(&ticket.customer_name);
                        ui.label(RichText::new(&ticket.email).small().weak());
                    });
                    ui.label(&ticket.pass_type);
                    ui.label(ticket.quantity.to_string());
                    ui.label(app.format_amount(ticket.total_amount));
                    ui.label(ticket.booking_date.format("%Y-%m-%d").to_string());
                    ui.vertical(|ui| {
                        components::badge(ui, ticket.status.label(), status_color(ticket.status));
                        components::badge(ui, ticket.payment_status.label(), payment_color(ticket.payment_status));
                    });
                    components::badge(ui, ticket.entry_status.label(), entry_color(ticket.entry_status));

                    ui.horizontal(|ui| {
                        if can_delete && components::danger_action_button(ui, TRASH, "Delete booking").clicked() {
                            delete_target = Some(DeleteTarget::Ticket(ticket.id.clone(), ticket.booking_id.clone()));
                        }
                    });
                    ui.end_row();
                }
            });

        if visible.is_empty() {
            ui.add_space(10.0);
            ui.label(RichText::new("No bookings match the current filters.").weak());
        }
    });

    if let Some(target) = delete_target {
        app.delete_target = Some(target);
        app.show_delete_confirm = true;
    }
}

fn status_color(status: TicketStatus) -> egui::Color32 {
    match status {
        TicketStatus::Confirmed => colors::SUCCESS,
        TicketStatus::Pending => colors::WARNING,
        TicketStatus::Cancelled => colors::ERROR,
        TicketStatus::Refunded => colors::NEUTRAL,
    }
}

fn payment_color(status: PaymentStatus) -> egui::Color32 {
    match status {
        PaymentStatus::Completed => colors::SUCCESS,
        PaymentStatus::Pending => colors::WARNING,
        PaymentStatus::Failed => colors::ERROR,
    }
}

fn entry_color(status: EntryStatus) -> egui::Color32 {
    match status {
        EntryStatus::Entered => colors::SUCCESS,
        EntryStatus::Exited => colors::ACCENT,
        EntryStatus::NotEntered => colors::NEUTRAL,
    }
}
