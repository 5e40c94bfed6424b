//! Excel and JSON export functionality.

use crate::data::DemoData;
use crate::models::{DailyRevenue, EntryEvent, TicketRecord, UserAccount};
use chrono::Local;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, XlsxError};
use serde_json::json;
use std::path::{Path, PathBuf};

/// The four report flavors offered on the reports page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Sales,
    Attendance,
    Financial,
    Operational,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Sales,
        ReportKind::Attendance,
        ReportKind::Financial,
        ReportKind::Operational,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::Sales => "Sales Report",
            ReportKind::Attendance => "Attendance Report",
            ReportKind::Financial => "Financial Summary",
            ReportKind::Operational => "Operational Report",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReportKind::Sales => "Revenue and ticket sales analysis",
            ReportKind::Attendance => "Entry/exit patterns and crowd analysis",
            ReportKind::Financial => "Complete financial breakdown",
            ReportKind::Operational => "Event operations and logistics",
        }
    }

    pub fn filename_prefix(&self) -> &'static str {
        match self {
            ReportKind::Sales => "sales_report",
            ReportKind::Attendance => "attendance_report",
            ReportKind::Financial => "financial_summary",
            ReportKind::Operational => "operational_report",
        }
    }
}

/// Export ticket bookings to Excel file.
pub fn export_tickets_to_excel(tickets: &[TicketRecord], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name("Tickets")?;

    // Header format
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Thin);

    // Number format for amounts
    let amount_format = Format::new().set_num_format("#,##0");

    // Headers
    let headers = [
        "Booking ID",
        "Customer",
        "Email",
        "Phone",
        "Pass Type",
        "Qty",
        "Amount",
        "Booking Date",
        "Status",
        "Payment",
        "Entry",
    ];

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    // Column widths
    worksheet.set_column_width(0, 16)?; // Booking ID
    worksheet.set_column_width(1, 24)?; // Customer
    worksheet.set_column_width(2, 26)?; // Email
    worksheet.set_column_width(3, 16)?; // Phone
    worksheet.set_column_width(4, 24)?; // Pass Type
    worksheet.set_column_width(5, 6)?; // Qty
    worksheet.set_column_width(6, 10)?; // Amount
    worksheet.set_column_width(7, 12)?; // Booking Date
    worksheet.set_column_width(8, 11)?; // Status
    worksheet.set_column_width(9, 11)?; // Payment
    worksheet.set_column_width(10, 11)?; // Entry

    // Data rows
    for (idx, ticket) in tickets.iter().enumerate() {
        let row = (idx + 1) as u32;

        worksheet.write_string(row, 0, &ticket.booking_id)?;
        worksheet.write_string(row, 1, &ticket.customer_name)?;
        worksheet.write_string(row, 2, &ticket.email)?;
        worksheet.write_string(row, 3, &ticket.phone)?;
        worksheet.write_string(row, 4, &ticket.pass_type)?;
        worksheet.write_number(row, 5, f64::from(ticket.quantity))?;
        worksheet.write_number_with_format(row, 6, f64::from(ticket.total_amount), &amount_format)?;
        worksheet.write_string(row, 7, ticket.booking_date.to_string())?;
        worksheet.write_string(row, 8, ticket.status.label())?;
        worksheet.write_string(row, 9, ticket.payment_status.label())?;
        worksheet.write_string(row, 10, ticket.entry_status.label())?;
    }

    // Autofilter
    if !tickets.is_empty() {
        let last_row = tickets.len() as u32;
        worksheet.autofilter(0, 0, last_row, 10)?;
    }

    // Freeze top row
    worksheet.set_freeze_panes(1, 0)?;

    workbook.save(path)?;
    Ok(())
}

/// Export user accounts to Excel file.
pub fn export_users_to_excel(users: &[UserAccount], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name("Users")?;

    // Header format
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Thin);

    // Headers
    let headers = [
        "Name",
        "Email",
        "Phone",
        "Role",
        "Status",
        "Registered",
        "Last Login",
        "Bookings",
        "Total Spent",
    ];

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    // Column widths
    worksheet.set_column_width(0, 24)?; // Name
    worksheet.set_column_width(1, 26)?; // Email
    worksheet.set_column_width(2, 16)?; // Phone
    worksheet.set_column_width(3, 12)?; // Role
    worksheet.set_column_width(4, 10)?; // Status
    worksheet.set_column_width(5, 12)?; // Registered
    worksheet.set_column_width(6, 17)?; // Last Login
    worksheet.set_column_width(7, 10)?; // Bookings
    worksheet.set_column_width(8, 12)?; // Total Spent

    // Data rows
    for (idx, user) in users.iter().enumerate() {
        let row = (idx + 1) as u32;

        worksheet.write_string(row, 0, &user.name)?;
        worksheet.write_string(row, 1, &user.email)?;
        worksheet.write_string(row, 2, &user.phone)?;
        worksheet.write_string(row, 3, user.role.label())?;
        worksheet.write_string(row, 4, user.status.label())?;
        worksheet.write_string(row, 5, user.registered.to_string())?;
        worksheet.write_string(row, 6, user.last_login.format("%Y-%m-%d %H:%M").to_string())?;
        worksheet.write_number(row, 7, f64::from(user.total_bookings))?;
        worksheet.write_number(row, 8, f64::from(user.total_spent))?;
    }

    // Autofilter
    if !users.is_empty() {
        let last_row = users.len() as u32;
        worksheet.autofilter(0, 0, last_row, 8)?;
    }

    // Freeze top row
    worksheet.set_freeze_panes(1, 0)?;

    workbook.save(path)?;
    Ok(())
}

/// Export the gate entry/exit log to Excel file.
pub fn export_entry_log_to_excel(entries: &[EntryEvent], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name("Entry Log")?;

    // Header format
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Thin);

    // Headers
    let headers = ["Attendee", "Ticket ID", "Gate", "Time", "Status"];

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    // Column widths
    worksheet.set_column_width(0, 24)?; // Attendee
    worksheet.set_column_width(1, 16)?; // Ticket ID
    worksheet.set_column_width(2, 14)?; // Gate
    worksheet.set_column_width(3, 10)?; // Time
    worksheet.set_column_width(4, 10)?; // Status

    // Data rows
    for (idx, entry) in entries.iter().enumerate() {
        let row = (idx + 1) as u32;

        worksheet.write_string(row, 0, &entry.attendee)?;
        worksheet.write_string(row, 1, &entry.ticket_id)?;
        worksheet.write_string(row, 2, &entry.gate)?;
        worksheet.write_string(row, 3, &entry.time)?;
        worksheet.write_string(row, 4, entry.direction.label())?;
    }

    // Autofilter
    if !entries.is_empty() {
        let last_row = entries.len() as u32;
        worksheet.autofilter(0, 0, last_row, 4)?;
    }

    // Freeze top row
    worksheet.set_freeze_panes(1, 0)?;

    workbook.save(path)?;
    Ok(())
}

/// Export the daily revenue trend to Excel file.
pub fn export_daily_revenue_to_excel(days: &[DailyRevenue], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name("Daily Revenue")?;

    // Header format
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Thin);

    // Number format for amounts
    let amount_format = Format::new().set_num_format("#,##0");

    // Headers
    let headers = ["Date", "Revenue", "Bookings"];

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    // Column widths
    worksheet.set_column_width(0, 12)?; // Date
    worksheet.set_column_width(1, 12)?; // Revenue
    worksheet.set_column_width(2, 10)?; // Bookings

    // Data rows
    for (idx, day) in days.iter().enumerate() {
        let row = (idx + 1) as u32;

        worksheet.write_string(row, 0, day.date.to_string())?;
        worksheet.write_number_with_format(row, 1, day.revenue as f64, &amount_format)?;
        worksheet.write_number(row, 2, f64::from(day.bookings))?;
    }

    // Autofilter
    if !days.is_empty() {
        let last_row = days.len() as u32;
        worksheet.autofilter(0, 0, last_row, 2)?;
    }

    // Freeze top row
    worksheet.set_freeze_panes(1, 0)?;

    workbook.save(path)?;
    Ok(())
}

/// Build the JSON summary for one report flavor from the live data.
pub fn report_summary(kind: ReportKind, data: &DemoData) -> serde_json::Value {
    let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    match kind {
        ReportKind::Sales => {
            let total_revenue: u64 = data.daily_revenue.iter().map(|d| d.revenue).sum();
            let total_bookings: u32 = data.daily_revenue.iter().map(|d| d.bookings).sum();
            let top_pass = data
                .revenue_by_pass
                .iter()
                .max_by_key(|slice| slice.revenue)
                .map(|slice| slice.label.clone())
                .unwrap_or_default();
            let peak_day = data
                .daily_revenue
                .iter()
                .max_by_key(|day| day.revenue)
                .map(|day| day.date.to_string())
                .unwrap_or_default();
            json!({
                "report": kind.label(),
                "generated_at": generated_at,
                "total_revenue": total_revenue,
                "total_bookings": total_bookings,
                "top_selling_pass": top_pass,
                "peak_sales_day": peak_day,
                "revenue_by_pass": data.revenue_by_pass,
            })
        }
        ReportKind::Attendance => {
            let total_entries: u32 = data.gates.iter().map(|g| g.entries).sum();
            let total_exits: u32 = data.gates.iter().map(|g| g.exits).sum();
            let current: u32 = data.gates.iter().map(|g| g.current).sum();
            let busiest_gate = data
                .gates
                .iter()
                .max_by_key(|gate| gate.entries)
                .map(|gate| gate.gate.clone())
                .unwrap_or_default();
            let peak_hour = data
                .hourly_flow
                .iter()
                .max_by_key(|flow| flow.entries)
                .map(|flow| flow.hour.clone())
                .unwrap_or_default();
            json!({
                "report": kind.label(),
                "generated_at": generated_at,
                "total_entries": total_entries,
                "total_exits": total_exits,
                "current_attendance": current,
                "busiest_gate": busiest_gate,
                "peak_hour": peak_hour,
                "hourly_flow": data.hourly_flow,
            })
        }
        ReportKind::Financial => {
            let total_revenue: u64 = data.daily_revenue.iter().map(|d| d.revenue).sum();
            json!({
                "report": kind.label(),
                "generated_at": generated_at,
                "total_revenue": total_revenue,
                "payment_methods": data.payment_methods,
                "daily_revenue": data.daily_revenue,
            })
        }
        ReportKind::Operational => {
            let active_alerts = data.alerts.len();
            let zones: Vec<serde_json::Value> = data
                .venue_zones
                .iter()
                .map(|zone| {
                    json!({
                        "name": zone.name,
                        "occupancy": zone.occupancy,
                        "capacity": zone.capacity,
                        "status": zone.status().label(),
                    })
                })
                .collect();
            let facilities: Vec<serde_json::Value> = data
                .facility_units
                .iter()
                .map(|unit| {
                    json!({
                        "name": unit.name,
                        "status": unit.status.label(),
                        "technician": unit.technician,
                    })
                })
                .collect();
            json!({
                "report": kind.label(),
                "generated_at": generated_at,
                "active_alerts": active_alerts,
                "zones": zones,
                "facilities": facilities,
                "schedule": data.schedule_items,
            })
        }
    }
}

/// Write a report summary as pretty-printed JSON.
pub fn export_report_json(summary: &serde_json::Value, path: &Path) -> crate::error::Result<()> {
    let content = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Open save file dialog and return selected path.
pub fn show_save_dialog(default_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_file_name(default_name)
        .add_filter("Excel Files", &["xlsx"])
        .save_file()
}

/// Save dialog variant for JSON reports.
pub fn show_json_save_dialog(default_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_file_name(default_name)
        .add_filter("JSON Files", &["json"])
        .save_file()
}

/// Generate default filename for export.
pub fn generate_export_filename(prefix: &str) -> String {
    let now = Local::now();
    format!("{prefix}_{ts}.xlsx", ts = now.format("%Y%m%d_%H%M%S"))
}

/// Generate default filename for a JSON report.
pub fn generate_report_filename(prefix: &str) -> String {
    let now = Local::now();
    format!("{prefix}_{ts}.json", ts = now.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sales_summary_aggregates_seed() {
        let data = DemoData::seed();
        let summary = report_summary(ReportKind::Sales, &data);
        assert_eq!(summary["report"], "Sales Report");
        assert_eq!(summary["top_selling_pass"], "Premium 5-Day Pass");
        let total = summary["total_revenue"].as_u64().unwrap();
        assert_eq!(total, data.daily_revenue.iter().map(|d| d.revenue).sum::<u64>());
    }

    #[test]
    fn test_attendance_summary_finds_busiest_gate() {
        let data = DemoData::seed();
        let summary = report_summary(ReportKind::Attendance, &data);
        assert_eq!(summary["busiest_gate"], "Main Gate");
        assert_eq!(summary["peak_hour"], "22:00");
    }

    #[test]
    fn test_filenames_carry_extension() {
        assert!(generate_export_filename("tickets").ends_with(".xlsx"));
        assert!(generate_report_filename("sales_report").ends_with(".json"));
    }
}
