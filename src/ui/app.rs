//! Main application UI.

use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Instant;

use chrono::{DateTime, Local};
use eframe::egui::{self, Align, Layout, RichText};
use egui_phosphor::regular::{
    CALENDAR_BLANK, CHART_LINE_UP, CLIPBOARD_TEXT, CLOCK, GAUGE, GEAR, MAP_PIN, TICKET, USERS,
};
use rand::Rng;

use crate::booking::{BookingDraft, PaymentError, Settlement, SettlementOutcome, spawn_settlement};
use crate::carousel::Carousel;
use crate::config::AppConfig;
use crate::data::DemoData;
use crate::export::{self, ReportKind};
use crate::filters::{Selection, TicketFilter, UserFilter};
use crate::models::{BookingKind, EntryStatus, PaymentStatus, TicketRecord, TicketStatus};
use crate::roles::{AdminSection, Role};

use super::components::{colors, money};
use super::{
    attendance_panel, booking_modal, dashboard, events_panel, home_panel, lineup_panel, passes_panel, reports_panel,
    revenue_panel, schedule_panel, settings_panel, tickets_panel, users_panel, venue_panel, venue_ops_panel,
};

/// Which face of the app is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Site,
    Admin,
}

/// Sections of the promo site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SiteSection {
    #[default]
    Home,
    Lineup,
    Schedule,
    Passes,
    Venue,
}

impl SiteSection {
    pub const ALL: [SiteSection; 5] = [
        SiteSection::Home,
        SiteSection::Lineup,
        SiteSection::Schedule,
        SiteSection::Passes,
        SiteSection::Venue,
    ];

    /// Get the display name for the section.
    pub fn name(&self) -> &'static str {
        match self {
            SiteSection::Home => "Home",
            SiteSection::Lineup => "Lineup",
            SiteSection::Schedule => "Schedule",
            SiteSection::Passes => "Passes",
            SiteSection::Venue => "Venue",
        }
    }
}

/// Tabs of the venue page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VenueTab {
    #[default]
    Overview,
    Facilities,
    Parking,
    Guidelines,
}

impl VenueTab {
    pub const ALL: [VenueTab; 4] = [
        VenueTab::Overview,
        VenueTab::Facilities,
        VenueTab::Parking,
        VenueTab::Guidelines,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            VenueTab::Overview => "Overview",
            VenueTab::Facilities => "Facilities",
            VenueTab::Parking => "Parking & Entry",
            VenueTab::Guidelines => "Guidelines",
        }
    }
}

/// Tabs of the events panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventsTab {
    #[default]
    Schedule,
    Lineup,
}

/// Log level for UI messages.
#[derive(Clone, Copy, Debug)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Log entry for display in the UI.
#[derive(Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub level: LogLevel,
}

/// Target for delete confirmation dialog.
#[derive(Clone)]
pub enum DeleteTarget {
    Ticket(String, String),
    User(String, String),
}

/// A report generated this session, for the recent list.
#[derive(Clone)]
pub struct GeneratedReport {
    pub name: String,
    pub kind: ReportKind,
    pub created: DateTime<Local>,
}

/// Text buffers backing the date fields on the settings panel.
#[derive(Clone)]
pub struct SettingsForm {
    pub start_date_input: String,
    pub end_date_input: String,
}

impl SettingsForm {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            start_date_input: config.festival.start_date.format("%Y-%m-%d").to_string(),
            end_date_input: config.festival.end_date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Main application state.
pub struct App {
    // Runtime and seeded data
    pub rt: tokio::runtime::Runtime,
    pub data: DemoData,

    // Configuration
    pub config: AppConfig,
    pub config_path: PathBuf,
    pub config_modified: bool,
    pub settings_form: SettingsForm,

    // Navigation
    pub view: View,
    pub site_section: SiteSection,
    pub admin_section: AdminSection,
    pub role: Role,

    // Site state
    pub lineup_carousel: Carousel,
    pub schedule_day: usize,
    pub venue_tab: VenueTab,
    pub booking_kind: BookingKind,
    pub booking_days: Vec<u32>,

    // Booking wizard
    pub booking: Option<BookingDraft>,
    pub last_settlement: Option<Settlement>,
    pub settlement_error: Option<PaymentError>,
    settlement_rx: Option<mpsc::Receiver<SettlementOutcome>>,
    settlement_started: Option<Instant>,

    // Admin table state
    pub ticket_filter: TicketFilter,
    pub ticket_selection: Selection,
    pub user_filter: UserFilter,
    pub user_selection: Selection,
    pub gate_filter: Option<String>,
    pub events_tab: EventsTab,
    pub events_day: usize,
    pub report_kind: ReportKind,
    pub generated_reports: Vec<GeneratedReport>,

    // Log messages
    pub log_messages: Vec<LogEntry>,

    // Dialogs
    pub show_delete_confirm: bool,
    pub delete_target: Option<DeleteTarget>,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl App {
    pub fn new(
        config: AppConfig,
        config_path: PathBuf,
        rt: tokio::runtime::Runtime,
        role: Role,
        start_in_admin: bool,
    ) -> Self {
        let data = DemoData::seed();
        let settings_form = SettingsForm::from_config(&config);
        let lineup_carousel = Carousel::new(data.celebrities.len());

        let mut app = Self {
            rt,
            data,
            config,
            config_path,
            config_modified: false,
            settings_form,
            view: if start_in_admin { View::Admin } else { View::Site },
            site_section: SiteSection::default(),
            admin_section: AdminSection::Overview,
            role,
            lineup_carousel,
            schedule_day: 0,
            venue_tab: VenueTab::default(),
            booking_kind: BookingKind::FullEvent,
            booking_days: Vec::new(),
            booking: None,
            last_settlement: None,
            settlement_error: None,
            settlement_rx: None,
            settlement_started: None,
            ticket_filter: TicketFilter::default(),
            ticket_selection: Selection::default(),
            user_filter: UserFilter::default(),
            user_selection: Selection::default(),
            gate_filter: None,
            events_tab: EventsTab::default(),
            events_day: 0,
            report_kind: ReportKind::Sales,
            generated_reports: Vec::new(),
            log_messages: Vec::new(),
            show_delete_confirm: false,
            delete_target: None,
            error_message: None,
            success_message: None,
        };

        app.log_info(format!(
            "Loaded demo data: {} passes, {} bookings, {} accounts",
            app.data.pass_types.len(),
            app.data.tickets.len(),
            app.data.users.len()
        ));

        app
    }

    /// Log a message to the UI log.
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        self.log_messages.push(LogEntry {
            timestamp: Local::now(),
            message: message.into(),
            level,
        });

        // Keep only last 100 messages
        if self.log_messages.len() > 100 {
            self.log_messages.remove(0);
        }
    }

    /// Log an info message.
    pub fn log_info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    /// Log a success message.
    pub fn log_success(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Success, message);
    }

    /// Log a warning message.
    pub fn log_warning(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    /// Log an error message.
    pub fn log_error(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Clear the activity log.
    pub fn clear_log(&mut self) {
        self.log_messages.clear();
    }

    /// Open the booking wizard for one pass, carrying over the booking
    /// type and day picks from the passes page.
    pub fn open_booking(&mut self, pass_id: &str) {
        let pass = match self.data.pass_types.iter().find(|p| p.id == pass_id) {
            Some(pass) => pass.clone(),
            None => return,
        };
        let days = match self.booking_kind {
            BookingKind::FullEvent => Vec::new(),
            BookingKind::SingleDay => self.booking_days.clone(),
        };
        self.log_info(format!("Booking started: {}", pass.name));
        self.booking = Some(BookingDraft::new(pass, self.booking_kind, days));
        self.last_settlement = None;
        self.settlement_error = None;
    }

    /// Close the wizard. The draft is discarded and dropping the
    /// receiver abandons any in-flight settlement.
    pub fn close_booking(&mut self) {
        if self.settlement_rx.is_some() {
            self.log_warning("Booking closed with payment in flight, result discarded");
        } else if self.booking.is_some() && self.last_settlement.is_none() {
            self.log_info("Booking abandoned");
        }
        self.booking = None;
        self.settlement_rx = None;
        self.settlement_started = None;
        self.settlement_error = None;
        self.last_settlement = None;
    }

    /// Hand the draft to the simulated processor.
    pub fn start_settlement(&mut self) {
        let (amount, method) = match &self.booking {
            Some(draft) => (draft.total_price(), draft.payment_method),
            None => return,
        };
        self.settlement_error = None;
        self.settlement_started = Some(Instant::now());
        self.settlement_rx = Some(spawn_settlement(&self.rt, &self.config.booking, amount, method));
        self.log_info(format!("Payment of {} submitted", self.format_amount(amount)));
    }

    pub fn settlement_pending(&self) -> bool {
        self.settlement_rx.is_some()
    }

    /// Fraction of the configured settle delay that has elapsed, capped
    /// just short of full so the bar never claims completion early.
    pub fn settlement_progress(&self) -> f32 {
        match self.settlement_started {
            Some(started) => {
                let delay = self.config.booking.settle_delay_ms.max(1) as f32;
                (started.elapsed().as_millis() as f32 / delay).min(0.95)
            }
            None => 0.0,
        }
    }

    pub fn format_amount(&self, amount: u32) -> String {
        money(&self.config.festival.currency_symbol, u64::from(amount))
    }

    /// Poll the settlement channel.
    fn poll_settlement(&mut self) {
        if let Some(rx) = self.settlement_rx.take() {
            match rx.try_recv() {
                Ok(outcome) => {
                    self.settlement_started = None;
                    match outcome {
                        Ok(settlement) => self.record_booking(settlement),
                        Err(e) => {
                            self.log_error(format!("Payment failed: {}", e));
                            self.settlement_error = Some(e);
                        }
                    }
                }
                Err(mpsc::TryRecvError::Empty) => {
                    self.settlement_rx = Some(rx);
                }
                Err(mpsc::TryRecvError::Disconnected) => {
                    self.settlement_started = None;
                    self.log_error("Payment task dropped without a result");
                }
            }
        }
    }

    /// Append a confirmed booking to the ticket table and move the
    /// wizard to its confirmation page.
    fn record_booking(&mut self, settlement: Settlement) {
        let record = match &self.booking {
            Some(draft) => {
                let pass_label = match draft.kind {
                    BookingKind::FullEvent => draft.pass.name.clone(),
                    BookingKind::SingleDay => format!("{} (Single Day)", draft.pass.name),
                };
                TicketRecord {
                    id: self.next_ticket_id(),
                    booking_id: settlement.booking_id.clone(),
                    customer_name: draft.attendees.first().map(|a| a.name.clone()).unwrap_or_default(),
                    email: draft.contact.email.clone(),
                    phone: draft.contact.phone.clone(),
                    pass_type: pass_label,
                    quantity: draft.attendees.len() as u32,
                    total_amount: settlement.amount,
                    booking_date: Local::now().date_naive(),
                    status: TicketStatus::Confirmed,
                    payment_status: PaymentStatus::Completed,
                    entry_status: EntryStatus::NotEntered,
                    qr_code: format!("QR{}", rand::thread_rng().gen_range(100_000..=999_999)),
                }
            }
            None => return,
        };

        self.data.tickets.push(record);
        if let Some(draft) = &mut self.booking {
            draft.confirm();
        }
        self.log_success(format!(
            "Booking {} confirmed, {} settled via {}",
            settlement.booking_id,
            self.format_amount(settlement.amount),
            settlement.method.label()
        ));
        self.last_settlement = Some(settlement);
    }

    fn next_ticket_id(&self) -> String {
        let next = self
            .data
            .tickets
            .iter()
            .filter_map(|t| t.id.strip_prefix("TKT").and_then(|n| n.parse::<u32>().ok()))
            .max()
            .unwrap_or(0)
            + 1;
        format!("TKT{next:03}")
    }

    /// Export tickets to Excel. Selected rows win over the filter.
    pub fn export_tickets(&mut self) {
        let rows: Vec<TicketRecord> = if self.ticket_selection.is_empty() {
            self.data
                .tickets
                .iter()
                .filter(|t| self.ticket_filter.matches(t))
                .cloned()
                .collect()
        } else {
            self.data
                .tickets
                .iter()
                .filter(|t| self.ticket_selection.contains(&t.id))
                .cloned()
                .collect()
        };

        if rows.is_empty() {
            self.error_message = Some("No tickets to export".to_string());
            return;
        }

        let filename = export::generate_export_filename("tickets");
        let path = match export::show_save_dialog(&filename) {
            Some(path) => path,
            None => return,
        };

        match export::export_tickets_to_excel(&rows, &path) {
            Ok(()) => {
                self.success_message = Some(format!("Exported {} tickets to {}", rows.len(), path.display()));
                self.log_success(format!("Exported {} tickets", rows.len()));
            }
            Err(e) => {
                self.error_message = Some(format!("Export failed: {}", e));
                self.log_error(format!("Ticket export failed: {}", e));
            }
        }
    }

    /// Export user accounts to Excel. Selected rows win over the filter.
    pub fn export_users(&mut self) {
        let rows: Vec<_> = if self.user_selection.is_empty() {
            self.data
                .users
                .iter()
                .filter(|u| self.user_filter.matches(u))
                .cloned()
                .collect()
        } else {
            self.data
                .users
                .iter()
                .filter(|u| self.user_selection.contains(&u.id))
                .cloned()
                .collect()
        };

        if rows.is_empty() {
            self.error_message = Some("No users to export".to_string());
            return;
        }

        let filename = export::generate_export_filename("users");
        let path = match export::show_save_dialog(&filename) {
            Some(path) => path,
            None => return,
        };

        match export::export_users_to_excel(&rows, &path) {
            Ok(()) => {
                self.success_message = Some(format!("Exported {} users to {}", rows.len(), path.display()));
                self.log_success(format!("Exported {} users", rows.len()));
            }
            Err(e) => {
                self.error_message = Some(format!("Export failed: {}", e));
                self.log_error(format!("User export failed: {}", e));
            }
        }
    }

    /// Export the gate entry log to Excel.
    pub fn export_entry_log(&mut self) {
        let filename = export::generate_export_filename("entry_log");
        let path = match export::show_save_dialog(&filename) {
            Some(path) => path,
            None => return,
        };

        match export::export_entry_log_to_excel(&self.data.recent_entries, &path) {
            Ok(()) => {
                self.success_message = Some(format!("Exported entry log to {}", path.display()));
                self.log_success("Exported entry log");
            }
            Err(e) => {
                self.error_message = Some(format!("Export failed: {}", e));
                self.log_error(format!("Entry log export failed: {}", e));
            }
        }
    }

    /// Export the daily revenue trend to Excel.
    pub fn export_daily_revenue(&mut self) {
        let filename = export::generate_export_filename("daily_revenue");
        let path = match export::show_save_dialog(&filename) {
            Some(path) => path,
            None => return,
        };

        match export::export_daily_revenue_to_excel(&self.data.daily_revenue, &path) {
            Ok(()) => {
                self.success_message = Some(format!("Exported daily revenue to {}", path.display()));
                self.log_success("Exported daily revenue");
            }
            Err(e) => {
                self.error_message = Some(format!("Export failed: {}", e));
                self.log_error(format!("Revenue export failed: {}", e));
            }
        }
    }

    /// Write the selected report's JSON summary.
    pub fn generate_report(&mut self) {
        let kind = self.report_kind;
        let filename = export::generate_report_filename(kind.filename_prefix());
        let path = match export::show_json_save_dialog(&filename) {
            Some(path) => path,
            None => return,
        };

        let summary = export::report_summary(kind, &self.data);
        match export::export_report_json(&summary, &path) {
            Ok(()) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or(filename);
                self.generated_reports.push(GeneratedReport {
                    name,
                    kind,
                    created: Local::now(),
                });
                self.success_message = Some(format!("{} written to {}", kind.label(), path.display()));
                self.log_success(format!("Generated {}", kind.label()));
            }
            Err(e) => {
                self.error_message = Some(format!("Report failed: {}", e));
                self.log_error(format!("Report generation failed: {}", e));
            }
        }
    }

    /// Validate and persist the configuration.
    pub fn save_config(&mut self) {
        if let Err(e) = self.config.validate() {
            self.error_message = Some(format!("Invalid settings: {}", e));
            return;
        }

        match self.config.save(&self.config_path) {
            Ok(()) => {
                self.config_modified = false;
                self.success_message = Some(format!("Settings saved to {}", self.config_path.display()));
                self.log_success("Settings saved");
            }
            Err(e) => {
                self.error_message = Some(format!("Save failed: {}", e));
                self.log_error(format!("Settings save failed: {}", e));
            }
        }
    }

    /// Switch the active admin role, falling back to the first section
    /// the new role may see.
    pub fn switch_role(&mut self, role: Role) {
        if role == self.role {
            return;
        }
        self.role = role;
        if !role.can_view(self.admin_section) {
            self.admin_section = role.visible_sections().first().copied().unwrap_or(AdminSection::Overview);
        }
        self.log_info(format!("Role switched to {}", role.label()));
    }

    /// Execute the confirmed delete operation.
    fn confirm_delete(&mut self) {
        if let Some(target) = self.delete_target.take() {
            match target {
                DeleteTarget::Ticket(id, booking_id) => {
                    self.data.tickets.retain(|t| t.id != id);
                    if self.ticket_selection.contains(&id) {
                        self.ticket_selection.toggle(&id);
                    }
                    self.success_message = Some(format!("Booking {} deleted", booking_id));
                    self.log_success(format!("Deleted booking {}", booking_id));
                }
                DeleteTarget::User(id, name) => {
                    self.data.users.retain(|u| u.id != id);
                    if self.user_selection.contains(&id) {
                        self.user_selection.toggle(&id);
                    }
                    self.success_message = Some(format!("User '{}' deleted", name));
                    self.log_success(format!("Deleted user {}", name));
                }
            }
        }
    }

    /// Render the site navigation header.
    fn show_site_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("site_header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(&self.config.festival.name)
                        .size(18.0)
                        .strong()
                        .color(colors::PRIMARY),
                );

                ui.add_space(20.0);

                for section in SiteSection::ALL {
                    if ui.selectable_label(self.site_section == section, section.name()).clicked() {
                        self.site_section = section;
                    }
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button(format!("{GEAR} Admin")).clicked() {
                        // Leaving the site unmounts the wizard
                        self.close_booking();
                        self.view = View::Admin;
                        if !self.role.can_view(self.admin_section) {
                            self.admin_section = AdminSection::Overview;
                        }
                    }

                    ui.add_space(6.0);

                    if super::components::primary_button_with_icon(ui, TICKET, "Book Passes").clicked() {
                        self.site_section = SiteSection::Passes;
                    }
                });
            });
            ui.add_space(6.0);
        });
    }

    /// Render the admin header with the role switcher.
    fn show_admin_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("admin_header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("{} Admin", self.config.festival.name))
                        .size(18.0)
                        .strong(),
                );

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button("View Site").clicked() {
                        self.view = View::Site;
                    }

                    ui.add_space(10.0);

                    let mut selected = self.role;
                    egui::ComboBox::from_id_salt("role_switcher")
                        .width(130.0)
                        .selected_text(selected.label())
                        .show_ui(ui, |ui| {
                            for role in Role::ADMIN_ROLES {
                                ui.selectable_value(&mut selected, role, role.label());
                            }
                        });
                    if selected != self.role {
                        self.switch_role(selected);
                    }

                    ui.label("Role:");
                });
            });
            ui.add_space(6.0);
        });
    }

    /// Render the admin sidebar. Sections hidden from the active role
    /// never appear.
    fn show_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("admin_sidebar")
            .resizable(false)
            .exact_width(180.0)
            .show(ctx, |ui| {
                ui.add_space(10.0);

                for section in self.role.visible_sections() {
                    let icon = section_icon(section);
                    let selected = self.admin_section == section;
                    if ui
                        .selectable_label(selected, RichText::new(format!("{icon}  {}", section.label())).size(14.0))
                        .clicked()
                    {
                        self.admin_section = section;
                    }
                    ui.add_space(2.0);
                }
            });
    }

    /// Render status bar (display only, no interaction).
    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(28.0)
            .show(ctx, |ui| {
                ui.disable();
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!(
                            "{} | {}",
                            self.config.festival.date_line(),
                            self.config.festival.venue_label
                        ))
                        .weak(),
                    );

                    if matches!(self.view, View::Admin) {
                        ui.separator();
                        ui.colored_label(colors::ACCENT, format!("Role: {}", self.role.label()));
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if self.settlement_pending() {
                            ui.label("Processing payment...");
                            ui.spinner();
                        } else if self.config_modified {
                            ui.colored_label(colors::WARNING, "Unsaved settings");
                        }
                    });
                });
            });
    }

    /// Render modal dialogs (error, success, delete confirmation).
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        // Error dialog
        if let Some(ref error) = self.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::ERROR, error);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }

        // Success dialog
        if let Some(ref msg) = self.success_message.clone() {
            egui::Window::new("Success")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::SUCCESS, msg);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.success_message = None;
                    }
                });
        }

        // Delete confirmation dialog
        if self.show_delete_confirm
            && let Some(ref target) = self.delete_target.clone()
        {
            let (title, message) = match target {
                DeleteTarget::Ticket(_, booking_id) => ("Delete Booking", format!("Delete booking '{}'?", booking_id)),
                DeleteTarget::User(_, name) => ("Delete User", format!("Delete user '{}'?", name)),
            };

            egui::Window::new(title)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        if ui.button("Cancel").clicked() {
                            self.show_delete_confirm = false;
                            self.delete_target = None;
                        }
                        if ui.button("Delete").clicked() {
                            self.confirm_delete();
                            self.show_delete_confirm = false;
                            self.delete_target = None;
                        }
                    });
                });
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll async results
        self.poll_settlement();

        // Request repaint during async operations
        if self.settlement_pending() {
            ctx.request_repaint();
        }

        // The countdown ticks once a second
        if self.view == View::Site && self.site_section == SiteSection::Home && self.config.ui.show_countdown {
            ctx.request_repaint_after(std::time::Duration::from_secs(1));
        }

        match self.view {
            View::Site => self.show_site_header(ctx),
            View::Admin => {
                self.show_admin_header(ctx);
                self.show_sidebar(ctx);
            }
        }

        // Status bar
        self.show_status_bar(ctx);

        // Booking wizard
        booking_modal::show(self, ctx);

        // Modal dialogs (error, success, delete confirmation)
        self.show_dialogs(ctx);

        // Main content
        egui::CentralPanel::default().show(ctx, |ui| match self.view {
            View::Site => {
                let nav = match self.site_section {
                    SiteSection::Home => home_panel::show(self, ui),
                    SiteSection::Lineup => {
                        lineup_panel::show(self, ui);
                        None
                    }
                    SiteSection::Schedule => {
                        schedule_panel::show(self, ui);
                        None
                    }
                    SiteSection::Passes => {
                        passes_panel::show(self, ui);
                        None
                    }
                    SiteSection::Venue => {
                        venue_panel::show(self, ui);
                        None
                    }
                };
                if let Some(next) = nav {
                    self.site_section = next;
                }
            }
            View::Admin => match self.admin_section {
                AdminSection::Overview => {
                    if let Some(next) = dashboard::show(self, ui) {
                        self.admin_section = next;
                    }
                }
                AdminSection::Tickets => tickets_panel::show(self, ui),
                AdminSection::Attendance => attendance_panel::show(self, ui),
                AdminSection::Revenue => revenue_panel::show(self, ui),
                AdminSection::Users => users_panel::show(self, ui),
                AdminSection::Events => events_panel::show(self, ui),
                AdminSection::Venue => venue_ops_panel::show(self, ui),
                AdminSection::Reports => reports_panel::show(self, ui),
                AdminSection::Settings => settings_panel::show(self, ui),
            },
        });
    }
}

/// Sidebar icon for one admin section.
fn section_icon(section: AdminSection) -> &'static str {
    match section {
        AdminSection::Overview => GAUGE,
        AdminSection::Tickets => TICKET,
        AdminSection::Attendance => CLOCK,
        AdminSection::Revenue => CHART_LINE_UP,
        AdminSection::Users => USERS,
        AdminSection::Events => CALENDAR_BLANK,
        AdminSection::Venue => MAP_PIN,
        AdminSection::Reports => CLIPBOARD_TEXT,
        AdminSection::Settings => GEAR,
    }
}
