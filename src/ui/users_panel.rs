//! User management: searchable account table with bulk actions.

use eframe::egui::{self, Grid, RichText, ScrollArea, TextEdit, Ui};
use egui_phosphor::regular::{ENVELOPE, FILE_XLS, MAGNIFYING_GLASS, TRASH, X};

use crate::models::{AccountStatus, UserAccount};
use crate::roles::Role;

use super::app::{App, DeleteTarget};
use super::components::{self, colors};

pub fn show(app: &mut App, ui: &mut Ui) {
    components::panel_header(ui, "User Management");

    ui.add_space(8.0);

    // Summary cards
    let active = app.data.users.iter().filter(|u| u.status == AccountStatus::Active).count();
    let banned = app.data.users.iter().filter(|u| u.status == AccountStatus::Banned).count();
    let spent: u64 = app.data.users.iter().map(|u| u64::from(u.total_spent)).sum();

    ui.horizontal(|ui| {
        components::stat_card(ui, "Total Users", &app.data.users.len().to_string(), "Registered accounts");
        components::stat_card(ui, "Active", &active.to_string(), "In good standing");
        components::stat_card(ui, "Banned", &banned.to_string(), "Blocked from booking");
        components::stat_card(
            ui,
            "Lifetime Spend",
            &components::money(&app.config.festival.currency_symbol, spent),
            "Across all accounts",
        );
    });

    ui.add_space(12.0);

    // Filter row
    ui.horizontal(|ui| {
        ui.label(MAGNIFYING_GLASS);
        ui.add(
            TextEdit::singleline(&mut app.user_filter.search)
                .hint_text("Search name, email, or phone")
                .desired_width(240.0),
        );

        ui.label("Role:");
        egui::ComboBox::from_id_salt("user_role_filter")
            .width(110.0)
            .selected_text(app.user_filter.role.map_or("All", |r| r.label()))
            .show_ui(ui, |ui| {
                if ui.selectable_label(app.user_filter.role.is_none(), "All").clicked() {
                    app.user_filter.role = None;
                }
                for role in Role::ALL {
                    if ui.selectable_label(app.user_filter.role == Some(role), role.label()).clicked() {
                        app.user_filter.role = Some(role);
                    }
                }
            });

        ui.label("Status:");
        egui::ComboBox::from_id_salt("user_status_filter")
            .width(100.0)
            .selected_text(app.user_filter.status.map_or("All", |s| s.label()))
            .show_ui(ui, |ui| {
                if ui.selectable_label(app.user_filter.status.is_none(), "All").clicked() {
                    app.user_filter.status = None;
                }
                for status in AccountStatus::ALL {
                    if ui
                        .selectable_label(app.user_filter.status == Some(status), status.label())
                        .clicked()
                    {
                        app.user_filter.status = Some(status);
                    }
                }
            });

        if components::styled_button(ui, "Clear Filters").clicked() {
            app.user_filter = Default::default();
        }
    });

    ui.add_space(6.0);

    let visible: Vec<UserAccount> = app
        .data
        .users
        .iter()
        .filter(|u| app.user_filter.matches(u))
        .cloned()
        .collect();
    let visible_ids: Vec<String> = visible.iter().map(|u| u.id.clone()).collect();

    ui.label(
        RichText::new(format!("Showing {} of {} users", visible.len(), app.data.users.len()))
            .small()
            .weak(),
    );

    // Bulk action bar
    if !app.user_selection.is_empty() {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("{} selected", app.user_selection.len())).strong());
            if components::styled_button_with_icon(ui, FILE_XLS, "Export Data").clicked() {
                app.export_users();
            }
            if components::styled_button_with_icon(ui, ENVELOPE, "Send Email").clicked() {
                app.log_warning("Send Email is not available in the demo build");
            }
            if components::styled_button(ui, "Activate").clicked() {
                app.log_warning("Activate is not available in the demo build");
            }
            if components::styled_button(ui, "Deactivate").clicked() {
                app.log_warning("Deactivate is not available in the demo build");
            }
            if components::styled_button_with_icon(ui, X, "Clear Selection").clicked() {
                app.user_selection.clear();
            }
        });
    } else {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if components::styled_button_with_icon(ui, FILE_XLS, "Export Data").clicked() {
                app.export_users();
            }
            ui.label(RichText::new("Exports follow the current filter.").small().weak());
        });
    }

    ui.add_space(8.0);

    let mut delete_target: Option<DeleteTarget> = None;
    let can_delete = app.role.can_delete();

    ScrollArea::vertical().id_salt("users_table").show(ui, |ui| {
        Grid::new("users_grid")
            .num_columns(10)
            .striped(true)
            .min_col_width(40.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                let mut all = app.user_selection.all_selected(&visible_ids);
                if ui.checkbox(&mut all, "").changed() {
                    app.user_selection.toggle_all(&visible_ids);
                }
                ui.strong("User");
                ui.strong("Phone");
                ui.strong("Role");
                ui.strong("Status");
                ui.strong("Registered");
                ui.strong("Last Login");
                ui.strong("Bookings");
                ui.strong("Spent");
                ui.strong("Actions");
                ui.end_row();

                for user in &visible {
                    let mut checked = app.user_selection.contains(&user.id);
                    if ui.checkbox(&mut checked, "").changed() {
                        app.user_selection.toggle(&user.id);
                    }

                    ui.horizontal(|ui| {
                        components::badge(ui, &user.initials(), colors::ACCENT);
                        ui.vertical(|ui| {
                            ui.label(&user.name);
                            ui.label(RichText::new(&user.email).small().weak());
                        });
                    });
                    ui.label(&user.phone);
                    ui.label(user.role.label());
                    components::badge(ui, user.status.label(), account_color(user.status));
                    ui.label(user.registered.format("%Y-%m-%d").to_string());
                    ui.label(user.last_login.format("%Y-%m-%d %H:%M").to_string());
                    ui.label(user.total_bookings.to_string());
                    ui.label(app.format_amount(user.total_spent));

                    ui.horizontal(|ui| {
                        if can_delete && components::danger_action_button(ui, TRASH, "Delete user").clicked() {
                            delete_target = Some(DeleteTarget::User(user.id.clone(), user.name.clone()));
                        }
                    });
                    ui.end_row();
                }
            });

        if visible.is_empty() {
            ui.add_space(10.0);
            ui.label(RichText::new("No users match the current filters.").weak());
        }
    });

    if let Some(target) = delete_target {
        app.delete_target = Some(target);
        app.show_delete_confirm = true;
    }
}

fn account_color(status: AccountStatus) -> egui::Color32 {
    match status {
        AccountStatus::Active => colors::SUCCESS,
        AccountStatus::Inactive => colors::NEUTRAL,
        AccountStatus::Banned => colors::ERROR,
    }
}
