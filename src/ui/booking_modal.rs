//! Three-step booking wizard shown over the site.

use eframe::egui::{self, Align2, Color32, ProgressBar, RichText, TextEdit, Ui};
use egui_phosphor::regular::{CHECK_CIRCLE, PLUS, TRASH};

use crate::booking::{BookingDraft, Gender, WizardStep};
use crate::models::PaymentMethod;

use super::app::App;
use super::components::{self, colors};

enum Action {
    None,
    StartPayment,
    Close,
}

/// Render the wizard window if a draft is open.
pub fn show(app: &mut App, ctx: &egui::Context) {
    if app.booking.is_none() {
        return;
    }

    let pending = app.settlement_pending();
    let progress = app.settlement_progress();
    let symbol = app.config.festival.currency_symbol.clone();
    let settlement = app.last_settlement.clone();
    let error = app.settlement_error.clone();

    let mut draft = match app.booking.take() {
        Some(draft) => draft,
        None => return,
    };
    let mut action = Action::None;
    let mut open = true;

    egui::Window::new(format!("Book {}", draft.pass.name))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([460.0, 0.0])
        .open(&mut open)
        .show(ctx, |ui| {
            show_step_row(ui, draft.step);
            ui.separator();
            ui.add_space(8.0);

            match draft.step {
                WizardStep::Details => {
                    show_details_step(ui, &mut draft);
                    ui.add_space(12.0);
                    ui.separator();
                    ui.horizontal(|ui| {
                        let next = ui.add_enabled(draft.step_valid(), egui::Button::new("Next: Payment"));
                        if next.clicked() {
                            draft.go_next();
                        }
                        if !draft.step_valid() {
                            next.on_hover_text("Fill in every attendee and contact field first");
                        }
                    });
                }
                WizardStep::Payment => {
                    show_payment_step(ui, &mut draft, &symbol, pending, progress, error.as_ref(), &mut action);
                }
                WizardStep::Confirmation => {
                    show_confirmation_step(ui, &draft, &symbol, settlement.as_ref(), &mut action);
                }
            }
        });

    app.booking = Some(draft);

    if !open {
        action = Action::Close;
    }

    match action {
        Action::None => {}
        Action::StartPayment => app.start_settlement(),
        Action::Close => app.close_booking(),
    }
}

/// The numbered step strip across the top of the window.
fn show_step_row(ui: &mut Ui, current: WizardStep) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        for step in WizardStep::ALL {
            let done = step.index() < current.index();
            let active = step == current;
            let color = if done {
                colors::SUCCESS
            } else if active {
                colors::PRIMARY
            } else {
                colors::NEUTRAL
            };

            let (rect, _) = ui.allocate_exact_size(egui::vec2(18.0, 18.0), egui::Sense::hover());
            ui.painter().circle_filled(rect.center(), 9.0, color);
            let glyph = if done { "\u{2713}".to_string() } else { (step.index() + 1).to_string() };
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                glyph,
                egui::FontId::proportional(11.0),
                Color32::WHITE,
            );

            let text = RichText::new(step.title()).size(13.0);
            ui.label(if active { text.strong() } else { text.weak() });

            if step != WizardStep::Confirmation {
                ui.add_space(10.0);
            }
        }
    });
    ui.add_space(4.0);
}

fn show_details_step(ui: &mut Ui, draft: &mut BookingDraft) {
    ui.label(RichText::new("Attendees").strong());
    ui.add_space(4.0);

    let several = draft.attendees.len() > 1;
    let mut remove_index = None;

    for (i, attendee) in draft.attendees.iter_mut().enumerate() {
        ui.horizontal(|ui| {
            ui.label(format!("{}.", i + 1));
            ui.add(
                TextEdit::singleline(&mut attendee.name)
                    .hint_text("Full name")
                    .desired_width(170.0),
            );
            ui.add(TextEdit::singleline(&mut attendee.age).hint_text("Age").desired_width(44.0));
            egui::ComboBox::from_id_salt(("attendee_gender", i))
                .width(90.0)
                .selected_text(attendee.gender.label())
                .show_ui(ui, |ui| {
                    for gender in Gender::ALL {
                        ui.selectable_value(&mut attendee.gender, gender, gender.label());
                    }
                });
            if several && components::danger_action_button(ui, TRASH, "Remove attendee").clicked() {
                remove_index = Some(i);
            }
        });
    }

    if let Some(i) = remove_index {
        draft.remove_attendee(i);
    }

    if components::styled_button_with_icon(ui, PLUS, "Add Attendee").clicked() && draft.can_add_attendee() {
        draft.add_attendee();
    }
    if !draft.can_add_attendee() {
        ui.label(
            RichText::new(format!("This pass covers up to {} person(s).", draft.pass.max_persons))
                .small()
                .weak(),
        );
    }

    ui.add_space(10.0);
    ui.label(RichText::new("Contact").strong());
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        ui.label("Email:");
        ui.add(
            TextEdit::singleline(&mut draft.contact.email)
                .hint_text("you@example.com")
                .desired_width(220.0),
        );
    });
    ui.horizontal(|ui| {
        ui.label("Phone:");
        ui.add(
            TextEdit::singleline(&mut draft.contact.phone)
                .hint_text("+91 98765 43210")
                .desired_width(220.0),
        );
    });
    ui.horizontal(|ui| {
        ui.label("Address:");
        ui.add(
            TextEdit::singleline(&mut draft.contact.address)
                .hint_text("City, State")
                .desired_width(220.0),
        );
    });
}

fn show_payment_step(
    ui: &mut Ui,
    draft: &mut BookingDraft,
    symbol: &str,
    pending: bool,
    progress: f32,
    error: Option<&crate::booking::PaymentError>,
    action: &mut Action,
) {
    // Order summary
    egui::Frame::new()
        .fill(ui.visuals().extreme_bg_color)
        .inner_margin(egui::Margin::same(12))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(RichText::new(&draft.pass.name).strong());
            let scope = match draft.kind {
                crate::models::BookingKind::FullEvent => "Full event, all days".to_string(),
                crate::models::BookingKind::SingleDay => {
                    let days: Vec<String> = draft.selected_days.iter().map(|d| format!("Day {d}")).collect();
                    days.join(", ")
                }
            };
            ui.label(RichText::new(scope).small().weak());
            ui.label(RichText::new(format!("{} attendee(s)", draft.attendees.len())).small().weak());
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!(
                    "Total: {}",
                    components::money(symbol, u64::from(draft.total_price()))
                ))
                .size(18.0)
                .strong()
                .color(colors::PRIMARY),
            );
        });

    ui.add_space(10.0);
    ui.label(RichText::new("Payment Method").strong());
    ui.add_space(4.0);

    ui.add_enabled_ui(!pending, |ui| {
        for method in PaymentMethod::ALL {
            let selected = draft.payment_method == method;
            if ui
                .selectable_label(selected, format!("{} - {}", method.label(), method.note()))
                .clicked()
            {
                draft.payment_method = method;
            }
        }
    });

    ui.add_space(10.0);

    if pending {
        ui.add(
            ProgressBar::new(progress)
                .desired_width(ui.available_width())
                .text("Processing payment...")
                .animate(true)
                .fill(colors::PRIMARY),
        );
        ui.label(RichText::new("Closing this window abandons the payment.").small().weak());
        return;
    }

    if let Some(err) = error {
        ui.colored_label(colors::ERROR, format!("Payment failed: {err}"));
        ui.add_space(4.0);
    }

    ui.separator();
    ui.horizontal(|ui| {
        if ui.button("Back").clicked() {
            draft.go_back();
        }
        let label = if error.is_some() { "Try Again" } else { "Pay Now" };
        if ui
            .add(egui::Button::new(RichText::new(label).color(Color32::WHITE)).fill(colors::PRIMARY))
            .clicked()
        {
            *action = Action::StartPayment;
        }
    });
}

fn show_confirmation_step(
    ui: &mut Ui,
    draft: &BookingDraft,
    symbol: &str,
    settlement: Option<&crate::booking::Settlement>,
    action: &mut Action,
) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(CHECK_CIRCLE).size(42.0).color(colors::SUCCESS));
        ui.label(RichText::new("Booking Confirmed!").size(20.0).strong());
        ui.add_space(8.0);

        if let Some(settlement) = settlement {
            ui.label(RichText::new(format!("Booking ID: {}", settlement.booking_id)).strong());
            ui.label(format!(
                "{} paid via {}",
                components::money(symbol, u64::from(settlement.amount)),
                settlement.method.label()
            ));
        }

        ui.label(
            RichText::new(format!("A confirmation email is on its way to {}.", draft.contact.email))
                .small()
                .weak(),
        );
        ui.add_space(12.0);

        if ui.button("Done").clicked() {
            *action = Action::Close;
        }
    });
}
