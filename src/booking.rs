//! Booking wizard state and the simulated payment processor.
//!
//! The wizard walks Details -> Payment -> Confirmation. Confirmation is
//! only reachable through a settled payment; settlement runs on the
//! tokio runtime and reports back over a channel the UI polls each
//! frame. Dropping the receiver abandons the draft and orphans the
//! in-flight task.

use std::sync::mpsc;
use std::time::Duration;

use rand::{Rng, distributions::Alphanumeric};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::runtime::Runtime;

use crate::config::BookingConfig;
use crate::models::{BookingKind, PassType, PaymentMethod};

/// Pages of the booking wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Details,
    Payment,
    Confirmation,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [WizardStep::Details, WizardStep::Payment, WizardStep::Confirmation];

    pub fn index(&self) -> usize {
        match self {
            WizardStep::Details => 0,
            WizardStep::Payment => 1,
            WizardStep::Confirmation => 2,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Details => "Personal Details",
            WizardStep::Payment => "Payment",
            WizardStep::Confirmation => "Confirmation",
        }
    }
}

/// Attendee gender as captured on the details step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// One attendee row on the details step. Age stays a string while the
/// user is typing; it is validated, not parsed into the model.
#[derive(Debug, Clone)]
pub struct Attendee {
    pub name: String,
    pub age: String,
    pub gender: Gender,
}

impl Attendee {
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            age: String::new(),
            gender: Gender::Male,
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && matches!(self.age.trim().parse::<u32>(), Ok(age) if (1..=100).contains(&age))
    }
}

/// Contact block on the details step.
#[derive(Debug, Clone, Default)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl ContactDetails {
    pub fn is_complete(&self) -> bool {
        self.email.contains('@') && !self.phone.trim().is_empty()
    }
}

/// In-progress booking. Exists only while the modal is open; closing
/// the modal drops it along with any pending settlement.
#[derive(Debug, Clone)]
pub struct BookingDraft {
    pub pass: PassType,
    pub kind: BookingKind,
    /// Day numbers (1-based) for single-day bookings.
    pub selected_days: Vec<u32>,
    pub attendees: Vec<Attendee>,
    pub contact: ContactDetails,
    pub payment_method: PaymentMethod,
    pub step: WizardStep,
}

impl BookingDraft {
    pub fn new(pass: PassType, kind: BookingKind, selected_days: Vec<u32>) -> Self {
        Self {
            pass,
            kind,
            selected_days,
            attendees: vec![Attendee::blank()],
            contact: ContactDetails::default(),
            payment_method: PaymentMethod::Card,
            step: WizardStep::Details,
        }
    }

    /// Add a blank attendee row, capped at what the pass covers.
    pub fn add_attendee(&mut self) {
        if (self.attendees.len() as u32) < self.pass.max_persons {
            self.attendees.push(Attendee::blank());
        }
    }

    /// Remove an attendee row. The first row never goes away.
    pub fn remove_attendee(&mut self, index: usize) {
        if self.attendees.len() > 1 && index < self.attendees.len() {
            self.attendees.remove(index);
        }
    }

    pub fn can_add_attendee(&self) -> bool {
        (self.attendees.len() as u32) < self.pass.max_persons
    }

    /// Amount charged at settlement.
    pub fn total_price(&self) -> u32 {
        match self.kind {
            BookingKind::FullEvent => self.pass.full_event_price,
            BookingKind::SingleDay => self.selected_days.len() as u32 * self.pass.single_day_price,
        }
    }

    fn details_complete(&self) -> bool {
        let days_ok = match self.kind {
            BookingKind::FullEvent => true,
            BookingKind::SingleDay => !self.selected_days.is_empty(),
        };
        days_ok && self.attendees.iter().all(Attendee::is_complete) && self.contact.is_complete()
    }

    /// Whether the current step's gate is satisfied.
    pub fn step_valid(&self) -> bool {
        match self.step {
            WizardStep::Details => self.details_complete(),
            WizardStep::Payment | WizardStep::Confirmation => true,
        }
    }

    /// Advance Details -> Payment. Payment advances only through a
    /// settled payment, and Confirmation is terminal.
    pub fn go_next(&mut self) {
        if self.step == WizardStep::Details && self.step_valid() {
            self.step = WizardStep::Payment;
        }
    }

    /// Step back Payment -> Details.
    pub fn go_back(&mut self) {
        if self.step == WizardStep::Payment {
            self.step = WizardStep::Details;
        }
    }

    /// Jump to the confirmation page once settlement succeeded.
    pub fn confirm(&mut self) {
        self.step = WizardStep::Confirmation;
    }
}

/// What the processor settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub booking_id: String,
    pub amount: u32,
    pub method: PaymentMethod,
}

/// Why the processor refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    #[error("payment declined: {amount} exceeds the {limit} processor limit")]
    Declined { amount: u32, limit: u32 },

    #[error("payment gateway timed out")]
    TimedOut,
}

pub type SettlementOutcome = Result<Settlement, PaymentError>;

/// Fabricate a booking id: prefix plus nine uppercase alphanumerics.
pub fn generate_booking_id(prefix: &str) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(char::from)
        .collect();
    format!("{}-{}", prefix, suffix.to_uppercase())
}

/// Simulated processor: wait out the configured delay, then settle or
/// decline on the amount.
pub async fn settle(config: &BookingConfig, amount: u32) -> Result<String, PaymentError> {
    tokio::time::sleep(Duration::from_millis(config.settle_delay_ms)).await;
    if amount > config.decline_above {
        return Err(PaymentError::Declined {
            amount,
            limit: config.decline_above,
        });
    }
    Ok(generate_booking_id(&config.id_prefix))
}

/// Run one settlement on the runtime and hand back the channel the UI
/// polls. Dropping the receiver cancels interest; the task's send then
/// fails silently and the result is discarded.
pub fn spawn_settlement(
    rt: &Runtime,
    config: &BookingConfig,
    amount: u32,
    method: PaymentMethod,
) -> mpsc::Receiver<SettlementOutcome> {
    let (tx, rx) = mpsc::channel();
    let config = config.clone();
    rt.spawn(async move {
        let outcome = match tokio::time::timeout(Duration::from_secs(config.settle_timeout_secs), settle(&config, amount)).await
        {
            Ok(Ok(booking_id)) => Ok(Settlement {
                booking_id,
                amount,
                method,
            }),
            Ok(Err(e)) => Err(e),
            Err(_) => Err(PaymentError::TimedOut),
        };
        let _ = tx.send(outcome);
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    fn family_pass() -> PassType {
        data::pass_types()
            .into_iter()
            .find(|p| p.id == "family")
            .expect("family pass seeded")
    }

    fn filled_draft() -> BookingDraft {
        let mut draft = BookingDraft::new(family_pass(), BookingKind::FullEvent, vec![]);
        draft.attendees[0].name = "Rajesh Patel".to_string();
        draft.attendees[0].age = "34".to_string();
        draft.contact.email = "rajesh@email.com".to_string();
        draft.contact.phone = "+91 98765 43210".to_string();
        draft
    }

    #[test]
    fn test_details_gate_blocks_blank_draft() {
        let mut draft = BookingDraft::new(family_pass(), BookingKind::FullEvent, vec![]);
        assert!(!draft.step_valid());
        draft.go_next();
        assert_eq!(draft.step, WizardStep::Details);
    }

    #[test]
    fn test_details_gate_rejects_bad_age() {
        let mut draft = filled_draft();
        draft.attendees[0].age = "abc".to_string();
        assert!(!draft.step_valid());
        draft.attendees[0].age = "0".to_string();
        assert!(!draft.step_valid());
        draft.attendees[0].age = "101".to_string();
        assert!(!draft.step_valid());
        draft.attendees[0].age = "34".to_string();
        assert!(draft.step_valid());
    }

    #[test]
    fn test_single_day_requires_picked_days() {
        let mut draft = filled_draft();
        draft.kind = BookingKind::SingleDay;
        draft.selected_days.clear();
        assert!(!draft.step_valid());
        assert_eq!(draft.total_price(), 0);

        draft.selected_days = vec![1, 5];
        assert!(draft.step_valid());
        assert_eq!(draft.total_price(), 2 * 1799);
    }

    #[test]
    fn test_wizard_walks_forward_and_back() {
        let mut draft = filled_draft();
        draft.go_next();
        assert_eq!(draft.step, WizardStep::Payment);
        draft.go_next();
        assert_eq!(draft.step, WizardStep::Payment);
        draft.go_back();
        assert_eq!(draft.step, WizardStep::Details);
        draft.go_back();
        assert_eq!(draft.step, WizardStep::Details);
    }

    #[test]
    fn test_attendee_rows_respect_pass_cap() {
        let mut draft = filled_draft();
        for _ in 0..10 {
            draft.add_attendee();
        }
        assert_eq!(draft.attendees.len(), 4);
        assert!(!draft.can_add_attendee());

        draft.remove_attendee(3);
        draft.remove_attendee(2);
        draft.remove_attendee(1);
        draft.remove_attendee(0);
        assert_eq!(draft.attendees.len(), 1);
    }

    #[test]
    fn test_couple_pass_caps_at_two() {
        let pass = data::pass_types()
            .into_iter()
            .find(|p| p.id == "couple")
            .expect("couple pass seeded");
        let mut draft = BookingDraft::new(pass, BookingKind::FullEvent, vec![]);
        draft.add_attendee();
        assert_eq!(draft.attendees.len(), 2);
        draft.add_attendee();
        assert_eq!(draft.attendees.len(), 2);
    }

    #[test]
    fn test_full_event_price_ignores_day_selection() {
        let mut draft = filled_draft();
        draft.selected_days = vec![1, 2, 3];
        assert_eq!(draft.total_price(), 7999);
    }

    #[test]
    fn test_booking_id_shape() {
        let id = generate_booking_id("GF2024");
        assert!(id.starts_with("GF2024-"));
        let suffix = &id["GF2024-".len()..];
        assert_eq!(suffix.len(), 9);
        assert!(suffix.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn test_settle_succeeds_under_limit() {
        let config = BookingConfig {
            settle_delay_ms: 1,
            ..Default::default()
        };
        let id = settle(&config, 2499).await.unwrap();
        assert!(id.starts_with("GF2024-"));
    }

    #[tokio::test]
    async fn test_settle_declines_over_limit() {
        let config = BookingConfig {
            settle_delay_ms: 1,
            decline_above: 5000,
            ..Default::default()
        };
        let err = settle(&config, 7999).await.unwrap_err();
        assert_eq!(
            err,
            PaymentError::Declined {
                amount: 7999,
                limit: 5000
            }
        );
    }

    #[test]
    fn test_spawn_settlement_delivers_over_channel() {
        let rt = Runtime::new().unwrap();
        let config = BookingConfig {
            settle_delay_ms: 5,
            ..Default::default()
        };
        let rx = spawn_settlement(&rt, &config, 2499, PaymentMethod::Upi);
        let outcome = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        let settlement = outcome.unwrap();
        assert!(settlement.booking_id.starts_with("GF2024-"));
        assert_eq!(settlement.amount, 2499);
        assert_eq!(settlement.method, PaymentMethod::Upi);
    }

    #[test]
    fn test_dropped_receiver_discards_result() {
        let rt = Runtime::new().unwrap();
        let config = BookingConfig {
            settle_delay_ms: 5,
            ..Default::default()
        };
        let rx = spawn_settlement(&rt, &config, 2499, PaymentMethod::Card);
        drop(rx);
        // The task's send fails once the receiver is gone; nothing to
        // observe beyond the runtime not panicking.
        std::thread::sleep(Duration::from_millis(50));
    }
}
