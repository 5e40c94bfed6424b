//! Pass catalog and payment options offered on the site.

use serde::{Deserialize, Serialize};

/// A purchasable pass tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassType {
    pub id: String,
    pub name: String,
    pub description: String,
    /// How many attendees one pass covers.
    pub max_persons: u32,
    pub full_event_price: u32,
    pub single_day_price: u32,
    pub features: Vec<String>,
}

impl PassType {
    /// What a full-event pass saves over buying every day separately.
    pub fn full_event_savings(&self, festival_days: u32) -> i64 {
        i64::from(festival_days) * i64::from(self.single_day_price) - i64::from(self.full_event_price)
    }
}

/// Whether a booking covers the whole run or picked days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingKind {
    FullEvent,
    SingleDay,
}

impl BookingKind {
    pub fn label(&self) -> &'static str {
        match self {
            BookingKind::FullEvent => "Full Event",
            BookingKind::SingleDay => "Single Day",
        }
    }
}

/// Payment options shown on the payment step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Card,
    Upi,
    NetBanking,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [PaymentMethod::Card, PaymentMethod::Upi, PaymentMethod::NetBanking];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit/Debit Card",
            PaymentMethod::Upi => "UPI Payment",
            PaymentMethod::NetBanking => "Net Banking",
        }
    }

    /// Subtitle shown under the option.
    pub fn note(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Visa, Mastercard, RuPay accepted",
            PaymentMethod::Upi => "Pay using any UPI app",
            PaymentMethod::NetBanking => "All major banks supported",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_event_savings() {
        let pass = PassType {
            id: "couple".to_string(),
            name: "Couple Pass".to_string(),
            description: "2 persons entry".to_string(),
            max_persons: 2,
            full_event_price: 4299,
            single_day_price: 999,
            features: vec![],
        };
        assert_eq!(pass.full_event_savings(5), 5 * 999 - 4299);
    }
}
