//! Payment gateways and external hookups listed on the settings page.

use serde::{Deserialize, Serialize};

/// Whether a hookup is live or switched off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntegrationStatus {
    Active,
    Inactive,
}

impl IntegrationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            IntegrationStatus::Active => "active",
            IntegrationStatus::Inactive => "inactive",
        }
    }
}

/// A payment processor bookings could route through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentGateway {
    pub name: String,
    pub status: IntegrationStatus,
    /// Transaction fee, displayed as given ("2.5%").
    pub fee_label: String,
    pub methods: Vec<String>,
}

/// An external service wired into the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiIntegration {
    pub name: String,
    pub provider: String,
    pub status: IntegrationStatus,
    pub last_used: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(IntegrationStatus::Active.label(), "active");
        assert_eq!(IntegrationStatus::Inactive.label(), "inactive");
    }
}
