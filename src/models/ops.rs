//! Live-operations records: gate flow, alerts, and revenue breakdowns.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::venue::ZoneStatus;

/// Running totals for one entry gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateActivity {
    pub gate: String,
    pub entries: u32,
    pub exits: u32,
    pub current: u32,
    pub capacity: u32,
}

impl GateActivity {
    pub fn occupancy_fraction(&self) -> f32 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.current as f32 / self.capacity as f32
    }

    pub fn status(&self) -> ZoneStatus {
        ZoneStatus::from_fraction(self.occupancy_fraction())
    }
}

/// Entries and exits within one clock hour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyFlow {
    /// Start of the hour, "HH:MM".
    pub hour: String,
    pub entries: u32,
    pub exits: u32,
}

impl HourlyFlow {
    pub fn net(&self) -> i64 {
        i64::from(self.entries) - i64::from(self.exits)
    }
}

/// One scan at a gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryEvent {
    pub attendee: String,
    pub ticket_id: String,
    pub gate: String,
    /// Wall clock "HH:MM:SS".
    pub time: String,
    pub direction: EntryDirection,
}

/// Scan direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryDirection {
    Entered,
    Exited,
}

impl EntryDirection {
    pub fn label(&self) -> &'static str {
        match self {
            EntryDirection::Entered => "entered",
            EntryDirection::Exited => "exited",
        }
    }
}

/// An operations alert raised by gates or equipment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpsAlert {
    pub message: String,
    /// Freshness note, e.g. "5 minutes ago".
    pub raised: String,
    pub severity: AlertSeverity,
}

/// How loud an alert should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertSeverity {
    Warning,
    Error,
}

/// Revenue contribution of one pass tier or payment method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueSlice {
    pub label: String,
    pub revenue: u64,
    pub percentage: f32,
    pub bookings: u32,
}

/// Takings for one sales day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub revenue: u64,
    pub bookings: u32,
}

/// Share of revenue settled through one payment rail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethodShare {
    pub method: String,
    pub revenue: u64,
    pub percentage: f32,
}

/// A short "today's schedule" line on the overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleNote {
    pub name: String,
    pub time: String,
    pub upcoming: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hourly_net_flow() {
        let flow = HourlyFlow {
            hour: "20:00".to_string(),
            entries: 1234,
            exits: 67,
        };
        assert_eq!(flow.net(), 1167);
    }

    #[test]
    fn test_gate_status_tracks_occupancy() {
        let gate = GateActivity {
            gate: "Main Gate".to_string(),
            entries: 4567,
            exits: 234,
            current: 14_200,
            capacity: 15_000,
        };
        assert_eq!(gate.status(), ZoneStatus::Critical);
    }
}
