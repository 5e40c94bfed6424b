//! Venue layout, zone monitoring, and safety records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Static venue facts shown on the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueInfo {
    pub name: String,
    pub address: String,
    pub capacity: u32,
    pub lat: f64,
    pub lng: f64,
    pub entry_points: Vec<String>,
    pub parking_zones: Vec<String>,
}

/// An amenity listed on the venue page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facility {
    pub name: String,
    pub description: String,
    pub available: bool,
}

/// A visitor guideline shown on the venue page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guideline {
    pub title: String,
    pub description: String,
}

/// A monitored zone in venue management.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueZone {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    pub occupancy: u32,
    pub facilities: Vec<String>,
    /// Freshness note, e.g. "2 minutes ago".
    pub updated: String,
}

impl VenueZone {
    pub fn occupancy_fraction(&self) -> f32 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.occupancy as f32 / self.capacity as f32
    }

    pub fn status(&self) -> ZoneStatus {
        ZoneStatus::from_fraction(self.occupancy_fraction())
    }
}

/// Crowding state of a zone or gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneStatus {
    Normal,
    Warning,
    Critical,
}

impl ZoneStatus {
    /// Chip shown next to a zone, derived from how full it is.
    pub fn from_fraction(fraction: f32) -> ZoneStatus {
        if fraction > 0.9 {
            ZoneStatus::Critical
        } else if fraction > 0.75 {
            ZoneStatus::Warning
        } else {
            ZoneStatus::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ZoneStatus::Normal => "normal",
            ZoneStatus::Warning => "warning",
            ZoneStatus::Critical => "critical",
        }
    }
}

/// A piece of venue equipment with a maintenance trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityUnit {
    pub name: String,
    pub status: FacilityStatus,
    /// Freshness note, e.g. "30 minutes ago".
    pub last_check: String,
    pub next_maintenance: NaiveDate,
    pub technician: String,
}

/// Operational state of a facility unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacilityStatus {
    Operational,
    Standby,
    Maintenance,
    Offline,
}

impl FacilityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FacilityStatus::Operational => "operational",
            FacilityStatus::Standby => "standby",
            FacilityStatus::Maintenance => "maintenance",
            FacilityStatus::Offline => "offline",
        }
    }
}

/// On-site escalation contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub role: String,
    pub name: String,
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_status_thresholds() {
        assert_eq!(ZoneStatus::from_fraction(0.5), ZoneStatus::Normal);
        assert_eq!(ZoneStatus::from_fraction(0.76), ZoneStatus::Warning);
        assert_eq!(ZoneStatus::from_fraction(0.95), ZoneStatus::Critical);
    }

    #[test]
    fn test_occupancy_fraction_empty_zone() {
        let zone = VenueZone {
            id: "vip-area".to_string(),
            name: "VIP Lounge".to_string(),
            capacity: 0,
            occupancy: 0,
            facilities: vec![],
            updated: "1 minute ago".to_string(),
        };
        assert_eq!(zone.occupancy_fraction(), 0.0);
        assert_eq!(zone.status(), ZoneStatus::Normal);
    }
}
