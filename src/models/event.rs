//! Festival days, workshops, competitions, and the run-of-show records
//! used by event management.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One night of the festival as promoted on the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FestivalDay {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    /// 24h "HH:MM".
    pub time: String,
    pub description: String,
    pub theme: String,
    /// Ids into the celebrity roster.
    pub celebrity_ids: Vec<String>,
    pub workshops: Vec<Workshop>,
    pub competitions: Vec<Competition>,
}

/// A dance workshop slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workshop {
    pub id: String,
    pub title: String,
    pub instructor: String,
    pub time: String,
    pub duration: String,
    pub level: SkillLevel,
}

/// A judged competition slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competition {
    pub id: String,
    pub title: String,
    pub time: String,
    pub category: String,
    pub prizes: Vec<String>,
}

/// Workshop difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn label(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }
}

/// One run-of-show entry in the event management timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub time: String,
    pub duration_min: u32,
    pub title: String,
    pub kind: ScheduleKind,
    pub expected_attendees: u32,
    pub venue_area: String,
    /// Instructor or performer attached to the slot, if any.
    pub host: Option<String>,
}

/// What kind of slot a run-of-show entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleKind {
    Logistics,
    Workshop,
    Ceremony,
    Performance,
    Community,
    Competition,
}

impl ScheduleKind {
    pub fn label(&self) -> &'static str {
        match self {
            ScheduleKind::Logistics => "logistics",
            ScheduleKind::Workshop => "workshop",
            ScheduleKind::Ceremony => "ceremony",
            ScheduleKind::Performance => "performance",
            ScheduleKind::Community => "community",
            ScheduleKind::Competition => "competition",
        }
    }
}

/// A performer engagement tracked by event management.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CelebrityBooking {
    pub name: String,
    pub performance_date: NaiveDate,
    pub performance_time: String,
    pub status: LineupStatus,
    pub fee: u32,
    pub requirements: Vec<String>,
    pub contact: String,
}

/// Confirmation state of a performer engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineupStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl LineupStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LineupStatus::Confirmed => "confirmed",
            LineupStatus::Pending => "pending",
            LineupStatus::Cancelled => "cancelled",
        }
    }
}
