//! Performer profiles shown in the lineup carousel.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A headline performer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Celebrity {
    pub id: String,
    pub name: String,
    pub bio: String,
    pub performance_date: NaiveDate,
    /// 24h "HH:MM".
    pub performance_time: String,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub past_performances: Vec<String>,
    pub meet_and_greet: bool,
}
