//! Data models for the promo site and the admin dashboard.

pub mod celebrity;
pub mod event;
pub mod integration;
pub mod ops;
pub mod pass;
pub mod ticket;
pub mod user;
pub mod venue;

pub use celebrity::Celebrity;
pub use event::{CelebrityBooking, Competition, FestivalDay, LineupStatus, ScheduleItem, ScheduleKind, SkillLevel, Workshop};
pub use integration::{ApiIntegration, IntegrationStatus, PaymentGateway};
pub use ops::{
    AlertSeverity, DailyRevenue, EntryDirection, EntryEvent, GateActivity, HourlyFlow, OpsAlert, PaymentMethodShare,
    RevenueSlice, ScheduleNote,
};
pub use pass::{BookingKind, PassType, PaymentMethod};
pub use ticket::{EntryStatus, PaymentStatus, TicketRecord, TicketStatus};
pub use user::{AccountStatus, UserAccount};
pub use venue::{EmergencyContact, Facility, FacilityStatus, FacilityUnit, Guideline, VenueInfo, VenueZone, ZoneStatus};
