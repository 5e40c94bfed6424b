//! GUI panels and application state.

pub mod app;
pub mod attendance_panel;
pub mod booking_modal;
pub mod components;
pub mod dashboard;
pub mod events_panel;
pub mod home_panel;
pub mod lineup_panel;
pub mod passes_panel;
pub mod reports_panel;
pub mod revenue_panel;
pub mod schedule_panel;
pub mod settings_panel;
pub mod tickets_panel;
pub mod users_panel;
pub mod venue_ops_panel;
pub mod venue_panel;

pub use app::App;
