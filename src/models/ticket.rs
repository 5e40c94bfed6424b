//! Booking rows for the ticket management table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One booking as listed in ticket management.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketRecord {
    pub id: String,
    pub booking_id: String,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub pass_type: String,
    pub quantity: u32,
    pub total_amount: u32,
    pub booking_date: NaiveDate,
    pub status: TicketStatus,
    pub payment_status: PaymentStatus,
    pub entry_status: EntryStatus,
    pub qr_code: String,
}

/// Booking lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatus {
    Confirmed,
    Pending,
    Cancelled,
    Refunded,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 4] = [
        TicketStatus::Confirmed,
        TicketStatus::Pending,
        TicketStatus::Cancelled,
        TicketStatus::Refunded,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Confirmed => "confirmed",
            TicketStatus::Pending => "pending",
            TicketStatus::Cancelled => "cancelled",
            TicketStatus::Refunded => "refunded",
        }
    }
}

/// Settlement state of the booking's payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Completed,
    Pending,
    Failed,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Completed => "completed",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Failed => "failed",
        }
    }
}

/// Whether the ticket holder has passed a gate yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryStatus {
    NotEntered,
    Entered,
    Exited,
}

impl EntryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EntryStatus::NotEntered => "not entered",
            EntryStatus::Entered => "entered",
            EntryStatus::Exited => "exited",
        }
    }
}
