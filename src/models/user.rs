//! Account rows for user management.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::roles::Role;

/// One account as listed in user management.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub status: AccountStatus,
    pub registered: NaiveDate,
    pub last_login: NaiveDateTime,
    pub total_bookings: u32,
    pub total_spent: u32,
}

impl UserAccount {
    /// Initials for the avatar badge.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

/// Account standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    Active,
    Inactive,
    Banned,
}

impl AccountStatus {
    pub const ALL: [AccountStatus; 3] = [AccountStatus::Active, AccountStatus::Inactive, AccountStatus::Banned];

    pub fn label(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Inactive => "inactive",
            AccountStatus::Banned => "banned",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        let account = UserAccount {
            id: "1".to_string(),
            name: "Rajesh Patel".to_string(),
            email: "rajesh@email.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            role: Role::Customer,
            status: AccountStatus::Active,
            registered: NaiveDate::from_ymd_opt(2024, 9, 15).unwrap(),
            last_login: NaiveDate::from_ymd_opt(2024, 10, 14).unwrap().and_hms_opt(18, 30, 0).unwrap(),
            total_bookings: 3,
            total_spent: 12500,
        };
        assert_eq!(account.initials(), "RP");
    }
}
