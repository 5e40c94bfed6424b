//! Filtering and row selection for the admin tables.
//!
//! Filters compose with AND: a row must match the search box and every
//! dropdown that is not on "All". Selection is a plain id set so rows
//! hidden by the current filter keep their checkmarks.

use std::collections::HashSet;

use crate::models::{AccountStatus, TicketRecord, TicketStatus, UserAccount};
use crate::roles::Role;

/// Case-insensitive substring match over several fields. An empty
/// search matches everything.
pub fn matches_search(fields: &[&str], search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields.iter().any(|field| field.to_lowercase().contains(&needle))
}

/// Filter state for the ticket table.
#[derive(Debug, Clone, Default)]
pub struct TicketFilter {
    pub search: String,
    /// `None` is the "All Status" choice.
    pub status: Option<TicketStatus>,
}

impl TicketFilter {
    pub fn matches(&self, ticket: &TicketRecord) -> bool {
        let search_ok = matches_search(
            &[&ticket.customer_name, &ticket.booking_id, &ticket.email],
            &self.search,
        );
        let status_ok = self.status.is_none_or(|status| ticket.status == status);
        search_ok && status_ok
    }
}

/// Filter state for the user table.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub search: String,
    /// `None` is the "All Roles" choice.
    pub role: Option<Role>,
    /// `None` is the "All Status" choice.
    pub status: Option<AccountStatus>,
}

impl UserFilter {
    pub fn matches(&self, user: &UserAccount) -> bool {
        let search_ok = matches_search(&[&user.name, &user.email, &user.phone], &self.search);
        let role_ok = self.role.is_none_or(|role| user.role == role);
        let status_ok = self.status.is_none_or(|status| user.status == status);
        search_ok && role_ok && status_ok
    }
}

/// Checked rows of one table, tracked by row id.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    ids: HashSet<String>,
}

impl Selection {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Header checkbox state: every currently visible row is checked.
    pub fn all_selected(&self, visible_ids: &[String]) -> bool {
        !visible_ids.is_empty() && visible_ids.iter().all(|id| self.ids.contains(id))
    }

    /// Header checkbox action, scoped to the visible rows. If they are
    /// all checked, uncheck exactly them; otherwise check them all.
    /// Rows outside the filter are left as they were.
    pub fn toggle_all(&mut self, visible_ids: &[String]) {
        if self.all_selected(visible_ids) {
            for id in visible_ids {
                self.ids.remove(id);
            }
        } else {
            for id in visible_ids {
                self.ids.insert(id.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn test_search_is_case_insensitive_substring() {
        assert!(matches_search(&["Rajesh Patel"], "RAJ"));
        assert!(matches_search(&["Rajesh Patel", "rajesh@email.com"], "email.com"));
        assert!(!matches_search(&["Rajesh Patel"], "priya"));
        assert!(matches_search(&["Rajesh Patel"], "  "));
    }

    #[test]
    fn test_ticket_filter_composes_with_and() {
        let tickets = data::ticket_records();

        let mut filter = TicketFilter::default();
        assert_eq!(tickets.iter().filter(|t| filter.matches(t)).count(), tickets.len());

        filter.status = Some(TicketStatus::Confirmed);
        assert_eq!(tickets.iter().filter(|t| filter.matches(t)).count(), 3);

        filter.search = "sneha".to_string();
        let hits: Vec<_> = tickets.iter().filter(|t| filter.matches(t)).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].booking_id, "GF2024-JKL012");

        filter.status = Some(TicketStatus::Pending);
        assert_eq!(tickets.iter().filter(|t| filter.matches(t)).count(), 0);
    }

    #[test]
    fn test_ticket_search_matches_seeded_priya() {
        let tickets = data::ticket_records();
        let filter = TicketFilter {
            search: "priya".to_string(),
            ..Default::default()
        };
        let hits: Vec<_> = tickets.iter().filter(|t| filter.matches(t)).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].customer_name, "Priya Sharma");
    }

    #[test]
    fn test_user_filter_matches_seeded_priya() {
        let users = data::user_accounts();
        let filter = UserFilter {
            search: "priya".to_string(),
            ..Default::default()
        };
        let hits: Vec<_> = users.iter().filter(|u| filter.matches(u)).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Priya Sharma");
    }

    #[test]
    fn test_user_filter_role_and_status() {
        let users = data::user_accounts();

        let customers = UserFilter {
            role: Some(Role::Customer),
            ..Default::default()
        };
        assert_eq!(users.iter().filter(|u| customers.matches(u)).count(), 3);

        let banned_customers = UserFilter {
            role: Some(Role::Customer),
            status: Some(AccountStatus::Banned),
            ..Default::default()
        };
        let hits: Vec<_> = users.iter().filter(|u| banned_customers.matches(u)).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Rohit Singh");
    }

    #[test]
    fn test_phone_fragment_finds_user() {
        let users = data::user_accounts();
        let filter = UserFilter {
            search: "43215".to_string(),
            ..Default::default()
        };
        let hits: Vec<_> = users.iter().filter(|u| filter.matches(u)).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Meera Desai");
    }

    #[test]
    fn test_selection_toggle_and_clear() {
        let mut selection = Selection::default();
        selection.toggle("1");
        selection.toggle("2");
        assert_eq!(selection.len(), 2);
        selection.toggle("1");
        assert!(!selection.contains("1"));
        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_all_is_scoped_to_visible_rows() {
        let mut selection = Selection::default();
        for id in ["1", "2", "3"] {
            selection.toggle(id);
        }

        // Filter narrowed to one visible row while all three are checked.
        let visible = vec!["2".to_string()];
        assert!(selection.all_selected(&visible));
        selection.toggle_all(&visible);
        assert!(!selection.contains("2"));
        assert!(selection.contains("1"));
        assert!(selection.contains("3"));

        selection.toggle_all(&visible);
        assert!(selection.contains("2"));
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn test_toggle_all_on_empty_filter_is_noop() {
        let mut selection = Selection::default();
        selection.toggle("1");
        let visible: Vec<String> = vec![];
        assert!(!selection.all_selected(&visible));
        selection.toggle_all(&visible);
        assert_eq!(selection.len(), 1);
    }
}
