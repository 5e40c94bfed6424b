//! Role-based access control for the admin dashboard.

use serde::{Deserialize, Serialize};

/// Account role. Only the four staff roles can open the admin view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    SuperAdmin,
    Admin,
    Manager,
    Staff,
    Customer,
}

/// Sections of the admin sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminSection {
    Overview,
    Tickets,
    Attendance,
    Revenue,
    Users,
    Events,
    Venue,
    Reports,
    Settings,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::SuperAdmin, Role::Admin, Role::Manager, Role::Staff, Role::Customer];

    /// All roles selectable in the role switcher.
    pub const ADMIN_ROLES: [Role; 4] = [Role::SuperAdmin, Role::Admin, Role::Manager, Role::Staff];

    /// Parse a kebab-case role name.
    pub fn parse(s: &str) -> Option<Role> {
        match s.trim().to_lowercase().as_str() {
            "super-admin" | "superadmin" => Some(Role::SuperAdmin),
            "admin" => Some(Role::Admin),
            "manager" => Some(Role::Manager),
            "staff" => Some(Role::Staff),
            "customer" => Some(Role::Customer),
            _ => None,
        }
    }

    /// Kebab-case name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super-admin",
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Staff => "staff",
            Role::Customer => "customer",
        }
    }

    /// Display label for tables and the role switcher.
    pub fn label(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Staff => "Staff",
            Role::Customer => "Customer",
        }
    }

    /// Whether this role can open the admin dashboard at all.
    pub fn has_admin_access(&self) -> bool {
        !matches!(self, Role::Customer)
    }

    /// Whether this role sees the given sidebar section.
    pub fn can_view(&self, section: AdminSection) -> bool {
        match section {
            AdminSection::Overview | AdminSection::Attendance => self.has_admin_access(),
            AdminSection::Tickets | AdminSection::Revenue | AdminSection::Venue | AdminSection::Reports => {
                matches!(self, Role::SuperAdmin | Role::Admin | Role::Manager)
            }
            AdminSection::Users | AdminSection::Events | AdminSection::Settings => {
                matches!(self, Role::SuperAdmin | Role::Admin)
            }
        }
    }

    /// Sidebar sections visible to this role, in sidebar order.
    pub fn visible_sections(&self) -> Vec<AdminSection> {
        AdminSection::ALL
            .iter()
            .copied()
            .filter(|section| self.can_view(*section))
            .collect()
    }

    /// Destructive row actions (delete user, delete event).
    pub fn can_delete(&self) -> bool {
        matches!(self, Role::SuperAdmin)
    }
}

impl AdminSection {
    /// Sidebar order.
    pub const ALL: [AdminSection; 9] = [
        AdminSection::Overview,
        AdminSection::Tickets,
        AdminSection::Attendance,
        AdminSection::Revenue,
        AdminSection::Users,
        AdminSection::Events,
        AdminSection::Venue,
        AdminSection::Reports,
        AdminSection::Settings,
    ];

    /// Sidebar label.
    pub fn label(&self) -> &'static str {
        match self {
            AdminSection::Overview => "Overview",
            AdminSection::Tickets => "Tickets",
            AdminSection::Attendance => "Attendance",
            AdminSection::Revenue => "Revenue",
            AdminSection::Users => "Users",
            AdminSection::Events => "Events",
            AdminSection::Venue => "Venue",
            AdminSection::Reports => "Reports",
            AdminSection::Settings => "Settings",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roles() {
        assert_eq!(Role::parse("super-admin"), Some(Role::SuperAdmin));
        assert_eq!(Role::parse("SuperAdmin"), Some(Role::SuperAdmin));
        assert_eq!(Role::parse(" manager "), Some(Role::Manager));
        assert_eq!(Role::parse("customer"), Some(Role::Customer));
        assert_eq!(Role::parse("overlord"), None);
    }

    #[test]
    fn test_customer_has_no_admin_access() {
        assert!(!Role::Customer.has_admin_access());
        assert!(Role::Customer.visible_sections().is_empty());
        for role in Role::ADMIN_ROLES {
            assert!(role.has_admin_access());
        }
    }

    #[test]
    fn test_super_admin_sees_everything() {
        assert_eq!(Role::SuperAdmin.visible_sections().len(), AdminSection::ALL.len());
    }

    #[test]
    fn test_admin_sees_everything() {
        assert_eq!(Role::Admin.visible_sections().len(), AdminSection::ALL.len());
    }

    #[test]
    fn test_manager_sections() {
        let sections = Role::Manager.visible_sections();
        assert!(sections.contains(&AdminSection::Overview));
        assert!(sections.contains(&AdminSection::Tickets));
        assert!(sections.contains(&AdminSection::Attendance));
        assert!(sections.contains(&AdminSection::Revenue));
        assert!(sections.contains(&AdminSection::Venue));
        assert!(sections.contains(&AdminSection::Reports));
        assert!(!sections.contains(&AdminSection::Users));
        assert!(!sections.contains(&AdminSection::Events));
        assert!(!sections.contains(&AdminSection::Settings));
    }

    #[test]
    fn test_staff_sections() {
        let sections = Role::Staff.visible_sections();
        assert_eq!(sections, vec![AdminSection::Overview, AdminSection::Attendance]);
    }

    #[test]
    fn test_only_super_admin_deletes() {
        assert!(Role::SuperAdmin.can_delete());
        assert!(!Role::Admin.can_delete());
        assert!(!Role::Manager.can_delete());
        assert!(!Role::Staff.can_delete());
    }

    #[test]
    fn test_sections_follow_sidebar_order() {
        let sections = Role::Manager.visible_sections();
        let positions: Vec<usize> = sections
            .iter()
            .map(|s| AdminSection::ALL.iter().position(|a| a == s).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
