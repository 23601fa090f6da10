//! Role-to-navigation mapping for the sidebar.

use contracts::system::roles::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub path: &'static str,
}

const fn item(label: &'static str, icon: &'static str, path: &'static str) -> NavItem {
    NavItem { label, icon, path }
}

const SALES_NAV: &[NavItem] = &[
    item("Dashboard", "layout-dashboard", "/sales/dashboard"),
    item("Tickets", "ticket", "/ticketspage"),
    item("Inventory", "inventory", "/inventory"),
];

const PURCHASE_NAV: &[NavItem] = &[
    item("Dashboard", "layout-dashboard", "/purchase/dashboard"),
    item("Suppliers", "suppliers", "/purchase/suppliers"),
    item("Add Supplier", "plus", "/purchase/suppliers/new"),
    item("Inventory", "inventory", "/inventory"),
];

const ADMIN_NAV: &[NavItem] = &[
    item("Dashboard", "layout-dashboard", "/admin/dashboard"),
    item("Users", "users", "/admin/users"),
    item("Tickets", "ticket", "/admin/tickets"),
    item("Inventory", "inventory", "/inventory"),
];

/// Sidebar entries for a role. No role, no entries.
pub fn nav_items_for(role: Option<Role>) -> Vec<NavItem> {
    match role {
        Some(Role::Sales) => SALES_NAV.to_vec(),
        Some(Role::Purchase) => PURCHASE_NAV.to_vec(),
        Some(Role::Admin) => ADMIN_NAV.to_vec(),
        None => Vec::new(),
    }
}

pub fn is_active(item: &NavItem, pathname: &str) -> bool {
    let pathname = pathname.trim_end_matches('/');
    item.path == pathname
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_role_means_no_navigation() {
        assert!(nav_items_for(None).is_empty());
        assert!(nav_items_for(Role::parse("manager")).is_empty());
        assert!(nav_items_for(Role::parse("")).is_empty());
    }

    #[test]
    fn each_role_has_its_own_menu() {
        let labels = |r| nav_items_for(Some(r)).iter().map(|i| i.label).collect::<Vec<_>>();
        assert_eq!(labels(Role::Sales), ["Dashboard", "Tickets", "Inventory"]);
        assert_eq!(labels(Role::Purchase), ["Dashboard", "Suppliers", "Add Supplier", "Inventory"]);
        assert_eq!(labels(Role::Admin), ["Dashboard", "Users", "Tickets", "Inventory"]);
        assert_eq!(nav_items_for(Some(Role::Sales)), nav_items_for(Some(Role::Sales)));
    }

    #[test]
    fn dashboard_entry_is_the_role_home() {
        for role in Role::ALL {
            assert_eq!(nav_items_for(Some(role))[0].path, role.home_path());
        }
    }

    #[test]
    fn active_entry_matches_pathname_exactly() {
        let items = nav_items_for(Some(Role::Purchase));
        let active: Vec<_> = items
            .iter()
            .filter(|i| is_active(i, "/purchase/suppliers"))
            .map(|i| i.label)
            .collect();
        assert_eq!(active, ["Suppliers"]);
        assert!(is_active(&items[0], "/purchase/dashboard/"));
        assert!(!items.iter().any(|i| is_active(i, "/tickets/7")));
    }
}
