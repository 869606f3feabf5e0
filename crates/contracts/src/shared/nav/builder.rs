//! Role-aware construction of the dashboard menus.
//!
//! Every call builds a fresh list; nothing is cached or mutated later.

use super::NavEntry;
use crate::enums::{Dashboard, NavIcon, UserRole};
use crate::shared::paths::{dashboard_admin, dashboard_customer, errors};

/// Position of the role-gated entry: after Tracking, before Drivers.
const GATED_INDEX: usize = 2;

fn admin_base_items() -> Vec<NavEntry> {
    vec![
        NavEntry::new("overview", "Overview")
            .with_href(dashboard_admin::OVERVIEW)
            .with_icon(NavIcon::ChartPie),
        NavEntry::new("tracking", "Tracking")
            .with_href(dashboard_admin::TRACKING)
            .with_icon(NavIcon::Map),
        NavEntry::new("drivers", "Drivers")
            .with_href(dashboard_admin::DRIVERS)
            .with_icon(NavIcon::Driver),
        NavEntry::new("cars", "Cars")
            .with_href(dashboard_admin::CARS)
            .with_icon(NavIcon::Car),
        NavEntry::new("geofencing", "Geofencing")
            .with_href(dashboard_admin::GEOFENCING)
            .with_icon(NavIcon::DrawPolygon),
        NavEntry::new("patternScore", "Pattern Score")
            .with_href(dashboard_admin::PATTERN_SCORE)
            .with_icon(NavIcon::Shield),
        NavEntry::new("simulation", "Simulation")
            .with_href(dashboard_admin::SIMULATION)
            .with_icon(NavIcon::ChartLine),
        NavEntry::new("account", "Account")
            .with_href(dashboard_admin::ACCOUNT)
            .with_icon(NavIcon::User),
        NavEntry::new("error", "Error")
            .with_href(errors::NOT_FOUND)
            .with_icon(NavIcon::XSquare),
    ]
}

fn employees_item() -> NavEntry {
    NavEntry::new("employees", "Employees")
        .with_href(dashboard_admin::EMPLOYEES)
        .with_icon(NavIcon::Users)
}

/// Inserts `gated` after the second base entry when `role` is privileged.
///
/// Any token other than the exact privileged marker, absent included,
/// yields `base` unchanged. Short lists get the entry appended.
pub fn insert_role_gated(mut base: Vec<NavEntry>, gated: NavEntry, role: Option<&str>) -> Vec<NavEntry> {
    let privileged = role
        .and_then(UserRole::parse)
        .map(|r| r.is_privileged())
        .unwrap_or(false);
    if privileged {
        let index = GATED_INDEX.min(base.len());
        base.insert(index, gated);
    }
    base
}

/// Admin dashboard menu for the given role token.
pub fn build_nav_items(role: Option<&str>) -> Vec<NavEntry> {
    insert_role_gated(admin_base_items(), employees_item(), role)
}

/// Customer dashboard menu; identical for every role.
pub fn customer_nav_items() -> Vec<NavEntry> {
    vec![
        NavEntry::new("overview", "Overview")
            .with_href(dashboard_customer::OVERVIEW)
            .with_icon(NavIcon::ChartPie),
        NavEntry::new("parentalControl", "Parental Control")
            .with_href(dashboard_customer::PARENTAL_CONTROL)
            .with_icon(NavIcon::Shield),
        NavEntry::new("geofencing", "Geofencing")
            .with_href(dashboard_customer::GEOFENCING)
            .with_icon(NavIcon::DrawPolygon),
        NavEntry::new("carCustomers", "Cars")
            .with_href(dashboard_customer::CAR_CUSTOMERS)
            .with_icon(NavIcon::Car),
        NavEntry::new("account", "Account")
            .with_href(dashboard_customer::ACCOUNT)
            .with_icon(NavIcon::User),
    ]
}

pub fn nav_items_for(dashboard: Dashboard, role: Option<&str>) -> Vec<NavEntry> {
    match dashboard {
        Dashboard::Admin => build_nav_items(role),
        Dashboard::Customer => customer_nav_items(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::nav::validate_entries;

    fn keys(items: &[NavEntry]) -> Vec<&str> {
        items.iter().map(|i| i.key.as_str()).collect()
    }

    fn short_base() -> Vec<NavEntry> {
        vec![
            NavEntry::new("overview", "Overview"),
            NavEntry::new("tracking", "Tracking"),
            NavEntry::new("drivers", "Drivers"),
            NavEntry::new("cars", "Cars"),
        ]
    }

    #[test]
    fn test_admin_gets_employees_after_tracking() {
        let items = insert_role_gated(short_base(), NavEntry::new("employees", "Employees"), Some("admin"));
        assert_eq!(keys(&items), vec!["overview", "tracking", "employees", "drivers", "cars"]);
    }

    #[test]
    fn test_customer_gets_base_unchanged() {
        let items = insert_role_gated(short_base(), NavEntry::new("employees", "Employees"), Some("customer"));
        assert_eq!(keys(&items), vec!["overview", "tracking", "drivers", "cars"]);
    }

    #[test]
    fn test_non_privileged_tokens_return_base() {
        let base = build_nav_items(None);
        for token in [None, Some("customer"), Some("employee"), Some(""), Some("root"), Some("ADMIN"), Some("admin ")] {
            assert_eq!(build_nav_items(token), base, "token {token:?}");
        }
        assert_eq!(keys(&base), keys(&admin_base_items()));
    }

    #[test]
    fn test_privileged_inserts_exactly_one_entry() {
        let base = build_nav_items(None);
        let admin = build_nav_items(Some("admin"));
        assert_eq!(admin.len(), base.len() + 1);
        assert_eq!(admin[2].key, "employees");

        let without: Vec<&NavEntry> = admin.iter().filter(|e| e.key != "employees").collect();
        assert_eq!(without.len(), base.len());
        for (a, b) in without.iter().zip(base.iter()) {
            assert_eq!(*a, b);
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(build_nav_items(Some("admin")), build_nav_items(Some("admin")));
        assert_eq!(build_nav_items(None), build_nav_items(None));
    }

    #[test]
    fn test_short_base_appends_gated_entry() {
        let base = vec![NavEntry::new("overview", "Overview")];
        let items = insert_role_gated(base, NavEntry::new("employees", "Employees"), Some("admin"));
        assert_eq!(keys(&items), vec!["overview", "employees"]);
    }

    #[test]
    fn test_built_in_menus_are_valid() {
        assert!(validate_entries(&build_nav_items(Some("admin"))).is_ok());
        assert!(validate_entries(&build_nav_items(None)).is_ok());
        assert!(validate_entries(&customer_nav_items()).is_ok());
    }

    #[test]
    fn test_nav_items_for_dashboard() {
        let customer = nav_items_for(Dashboard::Customer, Some("admin"));
        assert_eq!(keys(&customer), vec!["overview", "parentalControl", "geofencing", "carCustomers", "account"]);
        let admin = nav_items_for(Dashboard::Admin, Some("employee"));
        assert!(admin.iter().all(|e| e.key != "employees"));
    }
}
