//! Route table of the dashboard.
//!
//! All paths are application-relative and compared verbatim by the
//! route matcher, so no trailing slashes here.

pub const HOME: &str = "/";

pub mod auth {
    pub const SIGN_IN: &str = "/auth/sign-in";
    pub const SIGN_UP: &str = "/auth/sign-up";
    pub const RESET_PASSWORD: &str = "/auth/reset-password";
    pub const HOMEPAGE: &str = "/auth/homepage";
}

pub mod dashboard_customer {
    pub const OVERVIEW: &str = "/dashboard-customer";
    pub const PARENTAL_CONTROL: &str = "/dashboard-customer/parental-control";
    pub const CAR_CUSTOMERS: &str = "/dashboard-customer/car-customers";
    pub const ACCOUNT: &str = "/dashboard-customer/account";
    pub const GEOFENCING: &str = "/dashboard-customer/geofencing";
}

pub mod dashboard_admin {
    pub const OVERVIEW: &str = "/dashboard-admin";
    pub const TRACKING: &str = "/dashboard-admin/tracking";
    pub const GEOFENCING: &str = "/dashboard-admin/geofencing";
    pub const PATTERN_SCORE: &str = "/dashboard-admin/pattern-score";
    pub const CARS: &str = "/dashboard-admin/cars";
    pub const EMPLOYEES: &str = "/dashboard-admin/employees";
    pub const DRIVERS: &str = "/dashboard-admin/drivers";
    pub const ACCOUNT: &str = "/dashboard-admin/account";
    pub const SIMULATION: &str = "/dashboard-admin/simulation";
}

pub mod errors {
    pub const NOT_FOUND: &str = "/errors/not-found";
}

/// Pages reachable without a session.
pub const PUBLIC_PATHS: &[&str] = &[
    auth::SIGN_IN,
    auth::SIGN_UP,
    auth::RESET_PASSWORD,
    auth::HOMEPAGE,
    HOME,
    "",
];

pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
}

/// True for `/`-rooted paths without whitespace.
pub fn is_app_relative(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_paths() {
        assert!(is_public_path(auth::SIGN_IN));
        assert!(is_public_path(""));
        assert!(is_public_path("/"));
        assert!(!is_public_path(dashboard_admin::OVERVIEW));
        assert!(!is_public_path("/auth/sign-in/"));
    }

    #[test]
    fn test_app_relative() {
        assert!(is_app_relative(dashboard_admin::DRIVERS));
        assert!(is_app_relative(errors::NOT_FOUND));
        assert!(!is_app_relative("dashboard-admin"));
        assert!(!is_app_relative("https://example.com/"));
        assert!(!is_app_relative("//cdn.example.com/x"));
        assert!(!is_app_relative("/dashboard-admin/drivers "));
    }
}
