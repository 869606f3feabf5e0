use serde::{Deserialize, Serialize};

/// Role granted by the auth service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Customer,
    Employee,
}

impl UserRole {
    /// Token stored in the session and sent by the auth service
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Customer => "customer",
            UserRole::Employee => "employee",
        }
    }

    /// Strict parse: only the exact lowercase tokens are recognized.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "admin" => Some(UserRole::Admin),
            "customer" => Some(UserRole::Customer),
            "employee" => Some(UserRole::Employee),
            _ => None,
        }
    }

    pub fn all() -> Vec<UserRole> {
        vec![UserRole::Admin, UserRole::Customer, UserRole::Employee]
    }

    /// Only admins see role-gated navigation entries.
    pub fn is_privileged(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Dashboard the role lands on after sign-in
    pub fn dashboard(&self) -> Dashboard {
        match self {
            UserRole::Admin | UserRole::Employee => Dashboard::Admin,
            UserRole::Customer => Dashboard::Customer,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Area of the app with its own navigation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dashboard {
    Admin,
    Customer,
}

impl Dashboard {
    pub fn home_path(&self) -> &'static str {
        match self {
            Dashboard::Admin => crate::shared::paths::dashboard_admin::OVERVIEW,
            Dashboard::Customer => crate::shared::paths::dashboard_customer::OVERVIEW,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Dashboard::Admin => "Fleet administration",
            Dashboard::Customer => "My vehicles",
        }
    }
}

/// Account type picked on the sign-in form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Customer,
    Company,
    Admin,
    Employee,
}

impl AccountType {
    pub fn code(&self) -> &'static str {
        match self {
            AccountType::Customer => "customer",
            AccountType::Company => "company",
            AccountType::Admin => "admin",
            AccountType::Employee => "employee",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AccountType::Customer => "Customer",
            AccountType::Company => "Company",
            AccountType::Admin => "Administrator",
            AccountType::Employee => "Employee",
        }
    }

    /// Login endpoint relative to the auth service base URL
    pub fn login_endpoint(&self) -> &'static str {
        match self {
            AccountType::Customer => "customer_login/",
            AccountType::Company => "company_login/",
            AccountType::Admin => "admin_login/",
            AccountType::Employee => "employee_login/",
        }
    }

    /// Account types offered on the sign-in form
    pub fn selectable() -> Vec<AccountType> {
        vec![AccountType::Customer, AccountType::Company]
    }
}
