use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::{AccountType, UserRole};

/// Credentials posted to the `*_login/` endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Password")]
    pub password: String,
}

/// Identifier the auth service sends either as a number or as a string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for IdValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdValue::Number(n) => write!(f, "{}", n),
            IdValue::Text(s) => f.write_str(s),
        }
    }
}

/// `Admin` comes back as a JSON bool from some endpoints and as "true"/"false" from others
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdminFlag {
    Bool(bool),
    Text(String),
}

impl AdminFlag {
    pub fn is_set(&self) -> bool {
        match self {
            AdminFlag::Bool(b) => *b,
            AdminFlag::Text(s) => s.eq_ignore_ascii_case("true"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignInResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(rename = "userType", default)]
    pub user_type: Option<String>,
    #[serde(rename = "userId", default)]
    pub user_id: Option<IdValue>,
    #[serde(default)]
    pub id: Option<IdValue>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(rename = "Admin", default)]
    pub admin: Option<AdminFlag>,
    #[serde(rename = "Company_name", default)]
    pub company_name: Option<String>,
    #[serde(rename = "Name", default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub company_id: Option<IdValue>,
    #[serde(default)]
    pub error: Option<String>,
}

impl SignInResponse {
    fn has_admin_signal(&self) -> bool {
        self.role.as_deref() == Some("admin")
            || self.user_type.as_deref() == Some("admin")
            || self.admin.as_ref().map(AdminFlag::is_set).unwrap_or(false)
    }

    /// `id` wins over `userId`
    pub fn resolved_user_id(&self) -> Option<String> {
        self.id
            .as_ref()
            .or(self.user_id.as_ref())
            .map(|id| id.to_string())
    }

    pub fn display_name(&self) -> Option<String> {
        self.name
            .clone()
            .or_else(|| self.customer_name.clone())
            .or_else(|| self.company_name.clone())
    }
}

/// Role granted by a successful sign-in.
///
/// Any admin signal in the response wins. Company accounts without one
/// land on the admin dashboard as employees; other roles must parse.
pub fn resolve_role(account_type: AccountType, response: &SignInResponse) -> Option<UserRole> {
    if response.has_admin_signal() || account_type == AccountType::Admin {
        return Some(UserRole::Admin);
    }

    let token = response.role.as_deref().unwrap_or(account_type.code());
    match UserRole::parse(token) {
        Some(role) => Some(role),
        None if token == AccountType::Company.code() => Some(UserRole::Employee),
        None => None,
    }
}

/// Authenticated session, passed explicitly to whoever needs it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Option<String>,
    pub role: Option<UserRole>,
    pub token: Option<String>,
    pub display_name: Option<String>,
}

impl Session {
    pub fn from_sign_in(account_type: AccountType, response: &SignInResponse) -> Self {
        Self {
            user_id: response.resolved_user_id(),
            role: resolve_role(account_type, response),
            token: response.token.clone(),
            display_name: response.display_name(),
        }
    }

    /// Role token as consumed by the navigation builder
    pub fn role_token(&self) -> Option<&'static str> {
        self.role.map(|r| r.as_str())
    }

    /// A session needs both a role and a user id to be usable.
    pub fn is_authenticated(&self) -> bool {
        self.role.is_some() && self.user_id.as_deref().map(|id| !id.is_empty()).unwrap_or(false)
    }

    /// Landing page of the session's dashboard, if signed in
    pub fn home_path(&self) -> Option<&'static str> {
        self.role
            .filter(|_| self.is_authenticated())
            .map(|r| r.dashboard().home_path())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("session was requested outside of a SessionProvider")]
    OutsideProvider,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: &str) -> SignInResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_sign_in_request_wire_names() {
        let body = serde_json::to_value(SignInRequest {
            email: "a@b.c".into(),
            password: "secret".into(),
        })
        .unwrap();
        assert_eq!(body["Email"], "a@b.c");
        assert_eq!(body["Password"], "secret");
    }

    #[test]
    fn test_customer_sign_in() {
        let r = response(r#"{"token":"t","id":7,"Name":"Sofia"}"#);
        assert_eq!(resolve_role(AccountType::Customer, &r), Some(UserRole::Customer));
        let session = Session::from_sign_in(AccountType::Customer, &r);
        assert_eq!(session.user_id.as_deref(), Some("7"));
        assert_eq!(session.display_name.as_deref(), Some("Sofia"));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_admin_flag_variants() {
        for json in [
            r#"{"Admin": true}"#,
            r#"{"Admin": "True"}"#,
            r#"{"role": "admin"}"#,
            r#"{"userType": "admin"}"#,
        ] {
            assert_eq!(
                resolve_role(AccountType::Employee, &response(json)),
                Some(UserRole::Admin),
                "{json}"
            );
        }
        let r = response(r#"{"Admin": "false"}"#);
        assert_eq!(resolve_role(AccountType::Employee, &r), Some(UserRole::Employee));
    }

    #[test]
    fn test_company_without_admin_signal_is_employee() {
        let r = response(r#"{"id":"c-1","Company_name":"Acme"}"#);
        assert_eq!(resolve_role(AccountType::Company, &r), Some(UserRole::Employee));
    }

    #[test]
    fn test_unknown_role_in_response() {
        let r = response(r#"{"role":"superuser","id":1}"#);
        assert_eq!(resolve_role(AccountType::Customer, &r), None);
        assert!(!Session::from_sign_in(AccountType::Customer, &r).is_authenticated());
    }

    #[test]
    fn test_id_prefers_id_over_user_id() {
        let r = response(r#"{"id": 3, "userId": "9"}"#);
        assert_eq!(r.resolved_user_id().as_deref(), Some("3"));
        let r = response(r#"{"userId": "9"}"#);
        assert_eq!(r.resolved_user_id().as_deref(), Some("9"));
    }

    #[test]
    fn test_role_token() {
        let session = Session {
            role: Some(UserRole::Admin),
            ..Session::default()
        };
        assert_eq!(session.role_token(), Some("admin"));
        assert_eq!(Session::default().role_token(), None);
    }

    #[test]
    fn test_home_path_requires_sign_in() {
        let customer = Session {
            user_id: Some("7".to_string()),
            role: Some(UserRole::Customer),
            ..Session::default()
        };
        assert_eq!(customer.home_path(), Some("/dashboard-customer"));

        let no_id = Session {
            role: Some(UserRole::Admin),
            ..Session::default()
        };
        assert_eq!(no_id.home_path(), None);
        assert_eq!(Session::default().home_path(), None);
    }
}
