use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Paths of the auth endpoints exposed by the HookUpZA backend. Joined to the deployment's base
/// URL by the client.
pub mod endpoints {
    pub const CHECK_AUTH: &str = "/api/check_auth";
    pub const LOGIN: &str = "/api/login";
    pub const SIGNUP: &str = "/api/signup";
    pub const LOGOUT: &str = "/api/logout";
    pub const ADMIN_CHECK_ROLE: &str = "/api/admin/check_role";
}

/// Login request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Role of a HookUpZA account. Unknown roles coming from the backend are kept verbatim so they
/// survive a round trip through the advisory record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    #[default]
    User,
    Admin,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::Other(role) => role,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "user" => Self::User,
            "admin" => Self::Admin,
            _ => Self::Other(value),
        }
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        match value {
            Role::Other(role) => role,
            role => role.as_str().to_owned(),
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of account chosen at signup. Vendor accounts carry [VendorData].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Free,
    Vendor,
}

impl AccountType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Vendor => "vendor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorData {
    pub business_name: String,
    pub whatsapp: String,
    pub service_description: String,
}

/// Signup request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    /// Sent as typed, ranges such as `25-34` included
    pub age: String,
    pub location: String,
    pub email: String,
    pub account_type: AccountType,
    pub vendor_data: Option<VendorData>,
}

/// Successful login/signup response. The backend includes more fields than the client needs;
/// only the identity is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub username: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub user_id: Option<i64>,
}

impl AuthUser {
    /// Identity to mirror locally, defaulting the role to [Role::User]
    pub fn to_record(&self) -> SessionRecord {
        SessionRecord {
            username: self.username.clone(),
            role: self.role.clone().unwrap_or_default(),
        }
    }
}

/// Nested user details returned by the session check
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserData {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    /// Stored as entered at signup, so it may come back as a number or a string
    #[serde(default)]
    pub age: Option<serde_json::Value>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub vendor_paid: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

/// Body of the session check. Older backend versions put the identity at the top level, newer
/// ones nest it in `user_data`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CheckAuthResponse {
    #[serde(default)]
    pub logged_in: bool,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub user_data: Option<UserData>,
}

impl CheckAuthResponse {
    /// Resolve the active session, if any. Top-level fields win over `user_data`, the role falls
    /// back to [Role::User] and a logged in response without any username is not a session.
    pub fn into_record(self) -> Option<SessionRecord> {
        if !self.logged_in {
            return None;
        }
        let user_data = self.user_data.unwrap_or_default();
        let username = self
            .username
            .or(user_data.username)
            .filter(|name| !name.is_empty())?;
        let role = self.role.or(user_data.role).unwrap_or_default();
        Some(SessionRecord { username, role })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AdminRoleResponse {
    #[serde(default)]
    pub is_admin: bool,
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Advisory copy of the session identity, persisted in the browser. Never used for access
/// control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub username: String,
    pub role: Role,
}

#[cfg(test)]
mod test {
    use rstest::rstest;
    use serde_json::json;

    use super::{
        AccountType, AuthUser, CheckAuthResponse, Role, SessionRecord, SignupRequest, VendorData,
    };

    fn record(username: &str, role: Role) -> SessionRecord {
        SessionRecord {
            username: username.to_owned(),
            role,
        }
    }

    #[rstest]
    #[case::top_level(
        json!({"logged_in": true, "username": "alice", "role": "admin"}),
        Some(record("alice", Role::Admin))
    )]
    #[case::nested(
        json!({"logged_in": true, "user_data": {"user_id": 4, "username": "bob", "role": "user", "verified": true}}),
        Some(record("bob", Role::User))
    )]
    #[case::missing_role(
        json!({"logged_in": true, "user_data": {"username": "carol"}}),
        Some(record("carol", Role::User))
    )]
    #[case::top_level_wins(
        json!({"logged_in": true, "username": "dave", "user_data": {"username": "other", "role": "admin"}}),
        Some(record("dave", Role::Admin))
    )]
    #[case::logged_out(json!({"logged_in": false, "error": "Not logged in"}), None)]
    #[case::no_username(json!({"logged_in": true}), None)]
    #[case::empty_body(json!({}), None)]
    fn check_auth_should_resolve_record(
        #[case] body: serde_json::Value,
        #[case] expected: Option<SessionRecord>,
    ) -> Result<(), serde_json::Error> {
        let response: CheckAuthResponse = serde_json::from_value(body)?;

        assert_eq!(response.into_record(), expected);
        Ok(())
    }

    #[test]
    fn login_reply_should_ignore_unexpected_account_type() -> Result<(), serde_json::Error> {
        let user: AuthUser = serde_json::from_value(json!({
            "username": "erin",
            "role": "user",
            "account_type": "premium",
            "user_id": 9
        }))?;
        let response: CheckAuthResponse = serde_json::from_value(json!({
            "logged_in": true,
            "user_data": {"username": "erin", "account_type": "premium", "age": "25-34"}
        }))?;

        assert_eq!(user.to_record(), record("erin", Role::User));
        assert_eq!(response.into_record(), Some(record("erin", Role::User)));
        Ok(())
    }

    #[rstest]
    #[case("user", Role::User)]
    #[case("admin", Role::Admin)]
    #[case("moderator", Role::Other("moderator".to_owned()))]
    fn role_should_keep_backend_string(
        #[case] raw: &str,
        #[case] expected: Role,
    ) -> Result<(), serde_json::Error> {
        let role: Role = serde_json::from_value(json!(raw))?;

        assert_eq!(role, expected);
        assert_eq!(serde_json::to_value(&role)?, json!(raw));
        Ok(())
    }

    #[test]
    fn signup_request_should_match_backend_field_names() -> Result<(), serde_json::Error> {
        let request = SignupRequest {
            username: "vendor1".to_owned(),
            password: "longenough".to_owned(),
            age: "25-34".to_owned(),
            location: "Durban".to_owned(),
            email: String::new(),
            account_type: AccountType::Vendor,
            vendor_data: Some(VendorData {
                business_name: "Shop".to_owned(),
                whatsapp: "0820000000".to_owned(),
                service_description: "Things".to_owned(),
            }),
        };

        let value = serde_json::to_value(&request)?;

        assert_eq!(value["account_type"], json!("vendor"));
        assert_eq!(value["age"], json!("25-34"));
        assert_eq!(value["vendor_data"]["businessName"], json!("Shop"));
        assert_eq!(value["vendor_data"]["serviceDescription"], json!("Things"));
        Ok(())
    }
}
