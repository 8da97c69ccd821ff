use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Customer,
    Admin,
    SuperAdmin,
}

impl UserRole {
    fn rank(self) -> u8 {
        match self {
            UserRole::Customer => 0,
            UserRole::Admin => 1,
            UserRole::SuperAdmin => 2,
        }
    }

    /// Whether a holder of `self` may open a route that needs `required`.
    pub fn can_access(self, required: UserRole) -> bool {
        self.rank() >= required.rank()
    }

    pub fn display_name(self) -> &'static str {
        match self {
            UserRole::Customer => "Customer",
            UserRole::Admin => "Admin",
            UserRole::SuperAdmin => "Super Admin",
        }
    }
}

/// A customer or staff account row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Option<UserRole>,
    pub is_active: bool,
    pub created_at: String,
    #[serde(default)]
    pub listings_count: Option<u64>,
}

impl Account {
    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "active"
        } else {
            "inactive"
        }
    }
}

/// Query parameters for the account collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountsParams {
    pub page: u64,
    pub limit: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Body of the enable/disable endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetActiveRequest {
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_hierarchy() {
        assert!(UserRole::SuperAdmin.can_access(UserRole::Admin));
        assert!(UserRole::Admin.can_access(UserRole::Admin));
        assert!(!UserRole::Customer.can_access(UserRole::Admin));
    }

    #[test]
    fn test_role_serde() {
        let role: UserRole = serde_json::from_str("\"super_admin\"").unwrap();
        assert_eq!(role, UserRole::SuperAdmin);
        assert_eq!(role.display_name(), "Super Admin");
    }

    #[test]
    fn test_account_from_api_json() {
        let json = r#"{"id":"u-7","name":"Sara","phone":"0911","isActive":false,"createdAt":"2024-01-02T00:00:00Z","listingsCount":3}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.email, None);
        assert_eq!(account.listings_count, Some(3));
        assert_eq!(account.status_label(), "inactive");
    }

    #[test]
    fn test_set_active_body() {
        let body = serde_json::to_string(&SetActiveRequest { is_active: true }).unwrap();
        assert_eq!(body, r#"{"isActive":true}"#);
    }
}
