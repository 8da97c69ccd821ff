use crate::shared::api_utils::path_segment;
use crate::shared::listing_actions::QueryScope;
use crate::shared::query_cache::QueryKey;

/// The two account tables share one page; only endpoints and wording differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Users,
    Admins,
}

impl AccountKind {
    pub fn list_path(self) -> &'static str {
        match self {
            AccountKind::Users => "/users/get-users",
            AccountKind::Admins => "/admins/get-admins",
        }
    }

    pub fn delete_path(self, id: &str) -> String {
        match self {
            AccountKind::Users => format!("/admin/users/{}", path_segment(id)),
            AccountKind::Admins => format!("/admins/delete-admin/{}", path_segment(id)),
        }
    }

    pub fn status_path(self, id: &str) -> String {
        match self {
            AccountKind::Users => format!("/admin/users/{}/status", path_segment(id)),
            AccountKind::Admins => format!("/admins/{}/change-status", path_segment(id)),
        }
    }

    pub fn scope(self) -> QueryScope {
        let (collection, item) = match self {
            AccountKind::Users => ("users", "user"),
            AccountKind::Admins => ("admins", "admin"),
        };
        QueryScope {
            collection: QueryKey::new(collection),
            per_user: None,
            item: QueryKey::new(item),
        }
    }

    pub fn noun(self) -> &'static str {
        match self {
            AccountKind::Users => "user",
            AccountKind::Admins => "admin",
        }
    }

    /// Sentence-case noun for notifications.
    pub fn label(self) -> &'static str {
        match self {
            AccountKind::Users => "User",
            AccountKind::Admins => "Admin",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AccountKind::Users => "Users",
            AccountKind::Admins => "Admins",
        }
    }

    pub fn page_id(self) -> &'static str {
        match self {
            AccountKind::Users => "users--accounts",
            AccountKind::Admins => "admins--accounts",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_endpoints() {
        let kind = AccountKind::Users;
        assert_eq!(kind.list_path(), "/users/get-users");
        assert_eq!(kind.delete_path("u1"), "/admin/users/u1");
        assert_eq!(kind.status_path("u1"), "/admin/users/u1/status");
    }

    #[test]
    fn test_admin_endpoints() {
        let kind = AccountKind::Admins;
        assert_eq!(kind.list_path(), "/admins/get-admins");
        assert_eq!(kind.delete_path("a1"), "/admins/delete-admin/a1");
        assert_eq!(kind.status_path("a1"), "/admins/a1/change-status");
    }

    #[test]
    fn test_scope_has_no_per_user_group() {
        let scope = AccountKind::Admins.scope();
        assert_eq!(scope.collection, QueryKey::new("admins"));
        assert_eq!(scope.per_user, None);
        assert_eq!(scope.item_key("a1"), QueryKey::new("admin").with("a1"));
    }
}
