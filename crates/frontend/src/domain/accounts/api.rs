use async_trait::async_trait;
use contracts::accounts::{Account, AccountsParams, SetActiveRequest};
use contracts::common::PaginatedResponse;

use super::filters::UsersFilters;
use super::kind::AccountKind;
use crate::shared::api_utils::{ApiClient, ApiError};
use crate::shared::config::use_config;
use crate::shared::list_state::ListState;
use crate::shared::listing_actions::ListingMutations;

/// Status strings used by the enable/disable dialog.
pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_INACTIVE: &str = "inactive";

/// Map a dialog status onto the `isActive` flag.
pub fn parse_active(status: &str) -> Option<bool> {
    match status {
        STATUS_ACTIVE => Some(true),
        STATUS_INACTIVE | "disabled" => Some(false),
        _ => None,
    }
}

/// Status the enable/disable dialog switches to.
pub fn toggled_status(current: &str) -> &'static str {
    if parse_active(current) == Some(true) {
        STATUS_INACTIVE
    } else {
        STATUS_ACTIVE
    }
}

/// "User disabled successfully" for a switch to `inactive`.
pub fn status_toast(kind: AccountKind, new_status: &str) -> String {
    let verb = if parse_active(new_status) == Some(true) { "enabled" } else { "disabled" };
    format!("{} {} successfully", kind.label(), verb)
}

pub fn accounts_params(list: &ListState, filters: &UsersFilters) -> AccountsParams {
    AccountsParams {
        page: list.page,
        limit: list.limit,
        search: list.search_param(),
        status: filters.status.clone(),
    }
}

#[derive(Clone)]
pub struct AccountsApi {
    client: ApiClient,
    kind: AccountKind,
}

impl AccountsApi {
    pub fn new(client: ApiClient, kind: AccountKind) -> Self {
        Self { client, kind }
    }

    pub fn from_context(kind: AccountKind) -> Self {
        Self::new(ApiClient::new(use_config()), kind)
    }

    pub async fn fetch(&self, params: AccountsParams) -> Result<PaginatedResponse<Account>, ApiError> {
        self.client.get_json(self.kind.list_path(), &params).await
    }
}

/// Accounts reuse the listing action flow: "status" is active/inactive.
#[async_trait(?Send)]
impl ListingMutations for AccountsApi {
    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&self.kind.delete_path(id)).await
    }

    async fn update_status(&self, id: &str, status: &str) -> Result<(), ApiError> {
        let is_active = parse_active(status)
            .ok_or_else(|| ApiError::Decode(format!("unknown account status '{}'", status)))?;
        self.client
            .patch(&self.kind.status_path(id), &SetActiveRequest { is_active })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_active() {
        assert_eq!(parse_active("active"), Some(true));
        assert_eq!(parse_active("inactive"), Some(false));
        assert_eq!(parse_active("disabled"), Some(false));
        assert_eq!(parse_active("pending"), None);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(toggled_status("active"), "inactive");
        assert_eq!(toggled_status("inactive"), "active");
    }

    #[test]
    fn test_status_toast_names_the_switch() {
        assert_eq!(status_toast(AccountKind::Users, "inactive"), "User disabled successfully");
        assert_eq!(status_toast(AccountKind::Admins, "active"), "Admin enabled successfully");
    }

    #[test]
    fn test_params_carry_search_and_status() {
        let mut list = ListState::default();
        list.set_search("sara".into());
        let filters = UsersFilters {
            status: Some("disabled".into()),
        };
        let params = accounts_params(&list, &filters);
        assert_eq!(params.search.as_deref(), Some("sara"));
        assert_eq!(params.status.as_deref(), Some("disabled"));
        assert_eq!(params.page, 1);
    }
}
