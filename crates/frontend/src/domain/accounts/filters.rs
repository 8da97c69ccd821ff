use leptos::prelude::*;

/// Values accepted by the `status` query parameter of the account lists.
pub const ACCOUNT_STATUS_FILTERS: [(&str, &str); 2] = [("active", "Active"), ("disabled", "Disabled")];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsersFilters {
    pub status: Option<String>,
}

impl UsersFilters {
    pub fn set_status(&mut self, value: Option<String>) {
        self.status = value;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none()
    }
}

/// Filter stores for the two account tables, shared for the session.
#[derive(Clone, Copy)]
pub struct AccountFilterStores {
    pub users: RwSignal<UsersFilters>,
    pub admins: RwSignal<UsersFilters>,
}

impl AccountFilterStores {
    pub fn new() -> Self {
        Self {
            users: RwSignal::new(UsersFilters::default()),
            admins: RwSignal::new(UsersFilters::default()),
        }
    }
}

impl Default for AccountFilterStores {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter_reset() {
        let mut filters = UsersFilters::default();
        filters.set_status(Some("disabled".into()));
        assert!(!filters.is_empty());
        filters.reset();
        assert!(filters.is_empty());
    }
}
