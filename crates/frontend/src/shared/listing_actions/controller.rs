use std::rc::Rc;

use async_trait::async_trait;

use super::state::{ActionState, StateCell, StatusUpdateData};
use crate::shared::api_utils::ApiError;
use crate::shared::notify::Notifier;
use crate::shared::query_cache::{QueryInvalidator, QueryKey};

/// Remote mutations behind the delete and status dialogs.
#[async_trait(?Send)]
pub trait ListingMutations {
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
    async fn update_status(&self, id: &str, status: &str) -> Result<(), ApiError>;
}

/// Query groups refreshed after a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryScope {
    /// Paginated collection the table reads from.
    pub collection: QueryKey,
    /// Owner-scoped collection, if the resource has one.
    pub per_user: Option<QueryKey>,
    /// Prefix of single-item queries; the id is appended.
    pub item: QueryKey,
}

impl QueryScope {
    pub fn listings() -> Self {
        Self {
            collection: QueryKey::new("admin-listings"),
            per_user: Some(QueryKey::new("my-listings")),
            item: QueryKey::new("listing"),
        }
    }

    pub fn item_key(&self, id: &str) -> QueryKey {
        self.item.clone().with(id)
    }
}

impl Default for QueryScope {
    fn default() -> Self {
        Self::listings()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuccessMessages {
    pub delete: Option<String>,
    pub update_status: Option<String>,
}

#[derive(Clone, Default)]
pub struct SuccessCallbacks {
    pub delete: Option<Rc<dyn Fn()>>,
    pub update_status: Option<Rc<dyn Fn()>>,
}

/// Builds the status toast from the new status.
pub type StatusMessage = Rc<dyn Fn(&str) -> String>;

#[derive(Clone)]
pub struct ListingActionsOptions {
    /// Label used in the default notification texts.
    pub category: String,
    pub success_messages: SuccessMessages,
    /// Used when no fixed status message is set.
    pub status_message: Option<StatusMessage>,
    pub on_success: SuccessCallbacks,
    pub scope: QueryScope,
}

impl ListingActionsOptions {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            success_messages: SuccessMessages::default(),
            status_message: None,
            on_success: SuccessCallbacks::default(),
            scope: QueryScope::default(),
        }
    }

    pub fn with_success_messages(
        mut self,
        delete: impl Into<String>,
        update_status: impl Into<String>,
    ) -> Self {
        self.success_messages = SuccessMessages {
            delete: Some(delete.into()),
            update_status: Some(update_status.into()),
        };
        self
    }

    pub fn with_status_message(mut self, f: impl Fn(&str) -> String + 'static) -> Self {
        self.status_message = Some(Rc::new(f));
        self
    }

    pub fn on_delete_success(mut self, f: impl Fn() + 'static) -> Self {
        self.on_success.delete = Some(Rc::new(f));
        self
    }

    pub fn on_update_status_success(mut self, f: impl Fn() + 'static) -> Self {
        self.on_success.update_status = Some(Rc::new(f));
        self
    }

    pub fn with_scope(mut self, scope: QueryScope) -> Self {
        self.scope = scope;
        self
    }

    fn delete_success_message(&self) -> String {
        self.success_messages
            .delete
            .clone()
            .unwrap_or_else(|| format!("{} deleted successfully", self.category))
    }

    fn status_success_message(&self, new_status: &str) -> String {
        if let Some(message) = &self.success_messages.update_status {
            return message.clone();
        }
        match &self.status_message {
            Some(build) => build(new_status),
            None => format!("Status updated to {}", new_status),
        }
    }
}

/// Coordinates the delete and status-change dialogs of one listing table.
///
/// A failed mutation leaves its dialog state in place so the operator can
/// retry or cancel. The in-flight flags are published for the caller to
/// disable its confirm buttons; the controller does not queue calls itself.
#[derive(Clone)]
pub struct ActionController<S> {
    state: S,
    options: Rc<ListingActionsOptions>,
    mutations: Rc<dyn ListingMutations>,
    notifier: Rc<dyn Notifier>,
    cache: Rc<dyn QueryInvalidator>,
}

impl<S: StateCell<ActionState>> ActionController<S> {
    pub fn new(
        state: S,
        options: ListingActionsOptions,
        mutations: Rc<dyn ListingMutations>,
        notifier: Rc<dyn Notifier>,
        cache: Rc<dyn QueryInvalidator>,
    ) -> Self {
        Self {
            state,
            options: Rc::new(options),
            mutations,
            notifier,
            cache,
        }
    }

    pub fn state(&self) -> ActionState {
        self.state.snapshot()
    }

    pub fn open_delete_dialog(&self, id: impl Into<String>) {
        let id = id.into();
        self.state.modify(|s| s.delete_id = Some(id));
    }

    pub fn close_delete_dialog(&self) {
        self.state.modify(|s| s.delete_id = None);
    }

    pub fn open_status_dialog(&self, id: impl Into<String>, current_status: impl Into<String>) {
        let data = StatusUpdateData {
            id: id.into(),
            current_status: current_status.into(),
        };
        self.state.modify(|s| s.status_update = Some(data));
    }

    pub fn close_status_dialog(&self) {
        self.state.modify(|s| s.status_update = None);
    }

    pub async fn handle_delete(&self) {
        let Some(id) = self.state.snapshot().delete_id else {
            return;
        };

        self.state.modify(|s| s.is_deleting = true);
        let result = self.mutations.delete(&id).await;

        match result {
            Ok(()) => {
                log::info!("{} {} deleted", self.options.category, id);
                self.state.modify(|s| {
                    s.is_deleting = false;
                    s.delete_id = None;
                });
                self.notifier.success(&self.options.delete_success_message());

                let scope = &self.options.scope;
                self.cache.invalidate(&scope.collection);
                if let Some(per_user) = &scope.per_user {
                    self.cache.invalidate(per_user);
                }

                if let Some(callback) = &self.options.on_success.delete {
                    callback();
                }
            }
            Err(err) => {
                log::warn!("failed to delete {} {}: {}", self.options.category, id, err);
                self.state.modify(|s| s.is_deleting = false);
                let fallback = format!("Failed to delete {}", self.options.category);
                self.notifier
                    .error(err.server_message().unwrap_or(fallback.as_str()));
            }
        }
    }

    pub async fn handle_update_status(&self, new_status: &str) {
        let Some(data) = self.state.snapshot().status_update else {
            return;
        };

        self.state.modify(|s| s.is_updating_status = true);
        let result = self.mutations.update_status(&data.id, new_status).await;

        match result {
            Ok(()) => {
                log::info!("{} {} status -> {}", self.options.category, data.id, new_status);
                self.state.modify(|s| {
                    s.is_updating_status = false;
                    s.status_update = None;
                });
                self.notifier
                    .success(&self.options.status_success_message(new_status));

                let scope = &self.options.scope;
                self.cache.invalidate(&scope.collection);
                if let Some(per_user) = &scope.per_user {
                    self.cache.invalidate(per_user);
                }
                self.cache.invalidate(&scope.item_key(&data.id));

                if let Some(callback) = &self.options.on_success.update_status {
                    callback();
                }
            }
            Err(err) => {
                log::warn!(
                    "failed to update {} {} status: {}",
                    self.options.category,
                    data.id,
                    err
                );
                self.state.modify(|s| s.is_updating_status = false);
                self.notifier
                    .error(err.server_message().unwrap_or("Failed to update status"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use tokio::sync::Notify;

    #[derive(Default)]
    struct FakeMutations {
        deletes: RefCell<Vec<String>>,
        status_updates: RefCell<Vec<(String, String)>>,
        fail_with: RefCell<Option<ApiError>>,
        /// When set, calls stay pending until notified.
        gate: Option<Rc<Notify>>,
    }

    impl FakeMutations {
        fn gated(gate: Rc<Notify>) -> Self {
            Self {
                gate: Some(gate),
                ..Default::default()
            }
        }

        async fn wait_for_release(&self) {
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
        }

        fn failing(err: ApiError) -> Self {
            Self {
                fail_with: RefCell::new(Some(err)),
                ..Default::default()
            }
        }

        fn outcome(&self) -> Result<(), ApiError> {
            match self.fail_with.borrow().clone() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ListingMutations for FakeMutations {
        async fn delete(&self, id: &str) -> Result<(), ApiError> {
            self.deletes.borrow_mut().push(id.to_string());
            self.wait_for_release().await;
            self.outcome()
        }

        async fn update_status(&self, id: &str, status: &str) -> Result<(), ApiError> {
            self.status_updates
                .borrow_mut()
                .push((id.to_string(), status.to_string()));
            self.wait_for_release().await;
            self.outcome()
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        successes: RefCell<Vec<String>>,
        errors: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn success(&self, message: &str) {
            self.successes.borrow_mut().push(message.to_string());
        }

        fn error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
    }

    #[derive(Default)]
    struct RecordingCache {
        invalidated: RefCell<Vec<String>>,
    }

    impl QueryInvalidator for RecordingCache {
        fn invalidate(&self, prefix: &QueryKey) {
            self.invalidated.borrow_mut().push(prefix.to_string());
        }
    }

    struct Harness {
        controller: ActionController<Rc<RefCell<ActionState>>>,
        mutations: Rc<FakeMutations>,
        notifier: Rc<RecordingNotifier>,
        cache: Rc<RecordingCache>,
    }

    fn harness(options: ListingActionsOptions, mutations: FakeMutations) -> Harness {
        let mutations = Rc::new(mutations);
        let notifier = Rc::new(RecordingNotifier::default());
        let cache = Rc::new(RecordingCache::default());
        let controller = ActionController::new(
            Rc::new(RefCell::new(ActionState::default())),
            options,
            mutations.clone(),
            notifier.clone(),
            cache.clone(),
        );
        Harness {
            controller,
            mutations,
            notifier,
            cache,
        }
    }

    #[test]
    fn test_close_delete_dialog_is_idempotent() {
        let h = harness(ListingActionsOptions::new("vehicle"), FakeMutations::default());

        h.controller.close_delete_dialog();
        assert_eq!(h.controller.state(), ActionState::default());

        h.controller.open_delete_dialog("l-1");
        h.controller.close_delete_dialog();
        h.controller.close_delete_dialog();
        assert_eq!(h.controller.state().delete_id, None);
    }

    #[test]
    fn test_dialog_channels_are_independent() {
        let h = harness(ListingActionsOptions::new("vehicle"), FakeMutations::default());

        h.controller.open_delete_dialog("a");
        h.controller.open_status_dialog("b", "pending");
        h.controller.close_delete_dialog();

        let state = h.controller.state();
        assert_eq!(state.delete_id, None);
        assert_eq!(
            state.status_update,
            Some(StatusUpdateData {
                id: "b".into(),
                current_status: "pending".into()
            })
        );
    }

    #[tokio::test]
    async fn test_handle_delete_without_pending_id_is_noop() {
        let h = harness(ListingActionsOptions::new("vehicle"), FakeMutations::default());

        h.controller.handle_delete().await;

        assert!(h.mutations.deletes.borrow().is_empty());
        assert!(h.notifier.successes.borrow().is_empty());
        assert!(h.cache.invalidated.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_delete_success_clears_state_and_invalidates() {
        let h = harness(ListingActionsOptions::new("vehicle"), FakeMutations::default());

        h.controller.open_delete_dialog("l-1");
        h.controller.handle_delete().await;

        assert_eq!(*h.mutations.deletes.borrow(), vec!["l-1".to_string()]);
        let state = h.controller.state();
        assert_eq!(state.delete_id, None);
        assert!(!state.is_deleting);
        assert_eq!(
            *h.notifier.successes.borrow(),
            vec!["vehicle deleted successfully".to_string()]
        );
        assert_eq!(
            *h.cache.invalidated.borrow(),
            vec!["admin-listings".to_string(), "my-listings".to_string()]
        );
    }

    #[tokio::test]
    async fn test_double_confirm_deletes_once() {
        let h = harness(ListingActionsOptions::new("vehicle"), FakeMutations::default());

        h.controller.open_delete_dialog("l-1");
        h.controller.handle_delete().await;
        h.controller.handle_delete().await;

        assert_eq!(h.mutations.deletes.borrow().len(), 1);
        assert_eq!(h.notifier.successes.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_dialog_open() {
        let err = ApiError::from_status(409, Some("Cannot delete: referenced elsewhere".into()));
        let h = harness(ListingActionsOptions::new("vehicle"), FakeMutations::failing(err));

        h.controller.open_delete_dialog("l-1");
        h.controller.handle_delete().await;

        let state = h.controller.state();
        assert_eq!(state.delete_id.as_deref(), Some("l-1"));
        assert!(!state.is_deleting);
        assert_eq!(
            *h.notifier.errors.borrow(),
            vec!["Cannot delete: referenced elsewhere".to_string()]
        );
        assert!(h.cache.invalidated.borrow().is_empty());

        h.controller.close_delete_dialog();
        assert_eq!(h.controller.state().delete_id, None);
    }

    #[tokio::test]
    async fn test_delete_failure_without_message_uses_fallback() {
        let h = harness(
            ListingActionsOptions::new("event listing"),
            FakeMutations::failing(ApiError::Timeout),
        );

        h.controller.open_delete_dialog("e-9");
        h.controller.handle_delete().await;

        assert_eq!(
            *h.notifier.errors.borrow(),
            vec!["Failed to delete event listing".to_string()]
        );
    }

    #[tokio::test]
    async fn test_status_update_invalidates_item_query() {
        let h = harness(ListingActionsOptions::new("vehicle"), FakeMutations::default());

        h.controller.open_status_dialog("X", "pending");
        h.controller.handle_update_status("available").await;

        assert_eq!(
            *h.mutations.status_updates.borrow(),
            vec![("X".to_string(), "available".to_string())]
        );
        let invalidated = h.cache.invalidated.borrow();
        assert!(invalidated.contains(&"listing:X".to_string()));
        assert!(invalidated.contains(&"admin-listings".to_string()));
        assert!(invalidated.contains(&"my-listings".to_string()));
        assert_eq!(h.controller.state().status_update, None);
        assert_eq!(
            *h.notifier.successes.borrow(),
            vec!["Status updated to available".to_string()]
        );
    }

    #[tokio::test]
    async fn test_status_update_failure_keeps_pending_data() {
        let h = harness(
            ListingActionsOptions::new("vehicle"),
            FakeMutations::failing(ApiError::Network("offline".into())),
        );

        h.controller.open_status_dialog("X", "pending");
        h.controller.handle_update_status("closed").await;

        let state = h.controller.state();
        assert_eq!(state.status_update.map(|d| d.id), Some("X".to_string()));
        assert!(!state.is_updating_status);
        assert_eq!(
            *h.notifier.errors.borrow(),
            vec!["Failed to update status".to_string()]
        );
    }

    #[tokio::test]
    async fn test_custom_messages_and_callbacks() {
        let deleted = Rc::new(Cell::new(0));
        let updated = Rc::new(Cell::new(0));
        let options = {
            let deleted = deleted.clone();
            let updated = updated.clone();
            ListingActionsOptions::new("vehicle")
                .with_success_messages(
                    "Vehicle listing deleted successfully",
                    "Vehicle status updated successfully",
                )
                .on_delete_success(move || deleted.set(deleted.get() + 1))
                .on_update_status_success(move || updated.set(updated.get() + 1))
        };
        let h = harness(options, FakeMutations::default());

        h.controller.open_delete_dialog("a");
        h.controller.handle_delete().await;
        h.controller.open_status_dialog("b", "available");
        h.controller.handle_update_status("closed").await;

        assert_eq!(deleted.get(), 1);
        assert_eq!(updated.get(), 1);
        assert_eq!(
            *h.notifier.successes.borrow(),
            vec![
                "Vehicle listing deleted successfully".to_string(),
                "Vehicle status updated successfully".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_scope_without_per_user_group() {
        let scope = QueryScope {
            collection: QueryKey::new("users"),
            per_user: None,
            item: QueryKey::new("user"),
        };
        let h = harness(
            ListingActionsOptions::new("user").with_scope(scope),
            FakeMutations::default(),
        );

        h.controller.open_status_dialog("u-1", "active");
        h.controller.handle_update_status("inactive").await;

        assert_eq!(
            *h.cache.invalidated.borrow(),
            vec!["users".to_string(), "user:u-1".to_string()]
        );
    }

    #[tokio::test]
    async fn test_is_deleting_set_while_request_pending() {
        let gate = Rc::new(Notify::new());
        let h = harness(
            ListingActionsOptions::new("vehicle"),
            FakeMutations::gated(gate.clone()),
        );
        h.controller.open_delete_dialog("l-1");

        let mut pending = std::pin::pin!(h.controller.handle_delete());
        tokio::select! {
            biased;
            _ = &mut pending => panic!("delete finished before release"),
            _ = std::future::ready(()) => {}
        }

        let state = h.controller.state();
        assert!(state.is_deleting);
        assert_eq!(state.delete_id.as_deref(), Some("l-1"));

        gate.notify_one();
        pending.await;

        let state = h.controller.state();
        assert!(!state.is_deleting);
        assert_eq!(state.delete_id, None);
    }

    #[tokio::test]
    async fn test_is_updating_status_set_while_request_pending() {
        let gate = Rc::new(Notify::new());
        let h = harness(
            ListingActionsOptions::new("vehicle"),
            FakeMutations::gated(gate.clone()),
        );
        h.controller.open_status_dialog("X", "pending");

        let mut pending = std::pin::pin!(h.controller.handle_update_status("available"));
        tokio::select! {
            biased;
            _ = &mut pending => panic!("update finished before release"),
            _ = std::future::ready(()) => {}
        }

        assert!(h.controller.state().is_updating_status);
        assert!(!h.controller.state().is_deleting);

        gate.notify_one();
        pending.await;

        let state = h.controller.state();
        assert!(!state.is_updating_status);
        assert_eq!(state.status_update, None);
    }

    #[tokio::test]
    async fn test_status_message_builder() {
        let options = ListingActionsOptions::new("user")
            .with_status_message(|status| format!("User switched to {}", status));
        let h = harness(options, FakeMutations::default());

        h.controller.open_status_dialog("u-1", "active");
        h.controller.handle_update_status("inactive").await;

        assert_eq!(
            *h.notifier.successes.borrow(),
            vec!["User switched to inactive".to_string()]
        );
    }
}
