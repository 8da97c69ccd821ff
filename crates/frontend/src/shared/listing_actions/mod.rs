//! Delete / status-change workflow shared by every listing table.
//!
//! ```ignore
//! let actions = use_listing_actions(
//!     ListingActionsOptions::new("vehicle"),
//!     Rc::new(ListingsApi::from_context()),
//! );
//!
//! // in a column renderer
//! on_click=move |_| actions.open_delete_dialog(id.clone())
//!
//! // in the page
//! <DeleteConfirmDialog
//!     open=Signal::derive(move || actions.delete_id().is_some())
//!     is_loading=Signal::derive(move || actions.is_deleting())
//!     on_confirm=Callback::new(move |_| actions.handle_delete())
//!     on_cancel=Callback::new(move |_| actions.close_delete_dialog())
//! />
//! ```

mod controller;
mod state;

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

pub use controller::{
    ActionController, ListingActionsOptions, ListingMutations, QueryScope, StatusMessage,
    SuccessCallbacks, SuccessMessages,
};
pub use state::{ActionState, StateCell, StatusUpdateData};

use crate::shared::notify::ToastNotifier;
use crate::shared::query_cache::use_query_client;
use state::create_state;

type SignalController = ActionController<RwSignal<ActionState>>;

/// Copyable handle returned by [`use_listing_actions`].
///
/// Getters are tracked, so they can drive views directly.
#[derive(Clone, Copy)]
pub struct ListingActions {
    state: RwSignal<ActionState>,
    controller: StoredValue<SignalController, LocalStorage>,
}

/// Build an action controller wired to the toaster and query cache in context.
pub fn use_listing_actions(
    options: ListingActionsOptions,
    mutations: Rc<dyn ListingMutations>,
) -> ListingActions {
    let state = create_state();
    let controller = ActionController::new(
        state,
        options,
        mutations,
        Rc::new(ToastNotifier::from_context()),
        Rc::new(use_query_client()),
    );

    ListingActions {
        state,
        controller: StoredValue::new_local(controller),
    }
}

impl ListingActions {
    pub fn delete_id(&self) -> Option<String> {
        self.state.with(|s| s.delete_id.clone())
    }

    pub fn is_deleting(&self) -> bool {
        self.state.with(|s| s.is_deleting)
    }

    pub fn status_update(&self) -> Option<StatusUpdateData> {
        self.state.with(|s| s.status_update.clone())
    }

    pub fn is_updating_status(&self) -> bool {
        self.state.with(|s| s.is_updating_status)
    }

    pub fn open_delete_dialog(&self, id: String) {
        self.controller.with_value(|c| c.open_delete_dialog(id));
    }

    pub fn close_delete_dialog(&self) {
        self.controller.with_value(|c| c.close_delete_dialog());
    }

    pub fn open_status_dialog(&self, id: String, current_status: String) {
        self.controller
            .with_value(|c| c.open_status_dialog(id, current_status));
    }

    pub fn close_status_dialog(&self) {
        self.controller.with_value(|c| c.close_status_dialog());
    }

    /// Confirm the pending delete. Ignored while a delete is in flight.
    pub fn handle_delete(&self) {
        if self.state.with_untracked(|s| s.is_deleting) {
            return;
        }
        let controller = self.controller.get_value();
        spawn_local(async move {
            controller.handle_delete().await;
        });
    }

    /// Confirm the pending status change. Ignored while an update is in flight.
    pub fn handle_update_status(&self, new_status: String) {
        if self.state.with_untracked(|s| s.is_updating_status) {
            return;
        }
        let controller = self.controller.get_value();
        spawn_local(async move {
            controller.handle_update_status(&new_status).await;
        });
    }
}
