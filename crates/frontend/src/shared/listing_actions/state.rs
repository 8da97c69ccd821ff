use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

/// Row whose status-change dialog is open, with the status to pre-select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdateData {
    pub id: String,
    pub current_status: String,
}

/// Transient dialog state of one action controller.
///
/// The delete and status channels are independent of each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionState {
    pub delete_id: Option<String>,
    pub status_update: Option<StatusUpdateData>,
    pub is_deleting: bool,
    pub is_updating_status: bool,
}

/// Mutable cell holding controller state.
pub trait StateCell<T> {
    /// Untracked copy of the current value.
    fn snapshot(&self) -> T;
    fn modify(&self, f: impl FnOnce(&mut T));
}

impl<T: Clone + Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn snapshot(&self) -> T {
        self.get_untracked()
    }

    fn modify(&self, f: impl FnOnce(&mut T)) {
        self.update(f);
    }
}

impl<T: Clone> StateCell<T> for Rc<RefCell<T>> {
    fn snapshot(&self) -> T {
        self.borrow().clone()
    }

    fn modify(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.borrow_mut());
    }
}

pub fn create_state() -> RwSignal<ActionState> {
    RwSignal::new(ActionState::default())
}
