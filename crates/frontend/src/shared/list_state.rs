use leptos::prelude::*;

use crate::shared::components::pagination_controls::total_pages;

pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Page, size and search text of a server-paginated table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListState {
    /// 1-based
    pub page: u64,
    pub limit: u64,
    pub search: String,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            search: String::new(),
        }
    }
}

impl ListState {
    pub fn go_to(&mut self, page: u64) {
        self.page = page.max(1);
    }

    /// A new page size starts over from the first page.
    pub fn set_limit(&mut self, limit: u64) {
        if limit > 0 && limit != self.limit {
            self.limit = limit;
            self.page = 1;
        }
    }

    pub fn set_search(&mut self, search: String) {
        if search != self.search {
            self.search = search;
            self.page = 1;
        }
    }

    /// Called after any filter change.
    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    /// Pull `page` back inside the range once the total is known, e.g. after
    /// the last row of the last page was deleted.
    pub fn clamp_to(&mut self, total: u64) {
        let pages = total_pages(total, self.limit);
        if pages > 0 && self.page > pages {
            self.page = pages;
        }
    }

    pub fn search_param(&self) -> Option<String> {
        let search = self.search.trim();
        (!search.is_empty()).then(|| search.to_string())
    }
}

pub fn create_state() -> RwSignal<ListState> {
    RwSignal::new(ListState::default())
}
