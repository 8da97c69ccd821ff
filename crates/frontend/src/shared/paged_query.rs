//! Paginated fetch bound to the query cache.
//!
//! The fetch re-runs whenever the tracked parameters change or the query's
//! key prefix is invalidated. Only the latest request may write its result.

use std::future::Future;

use contracts::common::PaginatedResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::ApiError;
use crate::shared::list_state::ListState;
use crate::shared::query_cache::{use_query_client, QueryKey};

/// Monotonic request ids. A response is applied only if no newer request
/// has started since.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn next(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, id: u64) -> bool {
        id == self.latest
    }
}

/// Reactive view of one page of a collection.
pub struct PagedQuery<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub total: RwSignal<u64>,
    pub loading: RwSignal<bool>,
}

impl<T: Send + Sync + 'static> Clone for PagedQuery<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for PagedQuery<T> {}

/// Fetch `params()` through `fetch` and keep the latest page in signals.
///
/// `key` identifies the collection in the query cache; `params` is tracked.
pub fn use_paged_query<T, P, F, Fut>(
    key: QueryKey,
    params: impl Fn() -> P + 'static,
    fetch: F,
) -> PagedQuery<T>
where
    T: Send + Sync + 'static,
    F: Fn(P) -> Fut + 'static,
    Fut: Future<Output = Result<PaginatedResponse<T>, ApiError>> + 'static,
{
    let client = use_query_client();
    let query = PagedQuery {
        items: RwSignal::new(Vec::new()),
        total: RwSignal::new(0),
        loading: RwSignal::new(true),
    };
    let sequence = StoredValue::new(RequestSequence::default());

    Effect::new(move |_| {
        let params = params();
        // subscribe to invalidations of this collection
        let _generation = client.generation(&key);

        let mut request_id = 0;
        sequence.update_value(|s| request_id = s.next());
        query.loading.set(true);

        let pending = fetch(params);
        let key = key.clone();
        spawn_local(async move {
            let result = pending.await;
            if !sequence.with_value(|s| s.is_current(request_id)) {
                log::debug!("dropping stale response for {}", key);
                return;
            }
            match result {
                Ok(page) => {
                    query.total.set(page.total);
                    query.items.set(page.items);
                }
                Err(e) => {
                    log::error!("query {} failed: {}", key, e);
                    query.total.set(0);
                    query.items.set(Vec::new());
                }
            }
            query.loading.set(false);
        });
    });

    query
}

/// Pull `list.page` back inside the range once a load settles, e.g. after
/// the last row of the last page was deleted.
pub fn use_page_clamp<T: Send + Sync + 'static>(list: RwSignal<ListState>, query: PagedQuery<T>) {
    Effect::new(move |_| {
        let total = query.total.get();
        if query.loading.get() {
            return;
        }
        let changed = list.with_untracked(|s| {
            let mut next = s.clone();
            next.clamp_to(total);
            next != *s
        });
        if changed {
            list.update(|s| s.clamp_to(total));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_request_is_current() {
        let mut seq = RequestSequence::default();
        let first = seq.next();
        let second = seq.next();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}
