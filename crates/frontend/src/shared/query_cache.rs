//! Session-wide query cache keyed by logical query names.
//!
//! Queries subscribe to the generation of their key; invalidating a key
//! prefix bumps the generation of every key below it, which makes the
//! dependent resources refetch. Invalidations commute, and repeating one
//! only causes another refetch.

use std::collections::HashMap;
use std::fmt;

use leptos::prelude::*;

/// Hierarchical cache key, e.g. `listing:42` or `admin-listings:vehicles:1:20`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new(root: impl Into<String>) -> Self {
        Self(vec![root.into()])
    }

    pub fn with(mut self, segment: impl ToString) -> Self {
        self.0.push(segment.to_string());
        self
    }

    /// Whether `prefix` is this key or one of its ancestors.
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(":"))
    }
}

/// Anything that can mark cached queries as stale.
pub trait QueryInvalidator {
    fn invalidate(&self, prefix: &QueryKey);
}

/// Invalidation counters per key prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryGenerations {
    counters: HashMap<QueryKey, u64>,
}

impl QueryGenerations {
    pub fn invalidate(&mut self, prefix: &QueryKey) {
        *self.counters.entry(prefix.clone()).or_insert(0) += 1;
    }

    /// Number of invalidations that covered `key`.
    pub fn generation(&self, key: &QueryKey) -> u64 {
        self.counters
            .iter()
            .filter(|(prefix, _)| key.starts_with(prefix))
            .map(|(_, count)| *count)
            .sum()
    }
}

/// Reactive handle to the cache, provided once by `App`.
#[derive(Clone, Copy)]
pub struct QueryClient {
    generations: RwSignal<QueryGenerations>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            generations: RwSignal::new(QueryGenerations::default()),
        }
    }

    /// Tracked read; call inside a resource source to refetch on invalidation.
    pub fn generation(&self, key: &QueryKey) -> u64 {
        self.generations.with(|g| g.generation(key))
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryInvalidator for QueryClient {
    fn invalidate(&self, prefix: &QueryKey) {
        log::debug!("invalidate query {}", prefix);
        self.generations.update(|g| g.invalidate(prefix));
    }
}

pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>().expect("QueryClient not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_display() {
        let key = QueryKey::new("listing").with("42");
        assert_eq!(key.to_string(), "listing:42");
    }

    #[test]
    fn test_prefix_matching() {
        let page = QueryKey::new("admin-listings").with("vehicles").with(1);
        assert!(page.starts_with(&QueryKey::new("admin-listings")));
        assert!(page.starts_with(&page));
        assert!(!page.starts_with(&QueryKey::new("admin")));
        assert!(!QueryKey::new("admin-listings").starts_with(&page));
    }

    #[test]
    fn test_invalidating_prefix_bumps_descendants_only() {
        let mut generations = QueryGenerations::default();
        let vehicles = QueryKey::new("admin-listings").with("vehicles");
        let item = QueryKey::new("listing").with("7");

        generations.invalidate(&QueryKey::new("admin-listings"));

        assert_eq!(generations.generation(&vehicles), 1);
        assert_eq!(generations.generation(&item), 0);
    }

    #[test]
    fn test_invalidation_is_order_independent() {
        let a = QueryKey::new("admin-listings");
        let b = QueryKey::new("listing").with("7");

        let mut first = QueryGenerations::default();
        first.invalidate(&a);
        first.invalidate(&b);

        let mut second = QueryGenerations::default();
        second.invalidate(&b);
        second.invalidate(&a);

        assert_eq!(first, second);
    }

    #[test]
    fn test_nested_invalidations_accumulate() {
        let mut generations = QueryGenerations::default();
        let item = QueryKey::new("listing").with("7");
        generations.invalidate(&QueryKey::new("listing"));
        generations.invalidate(&item);
        generations.invalidate(&item);
        assert_eq!(generations.generation(&item), 3);
    }
}
