//! Per-category filter stores. They live in context for the whole session,
//! so a category page keeps its filters when the operator navigates away.

use contracts::category::Category;
use leptos::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingFilters {
    pub sub_category: Option<String>,
    pub status: Option<String>,
    pub city: Option<String>,
}

impl ListingFilters {
    pub fn set_sub_category(&mut self, value: Option<String>) {
        self.sub_category = value;
    }

    pub fn set_status(&mut self, value: Option<String>) {
        self.status = value;
    }

    pub fn set_city(&mut self, value: Option<String>) {
        self.city = value;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn active_count(&self) -> usize {
        [&self.sub_category, &self.status, &self.city]
            .iter()
            .filter(|f| f.is_some())
            .count()
    }
}

/// One filter store per category.
#[derive(Clone, Copy)]
pub struct ListingFilterStores {
    vehicles: RwSignal<ListingFilters>,
    residential: RwSignal<ListingFilters>,
    commercial: RwSignal<ListingFilters>,
    construction: RwSignal<ListingFilters>,
    events: RwSignal<ListingFilters>,
}

impl ListingFilterStores {
    pub fn new() -> Self {
        Self {
            vehicles: RwSignal::new(ListingFilters::default()),
            residential: RwSignal::new(ListingFilters::default()),
            commercial: RwSignal::new(ListingFilters::default()),
            construction: RwSignal::new(ListingFilters::default()),
            events: RwSignal::new(ListingFilters::default()),
        }
    }

    pub fn for_category(&self, category: Category) -> RwSignal<ListingFilters> {
        match category {
            Category::Vehicles => self.vehicles,
            Category::Residential => self.residential,
            Category::Commercial => self.commercial,
            Category::Construction => self.construction,
            Category::Events => self.events,
        }
    }
}

impl Default for ListingFilterStores {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_listing_filters(category: Category) -> RwSignal<ListingFilters> {
    use_context::<ListingFilterStores>()
        .expect("ListingFilterStores not provided")
        .for_category(category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters_and_reset() {
        let mut filters = ListingFilters::default();
        filters.set_status(Some("available".into()));
        filters.set_city(Some("Adama".into()));
        assert_eq!(filters.active_count(), 2);

        filters.set_city(None);
        assert_eq!(filters.active_count(), 1);

        filters.reset();
        assert_eq!(filters, ListingFilters::default());
    }
}
