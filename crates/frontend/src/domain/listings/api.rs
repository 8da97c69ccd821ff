use async_trait::async_trait;
use contracts::category::Category;
use contracts::common::PaginatedResponse;
use contracts::listings::{Listing, SearchListingParams, UpdateStatusRequest};

use super::filters::ListingFilters;
use crate::shared::api_utils::{path_segment, ApiClient, ApiError};
use crate::shared::config::use_config;
use crate::shared::list_state::ListState;
use crate::shared::listing_actions::ListingMutations;

pub fn list_path() -> &'static str {
    "/listings"
}

pub fn delete_path(id: &str) -> String {
    format!("/admin-listings/{}", path_segment(id))
}

pub fn status_path(id: &str) -> String {
    format!("/listings/change-status/{}", path_segment(id))
}

/// Query for one table page of a category.
pub fn search_params(
    category: Category,
    list: &ListState,
    filters: &ListingFilters,
) -> SearchListingParams {
    SearchListingParams {
        category: Some(category.api_value().to_string()),
        sub_category: filters.sub_category.clone(),
        city: filters.city.clone(),
        query: list.search_param(),
        status: filters.status.clone(),
        page: list.page,
        limit: list.limit,
    }
}

#[derive(Clone)]
pub struct ListingsApi {
    client: ApiClient,
}

impl ListingsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn from_context() -> Self {
        Self::new(ApiClient::new(use_config()))
    }

    pub async fn fetch(
        &self,
        params: SearchListingParams,
    ) -> Result<PaginatedResponse<Listing>, ApiError> {
        self.client.get_json(list_path(), &params).await
    }
}

#[async_trait(?Send)]
impl ListingMutations for ListingsApi {
    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&delete_path(id)).await
    }

    async fn update_status(&self, id: &str, status: &str) -> Result<(), ApiError> {
        let body = UpdateStatusRequest {
            status: status.to_string(),
        };
        self.client.patch(&status_path(id), &body).await
    }
}
