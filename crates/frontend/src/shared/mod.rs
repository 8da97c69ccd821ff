pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod icons;
pub mod list_state;
pub mod listing_actions;
pub mod notify;
pub mod page_frame;
pub mod paged_query;
pub mod query_cache;
