//! Wire types shared with the marketplace REST API.

pub mod accounts;
pub mod category;
pub mod common;
pub mod listings;
