pub mod api;
pub mod columns;
pub mod filters;
pub mod options;
pub mod ui;
