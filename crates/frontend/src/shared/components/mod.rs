pub mod dialogs;
pub mod filter_select;
pub mod page_header;
pub mod pagination_controls;
pub mod status_badge;
pub mod table;
