pub mod filter_panel;
pub mod pagination_controls;
pub mod search_input;
pub mod table_checkbox;
