pub mod badge;
pub mod file_drop;
pub mod page_header;
pub mod page_states;
pub mod pagination_controls;
pub mod stat_card;
