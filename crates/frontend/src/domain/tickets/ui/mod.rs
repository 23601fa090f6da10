pub mod admin_overview;
pub mod create;
pub mod details;
pub mod list;
pub mod table;
