pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod fetch;
pub mod file_preview;
pub mod icons;
pub mod list_utils;
