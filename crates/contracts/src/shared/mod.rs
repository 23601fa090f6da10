pub mod list_payload;
pub mod paging;
pub mod serde_helpers;
pub mod validation;
