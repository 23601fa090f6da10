pub mod create;
pub mod inventory;
