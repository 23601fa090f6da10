//! Wire types and view-model rules shared by every page of the sales tracker.
//!
//! Nothing in this crate touches the browser, so the rules here are tested
//! natively with `cargo test -p sales-tracker-contracts`.

pub mod domain;
pub mod shared;
pub mod system;
