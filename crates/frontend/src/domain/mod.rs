pub mod products;
pub mod suppliers;
pub mod tickets;
