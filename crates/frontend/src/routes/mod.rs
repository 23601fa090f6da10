pub mod access;
pub mod routes;
