pub mod api;
pub mod config;
pub mod errors;
pub mod observability;
pub mod security;
pub mod web;

pub use web::RqApi;
