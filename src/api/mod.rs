/*
 * Responsibility
 * - public surface of the HTTP API (re-export of routes())
 */
pub mod dto;
pub mod handlers;
mod routes;

pub use routes::routes;
