/*
 * Responsibility
 * - module tree of the service (main.rs and tests/ both go through here)
 */
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
