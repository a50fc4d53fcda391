/*
 * Responsibility
 * - router-level middleware (re-export)
 * - cors::apply, http::apply, security_headers::apply
 */
pub mod cors;
pub mod http;
pub mod security_headers;
