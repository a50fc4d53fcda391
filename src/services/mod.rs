/*
 * Responsibility
 * - domain services used by the handlers (upstream fetch, anomaly evaluation)
 */
pub mod anomaly;
pub mod weather;
