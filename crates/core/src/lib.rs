//! hostly_core - functional core for the hostly client data layer.
//!
//! Pure data types and functions shared by the HTTP client, the query cache
//! and the CLI: backend DTOs, query keys, invalidation rules, staleness
//! policy, and tenant URL construction. Nothing in this crate performs I/O;
//! the only trait ([`store::LocalStore`]) is implemented by the client crate.

pub mod cache;
pub mod models;
pub mod store;
pub mod tenant;
