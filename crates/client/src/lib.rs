//! hostly_client - HTTP client, query cache and CLI for the hostly API.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;
pub mod sync;

#[cfg(test)]
mod test_support;

pub use client::HostlyClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use sync::{FileLocalStore, MemoryLocalStore, MutationExecutor, QueryCache, SyncClient};
