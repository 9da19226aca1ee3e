//! Client-side data sync: the query cache, the mutation executor and the
//! facade tying both to the HTTP client.

pub mod cache;
pub mod client;
pub mod executor;
pub mod local_store;

pub use cache::{EntrySnapshot, QueryCache};
pub use client::SyncClient;
pub use executor::MutationExecutor;
pub use hostly_core::store::LocalStore;
pub use local_store::{FileLocalStore, LocationState, MemoryLocalStore};
