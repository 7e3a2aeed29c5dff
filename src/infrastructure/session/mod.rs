//! Visitor session storage backends.

mod memory_store;
mod redis_store;
mod store;

pub use memory_store::MemorySessionStore;
pub use redis_store::RedisSessionStore;
pub use store::{SessionResult, SessionStore, SessionStoreError};
