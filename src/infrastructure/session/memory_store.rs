//! In-process session store used when Redis is not configured.

use super::store::{SessionResult, SessionStore};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

/// In-memory session store.
///
/// Flags live in a process-local set and disappear on restart, which only
/// means a returning visitor may be counted once more. Suitable for
/// single-instance deployments and tests.
#[derive(Default)]
pub struct MemorySessionStore {
    viewed: Mutex<HashSet<(String, i64)>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn was_viewed(&self, session_id: &str, post_id: i64) -> SessionResult<bool> {
        let viewed = self.viewed.lock().expect("session store lock poisoned");
        Ok(viewed.contains(&(session_id.to_string(), post_id)))
    }

    async fn mark_viewed(&self, session_id: &str, post_id: i64) -> SessionResult<()> {
        let mut viewed = self.viewed.lock().expect("session store lock poisoned");
        viewed.insert((session_id.to_string(), post_id));
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
