// src/auth/sessions.rs
use std::collections::HashMap;

use crate::auth::token::{digest, new_session_token, Digest32};

/// Sessions that have entered privileged (admin) mode.
///
/// Keyed by token digest; the raw token only lives in the client's cookie.
/// Nothing here survives a restart.
pub struct SessionRegistry {
    ttl_secs: i64,
    expires_at: HashMap<Digest32, i64>,
}

impl SessionRegistry {
    pub fn new(ttl_secs: i64) -> Self {
        Self {
            ttl_secs,
            expires_at: HashMap::new(),
        }
    }

    /// Start a privileged session and return the raw token for the cookie.
    pub fn create(&mut self, now: i64) -> String {
        self.purge_expired(now);
        let token = new_session_token();
        self.expires_at.insert(digest(&token), now + self.ttl_secs);
        token
    }

    pub fn is_privileged(&self, raw_token: &str, now: i64) -> bool {
        self.expires_at
            .get(&digest(raw_token))
            .is_some_and(|expires| *expires > now)
    }

    /// End a session. Returns whether it was known.
    pub fn revoke(&mut self, raw_token: &str) -> bool {
        self.expires_at.remove(&digest(raw_token)).is_some()
    }

    pub fn purge_expired(&mut self, now: i64) {
        self.expires_at.retain(|_, expires| *expires > now);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.expires_at.len()
    }
}
