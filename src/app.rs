// src/app.rs
use std::sync::{Mutex, MutexGuard};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::auth::sessions::SessionRegistry;
use crate::config::AppConfig;
use crate::domain::AppState;
use crate::errors::ServerError;
use crate::store::{Action, Store};

/// Everything a request handler can reach.
///
/// Worker threads share one `App`; the store and the session registry are
/// each behind a mutex, so dispatches apply one at a time in arrival order.
pub struct App {
    pub config: AppConfig,
    store: Mutex<Store>,
    sessions: Mutex<SessionRegistry>,
}

impl App {
    pub fn new(config: AppConfig, store: Store) -> Self {
        let sessions = SessionRegistry::new(config.session_ttl_secs);
        Self {
            config,
            store: Mutex::new(store),
            sessions: Mutex::new(sessions),
        }
    }

    /// Current state, cloned out so the lock is not held while rendering.
    pub fn snapshot(&self) -> Result<AppState, ServerError> {
        Ok(self.store()?.snapshot())
    }

    /// Dispatch and return the state it produced.
    pub fn dispatch(&self, action: Action) -> Result<AppState, ServerError> {
        let mut store = self.store()?;
        store.dispatch(action);
        Ok(store.snapshot())
    }

    pub fn is_privileged(&self, raw_token: Option<&str>) -> Result<bool, ServerError> {
        let Some(token) = raw_token else {
            return Ok(false);
        };
        Ok(self.sessions()?.is_privileged(token, now_unix()))
    }

    pub fn start_session(&self) -> Result<String, ServerError> {
        Ok(self.sessions()?.create(now_unix()))
    }

    pub fn end_session(&self, raw_token: &str) -> Result<bool, ServerError> {
        Ok(self.sessions()?.revoke(raw_token))
    }

    fn store(&self) -> Result<MutexGuard<'_, Store>, ServerError> {
        self.store.lock().map_err(|_| ServerError::InternalError)
    }

    fn sessions(&self) -> Result<MutexGuard<'_, SessionRegistry>, ServerError> {
        self.sessions.lock().map_err(|_| ServerError::InternalError)
    }
}

pub fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}
