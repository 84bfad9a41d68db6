// src/store/mod.rs

pub mod action;
pub mod clock;
pub mod reducer;
pub mod seed;

pub use action::Action;
#[cfg(test)]
pub use clock::FixedClock;
pub use clock::{Clock, Stamp, SystemClock};
pub use reducer::transition;

use crate::domain::AppState;

/// Owns the current state and applies actions to it one at a time.
pub struct Store {
    state: AppState,
    clock: Box<dyn Clock>,
    seq: u64,
}

impl Store {
    pub fn new(state: AppState, clock: Box<dyn Clock>) -> Self {
        Self {
            state,
            clock,
            seq: 0,
        }
    }

    /// Store over the reference seed data, stamped by the system clock.
    pub fn seeded() -> Self {
        Self::new(seed::default_state(), Box::new(SystemClock))
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn snapshot(&self) -> AppState {
        self.state.clone()
    }

    /// Apply `action` synchronously; the result becomes the current state.
    pub fn dispatch(&mut self, action: Action) {
        let stamp = self.next_stamp();
        let kind = action.kind();
        let current = std::mem::take(&mut self.state);
        self.state = transition(current, &action, &stamp);
        tracing::debug!(action = kind, log_id = %stamp.id, "dispatched");
    }

    fn next_stamp(&mut self) -> Stamp {
        self.seq += 1;
        Stamp::at(self.clock.now(), self.seq)
    }
}
