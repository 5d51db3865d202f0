// In-memory registry of what the next free-text message from a user means.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use teloxide::types::UserId;

/// What a subsequent free-text message from a user should be interpreted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingInput {
    AddGift,
    EditGift { index: usize },
}

/// Process-wide map from user to pending input. Not persisted; a restart
/// drops in-flight flows and the user re-initiates from the menu.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    inner: Arc<Mutex<HashMap<UserId, PendingInput>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a pending input, silently replacing any unconsumed one.
    pub fn set(&self, user: UserId, pending: PendingInput) {
        tracing::debug!(user_id = user.0, ?pending, "Registering pending input");
        self.inner.lock().unwrap().insert(user, pending);
    }

    /// Reads and removes the pending input in one step. Text messages from
    /// users with no entry are meaningless and get ignored by the caller.
    pub fn take(&self, user: UserId) -> Option<PendingInput> {
        self.inner.lock().unwrap().remove(&user)
    }
}
