//! Per-message pagination sessions and their registry.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use super::controller::{ControllerOutput, Direction, NavigationController};

/// Failure modes when routing an action to a live session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The message no longer owns a controller (expired or dismissed).
    #[error("no live pagination session for message {0}")]
    Stale(u64),
}

struct SessionEntry {
    controller: Arc<Mutex<NavigationController>>,
    expiry: Option<JoinHandle<()>>,
}

/// Registry of live pagination sessions, keyed by display message id.
///
/// Cloned into every handler through the shared context. Each controller sits
/// behind its own lock, so actions on one message apply strictly in order
/// while separate messages never contend.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    inner: Arc<Mutex<HashMap<u64, SessionEntry>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a controller to a display message, replacing any previous binding.
    pub async fn register(&self, session_id: u64, controller: NavigationController) {
        let entry = SessionEntry {
            controller: Arc::new(Mutex::new(controller)),
            expiry: None,
        };

        let mut sessions = self.inner.lock().await;
        if let Some(previous) = sessions.insert(session_id, entry)
            && let Some(task) = previous.expiry
        {
            task.abort();
        }
    }

    /// Apply a navigation action to the session owning `session_id`.
    pub async fn handle(
        &self,
        session_id: u64,
        direction: Direction,
    ) -> Result<ControllerOutput, SessionError> {
        let controller = {
            let sessions = self.inner.lock().await;
            let entry = sessions
                .get(&session_id)
                .ok_or(SessionError::Stale(session_id))?;
            Arc::clone(&entry.controller)
        };

        let mut controller = controller.lock().await;
        Ok(controller.handle(direction))
    }

    /// Drop a session, aborting its pending expiry task.
    pub async fn remove(&self, session_id: u64) -> bool {
        let mut sessions = self.inner.lock().await;
        match sessions.remove(&session_id) {
            Some(entry) => {
                if let Some(task) = entry.expiry {
                    task.abort();
                }
                true
            }
            None => false,
        }
    }

    /// Drop a session without touching its expiry task.
    ///
    /// Used by the expiry task itself; aborting the caller mid-teardown would
    /// cancel the component cleanup that follows.
    pub(crate) async fn expire(&self, session_id: u64) -> bool {
        self.inner.lock().await.remove(&session_id).is_some()
    }

    /// Replace the session's expiry task, aborting the previous one.
    pub(crate) async fn set_expiry(&self, session_id: u64, task: JoinHandle<()>) {
        let mut sessions = self.inner.lock().await;
        match sessions.get_mut(&session_id) {
            Some(entry) => {
                if let Some(previous) = entry.expiry.replace(task) {
                    previous.abort();
                }
            }
            // Session vanished between update and reschedule.
            None => task.abort(),
        }
    }

    pub async fn contains(&self, session_id: u64) -> bool {
        self.inner.lock().await.contains_key(&session_id)
    }
}
