use super::repository::SessionRepository;
use super::state::{SessionPatch, SessionState};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_info};
use std::cell::RefCell;
use std::rc::Rc;

/// Owner of the in-memory session and its only mutation path.
///
/// Every patch is mirrored to the repository before the in-memory value is
/// considered committed, then observers (the rendering layer) are notified.
/// Nested snapshots are never mutated in place; callers always go through
/// whole-field patches.
pub struct SessionService {
    repository: Rc<dyn SessionRepository>,
    state: RefCell<SessionState>,
    observers: RefCell<Vec<Box<dyn Fn(&SessionState)>>>,
}

impl SessionService {
    /// Restore the session from the repository, defaulting where absent.
    pub fn new(repository: Rc<dyn SessionRepository>) -> Self {
        let state = SessionState::from_record(repository.load());
        log_info!(
            LogComponent::Session("Service"),
            "📂 Session restored: page={} ticker={}",
            state.active_page,
            state.selected_ticker
        );
        Self { repository, state: RefCell::new(state), observers: RefCell::new(Vec::new()) }
    }

    /// Current committed state, cloned.
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Register a rendering-layer observer called after every commit.
    pub fn subscribe<F>(&self, observer: F)
    where
        F: Fn(&SessionState) + 'static,
    {
        self.observers.borrow_mut().push(Box::new(observer));
    }

    /// Apply a whole-field patch: persist first, commit in memory, notify.
    pub fn patch(&self, patch: SessionPatch) {
        if patch.is_empty() {
            return;
        }
        self.repository.save(&patch);
        self.state.borrow_mut().apply(&patch);
        log_debug!(LogComponent::Session("Service"), "patch committed: {:?}", patch);
        self.notify();
    }

    /// True iff the persisted record holds at least one remembered choice.
    pub fn has_any_saved_preferences(&self) -> bool {
        self.repository.load().has_any_preferences()
    }

    /// Drop the persisted record and reinitialize to the documented defaults.
    pub fn reset_all_preferences(&self) {
        log_info!(LogComponent::Session("Service"), "🧹 Resetting all saved preferences");
        self.repository.clear();
        *self.state.borrow_mut() = SessionState::default();
        self.notify();
    }

    fn notify(&self) {
        let state = self.state.borrow().clone();
        for observer in self.observers.borrow().iter() {
            observer(&state);
        }
    }
}
