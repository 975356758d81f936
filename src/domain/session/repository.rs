use super::state::{SessionPatch, SessionRecord};
use crate::domain::errors::StoreError;
use crate::domain::logging::LogComponent;
use crate::log_warn;
use std::cell::RefCell;

/// Durable persistence for the single session record.
///
/// `load` is total: a missing key, an unreadable value or a schema mismatch
/// degrade to the empty record instead of failing, so startup never blocks
/// on bad storage. `save` is read-modify-write over the stored record.
pub trait SessionRepository {
    fn load(&self) -> SessionRecord;
    fn save(&self, patch: &SessionPatch);
    fn clear(&self);
}

/// In-memory repository holding the serialized record, used by native tests
/// and any host without localStorage. It goes through the same JSON codec as
/// the browser-backed repository, so corrupt-value behavior is identical.
pub struct InMemorySessionRepository {
    value: RefCell<Option<String>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self { value: RefCell::new(None) }
    }

    /// Seed with a raw stored value, possibly corrupt.
    pub fn with_raw(raw: &str) -> Self {
        Self { value: RefCell::new(Some(raw.to_string())) }
    }

    /// The serialized record as currently stored, if any.
    pub fn raw(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRepository for InMemorySessionRepository {
    fn load(&self) -> SessionRecord {
        match self.value.borrow().as_deref() {
            None => SessionRecord::default(),
            Some(raw) => serde_json::from_str(raw).unwrap_or_else(|e| {
                let err = StoreError::Deserialize(e.to_string());
                log_warn!(
                    LogComponent::Session("Repository"),
                    "stored session record unreadable, starting fresh: {err}"
                );
                SessionRecord::default()
            }),
        }
    }

    fn save(&self, patch: &SessionPatch) {
        let mut record = self.load();
        record.apply(patch);
        match serde_json::to_string(&record) {
            Ok(json) => *self.value.borrow_mut() = Some(json),
            Err(e) => {
                let err = StoreError::Serialize(e.to_string());
                log_warn!(
                    LogComponent::Session("Repository"),
                    "failed to serialize session record, keeping previous value: {err}"
                );
            }
        }
    }

    fn clear(&self) {
        *self.value.borrow_mut() = None;
    }
}
