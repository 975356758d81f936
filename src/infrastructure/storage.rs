use crate::domain::errors::StoreError;
use crate::domain::logging::LogComponent;
use crate::domain::session::{SessionPatch, SessionRecord, SessionRepository};
use crate::log_warn;
use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};

/// Single fixed key so unrelated client-side subsystems cannot collide.
pub const SESSION_STORAGE_KEY: &str = "portfolio_shell_app_state";

/// localStorage-backed persistence for the session record.
///
/// Decode and write failures are non-fatal: the store degrades to "as if
/// nothing was ever saved" rather than blocking startup.
pub struct LocalStorageSessionRepository;

impl LocalStorageSessionRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalStorageSessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRepository for LocalStorageSessionRepository {
    fn load(&self) -> SessionRecord {
        match LocalStorage::get::<SessionRecord>(SESSION_STORAGE_KEY) {
            Ok(record) => record,
            Err(StorageError::KeyNotFound(_)) => SessionRecord::default(),
            Err(e) => {
                let err = StoreError::Deserialize(e.to_string());
                log_warn!(
                    LogComponent::Infrastructure("LocalStorage"),
                    "stored session record unreadable, starting fresh: {err}"
                );
                SessionRecord::default()
            }
        }
    }

    fn save(&self, patch: &SessionPatch) {
        let mut record = self.load();
        record.apply(patch);
        if let Err(e) = LocalStorage::set(SESSION_STORAGE_KEY, &record) {
            log_warn!(
                LogComponent::Infrastructure("LocalStorage"),
                "failed to persist session record: {e}"
            );
        }
    }

    fn clear(&self) {
        LocalStorage::delete(SESSION_STORAGE_KEY);
    }
}
