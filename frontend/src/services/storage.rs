use web_sys::Storage;

use common::config::APPLICATIONS_STORAGE_KEY;
use common::errors::StoreError;
use common::model::application::JobApplication;
use common::submission::application::{appended_log, ApplicationStore};

/// Application log kept as a JSON array in `localStorage`.
pub struct LocalStorageApplicationLog {
    key: &'static str,
}

impl Default for LocalStorageApplicationLog {
    fn default() -> Self {
        Self {
            key: APPLICATIONS_STORAGE_KEY,
        }
    }
}

impl LocalStorageApplicationLog {
    fn storage(&self) -> Result<Storage, StoreError> {
        web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|err| StoreError::Unavailable(format!("{err:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl ApplicationStore for LocalStorageApplicationLog {
    fn append(&self, application: &JobApplication) -> Result<(), StoreError> {
        let storage = self.storage()?;
        let existing = storage
            .get_item(self.key)
            .map_err(|err| StoreError::Unavailable(format!("{err:?}")))?;
        let raw = appended_log(existing.as_deref(), application)?;
        storage
            .set_item(self.key, &raw)
            .map_err(|err| StoreError::Write(format!("{err:?}")))
    }

    fn entries(&self) -> Result<Vec<JobApplication>, StoreError> {
        let raw = self
            .storage()?
            .get_item(self.key)
            .map_err(|err| StoreError::Unavailable(format!("{err:?}")))?;
        match raw {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }
}
