use gloo_storage::{LocalStorage, Storage};
use hookupza_common::SessionRecord;

/// localStorage key of the advisory session record
pub const ADVISORY_KEY: &str = "hookupza_user";

/// Client-side copy of the session identity. Only used to render before the session check
/// returns; the backend stays authoritative.
pub trait AdvisoryStore {
    fn load(&self) -> Option<SessionRecord>;
    fn save(&self, record: &SessionRecord);
    fn clear(&self);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalAdvisoryStore;

impl AdvisoryStore for LocalAdvisoryStore {
    fn load(&self) -> Option<SessionRecord> {
        match LocalStorage::get(ADVISORY_KEY) {
            Ok(record) => Some(record),
            Err(error) => {
                log::debug!("No advisory session record. {error}");
                None
            }
        }
    }

    fn save(&self, record: &SessionRecord) {
        if let Err(error) = LocalStorage::set(ADVISORY_KEY, record) {
            log::warn!("Could not store advisory session record. {error}");
        }
    }

    fn clear(&self) {
        LocalStorage::delete(ADVISORY_KEY);
    }
}
