use chrono::Utc;
use tracing::info;

use crate::store::{keys, StateStore};
use crate::types::{new_record_id, CredentialRecord};

/// Named API credentials plus the active-record pointer.
///
/// The list and the pointer persist under separate keys; both are re-read
/// on open and written back after every mutation. The pointer is clamped so
/// it either indexes a live record or is `-1` (none active).
#[derive(Debug)]
pub struct CredentialStore {
    store: StateStore,
    records: Vec<CredentialRecord>,
    active_index: i64,
}

impl CredentialStore {
    pub fn open(store: StateStore) -> Self {
        let records: Vec<CredentialRecord> = store.get(keys::CREDENTIALS, Vec::new());
        let mut active_index: i64 = store.get(keys::ACTIVE_CREDENTIAL, -1);
        if active_index >= records.len() as i64 || active_index < -1 {
            active_index = if records.is_empty() { -1 } else { 0 };
        }
        CredentialStore {
            store,
            records,
            active_index,
        }
    }

    pub fn records(&self) -> &[CredentialRecord] {
        &self.records
    }

    pub fn active_index(&self) -> Option<usize> {
        usize::try_from(self.active_index)
            .ok()
            .filter(|index| *index < self.records.len())
    }

    pub fn active_secret(&self) -> Option<&str> {
        self.active_index()
            .map(|index| self.records[index].secret.as_str())
    }

    /// Adds a record and makes it the active one.
    pub fn add(&mut self, name: &str, secret: &str) -> &CredentialRecord {
        let record = CredentialRecord {
            id: new_record_id(),
            name: name.trim().to_string(),
            secret: secret.trim().to_string(),
            created_at: Utc::now(),
        };
        self.records.push(record);
        self.active_index = (self.records.len() - 1) as i64;
        self.persist();
        info!("Stored credential '{}' and made it active", name.trim());
        self.records.last().expect("record just pushed")
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.records.len() {
            return false;
        }
        self.active_index = index as i64;
        self.persist();
        true
    }

    /// Removes the record at `index`. Deleting the active record re-selects
    /// index 0 if any remain; deleting below the active index shifts the
    /// pointer down so it keeps naming the same logical record.
    pub fn delete(&mut self, index: usize) -> bool {
        if index >= self.records.len() {
            return false;
        }
        let removed = self.records.remove(index);
        if self.active_index == index as i64 {
            self.active_index = if self.records.is_empty() { -1 } else { 0 };
        } else if self.active_index > index as i64 {
            self.active_index -= 1;
        }
        self.persist();
        info!("Deleted credential '{}'", removed.name);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn persist(&self) {
        self.store.set(keys::CREDENTIALS, &self.records);
        self.store.set(keys::ACTIVE_CREDENTIAL, &self.active_index);
    }
}

/// Masked rendering for listings: first and last few characters only.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 12 {
        return "…".repeat(3);
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch() -> CredentialStore {
        let dir = std::env::temp_dir().join(format!(
            "prism-credentials-test-{}",
            uuid::Uuid::new_v4().simple()
        ));
        CredentialStore::open(StateStore::at(dir))
    }

    #[test]
    fn add_auto_selects_the_new_record() {
        let mut creds = scratch();
        creds.add("work", "secret-a");
        creds.add("home", "secret-b");
        assert_eq!(creds.active_index(), Some(1));
        assert_eq!(creds.active_secret(), Some("secret-b"));
    }

    #[test]
    fn deleting_active_record_reselects_index_zero() {
        let mut creds = scratch();
        creds.add("a", "s1");
        creds.add("b", "s2");
        creds.add("c", "s3");
        assert_eq!(creds.active_index(), Some(2));

        assert!(creds.delete(2));
        assert_eq!(creds.active_index(), Some(0));
        assert_eq!(creds.active_secret(), Some("s1"));
    }

    #[test]
    fn deleting_before_active_keeps_pointer_on_same_record() {
        let mut creds = scratch();
        creds.add("a", "s1");
        creds.add("b", "s2");
        creds.add("c", "s3");
        creds.select(2);

        assert!(creds.delete(0));
        assert_eq!(creds.active_index(), Some(1));
        assert_eq!(creds.active_secret(), Some("s3"));
    }

    #[test]
    fn deleting_last_record_clears_active_pointer() {
        let mut creds = scratch();
        creds.add("only", "s1");
        assert!(creds.delete(0));
        assert_eq!(creds.active_index(), None);
        assert_eq!(creds.active_secret(), None);
        assert!(creds.is_empty());
    }

    #[test]
    fn duplicate_secrets_under_different_names_are_allowed() {
        let mut creds = scratch();
        creds.add("first", "same-secret");
        creds.add("second", "same-secret");
        assert_eq!(creds.records().len(), 2);
    }

    #[test]
    fn records_survive_a_reload() {
        let dir = std::env::temp_dir().join(format!(
            "prism-credentials-reload-{}",
            uuid::Uuid::new_v4().simple()
        ));
        let mut creds = CredentialStore::open(StateStore::at(dir.clone()));
        creds.add("a", "s1");
        creds.add("b", "s2");
        creds.select(0);
        let created_at = creds.records()[0].created_at;

        let reloaded = CredentialStore::open(StateStore::at(dir.clone()));
        assert_eq!(reloaded.records().len(), 2);
        assert_eq!(reloaded.active_index(), Some(0));
        assert_eq!(reloaded.records()[0].created_at, created_at);
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn mask_hides_the_middle_of_the_secret() {
        assert_eq!(mask_secret("AIzaSyExampleExample1234"), "AIzaSyEx…1234");
        assert_eq!(mask_secret("short"), "………");
    }
}
