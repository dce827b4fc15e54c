use std::path::Path;

use folio_core::profile::{FreelancerRecord, UserRecord};

use crate::prelude::*;

/// Read access to the `users` and `freelancers` collections.
pub trait ProfileStore {
    async fn find_user(&self, user_id: &str) -> Result<Option<UserRecord>>;
    async fn find_freelancer(&self, user_id: &str) -> Result<Option<FreelancerRecord>>;
}

#[derive(Debug, Default, serde::Deserialize)]
struct StoreFile {
    #[serde(default)]
    users: Vec<UserRecord>,
    #[serde(default)]
    freelancers: Vec<FreelancerRecord>,
}

/// Profile store backed by a JSON file shaped
/// `{ "users": [...], "freelancers": [...] }`.
#[derive(Debug, Default)]
pub struct JsonFileStore {
    users: Vec<UserRecord>,
    freelancers: Vec<FreelancerRecord>,
}

impl JsonFileStore {
    pub fn open(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile store {}", path.display()))?;
        let store = Self::from_json(&text)
            .map_err(|e| Error::Store(format!("{}: {}", path.display(), e)))?;

        log::debug!(
            "Loaded {} users and {} freelancers from {}",
            store.users.len(),
            store.freelancers.len(),
            path.display()
        );

        Ok(store)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let file: StoreFile = serde_json::from_str(text)?;
        Ok(Self {
            users: file.users,
            freelancers: file.freelancers,
        })
    }
}

fn same_id(stored: Option<&str>, wanted: &str) -> bool {
    stored.is_some_and(|id| id.trim().eq_ignore_ascii_case(wanted.trim()))
}

impl ProfileStore for JsonFileStore {
    async fn find_user(&self, user_id: &str) -> Result<Option<UserRecord>> {
        Ok(self
            .users
            .iter()
            .find(|u| same_id(u.id.as_deref(), user_id))
            .cloned())
    }

    async fn find_freelancer(&self, user_id: &str) -> Result<Option<FreelancerRecord>> {
        Ok(self
            .freelancers
            .iter()
            .find(|f| same_id(f.user_id.as_deref(), user_id))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const STORE: &str = r#"{
        "users": [
            { "_id": "66c5e449ebeefff23d264ead", "first_name": "Ada", "last_name": "Lovelace" }
        ],
        "freelancers": [
            { "user_id": "66c5e449ebeefff23d264ead", "skills": ["Logos"], "tools": ["Figma"] },
            { "user_id": "000000000000000000000001", "name": "orphan" }
        ]
    }"#;

    #[tokio::test]
    async fn test_find_records() {
        let store = JsonFileStore::from_json(STORE).unwrap();

        let user = store.find_user("66c5e449ebeefff23d264ead").await.unwrap();
        assert_eq!(user.unwrap().first_name.as_deref(), Some("Ada"));

        let freelancer = store
            .find_freelancer("66C5E449EBEEFFF23D264EAD")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(freelancer.declared_items(), vec!["Logos", "Figma"]);

        assert!(store
            .find_user("000000000000000000000001")
            .await
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let store = JsonFileStore::from_json("{}").unwrap();
        assert!(store.users.is_empty());
        assert!(store.freelancers.is_empty());
    }

    #[test]
    fn test_open_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", STORE).unwrap();

        let store = JsonFileStore::open(file.path()).unwrap();
        assert_eq!(store.users.len(), 1);
        assert_eq!(store.freelancers.len(), 2);
    }

    #[test]
    fn test_open_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[not json").unwrap();
        assert!(JsonFileStore::open(file.path()).is_err());
    }
}
