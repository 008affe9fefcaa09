//! Favorite Set
//!
//! Membership of favorited item ids plus best-effort persistence through a
//! `FavoriteStorage` backend.

use crate::error::AppError;

/// Key-value slot the favorite ids are persisted in
pub trait FavoriteStorage {
    fn read(&self, key: &str) -> Result<Option<String>, AppError>;
    fn write(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// Favorited ids in insertion order, without duplicates
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: Vec<u32>,
}

impl FavoriteSet {
    /// Parse a stored JSON array. Anything unreadable yields an empty set.
    pub fn from_json(raw: Option<&str>) -> Self {
        let parsed = raw
            .map(|s| serde_json::from_str::<Option<Vec<u32>>>(s))
            .and_then(Result::ok)
            .flatten()
            .unwrap_or_default();
        let mut set = Self::default();
        for id in parsed {
            if !set.contains(id) {
                set.ids.push(id);
            }
        }
        set
    }

    pub fn to_json(&self) -> String {
        // A Vec<u32> always serializes
        serde_json::to_string(&self.ids).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Flip membership of `id`; returns the new membership
    pub fn toggle(&mut self, id: u32) -> bool {
        if let Some(pos) = self.ids.iter().position(|&x| x == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Loads and persists the favorite set under a fixed key
pub struct FavoriteManager<S: FavoriteStorage> {
    storage: S,
    key: String,
}

impl<S: FavoriteStorage> FavoriteManager<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    /// Read the persisted set once at startup
    pub fn load(&self) -> FavoriteSet {
        match self.storage.read(&self.key) {
            Ok(raw) => {
                let set = FavoriteSet::from_json(raw.as_deref());
                if set.is_empty() {
                    log::debug!("[FAVORITES] No saved favorites");
                } else {
                    log::debug!("[FAVORITES] Loaded {} favorites: {:?}", set.len(), set.ids());
                }
                set
            }
            Err(e) => {
                log::warn!("[FAVORITES] Could not read favorites: {}", e);
                FavoriteSet::default()
            }
        }
    }

    /// Toggle `id` and write the full set back; returns the new membership
    pub fn toggle(&self, set: &mut FavoriteSet, id: u32) -> bool {
        let now_favorite = set.toggle(id);
        if let Err(e) = self.storage.write(&self.key, &set.to_json()) {
            log::warn!("[FAVORITES] Could not persist favorites: {}", e);
        }
        now_favorite
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    pub struct MemoryStorage {
        pub slots: RefCell<HashMap<String, String>>,
        pub fail_writes: bool,
    }

    impl FavoriteStorage for MemoryStorage {
        fn read(&self, key: &str) -> Result<Option<String>, AppError> {
            Ok(self.slots.borrow().get(key).cloned())
        }

        fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
            if self.fail_writes {
                return Err(AppError::Storage("quota exceeded".into()));
            }
            self.slots.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    struct BrokenStorage;

    impl FavoriteStorage for BrokenStorage {
        fn read(&self, _key: &str) -> Result<Option<String>, AppError> {
            Err(AppError::StorageUnavailable)
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), AppError> {
            Err(AppError::StorageUnavailable)
        }
    }

    #[test]
    fn test_toggle_parity() {
        let mut set = FavoriteSet::default();
        let sequence = [1, 2, 1, 3, 1, 2, 2, 2, 4];
        for id in sequence {
            set.toggle(id);
        }
        for id in 1..=4u32 {
            let count = sequence.iter().filter(|&&x| x == id).count();
            assert_eq!(set.contains(id), count % 2 == 1, "id {}", id);
        }
    }

    #[test]
    fn test_from_json_tolerates_garbage() {
        assert!(FavoriteSet::from_json(None).is_empty());
        assert!(FavoriteSet::from_json(Some("")).is_empty());
        assert!(FavoriteSet::from_json(Some("null")).is_empty());
        assert!(FavoriteSet::from_json(Some("{oops")).is_empty());
        assert!(FavoriteSet::from_json(Some("[1, -2]")).is_empty());
        assert!(FavoriteSet::from_json(Some(r#"["a"]"#)).is_empty());
    }

    #[test]
    fn test_from_json_collapses_duplicates() {
        let set = FavoriteSet::from_json(Some("[3, 1, 3, 1, 2]"));
        assert_eq!(set.ids(), &[3, 1, 2]);
    }

    #[test]
    fn test_round_trip_membership() {
        let mut set = FavoriteSet::default();
        for id in [9, 4, 7] {
            set.toggle(id);
        }
        let restored = FavoriteSet::from_json(Some(&set.to_json()));
        for id in 0..10 {
            assert_eq!(restored.contains(id), set.contains(id));
        }
        assert_eq!(restored.len(), 3);
    }

    #[test]
    fn test_manager_persists_each_toggle() {
        let manager = FavoriteManager::new(MemoryStorage::default(), "favs");
        let mut set = manager.load();
        assert!(set.is_empty());

        assert!(manager.toggle(&mut set, 2));
        assert_eq!(manager.storage.read("favs").unwrap().as_deref(), Some("[2]"));
        assert!(!manager.toggle(&mut set, 2));
        assert_eq!(manager.storage.read("favs").unwrap().as_deref(), Some("[]"));

        manager.toggle(&mut set, 5);
        assert_eq!(manager.load(), set);
    }

    #[test]
    fn test_manager_write_failure_is_swallowed() {
        let storage = MemoryStorage { fail_writes: true, ..Default::default() };
        let manager = FavoriteManager::new(storage, "favs");
        let mut set = FavoriteSet::default();
        assert!(manager.toggle(&mut set, 1));
        assert!(set.contains(1));
    }

    #[test]
    fn test_manager_unavailable_storage_loads_empty() {
        let manager = FavoriteManager::new(BrokenStorage, "favs");
        let mut set = manager.load();
        assert!(set.is_empty());
        manager.toggle(&mut set, 8);
        assert!(set.contains(8));
    }
}
