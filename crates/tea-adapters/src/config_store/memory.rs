//! In-memory configuration store for tests.

use std::sync::{Arc, RwLock};

use tea_core::{
    application::{ApplicationError, ports::ConfigStore},
    domain::Config,
    error::TeaResult,
};

/// Same seeding semantics as the file store, without touching disk.
#[derive(Debug, Clone)]
pub struct InMemoryConfigStore {
    inner: Arc<RwLock<Option<Config>>>,
    defaults: Config,
}

impl InMemoryConfigStore {
    pub fn new(defaults: Config) -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
            defaults,
        }
    }

    /// `true` once something has been persisted.
    pub fn is_seeded(&self) -> bool {
        self.inner.read().map(|c| c.is_some()).unwrap_or(false)
    }
}

fn poisoned() -> ApplicationError {
    ApplicationError::StoreLockError {
        reason: "config store lock poisoned".into(),
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn load(&self) -> TeaResult<Config> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        Ok(inner.get_or_insert_with(|| self.defaults.clone()).clone())
    }

    fn save(&self, config: &Config) -> TeaResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        *inner = Some(config.clone());
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use tea_core::domain::ConfigKey;

    use super::*;

    #[test]
    fn load_seeds_once() {
        let store = InMemoryConfigStore::new(Config::seeded("/p"));
        assert!(!store.is_seeded());

        let first = store.load().unwrap();
        assert!(store.is_seeded());
        assert_eq!(first, store.load().unwrap());
    }

    #[test]
    fn provided_set_goes_through_load_and_save() {
        let store = InMemoryConfigStore::new(Config::seeded("/p"));
        store.set(ConfigKey::Language, "es").unwrap();

        let config = store.load().unwrap();
        assert_eq!(config.get(ConfigKey::Language, ""), "es");
        assert_eq!(config.get(ConfigKey::ProjectsDirectory, ""), "/p");
    }
}
