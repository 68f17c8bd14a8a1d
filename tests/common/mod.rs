//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;

use parking_lot::Mutex;
use qa_header::header::{PageContext, TopMenu, TopMenuDeps, TopMenuOptions};
use qa_header::session::{Navigator, SessionPayload, SessionStore, SessionUser};
use qa_header::storage::{KeyValueStore, MemoryStorage, StorageError, PROFILE_KEY};
use qa_header::view::{RootClassList, Viewport};

/// Navigator that remembers every route it was asked to open.
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes.lock().push(route.to_string());
    }
}

/// Storage that fails every operation, like a browser with storage disabled.
pub struct UnavailableStorage;

impl KeyValueStore for UnavailableStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("disabled".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disabled".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disabled".to_string()))
    }
}

pub fn ada() -> SessionUser {
    SessionUser {
        id: "u1".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        saved_questions: vec!["q1".to_string()],
        ..Default::default()
    }
}

pub fn ada_profile_json() -> String {
    serde_json::to_string(&SessionPayload::new(ada())).unwrap()
}

/// Everything a mounted header talks to, kept around for assertions.
pub struct Harness {
    pub storage: Arc<dyn KeyValueStore>,
    pub session: SessionStore,
    pub navigator: Arc<RecordingNavigator>,
    pub root: Arc<RootClassList>,
    pub viewport: Viewport,
}

impl Harness {
    pub fn new(storage: Arc<dyn KeyValueStore>, width: u32) -> Self {
        Self {
            storage,
            session: SessionStore::new(),
            navigator: Arc::new(RecordingNavigator::default()),
            root: Arc::new(RootClassList::new()),
            viewport: Viewport::new(width),
        }
    }

    pub fn with_memory(entries: &[(&str, &str)], width: u32) -> (Self, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::with_entries(entries.iter().copied()));
        (Self::new(storage.clone(), width), storage)
    }

    pub fn menu(&self, page: &str, from: &str) -> TopMenu {
        TopMenu::new(
            PageContext::new(page, from),
            TopMenuDeps {
                storage: Arc::clone(&self.storage),
                session: self.session.clone(),
                navigator: self.navigator.clone(),
                theme_target: self.root.clone(),
                viewport: self.viewport.clone(),
            },
            TopMenuOptions::default(),
        )
    }
}
