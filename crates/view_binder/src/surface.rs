//! Display surfaces a binder renders into.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard},
};

use shared::domain::TargetId;

/// A set of named text regions. Writes replace the previous text of a target.
pub trait DisplaySurface: Send + Sync {
    fn set_text(&self, target: &TargetId, text: String);
}

/// In-memory surface shared between the binder and whoever reads it.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    texts: Arc<Mutex<BTreeMap<TargetId, String>>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, target: &TargetId) -> Option<String> {
        self.texts().get(target).cloned()
    }

    pub fn snapshot(&self) -> BTreeMap<TargetId, String> {
        self.texts().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.texts().is_empty()
    }

    fn texts(&self) -> MutexGuard<'_, BTreeMap<TargetId, String>> {
        // A panicking writer cannot leave a half-written String behind.
        self.texts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DisplaySurface for MemorySurface {
    fn set_text(&self, target: &TargetId, text: String) {
        self.texts().insert(target.clone(), text);
    }
}
