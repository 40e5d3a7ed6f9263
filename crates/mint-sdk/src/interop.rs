//! Process-wide view of the active build configuration
//!
//! Host code outside a [`crate::ConfigurationStore`] can read the active root
//! and configuration from here without holding the store. Only stores built
//! with [`crate::ConfigurationStore::publishing`] write to it.

use std::sync::{Arc, PoisonError, RwLock};

use crate::config::BuildConfiguration;

#[derive(Debug)]
struct Published {
    root: String,
    configuration: Arc<BuildConfiguration>,
}

static ACTIVE: RwLock<Option<Published>> = RwLock::new(None);

/// Record `root` and `configuration` as the active pair.
pub fn publish(root: &str, configuration: Arc<BuildConfiguration>) {
    let mut active = ACTIVE.write().unwrap_or_else(PoisonError::into_inner);
    *active = Some(Published {
        root: root.to_string(),
        configuration,
    });
}

/// The most recently published root.
pub fn active_root() -> Option<String> {
    let active = ACTIVE.read().unwrap_or_else(PoisonError::into_inner);
    active.as_ref().map(|p| p.root.clone())
}

/// The most recently published configuration.
pub fn active_configuration() -> Option<Arc<BuildConfiguration>> {
    let active = ACTIVE.read().unwrap_or_else(PoisonError::into_inner);
    active.as_ref().map(|p| Arc::clone(&p.configuration))
}

/// Forget the published pair.
pub fn clear() {
    let mut active = ACTIVE.write().unwrap_or_else(PoisonError::into_inner);
    *active = None;
}
