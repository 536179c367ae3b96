//! Dashboard widget configuration store
//!
//! The only mutable state of the service. Each user maps to an ordered list
//! of widget names; writers replace the whole list under a write lock, so a
//! reader sees either the old list or the new one.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::{StoreError, StoreResult};

/// User whose configuration the dashboard endpoints operate on
pub const DEFAULT_USER: &str = "user_1";

/// Widget list restored by reset
pub const DEFAULT_WIDGETS: [&str; 2] = ["sales_chart", "impact_map"];

/// Configuration present at startup
const SEED_WIDGETS: [&str; 3] = ["sales_chart", "impact_map", "alerts_panel"];

#[derive(Debug, Clone, Default)]
pub struct WidgetStore {
    configs: Arc<RwLock<HashMap<String, Vec<String>>>>,
}

impl WidgetStore {
    /// Empty store: every user is unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with the startup configuration for [`DEFAULT_USER`]
    pub fn seeded() -> Self {
        let store = Self::new();
        store.configs.write().insert(
            DEFAULT_USER.to_string(),
            SEED_WIDGETS.iter().map(|w| w.to_string()).collect(),
        );
        store
    }

    /// Current widget list of a user
    pub fn get(&self, user: &str) -> StoreResult<Vec<String>> {
        self.configs
            .read()
            .get(user)
            .cloned()
            .ok_or_else(|| StoreError::WidgetsUnset(user.to_string()))
    }

    /// Replace a user's widget list wholesale
    pub fn replace(&self, user: &str, widgets: Vec<String>) -> StoreResult<()> {
        if widgets.is_empty() {
            return Err(StoreError::EmptyWidgetList);
        }
        self.configs.write().insert(user.to_string(), widgets);
        Ok(())
    }

    /// Restore a user's widget list to [`DEFAULT_WIDGETS`]
    pub fn reset(&self, user: &str) {
        self.configs.write().insert(
            user.to_string(),
            DEFAULT_WIDGETS.iter().map(|w| w.to_string()).collect(),
        );
    }
}
