//! Dashboard widget configuration payloads

use serde::{Deserialize, Serialize};

/// Body of `PUT /dashboard/widgets`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetUpdateRequest {
    /// Ordered widget names; replaces the current configuration wholesale
    pub widgets: Vec<String>,
}
