//! Dashboard Service - widget configuration and catalogs

use crate::store::{CHART_TYPES, DATA_SOURCES, DEFAULT_USER, WidgetStore};
use crate::utils::AppResult;

#[derive(Debug, Clone)]
pub struct DashboardService {
    widgets: WidgetStore,
}

impl DashboardService {
    pub fn new(widgets: WidgetStore) -> Self {
        Self { widgets }
    }

    /// Current widget list; `WidgetsNotConfigured` while unset
    pub fn widgets(&self) -> AppResult<Vec<String>> {
        Ok(self.widgets.get(DEFAULT_USER)?)
    }

    /// Replace the widget list; an empty list is rejected
    pub fn save_widgets(&self, widgets: Vec<String>) -> AppResult<()> {
        let count = widgets.len();
        self.widgets.replace(DEFAULT_USER, widgets)?;
        tracing::info!(user = DEFAULT_USER, count, "Widget configuration saved");
        Ok(())
    }

    pub fn reset_widgets(&self) {
        self.widgets.reset(DEFAULT_USER);
        tracing::info!(user = DEFAULT_USER, "Widget configuration reset to defaults");
    }

    pub fn data_sources(&self) -> Vec<String> {
        DATA_SOURCES.iter().map(|s| s.to_string()).collect()
    }

    pub fn chart_types(&self) -> Vec<String> {
        CHART_TYPES.iter().map(|s| s.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DEFAULT_WIDGETS;
    use shared::error::ErrorCode;

    #[test]
    fn test_unset_widgets_not_found() {
        let svc = DashboardService::new(WidgetStore::new());
        let err = svc.widgets().unwrap_err();
        assert_eq!(err.code, ErrorCode::WidgetsNotConfigured);
        assert_eq!(err.http_status(), http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_save_replace_reset() {
        let svc = DashboardService::new(WidgetStore::seeded());
        svc.save_widgets(vec!["a".into(), "b".into()]).unwrap();
        assert_eq!(svc.widgets().unwrap(), vec!["a", "b"]);

        svc.reset_widgets();
        assert_eq!(svc.widgets().unwrap(), DEFAULT_WIDGETS.to_vec());
    }

    #[test]
    fn test_save_empty_rejected() {
        let svc = DashboardService::new(WidgetStore::seeded());
        let err = svc.save_widgets(Vec::new()).unwrap_err();
        assert_eq!(err.code, ErrorCode::WidgetListEmpty);
    }

    #[test]
    fn test_catalogs() {
        let svc = DashboardService::new(WidgetStore::new());
        assert_eq!(svc.data_sources().len(), 5);
        assert!(svc.chart_types().contains(&"radar".to_string()));
    }
}
