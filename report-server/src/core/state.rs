//! Server State
//!
//! Shared handles passed to every handler. Record tables are behind an `Arc`
//! and never change; the widget store is the only mutable component.

use std::sync::Arc;
use std::time::Instant;

use crate::core::Config;
use crate::services::{CampaignService, DashboardService, ReportService};
use crate::store::{RecordStore, WidgetStore};

#[derive(Debug, Clone)]
pub struct ServerState {
    pub config: Config,
    pub reports: ReportService,
    pub campaigns: CampaignService,
    pub dashboard: DashboardService,
    started_at: Instant,
}

impl ServerState {
    /// Build state over the built-in dataset
    pub fn initialize(config: &Config) -> Self {
        Self::with_stores(config, RecordStore::seeded(), WidgetStore::seeded())
    }

    /// Build state over explicit stores
    pub fn with_stores(config: &Config, records: RecordStore, widgets: WidgetStore) -> Self {
        let records = Arc::new(records);
        Self {
            config: config.clone(),
            reports: ReportService::new(records.clone()),
            campaigns: CampaignService::new(records),
            dashboard: DashboardService::new(widgets),
            started_at: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
