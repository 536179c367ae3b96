//! Service layer - query pipelines over the record store
//!
//! - [`ReportService`] - expense and investment reports
//! - [`CampaignService`] - per-campaign lists, sales and summaries
//! - [`DashboardService`] - widget configuration and catalogs

pub mod aggregate;
pub mod campaign_service;
pub mod dashboard_service;
pub mod report_service;

pub use campaign_service::CampaignService;
pub use dashboard_service::DashboardService;
pub use report_service::ReportService;
