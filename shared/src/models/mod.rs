//! Domain models for campaign analytics

pub mod campaign;
pub mod dashboard;
pub mod investment;
pub mod key;
pub mod record;
pub mod report;

pub use campaign::{CampaignStatus, CampaignSummary, ExportDescriptor, UnknownStatus};
pub use dashboard::WidgetUpdateRequest;
pub use investment::{
    ChartPoint, LocalityInvestment, LocationInvestment, MapPoint, ProductInvestment,
};
pub use key::{CampaignId, CostKind, EmptyKey, LocalityKey};
pub use record::{CouponRecord, DatedRecord, ExpenseRecord, InvestmentRecord, SaleRecord};
pub use report::AggregateResult;
