//! Investment report rows (per location, map, chart, breakdowns)

use serde::{Deserialize, Serialize};

/// Investment and performance of a campaign in one city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationInvestment {
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub investment: f64,
    pub clicks: u64,
    pub roi: f64,
}

/// Geo-located investment point for the investment map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapPoint {
    pub lat: f64,
    pub lon: f64,
    pub city: String,
    pub total_investment: f64,
    pub clicks: u64,
    pub roi: f64,
}

/// One point of a metric chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// X-axis label (usually an ISO date)
    pub label: String,
    pub value: f64,
}

/// Campaign investment split by locality
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalityInvestment {
    pub locality: String,
    pub amount: f64,
}

/// Campaign investment split by advertising product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInvestment {
    pub product: String,
    pub amount: f64,
}
