//! Campaign Summary Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Campaign lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Finished,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status string matches no [`CampaignStatus`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown campaign status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for CampaignStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

/// Summary row for the campaign list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignSummary {
    pub id: u32,
    pub name: String,
    pub budget: f64,
    pub status: CampaignStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub city: String,
}

impl CampaignSummary {
    /// Case-insensitive city equality
    pub fn in_city(&self, city: &str) -> bool {
        self.city.to_lowercase() == city.trim().to_lowercase()
    }

    /// Case-insensitive status equality against a raw filter value.
    ///
    /// A value naming no known status matches nothing.
    pub fn has_status(&self, status: &str) -> bool {
        status
            .parse::<CampaignStatus>()
            .is_ok_and(|s| s == self.status)
    }
}

/// Download descriptor returned by the campaign export endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDescriptor {
    pub file: String,
}

impl ExportDescriptor {
    pub fn for_campaign(id: u32) -> Self {
        Self {
            file: format!("campaign_{}_data.csv", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(city: &str, status: CampaignStatus) -> CampaignSummary {
        CampaignSummary {
            id: 1,
            name: "Winter".to_string(),
            budget: 12000.0,
            status,
            start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 7, 15).unwrap(),
            city: city.to_string(),
        }
    }

    #[test]
    fn test_status_parse_case_insensitive() {
        assert_eq!("ACTIVE".parse::<CampaignStatus>(), Ok(CampaignStatus::Active));
        assert_eq!(" Finished ".parse::<CampaignStatus>(), Ok(CampaignStatus::Finished));
        assert!("paused".parse::<CampaignStatus>().is_err());
    }

    #[test]
    fn test_filters() {
        let s = summary("Santiago", CampaignStatus::Active);
        assert!(s.in_city("santiago"));
        assert!(s.in_city("SANTIAGO"));
        assert!(!s.in_city("Lima"));
        assert!(s.has_status("Active"));
        assert!(!s.has_status("finished"));
        assert!(!s.has_status("unknown"));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_value(summary("Lima", CampaignStatus::Finished)).unwrap();
        assert_eq!(json["status"], "finished");
        assert_eq!(json["start_date"], "2025-06-01");
    }

    #[test]
    fn test_export_descriptor() {
        assert_eq!(ExportDescriptor::for_campaign(7).file, "campaign_7_data.csv");
    }
}
