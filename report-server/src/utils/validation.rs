//! Query parameter validation helpers

use shared::models::{CampaignId, CostKind, LocalityKey};

use super::{AppError, AppResult};

/// Require a parameter to be present and non-blank
pub fn require<'a>(field: &str, value: Option<&'a str>) -> AppResult<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::required_field(field)),
    }
}

/// Parse a required campaign id parameter
pub fn campaign_id(value: Option<&str>) -> AppResult<CampaignId> {
    let raw = require("campaign_id", value)?;
    raw.parse().map_err(|_| {
        AppError::invalid_format(
            "campaign_id",
            format!("campaign_id must be a positive integer, got {raw}"),
        )
    })
}

/// Parse a required locality parameter
pub fn locality_key(value: Option<&str>) -> AppResult<LocalityKey> {
    LocalityKey::new(require("locality", value)?)
        .map_err(|_| AppError::required_field("locality"))
}

/// Parse a required cost kind parameter
pub fn cost_kind(value: Option<&str>) -> AppResult<CostKind> {
    CostKind::new(require("cost", value)?).map_err(|_| AppError::required_field("cost"))
}
