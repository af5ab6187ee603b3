//! Contact details and opening hours.

use serde::{Deserialize, Serialize};

/// Opening hours split into weekday and weekend lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessHours {
    pub weekday: String,
    pub weekend: String,
}

/// The contact section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactContent {
    pub address: String,
    pub phone: String,
    pub email: String,
    pub business_hours: BusinessHours,
    /// Persisted key is `nearbyMTR`, not the camelCase `nearbyMtr`.
    #[serde(rename = "nearbyMTR")]
    pub nearby_mtr: String,
    pub nearby_parking: String,
    /// Facebook page handle without the scheme, e.g. `www.facebook.com/...`.
    pub facebook: String,
    pub published: bool,
}
