//! Review platform link model and partial-update patch.

use serde::{Deserialize, Serialize};

/// An outbound link to a review platform, with its aggregate rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPlatform {
    pub id: String,
    pub name: String,
    pub url: String,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<i64>,
    pub published: bool,
}

/// Partial update for a review platform link.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPlatformPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<i64>,
    #[serde(default)]
    pub published: Option<bool>,
}

impl ReviewPlatformPatch {
    pub fn apply(&self, platform: &mut ReviewPlatform) {
        if let Some(name) = &self.name {
            platform.name = name.clone();
        }
        if let Some(url) = &self.url {
            platform.url = url.clone();
        }
        if let Some(icon) = &self.icon {
            platform.icon = icon.clone();
        }
        if let Some(rating) = self.rating {
            platform.rating = Some(rating);
        }
        if let Some(review_count) = self.review_count {
            platform.review_count = Some(review_count);
        }
        if let Some(published) = self.published {
            platform.published = published;
        }
    }
}
