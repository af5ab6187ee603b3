//! Hero banner content.

use serde::{Deserialize, Serialize};

/// The hero banner at the top of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub subtitle: String,
    pub title: String,
    pub description: String,
    pub cta_primary: String,
    pub cta_secondary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    pub published: bool,
}
