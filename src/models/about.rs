//! About section content.

use serde::{Deserialize, Serialize};

/// Headline numbers shown under the about text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutStats {
    pub chefs: i64,
    pub wines: i64,
    pub guests: i64,
    pub dishes: i64,
}

/// The about/story section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub subtitle: String,
    pub title: String,
    pub paragraph1: String,
    pub paragraph2: String,
    pub chef_quote: String,
    pub chef_name: String,
    pub stats: AboutStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub published: bool,
}
