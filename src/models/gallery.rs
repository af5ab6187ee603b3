//! Gallery image model and partial-update patch.

use serde::{Deserialize, Serialize};

/// Gallery filter tabs on the public page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryCategory {
    Interior,
    Food,
    Team,
    Events,
}

impl GalleryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryCategory::Interior => "interior",
            GalleryCategory::Food => "food",
            GalleryCategory::Team => "team",
            GalleryCategory::Events => "events",
        }
    }
}

/// A photo in the gallery section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: String,
    pub src: String,
    pub alt: String,
    pub category: GalleryCategory,
    pub published: bool,
}

/// Partial update for a gallery image.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImagePatch {
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub category: Option<GalleryCategory>,
    #[serde(default)]
    pub published: Option<bool>,
}

impl GalleryImagePatch {
    pub fn apply(&self, image: &mut GalleryImage) {
        if let Some(src) = &self.src {
            image.src = src.clone();
        }
        if let Some(alt) = &self.alt {
            image.alt = alt.clone();
        }
        if let Some(category) = self.category {
            image.category = category;
        }
        if let Some(published) = self.published {
            image.published = published;
        }
    }
}
