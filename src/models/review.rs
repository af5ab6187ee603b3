//! Customer review model and partial-update patch.

use serde::{Deserialize, Serialize};

/// Platform a review was sourced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewSource {
    Google,
    Facebook,
    Instagram,
    Openrice,
    Yelp,
    Tripadvisor,
}

impl ReviewSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewSource::Google => "google",
            ReviewSource::Facebook => "facebook",
            ReviewSource::Instagram => "instagram",
            ReviewSource::Openrice => "openrice",
            ReviewSource::Yelp => "yelp",
            ReviewSource::Tripadvisor => "tripadvisor",
        }
    }
}

/// A customer review shown on the public page.
///
/// `rating` is intended to stay in 1..=5 and `likes` non-negative, but neither
/// is enforced here; validation belongs to the editing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub author: String,
    pub rating: u8,
    pub text: String,
    /// Free-form display date, e.g. "Jan 15, 2024".
    pub date: String,
    pub source: ReviewSource,
    pub verified: bool,
    pub likes: i64,
    pub published: bool,
}

/// Partial update for a review.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPatch {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub source: Option<ReviewSource>,
    #[serde(default)]
    pub verified: Option<bool>,
    #[serde(default)]
    pub likes: Option<i64>,
    #[serde(default)]
    pub published: Option<bool>,
}

impl ReviewPatch {
    pub fn apply(&self, review: &mut Review) {
        if let Some(author) = &self.author {
            review.author = author.clone();
        }
        if let Some(rating) = self.rating {
            review.rating = rating;
        }
        if let Some(text) = &self.text {
            review.text = text.clone();
        }
        if let Some(date) = &self.date {
            review.date = date.clone();
        }
        if let Some(source) = self.source {
            review.source = source;
        }
        if let Some(verified) = self.verified {
            review.verified = verified;
        }
        if let Some(likes) = self.likes {
            review.likes = likes;
        }
        if let Some(published) = self.published {
            review.published = published;
        }
    }
}
