//! The aggregate site document and mutation targets.

use serde::{Deserialize, Serialize};

use super::{
    AboutContent, ContactContent, Event, GalleryImage, HeroContent, MenuItem, ReviewPlatform,
    Review,
};

/// The whole-site document. Persisted as one JSON object; every mutation
/// rewrites it in full.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteData {
    pub hero: HeroContent,
    pub about: AboutContent,
    pub menu: Vec<MenuItem>,
    pub events: Vec<Event>,
    pub reviews: Vec<Review>,
    pub gallery: Vec<GalleryImage>,
    pub contact: ContactContent,
    pub review_platforms: Vec<ReviewPlatform>,
}

/// A singleton content section carrying its own `published` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Contact,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }
}

/// An ordered collection of identity-bearing items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Menu,
    Events,
    Reviews,
    Gallery,
    ReviewPlatforms,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Menu => "menu",
            Collection::Events => "events",
            Collection::Reviews => "reviews",
            Collection::Gallery => "gallery",
            Collection::ReviewPlatforms => "reviewPlatforms",
        }
    }
}
