//! Read-side filtering for the public page and the admin dashboard.
//!
//! One rule everywhere: an unpublished singleton renders nothing, and a
//! collection renders only its published elements in stored order. Category
//! tabs filter after the publish filter, never before.

use crate::models::{
    AboutContent, Collection, ContactContent, Event, GalleryCategory, GalleryImage, HeroContent,
    MenuCategory, MenuItem, ReviewPlatform, Review, SiteData,
};

/// Booking engine destination used by the reserve call-to-action buttons.
pub const BOOKING_URL: &str = "https://book.bistrochat.com/ole";

/// Map link on the contact section.
pub const MAPS_URL: &str =
    "https://maps.google.com/?q=Shun+Ho+Tower+Ice+House+Street+Central+Hong+Kong";

/// Category tab selection for menu and gallery sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C: PartialEq> CategoryFilter<C> {
    fn matches(&self, category: &C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

/// The hero section, or `None` when unpublished.
pub fn hero(data: &SiteData) -> Option<&HeroContent> {
    data.hero.published.then_some(&data.hero)
}

/// The about section, or `None` when unpublished.
pub fn about(data: &SiteData) -> Option<&AboutContent> {
    data.about.published.then_some(&data.about)
}

/// The contact section, or `None` when unpublished.
pub fn contact(data: &SiteData) -> Option<&ContactContent> {
    data.contact.published.then_some(&data.contact)
}

/// Published menu items in stored order, optionally narrowed to one category.
pub fn menu_items(
    data: &SiteData,
    filter: CategoryFilter<MenuCategory>,
) -> Vec<&MenuItem> {
    data.menu
        .iter()
        .filter(|item| item.published)
        .filter(|item| filter.matches(&item.category))
        .collect()
}

/// Published gallery images in stored order, optionally narrowed to one tab.
pub fn gallery_images(
    data: &SiteData,
    filter: CategoryFilter<GalleryCategory>,
) -> Vec<&GalleryImage> {
    data.gallery
        .iter()
        .filter(|image| image.published)
        .filter(|image| filter.matches(&image.category))
        .collect()
}

/// Published events in stored order.
pub fn events(data: &SiteData) -> Vec<&Event> {
    data.events.iter().filter(|e| e.published).collect()
}

/// Published reviews in stored order.
pub fn reviews(data: &SiteData) -> Vec<&Review> {
    data.reviews.iter().filter(|r| r.published).collect()
}

/// Published review platform links in stored order.
pub fn review_platforms(data: &SiteData) -> Vec<&ReviewPlatform> {
    data.review_platforms
        .iter()
        .filter(|p| p.published)
        .collect()
}

/// Total and published element counts for one collection, as shown on the
/// admin dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionCounts {
    pub total: usize,
    pub published: usize,
}

/// Count a collection's elements and how many of them are published.
pub fn collection_counts(data: &SiteData, collection: Collection) -> CollectionCounts {
    fn counts<T>(items: &[T], published: impl Fn(&T) -> bool) -> CollectionCounts {
        CollectionCounts {
            total: items.len(),
            published: items.iter().filter(|i| published(i)).count(),
        }
    }

    match collection {
        Collection::Menu => counts(&data.menu, |m| m.published),
        Collection::Events => counts(&data.events, |e| e.published),
        Collection::Reviews => counts(&data.reviews, |r| r.published),
        Collection::Gallery => counts(&data.gallery, |g| g.published),
        Collection::ReviewPlatforms => counts(&data.review_platforms, |p| p.published),
    }
}

/// Outbound Facebook link built from the stored handle.
pub fn facebook_url(contact: &ContactContent) -> String {
    format!("https://{}", contact.facebook)
}
