//! Content store: single source of truth for the site document.
//!
//! Every mutation replaces the relevant slice of the in-memory document and
//! synchronously rewrites the whole document to storage. There are no partial
//! writes and no debouncing; one mutation means one write.

use std::sync::Arc;

use crate::errors::StoreError;
use crate::models::{
    AboutContent, Collection, ContactContent, Event, EventPatch, GalleryImage, GalleryImagePatch,
    HeroContent, MenuItem, MenuItemPatch, ReviewPlatform, ReviewPlatformPatch, Review,
    ReviewPatch, Section, SiteData,
};
use crate::seed;
use crate::storage::{Storage, CONTENT_KEY};

/// Store for the whole-site content document.
pub struct ContentStore {
    storage: Arc<dyn Storage>,
    data: SiteData,
}

impl ContentStore {
    /// Load the persisted document, or fall back to the bundled seed.
    ///
    /// A document that is present but unparsable counts as absent; the store
    /// never propagates a parse error from old data. The resulting document is
    /// written back immediately so storage and memory agree from the start.
    pub fn new(storage: Arc<dyn Storage>) -> Result<Self, StoreError> {
        let data = match storage.get(CONTENT_KEY) {
            Some(raw) => match serde_json::from_str::<SiteData>(&raw) {
                Ok(data) => data,
                Err(e) => {
                    tracing::warn!("Persisted content is unparsable, reseeding: {}", e);
                    seed::default_site_data()
                }
            },
            None => {
                tracing::info!("No persisted content found, seeding defaults");
                seed::default_site_data()
            }
        };

        let store = Self { storage, data };
        store.persist()?;
        Ok(store)
    }

    /// The current document.
    pub fn data(&self) -> &SiteData {
        &self.data
    }

    /// Serialize the full document and write it under the content key.
    fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.data)?;
        self.storage.set(CONTENT_KEY, &json)
    }

    // ==================== SINGLETON SECTIONS ====================

    /// Replace the hero section wholesale.
    pub fn update_hero(&mut self, hero: HeroContent) -> Result<(), StoreError> {
        self.data.hero = hero;
        self.persist()
    }

    /// Replace the about section wholesale.
    pub fn update_about(&mut self, about: AboutContent) -> Result<(), StoreError> {
        self.data.about = about;
        self.persist()
    }

    /// Replace the contact section wholesale.
    pub fn update_contact(&mut self, contact: ContactContent) -> Result<(), StoreError> {
        self.data.contact = contact;
        self.persist()
    }

    // ==================== MENU OPERATIONS ====================

    /// Append a menu item. Rejects an id already present in the menu.
    pub fn add_menu_item(&mut self, item: MenuItem) -> Result<(), StoreError> {
        if self.data.menu.iter().any(|m| m.id == item.id) {
            return Err(StoreError::DuplicateId {
                collection: "menu",
                id: item.id,
            });
        }
        self.data.menu.push(item);
        self.persist()
    }

    /// Merge `patch` into the menu item with `id`. No-op if the id is absent.
    pub fn update_menu_item(&mut self, id: &str, patch: &MenuItemPatch) -> Result<(), StoreError> {
        match self.data.menu.iter_mut().find(|m| m.id == id) {
            Some(item) => {
                patch.apply(item);
                self.persist()
            }
            None => Ok(()),
        }
    }

    /// Remove the menu item with `id`. No-op if the id is absent.
    pub fn delete_menu_item(&mut self, id: &str) -> Result<(), StoreError> {
        match self.data.menu.iter().position(|m| m.id == id) {
            Some(idx) => {
                self.data.menu.remove(idx);
                self.persist()
            }
            None => Ok(()),
        }
    }

    // ==================== EVENT OPERATIONS ====================

    pub fn add_event(&mut self, event: Event) -> Result<(), StoreError> {
        if self.data.events.iter().any(|e| e.id == event.id) {
            return Err(StoreError::DuplicateId {
                collection: "events",
                id: event.id,
            });
        }
        self.data.events.push(event);
        self.persist()
    }

    pub fn update_event(&mut self, id: &str, patch: &EventPatch) -> Result<(), StoreError> {
        match self.data.events.iter_mut().find(|e| e.id == id) {
            Some(event) => {
                patch.apply(event);
                self.persist()
            }
            None => Ok(()),
        }
    }

    pub fn delete_event(&mut self, id: &str) -> Result<(), StoreError> {
        match self.data.events.iter().position(|e| e.id == id) {
            Some(idx) => {
                self.data.events.remove(idx);
                self.persist()
            }
            None => Ok(()),
        }
    }

    // ==================== REVIEW OPERATIONS ====================

    pub fn add_review(&mut self, review: Review) -> Result<(), StoreError> {
        if self.data.reviews.iter().any(|r| r.id == review.id) {
            return Err(StoreError::DuplicateId {
                collection: "reviews",
                id: review.id,
            });
        }
        self.data.reviews.push(review);
        self.persist()
    }

    pub fn update_review(&mut self, id: &str, patch: &ReviewPatch) -> Result<(), StoreError> {
        match self.data.reviews.iter_mut().find(|r| r.id == id) {
            Some(review) => {
                patch.apply(review);
                self.persist()
            }
            None => Ok(()),
        }
    }

    pub fn delete_review(&mut self, id: &str) -> Result<(), StoreError> {
        match self.data.reviews.iter().position(|r| r.id == id) {
            Some(idx) => {
                self.data.reviews.remove(idx);
                self.persist()
            }
            None => Ok(()),
        }
    }

    // ==================== GALLERY OPERATIONS ====================

    pub fn add_gallery_image(&mut self, image: GalleryImage) -> Result<(), StoreError> {
        if self.data.gallery.iter().any(|g| g.id == image.id) {
            return Err(StoreError::DuplicateId {
                collection: "gallery",
                id: image.id,
            });
        }
        self.data.gallery.push(image);
        self.persist()
    }

    pub fn update_gallery_image(
        &mut self,
        id: &str,
        patch: &GalleryImagePatch,
    ) -> Result<(), StoreError> {
        match self.data.gallery.iter_mut().find(|g| g.id == id) {
            Some(image) => {
                patch.apply(image);
                self.persist()
            }
            None => Ok(()),
        }
    }

    pub fn delete_gallery_image(&mut self, id: &str) -> Result<(), StoreError> {
        match self.data.gallery.iter().position(|g| g.id == id) {
            Some(idx) => {
                self.data.gallery.remove(idx);
                self.persist()
            }
            None => Ok(()),
        }
    }

    // ==================== REVIEW PLATFORM OPERATIONS ====================

    pub fn add_review_platform(&mut self, platform: ReviewPlatform) -> Result<(), StoreError> {
        if self.data.review_platforms.iter().any(|p| p.id == platform.id) {
            return Err(StoreError::DuplicateId {
                collection: "reviewPlatforms",
                id: platform.id,
            });
        }
        self.data.review_platforms.push(platform);
        self.persist()
    }

    pub fn update_review_platform(
        &mut self,
        id: &str,
        patch: &ReviewPlatformPatch,
    ) -> Result<(), StoreError> {
        match self.data.review_platforms.iter_mut().find(|p| p.id == id) {
            Some(platform) => {
                patch.apply(platform);
                self.persist()
            }
            None => Ok(()),
        }
    }

    pub fn delete_review_platform(&mut self, id: &str) -> Result<(), StoreError> {
        match self.data.review_platforms.iter().position(|p| p.id == id) {
            Some(idx) => {
                self.data.review_platforms.remove(idx);
                self.persist()
            }
            None => Ok(()),
        }
    }

    // ==================== PUBLISH TOGGLES ====================

    /// Flip the `published` flag on a singleton section.
    pub fn toggle_section(&mut self, section: Section) -> Result<(), StoreError> {
        let flag = match section {
            Section::Hero => &mut self.data.hero.published,
            Section::About => &mut self.data.about.published,
            Section::Contact => &mut self.data.contact.published,
        };
        *flag = !*flag;
        tracing::debug!(section = section.as_str(), "Toggled section visibility");
        self.persist()
    }

    /// Flip the `published` flag on a collection element. No-op if the id is
    /// absent; toggling the same id twice restores the original document.
    pub fn toggle_item(&mut self, collection: Collection, id: &str) -> Result<(), StoreError> {
        let flag = match collection {
            Collection::Menu => self
                .data
                .menu
                .iter_mut()
                .find(|m| m.id == id)
                .map(|m| &mut m.published),
            Collection::Events => self
                .data
                .events
                .iter_mut()
                .find(|e| e.id == id)
                .map(|e| &mut e.published),
            Collection::Reviews => self
                .data
                .reviews
                .iter_mut()
                .find(|r| r.id == id)
                .map(|r| &mut r.published),
            Collection::Gallery => self
                .data
                .gallery
                .iter_mut()
                .find(|g| g.id == id)
                .map(|g| &mut g.published),
            Collection::ReviewPlatforms => self
                .data
                .review_platforms
                .iter_mut()
                .find(|p| p.id == id)
                .map(|p| &mut p.published),
        };

        match flag {
            Some(flag) => {
                *flag = !*flag;
                tracing::debug!(
                    collection = collection.as_str(),
                    id,
                    "Toggled item visibility"
                );
                self.persist()
            }
            None => Ok(()),
        }
    }
}
