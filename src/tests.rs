//! Integration tests for the content and session stores.

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde_json::Value;
use tempfile::TempDir;

use crate::config::Config;
use crate::display::{self, CategoryFilter};
use crate::errors::codes;
use crate::models::{
    Collection, Event, GalleryCategory, GalleryImage, MenuCategory, MenuItem, MenuItemPatch,
    ReviewPatch, Section, SiteData,
};
use crate::seed::default_site_data;
use crate::storage::{MemoryStorage, Storage, CONTENT_KEY, SESSION_KEY};
use crate::store::{ContentStore, SessionStore};
use crate::SiteCms;

static SEED: Lazy<SiteData> = Lazy::new(default_site_data);

/// Test fixture over a file-backed data directory.
struct TestFixture {
    cms: SiteCms,
    _temp_dir: TempDir,
}

impl TestFixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = Config {
            data_dir: temp_dir.path().to_path_buf(),
            log_level: "warn".to_string(),
        };
        let cms = SiteCms::open(config).expect("Failed to open stores");
        TestFixture {
            cms,
            _temp_dir: temp_dir,
        }
    }
}

fn memory_cms() -> SiteCms {
    SiteCms::with_storage(Arc::new(MemoryStorage::new()), Config::default())
        .expect("Failed to open stores")
}

fn sample_menu_item(id: &str) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: "Pulpo a la Gallega".to_string(),
        description: "Galician-style octopus with paprika and olive oil".to_string(),
        price: 26.0,
        category: MenuCategory::Tapas,
        tags: vec!["gluten-free".to_string()],
        image: None,
        is_popular: None,
        published: true,
    }
}

// ==================== CONTENT STORE ====================

#[test]
fn test_fresh_store_returns_seed() {
    let cms = memory_cms();
    let data = cms.content.data();

    assert_eq!(data.menu.len(), 12);
    assert_eq!(data.events.len(), 3);
    assert_eq!(data.reviews.len(), 8);
    assert_eq!(data.gallery.len(), 6);
    assert_eq!(data.review_platforms.len(), 4);
    assert_eq!(data, &*SEED);
}

#[test]
fn test_add_appends_at_end() {
    let mut cms = memory_cms();
    let before = cms.content.data().menu.len();

    cms.content.add_menu_item(sample_menu_item("13")).unwrap();

    let menu = &cms.content.data().menu;
    assert_eq!(menu.len(), before + 1);
    assert_eq!(menu.last().unwrap().id, "13");
    assert_eq!(menu.last().unwrap().name, "Pulpo a la Gallega");
}

#[test]
fn test_add_duplicate_id_rejected() {
    let mut cms = memory_cms();
    let before = cms.content.data().clone();

    let err = cms.content.add_menu_item(sample_menu_item("1")).unwrap_err();
    assert_eq!(err.error_code(), codes::DUPLICATE_ID);
    assert_eq!(cms.content.data(), &before);
}

#[test]
fn test_update_changes_only_target_fields() {
    let mut cms = memory_cms();
    let before = cms.content.data().clone();

    let patch = MenuItemPatch {
        price: Some(15.0),
        is_popular: Some(true),
        ..Default::default()
    };
    cms.content.update_menu_item("5", &patch).unwrap();

    let after = cms.content.data();
    // Order and ids are untouched
    let ids: Vec<_> = after.menu.iter().map(|m| m.id.as_str()).collect();
    let expected_ids: Vec<_> = before.menu.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, expected_ids);

    for (old, new) in before.menu.iter().zip(after.menu.iter()) {
        if new.id == "5" {
            assert_eq!(new.price, 15.0);
            assert_eq!(new.is_popular, Some(true));
            // Fields not named in the patch are preserved
            assert_eq!(new.name, old.name);
            assert_eq!(new.description, old.description);
            assert_eq!(new.tags, old.tags);
        } else {
            assert_eq!(new, old);
        }
    }
    // Other sections are untouched
    assert_eq!(after.hero, before.hero);
    assert_eq!(after.reviews, before.reviews);
}

#[test]
fn test_update_missing_id_is_noop() {
    let mut cms = memory_cms();
    let before = cms.content.data().clone();

    let patch = ReviewPatch {
        rating: Some(1),
        ..Default::default()
    };
    cms.content.update_review("no-such-id", &patch).unwrap();

    assert_eq!(cms.content.data(), &before);
}

#[test]
fn test_delete_removes_matching_element() {
    let mut cms = memory_cms();

    cms.content.delete_event("2").unwrap();

    let events = &cms.content.data().events;
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.id != "2"));
    // Remaining order is preserved
    assert_eq!(events[0].id, "1");
    assert_eq!(events[1].id, "3");
}

#[test]
fn test_delete_missing_id_is_noop() {
    let mut cms = memory_cms();
    let before = cms.content.data().clone();

    cms.content.delete_event("no-such-id").unwrap();

    assert_eq!(cms.content.data(), &before);
}

#[test]
fn test_singleton_update_replaces_wholesale() {
    let mut cms = memory_cms();
    let mut hero = cms.content.data().hero.clone();
    hero.title = "Nueva Cocina".to_string();
    hero.published = false;

    cms.content.update_hero(hero.clone()).unwrap();

    assert_eq!(cms.content.data().hero, hero);
    assert!(display::hero(cms.content.data()).is_none());
}

#[test]
fn test_toggle_section_flips_only_published() {
    let mut cms = memory_cms();
    let before = cms.content.data().clone();

    cms.content.toggle_section(Section::Hero).unwrap();

    let after = cms.content.data();
    assert!(!after.hero.published);
    // Every other hero field is unchanged
    assert_eq!(after.hero.title, before.hero.title);
    assert_eq!(after.hero.subtitle, before.hero.subtitle);
    assert_eq!(after.hero.description, before.hero.description);
    assert_eq!(after.hero.background_image, before.hero.background_image);
    // All other sections are unchanged
    assert_eq!(after.about, before.about);
    assert_eq!(after.contact, before.contact);
    assert_eq!(after.menu, before.menu);
}

#[test]
fn test_toggle_item_is_involution() {
    let mut cms = memory_cms();
    let before = cms.content.data().clone();

    cms.content.toggle_item(Collection::Menu, "3").unwrap();
    let toggled = cms.content.data();
    assert!(!toggled.menu.iter().find(|m| m.id == "3").unwrap().published);
    for item in toggled.menu.iter().filter(|m| m.id != "3") {
        assert!(item.published);
    }

    cms.content.toggle_item(Collection::Menu, "3").unwrap();
    assert_eq!(cms.content.data(), &before);
}

#[test]
fn test_toggle_item_missing_id_is_noop() {
    let mut cms = memory_cms();
    let before = cms.content.data().clone();

    cms.content
        .toggle_item(Collection::Gallery, "no-such-id")
        .unwrap();

    assert_eq!(cms.content.data(), &before);
}

// ==================== PERSISTENCE ====================

#[test]
fn test_every_mutation_writes_whole_document() {
    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    let mut store = ContentStore::new(Arc::clone(&storage)).unwrap();

    store.toggle_item(Collection::Reviews, "1").unwrap();

    let raw = storage.get(CONTENT_KEY).expect("document not persisted");
    let persisted: SiteData = serde_json::from_str(&raw).unwrap();
    assert_eq!(&persisted, store.data());
    assert!(!persisted.reviews[0].published);
}

#[test]
fn test_content_survives_reopen() {
    let fixture = TestFixture::new();
    let dir = fixture._temp_dir.path().to_path_buf();
    let mut cms = fixture.cms;

    cms.content
        .add_gallery_image(GalleryImage {
            id: "7".to_string(),
            src: "/images/gallery-wine.jpg".to_string(),
            alt: "Wine cellar".to_string(),
            category: GalleryCategory::Interior,
            published: true,
        })
        .unwrap();
    let expected = cms.content.data().clone();
    drop(cms);

    let reopened = SiteCms::open(Config {
        data_dir: dir,
        log_level: "warn".to_string(),
    })
    .unwrap();
    assert_eq!(reopened.content.data(), &expected);
    assert_eq!(reopened.content.data().gallery.len(), 7);
}

#[test]
fn test_corrupt_content_falls_back_to_seed() {
    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    storage.set(CONTENT_KEY, "{not valid json").unwrap();

    let store = ContentStore::new(Arc::clone(&storage)).unwrap();
    assert_eq!(store.data(), &*SEED);

    // The reseeded document replaces the corrupt value
    let raw = storage.get(CONTENT_KEY).unwrap();
    assert!(serde_json::from_str::<SiteData>(&raw).is_ok());
}

#[test]
fn test_persisted_json_shape() {
    let cms = memory_cms();
    let json = serde_json::to_string(cms.content.data()).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    // Exact key spellings the saved documents use
    assert_eq!(value["hero"]["ctaPrimary"], "Reserve Your Table");
    assert!(value["hero"]["backgroundImage"].is_string());
    assert_eq!(value["about"]["stats"]["wines"], 150);
    assert_eq!(value["about"]["chefName"], "Executive Chef Jesus Pascual");
    assert_eq!(value["contact"]["nearbyMTR"], "Central station exit D1");
    assert_eq!(value["contact"]["businessHours"]["weekday"],
        "Mon – Fri: 12Noon-3:00pm & 6:00pm-11:00pm");
    assert_eq!(value["menu"][0]["category"], "tapas");
    assert_eq!(value["menu"][0]["isPopular"], true);
    // isPopular is omitted, not false, for non-popular items
    assert!(value["menu"][1].get("isPopular").is_none());
    assert_eq!(value["reviews"][0]["source"], "google");
    assert_eq!(value["gallery"][0]["category"], "interior");
    assert_eq!(value["reviewPlatforms"][0]["reviewCount"], 328);
}

#[test]
fn test_document_round_trips() {
    let mut cms = memory_cms();
    cms.content.toggle_section(Section::About).unwrap();
    cms.content.toggle_item(Collection::Menu, "7").unwrap();
    let original = cms.content.data().clone();

    let json = serde_json::to_string(&original).unwrap();
    let parsed: SiteData = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, original);
}

// ==================== SESSION STORE ====================

#[test]
fn test_login_with_valid_credentials() {
    let mut cms = memory_cms();
    assert!(!cms.session.is_authenticated());

    cms.session.login("admin", "admin123").unwrap();

    assert!(cms.session.is_authenticated());
    let user = cms.session.user().unwrap();
    assert_eq!(user.username, "admin");
    assert!(user.is_authenticated);
}

#[test]
fn test_login_failure_leaves_session_unchanged() {
    let mut cms = memory_cms();

    let err = cms.session.login("admin", "wrong").unwrap_err();
    assert_eq!(err.error_code(), codes::INVALID_CREDENTIALS);
    assert!(!cms.session.is_authenticated());

    // A failed login after a successful one keeps the session
    cms.session.login("admin", "admin123").unwrap();
    let _ = cms.session.login("admin", "wrong").unwrap_err();
    assert!(cms.session.is_authenticated());
}

#[test]
fn test_session_persisted_shape() {
    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    let mut session = SessionStore::new(Arc::clone(&storage));

    session.login("admin", "admin123").unwrap();

    let raw = storage.get(SESSION_KEY).unwrap();
    let value: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["username"], "admin");
    assert_eq!(value["isAuthenticated"], true);
}

#[test]
fn test_session_restored_without_revalidation() {
    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    let mut session = SessionStore::new(Arc::clone(&storage));
    session.login("admin", "admin123").unwrap();
    drop(session);

    let restored = SessionStore::new(storage);
    assert!(restored.is_authenticated());
    assert_eq!(restored.user().unwrap().username, "admin");
}

#[test]
fn test_logout_clears_persisted_record() {
    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    let mut session = SessionStore::new(Arc::clone(&storage));
    session.login("admin", "admin123").unwrap();

    session.logout().unwrap();

    assert!(!session.is_authenticated());
    assert!(storage.get(SESSION_KEY).is_none());

    let restored = SessionStore::new(storage);
    assert!(!restored.is_authenticated());
}

#[test]
fn test_corrupt_session_counts_as_logged_out() {
    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    storage.set(SESSION_KEY, "????").unwrap();

    let session = SessionStore::new(storage);
    assert!(!session.is_authenticated());
}

// ==================== DISPLAY ====================

#[test]
fn test_display_reflects_store_mutations() {
    let mut cms = memory_cms();

    cms.content.toggle_item(Collection::Events, "1").unwrap();
    cms.content.toggle_item(Collection::Events, "3").unwrap();

    let visible = display::events(cms.content.data());
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "2");
}

#[test]
fn test_category_filter_applies_after_publish_filter() {
    let mut cms = memory_cms();
    // Unpublish every drink
    for id in ["10", "11", "12"] {
        cms.content.toggle_item(Collection::Menu, id).unwrap();
    }

    let drinks = display::menu_items(
        cms.content.data(),
        CategoryFilter::Only(MenuCategory::Drinks),
    );
    assert!(drinks.is_empty());

    let all = display::menu_items(cms.content.data(), CategoryFilter::All);
    assert_eq!(all.len(), 9);
}

// ==================== EVENT COLLECTION EDGE ====================

#[test]
fn test_event_with_image_round_trips() {
    let mut cms = memory_cms();
    cms.content
        .add_event(Event {
            id: "4".to_string(),
            title: "Flamenco Night".to_string(),
            description: "Live flamenco every last Friday of the month".to_string(),
            image: Some("/images/events-flamenco.jpg".to_string()),
            published: true,
        })
        .unwrap();

    let json = serde_json::to_string(cms.content.data()).unwrap();
    let parsed: SiteData = serde_json::from_str(&json).unwrap();
    let event = parsed.events.iter().find(|e| e.id == "4").unwrap();
    assert_eq!(event.image.as_deref(), Some("/images/events-flamenco.jpg"));
}
