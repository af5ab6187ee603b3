//! Bundled default site content.
//!
//! Used whenever nothing valid is persisted under the content key. The seed
//! carries 12 menu items, 3 events, 8 reviews, 6 gallery images, and 4 review
//! platforms, all published.

use crate::models::{
    AboutContent, AboutStats, BusinessHours, ContactContent, Event, GalleryCategory, GalleryImage,
    HeroContent, MenuCategory, MenuItem, Review, ReviewPlatform, ReviewSource, SiteData,
};

/// Build the default site document.
pub fn default_site_data() -> SiteData {
    SiteData {
        hero: default_hero(),
        about: default_about(),
        menu: default_menu(),
        events: default_events(),
        reviews: default_reviews(),
        gallery: default_gallery(),
        contact: default_contact(),
        review_platforms: default_review_platforms(),
    }
}

fn default_hero() -> HeroContent {
    HeroContent {
        subtitle: "Hong Kong's Iconic Spanish Restaurant Since 1998".to_string(),
        title: "Experience Authentic Spanish Cuisine".to_string(),
        description: "Opened since 1998 in Hong Kong as the brain-child of veteran restaurateur, \
                      Mr. Carmelo Lopez. A native Spaniard himself, he came to Asia in the 70's \
                      but remained nostalgically attached to the richness and exquisite taste of \
                      his motherland's cuisine."
            .to_string(),
        cta_primary: "Reserve Your Table".to_string(),
        cta_secondary: "Explore Menu".to_string(),
        background_image: Some("/images/hero-paella.jpg".to_string()),
        published: true,
    }
}

fn default_about() -> AboutContent {
    AboutContent {
        subtitle: "Our Story".to_string(),
        title: "A Taste of Spain in Hong Kong".to_string(),
        paragraph1: "Ole was created from a crave for authenticity! Experience the genuine touch \
                     of Spain the moment you step inside: the lemon yellow plastered walls and \
                     glazed terracotta tiles of the Mediterranean, the lighting fixtures and \
                     decorative potteries directly flown from Spain."
            .to_string(),
        paragraph2: "Executive Chef Jesus Pascual was recruited directly from Madrid. Trained in \
                     Michelin-starred restaurants including Arzak in San Sebastian and Fogony in \
                     Catalonia, he earned his Master's in Executive and Creative Cuisine. He \
                     endeavors authentic Spanish cooking with modern presentations."
            .to_string(),
        chef_quote: "An attentive and energetic team is at your service to provide each customer \
                     a satisfactory dining experience."
            .to_string(),
        chef_name: "Executive Chef Jesus Pascual".to_string(),
        stats: AboutStats {
            chefs: 8,
            wines: 150,
            guests: 300,
            dishes: 80,
        },
        image: Some("/images/about-chef.jpg".to_string()),
        published: true,
    }
}

fn default_contact() -> ContactContent {
    ContactContent {
        address: "1/F, Shun Ho Tower\n24-30 Ice House Street\nCentral, Hong Kong".to_string(),
        phone: "(852) 2523-8624".to_string(),
        email: "ole@ad-caterers.com".to_string(),
        business_hours: BusinessHours {
            weekday: "Mon – Fri: 12Noon-3:00pm & 6:00pm-11:00pm".to_string(),
            weekend: "Sat, Sun & Public Holidays: 11:30am-3:00pm & 6:00pm-11:00pm".to_string(),
        },
        nearby_mtr: "Central station exit D1".to_string(),
        nearby_parking: "New World Tower".to_string(),
        facebook: "www.facebook.com/OleSpanishRestaurant".to_string(),
        published: true,
    }
}

fn default_menu() -> Vec<MenuItem> {
    vec![
        menu_item(
            "1",
            "Patatas Bravas",
            "Crispy fried potatoes served with spicy tomato sauce and aioli",
            12.0,
            MenuCategory::Tapas,
            &["vegetarian", "gluten-free"],
            Some("/images/menu-tapas.jpg"),
            true,
        ),
        menu_item(
            "2",
            "Gambas al Ajillo",
            "Sizzling prawns in garlic chili oil with fresh herbs",
            18.0,
            MenuCategory::Tapas,
            &["gluten-free", "spicy"],
            None,
            false,
        ),
        menu_item(
            "3",
            "Jamón Ibérico",
            "Premium cured Iberian ham, aged 36 months",
            28.0,
            MenuCategory::Tapas,
            &[],
            None,
            false,
        ),
        menu_item(
            "4",
            "Croquetas de Jamón",
            "Creamy ham croquettes with béchamel filling",
            14.0,
            MenuCategory::Tapas,
            &[],
            None,
            false,
        ),
        menu_item(
            "5",
            "Tortilla Española",
            "Traditional Spanish potato omelette with caramelized onions",
            13.0,
            MenuCategory::Tapas,
            &["vegetarian", "gluten-free"],
            None,
            false,
        ),
        menu_item(
            "6",
            "Paella Valenciana",
            "Authentic saffron rice with chicken, rabbit, green beans, and snails",
            48.0,
            MenuCategory::Mains,
            &[],
            None,
            true,
        ),
        menu_item(
            "7",
            "Paella de Marisco",
            "Seafood paella with prawns, mussels, clams, and squid",
            56.0,
            MenuCategory::Mains,
            &["gluten-free"],
            None,
            false,
        ),
        menu_item(
            "8",
            "Churros con Chocolate",
            "Crispy fried dough with thick hot chocolate dipping sauce",
            12.0,
            MenuCategory::Desserts,
            &["vegetarian"],
            None,
            true,
        ),
        menu_item(
            "9",
            "Crema Catalana",
            "Catalan-style crème brûlée with citrus and cinnamon",
            10.0,
            MenuCategory::Desserts,
            &["vegetarian", "gluten-free"],
            None,
            false,
        ),
        menu_item(
            "10",
            "Sangria Roja",
            "Traditional red wine sangria with fresh fruits",
            14.0,
            MenuCategory::Drinks,
            &[],
            None,
            true,
        ),
        menu_item(
            "11",
            "Sangria Blanca",
            "Refreshing white wine sangria with peach and apple",
            14.0,
            MenuCategory::Drinks,
            &[],
            None,
            false,
        ),
        menu_item(
            "12",
            "Tinto de Verano",
            "Spanish summer wine with lemon soda",
            10.0,
            MenuCategory::Drinks,
            &[],
            None,
            false,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn menu_item(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    category: MenuCategory,
    tags: &[&str],
    image: Option<&str>,
    is_popular: bool,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        image: image.map(|i| i.to_string()),
        is_popular: is_popular.then_some(true),
        published: true,
    }
}

fn default_events() -> Vec<Event> {
    vec![
        Event {
            id: "1".to_string(),
            title: "Private Dining".to_string(),
            description: "Intimate gatherings for up to 20 guests in our exclusive private room"
                .to_string(),
            image: None,
            published: true,
        },
        Event {
            id: "2".to_string(),
            title: "Corporate Events".to_string(),
            description: "Business lunches, team dinners, and company celebrations".to_string(),
            image: None,
            published: true,
        },
        Event {
            id: "3".to_string(),
            title: "Special Celebrations".to_string(),
            description: "Birthdays, anniversaries, and milestone events".to_string(),
            image: None,
            published: true,
        },
    ]
}

fn default_reviews() -> Vec<Review> {
    vec![
        review(
            "1",
            "Maria Gonzalez",
            5,
            "Absolutely incredible experience! The paella was authentic and the service was \
             impeccable. This is the closest you'll get to Spain without leaving the city.",
            "Jan 15, 2024",
            ReviewSource::Google,
            24,
        ),
        review(
            "2",
            "James Chen",
            5,
            "The tapas selection is outstanding. We tried the patatas bravas, gambas al ajillo, \
             and jamón ibérico - all perfection. The sangria is a must-try!",
            "Jan 12, 2024",
            ReviewSource::Facebook,
            18,
        ),
        review(
            "3",
            "Sarah Williams",
            4,
            "Beautiful ambiance and delicious food. The churros with chocolate were heavenly. \
             Only wish the wait was a bit shorter.",
            "Jan 10, 2024",
            ReviewSource::Google,
            12,
        ),
        review(
            "4",
            "David Park",
            5,
            "Best Spanish restaurant in town! The tortilla española reminds me of my \
             grandmother's cooking. Highly recommend for date nights.",
            "Jan 8, 2024",
            ReviewSource::Instagram,
            31,
        ),
        review(
            "5",
            "Emma Thompson",
            5,
            "Celebrated my birthday here and they made it so special. The staff went above and \
             beyond. Food was phenomenal!",
            "Jan 5, 2024",
            ReviewSource::Google,
            45,
        ),
        review(
            "6",
            "Michael Rodriguez",
            4,
            "Great atmosphere and authentic flavors. The wine selection is impressive. Will \
             definitely be coming back.",
            "Jan 3, 2024",
            ReviewSource::Yelp,
            8,
        ),
        review(
            "7",
            "Lisa Wong",
            5,
            "Hidden gem! The outdoor terrace is perfect for summer evenings. Try the seafood \
             paella - it's amazing!",
            "Dec 28, 2023",
            ReviewSource::Openrice,
            22,
        ),
        review(
            "8",
            "Robert Kim",
            5,
            "From the moment we walked in, we felt transported to Barcelona. The attention to \
             detail in every dish is remarkable.",
            "Dec 25, 2023",
            ReviewSource::Tripadvisor,
            16,
        ),
    ]
}

fn review(
    id: &str,
    author: &str,
    rating: u8,
    text: &str,
    date: &str,
    source: ReviewSource,
    likes: i64,
) -> Review {
    Review {
        id: id.to_string(),
        author: author.to_string(),
        rating,
        text: text.to_string(),
        date: date.to_string(),
        source,
        verified: true,
        likes,
        published: true,
    }
}

fn default_gallery() -> Vec<GalleryImage> {
    vec![
        gallery_image(
            "1",
            "/images/hero-bg.jpg",
            "Elegant restaurant interior",
            GalleryCategory::Interior,
        ),
        gallery_image(
            "2",
            "/images/menu-tapas.jpg",
            "Spanish tapas selection",
            GalleryCategory::Food,
        ),
        gallery_image(
            "3",
            "/images/gallery-terrace.jpg",
            "Outdoor terrace dining",
            GalleryCategory::Interior,
        ),
        gallery_image(
            "4",
            "/images/gallery-paella.jpg",
            "Traditional paella",
            GalleryCategory::Food,
        ),
        gallery_image(
            "5",
            "/images/about-chef.jpg",
            "Our head chef",
            GalleryCategory::Team,
        ),
        gallery_image(
            "6",
            "/images/gallery-churros.jpg",
            "Churros with chocolate",
            GalleryCategory::Food,
        ),
    ]
}

fn gallery_image(id: &str, src: &str, alt: &str, category: GalleryCategory) -> GalleryImage {
    GalleryImage {
        id: id.to_string(),
        src: src.to_string(),
        alt: alt.to_string(),
        category,
        published: true,
    }
}

fn default_review_platforms() -> Vec<ReviewPlatform> {
    vec![
        ReviewPlatform {
            id: "1".to_string(),
            name: "Google".to_string(),
            url: "https://g.co/kgs/xyz123".to_string(),
            icon: "google".to_string(),
            rating: Some(4.5),
            review_count: Some(328),
            published: true,
        },
        ReviewPlatform {
            id: "2".to_string(),
            name: "Facebook".to_string(),
            url: "https://www.facebook.com/OleSpanishRestaurant/reviews".to_string(),
            icon: "facebook".to_string(),
            rating: Some(4.7),
            review_count: Some(156),
            published: true,
        },
        ReviewPlatform {
            id: "3".to_string(),
            name: "TripAdvisor".to_string(),
            url: "https://www.tripadvisor.com/Restaurant_Review-g294217-d1234567".to_string(),
            icon: "tripadvisor".to_string(),
            rating: Some(4.5),
            review_count: Some(89),
            published: true,
        },
        ReviewPlatform {
            id: "4".to_string(),
            name: "OpenRice".to_string(),
            url: "https://www.openrice.com/en/hongkong/r-ole-spanish-restaurant".to_string(),
            icon: "openrice".to_string(),
            rating: Some(4.0),
            review_count: Some(234),
            published: true,
        },
    ]
}
