//! Menu item model and partial-update patch.

use serde::{Deserialize, Serialize};

/// Menu category tabs on the public page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    Tapas,
    Mains,
    Desserts,
    Drinks,
}

impl MenuCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuCategory::Tapas => "tapas",
            MenuCategory::Mains => "mains",
            MenuCategory::Desserts => "desserts",
            MenuCategory::Drinks => "drinks",
        }
    }
}

/// A dish or drink on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: MenuCategory,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_popular: Option<bool>,
    pub published: bool,
}

/// Partial update for a menu item. Absent fields keep the existing value;
/// optional model fields can be replaced but not cleared.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub category: Option<MenuCategory>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_popular: Option<bool>,
    #[serde(default)]
    pub published: Option<bool>,
}

impl MenuItemPatch {
    /// Merge this patch into `item`, leaving `id` and absent fields untouched.
    pub fn apply(&self, item: &mut MenuItem) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(tags) = &self.tags {
            item.tags = tags.clone();
        }
        if let Some(image) = &self.image {
            item.image = Some(image.clone());
        }
        if let Some(is_popular) = self.is_popular {
            item.is_popular = Some(is_popular);
        }
        if let Some(published) = self.published {
            item.published = published;
        }
    }
}
