//! Catalog categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A catalog category.
///
/// The catalog API sends categories as free-form labels. The four it is known
/// to use get their own variants; anything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    MensClothing,
    WomensClothing,
    Jewelery,
    Electronics,
    Other(String),
}

impl Category {
    /// Get the label as the catalog API spells it.
    pub fn as_str(&self) -> &str {
        match self {
            Category::MensClothing => "men's clothing",
            Category::WomensClothing => "women's clothing",
            Category::Jewelery => "jewelery",
            Category::Electronics => "electronics",
            Category::Other(label) => label,
        }
    }

    /// Parse a catalog label. Matching ignores case and surrounding whitespace.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "men's clothing" => Category::MensClothing,
            "women's clothing" => Category::WomensClothing,
            "jewelery" => Category::Jewelery,
            "electronics" => Category::Electronics,
            _ => Category::Other(label.to_string()),
        }
    }

    /// Badge colour used when listing products of this category.
    pub fn badge_color(&self) -> BadgeColor {
        match self {
            Category::MensClothing => BadgeColor::Blue,
            Category::WomensClothing => BadgeColor::Pink,
            Category::Jewelery => BadgeColor::Purple,
            Category::Electronics => BadgeColor::Green,
            Category::Other(_) => BadgeColor::Gray,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Other(String::new())
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::from_label(&label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colour scheme of a category badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Blue,
    Pink,
    Purple,
    Green,
    Gray,
}
