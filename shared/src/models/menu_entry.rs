//! Menu Entry Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Food group of a menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodGroup {
    Food,
    Drink,
    Dessert,
}

impl FoodGroup {
    pub const ALL: [FoodGroup; 3] = [FoodGroup::Food, FoodGroup::Drink, FoodGroup::Dessert];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodGroup::Food => "food",
            FoodGroup::Drink => "drink",
            FoodGroup::Dessert => "dessert",
        }
    }

    /// Capitalized label as shown on menu badges ("Food", "Drink", "Dessert")
    pub fn label(&self) -> &'static str {
        match self {
            FoodGroup::Food => "Food",
            FoodGroup::Drink => "Drink",
            FoodGroup::Dessert => "Dessert",
        }
    }
}

impl fmt::Display for FoodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Menu entry (immutable catalog record)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    /// Unique entry ID
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in whole currency units
    pub price: u64,
    /// Category label (e.g. "Main Course")
    pub category: String,
    pub group: FoodGroup,
    /// Vegetarian flag
    pub is_veg: bool,
    /// Opaque image reference
    #[serde(default)]
    pub image: String,
}

impl MenuEntry {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: u64,
        category: impl Into<String>,
        group: FoodGroup,
        is_veg: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            category: category.into(),
            group,
            is_veg,
            image: String::new(),
        }
    }

    /// Attach an image reference
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}
