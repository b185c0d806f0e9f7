//! Built-in restaurant menu

use super::Catalog;
use shared::models::{FoodGroup, MenuEntry};

/// Category chips in the order the menu screen shows them
pub const SAMPLE_CATEGORIES: [&str; 8] = [
    "All",
    "Main Course",
    "Dal",
    "Rice",
    "Pizza",
    "Starter",
    "Beverages",
    "Sweets",
];

/// Menu entries of the built-in catalog
pub fn sample_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new(
            "1",
            "Butter Chicken",
            "Creamy tomato-based curry with tender chicken pieces",
            320,
            "Main Course",
            FoodGroup::Food,
            false,
        )
        .with_image("butter-chicken.jpg"),
        MenuEntry::new(
            "2",
            "Dal Makhani",
            "Rich and creamy black lentils slow-cooked to perfection",
            240,
            "Dal",
            FoodGroup::Food,
            true,
        )
        .with_image("dal-makhani.jpg"),
        MenuEntry::new(
            "3",
            "Margherita Pizza",
            "Classic pizza with fresh mozzarella, basil, and tomato sauce",
            380,
            "Pizza",
            FoodGroup::Food,
            true,
        )
        .with_image("margherita-pizza.jpg"),
        MenuEntry::new(
            "4",
            "Mango Lassi",
            "Refreshing yogurt-based drink with fresh mango pulp",
            120,
            "Beverages",
            FoodGroup::Drink,
            true,
        )
        .with_image("mango-lassi.jpg"),
        MenuEntry::new(
            "5",
            "Gulab Jamun",
            "Soft milk dumplings in sweet syrup, served warm",
            140,
            "Sweets",
            FoodGroup::Dessert,
            true,
        )
        .with_image("gulab-jamun.jpg"),
        MenuEntry::new(
            "6",
            "Chicken Biryani",
            "Aromatic basmati rice with spiced chicken and saffron",
            420,
            "Rice",
            FoodGroup::Food,
            false,
        )
        .with_image("chicken-biryani.jpg"),
        MenuEntry::new(
            "7",
            "Paneer Tikka",
            "Grilled cottage cheese marinated in spices and yogurt",
            280,
            "Starter",
            FoodGroup::Food,
            true,
        )
        .with_image("paneer-tikka.jpg"),
        MenuEntry::new(
            "8",
            "Fresh Lime Soda",
            "Refreshing lime drink with a hint of mint and spices",
            80,
            "Beverages",
            FoodGroup::Drink,
            true,
        )
        .with_image("lime-soda.jpg"),
    ]
}

/// The built-in catalog with its display category order
pub fn sample_catalog() -> Catalog {
    // ids are literal and distinct
    match Catalog::new(sample_entries()) {
        Ok(catalog) => catalog.with_category_order(SAMPLE_CATEGORIES),
        Err(e) => unreachable!("sample catalog is invalid: {}", e),
    }
}
