//! Category and group selection models

use super::menu_entry::FoodGroup;
use serde::{Deserialize, Serialize};

/// Category label meaning "no category constraint"
pub const ALL_CATEGORIES: &str = "All";

/// Group selector of the menu filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupFilter {
    #[default]
    All,
    Food,
    Drink,
    Dessert,
}

impl GroupFilter {
    /// Selector order as shown in the filter bar
    pub const OPTIONS: [GroupFilter; 4] = [
        GroupFilter::All,
        GroupFilter::Food,
        GroupFilter::Drink,
        GroupFilter::Dessert,
    ];

    /// Whether an entry of `group` passes this selector
    pub fn matches(&self, group: FoodGroup) -> bool {
        match self {
            GroupFilter::All => true,
            GroupFilter::Food => group == FoodGroup::Food,
            GroupFilter::Drink => group == FoodGroup::Drink,
            GroupFilter::Dessert => group == FoodGroup::Dessert,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GroupFilter::All => "All",
            GroupFilter::Food => "Food",
            GroupFilter::Drink => "Drink",
            GroupFilter::Dessert => "Dessert",
        }
    }
}

impl From<FoodGroup> for GroupFilter {
    fn from(group: FoodGroup) -> Self {
        match group {
            FoodGroup::Food => GroupFilter::Food,
            FoodGroup::Drink => GroupFilter::Drink,
            FoodGroup::Dessert => GroupFilter::Dessert,
        }
    }
}
