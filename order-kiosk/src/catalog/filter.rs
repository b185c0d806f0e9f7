//! Catalog Filter Engine
//!
//! Recomputes the visible subset of the catalog from four independent
//! predicates combined by logical AND:
//!
//! 1. **text**: case-insensitive substring of name OR description
//! 2. **group**: `All` or the entry's food group
//! 3. **category**: selection contains "All" or the entry's category
//! 4. **diet**: `veg_only == false` or the entry is vegetarian
//!
//! Filtering is a pure function of `(catalog, FilterState)`: the result keeps
//! catalog order and repeated calls have no cumulative effect.

use super::Catalog;
use serde::{Deserialize, Serialize};
use shared::models::{ALL_CATEGORIES, GroupFilter, MenuEntry};
use std::collections::BTreeSet;

// ============================================================================
// Category Selection
// ============================================================================

/// Multi-select category set; never empty
///
/// `{"All"}` means unconstrained. "All" never coexists with a concrete
/// category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct CategorySelection(BTreeSet<String>);

impl CategorySelection {
    /// The unconstrained selection `{"All"}`
    pub fn all() -> Self {
        Self(BTreeSet::from([ALL_CATEGORIES.to_string()]))
    }

    pub fn is_all(&self) -> bool {
        self.0.contains(ALL_CATEGORIES)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.0.contains(category)
    }

    /// Whether an entry in `category` passes the selection
    pub fn matches(&self, category: &str) -> bool {
        self.is_all() || self.contains(category)
    }

    /// Apply a chip tap
    ///
    /// "All" resets to `{"All"}`. Any other category drops "All" and toggles
    /// membership; an emptied set reverts to `{"All"}`.
    pub fn toggle(&mut self, category: &str) {
        if category == ALL_CATEGORIES {
            *self = Self::all();
            return;
        }

        self.0.remove(ALL_CATEGORIES);
        if !self.0.remove(category) {
            self.0.insert(category.to_string());
        }
        if self.0.is_empty() {
            *self = Self::all();
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with collections
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for CategorySelection {
    fn default() -> Self {
        Self::all()
    }
}

impl From<Vec<String>> for CategorySelection {
    fn from(categories: Vec<String>) -> Self {
        if categories.is_empty() || categories.iter().any(|c| c == ALL_CATEGORIES) {
            return Self::all();
        }
        Self(categories.into_iter().collect())
    }
}

impl From<CategorySelection> for Vec<String> {
    fn from(selection: CategorySelection) -> Self {
        selection.0.into_iter().collect()
    }
}

// ============================================================================
// Filter State
// ============================================================================

/// Inputs of the menu filter bar
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub search_term: String,
    pub group: GroupFilter,
    pub categories: CategorySelection,
    pub veg_only: bool,
}

impl FilterState {
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_group(&mut self, group: GroupFilter) {
        self.group = group;
    }

    pub fn toggle_category(&mut self, category: &str) {
        self.categories.toggle(category);
    }

    pub fn set_veg_only(&mut self, veg_only: bool) {
        self.veg_only = veg_only;
    }

    pub fn toggle_veg_only(&mut self) {
        self.veg_only = !self.veg_only;
    }

    /// Back to "show everything"
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether every predicate is at its unconstrained value
    pub fn is_unfiltered(&self) -> bool {
        self.search_term.is_empty()
            && self.group == GroupFilter::All
            && self.categories.is_all()
            && !self.veg_only
    }

    /// Test one entry against all four predicates
    pub fn matches(&self, entry: &MenuEntry) -> bool {
        Matcher::new(self).matches(entry)
    }

    /// Visible entries of `catalog`, in catalog order
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a MenuEntry> {
        filter_entries(catalog.entries(), self)
    }
}

/// Filter a slice of entries, preserving order
pub fn filter_entries<'a>(entries: &'a [MenuEntry], state: &FilterState) -> Vec<&'a MenuEntry> {
    let matcher = Matcher::new(state);
    entries.iter().filter(|e| matcher.matches(e)).collect()
}

/// Filter state with the search term lower-cased once per pass
struct Matcher<'s> {
    needle: String,
    state: &'s FilterState,
}

impl<'s> Matcher<'s> {
    fn new(state: &'s FilterState) -> Self {
        Self {
            needle: state.search_term.to_lowercase(),
            state,
        }
    }

    fn matches(&self, entry: &MenuEntry) -> bool {
        self.matches_text(entry)
            && self.state.group.matches(entry.group)
            && self.state.categories.matches(&entry.category)
            && (!self.state.veg_only || entry.is_veg)
    }

    fn matches_text(&self, entry: &MenuEntry) -> bool {
        self.needle.is_empty()
            || entry.name.to_lowercase().contains(&self.needle)
            || entry.description.to_lowercase().contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;

    fn names<'a>(entries: &[&'a MenuEntry]) -> Vec<&'a str> {
        entries.iter().copied().map(|e| e.name.as_str()).collect()
    }

    /// `sub` appears in `full` in the same relative order
    fn is_subsequence(sub: &[&MenuEntry], full: &[MenuEntry]) -> bool {
        let mut rest = full.iter();
        sub.iter()
            .all(|s| rest.by_ref().any(|f| std::ptr::eq(f, *s)))
    }

    #[test]
    fn test_search_dal_finds_only_dal_makhani() {
        let catalog = sample_catalog();
        let state = FilterState {
            search_term: "dal".to_string(),
            ..FilterState::default()
        };
        assert_eq!(names(&state.apply(&catalog)), ["Dal Makhani"]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_checks_description() {
        let catalog = sample_catalog();
        let mut state = FilterState::default();
        state.set_search_term("REFRESHING");
        assert_eq!(
            names(&state.apply(&catalog)),
            ["Mango Lassi", "Fresh Lime Soda"]
        );
    }

    #[test]
    fn test_empty_state_returns_whole_catalog() {
        let catalog = sample_catalog();
        let state = FilterState::default();
        assert!(state.is_unfiltered());
        assert_eq!(state.apply(&catalog).len(), catalog.len());
    }

    #[test]
    fn test_group_filter() {
        let catalog = sample_catalog();
        let mut state = FilterState::default();
        state.set_group(GroupFilter::Drink);
        assert_eq!(
            names(&state.apply(&catalog)),
            ["Mango Lassi", "Fresh Lime Soda"]
        );
        state.set_group(GroupFilter::Dessert);
        assert_eq!(names(&state.apply(&catalog)), ["Gulab Jamun"]);
    }

    #[test]
    fn test_category_filter_multi_select() {
        let catalog = sample_catalog();
        let mut state = FilterState::default();
        state.toggle_category("Rice");
        state.toggle_category("Dal");
        assert_eq!(
            names(&state.apply(&catalog)),
            ["Dal Makhani", "Chicken Biryani"]
        );
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let catalog = sample_catalog();
        let mut state = FilterState::default();
        state.set_group(GroupFilter::Food);
        state.toggle_veg_only();
        state.set_search_term("chicken");
        assert!(state.apply(&catalog).is_empty());
    }

    #[test]
    fn test_veg_only_is_subset() {
        let catalog = sample_catalog();
        let terms = ["", "a", "chicken", "mango"];
        let groups = GroupFilter::OPTIONS;
        for term in terms {
            for group in groups {
                let mut state = FilterState::default();
                state.set_search_term(term);
                state.set_group(group);
                let all = state.apply(&catalog);
                state.set_veg_only(true);
                let veg = state.apply(&catalog);
                assert!(veg.iter().all(|v| all.iter().any(|a| std::ptr::eq(*a, *v))));
                assert!(veg.iter().all(|v| v.is_veg));
            }
        }
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let catalog = sample_catalog();
        let mut state = FilterState::default();
        for category in catalog.categories().to_vec() {
            state.toggle_category(&category);
            for veg in [false, true] {
                state.set_veg_only(veg);
                let visible = state.apply(&catalog);
                assert!(is_subsequence(&visible, catalog.entries()));
            }
        }
    }

    #[test]
    fn test_apply_is_idempotent() {
        let catalog = sample_catalog();
        let mut state = FilterState::default();
        state.set_search_term("a");
        state.toggle_category("Beverages");
        let first = names(&state.apply(&catalog));
        let second = names(&state.apply(&catalog));
        assert_eq!(first, second);
    }

    #[test]
    fn test_toggle_all_resets() {
        let mut selection = CategorySelection::all();
        selection.toggle("Dal");
        selection.toggle("Rice");
        assert!(!selection.is_all());
        assert_eq!(selection.len(), 2);

        selection.toggle("All");
        assert_eq!(selection, CategorySelection::all());
    }

    #[test]
    fn test_toggle_removes_all_marker() {
        let mut selection = CategorySelection::all();
        selection.toggle("Pizza");
        assert!(!selection.contains("All"));
        assert!(selection.contains("Pizza"));
        assert!(!selection.matches("Dal"));
    }

    #[test]
    fn test_toggle_last_category_off_yields_all() {
        let mut selection = CategorySelection::all();
        selection.toggle("Sweets");
        selection.toggle("Sweets");
        assert_eq!(selection, CategorySelection::all());
        assert!(!selection.is_empty());
    }

    #[test]
    fn test_selection_never_empty() {
        let mut selection = CategorySelection::default();
        for category in ["Dal", "Rice", "Dal", "All", "Rice", "Rice", "Pizza", "Pizza"] {
            selection.toggle(category);
            assert!(selection.len() >= 1);
            assert!(!(selection.is_all() && selection.len() > 1));
        }
    }

    #[test]
    fn test_deserialize_empty_selection_normalizes() {
        let selection: CategorySelection = serde_json::from_str("[]").unwrap();
        assert_eq!(selection, CategorySelection::all());

        let selection: CategorySelection = serde_json::from_str(r#"["Dal","All"]"#).unwrap();
        assert_eq!(selection, CategorySelection::all());
    }

    #[test]
    fn test_filter_state_json() {
        let state: FilterState = serde_json::from_str(
            r#"{"searchTerm":"","group":"drink","categories":["Beverages"],"vegOnly":true}"#,
        )
        .unwrap();
        assert_eq!(state.group, GroupFilter::Drink);
        assert!(state.categories.contains("Beverages"));
        assert!(state.veg_only);
    }
}
