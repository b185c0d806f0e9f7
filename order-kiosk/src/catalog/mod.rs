//! Menu catalog
//!
//! The catalog is built once at startup and never mutated afterwards. Both
//! stages hold it through an `Arc<Catalog>`, so the checkout stage never has
//! to refetch it.
//!
//! - **filter**: search / group / category / diet predicates over the catalog
//! - **sample**: the built-in restaurant menu

pub mod filter;
pub mod sample;

pub use filter::{CategorySelection, FilterState, filter_entries};
pub use sample::sample_catalog;

use shared::error::{AppError, ErrorCode};
use shared::models::{ALL_CATEGORIES, MenuEntry};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Catalog construction errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate menu entry id: {0}")]
    DuplicateEntry(String),

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match &err {
            CatalogError::DuplicateEntry(id) => {
                AppError::with_message(ErrorCode::DuplicateMenuEntry, err.to_string())
                    .with_detail("id", id.clone())
            }
            CatalogError::Parse(_) => {
                AppError::with_message(ErrorCode::InvalidCatalog, err.to_string())
            }
            CatalogError::Io(_) => AppError::internal(err.to_string()),
        }
    }
}

/// Fixed, ordered collection of orderable menu entries
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<MenuEntry>,
    /// id -> position in `entries`
    index: HashMap<String, usize>,
    /// Display order of category chips, "All" first
    categories: Vec<String>,
}

impl Catalog {
    /// Build a catalog; category display order follows first appearance
    pub fn new(entries: Vec<MenuEntry>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            if index.insert(entry.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateEntry(entry.id.clone()));
            }
        }

        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for entry in &entries {
            if !categories.contains(&entry.category) {
                categories.push(entry.category.clone());
            }
        }

        tracing::debug!(
            entries = entries.len(),
            categories = categories.len() - 1,
            "Catalog built"
        );

        Ok(Self {
            entries,
            index,
            categories,
        })
    }

    /// Override the category display order
    ///
    /// Categories used by entries but missing from `order` are appended in
    /// first-appearance order; "All" is always first.
    pub fn with_category_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for category in order.into_iter().map(Into::into) {
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        for category in std::mem::take(&mut self.categories) {
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        self.categories = categories;
        self
    }

    /// Parse a JSON array of menu entries
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<MenuEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Load a JSON catalog file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), entries = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&MenuEntry> {
        self.index.get(id).map(|&pos| &self.entries[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Price of an entry, `None` for unknown ids
    pub fn price_of(&self, id: &str) -> Option<u64> {
        self.get(id).map(|e| e.price)
    }

    /// Entries in catalog order
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MenuEntry> {
        self.entries.iter()
    }

    /// Category chips in display order, "All" first
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a MenuEntry;
    type IntoIter = std::slice::Iter<'a, MenuEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
