//! Catalog store
//!
//! Holds the garment list. Loading goes through a simulated network call
//! with a fixed delay; there is no retry or cancellation.

use std::time::Duration;

use super::demo::demo_catalog;
use super::types::{ClothingCategory, ClothingItem, ClothingType};

/// Default simulated load latency
pub const DEFAULT_LOAD_DELAY: Duration = Duration::from_millis(500);

/// In-memory garment catalog
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    items: Vec<ClothingItem>,
    loaded: bool,
}

impl CatalogStore {
    /// Create an empty, not-yet-loaded catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loaded catalog from explicit items
    pub fn from_items(items: Vec<ClothingItem>) -> Self {
        Self { items, loaded: true }
    }

    /// Simulate fetching the demo catalog
    pub async fn fetch_demo(delay: Duration) -> Vec<ClothingItem> {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        demo_catalog()
    }

    /// Load the demo catalog into this store.
    ///
    /// Loading twice replaces the list with the same content.
    pub async fn load(&mut self, delay: Duration) {
        let items = Self::fetch_demo(delay).await;
        self.replace(items);
    }

    /// Replace the whole item list
    pub fn replace(&mut self, items: Vec<ClothingItem>) {
        tracing::info!(count = items.len(), "Catalog loaded");
        self.items = items;
        self.loaded = true;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// All items in catalog order
    pub fn all(&self) -> &[ClothingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find an item by id
    pub fn get(&self, id: &str) -> Option<&ClothingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items of one garment type
    pub fn by_type(&self, clothing_type: ClothingType) -> Vec<&ClothingItem> {
        self.items
            .iter()
            .filter(|item| item.clothing_type == clothing_type)
            .collect()
    }

    /// Items in one category
    pub fn by_category(&self, category: ClothingCategory) -> Vec<&ClothingItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_populates_catalog() {
        let mut store = CatalogStore::new();
        assert!(!store.is_loaded());
        assert!(store.is_empty());

        store.load(Duration::ZERO).await;
        assert!(store.is_loaded());
        assert_eq!(store.len(), 10);
    }

    #[tokio::test]
    async fn test_load_twice_is_stable() {
        let mut store = CatalogStore::new();
        store.load(Duration::ZERO).await;
        let first = store.all().to_vec();
        store.load(Duration::from_millis(1)).await;
        assert_eq!(store.all(), first.as_slice());
    }

    #[test]
    fn test_queries() {
        let store = CatalogStore::from_items(demo_catalog());
        assert_eq!(store.get("dress-1").map(|i| i.name.as_str()), Some("Summer Floral Dress"));
        assert!(store.get("missing").is_none());
        assert_eq!(store.by_type(ClothingType::Shoes).len(), 2);
        assert_eq!(store.by_type(ClothingType::Dress).len(), 1);
        assert_eq!(store.by_category(ClothingCategory::Formal).len(), 4);
        assert!(store.by_category(ClothingCategory::Swimwear).is_empty());
    }
}
