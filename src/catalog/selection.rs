//! Worn-item selection
//!
//! One item per garment type. Adding an item whose type is already worn
//! replaces that entry in place, keeping the original order.

use super::types::{ClothingItem, ClothingType};

/// Result of adding an item to the selection
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionChange {
    /// Item was added as a new garment type
    Added,
    /// Item replaced the previously worn item of the same type
    Replaced(ClothingItem),
}

/// Items currently worn by the mannequin
#[derive(Debug, Clone, Default)]
pub struct ClothingSelection {
    items: Vec<ClothingItem>,
}

impl ClothingSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wear an item, replacing any item of the same type
    pub fn add(&mut self, item: ClothingItem) -> SelectionChange {
        match self
            .items
            .iter()
            .position(|worn| worn.clothing_type == item.clothing_type)
        {
            Some(index) => {
                let previous = std::mem::replace(&mut self.items[index], item);
                SelectionChange::Replaced(previous)
            }
            None => {
                self.items.push(item);
                SelectionChange::Added
            }
        }
    }

    /// Remove an item by id; returns whether anything was removed
    pub fn remove(&mut self, item_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != item_id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Worn items in the order their types were first added
    pub fn items(&self) -> &[ClothingItem] {
        &self.items
    }

    /// The worn item of a given type, if any
    pub fn item_of_type(&self, clothing_type: ClothingType) -> Option<&ClothingItem> {
        self.items.iter().find(|item| item.clothing_type == clothing_type)
    }

    pub fn contains_type(&self, clothing_type: ClothingType) -> bool {
        self.item_of_type(clothing_type).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::demo::demo_catalog;
    use std::collections::HashSet;

    fn item(id: &str) -> ClothingItem {
        demo_catalog()
            .into_iter()
            .find(|i| i.id == id)
            .expect("demo item")
    }

    #[test]
    fn test_add_distinct_types() {
        let mut sel = ClothingSelection::new();
        assert_eq!(sel.add(item("shirt-1")), SelectionChange::Added);
        assert_eq!(sel.add(item("pants-1")), SelectionChange::Added);
        assert_eq!(sel.len(), 2);
    }

    #[test]
    fn test_same_type_replaces_in_place() {
        let mut sel = ClothingSelection::new();
        sel.add(item("shirt-1"));
        sel.add(item("pants-1"));

        let change = sel.add(item("shirt-2"));
        assert_eq!(change, SelectionChange::Replaced(item("shirt-1")));
        assert_eq!(sel.len(), 2);
        assert_eq!(sel.items()[0].id, "shirt-2");
        assert_eq!(sel.items()[1].id, "pants-1");
    }

    #[test]
    fn test_len_bounded_by_distinct_types() {
        let mut sel = ClothingSelection::new();
        let catalog = demo_catalog();
        for it in catalog.iter().chain(catalog.iter()) {
            sel.add(it.clone());
        }
        let distinct: HashSet<_> = catalog.iter().map(|i| i.clothing_type).collect();
        assert_eq!(sel.len(), distinct.len());
        // Last assigned wins
        assert_eq!(sel.item_of_type(ClothingType::Shoes).unwrap().id, "shoes-2");
    }

    #[test]
    fn test_remove_and_clear() {
        let mut sel = ClothingSelection::new();
        sel.add(item("dress-1"));
        sel.add(item("shoes-1"));
        assert!(sel.remove("dress-1"));
        assert!(!sel.remove("dress-1"));
        assert!(!sel.contains_type(ClothingType::Dress));
        sel.clear();
        assert!(sel.is_empty());
    }
}
