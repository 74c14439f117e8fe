//! Clothing catalog and selection
//!
//! A static demo catalog with type/category tags, and the worn-item set that
//! the mannequin drop target feeds.

pub mod demo;
pub mod selection;
pub mod store;
pub mod types;

pub use demo::demo_catalog;
pub use selection::{ClothingSelection, SelectionChange};
pub use store::{CatalogStore, DEFAULT_LOAD_DELAY};
pub use types::{ClothingCategory, ClothingItem, ClothingType, UnknownTagError};
