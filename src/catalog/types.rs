//! Clothing catalog types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Garment type; the selection holds at most one item per type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClothingType {
    Shirt,
    Pants,
    Dress,
    Jacket,
    Skirt,
    Shoes,
}

impl ClothingType {
    /// Get all garment types in catalog tab order
    pub fn all() -> &'static [ClothingType] {
        &[
            ClothingType::Shirt,
            ClothingType::Pants,
            ClothingType::Dress,
            ClothingType::Jacket,
            ClothingType::Skirt,
            ClothingType::Shoes,
        ]
    }

    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            ClothingType::Shirt => "shirt",
            ClothingType::Pants => "pants",
            ClothingType::Dress => "dress",
            ClothingType::Jacket => "jacket",
            ClothingType::Skirt => "skirt",
            ClothingType::Shoes => "shoes",
        }
    }
}

/// Catalog category tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClothingCategory {
    Casual,
    Formal,
    Athletic,
    Swimwear,
    Outerwear,
}

impl ClothingCategory {
    pub fn all() -> &'static [ClothingCategory] {
        &[
            ClothingCategory::Casual,
            ClothingCategory::Formal,
            ClothingCategory::Athletic,
            ClothingCategory::Swimwear,
            ClothingCategory::Outerwear,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClothingCategory::Casual => "casual",
            ClothingCategory::Formal => "formal",
            ClothingCategory::Athletic => "athletic",
            ClothingCategory::Swimwear => "swimwear",
            ClothingCategory::Outerwear => "outerwear",
        }
    }
}

/// Error for unknown type/category names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownTagError {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for ClothingType {
    type Err = UnknownTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClothingType::all()
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownTagError {
                kind: "clothing type",
                value: s.to_string(),
            })
    }
}

impl FromStr for ClothingCategory {
    type Err = UnknownTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClothingCategory::all()
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownTagError {
                kind: "clothing category",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for ClothingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ClothingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A garment in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub clothing_type: ClothingType,
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_url: Option<String>,
    pub size: String,
    pub color: String,
    pub brand: String,
    pub description: String,
    pub category: ClothingCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_parse_case_insensitive() {
        assert_eq!("Shoes".parse::<ClothingType>(), Ok(ClothingType::Shoes));
        assert!("hat".parse::<ClothingType>().is_err());
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("formal".parse::<ClothingCategory>(), Ok(ClothingCategory::Formal));
        let err = "party".parse::<ClothingCategory>().unwrap_err();
        assert_eq!(err.to_string(), "unknown clothing category 'party'");
    }

    #[test]
    fn test_item_wire_format() {
        let json = serde_json::json!({
            "id": "shirt-9",
            "name": "Test Shirt",
            "type": "shirt",
            "thumbnailUrl": "/textures/wood.jpg",
            "size": "M",
            "color": "white",
            "brand": "Eleganza",
            "description": "",
            "category": "casual"
        });
        let item: ClothingItem = serde_json::from_value(json).unwrap();
        assert_eq!(item.clothing_type, ClothingType::Shirt);
        assert!(item.model_url.is_none());

        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["type"], "shirt");
        assert!(back.get("modelUrl").is_none());
    }
}
