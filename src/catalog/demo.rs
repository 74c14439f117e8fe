//! Built-in demo catalog
//!
//! Thumbnails point at the shared texture set until product photography exists.

use super::types::{ClothingCategory, ClothingItem, ClothingType};

struct DemoItem {
    id: &'static str,
    name: &'static str,
    clothing_type: ClothingType,
    thumbnail: &'static str,
    model: &'static str,
    size: &'static str,
    color: &'static str,
    brand: &'static str,
    description: &'static str,
    category: ClothingCategory,
}

const DEMO_ITEMS: &[DemoItem] = &[
    DemoItem {
        id: "shirt-1",
        name: "Classic White Shirt",
        clothing_type: ClothingType::Shirt,
        thumbnail: "/textures/wood.jpg",
        model: "/models/shirt_white.glb",
        size: "M",
        color: "white",
        brand: "Eleganza",
        description: "A timeless white button-up shirt for any occasion",
        category: ClothingCategory::Formal,
    },
    DemoItem {
        id: "shirt-2",
        name: "Blue Casual Tee",
        clothing_type: ClothingType::Shirt,
        thumbnail: "/textures/sky.png",
        model: "/models/tshirt_blue.glb",
        size: "L",
        color: "blue",
        brand: "Urban Style",
        description: "Comfortable lightweight t-shirt for everyday wear",
        category: ClothingCategory::Casual,
    },
    DemoItem {
        id: "pants-1",
        name: "Black Slim Pants",
        clothing_type: ClothingType::Pants,
        thumbnail: "/textures/asphalt.png",
        model: "/models/pants_black.glb",
        size: "32",
        color: "black",
        brand: "Eleganza",
        description: "Slim fit black pants for a professional look",
        category: ClothingCategory::Formal,
    },
    DemoItem {
        id: "pants-2",
        name: "Blue Denim Jeans",
        clothing_type: ClothingType::Pants,
        thumbnail: "/textures/sky.png",
        model: "/models/jeans_blue.glb",
        size: "30",
        color: "blue",
        brand: "Urban Style",
        description: "Classic blue jeans with a comfortable fit",
        category: ClothingCategory::Casual,
    },
    DemoItem {
        id: "dress-1",
        name: "Summer Floral Dress",
        clothing_type: ClothingType::Dress,
        thumbnail: "/textures/grass.png",
        model: "/models/dress_floral.glb",
        size: "S",
        color: "floral",
        brand: "Eleganza",
        description: "Light summer dress with floral pattern",
        category: ClothingCategory::Casual,
    },
    DemoItem {
        id: "jacket-1",
        name: "Black Blazer",
        clothing_type: ClothingType::Jacket,
        thumbnail: "/textures/asphalt.png",
        model: "/models/blazer_black.glb",
        size: "M",
        color: "black",
        brand: "Eleganza",
        description: "Professional blazer for business attire",
        category: ClothingCategory::Formal,
    },
    DemoItem {
        id: "jacket-2",
        name: "Denim Jacket",
        clothing_type: ClothingType::Jacket,
        thumbnail: "/textures/sky.png",
        model: "/models/jacket_denim.glb",
        size: "L",
        color: "blue",
        brand: "Urban Style",
        description: "Classic denim jacket for casual wear",
        category: ClothingCategory::Casual,
    },
    DemoItem {
        id: "skirt-1",
        name: "A-Line Skirt",
        clothing_type: ClothingType::Skirt,
        thumbnail: "/textures/sand.jpg",
        model: "/models/skirt_beige.glb",
        size: "M",
        color: "beige",
        brand: "Eleganza",
        description: "A-line skirt for versatile styling",
        category: ClothingCategory::Casual,
    },
    DemoItem {
        id: "shoes-1",
        name: "Black Leather Shoes",
        clothing_type: ClothingType::Shoes,
        thumbnail: "/textures/asphalt.png",
        model: "/models/shoes_black.glb",
        size: "42",
        color: "black",
        brand: "Eleganza",
        description: "Formal leather shoes for professional settings",
        category: ClothingCategory::Formal,
    },
    DemoItem {
        id: "shoes-2",
        name: "White Sneakers",
        clothing_type: ClothingType::Shoes,
        thumbnail: "/textures/sand.jpg",
        model: "/models/sneakers_white.glb",
        size: "41",
        color: "white",
        brand: "Urban Style",
        description: "Comfortable casual sneakers",
        category: ClothingCategory::Casual,
    },
];

/// Build the demo catalog
pub fn demo_catalog() -> Vec<ClothingItem> {
    DEMO_ITEMS
        .iter()
        .map(|d| ClothingItem {
            id: d.id.to_string(),
            name: d.name.to_string(),
            clothing_type: d.clothing_type,
            thumbnail_url: d.thumbnail.to_string(),
            model_url: Some(d.model.to_string()),
            size: d.size.to_string(),
            color: d.color.to_string(),
            brand: d.brand.to_string(),
            description: d.description.to_string(),
            category: d.category,
        })
        .collect()
}
