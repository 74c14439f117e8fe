//! Try-on scene
//!
//! Lighting rig, floor, turntable rotation, and the drop target that turns
//! dragged catalog items into worn garments.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogStore, ClothingSelection, SelectionChange};

use super::camera::OrbitCamera;

/// Drag payload kind accepted by the mannequin
pub const CLOTHING_ITEM_DRAG_KIND: &str = "clothing-item";

/// Turntable speed in radians per second
pub const TURNTABLE_SPEED: f32 = 0.15;

// ============================================================================
// Lighting
// ============================================================================

/// Light source type
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum LightKind {
    Ambient,
    Directional { position: Vec3, cast_shadow: bool },
    Spot { position: Vec3 },
    Point { position: Vec3 },
}

/// A single light
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Light {
    #[serde(flatten)]
    pub kind: LightKind,
    pub intensity: f32,
    /// Linear RGB
    pub color: [f32; 3],
}

impl Light {
    fn white(kind: LightKind, intensity: f32) -> Self {
        Self {
            kind,
            intensity,
            color: [1.0, 1.0, 1.0],
        }
    }
}

/// Parse a `#rrggbb` color into 0..1 components
pub fn parse_hex_color(hex: &str) -> Option<[f32; 3]> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| {
        u8::from_str_radix(hex.get(i..i + 2)?, 16)
            .ok()
            .map(|v| v as f32 / 255.0)
    };
    Some([channel(0)?, channel(2)?, channel(4)?])
}

/// Lights surrounding the mannequin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightingRig {
    pub lights: Vec<Light>,
}

impl LightingRig {
    /// Studio setup: ambient fill, key with shadows, cool fill, top spot, rim
    pub fn studio() -> Self {
        let tinted = |kind, intensity, hex: &str| Light {
            kind,
            intensity,
            color: parse_hex_color(hex).unwrap_or([1.0, 1.0, 1.0]),
        };

        Self {
            lights: vec![
                Light::white(LightKind::Ambient, 1.2),
                Light::white(
                    LightKind::Directional {
                        position: Vec3::new(5.0, 8.0, 5.0),
                        cast_shadow: true,
                    },
                    1.8,
                ),
                tinted(
                    LightKind::Directional {
                        position: Vec3::new(-5.0, 5.0, -5.0),
                        cast_shadow: false,
                    },
                    1.0,
                    "#f0f9ff",
                ),
                Light::white(
                    LightKind::Spot {
                        position: Vec3::new(0.0, 15.0, 0.0),
                    },
                    1.2,
                ),
                tinted(
                    LightKind::Point {
                        position: Vec3::new(0.0, 1.0, -4.0),
                    },
                    0.5,
                    "#e0f7fa",
                ),
            ],
        }
    }

    /// Number of shadow-casting lights
    pub fn shadow_casters(&self) -> usize {
        self.lights
            .iter()
            .filter(|l| matches!(l.kind, LightKind::Directional { cast_shadow: true, .. }))
            .count()
    }
}

impl Default for LightingRig {
    fn default() -> Self {
        Self::studio()
    }
}

/// Circular floor under the mannequin
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Floor {
    pub radius: f32,
    pub height: f32,
}

impl Default for Floor {
    fn default() -> Self {
        Self {
            radius: 4.0,
            height: -1.0,
        }
    }
}

// ============================================================================
// Drop target
// ============================================================================

/// Data carried by a drag from the catalog panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragPayload {
    pub kind: String,
    pub item_id: String,
}

impl DragPayload {
    pub fn clothing(item_id: impl Into<String>) -> Self {
        Self {
            kind: CLOTHING_ITEM_DRAG_KIND.to_string(),
            item_id: item_id.into(),
        }
    }
}

/// Rejected drops
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DropError {
    #[error("drag kind '{0}' is not accepted")]
    UnsupportedKind(String),
    #[error("clothing item '{0}' not found")]
    UnknownItem(String),
}

// ============================================================================
// Scene
// ============================================================================

/// Viewport state around the mannequin
#[derive(Debug, Clone)]
pub struct MannequinScene {
    pub camera: OrbitCamera,
    pub lighting: LightingRig,
    pub floor: Floor,
    elapsed: f32,
    hovering: bool,
}

impl MannequinScene {
    pub fn new() -> Self {
        Self {
            camera: OrbitCamera::new(),
            lighting: LightingRig::studio(),
            floor: Floor::default(),
            elapsed: 0.0,
            hovering: false,
        }
    }

    /// Advance time by `dt` seconds and step the camera damping
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
        self.camera.update();
    }

    /// Seconds since the scene started
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Current turntable yaw of the mannequin
    pub fn mannequin_yaw(&self) -> f32 {
        self.elapsed * TURNTABLE_SPEED
    }

    /// Track whether a drag is over the drop target
    pub fn set_hover(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Accept a dropped payload, putting the item on the mannequin
    pub fn drop(
        &mut self,
        payload: &DragPayload,
        catalog: &CatalogStore,
        selection: &mut ClothingSelection,
    ) -> Result<SelectionChange, DropError> {
        self.hovering = false;

        if payload.kind != CLOTHING_ITEM_DRAG_KIND {
            return Err(DropError::UnsupportedKind(payload.kind.clone()));
        }
        let item = catalog
            .get(&payload.item_id)
            .ok_or_else(|| DropError::UnknownItem(payload.item_id.clone()))?;

        tracing::debug!(item = %item.id, clothing_type = %item.clothing_type, "Clothing dropped on mannequin");
        Ok(selection.add(item.clone()))
    }
}

impl Default for MannequinScene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::demo_catalog;

    #[test]
    fn test_studio_rig() {
        let rig = LightingRig::studio();
        assert_eq!(rig.lights.len(), 5);
        assert_eq!(rig.shadow_casters(), 1);
        assert_eq!(rig.lights[0].intensity, 1.2);
        let rim = rig.lights[4];
        assert!(matches!(rim.kind, LightKind::Point { .. }));
        assert!((rim.color[0] - 224.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ffffff"), Some([1.0, 1.0, 1.0]));
        assert_eq!(parse_hex_color("ffffff"), None);
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#gg0000"), None);
    }

    #[test]
    fn test_turntable() {
        let mut scene = MannequinScene::new();
        scene.tick(2.0);
        scene.tick(-1.0);
        assert!((scene.mannequin_yaw() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_drop_adds_and_replaces() {
        let catalog = CatalogStore::from_items(demo_catalog());
        let mut selection = ClothingSelection::new();
        let mut scene = MannequinScene::new();

        let shirts: Vec<_> = catalog
            .by_type(crate::catalog::ClothingType::Shirt)
            .into_iter()
            .map(|i| i.id.clone())
            .collect();
        assert!(shirts.len() >= 2);

        scene.set_hover(true);
        let first = scene.drop(&DragPayload::clothing(&shirts[0]), &catalog, &mut selection);
        assert_eq!(first, Ok(SelectionChange::Added));
        assert!(!scene.is_hovering());

        let second = scene
            .drop(&DragPayload::clothing(&shirts[1]), &catalog, &mut selection)
            .unwrap();
        assert!(matches!(second, SelectionChange::Replaced(ref old) if old.id == shirts[0]));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_drop_rejections() {
        let catalog = CatalogStore::from_items(demo_catalog());
        let mut selection = ClothingSelection::new();
        let mut scene = MannequinScene::new();

        let wrong = DragPayload {
            kind: "file".to_string(),
            item_id: "1".to_string(),
        };
        assert_eq!(
            scene.drop(&wrong, &catalog, &mut selection),
            Err(DropError::UnsupportedKind("file".to_string()))
        );
        assert_eq!(
            scene.drop(&DragPayload::clothing("missing"), &catalog, &mut selection),
            Err(DropError::UnknownItem("missing".to_string()))
        );
        assert!(selection.is_empty());
    }
}
