//! Try-on session
//!
//! Owned state for one configurator user: measurements, worn clothing, and
//! the scene. Every mutation re-derives scale factors and the deformed
//! mannequin before returning.

use crate::catalog::{CatalogStore, ClothingSelection, SelectionChange};
use crate::mannequin::{DragPayload, DropError, MannequinFrame, MannequinRenderer, MannequinScene};
use crate::measurements::{Gender, MannequinConfig, MeasurementField, MeasurementStore, ScaleFactors};

pub struct TryOnSession {
    measurements: MeasurementStore,
    selection: ClothingSelection,
    scene: MannequinScene,
    renderer: MannequinRenderer,
    frame: MannequinFrame,
}

impl TryOnSession {
    pub fn new(renderer: MannequinRenderer) -> Self {
        let measurements = MeasurementStore::new();
        let frame = renderer.render(measurements.gender(), &measurements.scale_factors());
        Self {
            measurements,
            selection: ClothingSelection::new(),
            scene: MannequinScene::new(),
            renderer,
            frame,
        }
    }

    pub fn measurements(&self) -> &MeasurementStore {
        &self.measurements
    }

    pub fn selection(&self) -> &ClothingSelection {
        &self.selection
    }

    pub fn scene(&self) -> &MannequinScene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut MannequinScene {
        &mut self.scene
    }

    /// Mannequin as currently deformed
    pub fn frame(&self) -> &MannequinFrame {
        &self.frame
    }

    pub fn scale_factors(&self) -> ScaleFactors {
        self.measurements.scale_factors()
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.measurements.set_gender(gender);
        self.rerender();
    }

    pub fn update_measurement(&mut self, field: MeasurementField, value: f32) -> f32 {
        let stored = self.measurements.update_measurement(field, value);
        self.rerender();
        stored
    }

    pub fn reset_measurements(&mut self) {
        self.measurements.reset_measurements();
        self.rerender();
    }

    pub fn apply_config(&mut self, config: &MannequinConfig) {
        self.measurements.apply_config(config);
        self.rerender();
    }

    pub fn drop_item(
        &mut self,
        payload: &DragPayload,
        catalog: &CatalogStore,
    ) -> Result<SelectionChange, DropError> {
        self.scene.drop(payload, catalog, &mut self.selection)
    }

    pub fn remove_item(&mut self, item_id: &str) -> bool {
        self.selection.remove(item_id)
    }

    pub fn clear_items(&mut self) {
        self.selection.clear();
    }

    fn rerender(&mut self) {
        self.frame = self
            .renderer
            .render(self.measurements.gender(), &self.measurements.scale_factors());
    }
}

impl Default for TryOnSession {
    fn default() -> Self {
        Self::new(MannequinRenderer::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::demo_catalog;

    #[test]
    fn test_measurement_update_rerenders() {
        let mut session = TryOnSession::default();
        assert_eq!(session.frame().model.root.find("Torso_Chest").unwrap().scale.x, 1.0);

        let stored = session.update_measurement(MeasurementField::Chest, 120.0);
        assert_eq!(stored, 120.0);
        let chest = session.frame().model.root.find("Torso_Chest").unwrap().scale;
        assert!((chest.x - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_gender_switch_resets_and_swaps_model() {
        let mut session = TryOnSession::default();
        session.update_measurement(MeasurementField::Height, 190.0);
        session.set_gender(Gender::Female);

        assert_eq!(session.scale_factors(), ScaleFactors::IDENTITY);
        assert_eq!(session.frame().model.name, "female_mannequin");
        assert_eq!(session.frame().model.root.scale.y, 1.0);
    }

    #[test]
    fn test_reset_restores_baseline_frame() {
        let mut session = TryOnSession::default();
        let baseline = session.frame().clone();
        session.update_measurement(MeasurementField::Waist, 100.0);
        assert_ne!(session.frame(), &baseline);
        session.reset_measurements();
        assert_eq!(session.frame(), &baseline);
    }

    #[test]
    fn test_drop_and_remove() {
        let catalog = CatalogStore::from_items(demo_catalog());
        let mut session = TryOnSession::default();
        session
            .drop_item(&DragPayload::clothing("pants-1"), &catalog)
            .unwrap();
        assert_eq!(session.selection().len(), 1);
        assert!(session.remove_item("pants-1"));
        assert!(session.selection().is_empty());
    }
}
