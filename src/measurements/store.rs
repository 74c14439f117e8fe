//! Measurement store
//!
//! Single-writer owner of the mannequin's gender and measurements. Every
//! mutation recomputes the full scale factor set synchronously.

use super::types::{Gender, MannequinConfig, MeasurementField, Measurements, ScaleFactors};

/// Owned measurement state
#[derive(Debug, Clone)]
pub struct MeasurementStore {
    gender: Gender,
    measurements: Measurements,
    scale_factors: ScaleFactors,
    /// Whether the user has the measurement panel open
    customizing: bool,
}

impl MeasurementStore {
    /// Create a store at the male baseline
    pub fn new() -> Self {
        Self::with_gender(Gender::Male)
    }

    /// Create a store at the given gender's baseline
    pub fn with_gender(gender: Gender) -> Self {
        Self {
            gender,
            measurements: gender.baseline(),
            scale_factors: ScaleFactors::IDENTITY,
            customizing: false,
        }
    }

    /// Current gender
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Current measurements
    pub fn measurements(&self) -> &Measurements {
        &self.measurements
    }

    /// Current scale factors
    pub fn scale_factors(&self) -> ScaleFactors {
        self.scale_factors
    }

    pub fn is_customizing(&self) -> bool {
        self.customizing
    }

    pub fn set_customizing(&mut self, value: bool) {
        self.customizing = value;
    }

    /// Switch gender, resetting measurements to that gender's baseline
    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = gender;
        self.measurements = gender.baseline();
        self.recalculate();
    }

    /// Update one field, clamped to its slider range.
    ///
    /// Returns the value actually stored.
    pub fn update_measurement(&mut self, field: MeasurementField, value: f32) -> f32 {
        let stored = field.range().clamp(value);
        if stored != value {
            tracing::debug!(?field, requested = value, stored, "Measurement clamped to slider range");
        }
        self.measurements.set(field, stored);
        self.recalculate();
        stored
    }

    /// Restore the current gender's baseline
    pub fn reset_measurements(&mut self) {
        self.measurements = self.gender.baseline();
        self.scale_factors = ScaleFactors::IDENTITY;
    }

    /// Snapshot gender and measurements
    pub fn config(&self) -> MannequinConfig {
        MannequinConfig {
            gender: self.gender,
            measurements: self.measurements,
        }
    }

    /// Load a saved configuration, clamping every field
    pub fn apply_config(&mut self, config: &MannequinConfig) {
        self.gender = config.gender;
        self.measurements = config.measurements.clamped();
        self.recalculate();
    }

    fn recalculate(&mut self) {
        self.scale_factors = ScaleFactors::compute(self.gender, &self.measurements);
    }
}

impl Default for MeasurementStore {
    fn default() -> Self {
        Self::new()
    }
}
