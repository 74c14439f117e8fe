//! Measurement types and baselines
//!
//! Defines genders, measurement fields with their slider ranges, the two
//! baseline bodies and the scale factor record derived from them.

use serde::{Deserialize, Serialize};

/// Binary gender tag selecting the baseline body and mannequin model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Get all genders for iteration
    pub fn all() -> &'static [Gender] {
        &[Gender::Male, Gender::Female]
    }

    /// Parse from the lowercase wire name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }

    /// Baseline measurements for this gender
    pub fn baseline(&self) -> Measurements {
        match self {
            Gender::Male => Measurements::MALE_BASELINE,
            Gender::Female => Measurements::FEMALE_BASELINE,
        }
    }
}

/// Inclusive slider range for a measurement field (cm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRange {
    pub min: f32,
    pub max: f32,
}

impl MeasurementRange {
    const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamp a value into this range; NaN maps to the minimum
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }

    /// Check whether a value lies inside the range
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Named measurement field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MeasurementField {
    Chest,
    Waist,
    Hips,
    Height,
    Shoulders,
    Inseam,
    NeckCircumference,
    ArmLength,
}

impl MeasurementField {
    /// Get all fields in slider display order
    pub fn all() -> &'static [MeasurementField] {
        &[
            MeasurementField::Height,
            MeasurementField::Chest,
            MeasurementField::Waist,
            MeasurementField::Hips,
            MeasurementField::Shoulders,
            MeasurementField::Inseam,
            MeasurementField::NeckCircumference,
            MeasurementField::ArmLength,
        ]
    }

    /// Slider range for this field
    pub fn range(&self) -> MeasurementRange {
        match self {
            MeasurementField::Height => MeasurementRange::new(150.0, 200.0),
            MeasurementField::Chest => MeasurementRange::new(75.0, 125.0),
            MeasurementField::Waist => MeasurementRange::new(60.0, 110.0),
            MeasurementField::Hips => MeasurementRange::new(75.0, 125.0),
            MeasurementField::Shoulders => MeasurementRange::new(35.0, 55.0),
            MeasurementField::Inseam => MeasurementRange::new(65.0, 90.0),
            MeasurementField::NeckCircumference => MeasurementRange::new(30.0, 45.0),
            MeasurementField::ArmLength => MeasurementRange::new(50.0, 75.0),
        }
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            MeasurementField::Chest => "Chest",
            MeasurementField::Waist => "Waist",
            MeasurementField::Hips => "Hips",
            MeasurementField::Height => "Height",
            MeasurementField::Shoulders => "Shoulders",
            MeasurementField::Inseam => "Inseam",
            MeasurementField::NeckCircumference => "Neck",
            MeasurementField::ArmLength => "Arm Length",
        }
    }
}

/// Raw body measurements in centimetres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurements {
    pub chest: f32,
    pub waist: f32,
    pub hips: f32,
    pub height: f32,
    pub shoulders: f32,
    pub inseam: f32,
    pub neck_circumference: f32,
    pub arm_length: f32,
}

impl Measurements {
    pub const MALE_BASELINE: Measurements = Measurements {
        chest: 100.0,
        waist: 85.0,
        hips: 95.0,
        height: 180.0,
        shoulders: 45.0,
        inseam: 82.0,
        neck_circumference: 38.0,
        arm_length: 65.0,
    };

    pub const FEMALE_BASELINE: Measurements = Measurements {
        chest: 90.0,
        waist: 70.0,
        hips: 100.0,
        height: 165.0,
        shoulders: 40.0,
        inseam: 75.0,
        neck_circumference: 33.0,
        arm_length: 60.0,
    };

    /// Read a single field
    pub fn get(&self, field: MeasurementField) -> f32 {
        match field {
            MeasurementField::Chest => self.chest,
            MeasurementField::Waist => self.waist,
            MeasurementField::Hips => self.hips,
            MeasurementField::Height => self.height,
            MeasurementField::Shoulders => self.shoulders,
            MeasurementField::Inseam => self.inseam,
            MeasurementField::NeckCircumference => self.neck_circumference,
            MeasurementField::ArmLength => self.arm_length,
        }
    }

    /// Write a single field without clamping
    pub fn set(&mut self, field: MeasurementField, value: f32) {
        let slot = match field {
            MeasurementField::Chest => &mut self.chest,
            MeasurementField::Waist => &mut self.waist,
            MeasurementField::Hips => &mut self.hips,
            MeasurementField::Height => &mut self.height,
            MeasurementField::Shoulders => &mut self.shoulders,
            MeasurementField::Inseam => &mut self.inseam,
            MeasurementField::NeckCircumference => &mut self.neck_circumference,
            MeasurementField::ArmLength => &mut self.arm_length,
        };
        *slot = value;
    }

    /// Return a copy with every field clamped into its slider range
    pub fn clamped(&self) -> Self {
        let mut out = *self;
        for &field in MeasurementField::all() {
            out.set(field, field.range().clamp(self.get(field)));
        }
        out
    }
}

impl Default for Measurements {
    fn default() -> Self {
        Self::MALE_BASELINE
    }
}

/// Per-region multipliers relative to the gender baseline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleFactors {
    pub chest: f32,
    pub waist: f32,
    pub hips: f32,
    pub height: f32,
    pub shoulders: f32,
    pub limbs: f32,
    pub neck: f32,
}

impl ScaleFactors {
    /// Neutral factors reproducing the baseline body
    pub const IDENTITY: ScaleFactors = ScaleFactors {
        chest: 1.0,
        waist: 1.0,
        hips: 1.0,
        height: 1.0,
        shoulders: 1.0,
        limbs: 1.0,
        neck: 1.0,
    };

    /// Compute factors as `current / baseline` for the given gender.
    ///
    /// Limbs average the inseam and arm-length ratios.
    pub fn compute(gender: Gender, measurements: &Measurements) -> Self {
        let base = gender.baseline();
        let inseam_ratio = measurements.inseam / base.inseam;
        let arm_ratio = measurements.arm_length / base.arm_length;

        Self {
            chest: measurements.chest / base.chest,
            waist: measurements.waist / base.waist,
            hips: measurements.hips / base.hips,
            height: measurements.height / base.height,
            shoulders: measurements.shoulders / base.shoulders,
            limbs: (inseam_ratio + arm_ratio) / 2.0,
            neck: measurements.neck_circumference / base.neck_circumference,
        }
    }

    /// Check that every factor is strictly positive and finite
    pub fn is_valid(&self) -> bool {
        [
            self.chest,
            self.waist,
            self.hips,
            self.height,
            self.shoulders,
            self.limbs,
            self.neck,
        ]
        .iter()
        .all(|f| f.is_finite() && *f > 0.0)
    }
}

impl Default for ScaleFactors {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Gender plus measurements, the persisted shape of a mannequin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct MannequinConfig {
    pub gender: Gender,
    pub measurements: Measurements,
}
