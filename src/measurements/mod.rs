//! Body measurement store
//!
//! Holds the selected gender and raw body measurements (cm) and derives the
//! per-region scale factors that drive mannequin deformation.

pub mod store;
pub mod types;

pub use store::MeasurementStore;
pub use types::{
    Gender, MannequinConfig, MeasurementField, MeasurementRange, Measurements, ScaleFactors,
};
