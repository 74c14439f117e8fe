//! Try-On Server Library
//!
//! Backend and domain core for a virtual try-on configurator: body
//! measurements and the scale factors they drive, data-driven mannequin
//! deformation, the clothing catalog, brand theming, and booking intake.

pub mod api;
pub mod booking;
pub mod brand;
pub mod catalog;
pub mod mannequin;
pub mod measurements;
pub mod session;
pub mod settings;
pub mod telemetry;

pub use brand::{BrandSettings, BrandSettingsStore, BrandSettingsUpdate};
pub use catalog::{CatalogStore, ClothingItem, ClothingSelection};
pub use mannequin::{DeformRules, MannequinRenderer, MannequinScene};
pub use measurements::{Gender, MeasurementStore, Measurements, ScaleFactors};
pub use session::TryOnSession;
pub use settings::{ServerSettings, SettingsError};
