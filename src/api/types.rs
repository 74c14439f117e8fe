//! API request/response types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::booking::FieldError;
use crate::mannequin::{DeformReport, MannequinAsset};
use crate::measurements::{Gender, MeasurementField, MeasurementRange, Measurements, ScaleFactors};

// ============================================================================
// Status Types
// ============================================================================

/// Server status response
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub catalog_loaded: bool,
    pub mail_enabled: bool,
}

// ============================================================================
// Mannequin Types
// ============================================================================

/// Measurements to convert; omitted fields stay at the gender baseline
#[derive(Debug, Clone, Deserialize)]
pub struct ScaleFactorsRequest {
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub measurements: HashMap<MeasurementField, f32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleFactorsResponse {
    pub gender: Gender,
    /// Measurements after clamping
    pub measurements: Measurements,
    pub scale_factors: ScaleFactors,
    pub asset: MannequinAsset,
    pub deformation: DeformReport,
}

/// Slider description for one field
#[derive(Debug, Clone, Serialize)]
pub struct FieldRangeResponse {
    pub field: MeasurementField,
    pub label: &'static str,
    #[serde(flatten)]
    pub range: MeasurementRange,
    pub baseline: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct BaselineResponse {
    pub gender: Gender,
    pub measurements: Measurements,
    pub ranges: Vec<FieldRangeResponse>,
}

impl BaselineResponse {
    pub fn for_gender(gender: Gender) -> Self {
        let measurements = gender.baseline();
        let ranges = MeasurementField::all()
            .iter()
            .map(|&field| FieldRangeResponse {
                field,
                label: field.display_name(),
                range: field.range(),
                baseline: measurements.get(field),
            })
            .collect();
        Self {
            gender,
            measurements,
            ranges,
        }
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Error body for every non-2xx response
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub error: String,
    pub message: String,
    pub code: u16,
    /// Per-field validation failures
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

impl ApiError {
    fn new(error: &str, message: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
            code,
            fields: Vec::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("Not Found", message, 404)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("Bad Request", message, 400)
    }

    pub fn validation(fields: Vec<FieldError>) -> Self {
        Self {
            fields,
            ..Self::new("Bad Request", "Booking request failed validation", 400)
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("Internal Server Error", message, 500)
    }
}
