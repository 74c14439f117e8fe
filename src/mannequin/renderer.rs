//! Mannequin renderer
//!
//! Picks the body model for a gender and produces a deformed frame for the
//! current scale factors.

use std::path::Path;

use serde::Serialize;

use crate::measurements::{Gender, ScaleFactors};

use super::deform::{deform, DeformReport};
use super::model::{BodyModel, MannequinAsset, ModelError};
use super::rules::DeformRules;

/// One rendered mannequin state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MannequinFrame {
    pub asset: MannequinAsset,
    pub model: BodyModel,
    pub report: DeformReport,
}

/// Source models plus the rules used to deform them
#[derive(Debug, Clone)]
pub struct MannequinRenderer {
    rules: DeformRules,
    male: BodyModel,
    female: BodyModel,
}

impl MannequinRenderer {
    /// Renderer over the built-in models
    pub fn new(rules: DeformRules) -> Self {
        Self {
            rules,
            male: BodyModel::builtin(Gender::Male),
            female: BodyModel::builtin(Gender::Female),
        }
    }

    /// Replace the source model for a gender with one loaded from disk
    pub fn load_model(&mut self, gender: Gender, path: &Path) -> Result<(), ModelError> {
        let model = BodyModel::load(path)?;
        tracing::info!(gender = gender.display_name(), model = %model.name, "Loaded body model");
        match gender {
            Gender::Male => self.male = model,
            Gender::Female => self.female = model,
        }
        Ok(())
    }

    pub fn rules(&self) -> &DeformRules {
        &self.rules
    }

    pub fn set_rules(&mut self, rules: DeformRules) {
        self.rules = rules;
    }

    pub fn source(&self, gender: Gender) -> &BodyModel {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }

    pub fn render(&self, gender: Gender, factors: &ScaleFactors) -> MannequinFrame {
        let deformed = deform(self.source(gender), &self.rules, factors);
        MannequinFrame {
            asset: MannequinAsset::for_gender(gender),
            model: deformed.model,
            report: deformed.report,
        }
    }
}

impl Default for MannequinRenderer {
    fn default() -> Self {
        Self::new(DeformRules::default())
    }
}
