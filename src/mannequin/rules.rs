//! Deformation rules
//!
//! Rules decide which scale factor applies to a mesh node. They are plain
//! data so each mannequin asset can ship its own naming and position bands.
//! Evaluation is two-pass: the first rule whose name patterns match wins;
//! only when no rule matches by name does the first matching position band
//! apply.

use std::fs;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::measurements::ScaleFactors;

use super::model::{BodyNode, ModelError};

/// Body region a rule drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyRegion {
    Chest,
    Waist,
    Hips,
    Shoulders,
    Neck,
    Limbs,
}

impl BodyRegion {
    /// Pick this region's factor
    pub fn factor(&self, factors: &ScaleFactors) -> f32 {
        match self {
            BodyRegion::Chest => factors.chest,
            BodyRegion::Waist => factors.waist,
            BodyRegion::Hips => factors.hips,
            BodyRegion::Shoulders => factors.shoulders,
            BodyRegion::Neck => factors.neck,
            BodyRegion::Limbs => factors.limbs,
        }
    }
}

/// Position window used when no name pattern matches.
///
/// Bounds are exclusive; absent bounds are open.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PositionBand {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_y: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_y: Option<f32>,
    /// Minimum lateral offset `|x|`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_abs_x: Option<f32>,
}

impl PositionBand {
    /// Vertical window `(min_y, max_y)`
    pub fn vertical(min_y: f32, max_y: f32) -> Self {
        Self {
            min_y: Some(min_y),
            max_y: Some(max_y),
            min_abs_x: None,
        }
    }

    pub fn contains(&self, position: Vec3) -> bool {
        self.min_y.map_or(true, |min| position.y > min)
            && self.max_y.map_or(true, |max| position.y < max)
            && self.min_abs_x.map_or(true, |min| position.x.abs() > min)
    }
}

/// Per-axis multipliers; an axis scales by `factor * m`, or stays untouched when absent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct AxisWeights {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f32>,
}

impl AxisWeights {
    /// Girth scaling on the horizontal plane
    pub const GIRTH: AxisWeights = AxisWeights {
        x: Some(1.0),
        y: None,
        z: Some(1.0),
    };

    /// Length scaling along the vertical axis
    pub const LENGTH: AxisWeights = AxisWeights {
        x: None,
        y: Some(1.0),
        z: None,
    };

    /// Apply to a scale vector
    pub fn apply(&self, scale: Vec3, factor: f32) -> Vec3 {
        Vec3::new(
            self.x.map_or(scale.x, |m| scale.x * factor * m),
            self.y.map_or(scale.y, |m| scale.y * factor * m),
            self.z.map_or(scale.z, |m| scale.z * factor * m),
        )
    }
}

/// Single matching rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeformRule {
    pub region: BodyRegion,
    /// Case-insensitive substrings matched against the node name
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub band: Option<PositionBand>,
    #[serde(default)]
    pub axes: AxisWeights,
}

impl DeformRule {
    fn new(region: BodyRegion, patterns: &[&str], band: Option<PositionBand>, axes: AxisWeights) -> Self {
        Self {
            region,
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            band,
            axes,
        }
    }

    /// Name match against an already-lowercased node name
    fn matches_name(&self, lower_name: &str) -> bool {
        self.patterns
            .iter()
            .any(|p| !p.is_empty() && lower_name.contains(&p.to_lowercase()))
    }

    fn matches_band(&self, position: Vec3) -> bool {
        self.band.map_or(false, |band| band.contains(position))
    }
}

/// How a node was matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Name,
    Band,
}

/// Rule chosen for a node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleMatch<'a> {
    pub rule: &'a DeformRule,
    pub kind: MatchKind,
}

/// Named built-in rule sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuleSet {
    /// chest/torso > waist > hips > shoulders
    #[default]
    Basic,
    /// Basic plus neck > limbs
    Extended,
}

impl RuleSet {
    pub fn rules(&self) -> DeformRules {
        match self {
            RuleSet::Basic => DeformRules::basic(),
            RuleSet::Extended => DeformRules::extended(),
        }
    }
}

/// Ordered rule list; earlier rules take priority
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeformRules {
    pub rules: Vec<DeformRule>,
}

impl DeformRules {
    /// Torso and shoulder rules
    pub fn basic() -> Self {
        Self {
            rules: vec![
                DeformRule::new(
                    BodyRegion::Chest,
                    &["chest", "torso", "upper"],
                    Some(PositionBand::vertical(0.5, 1.2)),
                    AxisWeights::GIRTH,
                ),
                DeformRule::new(
                    BodyRegion::Waist,
                    &["waist", "abdomen", "stomach"],
                    Some(PositionBand::vertical(0.0, 0.5)),
                    AxisWeights::GIRTH,
                ),
                DeformRule::new(
                    BodyRegion::Hips,
                    &["hip", "pelvis", "thigh"],
                    Some(PositionBand::vertical(-0.3, 0.0)),
                    AxisWeights::GIRTH,
                ),
                DeformRule::new(
                    BodyRegion::Shoulders,
                    &["shoulder", "clavicle"],
                    Some(PositionBand {
                        min_y: Some(0.8),
                        max_y: None,
                        min_abs_x: Some(0.2),
                    }),
                    AxisWeights {
                        x: Some(1.0),
                        y: None,
                        z: Some(0.5),
                    },
                ),
            ],
        }
    }

    /// Basic rules followed by neck and limb rules
    pub fn extended() -> Self {
        let mut rules = Self::basic();
        rules.rules.push(DeformRule::new(
            BodyRegion::Neck,
            &["neck", "collar"],
            None,
            AxisWeights::GIRTH,
        ));
        rules.rules.push(DeformRule::new(
            BodyRegion::Limbs,
            &["arm", "leg", "shin", "calf", "knee", "elbow"],
            None,
            AxisWeights::LENGTH,
        ));
        rules
    }

    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load an asset-specific rule file
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Choose the rule for a node: name matches first, then position bands
    pub fn classify(&self, node: &BodyNode) -> Option<RuleMatch<'_>> {
        let lower = node.name.to_lowercase();
        if let Some(rule) = self.rules.iter().find(|r| r.matches_name(&lower)) {
            return Some(RuleMatch {
                rule,
                kind: MatchKind::Name,
            });
        }
        self.rules
            .iter()
            .find(|r| r.matches_band(node.position))
            .map(|rule| RuleMatch {
                rule,
                kind: MatchKind::Band,
            })
    }
}

impl Default for DeformRules {
    fn default() -> Self {
        Self::basic()
    }
}
