//! Mannequin deformation
//!
//! Applies scale factors to a clone of a body model. Mesh nodes are scaled
//! by the region their matching rule names; nodes that match nothing are
//! left as loaded. The height factor scales the whole hierarchy vertically.

use serde::Serialize;

use crate::measurements::ScaleFactors;

use super::model::BodyModel;
use super::rules::{BodyRegion, DeformRules, MatchKind};

/// Region assignment for one node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeMatch {
    pub node: String,
    pub region: BodyRegion,
    pub kind: MatchKind,
}

/// Which nodes were scaled and which were skipped
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeformReport {
    pub matched: Vec<NodeMatch>,
    pub unmatched: Vec<String>,
}

impl DeformReport {
    /// Nodes assigned to a region
    pub fn nodes_in(&self, region: BodyRegion) -> impl Iterator<Item = &str> {
        self.matched
            .iter()
            .filter(move |m| m.region == region)
            .map(|m| m.node.as_str())
    }
}

/// Deformed copy of a model plus its match report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeformedModel {
    pub model: BodyModel,
    pub report: DeformReport,
}

/// Deform a clone of `source`; the source is never modified
pub fn deform(source: &BodyModel, rules: &DeformRules, factors: &ScaleFactors) -> DeformedModel {
    let mut model = source.clone();
    let mut report = DeformReport::default();

    model.root.traverse_mut(&mut |node| {
        if !node.mesh {
            return;
        }
        match rules.classify(node) {
            Some(m) => {
                let factor = m.rule.region.factor(factors);
                node.scale = m.rule.axes.apply(node.scale, factor);
                report.matched.push(NodeMatch {
                    node: node.name.clone(),
                    region: m.rule.region,
                    kind: m.kind,
                });
            }
            None => report.unmatched.push(node.name.clone()),
        }
    });

    model.root.scale.y *= factors.height;

    tracing::debug!(
        model = %model.name,
        matched = report.matched.len(),
        unmatched = report.unmatched.len(),
        "Mannequin deformed"
    );

    DeformedModel { model, report }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurements::Gender;
    use glam::Vec3;

    fn factors() -> ScaleFactors {
        ScaleFactors {
            chest: 1.2,
            waist: 0.9,
            hips: 1.1,
            height: 1.05,
            shoulders: 1.1,
            limbs: 1.3,
            neck: 0.95,
        }
    }

    #[test]
    fn test_identity_factors_only_touch_shoulder_depth() {
        let source = BodyModel::builtin(Gender::Male);
        let out = deform(&source, &DeformRules::basic(), &ScaleFactors::IDENTITY);
        assert_eq!(out.model.root.scale, Vec3::ONE);
        assert_eq!(out.model.root.find("Torso_Chest").unwrap().scale, Vec3::ONE);
        // Shoulder depth carries its fixed 0.5 weight
        assert_eq!(out.model.root.find("Shoulder_L").unwrap().scale, Vec3::new(1.0, 1.0, 0.5));
    }

    #[test]
    fn test_source_is_not_mutated() {
        let source = BodyModel::builtin(Gender::Female);
        let before = source.clone();
        let _ = deform(&source, &DeformRules::extended(), &factors());
        assert_eq!(source, before);
    }

    #[test]
    fn test_region_scaling_basic() {
        let source = BodyModel::builtin(Gender::Male);
        let out = deform(&source, &DeformRules::basic(), &factors());
        let root = &out.model.root;

        let chest = root.find("Torso_Chest").unwrap().scale;
        assert!((chest.x - 1.2).abs() < 1e-6 && (chest.z - 1.2).abs() < 1e-6);
        assert_eq!(chest.y, 1.0);

        let waist = root.find("Abdomen").unwrap().scale;
        assert!((waist.x - 0.9).abs() < 1e-6);

        let hips = root.find("Pelvis").unwrap().scale;
        assert!((hips.z - 1.1).abs() < 1e-6);

        let shoulder = root.find("Shoulder_R").unwrap().scale;
        assert!((shoulder.x - 1.1).abs() < 1e-6);
        assert!((shoulder.z - 0.55).abs() < 1e-6);

        assert!((root.scale.y - 1.05).abs() < 1e-6);
        assert_eq!(root.scale.x, 1.0);
    }

    #[test]
    fn test_unmatched_nodes_untouched() {
        let source = BodyModel::builtin(Gender::Male);
        let out = deform(&source, &DeformRules::basic(), &factors());
        for name in ["Head", "Neck", "Leg_L", "Leg_R", "Foot_L", "Foot_R"] {
            assert!(out.report.unmatched.iter().any(|n| n == name), "{name} should be unmatched");
            assert_eq!(out.model.root.find(name).unwrap().scale, Vec3::ONE);
        }
    }

    #[test]
    fn test_arms_band_vs_extended_name() {
        let source = BodyModel::builtin(Gender::Male);

        let basic = deform(&source, &DeformRules::basic(), &factors());
        let arm = basic.report.matched.iter().find(|m| m.node == "Arm_L").unwrap();
        assert_eq!(arm.region, BodyRegion::Chest);
        assert_eq!(arm.kind, MatchKind::Band);

        let extended = deform(&source, &DeformRules::extended(), &factors());
        let arm = extended.report.matched.iter().find(|m| m.node == "Arm_L").unwrap();
        assert_eq!(arm.region, BodyRegion::Limbs);
        assert_eq!(arm.kind, MatchKind::Name);
        let scale = extended.model.root.find("Arm_L").unwrap().scale;
        assert!((scale.y - 1.3).abs() < 1e-6);
        assert_eq!(scale.x, 1.0);

        let necks: Vec<_> = extended.report.nodes_in(BodyRegion::Neck).collect();
        assert_eq!(necks, vec!["Neck"]);
    }

    #[test]
    fn test_group_nodes_not_classified() {
        let source = BodyModel::builtin(Gender::Female);
        let out = deform(&source, &DeformRules::basic(), &factors());
        let total = out.report.matched.len() + out.report.unmatched.len();
        assert_eq!(total, source.mesh_count());
    }
}
