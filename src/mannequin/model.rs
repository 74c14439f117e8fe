//! Body model hierarchy
//!
//! A mannequin is a tree of named nodes with local position and scale.
//! Leaf nodes flagged as meshes are the ones the deformer considers.

use std::fs;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::measurements::Gender;

/// Display scale applied to the loaded mannequin in the scene
pub const MANNEQUIN_DISPLAY_SCALE: f32 = 1.6;

fn default_scale() -> Vec3 {
    Vec3::ONE
}

/// Node in a body model hierarchy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyNode {
    pub name: String,
    /// Local position relative to the parent
    #[serde(default)]
    pub position: Vec3,
    /// Local scale
    #[serde(default = "default_scale")]
    pub scale: Vec3,
    /// Whether this node carries geometry
    #[serde(default)]
    pub mesh: bool,
    #[serde(default)]
    pub children: Vec<BodyNode>,
}

impl BodyNode {
    /// Create a grouping node without geometry
    pub fn group(name: impl Into<String>, children: Vec<BodyNode>) -> Self {
        Self {
            name: name.into(),
            position: Vec3::ZERO,
            scale: Vec3::ONE,
            mesh: false,
            children,
        }
    }

    /// Create a mesh leaf at a local position
    pub fn mesh(name: impl Into<String>, position: Vec3) -> Self {
        Self {
            name: name.into(),
            position,
            scale: Vec3::ONE,
            mesh: true,
            children: Vec::new(),
        }
    }

    /// Visit this node and all descendants depth-first
    pub fn traverse<'a>(&'a self, f: &mut impl FnMut(&'a BodyNode)) {
        f(self);
        for child in &self.children {
            child.traverse(f);
        }
    }

    /// Visit this node and all descendants depth-first, mutably
    pub fn traverse_mut(&mut self, f: &mut impl FnMut(&mut BodyNode)) {
        f(self);
        for child in &mut self.children {
            child.traverse_mut(f);
        }
    }

    /// Find the first node with an exact name
    pub fn find(&self, name: &str) -> Option<&BodyNode> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }

    /// Render the hierarchy as an indented outline (mesh nodes tagged)
    pub fn outline(&self, max_depth: usize) -> String {
        let mut out = String::new();
        self.outline_into(&mut out, 0, max_depth);
        out
    }

    fn outline_into(&self, out: &mut String, depth: usize, max_depth: usize) {
        if depth > max_depth {
            return;
        }
        out.push_str(&" ".repeat(depth * 2));
        out.push_str(&self.name);
        if self.mesh {
            out.push_str(" [MESH]");
        }
        out.push('\n');
        for child in &self.children {
            child.outline_into(out, depth + 1, max_depth);
        }
    }
}

/// Errors loading a body model description
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("model '{0}' has no mesh nodes")]
    NoMeshes(String),
}

/// Complete body model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyModel {
    pub name: String,
    pub root: BodyNode,
}

impl BodyModel {
    /// Parse a model description from JSON
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let model: Self = serde_json::from_str(json)?;
        if model.mesh_count() == 0 {
            return Err(ModelError::NoMeshes(model.name));
        }
        Ok(model)
    }

    /// Load a model description file
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Number of nodes in the hierarchy
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.root.traverse(&mut |_| count += 1);
        count
    }

    /// Number of mesh nodes in the hierarchy
    pub fn mesh_count(&self) -> usize {
        let mut count = 0;
        self.root.traverse(&mut |n| {
            if n.mesh {
                count += 1;
            }
        });
        count
    }

    /// Built-in mannequin for a gender
    pub fn builtin(gender: Gender) -> Self {
        match gender {
            Gender::Male => Self::builtin_male(),
            Gender::Female => Self::builtin_female(),
        }
    }

    fn builtin_male() -> Self {
        Self {
            name: "male_mannequin".to_string(),
            root: BodyNode::group(
                "MaleMannequin",
                vec![
                    BodyNode::mesh("Head", Vec3::new(0.0, 1.45, 0.0)),
                    BodyNode::mesh("Neck", Vec3::new(0.0, 1.3, 0.0)),
                    BodyNode::mesh("Torso_Chest", Vec3::new(0.0, 0.9, 0.0)),
                    BodyNode::mesh("Shoulder_L", Vec3::new(-0.24, 1.1, 0.0)),
                    BodyNode::mesh("Shoulder_R", Vec3::new(0.24, 1.1, 0.0)),
                    BodyNode::mesh("Arm_L", Vec3::new(-0.3, 0.7, 0.0)),
                    BodyNode::mesh("Arm_R", Vec3::new(0.3, 0.7, 0.0)),
                    BodyNode::mesh("Abdomen", Vec3::new(0.0, 0.3, 0.0)),
                    BodyNode::mesh("Pelvis", Vec3::new(0.0, -0.1, 0.0)),
                    BodyNode::mesh("Leg_L", Vec3::new(-0.1, -0.6, 0.0)),
                    BodyNode::mesh("Leg_R", Vec3::new(0.1, -0.6, 0.0)),
                    BodyNode::mesh("Foot_L", Vec3::new(-0.1, -0.95, 0.05)),
                    BodyNode::mesh("Foot_R", Vec3::new(0.1, -0.95, 0.05)),
                ],
            ),
        }
    }

    fn builtin_female() -> Self {
        Self {
            name: "female_mannequin".to_string(),
            root: BodyNode::group(
                "FemaleMannequin",
                vec![
                    BodyNode::mesh("Head", Vec3::new(0.0, 1.38, 0.0)),
                    BodyNode::mesh("Neck", Vec3::new(0.0, 1.24, 0.0)),
                    BodyNode::mesh("Torso", Vec3::new(0.0, 0.85, 0.0)),
                    BodyNode::mesh("Shoulder_L", Vec3::new(-0.21, 1.05, 0.0)),
                    BodyNode::mesh("Shoulder_R", Vec3::new(0.21, 1.05, 0.0)),
                    BodyNode::mesh("Arm_L", Vec3::new(-0.27, 0.65, 0.0)),
                    BodyNode::mesh("Arm_R", Vec3::new(0.27, 0.65, 0.0)),
                    BodyNode::mesh("Waist", Vec3::new(0.0, 0.25, 0.0)),
                    BodyNode::mesh("Hips", Vec3::new(0.0, -0.1, 0.0)),
                    BodyNode::mesh("Leg_L", Vec3::new(-0.09, -0.6, 0.0)),
                    BodyNode::mesh("Leg_R", Vec3::new(0.09, -0.6, 0.0)),
                    BodyNode::mesh("Foot_L", Vec3::new(-0.09, -0.93, 0.05)),
                    BodyNode::mesh("Foot_R", Vec3::new(0.09, -0.93, 0.05)),
                ],
            ),
        }
    }
}

/// Static asset reference for a gender's mannequin
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MannequinAsset {
    pub gender: Gender,
    pub model_url: &'static str,
    pub display_scale: f32,
}

impl MannequinAsset {
    pub fn for_gender(gender: Gender) -> Self {
        let model_url = match gender {
            Gender::Male => "/models/male_mannequin.glb",
            Gender::Female => "/models/female_mannequin.glb",
        };
        Self {
            gender,
            model_url,
            display_scale: MANNEQUIN_DISPLAY_SCALE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_models() {
        for gender in Gender::all() {
            let model = BodyModel::builtin(*gender);
            assert_eq!(model.mesh_count(), 13);
            assert_eq!(model.node_count(), 14);
            assert!(model.root.find("Neck").is_some());
        }
    }

    #[test]
    fn test_from_json_defaults() {
        let json = r#"{
            "name": "custom",
            "root": {
                "name": "Root",
                "children": [
                    { "name": "chest_mesh", "position": [0.0, 0.8, 0.0], "mesh": true }
                ]
            }
        }"#;
        let model = BodyModel::from_json(json).unwrap();
        let chest = model.root.find("chest_mesh").unwrap();
        assert_eq!(chest.scale, Vec3::ONE);
        assert_eq!(model.root.position, Vec3::ZERO);
    }

    #[test]
    fn test_from_json_rejects_meshless() {
        let json = r#"{ "name": "empty", "root": { "name": "Root" } }"#;
        assert!(matches!(BodyModel::from_json(json), Err(ModelError::NoMeshes(_))));
    }

    #[test]
    fn test_outline_marks_meshes() {
        let model = BodyModel::builtin(Gender::Male);
        let outline = model.root.outline(1);
        assert!(outline.starts_with("MaleMannequin\n"));
        assert!(outline.contains("  Head [MESH]\n"));
    }

    #[test]
    fn test_asset_urls() {
        let asset = MannequinAsset::for_gender(Gender::Female);
        assert_eq!(asset.model_url, "/models/female_mannequin.glb");
        assert_eq!(asset.display_scale, 1.6);
    }
}
