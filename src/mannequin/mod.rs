//! Mannequin rendering model
//!
//! Body model hierarchy, data-driven deformation rules, the deformer, and
//! the scene around the mannequin (camera, lights, drop target).

pub mod camera;
pub mod deform;
pub mod model;
pub mod renderer;
pub mod rules;
pub mod scene;

pub use camera::{OrbitCamera, OrbitConstraints};
pub use deform::{deform, DeformReport, DeformedModel, NodeMatch};
pub use model::{BodyModel, BodyNode, MannequinAsset, ModelError, MANNEQUIN_DISPLAY_SCALE};
pub use renderer::{MannequinFrame, MannequinRenderer};
pub use rules::{AxisWeights, BodyRegion, DeformRule, DeformRules, MatchKind, PositionBand, RuleSet};
pub use scene::{
    DragPayload, DropError, Floor, Light, LightKind, LightingRig, MannequinScene,
    CLOTHING_ITEM_DRAG_KIND, TURNTABLE_SPEED,
};
