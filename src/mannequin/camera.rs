//! Orbit camera for the try-on viewport
//!
//! Spherical coordinate camera orbiting the mannequin. Panning is disabled;
//! polar angle and distance are clamped, and drag/zoom input is damped over
//! subsequent frames.

use std::f32::consts::PI;

use glam::{Mat4, Vec3};
use serde::Serialize;

/// Limits and feel of the orbit controls
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitConstraints {
    pub min_polar: f32,
    pub max_polar: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Fraction of pending motion applied each frame
    pub damping: f32,
}

impl Default for OrbitConstraints {
    fn default() -> Self {
        Self {
            min_polar: PI / 7.0,
            max_polar: PI / 2.5,
            min_distance: 1.2,
            max_distance: 5.0,
            damping: 0.05,
        }
    }
}

/// Orbit camera around the mannequin
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Azimuth around +Y in radians
    azimuth: f32,
    /// Angle from +Y in radians
    polar: f32,
    distance: f32,
    target: Vec3,
    /// Vertical field of view in radians
    fov: f32,
    aspect: f32,
    near: f32,
    far: f32,
    constraints: OrbitConstraints,
    // Motion not yet applied by `update`
    pending_azimuth: f32,
    pending_polar: f32,
    pending_zoom: f32,
}

impl OrbitCamera {
    /// Default viewport camera: eye (0, 0.75, 2.8) looking at (0, 0.4, 0), 40° fov
    pub fn new() -> Self {
        Self::looking_at(
            Vec3::new(0.0, 0.75, 2.8),
            Vec3::new(0.0, 0.4, 0.0),
            40f32.to_radians(),
            OrbitConstraints::default(),
        )
    }

    /// Build from an eye position, clamping it into the constraints
    pub fn looking_at(eye: Vec3, target: Vec3, fov: f32, constraints: OrbitConstraints) -> Self {
        let offset = eye - target;
        let distance = offset.length().max(f32::EPSILON);
        let polar = (offset.y / distance).clamp(-1.0, 1.0).acos();
        let azimuth = offset.x.atan2(offset.z);

        Self {
            azimuth,
            polar: polar.clamp(constraints.min_polar, constraints.max_polar),
            distance: distance.clamp(constraints.min_distance, constraints.max_distance),
            target,
            fov,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 100.0,
            constraints,
            pending_azimuth: 0.0,
            pending_polar: 0.0,
            pending_zoom: 0.0,
        }
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(), self.target, Vec3::Y)
    }

    /// Get the projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Get combined view-projection matrix
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Calculate camera position from spherical coordinates
    pub fn eye_position(&self) -> Vec3 {
        let sin_polar = self.polar.sin();
        self.target
            + Vec3::new(
                self.distance * sin_polar * self.azimuth.sin(),
                self.distance * self.polar.cos(),
                self.distance * sin_polar * self.azimuth.cos(),
            )
    }

    /// Queue an orbit from a pointer drag
    pub fn on_drag(&mut self, delta: (f32, f32), sensitivity: f32) {
        self.pending_azimuth -= delta.0 * sensitivity;
        self.pending_polar -= delta.1 * sensitivity;
    }

    /// Queue a zoom step; positive moves closer
    pub fn on_scroll(&mut self, delta: f32) {
        self.pending_zoom += delta;
    }

    /// Advance damping by one frame
    pub fn update(&mut self) {
        let d = self.constraints.damping;

        self.azimuth += self.pending_azimuth * d;
        self.polar = (self.polar + self.pending_polar * d)
            .clamp(self.constraints.min_polar, self.constraints.max_polar);
        // Multiplicative zoom for smooth feel
        self.distance = (self.distance * (1.0 - self.pending_zoom * d * 0.1))
            .clamp(self.constraints.min_distance, self.constraints.max_distance);

        self.pending_azimuth *= 1.0 - d;
        self.pending_polar *= 1.0 - d;
        self.pending_zoom *= 1.0 - d;
    }

    /// Update aspect ratio on resize
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn constraints(&self) -> &OrbitConstraints {
        &self.constraints
    }

    /// Reset camera to default position
    pub fn reset(&mut self) {
        *self = Self::looking_at(
            Vec3::new(0.0, 0.75, 2.8),
            self.target,
            self.fov,
            self.constraints,
        );
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}
