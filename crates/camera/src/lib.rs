#![warn(missing_docs)]
//! Perspective camera used to render the checklist scene.

use glam::{Mat4, Vec3};

/// Default eye height of a standing viewer, in meters.
pub const DEFAULT_EYE_HEIGHT: f32 = 1.6;

/// Perspective camera with position, facing direction, and projection.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Facing direction (unit length).
    pub direction: Vec3,

    /// Vertical field of view in radians.
    pub fov: f32,
    /// Aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub near: f32,
    /// Far clipping plane distance.
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, DEFAULT_EYE_HEIGHT, 0.0),
            direction: Vec3::NEG_Z,
            fov: 70f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.01,
            far: 20.0,
        }
    }
}

impl Camera {
    /// Create a new camera with the given position.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Builder: set the vertical field of view in degrees.
    pub fn with_fov_degrees(mut self, degrees: f32) -> Self {
        self.fov = degrees.to_radians();
        self
    }

    /// Builder: set the clipping planes.
    pub fn with_clip_planes(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    /// Get the forward direction vector.
    pub fn forward(&self) -> Vec3 {
        self.direction.try_normalize().unwrap_or(Vec3::NEG_Z)
    }

    /// Get the right direction vector (camera's local X axis).
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).try_normalize().unwrap_or(Vec3::X)
    }

    /// Get the up direction vector (camera's local Y axis).
    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward()).normalize()
    }

    /// Place the camera at a tracked pose.
    pub fn look_along(&mut self, position: Vec3, direction: Vec3) {
        self.position = position;
        self.direction = direction;
    }

    /// Compute the view matrix (world space -> camera space).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), self.up())
    }

    /// Compute the projection matrix (camera space -> clip space).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Compute the combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Update the aspect ratio (call when window resizes). Zero-sized
    /// windows (minimized) leave the aspect unchanged.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }
}
