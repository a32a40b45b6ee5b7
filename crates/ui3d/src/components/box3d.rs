//! Solid box primitive used for panels and checkboxes.

use super::{Transform3D, UIComponent};
use glam::Vec3;

/// Vertex layout emitted for box meshes.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BoxVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

/// Flat-shaded box mesh: four vertices per face, two triangles per face.
#[derive(Debug, Clone)]
pub struct BoxMesh {
    pub vertices: [BoxVertex; 24],
    pub indices: [u32; 36],
}

/// Axis-aligned solid box, centered on its transform position.
#[derive(Debug, Clone, PartialEq)]
pub struct Box3D {
    /// Box transform (position relative to its parent visual)
    pub transform: Transform3D,

    /// Box size (width, height, depth)
    pub size: Vec3,

    /// Surface color (RGBA)
    pub color: [f32; 4],
}

impl Box3D {
    /// Create a new box
    pub fn new(position: Vec3, width: f32, height: f32, depth: f32) -> Self {
        Self {
            transform: Transform3D::new(position),
            size: Vec3::new(width, height, depth),
            color: [1.0, 1.0, 1.0, 1.0],
        }
    }

    /// Builder: Set color
    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    /// Generate the mesh for this box with its center at `center`.
    ///
    /// Faces wind counter-clockwise seen from outside.
    pub fn generate_mesh(&self, center: Vec3) -> BoxMesh {
        // (normal, u, v) with u x v == normal
        const FACES: [(Vec3, Vec3, Vec3); 6] = [
            (Vec3::Z, Vec3::X, Vec3::Y),
            (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
            (Vec3::X, Vec3::NEG_Z, Vec3::Y),
            (Vec3::NEG_X, Vec3::Z, Vec3::Y),
            (Vec3::Y, Vec3::X, Vec3::NEG_Z),
            (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        ];

        let half = self.size * 0.5;
        let mut vertices = [BoxVertex {
            position: [0.0; 3],
            normal: [0.0; 3],
            color: self.color,
        }; 24];
        let mut indices = [0u32; 36];

        for (face, (normal, u, v)) in FACES.iter().enumerate() {
            let face_center = center + *normal * half;
            let du = *u * half;
            let dv = *v * half;
            let corners = [
                face_center - du - dv,
                face_center + du - dv,
                face_center + du + dv,
                face_center - du + dv,
            ];

            let base = face * 4;
            for (i, corner) in corners.iter().enumerate() {
                vertices[base + i].position = corner.to_array();
                vertices[base + i].normal = normal.to_array();
            }

            let b = base as u32;
            indices[face * 6..face * 6 + 6].copy_from_slice(&[b, b + 1, b + 2, b, b + 2, b + 3]);
        }

        BoxMesh { vertices, indices }
    }
}

impl UIComponent for Box3D {
    fn position(&self) -> Vec3 {
        self.transform.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.transform.position = position;
    }
}
