//! Procedural geometry generation.
//!
//! Shapes are plain data produced by free functions; the only per-shape
//! difference a renderable object carries is its vertex/index data and draw
//! primitive mode. There are no shape subtypes.

pub mod primitives;

pub use primitives::*;

use cgmath::Vector3;

/// How the rendering layer should interpret the index list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimitiveMode {
    /// Indexed triangle list.
    Triangles,
    /// Indexed line list with the given line width.
    Lines { width: f32 },
}

/// Generated geometry ready for GPU upload by the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryData {
    /// Vertex positions (x, y, z) in local space.
    pub positions: Vec<[f32; 3]>,
    /// Per-vertex colors (r, g, b).
    pub colors: Vec<[f32; 3]>,
    /// Primitive indices into `positions`.
    pub indices: Vec<u32>,
}

impl GeometryData {
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            colors: Vec::new(),
            indices: Vec::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned local extents: the largest absolute coordinate per axis.
    ///
    /// Scaled per-axis and combined via Euclidean norm, this yields the
    /// bounding-sphere radius used by picking.
    pub fn extents(&self) -> Vector3<f32> {
        let mut extents = Vector3::new(0.0f32, 0.0, 0.0);
        for position in &self.positions {
            extents.x = extents.x.max(position[0].abs());
            extents.y = extents.y.max(position[1].abs());
            extents.z = extents.z.max(position[2].abs());
        }
        extents
    }

    /// Paints every vertex a single color.
    pub fn set_color(&mut self, r: f32, g: f32, b: f32) {
        for color in &mut self.colors {
            *color = [r, g, b];
        }
    }
}

impl Default for GeometryData {
    fn default() -> Self {
        Self::new()
    }
}
