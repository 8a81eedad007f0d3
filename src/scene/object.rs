//! Renderable object records.
//!
//! One concrete object type for every shape: the per-kind differences
//! (vertex data, draw primitive mode) are plain data supplied by the
//! geometry factories. Objects never reach back into the renderer or
//! window; picking inputs are passed in explicitly.

use cgmath::Vector3;
use std::fmt;

use crate::camera::camera_utils::convert_matrix4_to_array;
use crate::geometry::{GeometryData, PrimitiveMode};
use crate::picking::{BoundingSphere, HitRecord};
use crate::scene::transform::Transform;

/// Stable object identifier, assigned at registration and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A renderable object: geometry, transform and per-frame hit state.
pub struct Object {
    pub(crate) id: Option<ObjectId>,
    pub name: String,
    pub geometry: GeometryData,
    pub mode: PrimitiveMode,
    pub transform: Transform,
    /// Invisible objects are skipped by picking and rendering.
    pub visible: bool,
    /// Display hint toggled by the input layer.
    pub wireframe: bool,
    /// Result of this frame's intersection test. Recomputed every pick pass;
    /// meaningless across frames.
    pub hit: HitRecord,
    local_extents: Vector3<f32>,
}

impl Object {
    /// Creates an unregistered object; [`crate::scene::Scene::register`]
    /// assigns its id.
    pub fn new(name: impl Into<String>, geometry: GeometryData, mode: PrimitiveMode) -> Self {
        let local_extents = geometry.extents();
        Self {
            id: None,
            name: name.into(),
            geometry,
            mode,
            transform: Transform::new(),
            visible: true,
            wireframe: false,
            hit: HitRecord::miss(),
            local_extents,
        }
    }

    /// Registration id, `None` until the object joins a scene.
    pub fn id(&self) -> Option<ObjectId> {
        self.id
    }

    /// Largest absolute local-space coordinate per axis, cached at
    /// construction.
    pub fn local_extents(&self) -> Vector3<f32> {
        self.local_extents
    }

    /// World-space bounding sphere for this frame.
    ///
    /// Center is the object's world position; the radius is the Euclidean
    /// norm of the per-axis local extents scaled by the current world scale.
    /// This mirrors the scale-then-translate order of
    /// [`Transform::model_matrix`].
    pub fn bounding_sphere(&self) -> BoundingSphere {
        let extents = self.local_extents;
        let scale = self.transform.scale;
        let radius = ((extents.x * scale.x).powi(2)
            + (extents.y * scale.y).powi(2)
            + (extents.z * scale.z).powi(2))
        .sqrt();

        BoundingSphere {
            center: self.transform.position,
            radius,
        }
    }

    /// Model matrix in uniform-buffer layout for the rendering layer.
    pub fn model_matrix_array(&self) -> [[f32; 4]; 4] {
        convert_matrix4_to_array(self.transform.model_matrix())
    }
}
