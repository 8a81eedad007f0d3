//! Vector and transform primitives.
//!
//! Everything above this module (camera, picking, bounding spheres) is built
//! on the few conventions fixed here: degrees are the public unit for Euler
//! angles, normalization of a near-zero vector yields the zero vector, and
//! the model matrix composes scale first, then rotation, then translation.

use cgmath::{InnerSpace, Matrix4, Rad, Vector3, Zero};

use crate::error::ViewerError;

/// Magnitude below which a vector is treated as degenerate.
pub const EPSILON: f32 = 1e-6;

/// Normalizes `v`, or returns the zero vector when its magnitude is below
/// [`EPSILON`].
///
/// Callers must tolerate a zero result: a degenerate basis axis contributes
/// nothing to a pan or ray computation instead of producing NaN/Inf.
pub fn normalize_or_zero(v: Vector3<f32>) -> Vector3<f32> {
    let magnitude = v.magnitude();
    if magnitude < EPSILON {
        Vector3::zero()
    } else {
        v / magnitude
    }
}

/// Per-axis oscillator that walks a vector component back and forth between
/// two travel bounds, reversing direction each time a bound is touched.
///
/// The running total of applied deltas always stays inside `[min, max]`;
/// direction flips are edge-triggered at the bounds, not re-evaluated in
/// between.
#[derive(Debug, Clone)]
pub struct Bounce {
    min: f32,
    max: f32,
    rising: [bool; 3],
    travelled: [f32; 3],
}

impl Bounce {
    /// Creates an oscillator with the given travel bounds.
    ///
    /// # Errors
    /// Returns [`ViewerError::InvalidRange`] when `min >= max`.
    pub fn new(min: f32, max: f32) -> Result<Self, ViewerError> {
        if min >= max {
            return Err(ViewerError::InvalidRange { min, max });
        }
        Ok(Self {
            min,
            max,
            rising: [true; 3],
            travelled: [0.0; 3],
        })
    }

    /// Advances `value` by one step of per-axis deltas (non-negative step
    /// magnitudes; the oscillator owns the direction).
    ///
    /// Deltas are clamped so the running total never leaves `[min, max]`.
    pub fn step(&mut self, value: &mut Vector3<f32>, deltas: Vector3<f32>) {
        for axis in 0..3 {
            let applied = if self.rising[axis] {
                let next = (self.travelled[axis] + deltas[axis]).min(self.max);
                let applied = next - self.travelled[axis];
                self.travelled[axis] = next;
                applied
            } else {
                let next = (self.travelled[axis] - deltas[axis]).max(self.min);
                let applied = next - self.travelled[axis];
                self.travelled[axis] = next;
                applied
            };
            value[axis] += applied;

            if self.travelled[axis] >= self.max {
                self.rising[axis] = false;
            }
            if self.travelled[axis] <= self.min {
                self.rising[axis] = true;
            }
        }
    }

    /// Running per-axis totals of applied deltas.
    pub fn travelled(&self) -> [f32; 3] {
        self.travelled
    }
}

/// Position, orientation and size of one renderable object.
///
/// Rotation is stored as Euler angles in degrees; [`Transform::rotation_radians`]
/// converts for matrix construction. Each object exclusively owns its
/// transform and mutates it only through these methods.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    pub position: Vector3<f32>,
    /// Euler angles in degrees, applied in X, then Y, then Z order.
    pub rotation: Vector3<f32>,
    pub scale: Vector3<f32>,
}

impl Transform {
    pub fn new() -> Self {
        Self {
            position: Vector3::zero(),
            rotation: Vector3::zero(),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    /// Moves the position by the given deltas.
    pub fn translate(&mut self, delta: Vector3<f32>) {
        self.position += delta;
    }

    /// Adds the given deltas (degrees) to the Euler angles.
    pub fn rotate(&mut self, delta_degrees: Vector3<f32>) {
        self.rotation += delta_degrees;
    }

    /// Scales each axis by adding the given deltas.
    pub fn rescale(&mut self, delta: Vector3<f32>) {
        self.scale += delta;
    }

    /// Euler angles converted to radians.
    pub fn rotation_radians(&self) -> Vector3<f32> {
        Vector3::new(
            self.rotation.x.to_radians(),
            self.rotation.y.to_radians(),
            self.rotation.z.to_radians(),
        )
    }

    /// Builds the world transform: scale first, then rotation (X, Y, Z
    /// order), then translation.
    ///
    /// In cgmath's column-vector convention that is `T * Rz * Ry * Rx * S`.
    /// The bounding-sphere derivation in [`crate::scene::Object`] replicates
    /// this order; the two must never diverge or picking and rendering will
    /// disagree.
    pub fn model_matrix(&self) -> Matrix4<f32> {
        let radians = self.rotation_radians();
        let translation = Matrix4::from_translation(self.position);
        let rotation = Matrix4::from_angle_z(Rad(radians.z))
            * Matrix4::from_angle_y(Rad(radians.y))
            * Matrix4::from_angle_x(Rad(radians.x));
        let scale = Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z);
        translation * rotation * scale
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}
