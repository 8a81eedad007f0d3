//! Orbital camera transform.
//!
//! The camera sits on a sphere around a movable target. Radius, pitch and
//! yaw (degrees) are the authoritative state; the world-space eye position is
//! always recomputed from them and never set directly.

use cgmath::{EuclideanSpace, Matrix4, Point3, Vector3, Zero};

use crate::error::ViewerError;
use crate::scene::transform::normalize_or_zero;

/// Limits applied after every orbit/zoom update.
///
/// Pitch bounds stay off the poles so the view-up vector never becomes
/// parallel to the world up (gimbal singularity).
#[derive(Debug, Clone, Copy)]
pub struct OrbitCameraBounds {
    pub min_radius: f32,
    pub max_radius: f32,
    /// Degrees, strictly above 0.
    pub min_pitch: f32,
    /// Degrees, strictly below 90.
    pub max_pitch: f32,
}

impl OrbitCameraBounds {
    /// Rejects inverted limit pairs.
    pub fn validate(&self) -> Result<(), ViewerError> {
        if self.min_radius >= self.max_radius {
            return Err(ViewerError::InvalidRange {
                min: self.min_radius,
                max: self.max_radius,
            });
        }
        if self.min_pitch >= self.max_pitch {
            return Err(ViewerError::InvalidRange {
                min: self.min_pitch,
                max: self.max_pitch,
            });
        }
        Ok(())
    }
}

impl Default for OrbitCameraBounds {
    fn default() -> Self {
        Self {
            min_radius: 0.1,
            max_radius: 20.0,
            min_pitch: 1.0,
            max_pitch: 89.0,
        }
    }
}

/// Camera orbiting a target point, Y-up convention.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    radius: f32,
    /// Elevation above the target's horizontal plane, degrees.
    pitch: f32,
    /// Heading around the world up axis, degrees in `[0, 360)`.
    yaw: f32,
    eye: Vector3<f32>,
    target: Vector3<f32>,
    world_up: Vector3<f32>,
    bounds: OrbitCameraBounds,
}

impl OrbitCamera {
    /// Creates a camera with default bounds; inputs are clamped into range.
    pub fn new(radius: f32, pitch: f32, yaw: f32, target: Vector3<f32>) -> Self {
        // Default bounds are known-valid, so this cannot fail.
        Self::with_bounds(radius, pitch, yaw, target, OrbitCameraBounds::default())
            .unwrap_or_else(|_| unreachable!("default bounds are valid"))
    }

    /// Creates a camera with explicit bounds.
    ///
    /// # Errors
    /// Returns [`ViewerError::InvalidRange`] when a limit pair is inverted.
    pub fn with_bounds(
        radius: f32,
        pitch: f32,
        yaw: f32,
        target: Vector3<f32>,
        bounds: OrbitCameraBounds,
    ) -> Result<Self, ViewerError> {
        bounds.validate()?;
        let mut camera = Self {
            radius,
            pitch,
            yaw,
            eye: Vector3::zero(), // derived below
            target,
            world_up: Vector3::unit_y(),
            bounds,
        };
        camera.clamp_state();
        camera.update_eye();
        Ok(camera)
    }

    /// Rotates the eye around the target.
    ///
    /// Pitch is clamped to its bounds, yaw wraps modulo 360 degrees, and the
    /// eye position is recomputed.
    pub fn orbit(&mut self, d_pitch: f32, d_yaw: f32, sensitivity: f32) {
        self.apply_deltas(0.0, d_pitch, d_yaw, sensitivity);
    }

    /// Moves the eye closer to or farther from the target along the orbit
    /// radius, through the same clamped update path as [`Self::orbit`].
    pub fn zoom(&mut self, d_radius: f32, zoom_speed: f32) {
        self.apply_deltas(d_radius, 0.0, 0.0, zoom_speed);
    }

    /// Moves the target sideways/vertically relative to the view plane.
    ///
    /// The translation scales with the current radius so the perceived
    /// motion stays constant regardless of zoom level. A degenerate basis
    /// axis (eye coincident with target) contributes zero motion.
    pub fn pan(&mut self, dx: f32, dy: f32, pan_speed: f32) {
        let forward = normalize_or_zero(self.target - self.eye);
        let right = normalize_or_zero(forward.cross(self.world_up));
        let up = normalize_or_zero(right.cross(forward));

        let translate = (-right * dx + up * dy) * pan_speed * self.radius;
        self.target += translate;
        self.update_eye();
    }

    /// Replaces the orbit target; radius, pitch and yaw are unchanged.
    pub fn set_target(&mut self, x: f32, y: f32, z: f32) {
        self.target = Vector3::new(x, y, z);
        self.update_eye();
    }

    /// View matrix for the rendering layer.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(
            Point3::from_vec(self.eye),
            Point3::from_vec(self.target),
            self.world_up,
        )
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn eye(&self) -> Vector3<f32> {
        self.eye
    }

    pub fn target(&self) -> Vector3<f32> {
        self.target
    }

    pub fn world_up(&self) -> Vector3<f32> {
        self.world_up
    }

    pub fn bounds(&self) -> OrbitCameraBounds {
        self.bounds
    }

    fn apply_deltas(&mut self, d_radius: f32, d_pitch: f32, d_yaw: f32, sensitivity: f32) {
        self.radius += d_radius * sensitivity;
        self.pitch += d_pitch * sensitivity;
        self.yaw += d_yaw * sensitivity;
        self.clamp_state();
        self.update_eye();
    }

    fn clamp_state(&mut self) {
        self.radius = self
            .radius
            .clamp(self.bounds.min_radius, self.bounds.max_radius);
        self.pitch = self.pitch.clamp(self.bounds.min_pitch, self.bounds.max_pitch);
        self.yaw = self.yaw.rem_euclid(360.0);
    }

    /// Spherical-to-Cartesian eye derivation, a pure function of
    /// `(target, radius, pitch, yaw)`.
    fn update_eye(&mut self) {
        let pitch = self.pitch.to_radians();
        let yaw = self.yaw.to_radians();

        self.eye = Vector3::new(
            self.target.x + self.radius * pitch.cos() * yaw.sin(),
            self.target.y + self.radius * pitch.sin(),
            self.target.z + self.radius * pitch.cos() * yaw.cos(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::InnerSpace;
    use rand::Rng;

    #[test]
    fn orbit_keeps_pitch_and_yaw_in_range() {
        let mut camera = OrbitCamera::new(5.0, 30.0, 0.0, Vector3::zero());
        let mut rng = rand::rng();

        for _ in 0..1000 {
            let d_pitch = rng.random_range(-50.0..50.0);
            let d_yaw = rng.random_range(-50.0..50.0);
            camera.orbit(d_pitch, d_yaw, 0.2);

            assert!((1.0..=89.0).contains(&camera.pitch()));
            assert!((0.0..360.0).contains(&camera.yaw()));
        }
    }

    #[test]
    fn zoom_clamps_radius() {
        let mut camera = OrbitCamera::new(5.0, 30.0, 0.0, Vector3::zero());

        camera.zoom(1000.0, 1.0);
        assert!((camera.radius() - 20.0).abs() < 1e-6);

        camera.zoom(-1000.0, 1.0);
        assert!((camera.radius() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn eye_position_is_deterministic() {
        let a = OrbitCamera::new(3.0, 42.0, 137.0, Vector3::new(1.0, 2.0, 3.0));
        let b = OrbitCamera::new(3.0, 42.0, 137.0, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(a.eye(), b.eye());
    }

    #[test]
    fn eye_position_matches_spherical_derivation() {
        let camera = OrbitCamera::new(2.0, 30.0, 45.0, Vector3::zero());
        let pitch = 30.0_f32.to_radians();
        let yaw = 45.0_f32.to_radians();

        let expected = Vector3::new(
            2.0 * pitch.cos() * yaw.sin(),
            2.0 * pitch.sin(),
            2.0 * pitch.cos() * yaw.cos(),
        );
        assert!((camera.eye() - expected).magnitude() < 1e-5);
    }

    #[test]
    fn eye_stays_at_radius_from_target() {
        let mut camera = OrbitCamera::new(4.0, 20.0, 10.0, Vector3::new(1.0, -2.0, 0.5));
        for _ in 0..50 {
            camera.orbit(7.0, 13.0, 0.2);
            let distance = (camera.eye() - camera.target()).magnitude();
            assert!((distance - camera.radius()).abs() < 1e-4);
        }
    }

    #[test]
    fn pan_scales_with_radius() {
        let mut near = OrbitCamera::new(2.0, 30.0, 45.0, Vector3::zero());
        let mut far = OrbitCamera::new(4.0, 30.0, 45.0, Vector3::zero());

        near.pan(3.0, -1.5, 0.01);
        far.pan(3.0, -1.5, 0.01);

        let near_moved = near.target().magnitude();
        let far_moved = far.target().magnitude();
        assert!(near_moved > 0.0);
        assert!((far_moved - 2.0 * near_moved).abs() < 1e-5);
    }

    #[test]
    fn set_target_preserves_orbit_angles() {
        let mut camera = OrbitCamera::new(5.0, 25.0, 60.0, Vector3::zero());
        camera.set_target(2.0, 0.0, -3.0);

        assert!((camera.pitch() - 25.0).abs() < 1e-6);
        assert!((camera.yaw() - 60.0).abs() < 1e-6);
        assert!((camera.radius() - 5.0).abs() < 1e-6);
        let distance = (camera.eye() - camera.target()).magnitude();
        assert!((distance - 5.0).abs() < 1e-4);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let bounds = OrbitCameraBounds {
            min_radius: 10.0,
            max_radius: 1.0,
            ..OrbitCameraBounds::default()
        };
        assert!(matches!(
            OrbitCamera::with_bounds(5.0, 30.0, 0.0, Vector3::zero(), bounds),
            Err(ViewerError::InvalidRange { .. })
        ));
    }
}
