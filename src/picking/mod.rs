//! Mouse picking: screen-space ray casting against bounding spheres.
//!
//! One pick pass per cursor evaluation: the cursor position becomes a
//! world-space ray, every object's bounding sphere is tested against it, and
//! the closest hit wins. Hit volumes are single spheres — cheap,
//! order-independent and adequate for pointer interaction; this is not mesh
//! collision.

use cgmath::{InnerSpace, Vector3};

use crate::camera::orbit_camera::OrbitCamera;
use crate::error::ViewerError;
use crate::scene::object::{Object, ObjectId};
use crate::scene::transform::normalize_or_zero;

/// Validated viewport and projection parameters for ray generation.
///
/// The field of view must be the same value the rendering layer feeds its
/// projection matrix, or picking will disagree with what is on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
    fov_degrees: f32,
}

impl Viewport {
    /// # Errors
    /// Rejects non-positive dimensions and a field of view outside
    /// (0, 180) degrees.
    pub fn new(width: f32, height: f32, fov_degrees: f32) -> Result<Self, ViewerError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(ViewerError::InvalidViewport { width, height });
        }
        if fov_degrees <= 0.0 || fov_degrees >= 180.0 {
            return Err(ViewerError::InvalidFov(fov_degrees));
        }
        Ok(Self {
            width,
            height,
            fov_degrees,
        })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn fov_degrees(&self) -> f32 {
        self.fov_degrees
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

/// A world-space ray for intersection testing. Transient: regenerated for
/// every pick evaluation, never stored across frames.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ray origin point in world space.
    pub origin: Vector3<f32>,
    /// Ray direction (normalized; zero when the input was degenerate).
    pub direction: Vector3<f32>,
}

impl Ray {
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: normalize_or_zero(direction),
        }
    }

    /// Point along the ray at distance `t`.
    pub fn point_at(&self, t: f32) -> Vector3<f32> {
        self.origin + self.direction * t
    }
}

/// Converts a cursor position into a world-space ray from the camera eye.
///
/// Pixel coordinates map to NDC (Y flipped, since screen Y grows downward),
/// then to a camera-space direction via the `tan(fov/2)` perspective stretch,
/// then into world space through the camera's orthonormal basis. The
/// camera-space ray points down -Z while `forward` points toward the target,
/// hence the sign flip on the forward term.
pub fn screen_to_ray(
    screen_x: f32,
    screen_y: f32,
    viewport: &Viewport,
    camera: &OrbitCamera,
) -> Ray {
    let ndc_x = 2.0 * screen_x / viewport.width() - 1.0;
    let ndc_y = 1.0 - 2.0 * screen_y / viewport.height();

    // The stretch desynchronizes the combined magnitude from 1, so the
    // camera-space direction needs renormalizing.
    let stretch = (viewport.fov_degrees().to_radians() / 2.0).tan();
    let view_dir = normalize_or_zero(Vector3::new(
        ndc_x * viewport.aspect() * stretch,
        ndc_y * stretch,
        -1.0,
    ));

    let eye = camera.eye();
    let forward = normalize_or_zero(camera.target() - eye);
    let right = normalize_or_zero(forward.cross(camera.world_up()));
    let up = normalize_or_zero(right.cross(forward));

    let world_dir = right * view_dir.x + up * view_dir.y + forward * (-view_dir.z);
    Ray::new(eye, world_dir)
}

/// Sphere approximating an object's extent for cheap intersection tests.
/// Transient: derived from the object's transform once per pick query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    pub center: Vector3<f32>,
    pub radius: f32,
}

impl BoundingSphere {
    /// Analytic ray-sphere intersection.
    ///
    /// Substituting `O + tD` into the sphere equation gives
    /// `t^2 + 2bt + c = 0` with `b = D.(O-C)` and `c = (O-C).(O-C) - r^2`,
    /// so the half-angle discriminant is `b^2 - c`. Tangency counts as a hit.
    ///
    /// Returns the nearer non-negative root (the entry point when the origin
    /// is outside the sphere, the exit point when inside), or `None` when
    /// the ray's line misses the sphere or both roots lie behind the origin.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin - self.center;
        let b = ray.direction.dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;
        let discriminant = b * b - c;

        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        let near = -b - sqrt_d;
        let far = -b + sqrt_d;
        if near >= 0.0 {
            Some(near)
        } else if far >= 0.0 {
            Some(far)
        } else {
            None
        }
    }
}

/// Per-object, per-frame intersection result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    pub hit: bool,
    /// Distance along the ray, `+inf` on a miss.
    pub distance: f32,
}

impl HitRecord {
    pub fn miss() -> Self {
        Self {
            hit: false,
            distance: f32::INFINITY,
        }
    }

    pub fn from_intersection(t: Option<f32>) -> Self {
        match t {
            Some(distance) => Self {
                hit: true,
                distance,
            },
            None => Self::miss(),
        }
    }
}

impl Default for HitRecord {
    fn default() -> Self {
        Self::miss()
    }
}

/// Selects the focused object from this frame's hit records.
///
/// Filters to actual hits and returns the id with the minimum distance; ties
/// go to the first entry encountered, so the result is deterministic for a
/// fixed iteration order. Returns `None` when nothing was hit.
pub fn resolve_hits<I>(hits: I) -> Option<ObjectId>
where
    I: IntoIterator<Item = (ObjectId, HitRecord)>,
{
    let mut closest: Option<(ObjectId, f32)> = None;
    for (id, record) in hits {
        if !record.hit {
            continue;
        }
        let replace = match closest {
            Some((_, best)) => record.distance < best,
            None => true,
        };
        if replace {
            closest = Some((id, record.distance));
        }
    }
    closest.map(|(id, _)| id)
}

/// Result of a successful pick pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickResult {
    pub id: ObjectId,
    /// Distance from the camera eye to the bounding-sphere intersection.
    pub distance: f32,
    /// World-space intersection point.
    pub point: Vector3<f32>,
}

/// Runs pick passes over a scene's objects.
#[derive(Debug, Default)]
pub struct ObjectPicker;

impl ObjectPicker {
    pub fn new() -> Self {
        Self
    }

    /// Evaluates one pick query.
    ///
    /// Regenerates the ray, overwrites every object's hit record (stale
    /// records from a previous frame are never consulted), then resolves the
    /// closest hit. Invisible objects are recorded as misses.
    pub fn pick(
        &self,
        cursor: (f32, f32),
        viewport: &Viewport,
        camera: &OrbitCamera,
        objects: &mut [Object],
    ) -> Option<PickResult> {
        let ray = screen_to_ray(cursor.0, cursor.1, viewport, camera);

        for object in objects.iter_mut() {
            object.hit = if object.visible {
                HitRecord::from_intersection(object.bounding_sphere().intersect_ray(&ray))
            } else {
                HitRecord::miss()
            };
            log::trace!(
                "pick: {} hit={} distance={}",
                object.name,
                object.hit.hit,
                object.hit.distance
            );
        }

        let id = resolve_hits(
            objects
                .iter()
                .filter_map(|object| object.id().map(|id| (id, object.hit))),
        )?;
        let distance = objects
            .iter()
            .find(|object| object.id() == Some(id))
            .map(|object| object.hit.distance)?;

        Some(PickResult {
            id,
            distance,
            point: ray.point_at(distance),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{generate_cube, PrimitiveMode};
    use cgmath::{InnerSpace, Vector3, Zero};

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0, 45.0).unwrap()
    }

    fn camera() -> OrbitCamera {
        OrbitCamera::new(5.0, 30.0, 45.0, Vector3::zero())
    }

    #[test]
    fn viewport_rejects_bad_configuration() {
        assert!(matches!(
            Viewport::new(0.0, 600.0, 45.0),
            Err(ViewerError::InvalidViewport { .. })
        ));
        assert!(matches!(
            Viewport::new(800.0, -1.0, 45.0),
            Err(ViewerError::InvalidViewport { .. })
        ));
        assert!(matches!(
            Viewport::new(800.0, 600.0, 0.0),
            Err(ViewerError::InvalidFov(_))
        ));
        assert!(matches!(
            Viewport::new(800.0, 600.0, 180.0),
            Err(ViewerError::InvalidFov(_))
        ));
    }

    #[test]
    fn generated_rays_are_unit_length() {
        let viewport = viewport();
        let camera = camera();

        for &x in &[0.0, 200.0, 400.0, 799.0] {
            for &y in &[0.0, 150.0, 300.0, 599.0] {
                let ray = screen_to_ray(x, y, &viewport, &camera);
                assert!(
                    (ray.direction.magnitude() - 1.0).abs() < 1e-4,
                    "ray at ({x}, {y}) is not unit length"
                );
            }
        }
    }

    #[test]
    fn center_ray_points_at_target() {
        let viewport = viewport();
        let camera = camera();
        let ray = screen_to_ray(400.0, 300.0, &viewport, &camera);

        let forward = (camera.target() - camera.eye()).normalize();
        assert!((ray.direction - forward).magnitude() < 1e-4);
        assert_eq!(ray.origin, camera.eye());
    }

    #[test]
    fn ray_origin_is_camera_eye() {
        let viewport = viewport();
        let camera = camera();
        let ray = screen_to_ray(123.0, 456.0, &viewport, &camera);
        assert_eq!(ray.origin, camera.eye());
    }

    #[test]
    fn sphere_ahead_reports_entry_distance() {
        let ray = Ray::new(Vector3::zero(), Vector3::unit_z());
        let sphere = BoundingSphere {
            center: Vector3::new(0.0, 0.0, 10.0),
            radius: 2.0,
        };

        let t = sphere.intersect_ray(&ray).unwrap();
        assert!((t - 8.0).abs() < 1e-4); // d - r
    }

    #[test]
    fn off_line_sphere_misses() {
        let ray = Ray::new(Vector3::zero(), Vector3::unit_z());
        let sphere = BoundingSphere {
            center: Vector3::new(5.0, 0.0, 10.0),
            radius: 2.0,
        };
        assert_eq!(sphere.intersect_ray(&ray), None);
    }

    #[test]
    fn tangent_ray_counts_as_hit() {
        let ray = Ray::new(Vector3::zero(), Vector3::unit_z());
        let sphere = BoundingSphere {
            center: Vector3::new(2.0, 0.0, 10.0),
            radius: 2.0,
        };
        let t = sphere.intersect_ray(&ray).unwrap();
        assert!((t - 10.0).abs() < 1e-3);
    }

    #[test]
    fn origin_inside_sphere_returns_exit() {
        let ray = Ray::new(Vector3::zero(), Vector3::unit_z());
        let sphere = BoundingSphere {
            center: Vector3::zero(),
            radius: 1.5,
        };
        let t = sphere.intersect_ray(&ray).unwrap();
        assert!((t - 1.5).abs() < 1e-5);
    }

    #[test]
    fn sphere_behind_origin_misses() {
        let ray = Ray::new(Vector3::zero(), Vector3::unit_z());
        let sphere = BoundingSphere {
            center: Vector3::new(0.0, 0.0, -10.0),
            radius: 2.0,
        };
        assert_eq!(sphere.intersect_ray(&ray), None);
    }

    #[test]
    fn resolve_picks_closest_hit() {
        let hits = [
            (
                ObjectId(0),
                HitRecord {
                    hit: true,
                    distance: 5.0,
                },
            ),
            (
                ObjectId(1),
                HitRecord {
                    hit: true,
                    distance: 2.0,
                },
            ),
            (
                ObjectId(2),
                HitRecord {
                    hit: false,
                    distance: 0.0,
                },
            ),
        ];
        assert_eq!(resolve_hits(hits), Some(ObjectId(1)));
    }

    #[test]
    fn resolve_with_no_hits_returns_none() {
        let hits = [
            (ObjectId(0), HitRecord::miss()),
            (ObjectId(1), HitRecord::miss()),
        ];
        assert_eq!(resolve_hits(hits), None);
    }

    #[test]
    fn resolve_breaks_ties_by_iteration_order() {
        let record = HitRecord {
            hit: true,
            distance: 3.0,
        };
        let hits = [(ObjectId(7), record), (ObjectId(3), record)];
        assert_eq!(resolve_hits(hits), Some(ObjectId(7)));
    }

    #[test]
    fn pick_selects_nearer_object_and_resets_stale_records() {
        // Camera on +Z looking at the origin; two cubes stacked along the
        // view axis.
        let camera = OrbitCamera::new(10.0, 1.0, 0.0, Vector3::zero());
        let viewport = viewport();
        let picker = ObjectPicker::new();

        let mut near = Object::new("near", generate_cube(), PrimitiveMode::Triangles);
        near.id = Some(ObjectId(0));
        near.transform.position = Vector3::new(0.0, 0.0, 2.0);
        let mut far = Object::new("far", generate_cube(), PrimitiveMode::Triangles);
        far.id = Some(ObjectId(1));
        far.transform.position = Vector3::new(0.0, 0.0, -2.0);
        let mut objects = [near, far];

        let result = picker
            .pick((400.0, 300.0), &viewport, &camera, &mut objects)
            .expect("center cursor should hit the stack");
        assert_eq!(result.id, ObjectId(0));
        assert!(objects[0].hit.hit && objects[1].hit.hit);

        // Move both cubes out of the ray's path; the old records must not
        // survive the next pass.
        objects[0].transform.position = Vector3::new(100.0, 0.0, 0.0);
        objects[1].transform.position = Vector3::new(100.0, 0.0, 0.0);
        assert!(picker
            .pick((400.0, 300.0), &viewport, &camera, &mut objects)
            .is_none());
        assert!(!objects[0].hit.hit && !objects[1].hit.hit);
    }

    #[test]
    fn invisible_objects_are_not_picked() {
        let camera = OrbitCamera::new(10.0, 1.0, 0.0, Vector3::zero());
        let viewport = viewport();
        let picker = ObjectPicker::new();

        let mut cube = Object::new("cube", generate_cube(), PrimitiveMode::Triangles);
        cube.id = Some(ObjectId(0));
        cube.visible = false;
        let mut objects = [cube];

        assert!(picker
            .pick((400.0, 300.0), &viewport, &camera, &mut objects)
            .is_none());
    }
}
