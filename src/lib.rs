//! Parallax — interactive 3D scene interaction core.
//!
//! Places renderable objects in a scene, orbits a camera around a movable
//! target, and resolves which object the cursor is pointing at by casting a
//! screen-space ray against per-object bounding spheres.
//!
//! The crate is the algorithmic core only: the host application owns the
//! window, the event loop and the graphics API. It forwards input events in,
//! and pulls view/model matrices out for rendering.
//!
//! ```
//! use cgmath::{Vector3, Zero};
//! use parallax::camera::{CameraController, CameraManager, OrbitCamera};
//! use parallax::geometry::{generate_cube, PrimitiveMode};
//! use parallax::picking::Viewport;
//! use parallax::scene::{Object, Scene};
//!
//! let camera = OrbitCamera::new(5.0, 30.0, 0.0, Vector3::zero());
//! let mut scene = Scene::new(CameraManager::new(camera, CameraController::default()));
//! let cube = scene.register(Object::new("cube", generate_cube(), PrimitiveMode::Triangles));
//!
//! let viewport = Viewport::new(800.0, 600.0, 45.0).expect("valid viewport");
//! let hit = scene.update_hover((400.0, 300.0), &viewport);
//! assert_eq!(hit.map(|h| h.id), Some(cube));
//! ```

pub mod camera;
pub mod error;
pub mod geometry;
pub mod picking;
pub mod scene;

// Re-export main types for convenience
pub use camera::{CameraController, CameraManager, InputEvent, OrbitCamera};
pub use error::ViewerError;
pub use picking::{ObjectPicker, PickResult, Ray, Viewport};
pub use scene::{Object, ObjectId, Scene, Transform};
