//! Scene: object registry, camera ownership and hover tracking.

use log::debug;

use crate::camera::camera_utils::CameraManager;
use crate::picking::{ObjectPicker, PickResult, Viewport};
use crate::scene::object::{Object, ObjectId};

/// Owns the objects, the camera manager and the per-frame hover state.
///
/// Ids are handed out by a monotonically increasing counter and never
/// reused, so a stale id held by the host simply stops resolving after the
/// object is removed.
pub struct Scene {
    pub camera_manager: CameraManager,
    objects: Vec<Object>,
    picker: ObjectPicker,
    next_id: u32,
    hovered: Option<ObjectId>,
}

impl Scene {
    pub fn new(camera_manager: CameraManager) -> Self {
        Self {
            camera_manager,
            objects: Vec::new(),
            picker: ObjectPicker::new(),
            next_id: 0,
            hovered: None,
        }
    }

    /// Registers an object and assigns it the next id.
    pub fn register(&mut self, mut object: Object) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        object.id = Some(id);
        debug!("registered object {} as {}", object.name, id);
        self.objects.push(object);
        id
    }

    /// Removes an object, returning it if the id was known.
    ///
    /// Clears the hovered reference when it pointed at the removed object.
    pub fn remove(&mut self, id: ObjectId) -> Option<Object> {
        let index = self.objects.iter().position(|o| o.id() == Some(id))?;
        if self.hovered == Some(id) {
            self.hovered = None;
        }
        let object = self.objects.remove(index);
        debug!("removed object {} ({})", object.name, id);
        Some(object)
    }

    pub fn get_object(&self, id: ObjectId) -> Option<&Object> {
        self.objects.iter().find(|o| o.id() == Some(id))
    }

    pub fn get_object_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.objects.iter_mut().find(|o| o.id() == Some(id))
    }

    /// Objects in registration order (the picking tie-break order).
    pub fn objects(&self) -> impl Iterator<Item = &Object> {
        self.objects.iter()
    }

    pub fn objects_mut(&mut self) -> impl Iterator<Item = &mut Object> {
        self.objects.iter_mut()
    }

    pub fn object_ids(&self) -> Vec<ObjectId> {
        self.objects.iter().filter_map(Object::id).collect()
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Currently hovered object, as of the last pick pass.
    pub fn hovered(&self) -> Option<ObjectId> {
        self.hovered
    }

    pub fn hovered_object_mut(&mut self) -> Option<&mut Object> {
        let id = self.hovered?;
        self.get_object_mut(id)
    }

    /// Runs a full pick pass for the given cursor position and updates the
    /// hovered object.
    ///
    /// Every object's hit record is recomputed against a freshly generated
    /// ray before resolving, so results from a previous frame never leak in.
    pub fn update_hover(&mut self, cursor: (f32, f32), viewport: &Viewport) -> Option<PickResult> {
        let camera = self.camera_manager.camera;
        let result = self
            .picker
            .pick(cursor, viewport, &camera, &mut self.objects);

        let hovered = result.map(|r| r.id);
        if hovered != self.hovered {
            debug!("hover changed: {:?} -> {:?}", self.hovered, hovered);
            self.hovered = hovered;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{CameraController, OrbitCamera};
    use crate::geometry::{generate_cube, PrimitiveMode};
    use cgmath::{Vector3, Zero};

    fn scene() -> Scene {
        let camera = OrbitCamera::new(10.0, 1.0, 0.0, Vector3::zero());
        Scene::new(CameraManager::new(camera, CameraController::default()))
    }

    fn cube(name: &str) -> Object {
        Object::new(name, generate_cube(), PrimitiveMode::Triangles)
    }

    #[test]
    fn ids_are_monotonic_and_never_reused() {
        let mut scene = scene();
        let a = scene.register(cube("a"));
        let b = scene.register(cube("b"));
        assert_eq!((a, b), (ObjectId(0), ObjectId(1)));

        scene.remove(a);
        let c = scene.register(cube("c"));
        assert_eq!(c, ObjectId(2));
        assert_eq!(scene.object_ids(), vec![ObjectId(1), ObjectId(2)]);
    }

    #[test]
    fn unknown_id_lookups_return_none() {
        let mut scene = scene();
        assert!(scene.get_object(ObjectId(9)).is_none());
        assert!(scene.remove(ObjectId(9)).is_none());
    }

    #[test]
    fn hover_follows_pick_results() {
        let mut scene = scene();
        let id = scene.register(cube("cube"));
        let viewport = Viewport::new(800.0, 600.0, 45.0).unwrap();

        let result = scene.update_hover((400.0, 300.0), &viewport);
        assert_eq!(result.map(|r| r.id), Some(id));
        assert_eq!(scene.hovered(), Some(id));

        // Cursor in a corner points well away from the cube.
        let result = scene.update_hover((0.0, 0.0), &viewport);
        assert!(result.is_none());
        assert_eq!(scene.hovered(), None);
    }

    #[test]
    fn removing_hovered_object_clears_hover() {
        let mut scene = scene();
        let id = scene.register(cube("cube"));
        let viewport = Viewport::new(800.0, 600.0, 45.0).unwrap();

        scene.update_hover((400.0, 300.0), &viewport);
        assert_eq!(scene.hovered(), Some(id));

        scene.remove(id);
        assert_eq!(scene.hovered(), None);
    }

    #[test]
    fn hovered_object_mut_resolves_current_hover() {
        let mut scene = scene();
        let id = scene.register(cube("cube"));
        let viewport = Viewport::new(800.0, 600.0, 45.0).unwrap();
        scene.update_hover((400.0, 300.0), &viewport);

        let object = scene.hovered_object_mut().expect("cube is hovered");
        assert_eq!(object.id(), Some(id));
    }
}
