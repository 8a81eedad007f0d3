//! Translates discrete input events into camera and object operations.
//!
//! The interaction core never polls devices; the host event loop forwards
//! these events once per frame. Bindings follow the usual modeller scheme:
//! middle-drag orbits, Shift + middle-drag pans, the wheel zooms, and
//! left-drag spins whichever object is currently hovered.

use crate::camera::orbit_camera::OrbitCamera;
use crate::scene::object::Object;
use cgmath::Vector3;

/// Mouse buttons the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Modifier keys the controller tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Shift,
    Ctrl,
}

/// Discrete input events at the host boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Relative cursor motion in pixels.
    MouseMotion { dx: f32, dy: f32 },
    /// Scroll delta; positive means scrolling up/away from the user.
    MouseWheel { delta: f32 },
    Button { button: MouseButton, pressed: bool },
    Modifier { modifier: Modifier, pressed: bool },
}

pub struct CameraController {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    middle_pressed: bool,
    left_pressed: bool,
    shift_held: bool,
    ctrl_held: bool,
}

impl CameraController {
    pub fn new(rotate_speed: f32, zoom_speed: f32, pan_speed: f32) -> Self {
        Self {
            rotate_speed,
            zoom_speed,
            pan_speed,
            middle_pressed: false,
            left_pressed: false,
            shift_held: false,
            ctrl_held: false,
        }
    }

    /// Applies one event to the camera.
    pub fn process_event(&mut self, event: &InputEvent, camera: &mut OrbitCamera) {
        match *event {
            InputEvent::Button { button, pressed } => match button {
                MouseButton::Middle => self.middle_pressed = pressed,
                MouseButton::Left => self.left_pressed = pressed,
                MouseButton::Right => {}
            },
            InputEvent::Modifier { modifier, pressed } => match modifier {
                Modifier::Shift => self.shift_held = pressed,
                Modifier::Ctrl => self.ctrl_held = pressed,
            },
            InputEvent::MouseWheel { delta } => {
                // Scrolling up moves the camera closer.
                camera.zoom(-delta, self.zoom_speed);
            }
            InputEvent::MouseMotion { dx, dy } => {
                if self.middle_pressed && self.shift_held {
                    camera.pan(dx, dy, self.pan_speed);
                } else if self.middle_pressed {
                    camera.orbit(dy, dx, self.rotate_speed);
                }
            }
        }
    }

    /// Applies one event to the hovered object, if any.
    ///
    /// Left-drag rotates the object (Ctrl adds roll); a right press toggles
    /// its wireframe flag.
    pub fn process_object_event(&mut self, event: &InputEvent, object: &mut Object) {
        match *event {
            InputEvent::MouseMotion { dx, dy } if self.left_pressed => {
                object.transform.rotate(Vector3::new(-dy, -dx, 0.0));
                if self.ctrl_held {
                    object.transform.rotate(Vector3::new(0.0, 0.0, -dx));
                }
            }
            InputEvent::Button {
                button: MouseButton::Right,
                pressed: true,
            } => {
                object.wireframe = !object.wireframe;
            }
            _ => {}
        }
    }

    pub fn is_panning(&self) -> bool {
        self.middle_pressed && self.shift_held
    }

    pub fn is_orbiting(&self) -> bool {
        self.middle_pressed && !self.shift_held
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(0.2, 0.2, 0.002)
    }
}
