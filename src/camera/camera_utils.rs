//! Camera ownership and the matrix hand-off to the rendering layer.
//!
//! The rendering layer owns the projection matrix; this core only exports
//! the view matrix (and eye position) in a GPU-uploadable layout.

use cgmath::Matrix4;

use super::camera_controller::{CameraController, InputEvent};
use super::orbit_camera::OrbitCamera;

/// Owns the camera and its controller for the session.
pub struct CameraManager {
    pub camera: OrbitCamera,
    pub controller: CameraController,
}

impl CameraManager {
    pub fn new(camera: OrbitCamera, controller: CameraController) -> Self {
        Self { camera, controller }
    }

    /// Forwards one input event to the controller.
    pub fn process_event(&mut self, event: &InputEvent) {
        self.controller.process_event(event, &mut self.camera);
    }

    /// View matrix for the rendering layer.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        self.camera.view_matrix()
    }

    /// View matrix and eye position in uniform-buffer layout.
    pub fn uniform(&self) -> CameraUniform {
        let eye = self.camera.eye();
        CameraUniform {
            view_position: [eye.x, eye.y, eye.z, 1.0],
            view: convert_matrix4_to_array(self.view_matrix()),
        }
    }
}

/// Camera data in the layout the rendering layer uploads to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// Eye position in homogenous coordinates.
    ///
    /// Homogenous coordinates are used to fulfill the 16 byte alignment
    /// requirement.
    pub view_position: [f32; 4],

    /// Column-major view matrix.
    pub view: [[f32; 4]; 4],
}

pub fn convert_matrix4_to_array(matrix4: Matrix4<f32>) -> [[f32; 4]; 4] {
    let mut result = [[0.0; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            result[i][j] = matrix4[i][j];
        }
    }

    result
}
