//! Headless demo: drives the interaction core through a scripted frame loop.
//!
//! Stands in for the host event loop — feeds input events to the camera
//! controller, sweeps the cursor across the viewport, and reports which
//! object ends up hovered each frame.
//!
//! Run with `RUST_LOG=debug cargo run --example orbit_pick` to watch the
//! hover transitions.

use anyhow::Result;
use cgmath::{Vector3, Zero};
use parallax::camera::{CameraController, CameraManager, InputEvent, Modifier, MouseButton, OrbitCamera};
use parallax::geometry::{
    generate_cube, generate_cube_wireframe, generate_pyramid, generate_uv_sphere, PrimitiveMode,
};
use parallax::picking::Viewport;
use parallax::scene::{Object, Scene};

fn main() -> Result<()> {
    env_logger::init();

    let viewport = Viewport::new(800.0, 700.0, 45.0)?;
    let camera = OrbitCamera::new(5.0, 30.0, 0.0, Vector3::zero());
    let mut scene = Scene::new(CameraManager::new(camera, CameraController::default()));

    let mut cube = Object::new("cube", generate_cube(), PrimitiveMode::Triangles);
    cube.transform.position = Vector3::new(-1.0, 0.0, 0.0);
    let mut pyramid = Object::new("pyramid", generate_pyramid(), PrimitiveMode::Triangles);
    pyramid.transform.position = Vector3::new(1.0, 0.0, 0.0);
    let mut sphere = Object::new(
        "sphere",
        generate_uv_sphere(0.5, 16, 16),
        PrimitiveMode::Triangles,
    );
    sphere.transform.position = Vector3::new(0.0, 1.0, 0.0);

    let mut frame = Object::new(
        "frame",
        generate_cube_wireframe(),
        PrimitiveMode::Lines { width: 4.0 },
    );
    frame.transform.position = Vector3::new(0.0, -1.2, 0.0);

    scene.register(cube);
    scene.register(pyramid);
    scene.register(sphere);
    scene.register(frame);

    // Orbit a quarter turn, then pan the target slightly upward.
    let scripted_input = [
        InputEvent::Button {
            button: MouseButton::Middle,
            pressed: true,
        },
        InputEvent::MouseMotion { dx: 450.0, dy: 0.0 },
        InputEvent::Modifier {
            modifier: Modifier::Shift,
            pressed: true,
        },
        InputEvent::MouseMotion { dx: 0.0, dy: 40.0 },
        InputEvent::Button {
            button: MouseButton::Middle,
            pressed: false,
        },
        InputEvent::MouseWheel { delta: 2.0 },
    ];
    for event in &scripted_input {
        scene.camera_manager.process_event(event);
    }

    println!(
        "camera: radius {:.2}, pitch {:.1}, yaw {:.1}, eye {:?}",
        scene.camera_manager.camera.radius(),
        scene.camera_manager.camera.pitch(),
        scene.camera_manager.camera.yaw(),
        scene.camera_manager.camera.eye()
    );

    // Sweep the cursor across the middle of the screen, one pick per frame.
    for frame in 0..20 {
        let cursor = (40.0 * frame as f32, 350.0);
        match scene.update_hover(cursor, &viewport) {
            Some(result) => {
                let name = scene
                    .get_object(result.id)
                    .map_or("?", |object| object.name.as_str());
                println!(
                    "frame {frame:2}: cursor {cursor:?} -> {name} ({}) at distance {:.2}",
                    result.id, result.distance
                );
            }
            None => println!("frame {frame:2}: cursor {cursor:?} -> nothing"),
        }
    }

    // Matrices the rendering layer would upload this frame.
    let uniform = scene.camera_manager.uniform();
    println!("view matrix row 0: {:?}", uniform.view[0]);
    for object in scene.objects() {
        println!("{}: model matrix row 3: {:?}", object.name, object.model_matrix_array()[3]);
    }

    Ok(())
}
