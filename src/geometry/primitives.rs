//! Primitive shape factories.
//!
//! All shapes are centered at the origin in local space with per-vertex
//! colors; positions span -0.5 to 0.5 unless a radius says otherwise.

use super::GeometryData;
use std::f32::consts::PI;

/// Single quad facing +Z, two triangles over four shared vertices.
pub fn generate_square() -> GeometryData {
    GeometryData {
        positions: vec![
            [-0.5, -0.5, 0.5], // front-bottom-left
            [0.5, -0.5, 0.5],  // front-bottom-right
            [0.5, 0.5, 0.5],   // front-top-right
            [-0.5, 0.5, 0.5],  // front-top-left
        ],
        colors: vec![
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 1.0, 0.0],
        ],
        indices: vec![0, 1, 2, 2, 3, 0],
    }
}

/// Unit cube over 8 shared corner vertices, 12 triangles.
pub fn generate_cube() -> GeometryData {
    let positions = vec![
        [-0.5, -0.5, 0.5],  // 0 front-bottom-left
        [0.5, -0.5, 0.5],   // 1 front-bottom-right
        [0.5, 0.5, 0.5],    // 2 front-top-right
        [-0.5, 0.5, 0.5],   // 3 front-top-left
        [-0.5, -0.5, -0.5], // 4 back-bottom-left
        [0.5, -0.5, -0.5],  // 5 back-bottom-right
        [0.5, 0.5, -0.5],   // 6 back-top-right
        [-0.5, 0.5, -0.5],  // 7 back-top-left
    ];
    let colors = vec![
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 1.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 1.0, 0.0],
    ];
    #[rustfmt::skip]
    let indices = vec![
        // Front
        0, 1, 2,  2, 3, 0,
        // Right
        1, 5, 6,  6, 2, 1,
        // Back
        7, 6, 5,  5, 4, 7,
        // Left
        4, 0, 3,  3, 7, 4,
        // Top
        3, 2, 6,  6, 7, 3,
        // Bottom
        4, 5, 1,  1, 0, 4,
    ];

    GeometryData {
        positions,
        colors,
        indices,
    }
}

/// Square pyramid: four base corners plus an apex, 6 triangles.
pub fn generate_pyramid() -> GeometryData {
    let positions = vec![
        [-0.5, -0.5, 0.5],  // 0 base-front-left
        [0.5, -0.5, 0.5],   // 1 base-front-right
        [0.0, 0.5, 0.0],    // 2 apex
        [-0.5, -0.5, -0.5], // 3 base-back-left
        [0.5, -0.5, -0.5],  // 4 base-back-right
    ];
    let colors = vec![
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
    ];
    #[rustfmt::skip]
    let indices = vec![
        // Front
        0, 1, 2,
        // Right
        1, 4, 2,
        // Left
        0, 2, 3,
        // Back
        3, 2, 4,
        // Base
        0, 1, 4,  4, 3, 0,
    ];

    GeometryData {
        positions,
        colors,
        indices,
    }
}

/// UV sphere with the given radius and resolution.
///
/// `stacks` are latitude bands from pole to pole, `slices` longitude
/// segments. Vertex colors encode the normalized position.
pub fn generate_uv_sphere(radius: f32, stacks: u32, slices: u32) -> GeometryData {
    let mut data = GeometryData::new();
    let stacks = stacks.max(2);
    let slices = slices.max(3);

    for stack in 0..=stacks {
        let phi = stack as f32 / stacks as f32 * PI;
        let sin_phi = phi.sin();
        let cos_phi = phi.cos();

        for slice in 0..=slices {
            let theta = slice as f32 / slices as f32 * 2.0 * PI;

            let x = radius * theta.cos() * sin_phi;
            let y = radius * cos_phi;
            let z = radius * theta.sin() * sin_phi;

            data.positions.push([x, y, z]);
            data.colors.push([
                (x + radius) / (2.0 * radius),
                (y + radius) / (2.0 * radius),
                (z + radius) / (2.0 * radius),
            ]);
        }
    }

    for stack in 0..stacks {
        for slice in 0..slices {
            let v1 = stack * (slices + 1) + slice;
            let v2 = v1 + 1;
            let v3 = (stack + 1) * (slices + 1) + slice;
            let v4 = v3 + 1;

            data.indices.extend_from_slice(&[v1, v3, v4]);
            data.indices.extend_from_slice(&[v4, v2, v1]);
        }
    }

    data
}

/// Cube edges as a line list, for wireframe display.
pub fn generate_cube_wireframe() -> GeometryData {
    let cube = generate_cube();
    #[rustfmt::skip]
    let indices = vec![
        // Front
        0, 1,  1, 2,  2, 3,  3, 0,
        // Back
        4, 5,  5, 6,  6, 7,  7, 4,
        // Connecting edges
        0, 4,  1, 5,  2, 6,  3, 7,
    ];

    let mut data = GeometryData {
        positions: cube.positions,
        colors: cube.colors,
        indices,
    };
    data.set_color(1.0, 1.0, 1.0);
    data
}

/// Converts a triangle index list into a highlight outline line list.
///
/// Each triangle contributes two of its edges, which is enough to trace the
/// silhouette of the shared-vertex primitives above.
pub fn outline_indices(triangle_indices: &[u32]) -> Vec<u32> {
    let mut outline = Vec::with_capacity(triangle_indices.len() / 3 * 4);
    for triangle in triangle_indices.chunks_exact(3) {
        outline.extend_from_slice(&[triangle[0], triangle[1], triangle[1], triangle[2]]);
    }
    outline
}
