//! GPU-side scene assets: the landmark meshes plus the shared prop primitives.

use procgen::{generate_sphere, unit_cube, Landmark};
use renderer::Mesh;

const PROP_SPHERE_SEGMENTS: u32 = 12;
const PROP_SPHERE_RINGS: u32 = 12;

/// Every mesh the viewer draws. Uploaded once at startup, never modified.
pub(crate) struct SceneMeshes {
    pub ground: Mesh,
    pub body: Mesh,
    pub staircases: Vec<Mesh>,
    pub doorways: Mesh,
    pub cube: Mesh,
    pub sphere: Mesh,
}

impl SceneMeshes {
    pub fn upload(device: &wgpu::Device, landmark: &Landmark) -> Self {
        let staircases = landmark
            .staircases
            .iter()
            .map(|(dir, mesh)| Mesh::from_buffer(device, &format!("Staircase {:?}", dir), mesh))
            .collect();

        Self {
            ground: Mesh::from_buffer(device, "Ground", &landmark.ground),
            body: Mesh::from_buffer(device, "Pyramid", &landmark.body),
            staircases,
            doorways: Mesh::from_buffer(device, "Doorways", &landmark.doorways),
            cube: Mesh::from_buffer(device, "Prop Cube", &unit_cube()),
            sphere: Mesh::from_buffer(
                device,
                "Prop Sphere",
                &generate_sphere(1.0, PROP_SPHERE_SEGMENTS, PROP_SPHERE_RINGS),
            ),
        }
    }
}
