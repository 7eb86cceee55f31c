//! GPU copies of the generated landmark and prop meshes.

use procgen::MeshBuffer;
use wgpu::util::DeviceExt;

/// A non-indexed triangle list living on the GPU.
pub struct Mesh {
    pub vertex_buffer: wgpu::Buffer,
    pub num_vertices: u32,
}

impl Mesh {
    /// Upload a generated buffer. The CPU copy is not retained.
    pub fn from_buffer(device: &wgpu::Device, label: &str, mesh: &MeshBuffer) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: mesh.as_bytes(),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            vertex_buffer,
            num_vertices: mesh.vertex_count() as u32,
        }
    }
}
