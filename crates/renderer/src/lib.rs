//! wgpu renderer for the pyramid scene: camera, lighting, and instanced mesh batches.

pub mod camera;
pub mod lighting;
pub mod mesh;
pub mod pipeline;
pub mod renderer;
pub mod texture;
pub mod vertex;

pub use camera::*;
pub use lighting::*;
pub use mesh::*;
pub use pipeline::*;
pub use renderer::*;
pub use texture::*;
pub use vertex::*;
