//! Immutable flat-shaded triangle buffers produced by every generator.

use bytemuck::{Pod, Zeroable};
use engine_core::Cardinal;
use glam::Vec3;

/// Interleaved vertex: `[x y z nx ny nz]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl MeshVertex {
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.into(),
            normal: normal.into(),
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from(self.position)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::from(self.normal)
    }
}

/// Triangle list (three consecutive vertices per triangle, no index sharing).
///
/// Every triangle carries the same normal on all three vertices, equal to its
/// geometric face normal. A buffer is never mutated once built; use
/// [`MeshBuilder`] to create one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshBuffer {
    vertices: Box<[MeshVertex]>,
}

impl MeshBuffer {
    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Raw bytes for GPU upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Iterate triangles as vertex triples.
    pub fn triangles(&self) -> impl Iterator<Item = [MeshVertex; 3]> + '_ {
        self.vertices.chunks_exact(3).map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// A copy with every position and normal rotated a quarter-turn multiple about +Y.
    /// Rotation (not reflection) keeps the winding order intact.
    pub fn rotated(&self, orientation: Cardinal) -> MeshBuffer {
        let vertices = self
            .vertices
            .iter()
            .map(|v| MeshVertex::new(orientation.rotate(v.position()), orientation.rotate(v.normal())))
            .collect();
        MeshBuffer { vertices }
    }

    /// Axis-aligned bounds `(min, max)`, or `None` for an empty buffer.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = self.vertices.first()?.position();
        Some(self.vertices.iter().fold((first, first), |(lo, hi), v| {
            let p = v.position();
            (lo.min(p), hi.max(p))
        }))
    }
}

/// Single-allocation writer for a [`MeshBuffer`].
#[derive(Debug, Default)]
pub struct MeshBuilder {
    vertices: Vec<MeshVertex>,
}

impl MeshBuilder {
    /// Reserve room for `triangles` triangles up front.
    pub fn with_triangle_capacity(triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(triangles * 3),
        }
    }

    /// Append one triangle; all three vertices share `normal`.
    pub fn push_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3, normal: Vec3) {
        self.vertices.extend_from_slice(&[
            MeshVertex::new(a, normal),
            MeshVertex::new(b, normal),
            MeshVertex::new(c, normal),
        ]);
    }

    /// Append a quad `a b c d` (counter-clockwise from the front) as two triangles.
    pub fn push_quad(&mut self, a: Vec3, b: Vec3, c: Vec3, d: Vec3, normal: Vec3) {
        self.push_triangle(a, b, c, normal);
        self.push_triangle(a, c, d, normal);
    }

    /// Append every triangle of an existing buffer.
    pub fn extend_from(&mut self, mesh: &MeshBuffer) {
        self.vertices.extend_from_slice(mesh.vertices());
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Freeze into an immutable buffer.
    pub fn finish(self) -> MeshBuffer {
        debug_assert_eq!(self.vertices.len() % 3, 0);
        MeshBuffer {
            vertices: self.vertices.into_boxed_slice(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_groups_vertices_in_threes() {
        let mut b = MeshBuilder::with_triangle_capacity(2);
        b.push_quad(Vec3::ZERO, Vec3::X, Vec3::X + Vec3::Y, Vec3::Y, Vec3::Z);
        let mesh = b.finish();
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.as_bytes().len(), 6 * 6 * 4);
        test_util::assert_flat_and_outward(&mesh);
    }

    #[test]
    fn bounds_cover_all_positions() {
        let mut b = MeshBuilder::default();
        b.push_triangle(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(3.0, 0.0, 2.0), Vec3::new(0.0, 5.0, 2.0), Vec3::Z);
        let (lo, hi) = b.finish().bounds().unwrap();
        assert_eq!(lo, Vec3::new(-1.0, 0.0, 2.0));
        assert_eq!(hi, Vec3::new(3.0, 5.0, 2.0));
        assert!(MeshBuffer::default().bounds().is_none());
    }
}
