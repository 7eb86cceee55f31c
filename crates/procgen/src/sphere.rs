//! Low-poly flat-shaded sphere for tree canopies, heads and clouds.

use crate::mesh::{MeshBuffer, MeshBuilder};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Triangles thinner than this (the collapsed ones at the poles) are dropped.
const MIN_DOUBLE_AREA: f32 = 1e-8;

/// UV sphere with one normal per facet.
pub fn generate_sphere(radius: f32, segments: u32, rings: u32) -> MeshBuffer {
    let segments = segments.max(3);
    let rings = rings.max(2);

    let point = |ring: u32, segment: u32| {
        if ring == 0 {
            return Vec3::new(0.0, radius, 0.0);
        }
        if ring == rings {
            return Vec3::new(0.0, -radius, 0.0);
        }
        let phi = PI * ring as f32 / rings as f32;
        let theta = TAU * segment as f32 / segments as f32;
        Vec3::new(
            radius * phi.sin() * theta.cos(),
            radius * phi.cos(),
            radius * phi.sin() * theta.sin(),
        )
    };

    let mut builder = MeshBuilder::with_triangle_capacity((segments * rings * 2) as usize);
    let mut push_facet = |a: Vec3, b: Vec3, c: Vec3| {
        let cross = (b - a).cross(c - a);
        if cross.length() > MIN_DOUBLE_AREA {
            builder.push_triangle(a, b, c, cross.normalize());
        }
    };

    for ring in 0..rings {
        for segment in 0..segments {
            let current = point(ring, segment);
            let current_next = point(ring, segment + 1);
            let below = point(ring + 1, segment);
            let below_next = point(ring + 1, segment + 1);

            push_facet(current, current_next, below);
            push_facet(current_next, below_next, below);
        }
    }

    builder.finish()
}
