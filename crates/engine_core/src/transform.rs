//! Prop placement transforms and exact quarter-turn orientations.

use glam::{Mat4, Vec3};

/// Placement of an instanced prop part: position and per-axis scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform at the given position.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a new transform with position and non-uniform scale.
    pub fn from_position_scale(position: Vec3, scale: Vec3) -> Self {
        Self { position, scale }
    }

    /// Create the model matrix for this transform.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_scale(self.scale)
    }

    /// Scale every axis by the same factor, keeping the position.
    pub fn scaled_by(mut self, factor: f32) -> Self {
        self.scale *= factor;
        self
    }
}

/// One of the four quarter-turn orientations about world +Y.
///
/// Rotation is applied with exact integer coefficients so that axis-aligned
/// normals stay exactly axis-aligned after rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinal {
    /// 0 degrees: the local frame unchanged (faces +Z).
    South,
    /// 90 degrees.
    East,
    /// 180 degrees.
    North,
    /// 270 degrees.
    West,
}

impl Cardinal {
    pub const ALL: [Cardinal; 4] = [Cardinal::South, Cardinal::East, Cardinal::North, Cardinal::West];

    /// Rotation angle in degrees.
    pub fn degrees(self) -> u32 {
        match self {
            Cardinal::South => 0,
            Cardinal::East => 90,
            Cardinal::North => 180,
            Cardinal::West => 270,
        }
    }

    /// Rotate a vector about +Y. Matches `Mat3::from_rotation_y(degrees.to_radians())`
    /// without the trigonometric rounding.
    pub fn rotate(self, v: Vec3) -> Vec3 {
        match self {
            Cardinal::South => v,
            Cardinal::East => Vec3::new(v.z, v.y, -v.x),
            Cardinal::North => Vec3::new(-v.x, v.y, -v.z),
            Cardinal::West => Vec3::new(-v.z, v.y, v.x),
        }
    }
}
