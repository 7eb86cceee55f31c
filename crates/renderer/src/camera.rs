//! Free-flying camera for the landmark fly-through.
//!
//! The look direction is `(cos p * sin y, sin p, -cos p * cos y)`: yaw 0 looks
//! down -Z, yaw 90 down +X. Horizontal movement ignores pitch; flight is not 6-DOF.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Pitch is clamped to this many degrees either side of the horizon.
pub const PITCH_LIMIT_DEGREES: f32 = 89.0;

/// Camera with orientation stored in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Unbounded; wraps through the trigonometry.
    yaw: f32,
    /// Always within `[-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES]`.
    pitch: f32,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Aspect ratio (width / height).
    pub aspect: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 10.0, 40.0),
            yaw: 0.0,
            pitch: -10.0,
            fov_degrees: 60.0,
            near: 0.1,
            far: 1000.0,
            aspect: 4.0 / 3.0,
        }
    }
}

impl Camera {
    /// Create a camera at `position` with the given yaw and pitch in degrees.
    pub fn new(position: Vec3, yaw_degrees: f32, pitch_degrees: f32) -> Self {
        let mut camera = Self {
            position,
            ..Default::default()
        };
        camera.set_yaw_pitch(yaw_degrees, pitch_degrees);
        camera
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Set yaw and pitch directly (degrees); pitch is clamped.
    pub fn set_yaw_pitch(&mut self, yaw_degrees: f32, pitch_degrees: f32) {
        self.yaw = yaw_degrees;
        self.pitch = pitch_degrees.clamp(-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES);
    }

    /// Unit look direction.
    pub fn direction(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.to_radians().sin_cos();
        Vec3::new(cos_pitch * sin_yaw, sin_pitch, -cos_pitch * cos_yaw)
    }

    /// Forward on the horizontal plane.
    pub fn forward_flat(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        Vec3::new(sin_yaw, 0.0, -cos_yaw)
    }

    /// Right on the horizontal plane.
    pub fn right_flat(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        Vec3::new(cos_yaw, 0.0, sin_yaw)
    }

    /// Move relative to the camera: forward/right on the ground plane, up along world Y.
    pub fn move_by(&mut self, forward: f32, right: f32, up: f32) {
        self.position += self.forward_flat() * forward + self.right_flat() * right;
        self.position.y += up;
    }

    /// Add to yaw (unclamped) and pitch (clamped to the pitch limit).
    pub fn rotate(&mut self, delta_yaw_degrees: f32, delta_pitch_degrees: f32) {
        self.set_yaw_pitch(self.yaw + delta_yaw_degrees, self.pitch + delta_pitch_degrees);
    }

    /// Update aspect ratio (call on window resize).
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    /// Look from `position` towards `position + direction()`, world +Y up.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.direction(), Vec3::Y)
    }

    /// Get the projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    /// Get the combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Camera uniform data for GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 4], // w unused, padding
}

impl CameraUniform {
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 4],
        }
    }

    pub fn update(&mut self, camera: &Camera) {
        self.view_proj = camera.view_projection_matrix().to_cols_array_2d();
        let pos = camera.position;
        self.position = [pos.x, pos.y, pos.z, 1.0];
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn direction_is_unit_for_any_angles() {
        let mut camera = Camera::default();
        for yaw in (-720..=720).step_by(37) {
            for pitch in (-120..=120).step_by(11) {
                camera.set_yaw_pitch(yaw as f32, pitch as f32);
                assert!((camera.direction().length() - 1.0).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn direction_convention() {
        let mut camera = Camera::new(Vec3::ZERO, 0.0, 0.0);
        assert!(approx(camera.direction(), Vec3::NEG_Z));
        camera.set_yaw_pitch(90.0, 0.0);
        assert!(approx(camera.direction(), Vec3::X));
        camera.set_yaw_pitch(180.0, 0.0);
        assert!(approx(camera.direction(), Vec3::Z));
        camera.set_yaw_pitch(0.0, 89.0);
        assert!(camera.direction().y > 0.99);
    }

    #[test]
    fn pitch_clamps_in_one_call() {
        let mut camera = Camera::default();
        camera.rotate(0.0, 10_000.0);
        assert_eq!(camera.pitch(), PITCH_LIMIT_DEGREES);
        camera.rotate(0.0, -1e9);
        assert_eq!(camera.pitch(), -PITCH_LIMIT_DEGREES);
    }

    #[test]
    fn pitch_clamps_over_many_calls() {
        let mut camera = Camera::default();
        for _ in 0..1000 {
            camera.rotate(0.0, 0.7);
        }
        assert_eq!(camera.pitch(), 89.0);
        for _ in 0..1000 {
            camera.rotate(0.0, -3.3);
        }
        assert_eq!(camera.pitch(), -89.0);
    }

    #[test]
    fn yaw_is_unclamped() {
        let mut camera = Camera::new(Vec3::ZERO, 0.0, 0.0);
        camera.rotate(1000.0, 0.0);
        assert_eq!(camera.yaw(), 1000.0);
        let wrapped = Camera::new(Vec3::ZERO, 1000.0 - 720.0, 0.0);
        assert!(approx(camera.direction(), wrapped.direction()));
    }

    #[test]
    fn move_forward_facing_plus_z() {
        let mut camera = Camera::new(Vec3::new(0.0, 10.0, 40.0), 180.0, -10.0);
        camera.move_by(1.5, 0.0, 0.0);
        let expected_x = 0.0 + 180f32.to_radians().sin() * 1.5;
        let expected_z = 40.0 - 180f32.to_radians().cos() * 1.5;
        assert!((camera.position.x - expected_x).abs() < 1e-5);
        assert!((camera.position.z - expected_z).abs() < 1e-5);
        assert!((camera.position.z - 41.5).abs() < 1e-5);
        assert_eq!(camera.position.y, 10.0, "pitch must not lift horizontal movement");
    }

    #[test]
    fn strafe_and_climb() {
        let mut camera = Camera::new(Vec3::ZERO, 0.0, 45.0);
        camera.move_by(0.0, 2.0, 0.0);
        assert!(approx(camera.position, Vec3::new(2.0, 0.0, 0.0)));
        camera.move_by(0.0, 0.0, -1.5);
        assert!(approx(camera.position, Vec3::new(2.0, -1.5, 0.0)));
    }

    #[test]
    fn view_matrix_looks_along_direction() {
        let camera = Camera::new(Vec3::new(3.0, 4.0, 5.0), 37.0, -20.0);
        let view = camera.view_matrix();
        let eye = view.transform_point3(camera.position);
        assert!(approx(eye, Vec3::ZERO));
        let ahead = view.transform_point3(camera.position + camera.direction());
        assert!(approx(ahead, Vec3::NEG_Z), "got {:?}", ahead);
    }
}
