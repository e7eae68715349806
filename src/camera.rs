use crate::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR};
use glam::{Mat4, Vec2, Vec3, Vec4};

// The camera looks straight down -z from `eye`; the scroll bindings dolly
// `eye` along y/z. The slow whole-field yaw is folded in as a root rotation
// so particle transforms stay camera-independent.

#[inline]
fn projection(width: f32, height: f32) -> Mat4 {
    let aspect = width / height.max(1.0);
    Mat4::perspective_rh(CAMERA_FOV_DEG.to_radians(), aspect, CAMERA_NEAR, CAMERA_FAR)
}

#[inline]
fn view(eye: Vec3) -> Mat4 {
    Mat4::look_at_rh(eye, Vec3::new(eye.x, eye.y, 0.0), Vec3::Y)
}

/// Clip-from-world matrix for the frame, including the field yaw.
pub fn view_proj(width: f32, height: f32, eye: Vec3, yaw: f32) -> Mat4 {
    projection(width, height) * view(eye) * Mat4::from_rotation_y(yaw)
}

/// World-space ray through a normalized device coordinate.
pub fn ray_from_ndc(ndc: Vec2, width: f32, height: f32, eye: Vec3) -> (Vec3, Vec3) {
    let inv = (projection(width, height) * view(eye)).inverse();
    let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let rd = (p1 - eye).normalize();
    (eye, rd)
}

/// Unproject the pointer onto the z = 0 plane the silhouettes live in.
/// None when the ray runs parallel to the plane or points away from it.
pub fn pointer_world_on_plane(ndc: Vec2, width: f32, height: f32, eye: Vec3) -> Option<Vec3> {
    let (ro, rd) = ray_from_ndc(ndc, width, height, eye);
    if rd.z.abs() < 1e-6 {
        return None;
    }
    let t = -ro.z / rd.z;
    (t >= 0.0).then(|| ro + rd * t)
}
