use glam::{Vec2, Vec3};

/// Latest pointer sample, written by the pointermove closure and read once
/// per frame by the updater. `world` is the pointer unprojected onto the
/// z = 0 shape plane for distance falloff; `ndc` drives the follow bias.
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub ndc: Vec2,
    pub world: Vec3,
}

/// Normalized device coordinates from client-space pixels: [-1, 1] on each
/// axis, y pointing up.
#[inline]
pub fn ndc_from_client(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        (x / width.max(1.0)) * 2.0 - 1.0,
        -((y / height.max(1.0)) * 2.0 - 1.0),
    )
}
