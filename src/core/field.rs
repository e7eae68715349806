//! Particle store and per-frame motion math.
//!
//! The field owns one `Particle` per instance, assembled once by zipping
//! the five shape generators' outputs index by index (no reordering, no
//! nearest-neighbor matching; correspondence across shapes is positional).
//! Each frame the damped chase is the only thing that mutates `position`;
//! wave, repulsion and follow compose into a throwaway display position so
//! secondary motion can never compound across frames.

use super::constants::{
    CHASE_DAMPING, FILLER_SCALE_BASE, FILLER_SCALE_SPAN, FOLLOW_GAIN, PALETTE_ACCENT_A_THRESHOLD,
    PALETTE_ACCENT_B_THRESHOLD, PRIMARY_SCALE_BASE, PRIMARY_SCALE_SPAN, REPEL_DEAD_ZONE,
    REPEL_FALLOFF, REPEL_LIFT, REPEL_RADIUS, REPEL_STRENGTH, SPIN_MAX, WAVE_AMP, WAVE_POS_FREQ,
    WAVE_TIME_FREQ_X, WAVE_TIME_FREQ_Y,
};
use super::emit::ShapePoints;
use super::morph::{morph_target, ShapeTargets};
use glam::{Vec2, Vec3};
use rand::prelude::*;
use std::f32::consts::PI;

/// One particle: a chased position, its five shape targets, a constant
/// angular velocity, and whether it belongs to the logo's silhouette
/// (silhouette particles render slightly larger).
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec3,
    pub rotation: Vec3,
    pub targets: ShapeTargets,
    pub spin: Vec3,
    pub primary: bool,
}

pub struct ParticleField {
    pub particles: Vec<Particle>,
}

impl ParticleField {
    /// Zip the five generators' outputs into one field. All five must have
    /// the same length; index i is the same particle in every shape.
    pub fn assemble(
        logo: &ShapePoints,
        cloud: &ShapePoints,
        pad: &ShapePoints,
        screen: &ShapePoints,
        rocket: &ShapePoints,
        rng: &mut StdRng,
    ) -> Self {
        let n = logo.points.len();
        assert_eq!(cloud.points.len(), n);
        assert_eq!(pad.points.len(), n);
        assert_eq!(screen.points.len(), n);
        assert_eq!(rocket.points.len(), n);

        let particles = (0..n)
            .map(|i| Particle {
                position: logo.points[i],
                rotation: Vec3::new(
                    rng.gen::<f32>() * PI,
                    rng.gen::<f32>() * PI,
                    rng.gen::<f32>() * PI,
                ),
                targets: ShapeTargets {
                    logo: logo.points[i],
                    cloud: cloud.points[i],
                    pad: pad.points[i],
                    screen: screen.points[i],
                    rocket: rocket.points[i],
                },
                spin: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * 2.0 * SPIN_MAX,
                    (rng.gen::<f32>() - 0.5) * 2.0 * SPIN_MAX,
                    (rng.gen::<f32>() - 0.5) * 2.0 * SPIN_MAX,
                ),
                primary: i < logo.silhouette_len,
            })
            .collect();
        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Swap the first two targets for the overview page: particles rest in
    /// a wide scatter and condense into the headline over one phase.
    pub fn retarget_headline(&mut self, scatter: &ShapePoints, headline: &ShapePoints) {
        assert_eq!(scatter.points.len(), self.particles.len());
        assert_eq!(headline.points.len(), self.particles.len());
        for (i, p) in self.particles.iter_mut().enumerate() {
            p.position = scatter.points[i];
            p.targets.logo = scatter.points[i];
            p.targets.cloud = headline.points[i];
        }
    }

    /// One simulation step: chase the phase target and advance rotation.
    /// Secondary motion never runs through here; see `display_position`.
    pub fn step(&mut self, progress: f32) {
        for (i, p) in self.particles.iter_mut().enumerate() {
            let target = morph_target(&p.targets, i, progress);
            p.position = chase(p.position, target, CHASE_DAMPING);
            p.rotation += p.spin;
        }
    }
}

/// Single damped chase update, exposed for reuse and tests: first-order
/// approach that cannot overshoot for damping in (0, 1).
#[inline]
pub fn chase(position: Vec3, target: Vec3, damping: f32) -> Vec3 {
    position + (target - position) * damping
}

/// Ambient wave offset for a particle at its current resting position.
#[inline]
pub fn wave_offset(time: f32, position: Vec3) -> Vec3 {
    Vec3::new(
        (time * WAVE_TIME_FREQ_X + position.y * WAVE_POS_FREQ).sin() * WAVE_AMP,
        (time * WAVE_TIME_FREQ_Y + position.x * WAVE_POS_FREQ).cos() * WAVE_AMP,
        0.0,
    )
}

/// Planar pointer repulsion with a slight z lift. Zero at and beyond
/// REPEL_RADIUS, growing as the pointer closes in; the tiny dead zone
/// avoids a division blow-up when the pointer sits on a particle.
#[inline]
pub fn repel_offset(position: Vec3, pointer_world: Vec3) -> Vec3 {
    let dx = position.x - pointer_world.x;
    let dy = position.y - pointer_world.y;
    let dist = (dx * dx + dy * dy).sqrt();
    if dist >= REPEL_RADIUS || dist <= REPEL_DEAD_ZONE {
        return Vec3::ZERO;
    }
    let force = (1.0 - dist / REPEL_FALLOFF) * REPEL_STRENGTH;
    Vec3::new(dx / dist * force, dy / dist * force, force * REPEL_LIFT)
}

/// Parallax bias toward the pointer's normalized screen position.
#[inline]
pub fn follow_offset(pointer_ndc: Vec2) -> Vec3 {
    Vec3::new(pointer_ndc.x * FOLLOW_GAIN, pointer_ndc.y * FOLLOW_GAIN, 0.0)
}

/// Compose the position actually rendered this frame. Reads the chased
/// position; never writes it.
#[inline]
pub fn display_position(
    position: Vec3,
    time: f32,
    pointer_world: Vec3,
    pointer_ndc: Vec2,
) -> Vec3 {
    position + wave_offset(time, position) + repel_offset(position, pointer_world)
        + follow_offset(pointer_ndc)
}

/// Weighted palette pick from a uniform roll: index 2 is accent A (~15%),
/// index 1 accent B (~20%), index 0 the base color.
#[inline]
pub fn color_index(roll: f32) -> usize {
    if roll > PALETTE_ACCENT_A_THRESHOLD {
        2
    } else if roll > PALETTE_ACCENT_B_THRESHOLD {
        1
    } else {
        0
    }
}

/// Initial render scale: silhouette particles read larger than filler.
#[inline]
pub fn initial_scale(primary: bool, rng: &mut StdRng) -> f32 {
    if primary {
        PRIMARY_SCALE_BASE + rng.gen::<f32>() * PRIMARY_SCALE_SPAN
    } else {
        FILLER_SCALE_BASE + rng.gen::<f32>() * FILLER_SCALE_SPAN
    }
}
