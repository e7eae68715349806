//! Morph state machine.
//!
//! A single progress scalar in [0, 3] spans six half-unit phases; each phase
//! interpolates one pair of per-particle targets under one easing family.
//! Everything here is pure in (progress, index): re-evaluating at the same
//! progress yields bit-identical targets, so scrolling backward replays the
//! journey exactly with no hidden phase memory.

use super::constants::{
    BURST_SCALE_XY, BURST_SCALE_Z, DRIFT_AMP_X, DRIFT_AMP_Y, DRIFT_AMP_Z, DRIFT_FREQ_X,
    DRIFT_FREQ_Y, DRIFT_FREQ_Z, MORPH_MAX, PHASE_SPAN,
};
use glam::Vec3;

/// The five authored shapes a particle carries targets for.
#[derive(Clone, Copy, Debug)]
pub struct ShapeTargets {
    pub logo: Vec3,
    pub cloud: Vec3,
    pub pad: Vec3,
    pub screen: Vec3,
    pub rocket: Vec3,
}

/// One contiguous progress sub-range with a fixed (from, to, easing) triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MorphPhase {
    /// Logo dissolves into the cloud.
    LogoToCloud,
    /// Cloud condenses into the game pad.
    CloudToPad,
    /// Pad launches outward past the cloud (scaled projection, not a
    /// return to the cloud itself).
    PadToBurst,
    /// Burst settles into the monitor.
    BurstToScreen,
    /// Monitor loosens into an index-keyed drift.
    ScreenToDrift,
    /// Drift gathers into the rocket.
    DriftToRocket,
}

/// Easing families used across the journey.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    /// Hermite `t²(3 − 2t)`.
    Smoothstep,
    /// Plain `t²`, an accelerating push.
    QuadIn,
    /// Perlin quintic `t³(t(6t − 15) + 10)`, gentlest at both ends.
    Smootherstep,
}

#[inline]
pub fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

#[inline]
pub fn smootherstep(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    match easing {
        Easing::Smoothstep => smoothstep(t),
        Easing::QuadIn => t * t,
        Easing::Smootherstep => smootherstep(t),
    }
}

/// Map a progress value to its phase and local parameter in [0, 1].
/// Progress clamps to [0, MORPH_MAX]; each phase owns the half-open range
/// below its upper boundary so the journey's end lands exactly on t = 1.
pub fn classify(progress: f32) -> (MorphPhase, f32) {
    let p = progress.clamp(0.0, MORPH_MAX);
    let phase = if p <= PHASE_SPAN {
        MorphPhase::LogoToCloud
    } else if p <= 2.0 * PHASE_SPAN {
        MorphPhase::CloudToPad
    } else if p <= 3.0 * PHASE_SPAN {
        MorphPhase::PadToBurst
    } else if p <= 4.0 * PHASE_SPAN {
        MorphPhase::BurstToScreen
    } else if p <= 5.0 * PHASE_SPAN {
        MorphPhase::ScreenToDrift
    } else {
        MorphPhase::DriftToRocket
    };
    let start = phase_index(phase) as f32 * PHASE_SPAN;
    (phase, ((p - start) / PHASE_SPAN).clamp(0.0, 1.0))
}

#[inline]
fn phase_index(phase: MorphPhase) -> u32 {
    match phase {
        MorphPhase::LogoToCloud => 0,
        MorphPhase::CloudToPad => 1,
        MorphPhase::PadToBurst => 2,
        MorphPhase::BurstToScreen => 3,
        MorphPhase::ScreenToDrift => 4,
        MorphPhase::DriftToRocket => 5,
    }
}

/// Easing family assigned to each phase: smoothstep for the icon swaps,
/// an accelerating quadratic for the launch, smootherstep whenever a
/// precise silhouette forms or dissolves.
#[inline]
pub fn phase_easing(phase: MorphPhase) -> Easing {
    match phase {
        MorphPhase::LogoToCloud | MorphPhase::CloudToPad => Easing::Smoothstep,
        MorphPhase::PadToBurst => Easing::QuadIn,
        MorphPhase::BurstToScreen | MorphPhase::ScreenToDrift | MorphPhase::DriftToRocket => {
            Easing::Smootherstep
        }
    }
}

/// Outward projection of the cloud target used by the launch and settle
/// phases: pushed wider on x/y and twice as deep on z.
#[inline]
pub fn burst_of(cloud: Vec3) -> Vec3 {
    Vec3::new(
        cloud.x * BURST_SCALE_XY,
        cloud.y * BURST_SCALE_XY,
        cloud.z * BURST_SCALE_Z,
    )
}

/// Index-keyed sinusoid offset for the screen-drift phase. Deterministic
/// per index: no randomness accumulates across evaluations.
#[inline]
pub fn drift_offset(index: usize) -> Vec3 {
    let i = index as f32;
    Vec3::new(
        (i * DRIFT_FREQ_X).sin() * DRIFT_AMP_X,
        (i * DRIFT_FREQ_Y).cos() * DRIFT_AMP_Y,
        (i * DRIFT_FREQ_Z).sin() * DRIFT_AMP_Z,
    )
}

/// The (from, to) endpoint pair a phase interpolates for one particle.
pub fn phase_endpoints(targets: &ShapeTargets, index: usize, phase: MorphPhase) -> (Vec3, Vec3) {
    match phase {
        MorphPhase::LogoToCloud => (targets.logo, targets.cloud),
        MorphPhase::CloudToPad => (targets.cloud, targets.pad),
        MorphPhase::PadToBurst => (targets.pad, burst_of(targets.cloud)),
        MorphPhase::BurstToScreen => (burst_of(targets.cloud), targets.screen),
        MorphPhase::ScreenToDrift => (targets.screen, targets.screen + drift_offset(index)),
        MorphPhase::DriftToRocket => (targets.screen + drift_offset(index), targets.rocket),
    }
}

/// The position a particle should chase at the given journey progress.
pub fn morph_target(targets: &ShapeTargets, index: usize, progress: f32) -> Vec3 {
    let (phase, t) = classify(progress);
    let (from, to) = phase_endpoints(targets, index, phase);
    from.lerp(to, ease(phase_easing(phase), t))
}
