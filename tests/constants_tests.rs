// Host-side tests for core constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
#[path = "../src/core/constants.rs"]
mod constants;

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // The chase must be a contraction or particles never settle
    assert!(CHASE_DAMPING > 0.0 && CHASE_DAMPING < 1.0);

    // Six half-unit phases make up the journey
    assert!(PHASE_SPAN > 0.0);
    assert!((PHASE_SPAN * 6.0 - MORPH_MAX).abs() < 1e-6);

    // Repulsion geometry: active radius inside the falloff span keeps the
    // force positive across the whole active disc
    assert!(REPEL_RADIUS > 0.0);
    assert!(REPEL_FALLOFF >= REPEL_RADIUS);
    assert!(REPEL_DEAD_ZONE > 0.0 && REPEL_DEAD_ZONE < REPEL_RADIUS);
    assert!(REPEL_STRENGTH > 0.0);

    // Secondary motion stays subtle
    assert!(WAVE_AMP > 0.0 && WAVE_AMP < 0.5);
    assert!(FOLLOW_GAIN > 0.0 && FOLLOW_GAIN < 1.0);
    assert!(SPIN_MAX > 0.0 && SPIN_MAX < 0.1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn palette_thresholds_partition_the_roll() {
    assert!(PALETTE_ACCENT_B_THRESHOLD > 0.0);
    assert!(PALETTE_ACCENT_A_THRESHOLD > PALETTE_ACCENT_B_THRESHOLD);
    assert!(PALETTE_ACCENT_A_THRESHOLD < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scale_ranges_keep_primaries_larger() {
    assert!(PRIMARY_SCALE_BASE > FILLER_SCALE_BASE);
    assert!(PRIMARY_SCALE_SPAN > 0.0);
    assert!(FILLER_SCALE_SPAN > 0.0);
    // ranges overlap but the primary floor clears the filler ceiling's
    // midpoint, keeping silhouettes visually denser
    assert!(PRIMARY_SCALE_BASE + PRIMARY_SCALE_SPAN > FILLER_SCALE_BASE + FILLER_SCALE_SPAN);
}

#[test]
fn burst_projection_pushes_outward() {
    assert!(BURST_SCALE_XY > 1.0);
    assert!(BURST_SCALE_Z > BURST_SCALE_XY);
}

#[test]
fn drift_offsets_are_bounded() {
    // the drift never moves a particle further than the sum of amplitudes
    let bound = DRIFT_AMP_X + DRIFT_AMP_Y + DRIFT_AMP_Z;
    assert!(bound > 0.0 && bound < 10.0);
    assert!(DRIFT_FREQ_X > 0.0 && DRIFT_FREQ_Y > 0.0 && DRIFT_FREQ_Z > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_count_is_positive() {
    assert!(PARTICLE_COUNT > 0);
}
