// Host-side tests for the particle store and per-frame motion math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/constants.rs"]
mod constants;
#[path = "../src/core/emit.rs"]
mod emit;
#[path = "../src/core/morph.rs"]
mod morph;
#[path = "../src/core/field.rs"]
mod field;

use emit::ShapePoints;
use field::*;
use glam::{Vec2, Vec3};
use rand::prelude::*;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn flat_shape(n: usize, base: f32, silhouette_len: usize) -> ShapePoints {
    ShapePoints {
        points: (0..n)
            .map(|i| Vec3::new(base + i as f32, base - i as f32, base * 0.5))
            .collect(),
        silhouette_len,
    }
}

fn small_field() -> ParticleField {
    let logo = flat_shape(8, 10.0, 3);
    let cloud = flat_shape(8, -20.0, 0);
    let pad = flat_shape(8, -11.0, 5);
    let screen = flat_shape(8, 8.0, 6);
    let rocket = flat_shape(8, -6.0, 4);
    ParticleField::assemble(&logo, &cloud, &pad, &screen, &rocket, &mut rng(1))
}

#[test]
fn assemble_zips_targets_by_index() {
    let field = small_field();
    assert_eq!(field.len(), 8);
    for (i, p) in field.particles.iter().enumerate() {
        assert_eq!(p.position, p.targets.logo);
        assert_eq!(p.targets.logo, Vec3::new(10.0 + i as f32, 10.0 - i as f32, 5.0));
        assert_eq!(p.targets.cloud.x, -20.0 + i as f32);
        assert_eq!(p.primary, i < 3);
        assert!(p.spin.x.abs() <= constants::SPIN_MAX);
        assert!(p.spin.y.abs() <= constants::SPIN_MAX);
        assert!(p.spin.z.abs() <= constants::SPIN_MAX);
    }
}

#[test]
#[should_panic]
fn assemble_rejects_mismatched_lengths() {
    let logo = flat_shape(8, 10.0, 3);
    let cloud = flat_shape(7, -20.0, 0);
    let pad = flat_shape(8, -11.0, 5);
    let screen = flat_shape(8, 8.0, 6);
    let rocket = flat_shape(8, -6.0, 4);
    ParticleField::assemble(&logo, &cloud, &pad, &screen, &rocket, &mut rng(1));
}

#[test]
fn step_at_progress_zero_holds_the_logo_pose() {
    let mut field = small_field();
    let before: Vec<_> = field.particles.iter().map(|p| p.position).collect();
    field.step(0.0);
    // position already equals the phase target, so the chase is a no-op
    for (p, b) in field.particles.iter().zip(&before) {
        assert!((p.position - *b).length() < 1e-6);
    }
}

#[test]
fn step_advances_rotation_by_spin() {
    let mut field = small_field();
    let spins: Vec<_> = field.particles.iter().map(|p| p.spin).collect();
    let before: Vec<_> = field.particles.iter().map(|p| p.rotation).collect();
    field.step(0.0);
    field.step(0.0);
    for ((p, spin), rot0) in field.particles.iter().zip(&spins).zip(&before) {
        let expected = *rot0 + *spin * 2.0;
        assert!((p.rotation - expected).length() < 1e-6);
    }
}

#[test]
fn chase_converges_without_overshoot() {
    let target = Vec3::new(5.0, -3.0, 2.0);
    for damping in [0.06_f32, 0.3, 0.9] {
        let mut pos = Vec3::new(-20.0, 12.0, -7.0);
        let mut dist = (target - pos).length();
        for _ in 0..500 {
            pos = chase(pos, target, damping);
            let next = (target - pos).length();
            assert!(next <= dist, "distance grew at damping {}", damping);
            dist = next;
        }
        assert!(dist < 1e-3, "did not converge at damping {}", damping);
    }
}

#[test]
fn chase_never_crosses_the_target() {
    // 1D view: the sign of (target - position) must never flip
    let target = Vec3::new(1.0, 0.0, 0.0);
    let mut pos = Vec3::new(-1.0, 0.0, 0.0);
    for _ in 0..200 {
        pos = chase(pos, target, 0.06);
        assert!(pos.x <= target.x);
    }
}

#[test]
fn repulsion_is_zero_at_and_beyond_the_radius() {
    let pointer = Vec3::ZERO;
    for d in [5.0_f32, 5.1, 8.0, 100.0] {
        let offset = repel_offset(Vec3::new(d, 0.0, 0.0), pointer);
        assert_eq!(offset, Vec3::ZERO, "distance {}", d);
    }
}

#[test]
fn repulsion_grows_as_the_pointer_closes_in() {
    let pointer = Vec3::ZERO;
    let mut last = 0.0_f32;
    for d in [4.5_f32, 3.5, 2.0, 1.0, 0.5, 0.1] {
        let offset = repel_offset(Vec3::new(d, 0.0, 0.0), pointer);
        let push = offset.x;
        assert!(push > last, "push {} at distance {} not larger than {}", push, d, last);
        // force points away from the pointer and lifts on z
        assert!(offset.z > 0.0);
        last = push;
    }
}

#[test]
fn repulsion_dead_zone_avoids_the_singularity() {
    let offset = repel_offset(Vec3::new(0.005, 0.0, 0.0), Vec3::ZERO);
    assert_eq!(offset, Vec3::ZERO);
}

#[test]
fn wave_offset_stays_small_and_planar() {
    for t in [0.0_f32, 1.7, 42.0] {
        for pos in [Vec3::ZERO, Vec3::new(10.0, -4.0, 3.0)] {
            let w = wave_offset(t, pos);
            assert!(w.x.abs() <= constants::WAVE_AMP + 1e-6);
            assert!(w.y.abs() <= constants::WAVE_AMP + 1e-6);
            assert_eq!(w.z, 0.0);
        }
    }
}

#[test]
fn display_position_composes_without_touching_state() {
    let position = Vec3::new(2.0, 1.0, 0.0);
    let pointer_world = Vec3::new(2.5, 1.0, 0.0);
    let ndc = Vec2::new(0.4, -0.2);
    let t = 3.3;
    let display = display_position(position, t, pointer_world, ndc);
    let expected = position
        + wave_offset(t, position)
        + repel_offset(position, pointer_world)
        + follow_offset(ndc);
    assert!((display - expected).length() < 1e-6);
    // secondary motion is an offset of the input, not an update of it
    assert_ne!(display, position);
}

#[test]
fn follow_bias_is_a_fixed_fraction_of_the_pointer() {
    let offset = follow_offset(Vec2::new(1.0, -0.5));
    assert!((offset.x - constants::FOLLOW_GAIN).abs() < 1e-6);
    assert!((offset.y + 0.5 * constants::FOLLOW_GAIN).abs() < 1e-6);
    assert_eq!(offset.z, 0.0);
}

#[test]
fn palette_draw_matches_the_documented_weights() {
    assert_eq!(color_index(0.0), 0);
    assert_eq!(color_index(0.65), 0);
    assert_eq!(color_index(0.66), 1);
    assert_eq!(color_index(0.85), 1);
    assert_eq!(color_index(0.86), 2);
    assert_eq!(color_index(1.0), 2);
}

#[test]
fn initial_scales_fall_in_their_ranges() {
    let mut r = rng(2);
    for _ in 0..200 {
        let s = initial_scale(true, &mut r);
        assert!((0.8..1.2).contains(&s), "primary scale {}", s);
        let s = initial_scale(false, &mut r);
        assert!((0.5..1.0).contains(&s), "filler scale {}", s);
    }
}

#[test]
fn retarget_headline_swaps_the_first_pair_only() {
    let mut field = small_field();
    let pad_before: Vec<_> = field.particles.iter().map(|p| p.targets.pad).collect();
    let scatter = flat_shape(8, 30.0, 0);
    let headline = flat_shape(8, -30.0, 8);
    field.retarget_headline(&scatter, &headline);
    for (i, p) in field.particles.iter().enumerate() {
        assert_eq!(p.position, scatter.points[i]);
        assert_eq!(p.targets.logo, scatter.points[i]);
        assert_eq!(p.targets.cloud, headline.points[i]);
        assert_eq!(p.targets.pad, pad_before[i]);
    }
}
