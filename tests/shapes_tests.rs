// Host-side tests for the pure shape generators.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/emit.rs"]
mod emit;
#[path = "../src/core/shapes.rs"]
mod shapes;

use emit::{Depth, Emitter, ShapePoints};
use glam::Vec3;
use rand::prelude::*;
use shapes::*;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

type Generator = fn(usize, &mut StdRng) -> ShapePoints;

const GENERATORS: [(&str, Generator); 7] = [
    ("logo", generate_logo_points),
    ("cloud", generate_cloud_points),
    ("pad", generate_pad_points),
    ("screen", generate_screen_points),
    ("rocket", generate_rocket_points),
    ("wide", generate_wide_scatter),
    ("headline", generate_headline_points),
];

#[test]
fn every_generator_returns_exactly_count_points() {
    for (name, generate) in GENERATORS {
        for count in [0usize, 1, 10, 100, 500, 2750] {
            let shape = generate(count, &mut rng(7));
            assert_eq!(shape.points.len(), count, "{} at count {}", name, count);
            assert!(
                shape.silhouette_len <= count,
                "{} silhouette exceeds count {}",
                name,
                count
            );
        }
    }
}

#[test]
fn small_counts_truncate_the_silhouette() {
    // Every icon silhouette needs far more than 50 points, so the whole
    // output is clipped silhouette with no scatter tail.
    for generate in [
        generate_logo_points as Generator,
        generate_pad_points,
        generate_screen_points,
        generate_rocket_points,
    ] {
        let shape = generate(50, &mut rng(3));
        assert_eq!(shape.points.len(), 50);
        assert_eq!(shape.silhouette_len, 50);
    }
}

#[test]
fn icon_shapes_keep_a_scatter_tail_at_full_count() {
    for generate in [
        generate_logo_points as Generator,
        generate_pad_points,
        generate_screen_points,
        generate_rocket_points,
        generate_headline_points,
    ] {
        let shape = generate(2750, &mut rng(11));
        assert!(shape.silhouette_len > 0);
        assert!(
            shape.silhouette_len < 2750,
            "silhouette {} leaves no room for a scatter tail",
            shape.silhouette_len
        );
    }
}

#[test]
fn cloud_points_stay_inside_the_documented_volume() {
    let shape = generate_cloud_points(100, &mut rng(5));
    assert_eq!(shape.points.len(), 100);
    assert_eq!(shape.silhouette_len, 0);
    for p in &shape.points {
        assert!(p.x >= -25.0 && p.x <= 25.0, "x out of bounds: {}", p.x);
        assert!(p.y >= -17.5 && p.y <= 17.5, "y out of bounds: {}", p.y);
        assert!(p.z >= -15.0 && p.z <= 15.0, "z out of bounds: {}", p.z);
    }
}

#[test]
fn cloud_generation_is_randomized_between_calls() {
    let mut r = rng(9);
    let a = generate_cloud_points(100, &mut r);
    let b = generate_cloud_points(100, &mut r);
    assert_eq!(a.points.len(), 100);
    assert_eq!(b.points.len(), 100);
    assert!(
        a.points.iter().zip(&b.points).any(|(pa, pb)| pa != pb),
        "two draws from an advancing rng should differ"
    );
}

#[test]
fn same_seed_reproduces_the_same_shape() {
    for (name, generate) in GENERATORS {
        let a = generate(300, &mut rng(42));
        let b = generate(300, &mut rng(42));
        assert_eq!(a.points, b.points, "{} not deterministic under a fixed seed", name);
        assert_eq!(a.silhouette_len, b.silhouette_len);
    }
}

#[test]
fn wide_scatter_respects_its_volume() {
    let shape = generate_wide_scatter(200, &mut rng(13));
    for p in &shape.points {
        assert!(p.x.abs() <= 30.0);
        assert!(p.y.abs() <= 15.0);
        assert!(p.z >= -30.0 && p.z <= 10.0);
    }
}

#[test]
fn every_headline_letter_has_strokes() {
    let mut r = rng(17);
    for ch in "ELEMENTMOTION".chars() {
        let mut e = Emitter::new(0.0, 1.0, Vec3::ZERO);
        let known = glyph_strokes(&mut e, ch, 0.0, 0.0, 2.5, 25, 0.08, Depth::Flat(0.0), &mut r);
        assert!(known, "no strokes for {:?}", ch);
        assert!(e.len() > 0, "{:?} emitted no points", ch);
    }
}

#[test]
fn unknown_glyphs_emit_nothing() {
    let mut r = rng(19);
    let mut e = Emitter::new(0.0, 1.0, Vec3::ZERO);
    assert!(!glyph_strokes(&mut e, 'Q', 0.0, 0.0, 2.5, 25, 0.08, Depth::Flat(0.0), &mut r));
    assert!(e.is_empty());
}

#[test]
fn logo_silhouette_sits_right_of_center() {
    // The film strip is authored on the right side of the screen.
    let shape = generate_logo_points(2750, &mut rng(23));
    let silhouette = &shape.points[..shape.silhouette_len];
    let mean_x: f32 = silhouette.iter().map(|p| p.x).sum::<f32>() / silhouette.len() as f32;
    assert!(mean_x > 5.0, "mean x {}", mean_x);
}

#[test]
fn pad_silhouette_sits_left_of_center() {
    let shape = generate_pad_points(2750, &mut rng(29));
    let silhouette = &shape.points[..shape.silhouette_len];
    let mean_x: f32 = silhouette.iter().map(|p| p.x).sum::<f32>() / silhouette.len() as f32;
    assert!(mean_x < -5.0, "mean x {}", mean_x);
}
