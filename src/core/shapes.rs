//! Shape generators.
//!
//! Five fixed point-cloud silhouettes for the scroll journey (film-strip
//! logo, exploded cloud, game pad, monitor, rocket) plus the overview-page
//! pair (wide scatter, two-line headline). Each generator returns exactly
//! `count` points: the silhouette first, then uniform scatter padding.
//! Placement is deterministic up to the jitter drawn from the caller's rng.

use super::emit::{quad_bezier_point, Depth, Emitter, ScatterVolume, ShapePoints};
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

// Scatter tails. The icon shapes share a medium volume pulled slightly
// toward the camera background; the rocket and headline spread much wider.
const ICON_TAIL: ScatterVolume = ScatterVolume::new(40.0, 28.0, 20.0, -5.0);
const SCREEN_TAIL: ScatterVolume = ScatterVolume::new(50.0, 35.0, 25.0, -8.0);
const ROCKET_TAIL: ScatterVolume = ScatterVolume::new(80.0, 35.0, 50.0, -8.0);
const HEADLINE_TAIL: ScatterVolume = ScatterVolume::new(80.0, 40.0, 50.0, -10.0);

/// Bounds of the exploded cloud; also the journey's phase-2 target volume.
pub const CLOUD_VOLUME: ScatterVolume = ScatterVolume::new(50.0, 35.0, 30.0, 0.0);

/// Bounds of the overview page's resting scatter.
pub const WIDE_VOLUME: ScatterVolume = ScatterVolume::new(60.0, 30.0, 40.0, -10.0);

// ---------------- Shape 1: film-strip logo (right side) ----------------

pub fn generate_logo_points(count: usize, rng: &mut StdRng) -> ShapePoints {
    let mut e = Emitter::new(-10.0, 3.3, Vec3::new(10.0, 0.0, 0.0));

    let film_w = 5.0;
    let film_h = 4.2;

    // Outer frame, three stacked perimeters
    e.rounded_rect(
        0.0,
        0.0,
        film_w,
        film_h,
        0.3,
        0.08,
        0.12,
        &[-0.05, 0.0, 0.05],
        Depth::Centered(0.3),
        rng,
    );

    // Four sprocket holes down each side
    let sprocket_x = film_w / 2.0 - 0.45;
    for side in [-sprocket_x, sprocket_x] {
        for i in 0..4 {
            let y = 1.35 - i as f32 * 0.9;
            sprocket_hole(&mut e, side, y, 0.4, 0.12, 0.06, rng);
        }
    }

    // Two picture frames in the middle
    for frame_y in [0.8, -0.8] {
        picture_frame(&mut e, 0.0, frame_y, 2.8, 1.4, 0.07, rng);
    }

    e.into_shape(count, ICON_TAIL, rng)
}

fn sprocket_hole(e: &mut Emitter, cx: f32, cy: f32, size: f32, r: f32, density: f32, rng: &mut StdRng) {
    e.rounded_rect(
        cx,
        cy,
        size,
        size,
        r,
        density,
        0.2,
        &[0.0, 0.03],
        Depth::Centered(0.15),
        rng,
    );
    let half = size / 2.0;
    e.grid_fill(
        cx,
        cy,
        half,
        half,
        0.08,
        density * 1.5,
        0.6,
        Depth::Centered(0.2),
        rng,
    );
}

fn picture_frame(e: &mut Emitter, cx: f32, cy: f32, w: f32, h: f32, density: f32, rng: &mut StdRng) {
    e.rounded_rect(
        cx,
        cy,
        w,
        h,
        0.15,
        density,
        0.15,
        &[0.0, 0.04],
        Depth::Centered(0.2),
        rng,
    );
    e.grid_fill(
        cx,
        cy,
        w / 2.0,
        h / 2.0,
        0.1,
        density * 2.0,
        0.5,
        Depth::Centered(0.25),
        rng,
    );
}

// ---------------- Shape 2: exploded cloud ----------------

pub fn generate_cloud_points(count: usize, rng: &mut StdRng) -> ShapePoints {
    CLOUD_VOLUME.fill(count, rng)
}

// ---------------- Shape 3: game pad (left side) ----------------

pub fn generate_pad_points(count: usize, rng: &mut StdRng) -> ShapePoints {
    let mut e = Emitter::new(10.0, 3.5, Vec3::new(-11.0, 0.0, 0.0));

    // Body, four stacked perimeters
    e.rounded_rect(
        0.0,
        0.0,
        4.0,
        2.5,
        0.45,
        0.06,
        0.08,
        &[-0.075, -0.025, 0.025, 0.075],
        Depth::Centered(0.3),
        rng,
    );

    // D-pad cross
    let (dx, dy, arm, thick) = (-1.2, 0.25, 0.35, 0.1);
    e.vspan(dy - arm, dy + arm, 0.04, dx - thick, Depth::Raised(0.15), rng);
    e.vspan(dy - arm, dy + arm, 0.04, dx + thick, Depth::Raised(0.15), rng);
    e.hspan(dx - arm, dx + arm, 0.04, dy - thick, Depth::Raised(0.15), rng);
    e.hspan(dx - arm, dx + arm, 0.04, dy + thick, Depth::Raised(0.15), rng);

    // Action buttons, diamond of four
    let (bx, by, spread, br) = (1.2, 0.25, 0.3, 0.12);
    let buttons = [
        (bx, by + spread),
        (bx + spread, by),
        (bx, by - spread),
        (bx - spread, by),
    ];
    for (cx, cy) in buttons {
        e.arc(cx, cy, br, 0.0, TAU, 0.12, Depth::Raised(0.12), rng);
        let mut r = 0.04;
        while r < br {
            e.arc(cx, cy, r, 0.0, TAU, 0.25, Depth::Raised(0.15), rng);
            r += 0.04;
        }
    }

    // Analog sticks with an inner ring
    let (stick_y, stick_r) = (-0.1, 0.22);
    for stick_x in [-0.55, 0.55] {
        e.arc(stick_x, stick_y, stick_r, 0.0, TAU, 0.1, Depth::Raised(0.12), rng);
        e.arc(
            stick_x,
            stick_y,
            stick_r * 0.5,
            0.0,
            TAU,
            0.18,
            Depth::Raised(0.15),
            rng,
        );
    }

    // Center menu dashes
    for menu_x in [-0.2, 0.2] {
        e.hspan(menu_x - 0.1, menu_x + 0.1, 0.04, 0.75, Depth::Raised(0.1), rng);
    }

    e.into_shape(count, ICON_TAIL, rng)
}

// ---------------- Shape 4: monitor (right side) ----------------

pub fn generate_screen_points(count: usize, rng: &mut StdRng) -> ShapePoints {
    let mut e = Emitter::with_scaled_z(-10.0, 5.8, Vec3::new(8.0, -1.0, 0.0));

    let (w, h, corner) = (3.0_f32, 2.0_f32, 0.15_f32);
    let (hw, hh) = (w / 2.0, h / 2.0);

    // Screen frame, two inset passes with tightening corner radius
    for pass in 0..2 {
        let p = pass as f32 * 0.02;
        let r = corner - p;
        let z = Depth::Flat(p * 0.2);
        e.hspan(-hw + corner, hw - corner, 0.02, hh - p, z, rng);
        e.hspan(-hw + corner, hw - corner, 0.02, -hh + p, z, rng);
        e.vspan(-hh + corner, hh - corner, 0.02, -hw + p, z, rng);
        e.vspan(-hh + corner, hh - corner, 0.02, hw - p, z, rng);
        corner_arcs(&mut e, hw, hh, corner, r, 0.1, z, rng);
    }

    // Inner bezel
    let bezel = 0.2;
    let (iw, ih, ir) = (w - bezel * 2.0, h - bezel * 2.0, 0.1_f32);
    let (ihw, ihh) = (iw / 2.0, ih / 2.0);
    let bz = Depth::Flat(0.05);
    e.hspan(-ihw + ir, ihw - ir, 0.025, ihh, bz, rng);
    e.hspan(-ihw + ir, ihw - ir, 0.025, -ihh, bz, rng);
    e.vspan(-ihh + ir, ihh - ir, 0.025, -ihw, bz, rng);
    e.vspan(-ihh + ir, ihh - ir, 0.025, ihw, bz, rng);
    corner_arcs(&mut e, ihw, ihh, ir, ir, 0.15, bz, rng);

    // Wordmark across the screen
    let text_scale = 0.18;
    let spacing = 0.42;
    let mut x = -1.2;
    for ch in "MOTION".chars() {
        glyph_strokes(&mut e, ch, x, 0.1, text_scale, 8, 0.0, Depth::Flat(0.08), rng);
        x += spacing;
    }

    // Stand neck
    let (neck_hw, neck_h) = (0.2, 0.6);
    for pass in 0..2 {
        let p = pass as f32 * 0.02;
        let z = Depth::Flat(p * 0.15);
        e.vspan(-hh - neck_h, -hh, 0.03, -neck_hw + p, z, rng);
        e.vspan(-hh - neck_h, -hh, 0.03, neck_hw - p, z, rng);
    }

    // Base slab
    let (base_hw, base_h) = (0.8, 0.25);
    let base_y = -hh - neck_h;
    for pass in 0..2 {
        let p = pass as f32 * 0.02;
        let z = Depth::Flat(p * 0.15);
        e.hspan(-base_hw + p, base_hw - p, 0.02, base_y - p, z, rng);
        e.hspan(-base_hw + p, base_hw - p, 0.02, base_y - base_h + p, z, rng);
        e.vspan(base_y - base_h, base_y, 0.03, -base_hw + p, z, rng);
        e.vspan(base_y - base_h, base_y, 0.03, base_hw - p, z, rng);
    }

    // Power button dot
    let button_y = -hh + bezel / 2.0;
    for i in 0..20 {
        let a = (i as f32 / 20.0) * TAU;
        e.push(a.cos() * 0.08, button_y + a.sin() * 0.08, 0.03);
    }

    e.into_shape(count, SCREEN_TAIL, rng)
}

/// The four corner arcs of an axis-aligned rounded rectangle whose corner
/// centers sit `corner` in from the half-extents, drawn at radius `r`.
#[allow(clippy::too_many_arguments)]
fn corner_arcs(
    e: &mut Emitter,
    hw: f32,
    hh: f32,
    corner: f32,
    r: f32,
    step: f32,
    depth: Depth,
    rng: &mut StdRng,
) {
    let centers = [
        (hw - corner, hh - corner, 0.0_f32),
        (-hw + corner, hh - corner, TAU / 4.0),
        (-hw + corner, -hh + corner, TAU / 2.0),
        (hw - corner, -hh + corner, TAU * 0.75),
    ];
    for (cx, cy, start) in centers {
        e.arc(cx, cy, r, start, start + TAU / 4.0, step, depth, rng);
    }
}

// ---------------- Shape 5: rocket (left side) ----------------

pub fn generate_rocket_points(count: usize, rng: &mut StdRng) -> ShapePoints {
    let mut e = Emitter::pre_offset(-35.0, 1.3, Vec3::new(-6.0, 0.0, 0.0));

    let body_w = 2.0;
    let body_h = 5.5;

    // Elongated body shell
    e.ellipse(0.0, 0.0, body_w, body_h, 200, 0.15, Depth::Centered(0.3), rng);

    // Nose seam, parabolic droop toward the sides
    let nose_base = body_h * 0.7;
    for _ in 0..40 {
        let x = (rng.gen::<f32>() - 0.5) * body_w * 1.3;
        let y = nose_base + x * x * 0.2;
        e.push_at(x, y, Depth::Centered(0.1), rng);
    }

    // Porthole, outer and inner rings
    e.ellipse(0.0, 0.0, 1.0, 1.0, 60, 0.08, Depth::Centered(0.15), rng);
    e.ellipse(0.0, 0.0, 0.75, 0.75, 40, 0.06, Depth::Centered(0.12), rng);

    // Hull banding near the base
    let base_y = -body_h + 0.5;
    for i in 0..60 {
        let t = i as f32 / 60.0;
        let x = (t - 0.5) * body_w * 1.6;
        let y = base_y + (rng.gen::<f32>() - 0.5) * 0.3;
        e.push_at(x, y, Depth::Centered(0.2), rng);
    }
    for line in 0..3 {
        let line_y = -body_h + 0.8 + line as f32 * 0.5;
        for _ in 0..30 {
            let x = (rng.gen::<f32>() - 0.5) * body_w * 1.7;
            e.push_at(x, line_y, Depth::Centered(0.12), rng);
        }
    }

    // Swept fins, outline plus loose interior fill, mirrored
    for side in [-1.0_f32, 1.0] {
        e.quad_bezier(
            (side * body_w * 0.8, -body_h * 0.3),
            (side * body_w * 2.2, -body_h * 0.8),
            (side * body_w * 0.9, -body_h - 1.5),
            120,
            0.15,
            Depth::Centered(0.2),
            rng,
        );
        for _ in 0..60 {
            let t = rng.gen::<f32>();
            let (x, y) = quad_bezier_point(
                (side * body_w * 0.8, -body_h * 0.3),
                (side * body_w * 1.8, -body_h * 0.6),
                (side * body_w * 0.9, -body_h - 1.0),
                t,
            );
            e.push_at(
                x + (rng.gen::<f32>() - 0.5) * 0.8,
                y + (rng.gen::<f32>() - 0.5) * 0.5,
                Depth::Centered(0.3),
                rng,
            );
        }
    }

    // Exhaust nozzle, slightly expanding
    for i in 0..40 {
        let t = i as f32 / 40.0;
        let y = -body_h - t * 0.8;
        let width = 0.6 + t * 0.3;
        let x = (rng.gen::<f32>() - 0.5) * width * 2.0;
        e.push_at(x, y, Depth::Centered(0.2), rng);
    }

    // Teardrop flame: outer sheet, inner sheet, tip sparks
    for i in 0..100 {
        let a = (i as f32 / 100.0) * TAU;
        let x = a.sin() * a.cos() * 1.5 + (rng.gen::<f32>() - 0.5) * 0.1;
        let y = -body_h - 1.0 - a.sin() * 2.5 + (rng.gen::<f32>() - 0.5) * 0.1;
        e.push_at(x, y, Depth::Centered(0.2), rng);
    }
    for i in 0..50 {
        let a = (i as f32 / 50.0) * TAU;
        let x = a.sin() * a.cos() * 0.9 + (rng.gen::<f32>() - 0.5) * 0.08;
        let y = -body_h - 1.3 - a.sin() * 1.5 + (rng.gen::<f32>() - 0.5) * 0.08;
        e.push_at(x, y, Depth::Centered(0.15), rng);
    }
    for _ in 0..30 {
        let x = (rng.gen::<f32>() - 0.5) * 0.3;
        let y = -body_h - 3.5 - rng.gen::<f32>() * 0.5;
        e.push_at(x, y, Depth::Centered(0.2), rng);
    }

    e.into_shape(count, ROCKET_TAIL, rng)
}

// ---------------- Overview page pair ----------------

pub fn generate_wide_scatter(count: usize, rng: &mut StdRng) -> ShapePoints {
    WIDE_VOLUME.fill(count, rng)
}

/// Two centered lines of stroke lettering: the studio wordmark.
pub fn generate_headline_points(count: usize, rng: &mut StdRng) -> ShapePoints {
    let mut e = Emitter::new(0.0, 1.0, Vec3::ZERO);

    let scale = 2.5;
    let letter_spacing = 3.0;
    let line_spacing = 6.5;
    let depth = Depth::Centered(0.3);

    for (line, word) in ["ELEMENT", "MOTION"].iter().enumerate() {
        let y = line_spacing / 2.0 - line as f32 * line_spacing;
        let mut x = -(word.len() as f32 * letter_spacing) / 2.0;
        for ch in word.chars() {
            glyph_strokes(&mut e, ch, x, y, scale, 25, 0.08, depth, rng);
            x += letter_spacing;
        }
    }

    e.into_shape(count, HEADLINE_TAIL, rng)
}

// ---------------- Stroke lettering ----------------

/// Emit the strokes of one capital letter with its lower-left anchor at
/// (x, y - s) and cap height 2s. `d` is the base stroke density (points per
/// full-height stroke); shorter strokes use fractions of it. Unknown
/// characters emit nothing (the caller still advances the pen).
#[allow(clippy::too_many_arguments)]
pub fn glyph_strokes(
    e: &mut Emitter,
    ch: char,
    x: f32,
    y: f32,
    s: f32,
    d: usize,
    jitter: f32,
    depth: Depth,
    rng: &mut StdRng,
) -> bool {
    let bar = (d * 3 / 4).max(2);
    let mid = (d * 3 / 5).max(2);
    match ch {
        'E' => {
            e.segment(x, y - s, x, y + s, d, jitter, depth, rng);
            e.segment(x, y + s, x + s * 0.65, y + s, bar, jitter, depth, rng);
            e.segment(x, y, x + s * 0.55, y, mid, jitter, depth, rng);
            e.segment(x, y - s, x + s * 0.65, y - s, bar, jitter, depth, rng);
        }
        'I' => {
            e.segment(x + s * 0.35, y - s, x + s * 0.35, y + s, d, jitter, depth, rng);
            e.segment(x, y + s, x + s * 0.7, y + s, bar, jitter, depth, rng);
            e.segment(x, y - s, x + s * 0.7, y - s, bar, jitter, depth, rng);
        }
        'L' => {
            e.segment(x, y - s, x, y + s, d, jitter, depth, rng);
            e.segment(x, y - s, x + s * 0.65, y - s, bar, jitter, depth, rng);
        }
        'M' => {
            e.segment(x, y - s, x, y + s, d, jitter, depth, rng);
            e.segment(x, y + s, x + s * 0.45, y - s * 0.2, d * 9 / 10, jitter, depth, rng);
            e.segment(
                x + s * 0.45,
                y - s * 0.2,
                x + s * 0.9,
                y + s,
                d * 9 / 10,
                jitter,
                depth,
                rng,
            );
            e.segment(x + s * 0.9, y + s, x + s * 0.9, y - s, d, jitter, depth, rng);
        }
        'N' => {
            e.segment(x, y - s, x, y + s, d, jitter, depth, rng);
            e.segment(x, y + s, x + s * 0.7, y - s, d * 6 / 5, jitter, depth, rng);
            e.segment(x + s * 0.7, y - s, x + s * 0.7, y + s, d, jitter, depth, rng);
        }
        'O' => {
            let segments = 24;
            let rx = s * 0.35;
            for i in 0..segments {
                let a0 = (i as f32 / segments as f32) * TAU;
                let a1 = ((i + 1) as f32 / segments as f32) * TAU;
                e.segment(
                    x + s * 0.35 + a0.cos() * rx,
                    y + a0.sin() * s,
                    x + s * 0.35 + a1.cos() * rx,
                    y + a1.sin() * s,
                    (d / 5).max(2),
                    jitter,
                    depth,
                    rng,
                );
            }
        }
        'T' => {
            e.segment(x + s * 0.35, y - s, x + s * 0.35, y + s, d, jitter, depth, rng);
            e.segment(x, y + s, x + s * 0.7, y + s, bar, jitter, depth, rng);
        }
        _ => return false,
    }
    true
}
