//! Silhouette point emitters.
//!
//! Every shape is authored in its own local 2D frame and baked into world
//! space through a fixed tilt/scale/offset. The `Emitter` owns that
//! transform and accumulates points; the primitives below (spans, arcs,
//! rounded-rect perimeters, grid fills, Bézier strokes) are the shared
//! vocabulary the shape generators are built from.

use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Output of a shape generator: exactly `count` points, of which the first
/// `silhouette_len` trace the recognizable form; the rest are background
/// scatter padding.
#[derive(Clone, Debug)]
pub struct ShapePoints {
    pub points: Vec<Vec3>,
    pub silhouette_len: usize,
}

/// Uniform scatter volume: full extents on each axis plus a z bias.
#[derive(Clone, Copy, Debug)]
pub struct ScatterVolume {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub z_bias: f32,
}

impl ScatterVolume {
    pub const fn new(x: f32, y: f32, z: f32, z_bias: f32) -> Self {
        Self { x, y, z, z_bias }
    }

    #[inline]
    pub fn sample(&self, rng: &mut StdRng) -> Vec3 {
        Vec3::new(
            (rng.gen::<f32>() - 0.5) * self.x,
            (rng.gen::<f32>() - 0.5) * self.y,
            (rng.gen::<f32>() - 0.5) * self.z + self.z_bias,
        )
    }

    /// A shape that is nothing but scatter (silhouette length 0).
    pub fn fill(&self, count: usize, rng: &mut StdRng) -> ShapePoints {
        let points = (0..count).map(|_| self.sample(rng)).collect();
        ShapePoints {
            points,
            silhouette_len: 0,
        }
    }
}

/// Z placement for emitted points.
#[derive(Clone, Copy, Debug)]
pub enum Depth {
    /// Constant z.
    Flat(f32),
    /// Uniform in [-span/2, span/2].
    Centered(f32),
    /// Uniform in [0, span].
    Raised(f32),
}

impl Depth {
    #[inline]
    pub fn sample(self, rng: &mut StdRng) -> f32 {
        match self {
            Depth::Flat(z) => z,
            Depth::Centered(span) => (rng.gen::<f32>() - 0.5) * span,
            Depth::Raised(span) => rng.gen::<f32>() * span,
        }
    }
}

/// Evaluate a quadratic Bézier at t.
#[inline]
pub fn quad_bezier_point(p0: (f32, f32), ctrl: (f32, f32), p1: (f32, f32), t: f32) -> (f32, f32) {
    let u = 1.0 - t;
    (
        u * u * p0.0 + 2.0 * u * t * ctrl.0 + t * t * p1.0,
        u * u * p0.1 + 2.0 * u * t * ctrl.1 + t * t * p1.1,
    )
}

/// Point sink for one silhouette. The tilt rotation is applied around the
/// z axis, then scale and offset per the constructor used.
pub struct Emitter {
    points: Vec<Vec3>,
    cos_tilt: f32,
    sin_tilt: f32,
    scale: f32,
    offset: Vec3,
    // Rocket-style frames add the offset before scaling and scale z;
    // icon frames add it after and keep z as authored.
    offset_before_scale: bool,
    scale_z: bool,
}

impl Emitter {
    /// Icon frame: offset applied after scaling, z passed through unscaled.
    pub fn new(tilt_deg: f32, scale: f32, offset: Vec3) -> Self {
        let tilt = tilt_deg.to_radians();
        Self {
            points: Vec::new(),
            cos_tilt: tilt.cos(),
            sin_tilt: tilt.sin(),
            scale,
            offset,
            offset_before_scale: false,
            scale_z: false,
        }
    }

    /// Icon frame whose z is authored in local units and scaled with x/y.
    pub fn with_scaled_z(tilt_deg: f32, scale: f32, offset: Vec3) -> Self {
        Self {
            scale_z: true,
            ..Self::new(tilt_deg, scale, offset)
        }
    }

    /// Frame where the offset is added before scaling (and z is scaled).
    pub fn pre_offset(tilt_deg: f32, scale: f32, offset: Vec3) -> Self {
        Self {
            offset_before_scale: true,
            scale_z: true,
            ..Self::new(tilt_deg, scale, offset)
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn push(&mut self, x: f32, y: f32, z: f32) {
        let rx = x * self.cos_tilt - y * self.sin_tilt;
        let ry = x * self.sin_tilt + y * self.cos_tilt;
        let z_out = if self.scale_z { z * self.scale } else { z };
        let p = if self.offset_before_scale {
            Vec3::new(
                (rx + self.offset.x) * self.scale,
                (ry + self.offset.y) * self.scale,
                z_out,
            )
        } else {
            Vec3::new(rx * self.scale, ry * self.scale, z_out) + self.offset
        };
        self.points.push(p);
    }

    #[inline]
    pub fn push_at(&mut self, x: f32, y: f32, depth: Depth, rng: &mut StdRng) {
        let z = depth.sample(rng);
        self.push(x, y, z);
    }

    /// Horizontal run of points at fixed y.
    pub fn hspan(&mut self, x0: f32, x1: f32, step: f32, y: f32, depth: Depth, rng: &mut StdRng) {
        let mut x = x0;
        while x <= x1 {
            self.push_at(x, y, depth, rng);
            x += step;
        }
    }

    /// Vertical run of points at fixed x.
    pub fn vspan(&mut self, y0: f32, y1: f32, step: f32, x: f32, depth: Depth, rng: &mut StdRng) {
        let mut y = y0;
        while y <= y1 {
            self.push_at(x, y, depth, rng);
            y += step;
        }
    }

    /// Circular arc from `a0` to `a1` (radians, stepped by `step`).
    pub fn arc(
        &mut self,
        cx: f32,
        cy: f32,
        r: f32,
        a0: f32,
        a1: f32,
        step: f32,
        depth: Depth,
        rng: &mut StdRng,
    ) {
        let mut a = a0;
        while a <= a1 {
            self.push_at(cx + a.cos() * r, cy + a.sin() * r, depth, rng);
            a += step;
        }
    }

    /// Full ellipse outline with `n` evenly spaced samples and per-point
    /// positional jitter.
    pub fn ellipse(
        &mut self,
        cx: f32,
        cy: f32,
        rx: f32,
        ry: f32,
        n: usize,
        xy_jitter: f32,
        depth: Depth,
        rng: &mut StdRng,
    ) {
        for i in 0..n {
            let a = (i as f32 / n as f32) * TAU;
            let x = cx + a.cos() * rx + (rng.gen::<f32>() - 0.5) * xy_jitter;
            let y = cy + a.sin() * ry + (rng.gen::<f32>() - 0.5) * xy_jitter;
            self.push_at(x, y, depth, rng);
        }
    }

    /// Straight stroke of `n + 1` evenly spaced points with optional jitter.
    pub fn segment(
        &mut self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        n: usize,
        xy_jitter: f32,
        depth: Depth,
        rng: &mut StdRng,
    ) {
        for i in 0..=n {
            let t = i as f32 / n as f32;
            let x = x0 + (x1 - x0) * t + (rng.gen::<f32>() - 0.5) * xy_jitter;
            let y = y0 + (y1 - y0) * t + (rng.gen::<f32>() - 0.5) * xy_jitter;
            self.push_at(x, y, depth, rng);
        }
    }

    /// Quadratic Bézier stroke of `n` evenly spaced points with jitter.
    #[allow(clippy::too_many_arguments)]
    pub fn quad_bezier(
        &mut self,
        p0: (f32, f32),
        ctrl: (f32, f32),
        p1: (f32, f32),
        n: usize,
        xy_jitter: f32,
        depth: Depth,
        rng: &mut StdRng,
    ) {
        for i in 0..n {
            let t = i as f32 / n as f32;
            let (x, y) = quad_bezier_point(p0, ctrl, p1, t);
            self.push_at(
                x + (rng.gen::<f32>() - 0.5) * xy_jitter,
                y + (rng.gen::<f32>() - 0.5) * xy_jitter,
                depth,
                rng,
            );
        }
    }

    /// Rounded-rectangle perimeter centered at (cx, cy): straight edges
    /// stepped by `density`, corner arcs stepped by `arc_step`, repeated
    /// once per entry of `layers` (each entry grows the half-extents).
    #[allow(clippy::too_many_arguments)]
    pub fn rounded_rect(
        &mut self,
        cx: f32,
        cy: f32,
        w: f32,
        h: f32,
        r: f32,
        density: f32,
        arc_step: f32,
        layers: &[f32],
        depth: Depth,
        rng: &mut StdRng,
    ) {
        for &o in layers {
            let hw = w / 2.0 + o;
            let hh = h / 2.0 + o;

            let mut x = -hw + r;
            while x <= hw - r {
                self.push_at(cx + x, cy + hh, depth, rng);
                self.push_at(cx + x, cy - hh, depth, rng);
                x += density;
            }
            let mut y = -hh + r;
            while y <= hh - r {
                self.push_at(cx - hw, cy + y, depth, rng);
                self.push_at(cx + hw, cy + y, depth, rng);
                y += density;
            }

            let corners = [
                (hw - r, hh - r, 0.0_f32),
                (-hw + r, hh - r, TAU / 4.0),
                (-hw + r, -hh + r, TAU / 2.0),
                (hw - r, -hh + r, TAU * 0.75),
            ];
            for (ccx, ccy, start) in corners {
                self.arc(
                    cx + ccx,
                    cy + ccy,
                    r,
                    start,
                    start + TAU / 4.0,
                    arc_step,
                    depth,
                    rng,
                );
            }
        }
    }

    /// Sparse interior grid fill with inclusion probability `keep`.
    #[allow(clippy::too_many_arguments)]
    pub fn grid_fill(
        &mut self,
        cx: f32,
        cy: f32,
        half_w: f32,
        half_h: f32,
        inset: f32,
        step: f32,
        keep: f32,
        depth: Depth,
        rng: &mut StdRng,
    ) {
        let mut x = -half_w + inset;
        while x < half_w {
            let mut y = -half_h + inset;
            while y < half_h {
                if rng.gen::<f32>() < keep {
                    self.push_at(cx + x, cy + y, depth, rng);
                }
                y += step;
            }
            x += step;
        }
    }

    /// Finish the silhouette: pad with scatter from `tail` up to `count`,
    /// then truncate to exactly `count`. An over-long silhouette is clipped,
    /// which is accepted generator misconfiguration, not an error.
    pub fn into_shape(self, count: usize, tail: ScatterVolume, rng: &mut StdRng) -> ShapePoints {
        let mut points = self.points;
        let silhouette_len = points.len().min(count);
        while points.len() < count {
            points.push(tail.sample(rng));
        }
        points.truncate(count);
        ShapePoints {
            points,
            silhouette_len,
        }
    }
}
