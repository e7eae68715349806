//! Scroll-to-progress bindings.
//!
//! Each binding maps one page region's scroll-relative progress (0–1 inside
//! its trigger range) into sub-ranges of the shared morph/opacity/camera
//! scalars. Bindings are declarative and resolved by one pure function.
//! Table order is the priority: every binding whose start has been reached
//! is applied in order, so the last listed one wins deterministically where
//! the authored ranges happen to touch.

/// A point in the scroll timeline, written in the familiar
/// "element fraction at viewport fraction" shorthand ("top of the region
/// hits 80% of the viewport" is `TriggerEdge::new(0.0, 0.8)`).
#[derive(Clone, Copy, Debug)]
pub struct TriggerEdge {
    pub element_frac: f32,
    pub viewport_frac: f32,
}

impl TriggerEdge {
    pub const fn new(element_frac: f32, viewport_frac: f32) -> Self {
        Self {
            element_frac,
            viewport_frac,
        }
    }

    /// Document-space scroll position at which this edge fires.
    #[inline]
    pub fn scroll_at(&self, region: RegionRect, viewport_h: f32) -> f32 {
        region.top + self.element_frac * region.height - self.viewport_frac * viewport_h
    }
}

/// One region's measurement in document space (top includes scroll offset).
#[derive(Clone, Copy, Debug)]
pub struct RegionRect {
    pub top: f32,
    pub height: f32,
}

/// Linear map from region progress into a scalar sub-range.
#[derive(Clone, Copy, Debug)]
pub struct Band {
    pub from: f32,
    pub to: f32,
}

impl Band {
    pub const fn new(from: f32, to: f32) -> Self {
        Self { from, to }
    }

    #[inline]
    pub fn at(&self, t: f32) -> f32 {
        self.from + (self.to - self.from) * t
    }
}

/// Declarative binding from one page region to the shared scalars. Bands
/// are optional except morph progress; a binding only writes the scalars
/// it carries a band for.
#[derive(Clone, Copy, Debug)]
pub struct ScrollBinding {
    pub selector: &'static str,
    pub start: TriggerEdge,
    pub end: TriggerEdge,
    pub progress: Band,
    pub opacity: Option<Band>,
    pub camera_z: Option<Band>,
    pub camera_y: Option<Band>,
}

/// The scalars the bindings drive, read once per frame by the updater.
#[derive(Clone, Copy, Debug)]
pub struct ScrollOutputs {
    pub progress: f32,
    pub opacity: f32,
    pub camera_z: f32,
    pub camera_y: f32,
}

/// Progress of one binding at the given scroll position: None before its
/// start edge (the binding has not been reached), clamped to 1 after its
/// end. Degenerate ranges (end at or before start) never activate.
pub fn binding_progress(
    binding: &ScrollBinding,
    region: RegionRect,
    scroll_y: f32,
    viewport_h: f32,
) -> Option<f32> {
    let s0 = binding.start.scroll_at(region, viewport_h);
    let s1 = binding.end.scroll_at(region, viewport_h);
    if s1 <= s0 || scroll_y < s0 {
        return None;
    }
    Some(((scroll_y - s0) / (s1 - s0)).min(1.0))
}

/// Apply every reached binding in table order on top of `initial`.
/// `rects[i]` is the measured rect for `bindings[i]`; a missing region
/// simply deactivates its binding. Running this from the initial state on
/// every scroll event (rather than accumulating) means a mid-page reload
/// or an upward scroll lands on exactly the pose the scroll position
/// dictates.
pub fn resolve(
    bindings: &[ScrollBinding],
    rects: &[Option<RegionRect>],
    scroll_y: f32,
    viewport_h: f32,
    initial: ScrollOutputs,
) -> ScrollOutputs {
    let mut out = initial;
    for (binding, rect) in bindings.iter().zip(rects) {
        let Some(region) = rect else { continue };
        let Some(t) = binding_progress(binding, *region, scroll_y, viewport_h) else {
            continue;
        };
        out.progress = binding.progress.at(t);
        if let Some(band) = binding.opacity {
            out.opacity = band.at(t);
        }
        if let Some(band) = binding.camera_z {
            out.camera_z = band.at(t);
        }
        if let Some(band) = binding.camera_y {
            out.camera_y = band.at(t);
        }
    }
    out
}

// Edge shorthands used by the tables below.
const TOP_TOP: TriggerEdge = TriggerEdge::new(0.0, 0.0);
const TOP_BOTTOM: TriggerEdge = TriggerEdge::new(0.0, 1.0);
const BOTTOM_TOP: TriggerEdge = TriggerEdge::new(1.0, 0.0);
const BOTTOM_CENTER: TriggerEdge = TriggerEdge::new(1.0, 0.5);
const CENTER_CENTER: TriggerEdge = TriggerEdge::new(0.5, 0.5);

/// The six-phase journey: one binding per page section, in page order.
pub static JOURNEY_BINDINGS: [ScrollBinding; 6] = [
    // Hero scroll dissolves the logo into the cloud and dollies the
    // camera back a little.
    ScrollBinding {
        selector: ".hero-section",
        start: TOP_TOP,
        end: BOTTOM_TOP,
        progress: Band::new(0.0, 0.5),
        opacity: None,
        camera_z: Some(Band::new(18.0, 22.0)),
        camera_y: Some(Band::new(0.0, -2.0)),
    },
    // Studio section condenses the cloud into the game pad.
    ScrollBinding {
        selector: ".studio-section",
        start: TOP_BOTTOM,
        end: CENTER_CENTER,
        progress: Band::new(0.5, 1.0),
        opacity: None,
        camera_z: Some(Band::new(22.0, 16.0)),
        camera_y: Some(Band::new(-2.0, 0.0)),
    },
    // Showreel section launches the pad outward and fades the field.
    ScrollBinding {
        selector: ".reel-section",
        start: TriggerEdge::new(0.2, 0.8),
        end: CENTER_CENTER,
        progress: Band::new(1.0, 1.5),
        opacity: Some(Band::new(0.75, 0.225)),
        camera_z: None,
        camera_y: None,
    },
    // Craft section settles the burst into the monitor, fading back in.
    ScrollBinding {
        selector: ".craft-section",
        start: TriggerEdge::new(0.0, 0.5),
        end: CENTER_CENTER,
        progress: Band::new(1.5, 2.0),
        opacity: Some(Band::new(0.25, 0.75)),
        camera_z: None,
        camera_y: None,
    },
    // Leaving the showcase loosens the monitor into the drift.
    ScrollBinding {
        selector: ".showcase-section",
        start: BOTTOM_CENTER,
        end: BOTTOM_TOP,
        progress: Band::new(2.0, 2.5),
        opacity: Some(Band::new(0.75, 0.225)),
        camera_z: None,
        camera_y: None,
    },
    // Voices section gathers the drift into the rocket.
    ScrollBinding {
        selector: ".voices-section",
        start: TriggerEdge::new(0.0, 0.8),
        end: CENTER_CENTER,
        progress: Band::new(2.5, 3.0),
        opacity: Some(Band::new(0.25, 0.75)),
        camera_z: None,
        camera_y: None,
    },
];

/// Overview page: one binding forms the headline out of the resting
/// scatter over the first half-phase. Opacity stays fixed page-wide.
pub static OVERVIEW_BINDINGS: [ScrollBinding; 1] = [ScrollBinding {
    selector: ".overview-section",
    start: TriggerEdge::new(0.0, 0.8),
    end: CENTER_CENTER,
    progress: Band::new(0.0, 0.5),
    opacity: None,
    camera_z: None,
    camera_y: None,
}];
