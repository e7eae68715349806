// Host-side tests for the scroll binding table and resolver.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
#[path = "../src/core/scroll.rs"]
mod scroll;

use scroll::*;

const VIEWPORT: f32 = 800.0;

fn initial() -> ScrollOutputs {
    ScrollOutputs {
        progress: 0.0,
        opacity: 0.75,
        camera_z: 18.0,
        camera_y: 0.0,
    }
}

fn binding(selector: &'static str, progress: Band, opacity: Option<Band>) -> ScrollBinding {
    ScrollBinding {
        selector,
        start: TriggerEdge::new(0.0, 0.0),
        end: TriggerEdge::new(1.0, 0.0),
        progress,
        opacity,
        camera_z: None,
        camera_y: None,
    }
}

#[test]
fn trigger_edges_reduce_to_scroll_positions() {
    let region = RegionRect {
        top: 1000.0,
        height: 500.0,
    };
    // "top top": region top reaches the viewport top
    assert_eq!(TriggerEdge::new(0.0, 0.0).scroll_at(region, VIEWPORT), 1000.0);
    // "top 80%": region top reaches 80% down the viewport
    assert_eq!(TriggerEdge::new(0.0, 0.8).scroll_at(region, VIEWPORT), 360.0);
    // "center center"
    assert_eq!(TriggerEdge::new(0.5, 0.5).scroll_at(region, VIEWPORT), 850.0);
    // "bottom top"
    assert_eq!(TriggerEdge::new(1.0, 0.0).scroll_at(region, VIEWPORT), 1500.0);
}

#[test]
fn binding_progress_clamps_inside_its_range() {
    let b = binding("#a", Band::new(0.0, 0.5), None);
    let region = RegionRect {
        top: 1000.0,
        height: 500.0,
    };
    assert_eq!(binding_progress(&b, region, 900.0, VIEWPORT), None);
    assert_eq!(binding_progress(&b, region, 1250.0, VIEWPORT), Some(0.5));
    assert_eq!(binding_progress(&b, region, 1500.0, VIEWPORT), Some(1.0));
    assert_eq!(binding_progress(&b, region, 4000.0, VIEWPORT), Some(1.0));
}

#[test]
fn degenerate_ranges_never_activate() {
    let b = ScrollBinding {
        selector: "#a",
        start: TriggerEdge::new(0.5, 0.0),
        end: TriggerEdge::new(0.5, 0.0),
        progress: Band::new(0.0, 1.0),
        opacity: None,
        camera_z: None,
        camera_y: None,
    };
    let region = RegionRect {
        top: 0.0,
        height: 100.0,
    };
    assert_eq!(binding_progress(&b, region, 500.0, VIEWPORT), None);
}

#[test]
fn resolver_keeps_the_initial_state_above_all_regions() {
    let bindings = [binding("#a", Band::new(0.0, 0.5), None)];
    let rects = [Some(RegionRect {
        top: 2000.0,
        height: 400.0,
    })];
    let out = resolve(&bindings, &rects, 100.0, VIEWPORT, initial());
    assert_eq!(out.progress, 0.0);
    assert_eq!(out.opacity, 0.75);
}

#[test]
fn resolver_interpolates_inside_a_region() {
    let bindings = [binding("#a", Band::new(1.0, 1.5), Some(Band::new(0.75, 0.225)))];
    let rects = [Some(RegionRect {
        top: 1000.0,
        height: 400.0,
    })];
    let out = resolve(&bindings, &rects, 1200.0, VIEWPORT, initial());
    assert!((out.progress - 1.25).abs() < 1e-6);
    assert!((out.opacity - (0.75 + 0.5 * (0.225 - 0.75))).abs() < 1e-6);
}

#[test]
fn passed_regions_contribute_their_end_state() {
    // A reload far down the page must land on the later binding's pose.
    let bindings = [
        binding("#a", Band::new(0.0, 0.5), None),
        binding("#b", Band::new(0.5, 1.0), None),
    ];
    let rects = [
        Some(RegionRect {
            top: 0.0,
            height: 500.0,
        }),
        Some(RegionRect {
            top: 500.0,
            height: 500.0,
        }),
    ];
    let out = resolve(&bindings, &rects, 5000.0, VIEWPORT, initial());
    assert_eq!(out.progress, 1.0);
}

#[test]
fn later_bindings_take_priority_where_ranges_overlap() {
    let bindings = [
        binding("#a", Band::new(0.0, 0.5), Some(Band::new(0.75, 0.5))),
        binding("#b", Band::new(0.5, 1.0), None),
    ];
    // both regions active at this scroll position
    let rects = [
        Some(RegionRect {
            top: 0.0,
            height: 1000.0,
        }),
        Some(RegionRect {
            top: 400.0,
            height: 1000.0,
        }),
    ];
    let out = resolve(&bindings, &rects, 600.0, VIEWPORT, initial());
    // progress comes from #b (listed later); opacity keeps #a's value
    // because #b carries no opacity band
    assert!((out.progress - (0.5 + 0.2 * 0.5)).abs() < 1e-6);
    assert!((out.opacity - (0.75 + 0.6 * (0.5 - 0.75))).abs() < 1e-6);
}

#[test]
fn missing_regions_deactivate_their_bindings() {
    let bindings = [
        binding("#a", Band::new(0.0, 0.5), None),
        binding("#missing", Band::new(0.5, 1.0), None),
    ];
    let rects = [
        Some(RegionRect {
            top: 0.0,
            height: 500.0,
        }),
        None,
    ];
    let out = resolve(&bindings, &rects, 5000.0, VIEWPORT, initial());
    assert_eq!(out.progress, 0.5);
}

#[test]
fn journey_table_spans_the_whole_morph_range() {
    assert_eq!(JOURNEY_BINDINGS.len(), 6);
    let mut expected_from = 0.0;
    for b in &JOURNEY_BINDINGS {
        assert!((b.progress.from - expected_from).abs() < 1e-6, "{}", b.selector);
        assert!((b.progress.to - b.progress.from - 0.5).abs() < 1e-6, "{}", b.selector);
        expected_from = b.progress.to;
    }
    assert!((expected_from - 3.0).abs() < 1e-6);
}

#[test]
fn journey_selectors_are_unique() {
    for (i, a) in JOURNEY_BINDINGS.iter().enumerate() {
        for b in &JOURNEY_BINDINGS[i + 1..] {
            assert_ne!(a.selector, b.selector);
        }
    }
}

#[test]
fn camera_bands_cover_the_hero_dolly() {
    let hero = &JOURNEY_BINDINGS[0];
    let z = hero.camera_z.expect("hero drives camera z");
    assert_eq!(z.from, 18.0);
    assert_eq!(z.to, 22.0);
    let y = hero.camera_y.expect("hero drives camera y");
    assert_eq!(y.at(1.0), -2.0);
}

#[test]
fn overview_binding_forms_over_half_a_phase() {
    assert_eq!(OVERVIEW_BINDINGS.len(), 1);
    let b = &OVERVIEW_BINDINGS[0];
    assert_eq!(b.progress.from, 0.0);
    assert_eq!(b.progress.to, 0.5);
    assert!(b.opacity.is_none());
}
