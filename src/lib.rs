#![cfg(target_arch = "wasm32")]
use crate::constants::{
    CAMERA_Z, CANVAS_ID, GALLERY_MARKERS, HEADLINE_OPACITY, JOURNEY_OPACITY, OVERVIEW_MARKER,
    PALETTE, STATIC_OPACITY, STATIC_PROGRESS,
};
use crate::core::{
    color_index, generate_cloud_points, generate_headline_points, generate_logo_points,
    generate_pad_points, generate_rocket_points, generate_screen_points, generate_wide_scatter,
    initial_scale, ParticleField, ScrollOutputs, JOURNEY_BINDINGS, OVERVIEW_BINDINGS,
    PARTICLE_COUNT,
};
use crate::input::PointerState;
use instant::Instant;
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;

/// Which experience variant this page runs, decided once at startup from
/// structural markers. Never changes at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PageMode {
    /// The six-phase scroll journey (default).
    Journey,
    /// Gallery-style pages: pinned fully-scattered pose, no scroll wiring.
    Static,
    /// Overview page: scatter condenses into the headline wordmark.
    Headline,
}

fn page_mode(document: &web::Document) -> PageMode {
    if GALLERY_MARKERS
        .iter()
        .any(|marker| dom::has_marker(document, marker))
    {
        PageMode::Static
    } else if dom::has_marker(document, OVERVIEW_MARKER) {
        PageMode::Headline
    } else {
        PageMode::Journey
    }
}

// Maintain canvas internal pixel size to match CSS size * devicePixelRatio
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("motion-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // No canvas means this page does not carry the experience; everything
    // else on the page keeps working.
    let Some(canvas_el) = document.get_element_by_id(CANVAS_ID) else {
        log::warn!("#{} missing; particle field disabled", CANVAS_ID);
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    wire_canvas_resize(&canvas);

    let mode = page_mode(&document);
    log::info!("[field] page mode {:?}", mode);

    let mut rng = StdRng::seed_from_u64(js_sys::Date::now() as u64);

    // All five journey shapes are generated regardless of mode so every
    // particle carries a full target set; the overview page then swaps its
    // first pair.
    let logo = generate_logo_points(PARTICLE_COUNT, &mut rng);
    let cloud = generate_cloud_points(PARTICLE_COUNT, &mut rng);
    let pad = generate_pad_points(PARTICLE_COUNT, &mut rng);
    let screen = generate_screen_points(PARTICLE_COUNT, &mut rng);
    let rocket = generate_rocket_points(PARTICLE_COUNT, &mut rng);
    let mut field = ParticleField::assemble(&logo, &cloud, &pad, &screen, &rocket, &mut rng);

    let scales: Vec<f32> = field
        .particles
        .iter()
        .map(|p| initial_scale(p.primary, &mut rng))
        .collect();
    let colors: Vec<[f32; 3]> = (0..field.len())
        .map(|_| PALETTE[color_index(rng.gen::<f32>())])
        .collect();

    let initial = match mode {
        PageMode::Journey => ScrollOutputs {
            progress: 0.0,
            opacity: JOURNEY_OPACITY,
            camera_z: CAMERA_Z,
            camera_y: 0.0,
        },
        PageMode::Static => ScrollOutputs {
            progress: STATIC_PROGRESS,
            opacity: STATIC_OPACITY,
            camera_z: CAMERA_Z,
            camera_y: 0.0,
        },
        PageMode::Headline => ScrollOutputs {
            progress: 0.0,
            opacity: HEADLINE_OPACITY,
            camera_z: CAMERA_Z,
            camera_y: 0.0,
        },
    };
    if mode == PageMode::Headline {
        let scatter = generate_wide_scatter(PARTICLE_COUNT, &mut rng);
        let headline = generate_headline_points(PARTICLE_COUNT, &mut rng);
        field.retarget_headline(&scatter, &headline);
    }

    // ---------------- Shared state + event wiring ----------------
    let scroll = Rc::new(RefCell::new(initial));
    let pointer = Rc::new(RefCell::new(PointerState::default()));

    events::wire_pointer(pointer.clone(), scroll.clone());
    match mode {
        PageMode::Journey => {
            events::wire_scroll(document.clone(), &JOURNEY_BINDINGS, initial, scroll.clone())
        }
        PageMode::Headline => {
            events::wire_scroll(document.clone(), &OVERVIEW_BINDINGS, initial, scroll.clone())
        }
        PageMode::Static => {}
    }

    // Initialize WebGPU; without it the whole system stays off.
    let Some(gpu) = frame::init_gpu(&canvas, PARTICLE_COUNT).await else {
        log::warn!("WebGPU unavailable; particle field disabled");
        return Ok(());
    };

    let count = field.len();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        scales,
        colors,
        canvas,
        pointer,
        scroll,
        gpu,
        started: Instant::now(),
        instances: Vec::with_capacity(count),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
