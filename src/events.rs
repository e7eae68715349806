use crate::camera;
use crate::core::{resolve, ScrollBinding, ScrollOutputs};
use crate::dom;
use crate::input::{self, PointerState};
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

#[inline]
fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0) as f32;
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0) as f32;
    (w, h)
}

fn resolve_now(
    window: &web::Window,
    document: &web::Document,
    bindings: &[ScrollBinding],
    initial: ScrollOutputs,
) -> ScrollOutputs {
    let y = scroll_y(window);
    let (_, vh) = viewport_size(window);
    let rects: Vec<_> = bindings
        .iter()
        .map(|b| dom::region_rect(document, b.selector, y))
        .collect();
    resolve(bindings, &rects, y, vh, initial)
}

/// Wire the scroll bindings: every scroll/resize event re-measures the
/// bound regions and re-runs the resolver from the initial state, then the
/// result lands in the shared outputs record. Also resolves once
/// immediately so a mid-page load starts on the right pose.
pub fn wire_scroll(
    document: web::Document,
    bindings: &'static [ScrollBinding],
    initial: ScrollOutputs,
    outputs: Rc<RefCell<ScrollOutputs>>,
) {
    let Some(window) = web::window() else { return };

    *outputs.borrow_mut() = resolve_now(&window, &document, bindings, initial);

    for event in ["scroll", "resize"] {
        let window_ev = window.clone();
        let document_ev = document.clone();
        let outputs_ev = outputs.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            *outputs_ev.borrow_mut() = resolve_now(&window_ev, &document_ev, bindings, initial);
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Wire window-level pointer tracking: normalized device coords plus the
/// unprojection onto the shape plane, against the current camera dolly.
pub fn wire_pointer(pointer: Rc<RefCell<PointerState>>, scroll: Rc<RefCell<ScrollOutputs>>) {
    let Some(window) = web::window() else { return };

    let window_ev = window.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (vw, vh) = viewport_size(&window_ev);
        let ndc = input::ndc_from_client(ev.client_x() as f32, ev.client_y() as f32, vw, vh);
        let eye = {
            let s = scroll.borrow();
            Vec3::new(0.0, s.camera_y, s.camera_z)
        };
        let mut p = pointer.borrow_mut();
        p.ndc = ndc;
        if let Some(world) = camera::pointer_world_on_plane(ndc, vw, vh, eye) {
            p.world = world;
        }
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}
