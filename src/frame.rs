use crate::constants::{FIELD_YAW_AMP, FIELD_YAW_FREQ, PARTICLE_RADIUS};
use crate::core::{display_position, ParticleField, ScrollOutputs};
use crate::input::PointerState;
use crate::render::{self, ParticleInstance};
use glam::Vec3;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame tick needs. The field and GPU state are owned
/// here; pointer and scroll records are shared with the event closures.
pub struct FrameContext {
    pub field: ParticleField,
    pub scales: Vec<f32>,
    pub colors: Vec<[f32; 3]>,

    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<PointerState>>,
    pub scroll: Rc<RefCell<ScrollOutputs>>,
    pub gpu: render::GpuState<'static>,

    pub started: Instant,
    pub instances: Vec<ParticleInstance>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let time = self.started.elapsed().as_secs_f32();
        let outputs = *self.scroll.borrow();
        let pointer = *self.pointer.borrow();

        // Chase the phase target and advance rotation. The only mutation
        // of persistent particle state this frame.
        self.field.step(outputs.progress);

        // Compose the displayed transforms. Wave/repulsion/follow live
        // only in this buffer, never in the particles.
        self.instances.clear();
        for (i, p) in self.field.particles.iter().enumerate() {
            let pos = display_position(p.position, time, pointer.world, pointer.ndc);
            self.instances
                .push(ParticleInstance::new(pos, p.rotation, self.scales[i], self.colors[i]));
        }

        let eye = Vec3::new(0.0, outputs.camera_y, outputs.camera_z);
        let yaw = (time * FIELD_YAW_FREQ).sin() * FIELD_YAW_AMP;
        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        if let Err(e) = self.gpu.render(&self.instances, eye, yaw, outputs.opacity) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    instance_capacity: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, instance_capacity, PARTICLE_RADIUS).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::warn!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
