use crate::assets::{self, AssetLoader, Inbox};
use crate::capture::CaptureSession;
use crate::render;
use balloon_core::{FrameInput, SpawnDecision, World};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub world: World,
    pub inbox: Inbox,
    pub capture: Rc<RefCell<Option<CaptureSession>>>,
    pub assets: Rc<RefCell<AssetLoader>>,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,

    pub started_at: Instant,
}

impl FrameContext {
    /// One animation frame. Returns false once the world is torn down and
    /// the loop should stop.
    pub fn frame(&mut self) -> bool {
        let w = self.canvas.width();
        let h = self.canvas.height();
        self.world.camera.set_viewport(w, h);

        // Drain first so listeners can enqueue again while we run
        let commands: Vec<_> = self.inbox.borrow_mut().drain(..).collect();
        if !commands.is_empty() {
            let tally = self.world.apply_commands(commands);
            if tally.arrived + tally.discarded + tally.failed > 0 {
                log::debug!(
                    "[spawn] completions: {} arrived, {} discarded, {} failed",
                    tally.arrived,
                    tally.discarded,
                    tally.failed
                );
            }
        }
        if self.world.is_closed() {
            log::info!("[world] closed, stopping frame loop");
            return false;
        }

        let elapsed_sec = self.started_at.elapsed().as_secs_f32();
        let report = {
            let mut capture = self.capture.borrow_mut();
            let spectrum = capture.as_mut().and_then(|c| c.spectrum());
            self.world.frame(FrameInput {
                elapsed_sec,
                spectrum,
            })
        };
        match report.spawn {
            SpawnDecision::Requested { volume, ticket } => {
                log::debug!("[spawn] volume {volume:.1}, ticket {}", ticket.id());
                assets::request(&self.assets, ticket);
            }
            SpawnDecision::Crowded { volume } => {
                log::trace!("[spawn] volume {volume:.1} but no free spot");
            }
            SpawnDecision::Quiet { .. } | SpawnDecision::Idle => {}
        }

        if let Some(g) = &mut self.gpu {
            if let Some(model) = self.assets.borrow_mut().take_fresh() {
                g.set_model(&model);
            }
            g.resize_if_needed(w, h);
            if let Some(c) = self.capture.borrow().as_ref() {
                if c.is_playing() {
                    g.update_background(&c.video);
                }
            }
            if let Err(e) = g.render(&self.world) {
                log::error!("render error: {:?}", e);
            }
        }
        true
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if frame_ctx_tick.borrow_mut().frame() {
            request_frame(&tick_clone);
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
