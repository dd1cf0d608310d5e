#![cfg(target_arch = "wasm32")]
use balloon_core::World;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod audio;
mod capture;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod layout;
mod lifecycle;
mod loader;
mod render;
mod settings;

use constants::{BALLOON_MODEL_URL, CANVAS_ID};

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
    let query = settings::current_query();
    console_log::init_with_level(settings::log_level_from_query(&query)).ok();
    log::info!("balloon-ar starting");

    spawn_local(async move {
        if let Err(e) = init(&query).await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init(query: &str) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let params = settings::params_from_query(query);
    let world = World::new(params, rand::random());
    let inbox: assets::Inbox = Rc::new(RefCell::new(Vec::new()));
    let capture_slot = Rc::new(RefCell::new(None));
    let loader = assets::AssetLoader::new(BALLOON_MODEL_URL, inbox.clone());

    let gpu = frame::init_gpu(&canvas).await;

    events::wire_start_button(&document, inbox.clone(), capture_slot.clone());
    events::wire_pointerdown(&canvas, inbox.clone());
    events::wire_pagehide(inbox.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        world,
        inbox,
        capture: capture_slot,
        assets: loader,
        canvas,
        gpu,
        started_at: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
