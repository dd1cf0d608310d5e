use crate::assets::Inbox;
use crate::capture::{self, CaptureSession};
use crate::constants::START_BUTTON_ID;
use crate::dom;
use crate::input;
use crate::lifecycle;
use balloon_core::WorldCommand;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Start button: acquire camera + mic once, then start the world. The
/// button is removed on the first click whatever the outcome.
pub fn wire_start_button(
    document: &web::Document,
    inbox: Inbox,
    capture_slot: Rc<RefCell<Option<CaptureSession>>>,
) {
    static STARTED: AtomicBool = AtomicBool::new(false);
    let doc = document.clone();
    let wired = dom::add_click_listener(document, START_BUTTON_ID, move || {
        if STARTED.swap(true, Ordering::SeqCst) {
            return;
        }
        dom::remove_element(&doc, START_BUTTON_ID);
        let inbox = inbox.clone();
        let capture_slot = capture_slot.clone();
        spawn_local(async move {
            match capture::start_capture().await {
                Ok(session) => {
                    *capture_slot.borrow_mut() = Some(session);
                    inbox.borrow_mut().push(WorldCommand::Start);
                }
                Err(e) => log::error!("[capture] {e}"),
            }
        });
    });
    if !wired {
        log::warn!("missing #{START_BUTTON_ID}; capture cannot be started");
    }
}

pub fn wire_pointerdown(canvas: &web::HtmlCanvasElement, inbox: Inbox) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let ndc = input::pointer_ndc(&ev, &canvas);
        log::debug!("[light] tap at ndc ({:.2},{:.2})", ndc.x, ndc.y);
        inbox.borrow_mut().push(WorldCommand::AimLight { ndc });
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

pub fn wire_pagehide(inbox: Inbox) {
    let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        match lifecycle::pagehide_command(ev.persisted()) {
            Some(cmd) => inbox.borrow_mut().push(cmd),
            None => log::debug!("[world] page cached for back/forward, keeping world"),
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
