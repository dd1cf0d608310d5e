use crate::loader::{Completion, ModelSlot, Request};
use balloon_core::{AssetError, ModelAsset, SpawnTicket, WorldCommand};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Commands produced outside the frame pass, drained at the start of the
/// next frame.
pub type Inbox = Rc<RefCell<Vec<WorldCommand>>>;

/// Fetches the shared balloon model through a [`ModelSlot`] and delivers
/// every completion to the world inbox.
pub struct AssetLoader {
    url: &'static str,
    slot: ModelSlot,
    inbox: Inbox,
    fresh: Option<Rc<ModelAsset>>,
}

impl AssetLoader {
    pub fn new(url: &'static str, inbox: Inbox) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            url,
            slot: ModelSlot::default(),
            inbox,
            fresh: None,
        }))
    }

    /// A model that finished loading since the last call; the renderer
    /// uploads it once.
    pub fn take_fresh(&mut self) -> Option<Rc<ModelAsset>> {
        self.fresh.take()
    }

    fn finish(&mut self, result: Result<ModelAsset, AssetError>) {
        if let Err(e) = &result {
            log::error!("[asset] {} failed: {}", self.url, e);
        }
        let Completion { model, commands } = self.slot.finish(result);
        if let Some(model) = model {
            log::info!("[asset] {} ready for {} spawn(s)", self.url, commands.len());
            self.fresh = Some(model);
        }
        self.inbox.borrow_mut().extend(commands);
    }
}

pub fn request(loader: &Rc<RefCell<AssetLoader>>, ticket: SpawnTicket) {
    let mut l = loader.borrow_mut();
    let outcome = l.slot.request(ticket);
    match outcome {
        Request::Ready(cmd) => l.inbox.borrow_mut().push(cmd),
        Request::Queued => {}
        Request::StartFetch => {
            let url = l.url;
            drop(l);
            log::debug!("[asset] fetching {url}");
            let loader = loader.clone();
            spawn_local(async move {
                let result = fetch_model(url).await;
                loader.borrow_mut().finish(result);
            });
        }
    }
}

fn fetch_err(e: wasm_bindgen::JsValue) -> AssetError {
    AssetError::Fetch(format!("{:?}", e))
}

async fn fetch_model(url: &str) -> Result<ModelAsset, AssetError> {
    let window = web::window().ok_or_else(|| AssetError::Fetch("no window".into()))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(fetch_err)?
        .dyn_into()
        .map_err(fetch_err)?;
    if !resp.ok() {
        return Err(AssetError::Fetch(format!("HTTP {} for {}", resp.status(), url)));
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(fetch_err)?)
        .await
        .map_err(fetch_err)?;
    let bytes = js_sys::Uint8Array::new(&buf).to_vec();
    ModelAsset::from_glb(&bytes)
}
