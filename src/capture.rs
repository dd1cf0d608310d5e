use crate::audio::{self, MicAnalyser};
use crate::constants::VIDEO_FACING_MODE;
use balloon_core::CaptureError;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Live camera + microphone. Runs until the page goes away.
pub struct CaptureSession {
    pub video: web::HtmlVideoElement,
    mic: MicAnalyser,
    bins: Vec<u8>,
    playing: Rc<Cell<bool>>,
}

impl CaptureSession {
    /// True once the preview video has started; the background and the
    /// spawner stay off until then.
    pub fn is_playing(&self) -> bool {
        self.playing.get()
    }

    /// Current byte-frequency snapshot, or `None` while the video is not
    /// playing.
    pub fn spectrum(&mut self) -> Option<&[u8]> {
        if !self.is_playing() {
            return None;
        }
        audio::read_spectrum(&self.mic.analyser, &mut self.bins);
        Some(&self.bins)
    }
}

fn js_reason(e: &JsValue) -> String {
    e.as_string()
        .or_else(|| {
            e.dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| format!("{:?}", e))
}

async fn request_media() -> Result<web::MediaStream, CaptureError> {
    let denied = |e: JsValue| CaptureError::Denied(js_reason(&e));
    let window = web::window().ok_or_else(|| CaptureError::Denied("no window".into()))?;
    let devices = window.navigator().media_devices().map_err(denied)?;

    let video = js_sys::Object::new();
    js_sys::Reflect::set(
        &video,
        &JsValue::from_str("facingMode"),
        &JsValue::from_str(VIDEO_FACING_MODE),
    )
    .map_err(denied)?;
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_video(&video);
    constraints.set_audio(&JsValue::TRUE);

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(denied)?;
    let stream = JsFuture::from(promise).await.map_err(denied)?;
    stream.dyn_into::<web::MediaStream>().map_err(denied)
}

fn create_video(stream: &web::MediaStream) -> Result<web::HtmlVideoElement, CaptureError> {
    let denied = |e: JsValue| CaptureError::Denied(js_reason(&e));
    let document = web::window()
        .and_then(|w| w.document())
        .ok_or_else(|| CaptureError::Denied("no document".into()))?;
    let video: web::HtmlVideoElement = document
        .create_element("video")
        .map_err(denied)?
        .dyn_into()
        .map_err(|el| CaptureError::Denied(format!("not a video element: {:?}", el)))?;
    for attr in ["playsinline", "autoplay", "muted"] {
        _ = video.set_attribute(attr, "");
    }
    video.set_muted(true);
    video.set_src_object(Some(stream));
    Ok(video)
}

/// Ask for camera + microphone and wire both up. Playback of the preview
/// resolves separately; a failure there is logged and leaves the session
/// inert instead of failing the whole capture.
pub async fn start_capture() -> Result<CaptureSession, CaptureError> {
    let stream = request_media().await?;
    log::info!(
        "[capture] stream granted: {} video / {} audio track(s)",
        stream.get_video_tracks().length(),
        stream.get_audio_tracks().length()
    );
    let video = create_video(&stream)?;

    let playing = Rc::new(Cell::new(false));
    match video.play() {
        Ok(promise) => {
            let playing = playing.clone();
            spawn_local(async move {
                match JsFuture::from(promise).await {
                    Ok(_) => {
                        log::info!("[capture] video playing");
                        playing.set(true);
                    }
                    Err(e) => log::error!("{}", CaptureError::PlaybackFailed(js_reason(&e))),
                }
            });
        }
        Err(e) => log::error!("{}", CaptureError::PlaybackFailed(js_reason(&e))),
    }

    let mic = audio::connect_microphone(&stream)?;
    Ok(CaptureSession {
        video,
        mic,
        bins: Vec::new(),
        playing,
    })
}
