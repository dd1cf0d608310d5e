use balloon_core::constants::ANALYSER_FFT_SIZE;
use balloon_core::CaptureError;
use web_sys as web;

/// Microphone tap: the stream feeds an analyser and nothing else, so the
/// user never hears themselves.
pub struct MicAnalyser {
    pub audio_ctx: web::AudioContext,
    pub analyser: web::AnalyserNode,
    _source: web::MediaStreamAudioSourceNode,
}

pub fn connect_microphone(stream: &web::MediaStream) -> Result<MicAnalyser, CaptureError> {
    let denied = |what: &str, e: wasm_bindgen::JsValue| {
        CaptureError::Denied(format!("{what}: {:?}", e))
    };
    let audio_ctx = web::AudioContext::new().map_err(|e| denied("AudioContext", e))?;
    _ = audio_ctx.resume();
    let source = audio_ctx
        .create_media_stream_source(stream)
        .map_err(|e| denied("MediaStreamAudioSourceNode", e))?;
    let analyser = create_analyser(&audio_ctx).map_err(|e| denied("AnalyserNode", e))?;
    source
        .connect_with_audio_node(&analyser)
        .map_err(|e| denied("connect mic", e))?;
    log::info!(
        "[capture] analyser ready: fft={} bins={} sample_rate={}",
        analyser.fft_size(),
        analyser.frequency_bin_count(),
        audio_ctx.sample_rate()
    );
    Ok(MicAnalyser {
        audio_ctx,
        analyser,
        _source: source,
    })
}

// Create analyser with the fixed transform size
fn create_analyser(
    audio_ctx: &web::AudioContext,
) -> Result<web::AnalyserNode, wasm_bindgen::JsValue> {
    let analyser = web::AnalyserNode::new(audio_ctx)?;
    analyser.set_fft_size(ANALYSER_FFT_SIZE);
    Ok(analyser)
}

/// Size `buf` to the analyser's bin count and overwrite it with the current
/// byte spectrum.
pub fn read_spectrum(analyser: &web::AnalyserNode, buf: &mut Vec<u8>) {
    let bins = analyser.frequency_bin_count() as usize;
    if buf.len() != bins {
        buf.resize(bins, 0);
    }
    analyser.get_byte_frequency_data(buf);
}
