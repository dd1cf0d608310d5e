use thiserror::Error;

/// Failures while acquiring the camera/microphone or starting the preview.
///
/// Both are terminal for the attempt: they are logged at the point of origin
/// and the world simply never receives a spectrum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("camera/microphone access failed: {0}")]
    Denied(String),
    #[error("video playback failed: {0}")]
    PlaybackFailed(String),
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset fetch failed: {0}")]
    Fetch(String),
    #[error("asset is not valid glTF: {0}")]
    Parse(#[from] gltf::Error),
    #[error("glTF buffer {0} has no data in the binary chunk")]
    MissingBlob(usize),
    #[error("external glTF buffer `{0}` is not supported, pack the model as .glb")]
    ExternalBuffer(String),
    #[error("mesh primitive has no positions")]
    MissingPositions,
    #[error("asset contains no drawable geometry")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown setting `{0}`")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
}
