use thiserror::Error;

/// Failures while acquiring the microphone. These leave the page phase
/// unchanged; the UI logs them and shows a banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("microphone permission denied")]
    PermissionDenied,
    #[error("no usable audio input device")]
    DeviceUnavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),
}

/// Failure of the translation or synthesis backend. The demo backends never
/// produce one, but the session handles it: phase reverts to Idle and the
/// translation map stays empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("backend failure: {0}")]
pub struct BackendError(pub String);
