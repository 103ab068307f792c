//! Platform-independent logic for the Vaani voice-to-voice translator demo:
//! the page phase machine, the target language table, upload validation and
//! the backend capability seams. No DOM, no wasm bindings — everything here
//! is unit-testable on the host.

pub mod audio;
pub mod backend;
pub mod error;
pub mod language;
pub mod session;

pub use audio::{accepts_upload, AudioPayload};
pub use backend::{FixedTranslations, SpeechBackend, TranslationBackend};
pub use error::{BackendError, CaptureError, UploadError};
pub use language::{Language, TranslationMap, TARGET_LANGUAGES};
pub use session::{can_play, CycleId, CycleOutcome, Phase, Session};
