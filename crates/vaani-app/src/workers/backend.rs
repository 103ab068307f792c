use futures::future::LocalBoxFuture;
use gloo_timers::future::TimeoutFuture;

use vaani_core::{
    AudioPayload, BackendError, FixedTranslations, Language, SpeechBackend,
    TranslationBackend, TranslationMap,
};

/// Simulated processing time before results appear.
pub const PROCESSING_DELAY_MS: u32 = 3_000;
/// Simulated synthesis-and-playback time per card.
pub const SYNTHESIS_DELAY_MS: u32 = 2_000;

/// Reference "production" translation backend: a fixed delay over the demo
/// phrase table. A real integration replaces the body of `translate` with a
/// service call; the orchestrator does not change.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoTranslationBackend;

impl TranslationBackend for DemoTranslationBackend {
    fn translate(
        &self,
        payload: AudioPayload,
        targets: &'static [Language],
    ) -> LocalBoxFuture<'static, Result<TranslationMap, BackendError>> {
        Box::pin(async move {
            TimeoutFuture::new(PROCESSING_DELAY_MS).await;
            FixedTranslations.translate(payload, targets).await
        })
    }
}

/// Reference speech-synthesis backend: resolves to an empty payload after a
/// fixed delay, so the card spinner runs but nothing is audible.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoSpeechBackend;

impl SpeechBackend for DemoSpeechBackend {
    fn synthesize(
        &self,
        text: &str,
        language_code: &str,
    ) -> LocalBoxFuture<'static, Result<AudioPayload, BackendError>> {
        let text = text.to_string();
        let language_code = language_code.to_string();
        Box::pin(async move {
            TimeoutFuture::new(SYNTHESIS_DELAY_MS).await;
            FixedTranslations.synthesize(&text, &language_code).await
        })
    }
}
