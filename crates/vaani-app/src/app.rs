use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use vaani_core::{
    AudioPayload, CycleOutcome, TranslationBackend, TARGET_LANGUAGES,
};

use crate::components::loading_wave::LoadingWave;
use crate::components::translation_card::TranslationCard;
use crate::components::voice_recorder::VoiceRecorder;
use crate::state::AppState;
use crate::workers::backend::DemoTranslationBackend;

/// A capture produced a payload: start a new cycle and run the translation
/// backend. The completion re-enters the session under the cycle id it was
/// started with, so a superseded run can never clobber newer results.
pub fn handle_payload(state: AppState, payload: AudioPayload) {
    let Some(cycle) = state.session.try_update(|s| s.begin_cycle()) else {
        return;
    };
    log::info!("translating payload of {} bytes", payload.bytes.len());

    spawn_local(async move {
        let result = DemoTranslationBackend
            .translate(payload, &TARGET_LANGUAGES)
            .await;
        let outcome = state.session.try_update(|s| s.complete_cycle(cycle, result));
        if let Some(CycleOutcome::Failed(err)) = outcome {
            state
                .error_message
                .set(Some(format!("Translation failed: {err}")));
        }
    });
}

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();
    let session = state.session;
    let error_message = state.error_message;
    provide_context(state);

    let processing = move || session.with(|s| s.is_processing());

    view! {
        <div class="min-h-screen bg-gradient-to-br from-black via-gray-900 to-gray-700">
            <div class="container mx-auto px-4 py-8">
                <header class="text-center mb-12">
                    <h1 class="text-5xl md:text-6xl font-bold text-white mb-4">
                        "\u{1F399}\u{FE0F} Voice-to-Voice Translator"
                    </h1>
                    <p class="text-xl text-gray-400 max-w-3xl mx-auto">
                        "Record your voice in English and get instant translations in multiple languages with audio playback."
                    </p>
                    <div class="mt-4 flex justify-center">
                        <span class={move || session.with(|s| s.phase().badge_class())}>
                            {move || session.with(|s| s.phase().label())}
                        </span>
                    </div>
                </header>

                // Error banner
                {move || {
                    error_message.get().map(|msg| {
                        view! {
                            <div class="max-w-2xl mx-auto mb-8 bg-red-900/20 border border-red-800 rounded-xl p-4 flex items-center justify-between">
                                <p class="text-red-400 text-sm">{msg.clone()}</p>
                                <button
                                    class="text-red-400 hover:text-red-300 font-bold"
                                    on:click=move |_| error_message.set(None)
                                >
                                    "\u{2715}"
                                </button>
                            </div>
                        }
                    })
                }}

                <div class="max-w-md mx-auto mb-12">
                    <VoiceRecorder />
                </div>

                {move || {
                    if processing() {
                        Some(view! {
                            <div class="mb-12">
                                <LoadingWave message="Translating your voice..." />
                            </div>
                        })
                    } else {
                        None
                    }
                }}

                <div class="mb-16">
                    <h2 class="text-3xl font-bold text-center text-white mb-8">
                        "Translations"
                    </h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 max-w-6xl mx-auto">
                        {TARGET_LANGUAGES
                            .iter()
                            .map(|language| view! { <TranslationCard language=*language /> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <footer class="text-center py-4 text-xs text-gray-500">
                    "All translations shown here are demo data. No audio leaves your browser."
                </footer>
            </div>
        </div>
    }
}
