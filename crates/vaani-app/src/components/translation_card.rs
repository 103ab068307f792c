use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use vaani_core::{can_play, Language, SpeechBackend};

use crate::state::AppState;
use crate::workers::backend::DemoSpeechBackend;
use crate::workers::playback;

#[component]
pub fn TranslationCard(language: Language) -> impl IntoView {
    let state = expect_context::<AppState>();
    let session = state.session;
    let error_message = state.error_message;

    // Per-card playback flag; nothing else observes it.
    let is_playing = RwSignal::new(false);

    let text = move || session.with(|s| s.translation_for(language.code).map(str::to_owned));
    let processing = move || session.with(|s| s.is_processing());
    let enabled = move || can_play(text().as_deref(), is_playing.get(), processing());

    let play = move |_| {
        let current = session
            .with_untracked(|s| s.translation_for(language.code).map(str::to_owned));
        let Some(text) = current else { return };
        if is_playing.get_untracked() {
            return;
        }
        is_playing.set(true);

        spawn_local(async move {
            match DemoSpeechBackend.synthesize(&text, language.code).await {
                Ok(audio) => {
                    if !audio.is_empty() {
                        if let Err(e) = playback::play_payload(&audio) {
                            log::error!("card playback failed: {e}");
                        }
                    }
                }
                Err(e) => {
                    error_message.set(Some(format!("Playback failed: {e}")));
                }
            }
            is_playing.set(false);
        });
    };

    view! {
        <div class="glass-card p-6 h-full flex flex-col">
            <div class="flex items-center justify-between mb-4">
                <div class="flex items-center gap-3">
                    <span class="text-2xl">{language.flag}</span>
                    <div>
                        <h3 class="font-semibold text-white">{language.name}</h3>
                        <p class="text-xs text-gray-400 uppercase tracking-wide">
                            {language.code}
                        </p>
                    </div>
                </div>

                <button
                    class="p-2 rounded-lg text-indigo-400 hover:bg-indigo-900/40 disabled:opacity-40 disabled:cursor-not-allowed"
                    on:click=play
                    disabled=move || !enabled()
                    title="Play translation"
                >
                    {move || {
                        if is_playing.get() {
                            view! { <span class="loading-spinner inline-block">"\u{25CC}"</span> }
                                .into_any()
                        } else {
                            view! { <span>"\u{1F50A}"</span> }.into_any()
                        }
                    }}
                </button>
            </div>

            <div class="flex-1 flex items-center justify-center min-h-[120px]">
                {move || {
                    if processing() {
                        view! {
                            <div class="wave-animation w-full h-8 rounded-lg flex items-center justify-center">
                                <span class="text-gray-400 text-sm">"Translating..."</span>
                            </div>
                        }
                        .into_any()
                    } else if let Some(text) = text() {
                        view! {
                            <p class="text-white text-center text-lg leading-relaxed">{text}</p>
                        }
                        .into_any()
                    } else {
                        view! {
                            <p class="text-gray-400 text-center text-sm">
                                "Ready for translation"
                            </p>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}
