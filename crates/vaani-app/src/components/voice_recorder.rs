use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

use vaani_core::{accepts_upload, AudioPayload, Phase, UploadError};

use crate::app::handle_payload;
use crate::components::sound_waves::SoundWaves;
use crate::state::AppState;
use crate::workers::{audio_capture, playback};

#[component]
pub fn VoiceRecorder() -> impl IntoView {
    let state = expect_context::<AppState>();
    let session = state.session;
    let error_message = state.error_message;
    let last_capture = state.last_capture;

    let file_input: NodeRef<html::Input> = NodeRef::new();

    let is_recording = move || session.with(|s| s.phase() == Phase::Recording);

    let toggle_recording = move |_| {
        spawn_local(async move {
            if session.with_untracked(|s| s.phase() == Phase::Recording) {
                match audio_capture::stop_recording().await {
                    Ok(payload) => {
                        last_capture.set(Some(payload.clone()));
                        handle_payload(state, payload);
                    }
                    Err(e) => {
                        log::error!("recording failed: {e}");
                        session.update(|s| s.abort_recording());
                        error_message.set(Some(format!("Recording failed: {e}")));
                    }
                }
            } else {
                match audio_capture::start_recording().await {
                    Ok(()) => session.update(|s| s.recording_started()),
                    Err(e) => {
                        log::error!("could not start recording: {e}");
                        error_message.set(Some(e.to_string()));
                    }
                }
            }
        });
    };

    let open_file_picker = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_file_selected = move |ev: ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|list| list.get(0)) else {
            return;
        };
        // Allow re-selecting the same file later.
        input.set_value("");

        let mime = file.type_();
        let name = file.name();
        if !accepts_upload(&mime, &name) {
            log::warn!("rejected upload {name:?} ({mime})");
            error_message.set(Some(UploadError::UnsupportedFileType(name).to_string()));
            return;
        }

        spawn_local(async move {
            match audio_capture::read_file_bytes(&file).await {
                Ok(bytes) => {
                    let mime = if mime.is_empty() {
                        "audio/wav".to_string()
                    } else {
                        mime
                    };
                    let payload = AudioPayload::new(bytes, mime);
                    last_capture.set(Some(payload.clone()));
                    handle_payload(state, payload);
                }
                Err(e) => {
                    error_message.set(Some(format!("Could not read file: {e}")));
                }
            }
        });
    };

    let play_last = move |_| {
        if let Some(payload) = last_capture.get_untracked() {
            if let Err(e) = playback::play_payload(&payload) {
                log::error!("replay failed: {e}");
            }
        }
    };

    let button_class = move || {
        let base = "px-6 py-3 font-semibold rounded-2xl transition-all duration-200 shadow-lg active:scale-95";
        if is_recording() {
            format!("{base} bg-red-600 hover:bg-red-700 text-white animate-pulse")
        } else {
            format!("{base} bg-indigo-600 hover:bg-indigo-700 text-white hover:shadow-xl")
        }
    };

    view! {
        <div class="glass-card p-8 text-center space-y-6">
            <div class="flex justify-center">
                <button class=button_class on:click=toggle_recording>
                    {move || if is_recording() { "Stop Recording" } else { "Start Recording" }}
                </button>
            </div>

            {move || is_recording().then(|| view! { <SoundWaves /> })}

            <div class="space-y-2">
                <h3 class="text-lg font-semibold text-white">
                    {move || if is_recording() { "Recording..." } else { "Record Your Voice" }}
                </h3>
                <p class="text-sm text-gray-400">
                    {move || {
                        if is_recording() {
                            "Speak clearly and click to stop recording"
                        } else {
                            "Click the microphone to start recording"
                        }
                    }}
                </p>
            </div>

            <div>
                <button class="btn-secondary w-full" on:click=open_file_picker>
                    "Upload Audio File"
                </button>
                <input
                    node_ref=file_input
                    type="file"
                    accept="audio/*,.wav,.mp3"
                    class="hidden"
                    on:change=on_file_selected
                />
            </div>

            {move || {
                last_capture.get().map(|_| {
                    view! {
                        <div class="pt-4 border-t border-gray-700">
                            <button class="btn-secondary text-sm" on:click=play_last>
                                "Play Recording"
                            </button>
                        </div>
                    }
                })
            }}
        </div>
    }
}
