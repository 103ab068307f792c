use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAudioElement, Url};

use vaani_core::AudioPayload;

/// Play a payload through a detached audio element. The object URL is
/// revoked once playback ends.
pub fn play_payload(payload: &AudioPayload) -> Result<(), String> {
    let array = js_sys::Uint8Array::from(payload.bytes.as_slice());
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let options = BlobPropertyBag::new();
    options.set_type(&payload.mime);
    let blob = Blob::new_with_buffer_source_sequence_and_options(&parts, &options)
        .map_err(|e| format!("{e:?}"))?;

    let url = Url::create_object_url_with_blob(&blob).map_err(|e| format!("{e:?}"))?;
    let audio = HtmlAudioElement::new_with_src(&url).map_err(|e| format!("{e:?}"))?;

    let onended = Closure::once_into_js(move || {
        let _ = Url::revoke_object_url(&url);
    });
    audio.set_onended(Some(onended.unchecked_ref()));

    let _ = audio.play().map_err(|e| format!("playback failed: {e:?}"))?;
    Ok(())
}
