use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, BlobEvent, BlobPropertyBag, DomException, MediaRecorder, MediaStream,
    MediaStreamConstraints,
};

use futures::channel::oneshot;
use vaani_core::{AudioPayload, CaptureError};

thread_local! {
    static RECORDER: RefCell<Option<MediaRecorder>> = RefCell::new(None);
    static MEDIA_STREAM: RefCell<Option<MediaStream>> = RefCell::new(None);
    static CHUNKS: RefCell<Vec<Blob>> = RefCell::new(Vec::new());
}

/// Acquire the microphone and start buffering audio chunks. On any failure
/// the stream (if already acquired) is torn down before returning.
pub async fn start_recording() -> Result<(), CaptureError> {
    let window = web_sys::window().ok_or(CaptureError::DeviceUnavailable)?;
    let media_devices = window
        .navigator()
        .media_devices()
        .map_err(|_| CaptureError::DeviceUnavailable)?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::TRUE);
    constraints.set_video(&JsValue::FALSE);

    let stream_promise = media_devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|_| CaptureError::DeviceUnavailable)?;

    let stream_js = JsFuture::from(stream_promise)
        .await
        .map_err(classify_get_user_media_error)?;
    let stream: MediaStream = stream_js
        .dyn_into()
        .map_err(|_| CaptureError::DeviceUnavailable)?;

    let recorder = match MediaRecorder::new_with_media_stream(&stream) {
        Ok(recorder) => recorder,
        Err(err) => {
            log::error!("MediaRecorder creation failed: {err:?}");
            stop_tracks(&stream);
            return Err(CaptureError::DeviceUnavailable);
        }
    };

    CHUNKS.with(|c| c.borrow_mut().clear());
    let ondataavailable = Closure::wrap(Box::new(move |event: BlobEvent| {
        if let Some(blob) = event.data() {
            CHUNKS.with(|c| c.borrow_mut().push(blob));
        }
    }) as Box<dyn FnMut(BlobEvent)>);
    recorder.set_ondataavailable(Some(ondataavailable.as_ref().unchecked_ref()));
    ondataavailable.forget();

    if let Err(err) = recorder.start() {
        log::error!("MediaRecorder start failed: {err:?}");
        stop_tracks(&stream);
        return Err(CaptureError::DeviceUnavailable);
    }

    RECORDER.with(|r| *r.borrow_mut() = Some(recorder));
    MEDIA_STREAM.with(|m| *m.borrow_mut() = Some(stream));

    Ok(())
}

/// Stop the active recorder, wait for its final chunk, and assemble the
/// buffered chunks into a single payload. The microphone tracks are stopped
/// on every exit path so the device lock never leaks.
pub async fn stop_recording() -> Result<AudioPayload, String> {
    let recorder = RECORDER
        .with(|r| r.borrow_mut().take())
        .ok_or("No recording in progress")?;
    let stream = MEDIA_STREAM.with(|m| m.borrow_mut().take());

    let result = drain_recorder(recorder).await;

    if let Some(stream) = stream {
        stop_tracks(&stream);
    }

    result
}

async fn drain_recorder(recorder: MediaRecorder) -> Result<AudioPayload, String> {
    let (tx, rx) = oneshot::channel::<()>();
    let onstop = Closure::once_into_js(move || {
        let _ = tx.send(());
    });
    recorder.set_onstop(Some(onstop.unchecked_ref()));

    recorder.stop().map_err(|e| format!("stop failed: {e:?}"))?;
    rx.await
        .map_err(|_| "recorder never delivered its stop event".to_string())?;

    let mime = recorder.mime_type();
    assemble_payload(mime).await
}

async fn assemble_payload(mime: String) -> Result<AudioPayload, String> {
    let parts = js_sys::Array::new();
    CHUNKS.with(|c| {
        for blob in c.borrow_mut().drain(..) {
            parts.push(&blob);
        }
    });
    if parts.length() == 0 {
        return Err("no audio was captured".to_string());
    }

    let mime = if mime.is_empty() {
        "audio/webm".to_string()
    } else {
        mime
    };
    let options = BlobPropertyBag::new();
    options.set_type(&mime);
    let blob = Blob::new_with_blob_sequence_and_options(&parts, &options)
        .map_err(|e| format!("blob assembly failed: {e:?}"))?;

    let buffer = JsFuture::from(blob.array_buffer())
        .await
        .map_err(|e| format!("could not read captured audio: {e:?}"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    Ok(AudioPayload::new(bytes, mime))
}

/// Read an uploaded file into bytes for the orchestrator.
pub async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("could not read file: {e:?}"))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

fn classify_get_user_media_error(err: JsValue) -> CaptureError {
    let name = err
        .dyn_ref::<DomException>()
        .map(|e| e.name())
        .unwrap_or_default();
    log::error!("getUserMedia failed: {name} ({err:?})");
    match name.as_str() {
        "NotAllowedError" | "SecurityError" => CaptureError::PermissionDenied,
        _ => CaptureError::DeviceUnavailable,
    }
}

fn stop_tracks(stream: &MediaStream) {
    let tracks = stream.get_tracks();
    for i in 0..tracks.length() {
        let track = tracks.get(i);
        if !track.is_undefined() && !track.is_null() {
            let track: web_sys::MediaStreamTrack = track.unchecked_into();
            track.stop();
        }
    }
}
