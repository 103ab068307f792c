use leptos::prelude::*;

use vaani_core::{AudioPayload, Session};

/// Shared reactive state, provided via context to every component. The
/// interaction state machine itself lives in `vaani_core::Session`; this
/// wrapper only makes it observable.
#[derive(Clone, Copy)]
pub struct AppState {
    pub session: RwSignal<Session>,
    pub error_message: RwSignal<Option<String>>,
    pub last_capture: RwSignal<Option<AudioPayload>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Session::new()),
            error_message: RwSignal::new(None),
            last_capture: RwSignal::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
