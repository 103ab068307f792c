/// One captured or uploaded audio sample. Opaque to everything downstream
/// of capture; consumed once per processing cycle, optionally kept around
/// for local replay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioPayload {
    pub bytes: Vec<u8>,
    pub mime: String,
}

impl AudioPayload {
    pub fn new(bytes: Vec<u8>, mime: impl Into<String>) -> Self {
        Self {
            bytes,
            mime: mime.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

const AUDIO_EXTENSIONS: &[&str] = &[".wav", ".mp3"];

/// Whether an uploaded file looks like audio: either its declared MIME type
/// mentions audio, or its name carries a known audio extension. Mirrors the
/// `accept="audio/*,.wav,.mp3"` filter on the upload input.
pub fn accepts_upload(content_type: &str, file_name: &str) -> bool {
    if content_type.to_ascii_lowercase().contains("audio") {
        return true;
    }
    let name = file_name.to_ascii_lowercase();
    AUDIO_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_audio_mime_types() {
        assert!(accepts_upload("audio/mpeg", "speech.bin"));
        assert!(accepts_upload("audio/wav", "speech"));
        assert!(accepts_upload("AUDIO/OGG", "clip"));
    }

    #[test]
    fn accepts_known_extensions_without_mime() {
        assert!(accepts_upload("", "recording.wav"));
        assert!(accepts_upload("application/octet-stream", "song.MP3"));
    }

    #[test]
    fn rejects_non_audio_files() {
        assert!(!accepts_upload("text/plain", "notes.txt"));
        assert!(!accepts_upload("image/png", "photo.png"));
        assert!(!accepts_upload("", "archive.wav.zip"));
    }
}
