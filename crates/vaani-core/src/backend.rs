use futures::future::{self, LocalBoxFuture};

use crate::audio::AudioPayload;
use crate::error::BackendError;
use crate::language::{Language, TranslationMap};

/// The integration seam toward a real speech-recognition + translation
/// service: one async call per capture cycle, producing a full map or
/// failing. The demo app layers a fixed delay over [`FixedTranslations`];
/// tests use [`FixedTranslations`] directly.
pub trait TranslationBackend {
    fn translate(
        &self,
        payload: AudioPayload,
        targets: &'static [Language],
    ) -> LocalBoxFuture<'static, Result<TranslationMap, BackendError>>;
}

/// The seam toward a text-to-speech service, one call per card playback.
pub trait SpeechBackend {
    fn synthesize(
        &self,
        text: &str,
        language_code: &str,
    ) -> LocalBoxFuture<'static, Result<AudioPayload, BackendError>>;
}

/// "Hello, how are you?" in each target language.
const DEMO_PHRASES: &[(&str, &str)] = &[
    ("ru", "\u{41f}\u{440}\u{438}\u{432}\u{435}\u{442}, \u{43a}\u{430}\u{43a} \u{434}\u{435}\u{43b}\u{430}?"),
    ("tr", "Merhaba, nas\u{131}ls\u{131}n?"),
    ("sv", "Hej, hur m\u{e5}r du?"),
    ("de", "Hallo, wie geht es dir?"),
    ("es", "Hola, \u{bf}c\u{f3}mo est\u{e1}s?"),
    ("ja", "\u{3053}\u{3093}\u{306b}\u{3061}\u{306f}\u{3001}\u{5143}\u{6c17}\u{3067}\u{3059}\u{304b}\u{ff1f}"),
];

pub fn demo_phrase(code: &str) -> Option<&'static str> {
    DEMO_PHRASES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, text)| *text)
}

/// Fixed-data backend: resolves immediately with the demo phrase table for
/// the requested languages. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedTranslations;

impl TranslationBackend for FixedTranslations {
    fn translate(
        &self,
        _payload: AudioPayload,
        targets: &'static [Language],
    ) -> LocalBoxFuture<'static, Result<TranslationMap, BackendError>> {
        let map = TranslationMap::from_pairs(
            targets
                .iter()
                .filter_map(|lang| demo_phrase(lang.code).map(|text| (lang.code, text))),
        );
        Box::pin(future::ready(Ok(map)))
    }
}

impl SpeechBackend for FixedTranslations {
    fn synthesize(
        &self,
        _text: &str,
        _language_code: &str,
    ) -> LocalBoxFuture<'static, Result<AudioPayload, BackendError>> {
        Box::pin(future::ready(Ok(AudioPayload::default())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::TARGET_LANGUAGES;
    use futures::executor::block_on;

    #[test]
    fn fixed_backend_covers_every_target_language() {
        let map = block_on(
            FixedTranslations.translate(AudioPayload::default(), &TARGET_LANGUAGES),
        )
        .unwrap();
        assert_eq!(map.len(), TARGET_LANGUAGES.len());
        for lang in &TARGET_LANGUAGES {
            assert_eq!(map.get(lang.code), demo_phrase(lang.code));
        }
    }

    #[test]
    fn fixed_backend_drives_a_full_cycle() {
        let mut session = crate::Session::new();
        let cycle = session.begin_cycle();
        let result = block_on(
            FixedTranslations.translate(AudioPayload::default(), &TARGET_LANGUAGES),
        );
        assert_eq!(
            session.complete_cycle(cycle, result),
            crate::CycleOutcome::Applied
        );
        assert_eq!(session.translation_for("de"), Some("Hallo, wie geht es dir?"));
    }
}
