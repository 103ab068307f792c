use serde::{Deserialize, Serialize};

use crate::error::BackendError;
use crate::language::TranslationMap;

/// Coarse state of the page interaction. Exactly one value is active at a
/// time; the `Session` owns all transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Recording,
    Processing,
    ResultsReady,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Recording => "Recording",
            Self::Processing => "Translating\u{2026}",
            Self::ResultsReady => "Ready",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Idle => "badge bg-gray-100 dark:bg-gray-800 text-gray-600 dark:text-gray-400",
            Self::Recording => "badge-error",
            Self::Processing => "badge-loading",
            Self::ResultsReady => "badge-ready",
        }
    }
}

/// Identifies one processing cycle. Completions carry the id of the cycle
/// they belong to so a superseded cycle can never overwrite newer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The results were swapped in; phase is ResultsReady.
    Applied,
    /// The backend failed; phase reverted to Idle, map left empty.
    Failed(BackendError),
    /// The completion belonged to a superseded cycle and was discarded.
    Stale,
}

/// The page-level interaction state machine: phase plus the translation
/// results of the current cycle. Purely synchronous; the async backend call
/// lives outside and re-enters through [`Session::complete_cycle`] with the
/// [`CycleId`] it was started under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    phase: Phase,
    translations: TranslationMap,
    cycle: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            translations: TranslationMap::new(),
            cycle: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn translations(&self) -> &TranslationMap {
        &self.translations
    }

    /// Text for one language card, `None` while its code is absent from the
    /// map. Cards fall back to a placeholder on `None`, never a stale string.
    pub fn translation_for(&self, code: &str) -> Option<&str> {
        self.translations.get(code)
    }

    pub fn is_processing(&self) -> bool {
        self.phase == Phase::Processing
    }

    /// The microphone was acquired and buffering started.
    pub fn recording_started(&mut self) {
        self.phase = Phase::Recording;
    }

    /// Recording ended without producing a payload (capture error after the
    /// device was already held). Results from any earlier cycle are kept.
    pub fn abort_recording(&mut self) {
        if self.phase == Phase::Recording {
            self.phase = if self.translations.is_empty() {
                Phase::Idle
            } else {
                Phase::ResultsReady
            };
        }
    }

    /// A payload arrived: clear the previous results and enter Processing.
    /// Starting a new cycle implicitly supersedes any cycle still in flight.
    pub fn begin_cycle(&mut self) -> CycleId {
        self.translations.clear();
        self.phase = Phase::Processing;
        self.cycle += 1;
        CycleId(self.cycle)
    }

    /// Deliver the result of the backend call started under `id`. Completions
    /// for any cycle other than the current one, or arriving after the phase
    /// left Processing, are discarded without touching state.
    pub fn complete_cycle(
        &mut self,
        id: CycleId,
        result: Result<TranslationMap, BackendError>,
    ) -> CycleOutcome {
        if id.0 != self.cycle || self.phase != Phase::Processing {
            log::debug!("discarding completion for superseded cycle {}", id.0);
            return CycleOutcome::Stale;
        }
        match result {
            Ok(map) => {
                self.translations = map;
                self.phase = Phase::ResultsReady;
                CycleOutcome::Applied
            }
            Err(err) => {
                log::warn!("translation cycle {} failed: {err}", id.0);
                self.translations.clear();
                self.phase = Phase::Idle;
                CycleOutcome::Failed(err)
            }
        }
    }
}

/// Whether a card's play button is enabled: text present, not already
/// playing, and no processing cycle in flight.
pub fn can_play(text: Option<&str>, is_playing: bool, processing: bool) -> bool {
    text.is_some_and(|t| !t.is_empty()) && !is_playing && !processing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::TARGET_LANGUAGES;

    fn full_map() -> TranslationMap {
        TranslationMap::from_pairs(
            TARGET_LANGUAGES
                .iter()
                .map(|lang| (lang.code, format!("hello in {}", lang.name))),
        )
    }

    #[test]
    fn record_flow_walks_all_phases() {
        let mut session = Session::new();
        assert_eq!(session.phase(), Phase::Idle);

        session.recording_started();
        assert_eq!(session.phase(), Phase::Recording);

        let cycle = session.begin_cycle();
        assert_eq!(session.phase(), Phase::Processing);
        assert!(session.translations().is_empty());

        let outcome = session.complete_cycle(cycle, Ok(full_map()));
        assert_eq!(outcome, CycleOutcome::Applied);
        assert_eq!(session.phase(), Phase::ResultsReady);

        let mut codes: Vec<_> = session.translations().codes().collect();
        codes.sort_unstable();
        let mut expected: Vec<_> = TARGET_LANGUAGES.iter().map(|l| l.code).collect();
        expected.sort_unstable();
        assert_eq!(codes, expected);
    }

    #[test]
    fn map_stays_empty_until_completion() {
        let mut session = Session::new();
        let first = session.begin_cycle();
        session.complete_cycle(first, Ok(full_map()));
        assert!(!session.translations().is_empty());

        // New cycle clears the previous results immediately.
        let _second = session.begin_cycle();
        assert!(session.translations().is_empty());
        assert_eq!(session.phase(), Phase::Processing);
    }

    #[test]
    fn superseded_cycle_never_wins() {
        let mut session = Session::new();
        let first = session.begin_cycle();
        let second = session.begin_cycle();

        let stale = session.complete_cycle(
            first,
            Ok(TranslationMap::from_pairs([("ru", "stale text")])),
        );
        assert_eq!(stale, CycleOutcome::Stale);
        assert!(session.translations().is_empty());
        assert_eq!(session.phase(), Phase::Processing);

        let outcome = session.complete_cycle(second, Ok(full_map()));
        assert_eq!(outcome, CycleOutcome::Applied);
        assert_eq!(session.translation_for("ru"), Some("hello in Russian"));
    }

    #[test]
    fn duplicate_completion_is_stale() {
        let mut session = Session::new();
        let cycle = session.begin_cycle();
        assert_eq!(session.complete_cycle(cycle, Ok(full_map())), CycleOutcome::Applied);
        assert_eq!(
            session.complete_cycle(cycle, Ok(TranslationMap::from_pairs([("ru", "again")]))),
            CycleOutcome::Stale
        );
        assert_eq!(session.translation_for("ru"), Some("hello in Russian"));
    }

    #[test]
    fn backend_failure_reverts_to_idle() {
        let mut session = Session::new();
        let cycle = session.begin_cycle();
        let outcome =
            session.complete_cycle(cycle, Err(BackendError("service unreachable".into())));
        assert_eq!(
            outcome,
            CycleOutcome::Failed(BackendError("service unreachable".into()))
        );
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.translations().is_empty());
    }

    #[test]
    fn abort_recording_restores_prior_phase() {
        let mut session = Session::new();
        session.recording_started();
        session.abort_recording();
        assert_eq!(session.phase(), Phase::Idle);

        let cycle = session.begin_cycle();
        session.complete_cycle(cycle, Ok(full_map()));
        session.recording_started();
        session.abort_recording();
        assert_eq!(session.phase(), Phase::ResultsReady);
    }

    #[test]
    fn play_button_enablement() {
        assert!(can_play(Some("Hallo"), false, false));
        assert!(!can_play(None, false, false));
        assert!(!can_play(Some(""), false, false));
        assert!(!can_play(Some("Hallo"), true, false));
        assert!(!can_play(Some("Hallo"), false, true));
    }
}
