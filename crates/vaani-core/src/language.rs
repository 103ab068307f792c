use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A target language for the demo. The set is fixed at compile time and
/// never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub name: &'static str,
    pub code: &'static str,
    pub flag: &'static str,
}

pub static TARGET_LANGUAGES: [Language; 6] = [
    Language { name: "Russian", code: "ru", flag: "\u{1F1F7}\u{1F1FA}" },
    Language { name: "Turkish", code: "tr", flag: "\u{1F1F9}\u{1F1F7}" },
    Language { name: "Swedish", code: "sv", flag: "\u{1F1F8}\u{1F1EA}" },
    Language { name: "German", code: "de", flag: "\u{1F1E9}\u{1F1EA}" },
    Language { name: "Spanish", code: "es", flag: "\u{1F1EA}\u{1F1F8}" },
    Language { name: "Japanese", code: "ja", flag: "\u{1F1EF}\u{1F1F5}" },
];

/// Language-code → translated-text results for one capture cycle. Populated
/// atomically by the session when a cycle succeeds, empty otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationMap {
    entries: BTreeMap<String, String>,
}

impl TranslationMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    pub fn insert(&mut self, code: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(code.into(), text.into());
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_languages_have_unique_codes() {
        let mut codes: Vec<_> = TARGET_LANGUAGES.iter().map(|l| l.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), TARGET_LANGUAGES.len());
    }

    #[test]
    fn map_lookup_and_clear() {
        let mut map = TranslationMap::from_pairs([("de", "Hallo"), ("es", "Hola")]);
        assert_eq!(map.get("de"), Some("Hallo"));
        assert_eq!(map.get("ja"), None);
        assert_eq!(map.len(), 2);

        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.get("de"), None);
    }
}
