//! Localization store for linotour.
//!
//! The localization document is a JSON object keyed by language code
//! (`pt-PT`, `en-GB`, ...), each value holding the UI string tree described by
//! [`UiStrings`]:
//!
//! ```json
//! { "pt-PT": { "main-title": "Itinerário", "home": { "title": "Início", "paragraphs": ["..."] } } }
//! ```
//!
//! The bundle is fetched once at startup and never mutated. Switching language
//! only selects another subtree; nothing is refetched.
//!
//! # Error Handling
//!
//! - A document that fails to load leaves the bundle empty (logged, no fallback content)
//! - Missing leaves inside a language deserialize to empty strings
//! - Requests for an unknown language return `None`; callers keep the current one

mod strings;

use std::collections::BTreeMap;

use serde::Deserialize;

pub use strings::{LocationStrings, MapStrings, PageStrings, SettingsStrings, UiStrings};

/// Read-only mapping from language code to its UI strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct LocalizationBundle {
    languages: BTreeMap<String, UiStrings>,
}

impl LocalizationBundle {
    /// What: Build a bundle from already-parsed language trees.
    ///
    /// Inputs:
    /// - `entries`: `(language code, strings)` pairs
    ///
    /// Output:
    /// - Bundle keyed by language code (later duplicates win)
    #[must_use]
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, UiStrings)>,
    {
        Self {
            languages: entries.into_iter().collect(),
        }
    }

    /// Strings for `language`, if the bundle carries it.
    #[must_use]
    pub fn get(&self, language: &str) -> Option<&UiStrings> {
        self.languages.get(language)
    }

    /// Whether `language` is present in the bundle.
    #[must_use]
    pub fn has_language(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    /// Available language codes in sorted order.
    #[must_use]
    pub fn languages(&self) -> Vec<String> {
        self.languages.keys().cloned().collect()
    }

    /// Whether nothing was loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// What: Check a locale code has the two-part `ll-RR` shape used by the documents.
///
/// Inputs:
/// - `code`: Candidate locale code
///
/// Output:
/// - `true` for codes such as `pt-PT` or `en-GB`
#[must_use]
pub fn is_valid_locale_code(code: &str) -> bool {
    let mut parts = code.split('-');
    let (Some(lang), Some(region), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    (2..=3).contains(&lang.len())
        && lang.chars().all(|c| c.is_ascii_lowercase())
        && region.len() == 2
        && region.chars().all(|c| c.is_ascii_uppercase())
}
