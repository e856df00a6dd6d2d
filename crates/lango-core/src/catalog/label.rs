//! Label entries: one locale's display metadata.

use serde::Serialize;

use crate::locale::Locale;
use crate::names;

/// Whether display names carry the country in parentheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelFormat {
    /// Append the country name whenever the identifier carries a region:
    /// `"English (United Kingdom)"`.
    WithCountry,
    /// Language name only, even when the identifier carries a region.
    LanguageOnly,
}

/// Display metadata for one locale: the identifier it was built from, a
/// localized display name, an English display name, and the parsed
/// descriptor used for search.
///
/// Entries are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    id: String,
    label: String,
    english_label: String,
    locale: Locale,
}

impl Label {
    /// Build the entry for a locale identifier. Never fails: an identifier
    /// that does not parse produces a best-effort entry whose display names
    /// are the raw identifier and whose descriptor is undetermined.
    pub fn new(id: &str, format: LabelFormat) -> Self {
        match Locale::parse(id) {
            Ok(locale) => Self::compose(id, locale, format),
            Err(err) => {
                tracing::warn!(id, error = %err, "unrecognized locale identifier, using raw identifier as label");
                Self {
                    id: id.to_string(),
                    label: id.to_string(),
                    english_label: id.to_string(),
                    locale: Locale::undetermined(),
                }
            }
        }
    }

    fn compose(id: &str, locale: Locale, format: LabelFormat) -> Self {
        let canonical = locale.to_string();
        if let Some((english, native)) = names::override_names(&canonical) {
            return Self {
                id: id.to_string(),
                label: native.to_string(),
                english_label: english.to_string(),
                locale,
            };
        }

        let (english_language, native_language) = match names::language_names(locale.language()) {
            Some(pair) => pair,
            None => {
                tracing::debug!(id, language = locale.language(), "no display name for language, using code");
                (locale.language(), locale.language())
            }
        };

        let country = match format {
            LabelFormat::WithCountry => locale
                .region()
                .map(|region| names::country_name(region).unwrap_or(region)),
            LabelFormat::LanguageOnly => None,
        };

        let (label, english_label) = match country {
            // No native country-name table exists; the native label carries
            // the English country name. Worst offenders are overridden above.
            Some(country) => (
                format!("{native_language} ({country})"),
                format!("{english_language} ({country})"),
            ),
            None => (native_language.to_string(), english_language.to_string()),
        };

        Self {
            id: id.to_string(),
            label,
            english_label,
            locale,
        }
    }

    /// The identifier this entry was built from, verbatim.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Localized display name, e.g. `"Français (France)"`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// English display name, e.g. `"French (France)"`.
    pub fn english_label(&self) -> &str {
        &self.english_label
    }

    /// The parsed descriptor used for search and equality.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }
}
