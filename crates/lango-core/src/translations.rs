//! The bundled translation list and the process-wide shared catalog.

use std::sync::OnceLock;

use crate::catalog::LabelStore;

/// Locale identifiers for the translations bundled with this build, in
/// display order. The order is meaningful and stable: frontends present
/// rows exactly as listed here.
pub const BUNDLED_TRANSLATIONS: &[&str] = &[
    "ar",
    "ast",
    "be",
    "bg",
    "bn",
    "ca",
    "ca@valencia",
    "cs_CZ",
    "da",
    "de",
    "el",
    "en",
    "en_GB",
    "eo",
    "es",
    "es_MX",
    "et",
    "eu",
    "fa",
    "fi_FI",
    "fr",
    "gl",
    "he",
    "hi",
    "hr",
    "hu",
    "id",
    "is",
    "it_IT",
    "ja",
    "ko",
    "lt",
    "lv",
    "ml",
    "mr",
    "nb",
    "nl",
    "pl",
    "pt_BR",
    "pt_PT",
    "ro",
    "ru",
    "sk",
    "sl",
    "sq",
    "sr",
    "sr@latin",
    "sv",
    "th",
    "tr_TR",
    "uk",
    "vi",
    "zh_CN",
    "zh_TW",
];

static AVAILABLE_TRANSLATIONS: OnceLock<LabelStore> = OnceLock::new();

/// The shared catalog of every bundled translation.
///
/// Built on first use and immutable afterwards; every call returns the
/// same store, safe to read from any thread. Callers never get a mutable
/// reference.
pub fn available_translations() -> &'static LabelStore {
    AVAILABLE_TRANSLATIONS.get_or_init(|| LabelStore::new(BUNDLED_TRANSLATIONS.iter().copied()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_catalog_is_built_once() {
        let first = available_translations();
        let second = available_translations();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.count(), BUNDLED_TRANSLATIONS.len());
    }

    #[test]
    fn every_bundled_identifier_resolves() {
        use crate::locale::Locale;

        let store = available_translations();
        for (row, id) in BUNDLED_TRANSLATIONS.iter().enumerate() {
            let entry = store.entry_at(row as isize);
            assert_eq!(entry.id(), *id);
            // No bundled identifier should fall back to the raw-identifier
            // entry: they all parse and carry a display name.
            assert_ne!(entry.locale(), &Locale::undetermined(), "id {id}");
            assert_ne!(entry.label(), *id, "id {id}");
        }
    }

    #[test]
    fn bundled_identifiers_are_unique() {
        use std::collections::HashSet;

        let unique: HashSet<_> = BUNDLED_TRANSLATIONS.iter().collect();
        assert_eq!(unique.len(), BUNDLED_TRANSLATIONS.len());
    }
}
