//! Structured locale descriptors.
//!
//! Wraps `unic_langid::LanguageIdentifier` and accepts the POSIX-style
//! identifiers found in installer translation lists (`en_US`,
//! `pt_BR.UTF-8`, `sr@latin`), normalising them to BCP-47 before parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use unic_langid::{langid, LanguageIdentifier};

use crate::error::LocaleError;

/// A language/script/region descriptor for one catalog entry.
///
/// Derived equality is full identifier equality (script and variants
/// included); catalog lookups use [`Locale::matches`], which compares
/// language and region only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(LanguageIdentifier);

impl Locale {
    /// Parse a locale identifier.
    ///
    /// Accepts both BCP-47 (`en-US`) and POSIX (`en_US`, `en_US.UTF-8`,
    /// `sr@latin`) spellings. The codeset suffix is dropped; `@latin` and
    /// `@cyrillic` modifiers become script subtags and other modifiers are
    /// carried as variants (`ca@valencia` → `ca-valencia`).
    pub fn parse(id: &str) -> Result<Self, LocaleError> {
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(LocaleError::Empty);
        }

        let normalized = normalize_identifier(trimmed);
        LanguageIdentifier::from_str(&normalized)
            .map(Self)
            .map_err(|err| LocaleError::Invalid {
                id: id.to_string(),
                message: err.to_string(),
            })
    }

    /// The undetermined locale (`und`), used for best-effort entries built
    /// from identifiers that do not parse.
    pub fn undetermined() -> Self {
        Self(LanguageIdentifier::default())
    }

    /// ISO 639 language code, lowercase (`"en"`).
    pub fn language(&self) -> &str {
        self.0.language.as_str()
    }

    /// ISO 15924 script code, title-case (`"Latn"`), if the identifier
    /// carries one.
    pub fn script(&self) -> Option<&str> {
        self.0.script.as_ref().map(|s| s.as_str())
    }

    /// ISO 3166-1 alpha-2 country code, uppercase (`"US"`), if the
    /// identifier carries one.
    pub fn region(&self) -> Option<&str> {
        self.0.region.as_ref().map(|r| r.as_str())
    }

    /// Locale equality as the catalog defines it: same language and same
    /// region. Script and variants do not participate.
    pub fn matches(&self, other: &Self) -> bool {
        self.0.language == other.0.language && self.0.region == other.0.region
    }
}

/// The designated default locale, `en-US`. Out-of-range catalog lookups
/// resolve to an entry for this locale.
impl Default for Locale {
    fn default() -> Self {
        Self(langid!("en-US"))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

/// Rewrite a POSIX-flavoured identifier into BCP-47 form. Purely textual;
/// the result still has to survive `LanguageIdentifier` parsing.
fn normalize_identifier(id: &str) -> String {
    // "en_US.UTF-8" — everything after the dot is a codeset, not locale data.
    let id = id.split('.').next().unwrap_or(id);

    let (base, modifier) = match id.split_once('@') {
        Some((base, modifier)) => (base, Some(modifier.to_ascii_lowercase())),
        None => (id, None),
    };

    let mut out = base.replace('_', "-");
    match modifier.as_deref() {
        Some("latin") => out.push_str("-Latn"),
        Some("cyrillic") => out.push_str("-Cyrl"),
        // Other modifiers ride along as BCP-47 variants ("@valencia").
        Some(m) if !m.is_empty() => {
            out.push('-');
            out.push_str(m);
        }
        _ => {}
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_posix_and_bcp47_spellings() {
        let posix = Locale::parse("en_US").expect("en_US should parse");
        let bcp47 = Locale::parse("en-US").expect("en-US should parse");
        assert_eq!(posix, bcp47);
        assert_eq!(posix.language(), "en");
        assert_eq!(posix.region(), Some("US"));
        assert_eq!(posix.to_string(), "en-US");
    }

    #[test]
    fn drops_codeset_suffix() {
        let locale = Locale::parse("pt_BR.UTF-8").expect("pt_BR.UTF-8 should parse");
        assert_eq!(locale.language(), "pt");
        assert_eq!(locale.region(), Some("BR"));
    }

    #[test]
    fn latin_modifier_becomes_script() {
        let locale = Locale::parse("sr@latin").expect("sr@latin should parse");
        assert_eq!(locale.language(), "sr");
        assert_eq!(locale.script(), Some("Latn"));
        assert_eq!(locale.region(), None);
        assert_eq!(locale.to_string(), "sr-Latn");
    }

    #[test]
    fn other_modifier_becomes_variant() {
        let locale = Locale::parse("ca@valencia").expect("ca@valencia should parse");
        assert_eq!(locale.language(), "ca");
        assert_eq!(locale.to_string(), "ca-valencia");
    }

    #[test]
    fn language_only_identifier_has_no_region() {
        let locale = Locale::parse("de").expect("de should parse");
        assert_eq!(locale.language(), "de");
        assert_eq!(locale.region(), None);
        assert_eq!(locale.script(), None);
    }

    #[test]
    fn empty_identifier_is_rejected() {
        assert!(matches!(Locale::parse(""), Err(LocaleError::Empty)));
        assert!(matches!(Locale::parse("   "), Err(LocaleError::Empty)));
    }

    #[test]
    fn garbage_identifier_is_rejected() {
        assert!(matches!(
            Locale::parse("not a locale"),
            Err(LocaleError::Invalid { .. })
        ));
    }

    #[test]
    fn matches_compares_language_and_region_only() {
        let sr = Locale::parse("sr").expect("sr should parse");
        let sr_latin = Locale::parse("sr@latin").expect("sr@latin should parse");
        let sr_rs = Locale::parse("sr_RS").expect("sr_RS should parse");

        // Script is excluded from match semantics.
        assert!(sr.matches(&sr_latin));
        // Region differences are not.
        assert!(!sr.matches(&sr_rs));
        assert_ne!(sr, sr_latin);
    }

    #[test]
    fn default_locale_is_en_us() {
        let default = Locale::default();
        assert_eq!(default.language(), "en");
        assert_eq!(default.region(), Some("US"));
    }

    #[test]
    fn serializes_as_canonical_string() {
        let locale = Locale::parse("zh_CN").expect("zh_CN should parse");
        let json = serde_json::to_string(&locale).expect("locale should serialize");
        assert_eq!(json, "\"zh-CN\"");
    }
}
