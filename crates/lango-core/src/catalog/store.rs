//! `LabelStore` — the ordered, read-only catalog of locale labels.
//!
//! Built once from a fixed identifier list and immutable thereafter, so a
//! shared reference can be read from any number of threads without
//! synchronisation.

use super::label::{Label, LabelFormat};

/// The identifier backing the constructed fallback entry when the input
/// list has no English (US) row.
const DEFAULT_LOCALE_ID: &str = "en_US";

/// Display roles a list frontend can request per row, mapped to entry
/// fields independently of any particular UI toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The localized display name ([`Label::label`]).
    Label,
    /// The English display name ([`Label::english_label`]).
    EnglishLabel,
}

impl Role {
    /// Every role, in presentation order.
    pub const ALL: [Role; 2] = [Role::Label, Role::EnglishLabel];

    /// Stable string name for the role, for frontends that key by name.
    pub fn name(self) -> &'static str {
        match self {
            Role::Label => "label",
            Role::EnglishLabel => "english_label",
        }
    }
}

pub struct LabelStore {
    entries: Vec<Label>,
    ids: Vec<String>,
    fallback: Label,
}

impl LabelStore {
    /// Build a store from an ordered list of locale identifiers, one entry
    /// per identifier, insertion order preserved. Never fails: identifiers
    /// that do not resolve get best-effort entries.
    pub fn new<I>(locales: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::with_format(locales, LabelFormat::WithCountry)
    }

    /// [`LabelStore::new`] with an explicit display-name format.
    pub fn with_format<I>(locales: I, format: LabelFormat) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut entries = Vec::new();
        let mut ids = Vec::new();
        for id in locales {
            let id = id.as_ref();
            entries.push(Label::new(id, format));
            ids.push(id.to_string());
        }

        let fallback = Self::select_fallback(&entries, format);
        Self {
            entries,
            ids,
            fallback,
        }
    }

    /// The out-of-range fallback: the first English entry with region
    /// absent or `US` (a bare `en` identifier means `en_US` in translation
    /// lists), else a constructed default entry.
    fn select_fallback(entries: &[Label], format: LabelFormat) -> Label {
        entries
            .iter()
            .find(|entry| {
                entry.locale().language() == "en"
                    && matches!(entry.locale().region(), None | Some("US"))
            })
            .cloned()
            .unwrap_or_else(|| Label::new(DEFAULT_LOCALE_ID, format))
    }

    /// Number of entries.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Strict row accessor: `None` when `row` is out of range. Prefer this
    /// for new call sites.
    pub fn get(&self, row: usize) -> Option<&Label> {
        self.entries.get(row)
    }

    /// Lenient row accessor backing list-style presentation.
    ///
    /// **Out-of-range policy**: any `row` outside `[0, count())`, negative
    /// values included, returns the designated fallback entry (the
    /// English (US) row if present, else a constructed `en_US` entry)
    /// instead of failing. This keeps display code total but masks bad row
    /// arithmetic in callers; use [`LabelStore::get`] where an out-of-range
    /// row should be detected.
    pub fn entry_at(&self, row: isize) -> &Label {
        usize::try_from(row)
            .ok()
            .and_then(|row| self.entries.get(row))
            .unwrap_or(&self.fallback)
    }

    /// The backing identifier list, same order as the entries.
    pub fn locale_ids(&self) -> &[String] {
        &self.ids
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[Label] {
        &self.entries
    }

    /// Role-keyed accessor for list frontends. Follows the
    /// [`LabelStore::entry_at`] out-of-range policy.
    pub fn data(&self, row: isize, role: Role) -> &str {
        let entry = self.entry_at(row);
        match role {
            Role::Label => entry.label(),
            Role::EnglishLabel => entry.english_label(),
        }
    }

    pub(super) fn find_position<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&Label) -> bool,
    {
        self.entries.iter().position(|entry| predicate(entry))
    }
}
