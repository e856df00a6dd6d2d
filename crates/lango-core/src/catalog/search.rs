//! Search over the catalog.
//!
//! Every operation is a linear scan from the first entry to the last,
//! stopping at the first match, so results are deterministic and follow
//! store order. "Not found" is `None`.

use crate::locale::Locale;

use super::label::Label;
use super::store::LabelStore;

impl LabelStore {
    /// Row of the first entry satisfying `predicate`.
    pub fn find<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&Label) -> bool,
    {
        self.find_position(predicate)
    }

    /// Row of the first entry whose descriptor satisfies `predicate`.
    pub fn find_by_locale<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&Locale) -> bool,
    {
        self.find_position(|entry| predicate(entry.locale()))
    }

    /// Row of the first entry whose descriptor matches `target`: same
    /// language and same region (see [`Locale::matches`]).
    pub fn find_locale(&self, target: &Locale) -> Option<usize> {
        self.find_by_locale(|locale| locale.matches(target))
    }

    /// Row of the best entry for a 2-letter country code, case-insensitive.
    ///
    /// "Best" is the first entry in store order whose region equals the
    /// code; there is no secondary ranking. Input that is not exactly two
    /// ASCII letters finds nothing.
    pub fn find_country_code(&self, code: &str) -> Option<usize> {
        if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
            return None;
        }
        let code = code.to_ascii_uppercase();
        self.find_by_locale(|locale| locale.region() == Some(code.as_str()))
    }

    /// Whether the catalog carries an entry matching `target`.
    pub fn contains_locale(&self, target: &Locale) -> bool {
        self.find_locale(target).is_some()
    }
}
