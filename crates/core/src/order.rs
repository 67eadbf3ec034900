//! Sort modes for the final word listing.

use core::cmp::Ordering;
use core::fmt;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use icu_locale_core::Locale;
use serde::{Deserialize, Serialize};

use crate::error::SortError;
use crate::word::Word;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Keep first-seen order.
    #[default]
    None,
    /// By word text, see [`Collation`].
    Lexical,
    /// By occurrence count.
    Numeric,
}

/// How word texts compare in a lexical sort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collation {
    /// Code point order: `"Zebra" < "apple"`.
    #[default]
    Ordinal,
    /// Collation rules of a locale (CLDR data).
    Locale(Locale),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    pub key: SortKey,
    pub reverse: bool,
    pub collation: Collation,
}

impl SortOrder {
    /// Order with ordinal collation.
    #[must_use]
    pub const fn new(key: SortKey, reverse: bool) -> Self {
        Self {
            key,
            reverse,
            collation: Collation::Ordinal,
        }
    }

    #[must_use]
    pub fn with_collation(mut self, collation: Collation) -> Self {
        self.collation = collation;
        self
    }

    /// Comparator for this order, or `None` when words keep first-seen order.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::Collation`] when no collation data can be loaded
    /// for the requested locale.
    pub fn comparator(&self) -> Result<Option<WordOrdering>, SortError> {
        let compare: fn(&Word, &Word) -> Ordering = match (self.key, self.reverse) {
            (SortKey::None, _) => return Ok(None),
            (SortKey::Lexical, reverse) => {
                if let Collation::Locale(locale) = &self.collation {
                    let collator =
                        Collator::try_new(locale.clone().into(), CollatorOptions::default())
                            .map_err(|_| SortError::Collation(locale.clone()))?;
                    return Ok(Some(WordOrdering::Collated { collator, reverse }));
                }
                if reverse {
                    compare_lexical_reverse
                } else {
                    compare_lexical
                }
            }
            (SortKey::Numeric, false) => compare_count,
            (SortKey::Numeric, true) => compare_count_reverse,
        };
        Ok(Some(WordOrdering::Fixed(compare)))
    }
}

/// A resolved comparator over [`Word`] records.
pub enum WordOrdering {
    Fixed(fn(&Word, &Word) -> Ordering),
    Collated {
        collator: CollatorBorrowed<'static>,
        reverse: bool,
    },
}

impl WordOrdering {
    #[must_use]
    pub fn compare(&self, a: &Word, b: &Word) -> Ordering {
        match self {
            Self::Fixed(compare) => compare(a, b),
            Self::Collated { collator, reverse } => {
                let ordering = collator.compare(a.text(), b.text());
                if *reverse { ordering.reverse() } else { ordering }
            }
        }
    }
}

impl fmt::Debug for WordOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(_) => f.write_str("WordOrdering::Fixed"),
            Self::Collated { reverse, .. } => f
                .debug_struct("WordOrdering::Collated")
                .field("reverse", reverse)
                .finish_non_exhaustive(),
        }
    }
}

#[must_use]
pub fn compare_count(a: &Word, b: &Word) -> Ordering {
    a.count().cmp(&b.count())
}

#[must_use]
pub fn compare_count_reverse(a: &Word, b: &Word) -> Ordering {
    b.count().cmp(&a.count())
}

#[must_use]
pub fn compare_lexical(a: &Word, b: &Word) -> Ordering {
    a.text().cmp(b.text())
}

#[must_use]
pub fn compare_lexical_reverse(a: &Word, b: &Word) -> Ordering {
    b.text().cmp(a.text())
}
