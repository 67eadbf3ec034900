//! Word registry.
//!
//! `WordCounter` owns one [`Word`] record per distinct text. Records live in a
//! [`Holdall`] that keeps first-seen order; a hash index maps text to the
//! record's position without storing the text a second time.

use core::fmt;
use core::hash::BuildHasher;

use hashbrown::{DefaultHashBuilder, HashTable};

use crate::channel::{Channel, ChannelId};
use crate::error::{Result, SortError};
use crate::holdall::Holdall;
use crate::order::{SortOrder, WordOrdering};
use crate::word::Word;

pub struct WordCounter {
    words: Holdall<Word>,
    index: HashTable<usize>,
    hash_builder: DefaultHashBuilder,
    filtered: bool,
}

impl Default for WordCounter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl fmt::Debug for WordCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordCounter")
            .field("filtered", &self.filtered)
            .field("words", &self.words)
            .finish_non_exhaustive()
    }
}

fn rehash(hash_builder: &DefaultHashBuilder, words: &Holdall<Word>, pos: usize) -> u64 {
    words
        .get(pos)
        .map_or(0, |w| hash_builder.hash_one(w.text()))
}

impl WordCounter {
    /// Creates an empty counter. A `filtered` counter only ever counts words
    /// previously added with [`WordCounter::seed_filter_entry`].
    #[must_use]
    pub fn new(filtered: bool) -> Self {
        Self {
            words: Holdall::new(),
            index: HashTable::new(),
            hash_builder: DefaultHashBuilder::default(),
            filtered,
        }
    }

    #[must_use]
    pub const fn is_filtered(&self) -> bool {
        self.filtered
    }

    /// Number of distinct words known, including filter placeholders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn position(&self, hash: u64, text: &str) -> Option<usize> {
        self.index
            .find(hash, |&pos| self.words.get(pos).is_some_and(|w| w.text() == text))
            .copied()
    }

    #[must_use]
    pub fn lookup(&self, text: &str) -> Option<&Word> {
        let hash = self.hash_builder.hash_one(text);
        self.position(hash, text).and_then(|pos| self.words.get(pos))
    }

    /// Counts one occurrence of `text` in `channel`.
    ///
    /// Known words get their count incremented and their channel state
    /// advanced. Unknown words are ignored by a filtered counter and otherwise
    /// get a new record with a count of 1.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`](crate::error::CapacityError) if a new record
    /// cannot be stored; the counter is then unchanged.
    pub fn record_occurrence(&mut self, text: &str, channel: ChannelId) -> Result<()> {
        let hash = self.hash_builder.hash_one(text);
        if let Some(pos) = self.position(hash, text) {
            if let Some(word) = self.words.get_mut(pos) {
                word.hit(channel);
            }
            return Ok(());
        }
        if self.filtered {
            return Ok(());
        }
        self.insert(hash, text, 1, Channel::Undefined.advance(channel))
    }

    /// Registers `text` as countable in a filtered counter, with a count of 0
    /// and no channel yet.
    ///
    /// Has no effect on an unfiltered counter or on a word already known.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`](crate::error::CapacityError) if the record
    /// cannot be stored; the counter is then unchanged.
    pub fn seed_filter_entry(&mut self, text: &str) -> Result<()> {
        if !self.filtered {
            return Ok(());
        }
        let hash = self.hash_builder.hash_one(text);
        if self.position(hash, text).is_some() {
            return Ok(());
        }
        self.insert(hash, text, 0, Channel::Undefined)
    }

    fn insert(&mut self, hash: u64, text: &str, count: u64, channel: Channel) -> Result<()> {
        let Self {
            words,
            index,
            hash_builder,
            ..
        } = self;
        // Reserve everything before committing so a failure leaves no trace.
        words.reserve_one()?;
        index.try_reserve(1, |&pos| rehash(hash_builder, words, pos))?;
        let word = Word::try_new(text, count, channel)?;
        let pos = words.count();
        words.put(word)?;
        index.insert_unique(hash, pos, |&pos| rehash(hash_builder, words, pos));
        Ok(())
    }

    /// Reorders the records. `SortKey::None` keeps first-seen order.
    ///
    /// # Errors
    ///
    /// [`SortError::Collation`] when the locale has no collation data,
    /// [`SortError::Capacity`] when the sort cannot get scratch space. The
    /// order is unchanged in both cases.
    pub fn sort(&mut self, order: &SortOrder) -> core::result::Result<(), SortError> {
        if let Some(ordering) = order.comparator()? {
            self.sort_by(&ordering)?;
        }
        Ok(())
    }

    /// Reorders the records with an already resolved comparator.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`](crate::error::CapacityError) when the sort
    /// cannot get scratch space; the order is then unchanged.
    pub fn sort_by(&mut self, ordering: &WordOrdering) -> Result<()> {
        self.words.sort_by(|a, b| ordering.compare(a, b))?;
        self.reindex();
        Ok(())
    }

    fn reindex(&mut self) {
        let Self {
            words,
            index,
            hash_builder,
            ..
        } = self;
        // clear() keeps the allocation, so re-inserting never grows the table.
        index.clear();
        for (pos, word) in words.iter().enumerate() {
            let hash = hash_builder.hash_one(word.text());
            index.insert_unique(hash, pos, |&p| rehash(hash_builder, words, p));
        }
    }

    /// Whether `word` belongs in the final listing: never when seen in several
    /// channels, and in a filtered counter only once seen in some channel.
    #[must_use]
    pub fn is_reported(&self, word: &Word) -> bool {
        match word.channel() {
            Channel::Multi => false,
            Channel::Undefined => !self.filtered,
            Channel::Single(_) => true,
        }
    }

    /// Records in current order.
    pub fn iter(&self) -> core::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Records that pass [`WordCounter::is_reported`], in current order.
    pub fn reported(&self) -> impl Iterator<Item = &Word> + '_ {
        self.words.iter().filter(|w| self.is_reported(w))
    }

    /// Calls `f` on every record in current order, stopping at the first `Err`.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `f`.
    pub fn apply<E, F>(&self, f: F) -> core::result::Result<(), E>
    where
        F: FnMut(&Word) -> core::result::Result<(), E>,
    {
        self.words.apply(f)
    }

    /// Releases every record together with the index.
    pub fn dispose(self) {
        drop(self);
    }
}

impl<'a> IntoIterator for &'a WordCounter {
    type Item = &'a Word;
    type IntoIter = core::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
