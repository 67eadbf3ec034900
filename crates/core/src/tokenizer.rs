//! Streaming word extraction.
//!
//! The tokenizer pulls characters one at a time from any fallible character
//! source and hands every complete word to a callback. Words are accumulated
//! in a [`WordBuffer`] that either grows without bound or, when a maximum
//! word length is configured, silently drops the characters past the limit.

use alloc::string::String;
use core::convert::Infallible;
use core::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{CapacityError, Result};

/// Initial buffer capacity (in characters) when no maximum length is set.
pub const BUFFER_MIN: usize = 16;

/// Growth factor of an unbounded buffer.
const BUFFER_MUL: usize = 2;

#[derive(Debug, Error)]
pub enum TokenizeError<R, C> {
    #[error(transparent)]
    Allocation(#[from] CapacityError),

    #[error("read failure: {0}")]
    Read(R),

    #[error("word consumer failed: {0}")]
    Callback(C),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerOptions {
    /// Words longer than this many characters are cut at this length.
    pub max_word_len: Option<NonZeroUsize>,
    /// Treat every character that is neither alphanumeric nor whitespace as a
    /// separator.
    pub punctuation_as_space: bool,
}

/// Whether `c` ends the current word.
#[must_use]
pub fn is_separator(c: char, punctuation_as_space: bool) -> bool {
    c.is_whitespace() || (punctuation_as_space && !c.is_alphanumeric())
}

/// Accumulator for the word being read.
///
/// Capacity is tracked in characters. An unbounded buffer starts at
/// [`BUFFER_MIN`] and doubles when full; a bounded one never grows and refuses
/// characters once full.
#[derive(Debug)]
pub struct WordBuffer {
    text: String,
    len: usize,
    capacity: usize,
    bounded: bool,
}

impl WordBuffer {
    /// # Errors
    ///
    /// Returns [`CapacityError`] if the initial storage cannot be allocated.
    pub fn new(max_len: Option<NonZeroUsize>) -> Result<Self> {
        let capacity = max_len.map_or(BUFFER_MIN, NonZeroUsize::get);
        let mut text = String::new();
        text.try_reserve(capacity)?;
        Ok(Self {
            text,
            len: 0,
            capacity,
            bounded: max_len.is_some(),
        })
    }

    /// Appends `c`. Returns `false` when the buffer is bounded and full, in
    /// which case `c` is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] when an unbounded buffer cannot grow; the
    /// buffer keeps its previous content.
    pub fn push(&mut self, c: char) -> Result<bool> {
        if self.len == self.capacity {
            if self.bounded {
                return Ok(false);
            }
            let grown = self
                .capacity
                .checked_mul(BUFFER_MUL)
                .ok_or(CapacityError::Overflow)?;
            self.text
                .try_reserve(grown.saturating_sub(self.text.len()))?;
            self.capacity = grown;
        }
        self.text.try_reserve(c.len_utf8())?;
        self.text.push(c);
        self.len += 1;
        Ok(true)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.len = 0;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    options: TokenizerOptions,
}

impl Tokenizer {
    #[must_use]
    pub const fn new(options: TokenizerOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> TokenizerOptions {
        self.options
    }

    /// Reads `chars` to the end and calls `on_word` for every word found.
    ///
    /// A trailing word without a separator after it is emitted too, unless the
    /// source failed: a read error is returned as soon as it is seen and the
    /// partial word is dropped.
    ///
    /// # Errors
    ///
    /// - [`TokenizeError::Read`] when the source yields an error.
    /// - [`TokenizeError::Callback`] when `on_word` fails; reading stops.
    /// - [`TokenizeError::Allocation`] when the word buffer cannot grow.
    pub fn tokenize<I, R, C, F>(
        &self,
        chars: I,
        mut on_word: F,
    ) -> core::result::Result<(), TokenizeError<R, C>>
    where
        I: IntoIterator<Item = core::result::Result<char, R>>,
        F: FnMut(&str) -> core::result::Result<(), C>,
    {
        let mut buffer = WordBuffer::new(self.options.max_word_len)?;
        for next in chars {
            let c = next.map_err(TokenizeError::Read)?;
            if is_separator(c, self.options.punctuation_as_space) {
                if !buffer.is_empty() {
                    on_word(buffer.as_str()).map_err(TokenizeError::Callback)?;
                    buffer.clear();
                }
                continue;
            }
            buffer.push(c)?;
        }
        if !buffer.is_empty() {
            on_word(buffer.as_str()).map_err(TokenizeError::Callback)?;
        }
        Ok(())
    }

    /// [`Tokenizer::tokenize`] over an in-memory string.
    ///
    /// # Errors
    ///
    /// Same as [`Tokenizer::tokenize`], minus read failures.
    pub fn tokenize_str<C, F>(
        &self,
        input: &str,
        on_word: F,
    ) -> core::result::Result<(), TokenizeError<Infallible, C>>
    where
        F: FnMut(&str) -> core::result::Result<(), C>,
    {
        self.tokenize(input.chars().map(Ok), on_word)
    }
}
