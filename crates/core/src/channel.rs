//! Channel exclusivity tracking.
//!
//! Every input source is a channel. A word remembers whether it has been seen
//! in no channel yet, in exactly one, or in several. The raw integer encoding
//! keeps `UNDEFINED < MULTI < START`, ordinary channels counting up from
//! `START`.

use core::fmt;
use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Identifier of one ordinary input channel (always `>= START`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(NonZeroU32);

impl ChannelId {
    /// Raw value of the undefined channel.
    pub const UNDEFINED_RAW: i64 = -1;
    /// Raw value of the multiple-channel marker.
    pub const MULTI_RAW: i64 = Self::UNDEFINED_RAW + 1;
    /// Raw value of the first ordinary channel.
    pub const START_RAW: i64 = Self::MULTI_RAW + 1;

    pub const START: Self = Self(NonZeroU32::MIN);

    /// Returns the channel whose raw value is `raw`, if it is an ordinary one.
    #[must_use]
    pub const fn new(raw: u32) -> Option<Self> {
        match NonZeroU32::new(raw) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Channel of the `index`-th input source (0-based).
    ///
    /// Returns `None` when the channel number would not fit.
    #[must_use]
    pub fn nth(index: usize) -> Option<Self> {
        u32::try_from(index)
            .ok()
            .and_then(|i| Self::START.0.checked_add(i))
            .map(Self)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Position of this channel among the inputs (0 for `START`).
    #[must_use]
    pub const fn offset(self) -> usize {
        (self.0.get() - Self::START.0.get()) as usize
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Exclusivity state of a word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Not seen in any channel (filter-seeded words only).
    #[default]
    Undefined,
    /// Seen in exactly one channel.
    Single(ChannelId),
    /// Seen in at least two channels. Never left once entered.
    Multi,
}

impl Channel {
    /// Next state after one more occurrence in `incoming`.
    #[must_use]
    pub const fn advance(self, incoming: ChannelId) -> Self {
        match self {
            Self::Undefined => Self::Single(incoming),
            Self::Single(current) if current.get() == incoming.get() => self,
            Self::Single(_) | Self::Multi => Self::Multi,
        }
    }

    /// True only for words seen in exactly one channel.
    #[must_use]
    pub const fn is_exclusive(self) -> bool {
        matches!(self, Self::Single(_))
    }

    #[must_use]
    pub const fn single(self) -> Option<ChannelId> {
        match self {
            Self::Single(id) => Some(id),
            Self::Undefined | Self::Multi => None,
        }
    }

    /// Integer encoding: `-1` undefined, `0` multi, the channel number otherwise.
    #[must_use]
    pub const fn raw(self) -> i64 {
        match self {
            Self::Undefined => ChannelId::UNDEFINED_RAW,
            Self::Multi => ChannelId::MULTI_RAW,
            Self::Single(id) => id.get() as i64,
        }
    }

    /// Inverse of [`Channel::raw`]. Values below `UNDEFINED_RAW` or above
    /// `u32::MAX` are rejected.
    #[must_use]
    pub fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            ChannelId::UNDEFINED_RAW => Some(Self::Undefined),
            ChannelId::MULTI_RAW => Some(Self::Multi),
            _ => u32::try_from(raw).ok().and_then(ChannelId::new).map(Self::Single),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ch(n: u32) -> ChannelId {
        ChannelId::new(n).unwrap()
    }

    #[test]
    fn test_raw_ordering() {
        assert!(ChannelId::UNDEFINED_RAW < ChannelId::MULTI_RAW);
        assert!(ChannelId::MULTI_RAW < ChannelId::START_RAW);
        assert_eq!(i64::from(ChannelId::START.get()), ChannelId::START_RAW);
    }

    #[test]
    fn test_transitions() {
        let s = Channel::Undefined.advance(ch(2));
        assert_eq!(s, Channel::Single(ch(2)));
        assert_eq!(s.advance(ch(2)), Channel::Single(ch(2)));
        assert_eq!(s.advance(ch(1)), Channel::Multi);
        assert_eq!(Channel::Multi.advance(ch(1)), Channel::Multi);
    }

    #[test]
    fn test_nth_and_offset() {
        assert_eq!(ChannelId::nth(0), Some(ChannelId::START));
        assert_eq!(ChannelId::nth(3).map(ChannelId::get), Some(4));
        assert_eq!(ch(4).offset(), 3);
        assert_eq!(ChannelId::nth(u32::MAX as usize), None);
        assert_eq!(ChannelId::new(0), None);
    }

    #[test]
    fn test_raw_roundtrip_on_special_values() {
        assert_eq!(Channel::Undefined.raw(), -1);
        assert_eq!(Channel::Multi.raw(), 0);
        assert_eq!(Channel::Single(ch(7)).raw(), 7);
        assert_eq!(Channel::from_raw(-1), Some(Channel::Undefined));
        assert_eq!(Channel::from_raw(0), Some(Channel::Multi));
        assert_eq!(Channel::from_raw(5), Some(Channel::Single(ch(5))));
        assert_eq!(Channel::from_raw(-2), None);
    }

    #[test]
    fn test_exclusivity() {
        assert!(!Channel::Undefined.is_exclusive());
        assert!(!Channel::Multi.is_exclusive());
        assert!(Channel::Single(ch(1)).is_exclusive());
        assert_eq!(Channel::Single(ch(1)).single(), Some(ch(1)));
    }
}
