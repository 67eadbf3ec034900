use alloc::string::String;

use serde::Serialize;

use crate::channel::{Channel, ChannelId};
use crate::error::Result;

/// Counter record of one distinct word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    text: String,
    count: u64,
    channel: Channel,
}

impl Word {
    /// Copies `text` into a fresh allocation sized to fit it.
    pub(crate) fn try_new(text: &str, count: u64, channel: Channel) -> Result<Self> {
        let mut owned = String::new();
        owned.try_reserve_exact(text.len())?;
        owned.push_str(text);
        Ok(Self {
            text: owned,
            count,
            channel,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    #[must_use]
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    /// Records one more occurrence in `channel`.
    pub(crate) fn hit(&mut self, channel: ChannelId) {
        self.count = self.count.saturating_add(1);
        self.channel = self.channel.advance(channel);
    }
}
