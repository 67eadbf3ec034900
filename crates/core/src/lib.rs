#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

extern crate alloc;

pub mod channel;
pub mod counter;
pub mod error;
pub mod holdall;
pub mod order;
pub mod tokenizer;
pub mod word;

pub use channel::{Channel, ChannelId};
pub use counter::WordCounter;
pub use error::{CapacityError, SortError};
pub use holdall::Holdall;
pub use order::{Collation, SortKey, SortOrder, WordOrdering};
pub use tokenizer::{TokenizeError, Tokenizer, TokenizerOptions};
pub use word::Word;
