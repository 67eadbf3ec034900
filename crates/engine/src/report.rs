use crate::source::InputSource;
use xwc_core::{Word, WordCounter};

/// Everything a presentation layer needs once all inputs are consumed.
#[derive(Debug)]
pub struct Report {
    pub counter: WordCounter,
    pub inputs: Vec<InputSource>,
    pub filter: Option<InputSource>,
}

impl Report {
    /// Words to print, in final order.
    pub fn words(&self) -> impl Iterator<Item = &Word> + '_ {
        self.counter.reported()
    }

    /// Input a word is exclusive to, if any.
    #[must_use]
    pub fn input_of(&self, word: &Word) -> Option<&InputSource> {
        word.channel()
            .single()
            .and_then(|id| self.inputs.get(id.offset()))
    }
}
