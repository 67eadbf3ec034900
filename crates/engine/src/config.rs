// crates/engine/src/config.rs
use crate::source::InputSource;
use derive_builder::Builder;
use xwc_core::{SortOrder, TokenizerOptions};

/// Name given to standard input when it is read as a counted input.
pub const STDIN_INPUT_NAME: &str = "#1";

/// Name given to standard input when it is read as the filter.
pub const STDIN_FILTER_NAME: &str = "restrict";

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Counted inputs; the i-th one is channel `START + i`.
    #[builder(default = "vec![InputSource::stdin(STDIN_INPUT_NAME)]")]
    pub inputs: Vec<InputSource>,
    /// Words of this source are the only ones counted.
    #[builder(default)]
    pub filter: Option<InputSource>,
    #[builder(default)]
    pub tokenizer: TokenizerOptions,
    #[builder(default)]
    pub sort: SortOrder,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: vec![InputSource::stdin(STDIN_INPUT_NAME)],
            filter: None,
            tokenizer: TokenizerOptions::default(),
            sort: SortOrder::default(),
        }
    }
}

impl Config {
    #[must_use]
    pub const fn is_filtered(&self) -> bool {
        self.filter.is_some()
    }

    /// Number of inputs reading standard input, the filter included.
    #[must_use]
    pub fn stdin_reads(&self) -> usize {
        self.inputs
            .iter()
            .chain(self.filter.as_ref())
            .filter(|s| s.is_stdin())
            .count()
    }
}
