// crates/cli/src/config.rs
use crate::args::Args;
use crate::options::{ColorChoice, OutputFormat};
use std::num::NonZeroUsize;
use xwc_core::{Collation, SortOrder, TokenizerOptions};
pub use xwc_engine::config::{Config, ConfigBuilder, STDIN_FILTER_NAME};
use xwc_engine::source::InputSource;

/// Options that only affect how results are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresentationOptions {
    pub format: OutputFormat,
    pub color: ColorChoice,
}

impl From<&Args> for PresentationOptions {
    fn from(args: &Args) -> Self {
        Self {
            format: args.format,
            color: args.color,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let collation = args
            .collate
            .clone()
            .map_or(Collation::Ordinal, Collation::Locale);
        let sort = SortOrder::new(args.sort_key().into(), args.reverse).with_collation(collation);

        // 入力が指定されなければ標準入力をひとつ読む
        let inputs = if args.files.is_empty() {
            vec![InputSource::stdin(stdin_name(0))]
        } else {
            args.files
                .iter()
                .enumerate()
                .map(|(i, f)| InputSource::from_arg(f, &stdin_name(i)))
                .collect()
        };

        let filter = args
            .restrict
            .as_deref()
            .map(|r| InputSource::from_arg(r, STDIN_FILTER_NAME));

        Self {
            inputs,
            filter,
            tokenizer: TokenizerOptions {
                max_word_len: NonZeroUsize::new(args.limit),
                punctuation_as_space: args.punctuation_as_space,
            },
            sort,
        }
    }
}

fn stdin_name(index: usize) -> String {
    format!("#{}", index + 1)
}
