// crates/engine/src/lib.rs
use std::io::BufRead;

pub mod config;
pub mod error;
pub mod report;
pub mod source;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::report::Report;
use crate::source::{CharReader, InputSource};
use xwc_core::{ChannelId, TokenizeError, Tokenizer, WordCounter};

/// Hooks called around each source being read.
pub trait InputObserver {
    fn on_start(&mut self, _source: &InputSource) {}
    fn on_finish(&mut self, _source: &InputSource) {}
}

/// Observer that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl InputObserver for Silent {}

/// Run the counting engine without progress hooks.
///
/// # Errors
///
/// See [`run_with`].
pub fn run(config: &Config) -> Result<Report> {
    run_with(config, &mut Silent)
}

/// Seed the filter (if any), count every input in order, then sort.
///
/// # Errors
///
/// Stops at the first source that cannot be opened or read, when the
/// collation locale has no data, or when the counter cannot grow. The partially filled counter is dropped.
pub fn run_with<O: InputObserver>(config: &Config, observer: &mut O) -> Result<Report> {
    let tokenizer = Tokenizer::new(config.tokenizer);
    // Resolved up front so a locale without collation data fails before any
    // input is consumed.
    let ordering = config.sort.comparator()?;
    let mut counter = WordCounter::new(config.is_filtered());

    if let Some(filter) = &config.filter {
        observer.on_start(filter);
        let reader = filter.open()?;
        seed_filter(&mut counter, &tokenizer, reader, filter)?;
        observer.on_finish(filter);
        log::debug!("filter {filter}: {} words", counter.len());
        if counter.is_empty() {
            log::warn!("filter {filter} contains no words; nothing will be reported");
        }
    }

    for (i, input) in config.inputs.iter().enumerate() {
        let channel = ChannelId::nth(i)
            .ok_or_else(|| EngineError::Config(format!("too many inputs ({})", i + 1)))?;
        observer.on_start(input);
        let reader = input.open()?;
        let words = count_channel(&mut counter, &tokenizer, reader, input, channel)?;
        observer.on_finish(input);
        log::debug!(
            "channel {channel} ({input}): {words} words, {} distinct so far",
            counter.len()
        );
    }

    if let Some(ordering) = &ordering {
        log::debug!("sorting with {ordering:?}");
        counter.sort_by(ordering)?;
    }

    Ok(Report {
        counter,
        inputs: config.inputs.clone(),
        filter: config.filter.clone(),
    })
}

/// Counts every word of `reader` in `channel`. Returns the number of words
/// read.
///
/// # Errors
///
/// [`EngineError::Read`] on a read failure, [`EngineError::Capacity`] when a
/// record cannot be stored.
pub fn count_channel<R: BufRead>(
    counter: &mut WordCounter,
    tokenizer: &Tokenizer,
    reader: R,
    source: &InputSource,
    channel: ChannelId,
) -> Result<u64> {
    let mut words = 0u64;
    tokenizer
        .tokenize(CharReader::new(reader), |word| {
            words += 1;
            counter.record_occurrence(word, channel)
        })
        .map_err(|e| tokenize_error(e, source))?;
    Ok(words)
}

/// Adds every word of `reader` to the filter of `counter`.
///
/// # Errors
///
/// [`EngineError::Read`] on a read failure, [`EngineError::Capacity`] when a
/// record cannot be stored.
pub fn seed_filter<R: BufRead>(
    counter: &mut WordCounter,
    tokenizer: &Tokenizer,
    reader: R,
    source: &InputSource,
) -> Result<()> {
    tokenizer
        .tokenize(CharReader::new(reader), |word| {
            log::trace!("filter word: {word}");
            counter.seed_filter_entry(word)
        })
        .map_err(|e| tokenize_error(e, source))
}

fn tokenize_error(
    e: TokenizeError<std::io::Error, xwc_core::CapacityError>,
    source: &InputSource,
) -> EngineError {
    match e {
        TokenizeError::Read(io) => EngineError::Read {
            name: source.to_string(),
            source: io,
        },
        TokenizeError::Allocation(c) | TokenizeError::Callback(c) => EngineError::Capacity(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;
    use std::io::{Cursor, Write};
    use std::path::PathBuf;
    use tempfile::NamedTempFile;
    use xwc_core::{Channel, Collation, SortKey, SortOrder, TokenizerOptions};

    fn file_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    fn source_of(file: &NamedTempFile) -> InputSource {
        InputSource::File(file.path().to_path_buf())
    }

    #[test]
    fn test_exclusive_words_across_two_channels() {
        let first = file_with("a a b");
        let second = file_with("a c");
        let config = ConfigBuilder::default()
            .inputs(vec![source_of(&first), source_of(&second)])
            .build()
            .unwrap();
        let report = run(&config).unwrap();

        let a = report.counter.lookup("a").unwrap();
        assert_eq!(a.channel(), Channel::Multi);
        assert_eq!(a.count(), 3);

        let listed: Vec<(&str, u64)> = report.words().map(|w| (w.text(), w.count())).collect();
        assert_eq!(listed, [("b", 1), ("c", 1)]);

        let b = report.counter.lookup("b").unwrap();
        assert_eq!(b.channel(), Channel::Single(ChannelId::START));
        assert_eq!(report.input_of(b), Some(&source_of(&first)));
    }

    #[test]
    fn test_repeated_word_in_first_channel() {
        let first = file_with("a a b b");
        let second = file_with("a c");
        let config = ConfigBuilder::default()
            .inputs(vec![source_of(&first), source_of(&second)])
            .sort(SortOrder::new(SortKey::Lexical, false))
            .build()
            .unwrap();
        let report = run(&config).unwrap();
        let listed: Vec<(&str, u64)> = report.words().map(|w| (w.text(), w.count())).collect();
        assert_eq!(listed, [("b", 2), ("c", 1)]);
    }

    #[test]
    fn test_locale_collation_orders_words() {
        let input = file_with("pear apple Fig zoo Éclair");
        let config = ConfigBuilder::default()
            .inputs(vec![source_of(&input)])
            .sort(
                SortOrder::new(SortKey::Lexical, false)
                    .with_collation(Collation::Locale("en".parse().unwrap())),
            )
            .build()
            .unwrap();
        let report = run(&config).unwrap();
        let listed: Vec<&str> = report.words().map(|w| w.text()).collect();
        assert_eq!(listed, ["apple", "Éclair", "Fig", "pear", "zoo"]);
    }

    #[test]
    fn test_filter_restricts_counted_words() {
        let filter = file_with("b c zzz");
        let input = file_with("a b b c");
        let config = ConfigBuilder::default()
            .inputs(vec![source_of(&input)])
            .filter(Some(source_of(&filter)))
            .build()
            .unwrap();
        let report = run(&config).unwrap();
        assert!(report.counter.lookup("a").is_none());
        assert_eq!(report.counter.lookup("zzz").map(|w| w.count()), Some(0));
        let listed: Vec<&str> = report.words().map(|w| w.text()).collect();
        assert_eq!(listed, ["b", "c"]);
    }

    #[test]
    fn test_tokenizer_options_apply_to_filter_and_inputs() {
        let filter = file_with("Hello, World!");
        let input = file_with("hello world Hello; World...");
        let config = ConfigBuilder::default()
            .inputs(vec![source_of(&input)])
            .filter(Some(source_of(&filter)))
            .tokenizer(TokenizerOptions {
                max_word_len: std::num::NonZeroUsize::new(3),
                punctuation_as_space: true,
            })
            .build()
            .unwrap();
        let report = run(&config).unwrap();
        let listed: Vec<(&str, u64)> = report.words().map(|w| (w.text(), w.count())).collect();
        assert_eq!(listed, [("Hel", 1), ("Wor", 1)]);
    }

    #[test]
    fn test_missing_input_is_open_error() {
        let config = ConfigBuilder::default()
            .inputs(vec![InputSource::File(PathBuf::from(
                "/nonexistent/xwc/input.txt",
            ))])
            .build()
            .unwrap();
        assert!(matches!(run(&config), Err(EngineError::Open { .. })));
    }

    #[test]
    fn test_count_channel_returns_word_total() {
        let mut counter = WordCounter::default();
        let source = InputSource::stdin("#1");
        let n = count_channel(
            &mut counter,
            &Tokenizer::default(),
            Cursor::new("x y x"),
            &source,
            ChannelId::START,
        )
        .unwrap();
        assert_eq!(n, 3);
        assert_eq!(counter.len(), 2);
    }

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl InputObserver for Recorder {
        fn on_start(&mut self, source: &InputSource) {
            self.0.push(format!("start {source}"));
        }
        fn on_finish(&mut self, source: &InputSource) {
            self.0.push(format!("end {source}"));
        }
    }

    #[test]
    fn test_observer_sees_filter_then_inputs() {
        let filter = file_with("w");
        let input = file_with("w");
        let config = ConfigBuilder::default()
            .inputs(vec![source_of(&input)])
            .filter(Some(source_of(&filter)))
            .build()
            .unwrap();
        let mut recorder = Recorder::default();
        run_with(&config, &mut recorder).unwrap();
        assert_eq!(recorder.0.len(), 4);
        assert!(recorder.0[0].starts_with("start "));
        assert!(recorder.0[0].ends_with(&filter.path().display().to_string()));
        assert!(recorder.0[3].ends_with(&input.path().display().to_string()));
    }
}
