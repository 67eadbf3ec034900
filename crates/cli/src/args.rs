// crates/cli/src/args.rs
use clap::{ArgAction, Parser, ValueHint};

use icu_locale_core::Locale;

use crate::options::{CliSortKey, ColorChoice, OutputFormat};
use crate::parsers::parse_locale;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "xwc",
    version = crate::VERSION,
    about = "単語の出現回数を数え、ひとつの入力にしか現れない単語を表示する",
    long_about = "単語の出現回数を数え、ひとつの入力（チャネル）にしか現れない単語だけを表示します。\n\
                  複数の入力に現れた単語は表示されません。FILE が `-` の場合、または FILE が\n\
                  ひとつも指定されない場合は標準入力を読みます。",
    args_override_self = true
)]
pub struct Args {
    /// 入力ファイル（`-` は標準入力）
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub files: Vec<String>,

    /// FILE に含まれる単語だけを数える（`-` は標準入力）
    #[arg(short = 'r', long = "restrict", value_name = "FILE", value_hint = ValueHint::FilePath, help_heading = "単語")]
    pub restrict: Option<String>,

    /// 英数字・空白以外の文字を区切りとして扱う
    #[arg(short = 'p', long, help_heading = "単語")]
    pub punctuation_as_space: bool,

    /// 単語を N 文字で切り詰める（0 は無制限）
    #[arg(short = 'i', long = "limit", value_name = "N", default_value_t = 0, help_heading = "単語")]
    pub limit: usize,

    /// ソート方法
    #[arg(
        short = 's',
        long,
        value_enum,
        overrides_with_all = ["lexical", "numeric", "no_sort"],
        help_heading = "出力"
    )]
    pub sort: Option<CliSortKey>,

    /// 辞書順にソート（`--sort lexicographical` と同じ）
    #[arg(short = 'l', long, overrides_with_all = ["sort", "numeric", "no_sort"], help_heading = "出力")]
    pub lexical: bool,

    /// 出現回数順にソート（`--sort numeric` と同じ）
    #[arg(short = 'n', long, overrides_with_all = ["sort", "lexical", "no_sort"], help_heading = "出力")]
    pub numeric: bool,

    /// ソートしない（`--sort none` と同じ）
    #[arg(short = 'S', long, overrides_with_all = ["sort", "lexical", "numeric"], help_heading = "出力")]
    pub no_sort: bool,

    /// 逆順にソート
    #[arg(short = 'R', long, help_heading = "出力")]
    pub reverse: bool,

    /// 辞書順ソートにロケールの照合順序を使う（例: `en`, `de`, `sv`）。省略時はコードポイント順
    #[arg(long, value_name = "LOCALE", value_parser = parse_locale, help_heading = "出力")]
    pub collate: Option<Locale>,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "tsv", help_heading = "出力")]
    pub format: OutputFormat,

    /// 標準入力の読み込み開始/終了メッセージの色付け
    #[arg(long, value_enum, default_value = "auto", help_heading = "出力")]
    pub color: ColorChoice,

    /// ログの詳細度（-v: debug, -vv: trace）。`XWC_LOG` が優先されます
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Sort key chosen by the last of `-s`, `-l`, `-n`, `-S` given.
    #[must_use]
    pub fn sort_key(&self) -> CliSortKey {
        if let Some(key) = self.sort {
            key
        } else if self.lexical {
            CliSortKey::Lexical
        } else if self.numeric {
            CliSortKey::Numeric
        } else {
            CliSortKey::None
        }
    }
}
