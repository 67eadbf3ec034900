use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use xwc_core::SortKey;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// タブ区切り（入力ごとに列をずらす）
    #[default]
    Tsv,
    /// JSON 配列
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum ColorChoice {
    /// 標準エラーが端末の場合のみ
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolves `Auto` against whether stderr is a terminal.
    #[must_use]
    pub fn enabled(self, stderr_is_terminal: bool) -> bool {
        match self {
            Self::Auto => stderr_is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum CliSortKey {
    /// 辞書順
    #[value(name = "lexicographical")]
    Lexical,
    /// 出現回数順
    Numeric,
    /// 初出順のまま
    None,
}

impl From<CliSortKey> for SortKey {
    fn from(k: CliSortKey) -> Self {
        match k {
            CliSortKey::Lexical => Self::Lexical,
            CliSortKey::Numeric => Self::Numeric,
            CliSortKey::None => Self::None,
        }
    }
}
