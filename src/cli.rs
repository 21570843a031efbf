use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photo-album")]
#[command(about = "写真フォルダからイベントアルバムを推定するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// パスからアルバム名を推定
    Classify {
        /// 写真ファイルまたはフォルダのパス
        #[arg(required = true)]
        paths: Vec<String>,

        /// JSONで出力
        #[arg(long)]
        json: bool,

        /// 最小文字数（設定を上書き）
        #[arg(long)]
        min_name_len: Option<usize>,

        /// 末尾日付フォルダの最小文字数（設定を上書き）
        #[arg(long)]
        min_date_last_len: Option<usize>,
    },

    /// 写真フォルダをスキャンしてアルバム計画を作成
    Scan {
        /// 写真フォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// 出力ファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (json/text)
        #[arg(short, long, default_value = "text")]
        format: PlanFormat,

        /// 直下のみスキャン（サブフォルダを辿らない）
        #[arg(long)]
        flat: bool,
    },

    /// 保存済みの計画JSONを表示
    Report {
        /// 計画JSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 出力形式 (json/text)
        #[arg(short, long, default_value = "text")]
        format: PlanFormat,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 最小文字数を設定
        #[arg(long)]
        set_min_name_len: Option<usize>,

        /// 末尾日付フォルダの最小文字数を設定
        #[arg(long)]
        set_min_date_last_len: Option<usize>,

        /// デフォルトに戻す
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PlanFormat {
    Json,
    #[default]
    Text,
}

impl std::str::FromStr for PlanFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(PlanFormat::Json),
            "text" | "txt" => Ok(PlanFormat::Text),
            _ => Err(format!("Unknown format: {}. Use json or text", s)),
        }
    }
}

impl std::fmt::Display for PlanFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanFormat::Json => write!(f, "json"),
            PlanFormat::Text => write!(f, "text"),
        }
    }
}
