//! エラー型定義

use thiserror::Error;

/// 分類器の設定エラー
///
/// 推定結果そのもの（曖昧・短すぎる等）はエラーではなく `AlbumNameResult` で返す。
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("閾値 {name} が不正です: {value}（1以上を指定してください）")]
    InvalidThreshold { name: &'static str, value: usize },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
