//! フォルダパスからのアルバム名推定
//!
//! 写真の元ファイルパスのフォルダ名を見て、イベントアルバム名
//! （`2023-05-01 旅行` のような日付付きフォルダ名）を推定する。
//!
//! ## 判定ルール
//! 1. パスをセグメントに分解（末尾ファイル名は除去済み）
//! 2. `YYYY-MM-DD` に完全一致するセグメント（日付フォルダ）を数える
//! 3. 日付フォルダ0個: 日付で始まる最初のセグメントを候補とする
//! 4. 日付フォルダ2個以上: 曖昧として候補をすべて返す
//! 5. 日付フォルダ1個: 位置（末尾/末尾から2番目/3番目）で連結ルールを選ぶ
//!
//! 推定できない・怪しい場合は推測せず、理由付きの結果を返す。

use crate::error::{Error, Result};
use crate::path::FolderPath;
use serde::{Deserialize, Serialize};
use std::fmt;

use regex::Regex;

lazy_static::lazy_static! {
    static ref DATE_RE: Regex = Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap();
    static ref DATE_PREFIX_RE: Regex = Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}").unwrap();
}

/// `YYYY-MM-DD` の文字数
pub const DATE_LEN: usize = 10;

/// アルバム名の最小文字数（デフォルト）
pub const DEFAULT_MIN_NAME_LEN: usize = 10;

/// 日付フォルダが末尾にある場合の最小文字数（日付 + 10文字）
pub const DEFAULT_MIN_DATE_LAST_LEN: usize = 20;

/// 推定の閾値
///
/// どちらも実データを見て決めた値なので設定で変更できるようにしている。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifierThresholds {
    /// 連結・前方一致で得た候補の最小文字数
    pub min_name_len: usize,
    /// 末尾の日付フォルダを候補とする場合の最小文字数
    pub min_date_last_len: usize,
}

impl ClassifierThresholds {
    /// 閾値を検証して作成
    pub fn new(min_name_len: usize, min_date_last_len: usize) -> Result<Self> {
        let thresholds = Self {
            min_name_len,
            min_date_last_len,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// 0の閾値は「何でも通す」になるので拒否する
    pub fn validate(&self) -> Result<()> {
        if self.min_name_len == 0 {
            return Err(Error::InvalidThreshold {
                name: "min_name_len",
                value: self.min_name_len,
            });
        }
        if self.min_date_last_len == 0 {
            return Err(Error::InvalidThreshold {
                name: "min_date_last_len",
                value: self.min_date_last_len,
            });
        }
        Ok(())
    }
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            min_name_len: DEFAULT_MIN_NAME_LEN,
            min_date_last_len: DEFAULT_MIN_DATE_LAST_LEN,
        }
    }
}

/// アルバムなしの理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "camelCase")]
pub enum NoAlbumReason {
    /// セグメントが残らなかった
    NoSegments,
    /// 日付フォルダも日付で始まるフォルダもない
    NoDateFolder,
    /// 末尾が日付だけのフォルダ（一括アップロード用）
    DateOnly,
    /// 日付フォルダが末尾から4番目以前にある（推定対象外）
    UnsupportedPosition {
        index: usize,
        #[serde(rename = "segmentCount")]
        segment_count: usize,
    },
}

impl fmt::Display for NoAlbumReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoAlbumReason::NoSegments => write!(f, "フォルダがありません"),
            NoAlbumReason::NoDateFolder => write!(f, "日付フォルダがありません"),
            NoAlbumReason::DateOnly => write!(f, "日付のみのフォルダです"),
            NoAlbumReason::UnsupportedPosition {
                index,
                segment_count,
            } => write!(
                f,
                "日付フォルダの位置が対象外です（{}/{}）",
                index + 1,
                segment_count
            ),
        }
    }
}

/// アルバム名の推定結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum AlbumNameResult {
    /// アルバム名候補
    Found(String),
    /// アルバムなし（エラーではない）
    NoAlbum(NoAlbumReason),
    /// 日付フォルダが複数あり自動選択できない（該当セグメントをパス順に保持）
    Ambiguous(Vec<String>),
    /// 位置ルールには合うが短すぎる候補
    TooShort(String),
}

impl AlbumNameResult {
    /// 利用者の確認が必要な結果か
    pub fn needs_attention(&self) -> bool {
        matches!(
            self,
            AlbumNameResult::Ambiguous(_) | AlbumNameResult::TooShort(_)
        )
    }
}

impl fmt::Display for AlbumNameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlbumNameResult::Found(name) => write!(f, "アルバム: {}", name),
            AlbumNameResult::NoAlbum(reason) => write!(f, "アルバムなし（{}）", reason),
            AlbumNameResult::Ambiguous(candidates) => {
                write!(f, "曖昧: 日付フォルダが複数 [{}]", candidates.join(", "))
            }
            AlbumNameResult::TooShort(candidate) => {
                write!(f, "候補が短すぎます: \"{}\"", candidate)
            }
        }
    }
}

/// `YYYY-MM-DD` に完全一致するか
pub fn is_date_segment(segment: &str) -> bool {
    DATE_RE.is_match(segment)
}

/// `YYYY-MM-DD` で始まるか（完全一致を含む）
pub fn starts_with_date(segment: &str) -> bool {
    DATE_PREFIX_RE.is_match(segment)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// フォルダ分類器
///
/// 状態を持たないので複数スレッドから共有してよい。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathFolderClassifier {
    thresholds: ClassifierThresholds,
}

impl PathFolderClassifier {
    pub fn new(thresholds: ClassifierThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> ClassifierThresholds {
        self.thresholds
    }

    /// パスからアルバム名を推定
    ///
    /// # Examples
    /// ```
    /// use photo_album_common::{AlbumNameResult, PathFolderClassifier};
    ///
    /// let classifier = PathFolderClassifier::default();
    /// let result = classifier.classify("Photos/2023-05-01/Beach/IMG_0001.jpg");
    /// assert_eq!(result, AlbumNameResult::Found("2023-05-01 Beach".into()));
    /// ```
    pub fn classify(&self, path: impl Into<FolderPath>) -> AlbumNameResult {
        let path = path.into();
        self.classify_segments(path.segments())
    }

    /// 分解済みセグメントから推定
    pub fn classify_segments<S: AsRef<str>>(&self, segments: &[S]) -> AlbumNameResult {
        if segments.is_empty() {
            return AlbumNameResult::NoAlbum(NoAlbumReason::NoSegments);
        }

        let date_indices: Vec<usize> = segments
            .iter()
            .enumerate()
            .filter(|(_, s)| is_date_segment(s.as_ref()))
            .map(|(i, _)| i)
            .collect();

        match date_indices.as_slice() {
            [] => self.classify_date_prefixed(segments),
            [idx] => self.classify_date_folder(segments, *idx),
            many => AlbumNameResult::Ambiguous(
                many.iter()
                    .map(|&i| segments[i].as_ref().to_string())
                    .collect(),
            ),
        }
    }

    /// 日付フォルダがない場合: 日付で始まる最初のセグメント
    fn classify_date_prefixed<S: AsRef<str>>(&self, segments: &[S]) -> AlbumNameResult {
        // 完全一致は0個なので、前方一致したものは必ず後ろに文字がある
        let candidate = segments
            .iter()
            .map(|s| s.as_ref())
            .find(|s: &&str| starts_with_date(s));

        match candidate {
            Some(name) => self.check_len(name.to_string(), self.thresholds.min_name_len),
            None => AlbumNameResult::NoAlbum(NoAlbumReason::NoDateFolder),
        }
    }

    /// 日付フォルダが1つだけの場合: 位置で判定
    fn classify_date_folder<S: AsRef<str>>(&self, segments: &[S], idx: usize) -> AlbumNameResult {
        let count = segments.len();
        let date_segment = segments[idx].as_ref();

        if idx + 1 == count {
            if char_len(date_segment) == DATE_LEN {
                return AlbumNameResult::NoAlbum(NoAlbumReason::DateOnly);
            }
            return self.check_len(date_segment.to_string(), self.thresholds.min_date_last_len);
        }

        // 末尾から2番目なら次の1つ、3番目なら次の2つと連結
        if idx + 3 >= count {
            let name = segments[idx..]
                .iter()
                .map(|s| s.as_ref())
                .collect::<Vec<&str>>()
                .join(" ");
            return self.check_len(name, self.thresholds.min_name_len);
        }

        AlbumNameResult::NoAlbum(NoAlbumReason::UnsupportedPosition {
            index: idx,
            segment_count: count,
        })
    }

    fn check_len(&self, candidate: String, min_len: usize) -> AlbumNameResult {
        if char_len(&candidate) >= min_len {
            AlbumNameResult::Found(candidate)
        } else {
            AlbumNameResult::TooShort(candidate)
        }
    }
}

/// デフォルト閾値で推定
///
/// # Examples
/// ```
/// use photo_album_common::{classify, AlbumNameResult};
///
/// let result = classify("A/2023-05-01 Trip/IMG_0001.jpg");
/// assert_eq!(result, AlbumNameResult::Found("2023-05-01 Trip".into()));
/// ```
pub fn classify(path: impl Into<FolderPath>) -> AlbumNameResult {
    PathFolderClassifier::default().classify(path)
}
