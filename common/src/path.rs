//! パス分解
//!
//! ファイルパスをフォルダ名の並びに分解する。
//! - 区切り文字は `/` と `\` の両方を受け付ける
//! - ルート・ドライブ指定（`C:`、UNCの `\\server\share`、`\\?\UNC\server\share`）は除外
//! - `.` / `..` は除外
//! - 末尾がファイル名（拡張子2〜5文字）なら1つだけ取り除く

use regex::Regex;
use std::path::{Path, PathBuf};

lazy_static::lazy_static! {
    /// 末尾の拡張子（`.jpg`, `.heic` 等）
    static ref FILENAME_RE: Regex = Regex::new(r"\.[A-Za-z0-9]{2,5}$").unwrap();
    /// Windowsドライブ指定（`C:`）
    static ref DRIVE_RE: Regex = Regex::new(r"^[A-Za-z]:$").unwrap();
}

/// フォルダ名の並び
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FolderPath {
    segments: Vec<String>,
}

impl FolderPath {
    /// パス文字列を分解
    ///
    /// # Examples
    /// ```
    /// use photo_album_common::FolderPath;
    ///
    /// let path = FolderPath::parse("/photos/2023-05-01 Trip/IMG_0001.jpg");
    /// assert_eq!(path.segments(), ["photos", "2023-05-01 Trip"]);
    /// ```
    pub fn parse(path: &str) -> Self {
        let verbatim = path.starts_with(r"\\?\") || path.starts_with(r"\\.\");
        let is_unc = !verbatim && path.starts_with(r"\\");

        let mut raw: Vec<&str> = path
            .split(['/', '\\'])
            .filter(|s| !s.is_empty())
            .collect();

        // \\?\C:\... / \\.\C:\... の接頭辞
        if verbatim {
            raw.remove(0);
        }
        // \\?\UNC\server\share はUNCと同じ扱い
        let verbatim_unc = verbatim && raw.first().is_some_and(|s| s.eq_ignore_ascii_case("UNC"));

        let skip = if verbatim_unc {
            raw.len().min(3)
        } else if is_unc {
            // \\server\share がアンカー
            raw.len().min(2)
        } else if raw.first().is_some_and(|s| DRIVE_RE.is_match(s)) {
            1
        } else {
            0
        };

        let mut segments: Vec<String> = raw
            .into_iter()
            .skip(skip)
            .filter(|s| *s != "." && *s != "..")
            .map(str::to_string)
            .collect();

        if segments.last().is_some_and(|s| looks_like_file_name(s)) {
            segments.pop();
        }

        Self { segments }
    }

    /// `Path` から分解（非UTF-8部分は置換文字になる）
    pub fn from_path(path: &Path) -> Self {
        Self::parse(&path.to_string_lossy())
    }

    /// セグメント一覧
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl From<&str> for FolderPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl From<&String> for FolderPath {
    fn from(path: &String) -> Self {
        Self::parse(path)
    }
}

impl From<&Path> for FolderPath {
    fn from(path: &Path) -> Self {
        Self::from_path(path)
    }
}

impl From<&PathBuf> for FolderPath {
    fn from(path: &PathBuf) -> Self {
        Self::from_path(path)
    }
}

/// 末尾が拡張子付きファイル名に見えるか
pub fn looks_like_file_name(segment: &str) -> bool {
    FILENAME_RE.is_match(segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_root_and_file_name() {
        let path = FolderPath::parse("/home/user/Pictures/2023-05-01 Trip/IMG_0001.jpg");
        assert_eq!(
            path.segments(),
            ["home", "user", "Pictures", "2023-05-01 Trip"]
        );
    }

    #[test]
    fn test_parse_windows_drive() {
        let path = FolderPath::parse(r"C:\Users\me\Photos\2023-06-15\DSC_0042.JPG");
        assert_eq!(path.segments(), ["Users", "me", "Photos", "2023-06-15"]);
    }

    #[test]
    fn test_parse_unc_share() {
        let path = FolderPath::parse(r"\\nas\photos\2022\2022-08-10 Camp\a.heic");
        assert_eq!(path.segments(), ["2022", "2022-08-10 Camp"]);
    }

    #[test]
    fn test_parse_verbatim_prefix() {
        let path = FolderPath::parse(r"\\?\D:\Photos\x.png");
        assert_eq!(path.segments(), ["Photos"]);
    }

    #[test]
    fn test_parse_verbatim_unc_share() {
        // Windowsでネットワークパスを canonicalize した形
        let path = FolderPath::parse(r"\\?\UNC\srv\2023-01-01\2023-05-01\Trip\a.jpg");
        assert_eq!(path.segments(), ["2023-05-01", "Trip"]);
    }

    #[test]
    fn test_parse_skips_dot_segments() {
        let path = FolderPath::parse("./photos/../albums//2023-01-01/");
        assert_eq!(path.segments(), ["photos", "albums", "2023-01-01"]);
    }

    #[test]
    fn test_file_name_removed_only_at_end() {
        // 途中のドット付きフォルダは残す
        let path = FolderPath::parse("backup.old/2023-02-02/readme.txt");
        assert_eq!(path.segments(), ["backup.old", "2023-02-02"]);
    }

    #[test]
    fn test_long_extension_is_not_file_name() {
        assert!(looks_like_file_name("IMG_0001.jpeg"));
        assert!(looks_like_file_name("clip.mp4"));
        assert!(!looks_like_file_name("archive.backup1"));
        assert!(!looks_like_file_name("v.1"));
        assert!(!looks_like_file_name("2023-05-01 Trip"));
    }

    #[test]
    fn test_parse_empty() {
        assert!(FolderPath::parse("").is_empty());
        assert!(FolderPath::parse("/").is_empty());
        assert!(FolderPath::parse("photo.jpg").is_empty());
    }

    #[test]
    fn test_from_path() {
        let path = FolderPath::from(Path::new("a/b/c.png"));
        assert_eq!(path.len(), 2);
    }
}
