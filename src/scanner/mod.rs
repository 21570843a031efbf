use crate::config::Config;
use crate::error::{PhotoAlbumError, Result};
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub path: PathBuf,
    /// スキャン対象フォルダからの相対パス
    pub relative_path: PathBuf,
}

/// フォルダ内の写真・動画を列挙
///
/// `recursive` がfalseなら直下のみ。隠しフォルダ（`.thumbnails` 等）は辿らない。
/// 読めないフォルダは警告を出して飛ばす。
pub fn scan_folder(folder: &Path, config: &Config, recursive: bool) -> Result<Vec<ImageInfo>> {
    if !folder.is_dir() {
        return Err(PhotoAlbumError::FolderNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut images = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "読み込めないためスキップ");
                None
            }
        })
    {
        let path = entry.path();

        if !entry.file_type().is_file() {
            continue;
        }

        let is_target = path
            .extension()
            .map(|ext| config.is_target_extension(&ext.to_string_lossy()))
            .unwrap_or(false);
        if !is_target {
            continue;
        }

        let relative_path = path.strip_prefix(folder).unwrap_or(path).to_path_buf();

        images.push(ImageInfo {
            path: path.to_path_buf(),
            relative_path,
        });
    }

    // 相対パスでソート
    images.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

    Ok(images)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}
