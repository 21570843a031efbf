use crate::error::{PhotoAlbumError, Result};
use photo_album_common::classifier::{DEFAULT_MIN_DATE_LAST_LEN, DEFAULT_MIN_NAME_LEN};
use photo_album_common::ClassifierThresholds;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 環境変数（設定ファイルより優先）
pub const ENV_MIN_NAME_LEN: &str = "PHOTO_ALBUM_MIN_NAME_LEN";
pub const ENV_MIN_DATE_LAST_LEN: &str = "PHOTO_ALBUM_MIN_DATE_LAST_LEN";

const DEFAULT_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "heic", "heif", "gif", "webp", "tif", "tiff", "dng", "cr2", "nef",
    "arw", "mp4", "mov",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub min_name_len: usize,
    pub min_date_last_len: usize,
    /// 対象ファイルの拡張子（小文字）
    pub image_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_name_len: DEFAULT_MIN_NAME_LEN,
            min_date_last_len: DEFAULT_MIN_DATE_LAST_LEN,
            image_extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込み（ファイルがなければデフォルト）
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PhotoAlbumError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("photo-album").join("config.json"))
    }

    /// 設定ファイルと環境変数から閾値を取得
    pub fn thresholds(&self) -> Result<ClassifierThresholds> {
        self.resolve_thresholds(None, None)
    }

    /// 閾値を決定
    ///
    /// CLI引数 > 環境変数 > 設定ファイル の順で優先する
    pub fn resolve_thresholds(
        &self,
        min_name_len: Option<usize>,
        min_date_last_len: Option<usize>,
    ) -> Result<ClassifierThresholds> {
        self.resolve_thresholds_with(min_name_len, min_date_last_len, |name| {
            std::env::var(name).ok()
        })
    }

    fn resolve_thresholds_with(
        &self,
        min_name_len: Option<usize>,
        min_date_last_len: Option<usize>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<ClassifierThresholds> {
        let min_name_len = match min_name_len {
            Some(value) => value,
            None => lookup_threshold(&env, ENV_MIN_NAME_LEN)?.unwrap_or(self.min_name_len),
        };
        let min_date_last_len = match min_date_last_len {
            Some(value) => value,
            None => lookup_threshold(&env, ENV_MIN_DATE_LAST_LEN)?
                .unwrap_or(self.min_date_last_len),
        };
        Ok(ClassifierThresholds::new(min_name_len, min_date_last_len)?)
    }

    pub fn set_min_name_len(&mut self, value: usize) -> Result<()> {
        ClassifierThresholds::new(value, self.min_date_last_len)?;
        self.min_name_len = value;
        Ok(())
    }

    pub fn set_min_date_last_len(&mut self, value: usize) -> Result<()> {
        ClassifierThresholds::new(self.min_name_len, value)?;
        self.min_date_last_len = value;
        Ok(())
    }

    /// 拡張子が対象か（大文字小文字は無視）
    pub fn is_target_extension(&self, ext: &str) -> bool {
        self.image_extensions
            .iter()
            .any(|e| e.eq_ignore_ascii_case(ext))
    }
}

fn lookup_threshold(env: impl Fn(&str) -> Option<String>, name: &str) -> Result<Option<usize>> {
    env(name)
        .map(|value| parse_threshold(name, &value))
        .transpose()
}

fn parse_threshold(name: &str, value: &str) -> Result<usize> {
    value.trim().parse().map_err(|_| {
        PhotoAlbumError::Config(format!("{} の値が不正です: {}", name, value))
    })
}
