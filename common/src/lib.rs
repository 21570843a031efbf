//! Photo Album Common Library
//!
//! CLIと呼び出し側で共有されるフォルダ分類ロジック。
//! アルバム名推定の実装はこのクレートにひとつだけ置く。

pub mod error;
pub mod path;
pub mod classifier;

pub use error::{Error, Result};
pub use path::FolderPath;
pub use classifier::{
    classify, AlbumNameResult, ClassifierThresholds, NoAlbumReason, PathFolderClassifier,
};
