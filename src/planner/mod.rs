//! アルバム計画モジュール
//!
//! スキャンした写真ごとにアルバム名を推定し、アルバム単位にまとめる。
//! 各アルバムの最初の写真でアルバムを作成し、以降の写真は追加する。
//! 曖昧・短すぎる候補は推測せず、手動確認用の課題として残す。

mod types;

pub use types::{
    AlbumAction, AlbumPlan, IssueKind, PlanIssue, PlanSummary, PlannedAlbum, PlannedAsset,
    UnassignedAsset,
};

use crate::scanner::ImageInfo;
use indicatif::ProgressBar;
use photo_album_common::{AlbumNameResult, PathFolderClassifier};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// アルバム計画を作成
///
/// # Arguments
/// * `images` - スキャン結果（相対パス順）
/// * `root` - スキャン対象フォルダ
/// * `classifier` - 分類器
/// * `progress` - 進捗表示（不要なら `ProgressBar::hidden()`）
pub fn build_plan(
    images: &[ImageInfo],
    root: &Path,
    classifier: &PathFolderClassifier,
    progress: &ProgressBar,
) -> AlbumPlan {
    let classified: Vec<(&ImageInfo, AlbumNameResult)> = images
        .par_iter()
        .map(|img| {
            let result = classifier.classify(&img.path);
            progress.inc(1);
            (img, result)
        })
        .collect();

    let mut albums: BTreeMap<String, Vec<PlannedAsset>> = BTreeMap::new();
    let mut unassigned = Vec::new();
    let mut issues = Vec::new();

    for (img, result) in classified {
        let path = img.relative_path.to_string_lossy().to_string();

        match result {
            AlbumNameResult::Found(name) => {
                let assets = albums.entry(name).or_default();
                let action = if assets.is_empty() {
                    AlbumAction::Create
                } else {
                    AlbumAction::Attach
                };
                assets.push(PlannedAsset { path, action });
            }
            AlbumNameResult::NoAlbum(reason) => {
                debug!(path = %path, %reason, "アルバムなし");
                unassigned.push(UnassignedAsset { path, reason });
            }
            AlbumNameResult::Ambiguous(candidates) => {
                warn!(path = %path, ?candidates, "日付フォルダが複数あります");
                issues.push(PlanIssue {
                    path,
                    kind: IssueKind::Ambiguous { candidates },
                });
            }
            AlbumNameResult::TooShort(candidate) => {
                warn!(path = %path, candidate = %candidate, "アルバム名候補が短すぎます");
                issues.push(PlanIssue {
                    path,
                    kind: IssueKind::TooShort { candidate },
                });
            }
        }
    }

    let albums: Vec<PlannedAlbum> = albums
        .into_iter()
        .map(|(name, assets)| PlannedAlbum { name, assets })
        .collect();

    let plan = AlbumPlan {
        generated_at: chrono::Local::now(),
        root: root.display().to_string(),
        thresholds: classifier.thresholds(),
        albums,
        unassigned,
        issues,
    };

    let summary = plan.summary();
    info!(
        albums = summary.albums,
        assigned = summary.assigned,
        unassigned = summary.unassigned,
        issues = summary.issues,
        "アルバム計画を作成しました"
    );

    plan
}
