use chrono::{DateTime, Local};
use photo_album_common::{ClassifierThresholds, NoAlbumReason};
use serde::{Deserialize, Serialize};

/// アルバム計画
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumPlan {
    pub generated_at: DateTime<Local>,
    /// スキャン対象フォルダ
    pub root: String,
    pub thresholds: ClassifierThresholds,
    /// アルバム名順
    pub albums: Vec<PlannedAlbum>,
    pub unassigned: Vec<UnassignedAsset>,
    /// 手動確認が必要な写真
    pub issues: Vec<PlanIssue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedAlbum {
    pub name: String,
    pub assets: Vec<PlannedAsset>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedAsset {
    pub path: String,
    pub action: AlbumAction,
}

/// アルバムへの操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlbumAction {
    /// アルバムを作成して追加
    Create,
    /// 既存アルバムに追加
    Attach,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnassignedAsset {
    pub path: String,
    #[serde(flatten)]
    pub reason: NoAlbumReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanIssue {
    pub path: String,
    #[serde(flatten)]
    pub kind: IssueKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum IssueKind {
    /// 日付フォルダが複数
    Ambiguous { candidates: Vec<String> },
    /// 候補が短すぎる
    TooShort { candidate: String },
}

/// 件数サマリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlanSummary {
    pub albums: usize,
    pub assigned: usize,
    pub unassigned: usize,
    pub issues: usize,
}

impl PlanSummary {
    pub fn total(&self) -> usize {
        self.assigned + self.unassigned + self.issues
    }
}

impl AlbumPlan {
    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            albums: self.albums.len(),
            assigned: self.albums.iter().map(|a| a.assets.len()).sum(),
            unassigned: self.unassigned.len(),
            issues: self.issues.len(),
        }
    }
}
