//! テキストレポート

use crate::planner::{AlbumPlan, IssueKind, PlanIssue};

pub fn render_text(plan: &AlbumPlan) -> String {
    let summary = plan.summary();

    let mut lines = vec![
        format!("アルバム計画: {}", plan.root),
        format!(
            "作成日時: {}",
            plan.generated_at.format("%Y-%m-%d %H:%M:%S")
        ),
        format!(
            "閾値: 最小{}文字 / 末尾日付{}文字",
            plan.thresholds.min_name_len, plan.thresholds.min_date_last_len
        ),
        String::new(),
        format!("## アルバム ({})", summary.albums),
    ];
    lines.extend(
        plan.albums
            .iter()
            .map(|album| format!("- {} : {}枚", album.name, album.assets.len())),
    );

    if !plan.issues.is_empty() {
        lines.push(String::new());
        lines.push(format!("## 要確認 ({})", summary.issues));
        lines.extend(plan.issues.iter().map(issue_line));
    }

    lines.push(String::new());
    lines.push(format!(
        "合計 {}枚: アルバム {}枚 / 対象外 {}枚 / 要確認 {}枚",
        summary.total(),
        summary.assigned,
        summary.unassigned,
        summary.issues
    ));

    lines.join("\n")
}

fn issue_line(issue: &PlanIssue) -> String {
    match &issue.kind {
        IssueKind::Ambiguous { candidates } => format!(
            "- {} : 日付フォルダが複数 [{}]",
            issue.path,
            candidates.join(", ")
        ),
        IssueKind::TooShort { candidate } => {
            format!("- {} : 候補が短すぎます \"{}\"", issue.path, candidate)
        }
    }
}
