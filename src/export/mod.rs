pub mod text;

use crate::cli::PlanFormat;
use crate::error::Result;
use crate::planner::AlbumPlan;
use std::io::Write;
use std::path::Path;

/// 計画を文字列に変換
pub fn render_plan(plan: &AlbumPlan, format: &PlanFormat) -> Result<String> {
    match format {
        PlanFormat::Json => Ok(serde_json::to_string_pretty(plan)?),
        PlanFormat::Text => Ok(text::render_text(plan)),
    }
}

/// 計画を出力（出力先がなければ標準出力）
pub fn write_plan(plan: &AlbumPlan, format: &PlanFormat, output: Option<&Path>) -> Result<()> {
    let content = render_plan(plan, format)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, content)?;
            println!("✔ 計画を保存: {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", content)?;
        }
    }

    Ok(())
}

/// JSONファイルから計画を読み込み
pub fn load_plan(path: &Path) -> Result<AlbumPlan> {
    let content = std::fs::read_to_string(path)?;
    let plan: AlbumPlan = serde_json::from_str(&content)?;
    Ok(plan)
}
