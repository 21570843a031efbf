use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use photo_album_common::PathFolderClassifier;
use photo_album_rust::{cli, config, error, export, planner, scanner};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use tracing::{debug, info};

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "photo_album_rust=debug"
    } else {
        "photo_album_rust=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;

    match cli.command {
        Commands::Classify { paths, json, min_name_len, min_date_last_len } => {
            let thresholds = config.resolve_thresholds(min_name_len, min_date_last_len)?;
            let classifier = PathFolderClassifier::new(thresholds);
            debug!(?thresholds, "分類器を初期化");

            for path in &paths {
                let result = classifier.classify(path);
                if json {
                    let line = serde_json::json!({ "path": path, "result": result });
                    println!("{}", line);
                } else {
                    println!("{} -> {}", path, result);
                }
            }
        }

        Commands::Scan { folder, output, format, flat } => {
            eprintln!("📷 photo-album - アルバム推定\n");

            if !folder.is_dir() {
                return Err(error::PhotoAlbumError::FolderNotFound(
                    folder.display().to_string(),
                ));
            }
            let root = folder.canonicalize()?;

            // 標準出力は計画の出力用に空けておく
            // 1. スキャン
            eprintln!("[1/3] 写真をスキャン中...");
            let images = scanner::scan_folder(&root, &config, !flat)?;
            eprintln!("✔ {}枚の写真を検出\n", images.len());

            if images.is_empty() {
                return Err(error::PhotoAlbumError::NoImagesFound(
                    root.display().to_string(),
                ));
            }

            // 2. 推定
            eprintln!("[2/3] アルバム名を推定中...");
            let classifier = PathFolderClassifier::new(config.thresholds()?);
            let progress = ProgressBar::new(images.len() as u64);
            if let Ok(style) = ProgressStyle::with_template("  {bar:40} {pos}/{len}") {
                progress.set_style(style);
            }
            let plan = planner::build_plan(&images, &root, &classifier, &progress);
            progress.finish_and_clear();

            let summary = plan.summary();
            eprintln!(
                "✔ アルバム {}件 / 対象外 {}枚 / 要確認 {}枚\n",
                summary.albums, summary.unassigned, summary.issues
            );

            // 3. 出力
            eprintln!("[3/3] 計画を出力中...");
            export::write_plan(&plan, &format, output.as_deref())?;

            eprintln!("\n✅ 完了");
        }

        Commands::Report { input, format } => {
            let plan = export::load_plan(&input)?;
            info!(path = %input.display(), "計画を読み込みました");
            export::write_plan(&plan, &format, None)?;
        }

        Commands::Config { show, set_min_name_len, set_min_date_last_len, reset } => {
            let mut config = if reset { Config::default() } else { config };
            let mut changed = reset;

            if let Some(value) = set_min_name_len {
                config.set_min_name_len(value)?;
                changed = true;
            }

            if let Some(value) = set_min_date_last_len {
                config.set_min_date_last_len(value)?;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  最小文字数: {}", config.min_name_len);
                println!("  末尾日付フォルダの最小文字数: {}", config.min_date_last_len);
                println!("  対象拡張子: {}", config.image_extensions.join(", "));
            }
        }
    }

    Ok(())
}
