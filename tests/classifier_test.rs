//! アルバム名推定テスト
//!
//! 公開APIから推定ルールを検証

use photo_album_common::{
    classify, AlbumNameResult, ClassifierThresholds, FolderPath, NoAlbumReason,
    PathFolderClassifier,
};

fn found(name: &str) -> AlbumNameResult {
    AlbumNameResult::Found(name.to_string())
}

/// セグメントが残らないパスはアルバムなし
#[test]
fn test_empty_path_is_no_album() {
    for path in ["", "/", ".", "./..", "C:\\", "IMG_0001.jpg"] {
        assert!(
            matches!(classify(path), AlbumNameResult::NoAlbum(_)),
            "アルバムなしになっていない: {:?}",
            path
        );
    }
}

/// 日付だけのフォルダが末尾ならアルバムなし
#[test]
fn test_date_only_last_segment() {
    assert_eq!(
        classify("/photos/uploads/2023-05-01"),
        AlbumNameResult::NoAlbum(NoAlbumReason::DateOnly)
    );
    assert_eq!(
        classify("2023-01-01"),
        AlbumNameResult::NoAlbum(NoAlbumReason::DateOnly)
    );
}

/// ファイル名を除去してから日付付きフォルダを採用
#[test]
fn test_date_prefixed_folder_with_file() {
    assert_eq!(
        classify("A/2023-05-01 Trip/IMG_0001.jpg"),
        found("2023-05-01 Trip")
    );
}

/// 日付フォルダが2つあれば曖昧（両方を返す）
#[test]
fn test_two_date_folders_are_ambiguous() {
    let result = classify("/library/2022-01-01/export/2023-02-02/IMG_0001.jpg");
    assert_eq!(
        result,
        AlbumNameResult::Ambiguous(vec!["2022-01-01".into(), "2023-02-02".into()])
    );
    assert!(result.needs_attention());
}

/// 日付で始まるが日付だけではないフォルダ
#[test]
fn test_date_prefix_without_separator() {
    assert_eq!(
        classify("Vacation/2023-06-15BeachDay"),
        found("2023-06-15BeachDay")
    );
}

/// 同じパスは何度推定しても同じ結果
#[test]
fn test_idempotent() {
    let classifier = PathFolderClassifier::default();
    for path in [
        "A/2023-05-01 Trip/IMG_0001.jpg",
        "2022-01-01/2023-02-02",
        "x/2023-05-01/y/z",
        "",
    ] {
        assert_eq!(classifier.classify(path), classifier.classify(path));
    }
}

/// 日付フォルダの後ろのフォルダを連結
#[test]
fn test_concatenates_following_folders() {
    assert_eq!(
        classify("/photos/2024-03-20/Kyoto/IMG_0001.HEIC"),
        found("2024-03-20 Kyoto")
    );
    assert_eq!(
        classify("/photos/2024-03-20/Kyoto/Day2/IMG_0001.HEIC"),
        found("2024-03-20 Kyoto Day2")
    );
}

/// 末尾から4番目以前の日付フォルダは対象外
#[test]
fn test_deep_date_folder_is_unsupported() {
    assert_eq!(
        classify("/photos/2024-03-20/a/b/c/IMG_0001.jpg"),
        AlbumNameResult::NoAlbum(NoAlbumReason::UnsupportedPosition {
            index: 1,
            segment_count: 5,
        })
    );
}

/// Windowsパスも同じように扱う
#[test]
fn test_windows_path() {
    assert_eq!(
        classify(r"D:\Pictures\2023-12-24 Christmas\DSC0001.JPG"),
        found("2023-12-24 Christmas")
    );
}

/// 共有名が日付でもアンカーとして除外する
#[test]
fn test_verbatim_unc_share_is_not_a_date_folder() {
    assert_eq!(
        classify(r"\\?\UNC\nas\2023-01-01\2023-05-01\Trip\IMG_0001.jpg"),
        found("2023-05-01 Trip")
    );
}

/// 閾値を上げると短い候補は要確認になる
#[test]
fn test_custom_thresholds() {
    let thresholds = ClassifierThresholds::new(20, 20).unwrap();
    let classifier = PathFolderClassifier::new(thresholds);

    assert_eq!(
        classifier.classify("A/2023-05-01 Trip/IMG_0001.jpg"),
        AlbumNameResult::TooShort("2023-05-01 Trip".into())
    );
    assert_eq!(
        classifier.classify("A/2023-05-01 Family Trip/IMG_0001.jpg"),
        found("2023-05-01 Family Trip")
    );
}

/// 末尾の日付フォルダの判定は長さ閾値に依存しない
#[test]
fn test_date_last_ignores_thresholds() {
    let classifier = PathFolderClassifier::new(ClassifierThresholds::new(1, 1).unwrap());
    assert_eq!(
        classifier.classify("uploads/2023-01-01"),
        AlbumNameResult::NoAlbum(NoAlbumReason::DateOnly)
    );
}

/// セグメントを直接渡しても同じ結果
#[test]
fn test_classify_segments_matches_classify() {
    let classifier = PathFolderClassifier::default();
    let path = FolderPath::parse("/photos/2024-03-20/Kyoto/IMG_0001.jpg");
    assert_eq!(
        classifier.classify_segments(path.segments()),
        classifier.classify("/photos/2024-03-20/Kyoto/IMG_0001.jpg")
    );
    assert_eq!(
        classifier.classify_segments(&["2024-03-20", "Kyoto"]),
        found("2024-03-20 Kyoto")
    );
}

/// 複数スレッドから共有して使える
#[test]
fn test_shared_across_threads() {
    let classifier = PathFolderClassifier::default();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| classifier.classify("A/2023-05-01 Trip/IMG_0001.jpg")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), found("2023-05-01 Trip"));
        }
    });
}
