//! データ取得〜カタログ構築テスト
//!
//! ローカルCSVからの読み込みと取得失敗時の挙動を検証

use teajia_catalog::error::TeajiaError;
use teajia_catalog::source::{load_catalog, load_dataset, DataSource};
use teajia_common::{LoadState, Preset};
use tempfile::tempdir;

const CSV: &str = "Type,Given Name,Age,Name,Grams,Bag Cost,Gram Price,Bag Size USD,Size USD,Stock,Item #,Source,Gram Cost,Tasting,Shipping
Black Tea,,,Keemun,,,$0.40,,,120,,Anhui,,Smooth and malty,
\"Green Tea, Organic\",Dragon Well,,Long Jing,,,$1.20,,,12 bags,,Zhejiang,,\"Fresh, grassy\",
Oolong,Big Red Robe,2019,Da Hong Pao,,,$2.50,,,Unknown,,Wuyi,,\"Roasted, rich\",
";

/// ローカルファイルから読み込み
#[tokio::test]
async fn test_load_catalog_from_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("teas.csv");
    std::fs::write(&path, CSV).unwrap();

    let catalog = load_catalog(&DataSource::Local(path), 5, false)
        .await
        .expect("カタログ読み込み失敗");

    assert_eq!(catalog.state(), &LoadState::Ready);
    assert_eq!(catalog.records().len(), 3);
    assert_eq!(catalog.price_ceiling(), 3.0);
    assert_eq!(catalog.statistics().in_stock_count, 2);
}

/// file:// 形式のソース
#[tokio::test]
async fn test_load_dataset_file_url() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("teas.csv");
    std::fs::write(&path, CSV).unwrap();

    let source = DataSource::parse(&format!("file://{}", path.display()));
    let text = load_dataset(&source, 5).await.unwrap();
    assert_eq!(text, CSV);
}

/// 存在しないファイルは FileNotFound（メッセージは一重）
#[tokio::test]
async fn test_load_catalog_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let source = DataSource::Local(dir.path().join("missing.csv"));

    let result = load_catalog(&source, 5, false).await;
    match result {
        Err(err @ TeajiaError::FileNotFound(_)) => {
            let message = err.to_string();
            assert!(message.starts_with("ファイルが見つかりません: "));
            assert!(message.ends_with("missing.csv"));
            assert!(!message.contains("Fetch error"));
        }
        other => panic!("Expected FileNotFound, got {:?}", other.map(|c| c.records().len())),
    }
}

/// ファイル単体読み込みでは FileNotFound
#[tokio::test]
async fn test_load_dataset_missing_file() {
    let result = load_dataset(&DataSource::Local("/nonexistent/path/teas.csv".into()), 5).await;
    assert!(matches!(result, Err(TeajiaError::FileNotFound(_))));
}

/// ヘッダのみのCSVは空のカタログ
#[tokio::test]
async fn test_load_catalog_header_only() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("empty.csv");
    std::fs::write(&path, "Type,Given Name,Age,Name\n").unwrap();

    let catalog = load_catalog(&DataSource::Local(path), 5, false).await.unwrap();
    assert!(catalog.is_ready());
    assert!(catalog.records().is_empty());
    assert_eq!(catalog.price_ceiling(), 100.0);
}

/// 読み込み後のフィルタ操作
#[tokio::test]
async fn test_filters_after_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("teas.csv");
    std::fs::write(&path, CSV).unwrap();

    let mut catalog = load_catalog(&DataSource::Local(path), 5, false).await.unwrap();
    catalog.set_preset(Some(Preset::Premium));
    let names: Vec<&str> = catalog.view().iter().map(|r| r.display_name.as_str()).collect();
    assert_eq!(names, vec!["Da Hong Pao"]);
}
