use clap::Parser;
use teajia_catalog::{cli, config, error, logging, render, source, store};
use cli::{Cli, Commands};
use config::Config;
use error::{Result, TeajiaError};
use source::DataSource;
use store::HistoryFile;
use teajia_common::{filter, Preset, RecentHistory};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let config = Config::load()?;

    let data_source =
        DataSource::parse(&cli.source.clone().unwrap_or_else(|| config.data_source()));
    let history_path = match cli.history.clone() {
        Some(path) => path,
        None => config.history_path()?,
    };

    match cli.command {
        Commands::List { filters, json } => {
            let mut catalog =
                source::load_catalog(&data_source, config.timeout_seconds, !json).await?;
            catalog.replace_filters(filters.to_filter_state(catalog.price_ceiling()));

            let view = catalog.view();
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                println!("{}\n", render::format_cards(&view));
                if catalog.filters().is_active(catalog.price_ceiling()) {
                    println!("{}件 / 全{}件（フィルタ適用中）", view.len(), catalog.records().len());
                } else {
                    println!("全{}件", catalog.records().len());
                }
            }
        }

        Commands::Stats => {
            let catalog = source::load_catalog(&data_source, config.timeout_seconds, true).await?;
            println!("📊 {}", render::format_statistics(&catalog.statistics()));
        }

        Commands::Show { name } => {
            let mut catalog =
                source::load_catalog(&data_source, config.timeout_seconds, true).await?;
            let mut history = HistoryFile::open(&history_path);
            catalog.load_history(&history)?;

            let record = catalog
                .record_view(&name)
                .cloned()
                .ok_or(TeajiaError::RecordNotFound(name))?;
            println!("{}", render::format_detail(&record));

            // 保存に失敗しても詳細表示は済んでいる
            if let Err(e) = catalog.save_history(&mut history) {
                tracing::warn!(
                    error = %e,
                    path = %history.path().display(),
                    "failed to save recent history"
                );
            }
        }

        Commands::Recent { clear } => {
            let mut history_file = HistoryFile::open(&history_path);
            let mut recent = RecentHistory::load(&history_file)?;

            if clear {
                recent.clear();
                recent.save(&mut history_file)?;
                println!("✔ 最近見た商品を削除しました: {}", history_file.path().display());
            } else {
                println!("🕘 最近見た商品\n");
                println!("{}", render::format_recent(&recent.names()));
            }
        }

        Commands::Options => {
            let catalog = source::load_catalog(&data_source, config.timeout_seconds, true).await?;

            println!("茶種:");
            for category in filter::category_options(catalog.records()) {
                println!("  {}", category);
            }
            println!("\n産地:");
            for origin in filter::origin_options(catalog.records()) {
                println!("  {}", origin);
            }
            println!("\nプリセット:");
            for preset in Preset::ALL {
                println!("  {:<10} {}", preset.as_str(), preset.label());
            }
            println!("\n価格上限: ${}/g", catalog.price_ceiling());
        }

        Commands::Config { set_source, show } => {
            let mut config = config;

            if let Some(source) = set_source {
                config.set_data_source(source)?;
                println!("✔ データソースを設定しました");
            }

            if show {
                println!("設定:");
                println!("  データソース: {}", config.data_source());
                println!("  履歴ファイル: {}", history_path.display());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
            }
        }
    }

    Ok(())
}
