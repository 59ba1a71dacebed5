use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use teajia_common::{FilterState, Preset};

#[derive(Parser)]
#[command(name = "teajia")]
#[command(about = "お茶カタログの検索・フィルタリングツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// CSVのURLまたはローカルパス（省略時は設定値）
    #[arg(long, global = true)]
    pub source: Option<String>,

    /// 閲覧履歴ファイル（省略時は設定ディレクトリ）
    #[arg(long, global = true)]
    pub history: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// フィルタを適用して商品一覧を表示
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// データセット全体の集計を表示
    Stats,

    /// 商品の詳細を表示し、最近見た商品に記録
    Show {
        /// 商品名（完全一致）
        #[arg(required = true)]
        name: String,
    },

    /// 最近見た商品を表示/削除
    Recent {
        /// 履歴を削除
        #[arg(long)]
        clear: bool,
    },

    /// フィルタの選択肢（茶種・産地・プリセット）を表示
    Options,

    /// 設定を表示/編集
    Config {
        /// データソースを設定
        #[arg(long)]
        set_source: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 一覧のフィルタ条件
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// 検索語（名前・別名・産地・ノート・茶種）
    #[arg(short, long)]
    pub search: Option<String>,

    /// プリセット (beginners/premium/value/bold)
    #[arg(short, long)]
    pub preset: Option<Preset>,

    /// 茶種（部分一致、複数指定可）
    #[arg(short = 't', long = "type")]
    pub categories: Vec<String>,

    /// 産地（完全一致、複数指定可）
    #[arg(short, long = "origin")]
    pub origins: Vec<String>,

    /// グラム単価の上限
    #[arg(short = 'm', long)]
    pub max_price: Option<f64>,

    /// フレーバータグ（複数指定可）
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

impl FilterArgs {
    /// 引数から FilterState を組み立てる
    pub fn to_filter_state(&self, price_ceiling: f64) -> FilterState {
        let mut state = FilterState::with_price_ceiling(price_ceiling);

        if let Some(search) = &self.search {
            state.set_search(search);
        }
        state.set_preset(self.preset);
        for category in &self.categories {
            state.selected_categories.insert(category.to_lowercase());
        }
        for origin in &self.origins {
            state.selected_origins.insert(origin.clone());
        }
        if let Some(max) = self.max_price {
            state.set_max_price(max);
        }
        for tag in &self.tags {
            state.active_tags.insert(tag.clone());
        }

        state
    }
}
