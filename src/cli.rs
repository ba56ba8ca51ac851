use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "platepal")]
#[command(about = "Photograph a menu, get every dish explained", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// メニュー写真を解析して料理カードを表示
    Scan {
        /// メニュー写真（画像またはPDF）。省略時は対話入力
        file: Option<PathBuf>,

        /// 結果をJSONで出力して終了
        #[arg(long)]
        json: bool,

        /// 料理イメージを生成しない
        #[arg(long)]
        no_images: bool,

        /// カードを見出しと短い説明だけで表示
        #[arg(long)]
        compact: bool,

        /// 翻訳先言語（設定値を上書き）
        #[arg(short, long)]
        language: Option<String>,
    },

    /// 設定の表示・変更
    Config {
        /// Gemini APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}

impl Commands {
    /// config サブコマンドで設定を表示するか（フラグなしなら表示）
    pub fn shows_config(&self) -> bool {
        match self {
            Commands::Config { set_api_key, show } => *show || set_api_key.is_none(),
            Commands::Scan { .. } => false,
        }
    }
}
