use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "objdetect")]
#[command(about = "画像をAI解析サーバへ送り、物体と欠陥の判定結果を表示する", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像を解析サーバへ送信して結果を表示
    Analyze {
        /// 画像ファイルまたはフォルダ（JPG/PNGのみ送信）
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// 解析サーバのURL（環境変数より優先）
        #[arg(long)]
        api_base_url: Option<String>,

        /// 応答待ちのタイムアウト（秒）
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// サーバの応答JSONをそのまま出力
        #[arg(long)]
        json: bool,

        /// 応答JSONの保存先
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 現在の接続設定を表示（引数と環境変数から決まる）
    Config {
        /// 解析サーバのURL
        #[arg(long)]
        api_base_url: Option<String>,

        /// 応答待ちのタイムアウト（秒）
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}
