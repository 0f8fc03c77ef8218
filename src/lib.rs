//! objdetect - 画像をAI解析サーバへ送り、物体と欠陥の判定結果を表示する

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod scanner;
