//! エラー型定義

use thiserror::Error;

/// アップロード失敗時にユーザーへ表示するメッセージ
pub const UPLOAD_FAILED_MESSAGE: &str = "Error uploading images. Please try again.";

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// アップロードの失敗理由
///
/// 画面上はすべて同じアラートにまとめるが、ログには種別を残す。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("no files to upload")]
    EmptySubmission,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("server responded with HTTP {status}")]
    Server { status: u16, body: String },

    #[error("unexpected response body: {0}")]
    Protocol(String),

    #[error("request timed out after {0}s")]
    Timeout(u64),
}

impl UploadError {
    /// ログ用の種別名
    pub fn kind(&self) -> &'static str {
        match self {
            UploadError::EmptySubmission => "empty",
            UploadError::Transport(_) => "transport",
            UploadError::Server { .. } => "server",
            UploadError::Protocol(_) => "protocol",
            UploadError::Timeout(_) => "timeout",
        }
    }
}
