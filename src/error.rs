use objdetect_common::UploadError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObjDetectError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("対応形式の画像が見つかりません: {0}")]
    NoImagesFound(String),

    #[error("HTTPクライアント初期化エラー: {0}")]
    HttpClient(String),

    #[error("アップロード失敗: {0}")]
    Upload(#[from] UploadError),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl From<objdetect_common::Error> for ObjDetectError {
    fn from(error: objdetect_common::Error) -> Self {
        match error {
            objdetect_common::Error::Config(msg) => ObjDetectError::Config(msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, ObjDetectError>;
