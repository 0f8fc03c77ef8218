//! ファイル受付ルール
//!
//! 受け付けるのは `image/*` かつ拡張子 `.jpeg/.jpg/.png` のファイルのみ。
//! 条件を満たさないファイルはエラーにせず、送信対象から外すだけ。

/// `<input type="file">` の accept 属性
pub const ACCEPT_ATTRIBUTE: &str = "image/*,.jpeg,.jpg,.png";

/// multipart のフィールド名（ファイルごとに繰り返す）
pub const UPLOAD_FIELD_NAME: &str = "images";

const ACCEPTED_EXTENSIONS: &[&str] = &["jpeg", "jpg", "png"];

/// 受付判定の結果（順序は入力順のまま）
#[derive(Debug, Clone, PartialEq)]
pub struct Intake<T> {
    pub accepted: Vec<T>,
    pub rejected: Vec<T>,
}

fn extension_of(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// ファイル名とMIMEタイプから受付可否を判定
///
/// ブラウザがMIMEタイプを空で渡すことがあるため、空の場合は拡張子のみで判定する。
pub fn is_accepted(file_name: &str, mime_type: &str) -> bool {
    let extension_ok = extension_of(file_name)
        .map(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false);
    let mime_ok = mime_type.is_empty() || mime_type.to_ascii_lowercase().starts_with("image/");
    extension_ok && mime_ok
}

/// 拡張子からMIMEタイプを推定
pub fn mime_type_for(file_name: &str) -> Option<&'static str> {
    match extension_of(file_name)?.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        _ => None,
    }
}

/// ファイル列を受付/除外に振り分ける
///
/// `describe` は (ファイル名, MIMEタイプ) を返す。
pub fn partition_accepted<T, F>(files: impl IntoIterator<Item = T>, describe: F) -> Intake<T>
where
    F: Fn(&T) -> (String, String),
{
    let mut intake = Intake {
        accepted: Vec::new(),
        rejected: Vec::new(),
    };

    for file in files {
        let (name, mime_type) = describe(&file);
        if is_accepted(&name, &mime_type) {
            intake.accepted.push(file);
        } else {
            intake.rejected.push(file);
        }
    }

    intake
}
