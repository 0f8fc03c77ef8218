//! APIレスポンスパーサー
//!
//! `/api/analyze` のHTTPステータスと本文から解析結果を取り出す。
//! 配列以外・オブジェクト以外の要素を含む本文はプロトコルエラーとする。

use crate::error::UploadError;
use crate::types::AnalysisResult;
use serde::Deserialize;
use serde_json::Value;

/// ログに残す本文の最大文字数
const BODY_PREVIEW_CHARS: usize = 200;

fn preview(body: &str) -> String {
    let mut chars = body.chars();
    let head: String = chars.by_ref().take(BODY_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// HTTPステータスを検査（2xx以外はサーバエラー）
pub fn check_status(status: u16, body: &str) -> Result<(), UploadError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(UploadError::Server {
            status,
            body: preview(body),
        })
    }
}

/// パース済みのレスポンス
///
/// `raw` はサーバが返したJSON配列そのもの（正規化前）。
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResponse {
    pub results: Vec<AnalysisResult>,
    pub raw: Value,
}

/// レスポンス本文をパースし、元のJSONも保持する
///
/// # Returns
/// * `Ok(AnalysisResponse)` - サーバが返した順序のまま
/// * `Err(UploadError::Protocol)` - JSONでない、配列でない、要素がオブジェクトでない
pub fn parse_analysis_body(body: &str) -> Result<AnalysisResponse, UploadError> {
    let raw: Value = serde_json::from_str(body.trim())
        .map_err(|e| UploadError::Protocol(format!("invalid JSON ({}): {}", e, preview(body))))?;

    let Some(items) = raw.as_array() else {
        return Err(UploadError::Protocol(format!(
            "expected a JSON array, got {}",
            json_type_name(&raw)
        )));
    };

    let results = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if !item.is_object() {
                return Err(UploadError::Protocol(format!(
                    "element {} is {}, expected an object",
                    index,
                    json_type_name(item)
                )));
            }
            AnalysisResult::deserialize(item)
                .map_err(|e| UploadError::Protocol(format!("element {}: {}", index, e)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AnalysisResponse { results, raw })
}

/// レスポンス本文をパース
///
/// # Arguments
/// * `body` - レスポンス本文（JSON配列）
///
/// # Examples
/// ```
/// use objdetect_common::parse_analysis_response;
///
/// let body = r#"[{"objectName": "Bolt", "defect": "Yes"}]"#;
/// let results = parse_analysis_response(body).unwrap();
/// assert_eq!(results[0].object_name, "Bolt");
/// ```
pub fn parse_analysis_response(body: &str) -> Result<Vec<AnalysisResult>, UploadError> {
    parse_analysis_body(body).map(|response| response.results)
}
