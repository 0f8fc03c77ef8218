//! 解析API呼び出し
//!
//! 選択された画像を multipart/form-data で `/api/analyze` へ送信し、
//! 返ってきたJSON配列を解析結果として返す。
//! 応答待ちは設定のタイムアウトで打ち切り、fetch は AbortController で中断する。

use futures::future::{select, Either};
use futures::pin_mut;
use gloo::timers::future::TimeoutFuture;
use objdetect_common::{
    check_status, parse_analysis_response, AnalysisResult, ClientConfig, UploadError,
    UPLOAD_FIELD_NAME,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, File, FormData, Request, RequestInit, RequestMode, Response};

fn js_error_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn transport(value: JsValue) -> UploadError {
    UploadError::Transport(js_error_message(&value))
}

fn timeout_millis(config: &ClientConfig) -> u32 {
    u32::try_from(config.timeout().as_millis()).unwrap_or(u32::MAX)
}

/// ファイルを `images` フィールドに選択順で積む
///
/// Content-Type（boundary付き）はブラウザが設定するため、ここでは指定しない。
pub fn build_form_data(files: &[File]) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    for file in files {
        form.append_with_blob_and_filename(UPLOAD_FIELD_NAME, file, &file.name())?;
    }
    Ok(form)
}

/// POSTしてステータスと本文を受け取る
async fn post_form(
    url: &str,
    form: &FormData,
    controller: &AbortController,
) -> Result<(u16, String), UploadError> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form.as_ref());
    opts.set_signal(Some(&controller.signal()));

    let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;

    let window = web_sys::window()
        .ok_or_else(|| UploadError::Transport("window is not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let resp: Response = resp_value.dyn_into().map_err(transport)?;

    let status = resp.status();
    let body = JsFuture::from(resp.text().map_err(transport)?)
        .await
        .map_err(transport)?
        .as_string()
        .unwrap_or_default();

    Ok((status, body))
}

/// 画像を解析サーバへ送信
///
/// # Arguments
/// * `config` - 接続設定（ホスト、タイムアウト）
/// * `files` - 受付済みの画像（空の場合は送信しない）
///
/// # Returns
/// サーバが返した順序の解析結果
pub async fn submit(
    config: &ClientConfig,
    files: &[File],
) -> Result<Vec<AnalysisResult>, UploadError> {
    if files.is_empty() {
        return Err(UploadError::EmptySubmission);
    }

    let url = config
        .endpoint_url()
        .map_err(|e| UploadError::Transport(e.to_string()))?;
    let form = build_form_data(files).map_err(transport)?;
    let controller = AbortController::new().map_err(transport)?;

    let request = post_form(&url, &form, &controller);
    let timeout = TimeoutFuture::new(timeout_millis(config));
    pin_mut!(request, timeout);

    match select(request, timeout).await {
        Either::Left((outcome, _)) => {
            let (status, body) = outcome?;
            check_status(status, &body)?;
            parse_analysis_response(&body)
        }
        Either::Right(_) => {
            controller.abort();
            Err(UploadError::Timeout(config.timeout().as_secs()))
        }
    }
}
