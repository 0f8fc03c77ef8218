//! 解析サーバ連携（multipartアップロード）
//!
//! Web版と同じワイヤ契約で `/api/analyze` に画像を送る。
//! 失敗は `UploadError` の種別に分類して返す。

use crate::error::{ObjDetectError, Result};
use crate::scanner::UploadFile;
use objdetect_common::{
    check_status, parse_analysis_body, AnalysisResponse, ClientConfig, SessionState, Settlement,
    UploadError, UPLOAD_FIELD_NAME,
};
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::time::Duration;

/// `submit_into` の結果
///
/// `raw` はセッションに反映された応答のJSON（正規化前）。
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub settlement: Settlement,
    pub raw: Option<Value>,
}

pub struct UploadClient {
    http: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl UploadClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let endpoint = config.endpoint_url()?;
        let timeout = config.timeout();
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ObjDetectError::HttpClient(e.to_string()))?;

        Ok(Self { http, endpoint, timeout })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn classify(&self, error: reqwest::Error) -> UploadError {
        if error.is_timeout() {
            UploadError::Timeout(self.timeout.as_secs())
        } else {
            UploadError::Transport(error.to_string())
        }
    }

    fn build_form(files: &[UploadFile]) -> std::result::Result<Form, UploadError> {
        files.iter().try_fold(Form::new(), |form, file| {
            let part = Part::bytes(file.bytes.clone())
                .file_name(file.file_name.clone())
                .mime_str(&file.mime_type)
                .map_err(|e| UploadError::Transport(e.to_string()))?;
            Ok(form.part(UPLOAD_FIELD_NAME, part))
        })
    }

    /// 画像を送信して解析結果を受け取る
    ///
    /// # Arguments
    /// * `files` - 送信順に並んだ画像（空の場合は送信しない）
    pub async fn submit(
        &self,
        files: &[UploadFile],
    ) -> std::result::Result<AnalysisResponse, UploadError> {
        if files.is_empty() {
            return Err(UploadError::EmptySubmission);
        }

        let form = Self::build_form(files)?;

        tracing::debug!("POST {} ({} file(s))", self.endpoint, files.len());

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        check_status(status, &body)?;
        parse_analysis_body(&body)
    }

    /// セッションにチケットを発行して送信し、結果を反映する
    pub async fn submit_into(&self, session: &mut SessionState, files: &[UploadFile]) -> Submission {
        if files.is_empty() {
            return Submission {
                settlement: Settlement::Failed(UploadError::EmptySubmission),
                raw: None,
            };
        }

        let ticket = session.begin_upload();
        let (outcome, raw) = match self.submit(files).await {
            Ok(response) => (Ok(response.results), Some(response.raw)),
            Err(error) => (Err(error), None),
        };
        let settlement = session.settle(ticket, outcome);

        match &settlement {
            Settlement::Applied { count } => tracing::info!("analysis finished: {} result(s)", count),
            Settlement::Failed(error) => {
                tracing::error!(kind = error.kind(), "Error uploading images: {}", error)
            }
            Settlement::Stale { error: None } => {
                tracing::warn!("discarded response of a superseded upload")
            }
            Settlement::Stale { error: Some(error) } => {
                tracing::warn!(kind = error.kind(), "superseded upload failed: {}", error)
            }
        }

        let raw = match settlement {
            Settlement::Applied { .. } => raw,
            _ => None,
        };
        Submission { settlement, raw }
    }
}
