//! セッション状態
//!
//! 画面が保持する状態をまとめたもの。ページを閉じれば破棄される。
//!
//! アップロードは発行順の連番（チケット）で管理し、最後に発行したチケットの
//! 応答だけを反映する。古い応答は破棄する。

use crate::error::UploadError;
use crate::types::AnalysisResult;

/// アップロード要求ごとに発行される連番
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// `settle` の結果
#[derive(Debug, Clone, PartialEq)]
pub enum Settlement {
    /// 結果一覧を置き換えた
    Applied { count: usize },
    /// 失敗（結果一覧はそのまま）
    Failed(UploadError),
    /// より新しい要求が発行済みのため破棄した（失敗だった場合はその内容）
    Stale { error: Option<UploadError> },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    results: Vec<AnalysisResult>,
    is_loading: bool,
    selected_image: Option<String>,
    latest_ticket: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> &[AnalysisResult] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn selected_image(&self) -> Option<&str> {
        self.selected_image.as_deref()
    }

    /// 新しいアップロードを開始する
    pub fn begin_upload(&mut self) -> RequestTicket {
        self.latest_ticket += 1;
        self.is_loading = true;
        RequestTicket(self.latest_ticket)
    }

    /// 応答を反映する
    pub fn settle(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<Vec<AnalysisResult>, UploadError>,
    ) -> Settlement {
        if ticket.0 != self.latest_ticket {
            return Settlement::Stale { error: outcome.err() };
        }

        self.is_loading = false;
        match outcome {
            Ok(results) => {
                let count = results.len();
                self.results = results;
                Settlement::Applied { count }
            }
            Err(error) => Settlement::Failed(error),
        }
    }

    /// 拡大表示を開く（表示中・参照が空の場合は無視）
    pub fn open_viewer(&mut self, image_ref: impl Into<String>) -> bool {
        let image_ref = image_ref.into();
        if self.selected_image.is_some() || image_ref.trim().is_empty() {
            return false;
        }
        self.selected_image = Some(image_ref);
        true
    }

    pub fn close_viewer(&mut self) -> bool {
        self.selected_image.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DefectStatus;

    fn result(name: &str) -> AnalysisResult {
        AnalysisResult {
            thumbnail: format!("https://example.com/{}.png", name),
            object_name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_state() {
        let session = SessionState::new();
        assert!(session.results().is_empty());
        assert!(!session.is_loading());
        assert_eq!(session.selected_image(), None);
    }

    #[test]
    fn test_successful_upload_replaces_results() {
        let mut session = SessionState::new();

        let ticket = session.begin_upload();
        assert!(session.is_loading());
        assert_eq!(
            session.settle(ticket, Ok(vec![result("a"), result("b")])),
            Settlement::Applied { count: 2 }
        );
        assert!(!session.is_loading());

        let ticket = session.begin_upload();
        session.settle(ticket, Ok(vec![result("c")]));
        let names: Vec<&str> = session.results().iter().map(|r| r.object_name.as_str()).collect();
        assert_eq!(names, vec!["c"]);
    }

    #[test]
    fn test_failed_upload_keeps_results() {
        let mut session = SessionState::new();
        let ticket = session.begin_upload();
        session.settle(ticket, Ok(vec![result("kept")]));
        let before = session.results().to_vec();

        for error in [
            UploadError::Transport("connection refused".into()),
            UploadError::Server { status: 500, body: String::new() },
            UploadError::Protocol("not an array".into()),
            UploadError::Timeout(60),
        ] {
            let ticket = session.begin_upload();
            let settlement = session.settle(ticket, Err(error.clone()));
            assert_eq!(settlement, Settlement::Failed(error));
            assert_eq!(session.results(), before.as_slice());
            assert!(!session.is_loading());
        }
    }

    #[test]
    fn test_server_error_on_empty_session() {
        let mut session = SessionState::new();
        let ticket = session.begin_upload();
        session.settle(ticket, Err(UploadError::Server { status: 500, body: String::new() }));
        assert!(session.results().is_empty());
        assert!(!session.is_loading());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut session = SessionState::new();
        let first = session.begin_upload();
        let second = session.begin_upload();
        assert!(second > first);

        // 後発が先に返る
        assert_eq!(
            session.settle(second, Ok(vec![result("new")])),
            Settlement::Applied { count: 1 }
        );
        assert_eq!(
            session.settle(first, Ok(vec![result("old")])),
            Settlement::Stale { error: None }
        );
        assert_eq!(session.results()[0].object_name, "new");
    }

    #[test]
    fn test_loading_until_latest_settles() {
        let mut session = SessionState::new();
        let first = session.begin_upload();
        let second = session.begin_upload();

        assert_eq!(
            session.settle(first, Err(UploadError::Timeout(1))),
            Settlement::Stale { error: Some(UploadError::Timeout(1)) }
        );
        assert!(session.is_loading());

        session.settle(second, Ok(vec![]));
        assert!(!session.is_loading());
    }

    #[test]
    fn test_sequential_identical_uploads_are_idempotent() {
        let response = vec![AnalysisResult {
            defect: DefectStatus::Detected,
            ..result("bolt")
        }];
        let mut session = SessionState::new();

        let ticket = session.begin_upload();
        session.settle(ticket, Ok(response.clone()));
        let once = session.results().to_vec();

        let ticket = session.begin_upload();
        session.settle(ticket, Ok(response));
        assert_eq!(session.results(), once.as_slice());
    }

    #[test]
    fn test_viewer_transitions() {
        let mut session = SessionState::new();
        assert!(session.open_viewer("https://example.com/a.png"));
        assert_eq!(session.selected_image(), Some("https://example.com/a.png"));

        // 表示中に別画像は開けない
        assert!(!session.open_viewer("https://example.com/b.png"));
        assert_eq!(session.selected_image(), Some("https://example.com/a.png"));

        assert!(session.close_viewer());
        assert_eq!(session.selected_image(), None);
        assert!(!session.close_viewer());
    }

    #[test]
    fn test_viewer_ignores_empty_reference() {
        let mut session = SessionState::new();
        assert!(!session.open_viewer(""));
        assert!(!session.open_viewer("   "));
        assert_eq!(session.selected_image(), None);

        assert!(session.open_viewer("https://example.com/a.png"));
    }

    #[test]
    fn test_upload_does_not_touch_viewer() {
        let mut session = SessionState::new();
        session.open_viewer("data:image/png;base64,AAAA");
        let ticket = session.begin_upload();
        session.settle(ticket, Ok(vec![result("x")]));
        assert_eq!(session.selected_image(), Some("data:image/png;base64,AAAA"));
    }
}
