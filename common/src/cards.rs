//! 結果カードの表示データ
//!
//! 解析結果一覧からカード表示用のデータを作る。Web画面とCLI出力の両方で使う。

use crate::types::{AnalysisResult, DefectStatus};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResultCard {
    /// 一覧内の位置
    pub key: usize,
    pub thumbnail: String,
    pub object_name: String,
    pub status: DefectStatus,
    pub explanation: String,
}

impl ResultCard {
    pub fn badge_label(&self) -> &'static str {
        self.status.label()
    }

    pub fn badge_class(&self) -> &'static str {
        self.status.css_class()
    }

    /// 画像の代替テキスト
    pub fn alt_text(&self) -> &str {
        &self.object_name
    }
}

pub fn result_cards(results: &[AnalysisResult]) -> Vec<ResultCard> {
    results
        .iter()
        .enumerate()
        .map(|(key, r)| ResultCard {
            key,
            thumbnail: r.thumbnail.clone(),
            object_name: r.object_name.clone(),
            status: r.defect,
            explanation: r.explanation.clone(),
        })
        .collect()
}
