//! 解析結果のテキスト表示

use objdetect_common::{result_cards, AnalysisResult};
use serde_json::Value;

const THUMBNAIL_PREVIEW_CHARS: usize = 60;

fn shorten(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

/// 結果一覧を1件ずつブロックにして返す
pub fn render_results(results: &[AnalysisResult]) -> String {
    if results.is_empty() {
        return "(no objects returned)\n".to_string();
    }

    let mut out = String::new();
    for card in result_cards(results) {
        out.push_str(&format!(
            "[{}] {} - {}\n",
            card.key + 1,
            card.object_name,
            card.badge_label()
        ));
        for line in card.explanation.lines() {
            out.push_str(&format!("    {}\n", line));
        }
        if !card.thumbnail.is_empty() {
            out.push_str(&format!(
                "    thumbnail: {}\n",
                shorten(&card.thumbnail, THUMBNAIL_PREVIEW_CHARS)
            ));
        }
    }
    out
}

/// サーバの応答JSONを整形して返す（値は書き換えない）
pub fn render_raw_json(raw: &Value) -> serde_json::Result<String> {
    serde_json::to_string_pretty(raw)
}
