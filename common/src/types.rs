//! 解析結果の型定義
//!
//! バックエンド `/api/analyze` が返す配列の1要素を表す。
//! 欠陥有無はワイヤ上では文字列 `"Yes"` だが、内部では `DefectStatus` として扱う。

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// 欠陥の有無
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DefectStatus {
    Detected,
    #[default]
    NotDetected,
}

impl DefectStatus {
    /// ワイヤ上の文字列から変換（完全一致の `"Yes"` のみ欠陥あり）
    pub fn from_wire(value: &str) -> Self {
        if value == "Yes" {
            DefectStatus::Detected
        } else {
            DefectStatus::NotDetected
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            DefectStatus::Detected => "Yes",
            DefectStatus::NotDetected => "No",
        }
    }

    pub fn is_defect(&self) -> bool {
        matches!(self, DefectStatus::Detected)
    }

    /// バッジ表示文字列
    pub fn label(&self) -> &'static str {
        match self {
            DefectStatus::Detected => "Defect Detected",
            DefectStatus::NotDetected => "No Defects",
        }
    }

    /// バッジのCSSクラス
    pub fn css_class(&self) -> &'static str {
        match self {
            DefectStatus::Detected => "status-badge defect",
            DefectStatus::NotDetected => "status-badge ok",
        }
    }
}

impl Serialize for DefectStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for DefectStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(value
            .as_str()
            .map(DefectStatus::from_wire)
            .unwrap_or_default())
    }
}

/// AI解析結果（1オブジェクト/1画像）
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// 表示用の画像参照（URLまたはData URL）
    #[serde(default, deserialize_with = "lenient_string")]
    pub thumbnail: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub object_name: String,

    #[serde(default)]
    pub defect: DefectStatus,

    #[serde(default, deserialize_with = "lenient_string")]
    pub explanation: String,
}

/// 文字列以外の値も受け付ける（null は空文字、数値等は文字列化）
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_result_default() {
        let result = AnalysisResult::default();
        assert_eq!(result.thumbnail, "");
        assert_eq!(result.defect, DefectStatus::NotDetected);
    }

    #[test]
    fn test_analysis_result_deserialize() {
        let json = r#"{
            "thumbnail": "data:image/png;base64,iVBORw0KGgo=",
            "objectName": "Bolt",
            "defect": "Yes",
            "explanation": "Crack visible"
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(result.thumbnail, "data:image/png;base64,iVBORw0KGgo=");
        assert_eq!(result.object_name, "Bolt");
        assert_eq!(result.defect, DefectStatus::Detected);
        assert_eq!(result.explanation, "Crack visible");
    }

    #[test]
    fn test_analysis_result_deserialize_missing_fields() {
        let json = r#"{"objectName": "Nut"}"#;

        let result: AnalysisResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(result.object_name, "Nut");
        assert_eq!(result.thumbnail, "");
        assert_eq!(result.explanation, "");
        assert_eq!(result.defect, DefectStatus::NotDetected);
    }

    #[test]
    fn test_analysis_result_deserialize_non_string_fields() {
        let json = r#"{"thumbnail": null, "objectName": 42, "defect": true, "explanation": false}"#;

        let result: AnalysisResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(result.thumbnail, "");
        assert_eq!(result.object_name, "42");
        assert_eq!(result.defect, DefectStatus::NotDetected);
        assert_eq!(result.explanation, "false");
    }

    #[test]
    fn test_defect_status_exact_match() {
        assert_eq!(DefectStatus::from_wire("Yes"), DefectStatus::Detected);
        assert_eq!(DefectStatus::from_wire("yes"), DefectStatus::NotDetected);
        assert_eq!(DefectStatus::from_wire("YES"), DefectStatus::NotDetected);
        assert_eq!(DefectStatus::from_wire("No"), DefectStatus::NotDetected);
        assert_eq!(DefectStatus::from_wire("no"), DefectStatus::NotDetected);
        assert_eq!(DefectStatus::from_wire(""), DefectStatus::NotDetected);
        assert_eq!(DefectStatus::from_wire(" Yes"), DefectStatus::NotDetected);
    }

    #[test]
    fn test_defect_status_labels() {
        assert_eq!(DefectStatus::Detected.label(), "Defect Detected");
        assert_eq!(DefectStatus::NotDetected.label(), "No Defects");
        assert!(DefectStatus::Detected.css_class().contains("defect"));
        assert!(DefectStatus::NotDetected.css_class().contains("ok"));
    }

    #[test]
    fn test_analysis_result_serialize_uses_wire_keys() {
        let result = AnalysisResult {
            object_name: "Gear".to_string(),
            defect: DefectStatus::Detected,
            ..Default::default()
        };

        let json = serde_json::to_string(&result).expect("シリアライズ失敗");
        assert!(json.contains("\"objectName\":\"Gear\""));
        assert!(json.contains("\"defect\":\"Yes\""));
    }
}
