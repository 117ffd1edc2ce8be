use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform wrapper around every data endpoint's response.
///
/// `success = true` implies `result` is present (possibly an empty array, or
/// a plain string when the source fell back to a string rendering);
/// `success = false` implies `result` is null and `message` explains why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoutResponse {
    pub success: bool,
    pub result: Option<Value>,
    pub message: Option<String>,
}

impl ScoutResponse {
    pub fn ok(result: Value, message: Option<String>) -> ScoutResponse {
        ScoutResponse {
            success: true,
            result: Some(result),
            message,
        }
    }
}

/// Body of the root liveness endpoint.
#[derive(Debug, Serialize)]
pub struct RootInfo {
    pub message: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    #[test]
    fn envelope_round_trip_preserves_records() {
        let mut row = Map::new();
        row.insert("name".to_string(), json!("A"));
        row.insert("saves".to_string(), json!(5));
        row.insert("clean_sheet".to_string(), json!(true));
        row.insert("note".to_string(), Value::Null);

        let envelope = ScoutResponse::ok(json!([Value::Object(row)]), None);
        let encoded = serde_json::to_string(&envelope).unwrap();
        let decoded: ScoutResponse = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded, envelope);
        // Key order survives the trip as well.
        let rows = decoded.result.unwrap();
        let keys: Vec<&str> = rows[0].as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["name", "saves", "clean_sheet", "note"]);
    }

    #[test]
    fn failure_envelope_carries_message() {
        let envelope = ScoutResponse {
            success: false,
            result: None,
            message: Some("boom".to_string()),
        };
        let encoded = serde_json::to_value(&envelope).unwrap();
        assert_eq!(encoded["success"], json!(false));
        assert_eq!(encoded["result"], Value::Null);
        assert_eq!(encoded["message"], json!("boom"));
    }
}
