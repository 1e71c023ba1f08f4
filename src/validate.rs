use crate::models::{ActionRecord, LogType, WalkingStatus};
use serde_json::Value;

const REQUIRED_FIELDS: [&str; 3] = ["logType", "timestamp", "date"];

/// Checks an incoming logging request and builds the record it describes.
pub fn validate_health_data(body: Option<&Value>) -> Result<ActionRecord, String> {
    let Some(fields) = body.and_then(Value::as_object).filter(|map| !map.is_empty()) else {
        return Err("No JSON data provided".to_string());
    };

    for field in REQUIRED_FIELDS {
        if !fields.contains_key(field) {
            return Err(format!("Missing required field: {field}"));
        }
    }

    let log_type = fields["logType"]
        .as_str()
        .and_then(LogType::parse)
        .ok_or_else(|| "Invalid logType. Must be one of: ['medication', 'sentiment']".to_string())?;

    let status = match log_type {
        LogType::Sentiment => {
            let Some(status) = fields.get("status") else {
                return Err("Sentiment logs must include status field".to_string());
            };
            let status = status.as_str().and_then(WalkingStatus::parse).ok_or_else(|| {
                "Invalid sentiment status. Must be one of: ['difficult', 'okay', 'good']".to_string()
            })?;
            Some(status)
        }
        LogType::Medication => None,
    };

    let timestamp = non_empty_string(&fields["timestamp"])
        .ok_or_else(|| "timestamp must be a non-empty string".to_string())?;
    let date = non_empty_string(&fields["date"])
        .ok_or_else(|| "date must be a non-empty string".to_string())?;

    Ok(ActionRecord {
        log_type,
        timestamp,
        date,
        status,
    })
}

fn non_empty_string(value: &Value) -> Option<String> {
    value.as_str().filter(|s| !s.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(body: Value) -> Result<ActionRecord, String> {
        validate_health_data(Some(&body))
    }

    #[test]
    fn accepts_medication_without_status() {
        let record = check(json!({
            "logType": "medication",
            "timestamp": "8:00 AM",
            "date": "Friday, October 16, 2026"
        }))
        .unwrap();
        assert_eq!(record.log_type, LogType::Medication);
        assert_eq!(record.status, None);
    }

    #[test]
    fn rejects_missing_or_empty_body() {
        assert_eq!(validate_health_data(None).unwrap_err(), "No JSON data provided");
        assert_eq!(check(json!({})).unwrap_err(), "No JSON data provided");
        assert_eq!(check(json!([1, 2])).unwrap_err(), "No JSON data provided");
    }

    #[test]
    fn reports_first_missing_field() {
        let err = check(json!({ "logType": "medication", "date": "x" })).unwrap_err();
        assert_eq!(err, "Missing required field: timestamp");
    }

    #[test]
    fn rejects_unknown_log_type() {
        let err = check(json!({ "logType": "sleep", "timestamp": "a", "date": "b" })).unwrap_err();
        assert_eq!(err, "Invalid logType. Must be one of: ['medication', 'sentiment']");
    }

    #[test]
    fn sentiment_requires_known_status() {
        let base = json!({ "logType": "sentiment", "timestamp": "a", "date": "b" });
        assert_eq!(check(base.clone()).unwrap_err(), "Sentiment logs must include status field");

        let mut bad = base.clone();
        bad["status"] = json!("great");
        assert_eq!(
            check(bad).unwrap_err(),
            "Invalid sentiment status. Must be one of: ['difficult', 'okay', 'good']"
        );

        let mut good = base;
        good["status"] = json!("okay");
        assert_eq!(check(good).unwrap().status, Some(WalkingStatus::Okay));
    }

    #[test]
    fn timestamp_and_date_must_be_non_empty_strings() {
        let err = check(json!({ "logType": "medication", "timestamp": "", "date": "b" })).unwrap_err();
        assert_eq!(err, "timestamp must be a non-empty string");

        let err = check(json!({ "logType": "medication", "timestamp": "a", "date": 5 })).unwrap_err();
        assert_eq!(err, "date must be a non-empty string");
    }
}
