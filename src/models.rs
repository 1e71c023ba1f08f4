use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogType {
    Medication,
    Sentiment,
}

impl LogType {
    pub fn as_str(self) -> &'static str {
        match self {
            LogType::Medication => "medication",
            LogType::Sentiment => "sentiment",
        }
    }

    /// Collection the stored log lands in.
    pub fn collection(self) -> &'static str {
        match self {
            LogType::Medication => "medicationLogging",
            LogType::Sentiment => "walkingSentimentLogging",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            LogType::Medication => "Medication",
            LogType::Sentiment => "Sentiment",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "medication" => Some(LogType::Medication),
            "sentiment" => Some(LogType::Sentiment),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalkingStatus {
    Difficult,
    Okay,
    Good,
}

impl WalkingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            WalkingStatus::Difficult => "difficult",
            WalkingStatus::Okay => "okay",
            WalkingStatus::Good => "good",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "difficult" => Some(WalkingStatus::Difficult),
            "okay" => Some(WalkingStatus::Okay),
            "good" => Some(WalkingStatus::Good),
            _ => None,
        }
    }
}

impl fmt::Display for WalkingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the four action buttons on the main page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Medication,
    Walking(WalkingStatus),
}

impl Button {
    /// Render order on the main page.
    pub const ALL: [Button; 4] = [
        Button::Medication,
        Button::Walking(WalkingStatus::Difficult),
        Button::Walking(WalkingStatus::Okay),
        Button::Walking(WalkingStatus::Good),
    ];

    pub fn key(self) -> &'static str {
        match self {
            Button::Medication => "medication",
            Button::Walking(WalkingStatus::Difficult) => "walking-difficult",
            Button::Walking(WalkingStatus::Okay) => "walking-okay",
            Button::Walking(WalkingStatus::Good) => "walking-good",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Button::Medication => "💊 I Took My Medication",
            Button::Walking(WalkingStatus::Difficult) => "🚶‍♂️ Walking is Difficult",
            Button::Walking(WalkingStatus::Okay) => "🚶‍♂️ Walking is Okay",
            Button::Walking(WalkingStatus::Good) => "🚶‍♂️ Walking is Good",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Button::Medication => "#4CAF50",
            Button::Walking(WalkingStatus::Difficult) => "#f44336",
            Button::Walking(WalkingStatus::Okay) => "#ff9800",
            Button::Walking(WalkingStatus::Good) => "#4CAF50",
        }
    }

    /// Form target for the no-script path.
    pub fn press_path(self) -> String {
        match self {
            Button::Medication => "/press/medication".to_string(),
            Button::Walking(status) => format!("/press/walking/{status}"),
        }
    }

    /// Confirmation page shown after a successful log.
    pub fn confirmation_target(self) -> String {
        match self {
            Button::Medication => "medication.html".to_string(),
            Button::Walking(status) => format!("walking.html?status={status}"),
        }
    }

    pub fn record(self, timestamp: String, date: String) -> ActionRecord {
        match self {
            Button::Medication => ActionRecord {
                log_type: LogType::Medication,
                timestamp,
                date,
                status: None,
            },
            Button::Walking(status) => ActionRecord {
                log_type: LogType::Sentiment,
                timestamp,
                date,
                status: Some(status),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRecord {
    pub log_type: LogType,
    pub timestamp: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<WalkingStatus>,
}

/// Body returned by the logging endpoint, success or not.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LogResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LogResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: Some("success".to_string()),
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self {
            status: Some("error".to_string()),
            message: None,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoredLog {
    pub log_type: LogType,
    pub timestamp: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<WalkingStatus>,
    #[serde(rename = "server_timestamp")]
    pub server_timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(rename = "medicationLogging", default)]
    pub medication_logs: Vec<StoredLog>,
    #[serde(rename = "walkingSentimentLogging", default)]
    pub walking_sentiment_logs: Vec<StoredLog>,
}

impl AppData {
    pub fn collection_mut(&mut self, log_type: LogType) -> &mut Vec<StoredLog> {
        match log_type {
            LogType::Medication => &mut self.medication_logs,
            LogType::Sentiment => &mut self.walking_sentiment_logs,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WalkingQuery {
    pub status: Option<String>,
}
