use crate::errors::AppError;
use crate::models::{ActionRecord, AppData, StoredLog};
use chrono::{SecondsFormat, Utc};
use std::{path::Path, path::PathBuf, sync::Arc};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{error, info};

pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file: {err}");
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            AppData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

/// Health logs kept in memory and mirrored to a JSON file.
#[derive(Debug, Clone)]
pub struct LogStore {
    pub path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
}

impl LogStore {
    pub fn new(path: PathBuf, data: AppData) -> Self {
        Self {
            path,
            data: Arc::new(Mutex::new(data)),
        }
    }

    pub async fn open(path: PathBuf) -> Self {
        let data = load_data(&path).await;
        Self::new(path, data)
    }

    /// Stores a validated record and returns the confirmation message.
    pub async fn append(&self, record: &ActionRecord) -> Result<String, AppError> {
        let stored = StoredLog {
            log_type: record.log_type,
            timestamp: record.timestamp.clone(),
            date: record.date.clone(),
            status: record.status,
            server_timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false),
        };

        let mut data = self.data.lock().await;
        data.collection_mut(record.log_type).push(stored);

        if let Err(err) = persist_data(&self.path, &data).await {
            data.collection_mut(record.log_type).pop();
            error!("error storing health log: {}", err.message);
            return Err(err);
        }

        let count = data.medication_logs.len() + data.walking_sentiment_logs.len();
        info!(
            "stored {} log #{count} in collection {}",
            record.log_type.as_str(),
            record.log_type.collection()
        );
        Ok(format!("{} log stored successfully", record.log_type.title()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LogType, WalkingStatus};

    fn temp_path(name: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("health_log_{name}_{}_{nanos}.json", std::process::id()))
    }

    fn sentiment() -> ActionRecord {
        ActionRecord {
            log_type: LogType::Sentiment,
            timestamp: "9:05 AM".into(),
            date: "Friday, October 16, 2026".into(),
            status: Some(WalkingStatus::Okay),
        }
    }

    #[tokio::test]
    async fn append_routes_by_log_type_and_persists() {
        let path = temp_path("append");
        let store = LogStore::new(path.clone(), AppData::default());

        let message = store.append(&sentiment()).await.unwrap();
        assert_eq!(message, "Sentiment log stored successfully");

        let reloaded = load_data(&path).await;
        assert!(reloaded.medication_logs.is_empty());
        assert_eq!(reloaded.walking_sentiment_logs.len(), 1);
        assert_eq!(reloaded.walking_sentiment_logs[0].status, Some(WalkingStatus::Okay));
        assert!(reloaded.walking_sentiment_logs[0].server_timestamp.ends_with("+00:00"));

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn failed_persist_rolls_back() {
        let path = std::env::temp_dir()
            .join("health_log_missing_dir_for_tests")
            .join("nested")
            .join("logs.json");
        let store = LogStore::new(path, AppData::default());

        assert!(store.append(&sentiment()).await.is_err());
        assert!(store.data.lock().await.walking_sentiment_logs.is_empty());
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let data = load_data(&temp_path("missing")).await;
        assert!(data.medication_logs.is_empty());
        assert!(data.walking_sentiment_logs.is_empty());
    }
}
