use crate::client::LogClient;
use crate::errors::LogError;
use crate::models::ActionRecord;
use crate::storage::LogStore;

/// Destination for confirmed actions.
#[derive(Debug, Clone)]
pub enum LogSink {
    Local(LogStore),
    Remote(LogClient),
}

impl LogSink {
    pub async fn submit(&self, record: &ActionRecord) -> Result<String, LogError> {
        match self {
            LogSink::Local(store) => store
                .append(record)
                .await
                .map_err(|_| LogError::new("Internal server error")),
            LogSink::Remote(client) => client.log(record).await,
        }
    }
}
