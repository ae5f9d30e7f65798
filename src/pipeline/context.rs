//! Batch context management.
//!
//! Provides batch and record context for logging.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::logging::structured::LogContext;

/// Context for a batch of records validated against one schema.
#[derive(Debug, Clone)]
pub struct BatchContext {
    pub batch_id: String,
    pub schema_name: String,
    pub received_at: DateTime<Utc>,
}

impl BatchContext {
    pub fn new(schema_name: &str) -> Self {
        let batch_id = format!("batch-{}", &Uuid::new_v4().simple().to_string()[..8]);

        Self {
            batch_id,
            schema_name: schema_name.to_string(),
            received_at: Utc::now(),
        }
    }

    /// Logging context for the record at `index`.
    pub fn record_context(&self, index: usize) -> LogContext {
        LogContext::new(&format!("{}#{}", self.batch_id, index)).with_schema(&self.schema_name)
    }

    pub fn log_context(&self) -> LogContext {
        LogContext::new(&self.batch_id).with_schema(&self.schema_name)
    }
}
