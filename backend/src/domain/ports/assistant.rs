//! Driving port for the interactive weather Q&A.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::Error;

/// Use-case answering free-text questions against a JSON weather context.
#[async_trait]
pub trait Assistant: Send + Sync {
    /// Answer `question` using `context`; never fails locally, only on
    /// credential or transport problems.
    async fn answer(&self, question: &str, context: &Value) -> Result<String, Error>;
}
