use crate::domain::model::{FormFields, StatusLevel};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the four order fields come from, and how they get cleared
/// after a successful submission.
#[async_trait]
pub trait FormSource: Send + Sync {
    async fn fields(&self) -> Result<FormFields>;
    async fn reset(&self) -> Result<()>;
}

/// The status region: in-progress / success / failure text with a color.
pub trait StatusSink: Send + Sync {
    fn set_status(&self, text: &str, level: StatusLevel);
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
}
