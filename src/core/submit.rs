use crate::core::{ConfigProvider, FormSource, OrderData, StatusLevel, StatusSink};
use crate::utils::error::{Result, SubmitError};
use reqwest::Client;

pub const SUBMITTING_TEXT: &str = "Submitting order...";
pub const SUCCESS_TEXT: &str = "Order submitted successfully!";
pub const FAILURE_TEXT: &str = "Error submitting order!";

/// One-shot order submission: read fields, normalize, POST, report status.
///
/// The handler owns its collaborators and takes `&self`, so overlapping
/// calls are not serialized; the status sink sees whichever write lands
/// last.
pub struct SubmitHandler<F: FormSource, S: StatusSink, C: ConfigProvider> {
    form: F,
    status: S,
    config: C,
    client: Client,
}

impl<F: FormSource, S: StatusSink, C: ConfigProvider> SubmitHandler<F, S, C> {
    pub fn new(form: F, status: S, config: C) -> Self {
        Self {
            form,
            status,
            config,
            client: Client::new(),
        }
    }

    /// Run one submission. On success returns the status message that was
    /// displayed; on any failure the status sink already shows the generic
    /// failure text and the form is left untouched.
    pub async fn submit(&self) -> Result<String> {
        match self.try_submit().await {
            Ok(message) => Ok(message),
            Err(e) => {
                self.status.set_status(FAILURE_TEXT, StatusLevel::Failure);
                Err(e)
            }
        }
    }

    async fn try_submit(&self) -> Result<String> {
        let fields = self.form.fields().await?;

        // 日期在送出前就正規化；解析失敗直接拒絕，不發出請求
        let order = OrderData::from_form(fields)?;

        self.status
            .set_status(SUBMITTING_TEXT, StatusLevel::InProgress);

        let mut request = self
            .client
            .post(self.config.api_endpoint())
            .header("Content-Type", "application/json")
            .json(&order);

        if let Some(timeout) = self.config.timeout_seconds() {
            request = request.timeout(std::time::Duration::from_secs(timeout));
        }

        tracing::debug!(
            "📡 Submitting order {} to: {}",
            order.order_id,
            self.config.api_endpoint()
        );

        let response = request.send().await?;
        tracing::debug!("📡 API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(SubmitError::RejectedError {
                status: response.status().as_u16(),
            });
        }

        let body: serde_json::Value = response.json().await?;

        let message = body
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or(SUCCESS_TEXT)
            .to_string();

        self.status.set_status(&message, StatusLevel::Success);

        // 成功後才清空表單
        self.form.reset().await?;

        Ok(message)
    }
}
