use anyhow::Result;
use httpmock::prelude::*;
use order_submit::domain::ports::StatusSink;
use order_submit::{
    ArgsForm, CliConfig, FormFields, StatusLevel, SubmitHandler, DEFAULT_ENDPOINT,
};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
struct RecordingStatus {
    updates: Arc<Mutex<Vec<(String, StatusLevel)>>>,
}

impl RecordingStatus {
    fn new() -> Self {
        Self {
            updates: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn updates(&self) -> Vec<(String, StatusLevel)> {
        self.updates.lock().unwrap().clone()
    }
}

impl StatusSink for RecordingStatus {
    fn set_status(&self, text: &str, level: StatusLevel) {
        self.updates.lock().unwrap().push((text.to_string(), level));
    }
}

fn cli_config(api_endpoint: String) -> CliConfig {
    CliConfig {
        order_id: "A1".to_string(),
        store_id: "S9".to_string(),
        date: "2024-03-05".to_string(),
        amount: "19.99".to_string(),
        api_endpoint,
        timeout_seconds: Some(10),
        config: None,
        verbose: false,
    }
}

fn form_from(config: &CliConfig) -> ArgsForm {
    ArgsForm::new(FormFields {
        order_id: config.order_id.clone(),
        store_id: config.store_id.clone(),
        date: config.date.clone(),
        amount: config.amount.clone(),
    })
}

#[tokio::test]
async fn test_end_to_end_submission_with_real_http() -> Result<()> {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/prod/submit-order")
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "order_id": "A1",
                "store_id": "S9",
                "date": "2024-03-05",
                "amount": "19.99"
            }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"message": "Order #42 stored"}));
    });

    let config = cli_config(server.url("/prod/submit-order"));
    let form = form_from(&config);
    let status = RecordingStatus::new();
    let handler = SubmitHandler::new(form, status.clone(), config);

    let message = handler.submit().await?;

    api_mock.assert();
    assert_eq!(message, "Order #42 stored");
    assert_eq!(
        status.updates(),
        vec![
            ("Submitting order...".to_string(), StatusLevel::InProgress),
            ("Order #42 stored".to_string(), StatusLevel::Success),
        ]
    );

    println!("✅ End-to-end submission test passed!");
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_server_error_reports_failure() -> Result<()> {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/prod/submit-order");
        then.status(502).body("Bad Gateway");
    });

    let config = cli_config(server.url("/prod/submit-order"));
    let form = form_from(&config);
    let status = RecordingStatus::new();
    let handler = SubmitHandler::new(form, status.clone(), config);

    let result = handler.submit().await;

    api_mock.assert();
    assert!(result.is_err());
    assert_eq!(
        status.updates().last().unwrap(),
        &("Error submitting order!".to_string(), StatusLevel::Failure)
    );

    Ok(())
}

#[tokio::test]
async fn test_end_to_end_unreachable_endpoint_reports_failure() -> Result<()> {
    // 沒有伺服器在這個埠上
    let config = cli_config("http://127.0.0.1:9/prod/submit-order".to_string());
    let form = form_from(&config);
    let status = RecordingStatus::new();
    let handler = SubmitHandler::new(form, status.clone(), config);

    let result = handler.submit().await;

    assert!(result.is_err());
    assert_eq!(
        status.updates().last().unwrap(),
        &("Error submitting order!".to_string(), StatusLevel::Failure)
    );

    Ok(())
}

#[test]
fn test_default_endpoint_is_the_production_intake_url() {
    assert_eq!(
        DEFAULT_ENDPOINT,
        "https://h4dvf83sph.execute-api.ap-south-1.amazonaws.com/prod/submit-order"
    );
}
