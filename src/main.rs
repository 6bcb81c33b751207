use clap::Parser;
use order_submit::config::EndpointProfile;
use order_submit::utils::{logger, validation::Validate};
use order_submit::{ArgsForm, CliConfig, ConsoleStatus, FormFields, SubmitHandler};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting order-submit CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 套用 TOML 端點設定檔
    if let Some(path) = config.config.clone() {
        tracing::info!("📁 Loading endpoint profile from: {}", path);
        match EndpointProfile::from_file(&path) {
            Ok(profile) => config.apply_profile(&profile),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        }
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 建立表單來源、狀態輸出與提交處理器
    let form = ArgsForm::new(FormFields {
        order_id: config.order_id.clone(),
        store_id: config.store_id.clone(),
        date: config.date.clone(),
        amount: config.amount.clone(),
    });
    let status = ConsoleStatus::new();
    let handler = SubmitHandler::new(form, status, config);

    match handler.submit().await {
        Ok(message) => {
            tracing::info!("✅ Order submitted successfully!");
            tracing::info!("📨 Server response: {}", message);
            println!("✅ {}", message);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Order submission failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                order_submit::utils::error::ErrorSeverity::Low => 0,
                order_submit::utils::error::ErrorSeverity::Medium => 2,
                order_submit::utils::error::ErrorSeverity::High => 1,
                order_submit::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
