use calcul::utils::error::{CalcError, ErrorSeverity};
use calcul::utils::{logger, validation::Validate};
use calcul::{calculate_number, get_payment_token_from_api, send_payment_request_to_api};
use calcul::{CliConfig, TomlConfig};
use clap::Parser;

fn exit_on_error(context: &str, e: &CalcError) -> ! {
    tracing::error!(
        "❌ {}: {} (Severity: {:?})",
        context,
        e,
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 設定檔需在日誌初始化之前載入，以取得 logging 區段
    let file_config = match &config.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(file_config) => Some(file_config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    // 初始化日誌
    let log_level = file_config.as_ref().and_then(|c| c.log_level());
    if file_config.as_ref().is_some_and(|c| c.json_logging()) {
        logger::init_json_logger(log_level);
    } else {
        logger::init_cli_logger_with_level(config.verbose, log_level);
    }

    tracing::info!("Starting calcul CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Some(file_config) = &file_config {
        if let Err(e) = file_config.validate() {
            exit_on_error("Configuration validation failed", &e);
        }
    }
    if let Err(e) = config.validate() {
        exit_on_error("Argument validation failed", &e);
    }

    if config.payment {
        if let Some(operation) = config.ignored_operation() {
            tracing::warn!("--type {} is ignored with --payment, using SUM", operation);
        }
        tracing::info!("Sending payment request: {} + {}", config.a, config.b);
        if let Err(e) = send_payment_request_to_api(config.a, config.b) {
            exit_on_error("Payment request failed", &e);
        }
    } else {
        let operation = match config.resolve_operation(file_config.as_ref()) {
            Ok(operation) => operation,
            Err(e) => exit_on_error("Configuration validation failed", &e),
        };

        tracing::debug!("Dispatching {} with ({}, {})", operation, config.a, config.b);
        match calculate_number(&operation, config.a, config.b) {
            Ok(result) => {
                tracing::info!("✅ {} {} {} = {}", operation, config.a, config.b, result);
                println!("{}", result);
            }
            Err(e) => exit_on_error("Calculation failed", &e),
        }
    }

    if let Some(success) = config.token {
        match get_payment_token_from_api(success).await {
            Some(token) => println!("{}", serde_json::to_string(&token)?),
            None => {
                tracing::warn!("No payment token returned");
                println!("null");
            }
        }
    }

    Ok(())
}
