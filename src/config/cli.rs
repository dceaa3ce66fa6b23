use crate::config::toml_config::TomlConfig;
use crate::domain::model::Operation;
use crate::utils::error::Result;
use crate::utils::validation::{validate_finite, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "calcul")]
#[command(about = "Rounded arithmetic and payment totals")]
#[command(allow_negative_numbers = true)]
pub struct CliConfig {
    /// First operand
    pub a: f64,

    /// Second operand
    pub b: f64,

    /// Operation tag: SUM, SUBTRACT or DIVIDE (overrides the config file)
    #[arg(long = "type")]
    pub operation: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Send a payment request (always SUM) and print the total
    #[arg(long)]
    pub payment: bool,

    /// Also request a payment token with the given success flag
    #[arg(long)]
    pub token: Option<bool>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 決定運算標籤：`--type` 優先，其次是設定檔，最後為 SUM
    pub fn resolve_operation(&self, file_config: Option<&TomlConfig>) -> Result<String> {
        if let Some(tag) = &self.operation {
            return Ok(tag.clone());
        }

        let from_file = match file_config {
            Some(config) => config.default_operation()?,
            None => None,
        };

        Ok(from_file.unwrap_or(Operation::Sum).as_tag().to_string())
    }

    /// `--payment` 固定使用 SUM，回傳被忽略的 `--type` 標籤
    pub fn ignored_operation(&self) -> Option<&str> {
        if self.payment {
            self.operation.as_deref()
        } else {
            None
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_finite("a", self.a)?;
        validate_finite("b", self.b)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_negative_operands() {
        let config = CliConfig::parse_from(["calcul", "--type", "SUBTRACT", "-1.4", "4.5"]);
        assert_eq!(config.a, -1.4);
        assert_eq!(config.b, 4.5);
        assert_eq!(config.operation.as_deref(), Some("SUBTRACT"));
        assert!(!config.payment);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_resolve_operation_precedence() {
        let file_config = TomlConfig::from_toml_str(
            r#"
[calculator]
default_operation = "DIVIDE"
"#,
        )
        .unwrap();

        let config = CliConfig::parse_from(["calcul", "1", "2"]);
        assert_eq!(config.resolve_operation(None).unwrap(), "SUM");
        assert_eq!(config.resolve_operation(Some(&file_config)).unwrap(), "DIVIDE");

        let config = CliConfig::parse_from(["calcul", "--type", "sum", "1", "2"]);
        // 顯式標籤原樣傳遞，由 dispatcher 判定是否有效
        assert_eq!(config.resolve_operation(Some(&file_config)).unwrap(), "sum");
    }

    #[test]
    fn test_payment_ignores_explicit_type() {
        let config =
            CliConfig::parse_from(["calcul", "--payment", "--type", "DIVIDE", "100", "20"]);
        assert_eq!(config.ignored_operation(), Some("DIVIDE"));

        let config = CliConfig::parse_from(["calcul", "--payment", "100", "20"]);
        assert_eq!(config.ignored_operation(), None);

        let config = CliConfig::parse_from(["calcul", "--type", "DIVIDE", "100", "20"]);
        assert_eq!(config.ignored_operation(), None);
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let config = CliConfig::parse_from(["calcul", "NaN", "2"]);
        assert!(config.validate().is_err());
    }
}
