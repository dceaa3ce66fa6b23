use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid operation: '{tag}'")]
    InvalidOperation { tag: String },

    #[error("Division by zero: divisor rounds to 0")]
    DivisionByZero,

    #[error("Operand is not a finite number: {value}")]
    NonFiniteOperand { value: f64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration validation error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CalcError {
    /// 是否為計算本身的錯誤 (無效運算、除以零或非有限運算元)
    pub fn is_calculation_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidOperation { .. }
                | CalcError::DivisionByZero
                | CalcError::NonFiniteOperand { .. }
        )
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CalcError::InvalidOperation { .. }
            | CalcError::DivisionByZero
            | CalcError::NonFiniteOperand { .. } => ErrorSeverity::Medium,
            CalcError::ConfigValidationError { .. }
            | CalcError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            CalcError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::InvalidOperation { tag } => {
                format!("不支援的運算類型 '{}'", tag)
            }
            CalcError::DivisionByZero => "除數四捨五入後為 0，無法相除".to_string(),
            CalcError::NonFiniteOperand { value } => {
                format!("運算元必須是有限數值，收到 {}", value)
            }
            CalcError::IoError(e) => format!("檔案讀寫失敗: {}", e),
            CalcError::ConfigValidationError { field, message } => {
                format!("配置錯誤 ({}): {}", field, message)
            }
            CalcError::InvalidConfigValueError { field, value, reason } => {
                format!("配置值無效 {} = '{}': {}", field, value, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CalcError::InvalidOperation { .. } => {
                "Use one of SUM, SUBTRACT or DIVIDE (uppercase)".to_string()
            }
            CalcError::DivisionByZero => {
                "Use a divisor whose rounded value is not 0 (|b| >= 0.5)".to_string()
            }
            CalcError::NonFiniteOperand { .. } => {
                "Pass finite numbers; NaN and infinity are rejected".to_string()
            }
            CalcError::IoError(_) => "Check that the file exists and is readable".to_string(),
            CalcError::ConfigValidationError { .. } | CalcError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and try again".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
