pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use crate::core::calculator::{calculate_number, dispatch, sum_rounded, ArithmeticCalculator};
pub use crate::core::payment::{send_payment_request_to_api, PaymentRequest, StdoutSink, TracingSink};
pub use crate::core::payment_token::{get_payment_token_from_api, LocalPaymentTokenSource};
pub use crate::core::rounding::round_half_up;
pub use domain::model::{Operation, PaymentToken};
pub use domain::ports::{Calculator, PaymentTokenSource, TotalSink};
pub use utils::error::{CalcError, Result};
