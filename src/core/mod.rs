pub mod calculator;
pub mod payment;
pub mod payment_token;
pub mod rounding;

pub use crate::domain::model::{Operation, PaymentToken};
pub use crate::domain::ports::{Calculator, PaymentTokenSource, TotalSink};
pub use crate::utils::error::Result;
