use crate::domain::model::{Operation, PaymentToken};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Calculator: Send + Sync {
    fn calculate(&self, operation: Operation, a: f64, b: f64) -> Result<f64>;
}

/// 接收格式化後總額訊息的日誌出口
pub trait TotalSink: Send + Sync {
    fn report(&self, message: &str);
}

#[async_trait]
pub trait PaymentTokenSource: Send + Sync {
    async fn payment_token(&self, success: bool) -> Option<PaymentToken>;
}
