use crate::domain::model::PaymentToken;
use crate::domain::ports::PaymentTokenSource;
use async_trait::async_trait;

pub const SUCCESS_RESPONSE: &str = "Successful response from the API";

/// 本地模擬的付款 token 來源，`success` 為 false 時不回傳任何 token
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPaymentTokenSource;

#[async_trait]
impl PaymentTokenSource for LocalPaymentTokenSource {
    async fn payment_token(&self, success: bool) -> Option<PaymentToken> {
        if !success {
            tracing::debug!("Payment token request not successful, no token returned");
            return None;
        }

        Some(PaymentToken {
            data: SUCCESS_RESPONSE.to_string(),
        })
    }
}

pub async fn get_payment_token_from_api(success: bool) -> Option<PaymentToken> {
    LocalPaymentTokenSource.payment_token(success).await
}
