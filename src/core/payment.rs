use crate::core::calculator::ArithmeticCalculator;
use crate::domain::model::Operation;
use crate::domain::ports::{Calculator, TotalSink};
use crate::utils::error::Result;

/// 輸出到 stdout，對應 CLI 的使用情境
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl TotalSink for StdoutSink {
    fn report(&self, message: &str) {
        println!("{}", message);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TotalSink for TracingSink {
    fn report(&self, message: &str) {
        tracing::info!("{}", message);
    }
}

pub fn format_total(total: f64) -> String {
    format!("The total is: {}", total)
}

/// 固定使用 SUM 的付款請求，成功時向 sink 回報一次總額
pub struct PaymentRequest<C: Calculator, S: TotalSink> {
    calculator: C,
    sink: S,
}

impl<C: Calculator, S: TotalSink> PaymentRequest<C, S> {
    pub fn new(calculator: C, sink: S) -> Self {
        Self { calculator, sink }
    }

    pub fn send(&self, total_amount: f64, total_shipping: f64) -> Result<f64> {
        let total = self
            .calculator
            .calculate(Operation::Sum, total_amount, total_shipping)?;

        self.sink.report(&format_total(total));
        Ok(total)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn calculator(&self) -> &C {
        &self.calculator
    }
}

impl<S: TotalSink> PaymentRequest<ArithmeticCalculator, S> {
    pub fn with_sink(sink: S) -> Self {
        Self::new(ArithmeticCalculator, sink)
    }
}

pub fn send_payment_request_to_api(total_amount: f64, total_shipping: f64) -> Result<f64> {
    PaymentRequest::with_sink(StdoutSink).send(total_amount, total_shipping)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_total_drops_trailing_zero() {
        assert_eq!(format_total(120.0), "The total is: 120");
        assert_eq!(format_total(-3.0), "The total is: -3");
        assert_eq!(format_total(0.2), "The total is: 0.2");
    }

    #[test]
    fn test_tracing_sink() {
        let request = PaymentRequest::with_sink(TracingSink);
        assert_eq!(request.send(10.0, 10.0).unwrap(), 20.0);
    }

    #[test]
    fn test_send_payment_request_to_api() {
        assert_eq!(send_payment_request_to_api(100.0, 20.0).unwrap(), 120.0);
    }
}
