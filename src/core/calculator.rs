use crate::core::rounding::round_half_up;
use crate::domain::model::Operation;
use crate::domain::ports::Calculator;
use crate::utils::error::{CalcError, Result};

fn rounded_operand(value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(CalcError::NonFiniteOperand { value });
    }
    Ok(round_half_up(value))
}

/// 將兩個運算元四捨五入 (half up) 後套用運算
///
/// `Divide` 在除數四捨五入為 0 時回傳 [`CalcError::DivisionByZero`]。
/// 純函式：不寫日誌、不保留狀態。
pub fn dispatch(operation: Operation, a: f64, b: f64) -> Result<f64> {
    let a = rounded_operand(a)?;
    let b = rounded_operand(b)?;

    let value = match operation {
        Operation::Sum => a + b,
        Operation::Subtract => a - b,
        Operation::Divide => {
            if b == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            a / b
        }
    };

    // 0 / -3 在 IEEE 下為 -0.0
    Ok(value + 0.0)
}

/// 以字串標籤呼叫 [`dispatch`]，未知標籤 (含空字串與小寫) 回傳 `InvalidOperation`
pub fn calculate_number(operation: &str, a: f64, b: f64) -> Result<f64> {
    let operation: Operation = operation.parse()?;
    dispatch(operation, a, b)
}

pub fn sum_rounded(a: f64, b: f64) -> Result<f64> {
    dispatch(Operation::Sum, a, b)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ArithmeticCalculator;

impl Calculator for ArithmeticCalculator {
    fn calculate(&self, operation: Operation, a: f64, b: f64) -> Result<f64> {
        dispatch(operation, a, b)
    }
}
