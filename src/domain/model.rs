use crate::utils::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 支援的運算。標籤區分大小寫，只接受 `SUM`、`SUBTRACT`、`DIVIDE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    Sum,
    Subtract,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Sum, Operation::Subtract, Operation::Divide];

    pub fn as_tag(&self) -> &'static str {
        match self {
            Operation::Sum => "SUM",
            Operation::Subtract => "SUBTRACT",
            Operation::Divide => "DIVIDE",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_tag() == tag)
            .ok_or_else(|| CalcError::InvalidOperation {
                tag: tag.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentToken {
    pub data: String,
}
