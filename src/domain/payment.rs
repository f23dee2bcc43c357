use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single monetary amount submitted against an invoice reference.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Payment {
    pub reference: String,
    pub amount: Decimal,
}

impl Payment {
    pub fn new(reference: impl Into<String>, amount: Decimal) -> Self {
        Self {
            reference: reference.into(),
            amount,
        }
    }
}
