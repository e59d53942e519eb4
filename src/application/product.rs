use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::types::ProductId;

/// loan product reference data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanProduct {
    id: ProductId,
    name: String,
    interest_rate: Rate,
}

impl LoanProduct {
    pub fn new(id: ProductId, name: impl Into<String>, interest_rate: Rate) -> Self {
        Self {
            id,
            name: name.into(),
            interest_rate,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn interest_rate(&self) -> Rate {
        self.interest_rate
    }
}
