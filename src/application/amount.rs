use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{LoanError, Result};

/// requested loan amount in a given currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLoanAmount")]
pub struct LoanAmount {
    currency_code: String,
    principal: Money,
}

/// unvalidated wire form of [`LoanAmount`]
#[derive(Deserialize)]
struct RawLoanAmount {
    currency_code: String,
    principal: Money,
}

impl TryFrom<RawLoanAmount> for LoanAmount {
    type Error = LoanError;

    fn try_from(raw: RawLoanAmount) -> Result<Self> {
        LoanAmount::new(&raw.currency_code, raw.principal)
    }
}

impl LoanAmount {
    /// create amount; the currency code is upper-cased and must be three letters
    pub fn new(currency_code: &str, principal: impl Into<Money>) -> Result<Self> {
        let code = currency_code.trim().to_ascii_uppercase();
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(LoanError::InvalidCurrencyCode {
                code: currency_code.to_string(),
            });
        }

        Ok(Self {
            currency_code: code,
            principal: principal.into(),
        })
    }

    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    pub fn principal(&self) -> Money {
        self.principal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_currency_code(code: &str) -> bool {
        code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase())
    }

    #[test]
    fn test_stores_currency_code_upper_cased() {
        let amount = LoanAmount::new("usd", Money::from_major(100_000)).unwrap();

        assert_eq!(amount.currency_code(), "USD");
        assert!(is_currency_code(amount.currency_code()));
        assert_eq!(amount.principal(), Money::from_major(100_000));
    }

    #[test]
    fn test_mixed_case_and_whitespace_normalized() {
        let amount = LoanAmount::new(" gBp ", Money::from_major(5)).unwrap();
        assert_eq!(amount.currency_code(), "GBP");
    }

    #[test]
    fn test_deserialize_normalizes_currency_code() {
        let amount: LoanAmount =
            serde_json::from_str(r#"{"currency_code":"usd","principal":"100"}"#).unwrap();

        assert_eq!(amount.currency_code(), "USD");
        assert_eq!(amount.principal(), Money::from_major(100));
    }

    #[test]
    fn test_deserialize_rejects_malformed_code() {
        let err = serde_json::from_str::<LoanAmount>(r#"{"currency_code":"US","principal":"100"}"#)
            .unwrap_err();

        assert!(err.to_string().contains("invalid currency code"));
    }

    #[test]
    fn test_rejects_malformed_codes() {
        for code in ["", "US", "USDX", "U5D", "€€€"] {
            let err = LoanAmount::new(code, Money::from_major(1)).unwrap_err();
            assert_eq!(
                err,
                LoanError::InvalidCurrencyCode {
                    code: code.to_string()
                }
            );
        }
    }
}
