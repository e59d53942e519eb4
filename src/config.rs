use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{LoanError, Result};

/// minimum salary an applicant needs before any checks run
pub const DEFAULT_MINIMUM_SALARY: i64 = 65_000;

/// minimum credit score for acceptance
pub const DEFAULT_MINIMUM_CREDIT_SCORE: u32 = 300;

/// thresholds applied by the decision engine; both are inclusive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionPolicy {
    pub minimum_salary: Money,
    pub minimum_credit_score: u32,
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        Self {
            minimum_salary: Money::from_major(DEFAULT_MINIMUM_SALARY),
            minimum_credit_score: DEFAULT_MINIMUM_CREDIT_SCORE,
        }
    }
}

impl DecisionPolicy {
    /// create policy with explicit thresholds
    pub fn new(minimum_salary: Money, minimum_credit_score: u32) -> Result<Self> {
        let policy = Self {
            minimum_salary,
            minimum_credit_score,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// parse and validate a policy from json
    pub fn from_json(json: &str) -> Result<Self> {
        let policy: DecisionPolicy =
            serde_json::from_str(json).map_err(|e| LoanError::InvalidConfiguration {
                message: e.to_string(),
            })?;
        policy.validate()?;
        Ok(policy)
    }

    /// serialize to pretty json
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| LoanError::InvalidConfiguration {
            message: e.to_string(),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.minimum_salary.is_negative() {
            return Err(LoanError::InvalidConfiguration {
                message: format!("minimum salary cannot be negative: {}", self.minimum_salary),
            });
        }
        Ok(())
    }

    /// salary gate, inclusive
    pub fn salary_qualifies(&self, salary: Money) -> bool {
        salary >= self.minimum_salary
    }

    /// score gate, inclusive
    pub fn score_qualifies(&self, score: u32) -> bool {
        score >= self.minimum_credit_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let policy = DecisionPolicy::default();
        assert_eq!(policy.minimum_salary, Money::from_major(65_000));
        assert_eq!(policy.minimum_credit_score, 300);
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let policy = DecisionPolicy::default();
        assert!(policy.salary_qualifies(Money::from_major(65_000)));
        assert!(!policy.salary_qualifies(Money::from_major(64_999)));
        assert!(policy.score_qualifies(300));
        assert!(!policy.score_qualifies(299));
    }

    #[test]
    fn test_policy_from_json() {
        let policy = DecisionPolicy::from_json(
            r#"{ "minimum_salary": "40000", "minimum_credit_score": 550 }"#,
        )
        .unwrap();
        assert_eq!(policy.minimum_salary, Money::from_major(40_000));
        assert_eq!(policy.minimum_credit_score, 550);

        let json = policy.to_json().unwrap();
        assert_eq!(DecisionPolicy::from_json(&json).unwrap(), policy);
    }

    #[test]
    fn test_negative_salary_rejected() {
        let err = DecisionPolicy::from_json(
            r#"{ "minimum_salary": "-1", "minimum_credit_score": 300 }"#,
        )
        .unwrap_err();
        assert!(matches!(err, LoanError::InvalidConfiguration { .. }));

        assert!(DecisionPolicy::new(Money::from_major(-5), 300).is_err());
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = DecisionPolicy::from_json("{ not json").unwrap_err();
        assert!(matches!(err, LoanError::InvalidConfiguration { .. }));
    }
}
