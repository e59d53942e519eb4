use serde::{Deserialize, Serialize};
use std::fmt;

/// identifier of a loan application
pub type ApplicationId = u32;

/// identifier of a loan product
pub type ProductId = u32;

/// outcome of an identity check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IdentityVerificationStatus {
    /// no check has run yet
    #[default]
    NotChecked,
    /// identity confirmed
    Verified,
    /// identity could not be confirmed
    Failed,
}

impl IdentityVerificationStatus {
    pub fn from_outcome(verified: bool) -> Self {
        if verified {
            IdentityVerificationStatus::Verified
        } else {
            IdentityVerificationStatus::Failed
        }
    }
}

/// why an application was declined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclineReason {
    /// salary under the policy minimum, nothing else was checked
    SalaryBelowMinimum,
    /// identity verifier returned false
    IdentityNotVerified,
    /// credit scorer returned an error
    ScoringFailed,
    /// score under the policy minimum
    ScoreBelowMinimum,
}

impl fmt::Display for DeclineReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DeclineReason::SalaryBelowMinimum => "salary below minimum",
            DeclineReason::IdentityNotVerified => "identity not verified",
            DeclineReason::ScoringFailed => "credit scoring failed",
            DeclineReason::ScoreBelowMinimum => "credit score below minimum",
        };
        f.write_str(text)
    }
}

/// result of processing one application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Accepted { score: u32 },
    Declined { reason: DeclineReason },
}

impl Decision {
    pub fn declined(reason: DeclineReason) -> Self {
        Decision::Declined { reason }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Decision::Accepted { .. })
    }

    pub fn decline_reason(&self) -> Option<DeclineReason> {
        match self {
            Decision::Accepted { .. } => None,
            Decision::Declined { reason } => Some(*reason),
        }
    }
}
