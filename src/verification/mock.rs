use std::sync::Mutex;

use crate::verification::{IdentityCheck, IdentityVerifier};

/// a call received by [`MockIdentityVerifier`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifierCall {
    Initialize,
    Validate(IdentityCheck),
}

/// mock identity verifier for testing
pub struct MockIdentityVerifier {
    verified: bool,
    calls: Mutex<Vec<VerifierCall>>,
}

impl MockIdentityVerifier {
    pub fn returning(verified: bool) -> Self {
        Self {
            verified,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// every call in the order received
    pub fn calls(&self) -> Vec<VerifierCall> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn initialize_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, VerifierCall::Initialize))
            .count()
    }

    pub fn validate_calls(&self) -> Vec<IdentityCheck> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                VerifierCall::Validate(check) => Some(check),
                VerifierCall::Initialize => None,
            })
            .collect()
    }

    fn record(&self, call: VerifierCall) {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(call);
    }
}

impl Default for MockIdentityVerifier {
    fn default() -> Self {
        Self::returning(false)
    }
}

impl IdentityVerifier for MockIdentityVerifier {
    fn initialize(&self) {
        self.record(VerifierCall::Initialize);
    }

    fn validate(&self, applicant_name: &str, applicant_age: u32, applicant_address: &str) -> bool {
        self.record(VerifierCall::Validate(IdentityCheck::new(
            applicant_name,
            applicant_age,
            applicant_address,
        )));
        self.verified
    }
}
