pub mod gateway;
pub mod mock;

use serde::{Deserialize, Serialize};

use crate::errors::VerificationError;
use crate::types::IdentityVerificationStatus;

pub use gateway::{IdentityVerifierServiceGateway, StubTransport};
pub use mock::{MockIdentityVerifier, VerifierCall};

/// confirms an applicant's identity
pub trait IdentityVerifier {
    /// one-time setup before the first validation
    fn initialize(&self);

    /// true if the identity could be confirmed
    fn validate(&self, applicant_name: &str, applicant_age: u32, applicant_address: &str) -> bool;

    /// validate and write the outcome into `status`
    fn validate_with_status(
        &self,
        applicant_name: &str,
        applicant_age: u32,
        applicant_address: &str,
        status: &mut IdentityVerificationStatus,
    ) {
        let verified = self.validate(applicant_name, applicant_age, applicant_address);
        *status = IdentityVerificationStatus::from_outcome(verified);
    }
}

/// network side of the verification gateway
pub trait VerificationTransport {
    /// open the connection to the verification service
    fn connect(&self) -> Result<(), VerificationError>;

    /// ask the service whether the identity matches
    fn call_service(
        &self,
        applicant_name: &str,
        applicant_age: u32,
        applicant_address: &str,
    ) -> Result<bool, VerificationError>;
}

/// identity details sent to a verifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityCheck {
    pub applicant_name: String,
    pub applicant_age: u32,
    pub applicant_address: String,
}

impl IdentityCheck {
    pub fn new(applicant_name: &str, applicant_age: u32, applicant_address: &str) -> Self {
        Self {
            applicant_name: applicant_name.to_string(),
            applicant_age,
            applicant_address: applicant_address.to_string(),
        }
    }
}
