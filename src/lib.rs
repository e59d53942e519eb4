pub mod application;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod processor;
pub mod scoring;
pub mod types;
pub mod verification;

// re-export key types
pub use application::{LoanAmount, LoanApplication, LoanApplicationBuilder, LoanProduct};
pub use config::DecisionPolicy;
pub use decimal::{Money, Rate};
pub use errors::{LoanError, Result, ScoringError, VerificationError};
pub use events::{DecisionEvent, EventStore};
pub use processor::LoanApplicationProcessor;
pub use scoring::{CreditScorer, MockCreditScorer, ScoreResult, ScoreValue};
pub use types::{ApplicationId, Decision, DeclineReason, IdentityVerificationStatus, ProductId};
pub use verification::{
    IdentityCheck, IdentityVerifier, IdentityVerifierServiceGateway, MockIdentityVerifier,
    StubTransport, VerificationTransport, VerifierCall,
};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
