use std::sync::{Mutex, Once};
use tracing::{debug, info, warn};

use crate::application::LoanApplication;
use crate::config::DecisionPolicy;
use crate::errors::{LoanError, Result};
use crate::events::{DecisionEvent, EventStore};
use crate::scoring::CreditScorer;
use crate::types::{DeclineReason, Decision};
use crate::verification::IdentityVerifier;

/// decides whether loan applications are accepted
///
/// Checks run in order: salary, identity, credit score. The first failing
/// check declines the application and nothing after it is consulted. The
/// verifier is initialized once per processor, right before its first
/// validation. Scoring is serialized so a calculation and the read of its
/// result always belong to the same application.
pub struct LoanApplicationProcessor<V, S> {
    verifier: V,
    scorer: S,
    policy: DecisionPolicy,
    verifier_init: Once,
    scoring: Mutex<()>,
    events: Mutex<EventStore>,
}

impl<V: IdentityVerifier, S: CreditScorer> LoanApplicationProcessor<V, S> {
    /// create processor with the default policy
    pub fn new(verifier: V, scorer: S) -> Self {
        Self::with_policy(verifier, scorer, DecisionPolicy::default())
    }

    pub fn with_policy(verifier: V, scorer: S, policy: DecisionPolicy) -> Self {
        Self {
            verifier,
            scorer,
            policy,
            verifier_init: Once::new(),
            scoring: Mutex::new(()),
            events: Mutex::new(EventStore::new()),
        }
    }

    pub fn policy(&self) -> &DecisionPolicy {
        &self.policy
    }

    pub fn verifier(&self) -> &V {
        &self.verifier
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// decide an application and set its acceptance flag
    pub fn process(&self, application: Option<&mut LoanApplication>) -> Result<Decision> {
        let application = application.ok_or(LoanError::MissingApplication)?;

        debug!(application_id = application.id(), "processing loan application");
        let decision = self.decide(application);

        match decision {
            Decision::Accepted { score } => {
                application.accept();
                info!(application_id = application.id(), score, "loan application accepted");
            }
            Decision::Declined { reason } => {
                application.decline();
                info!(application_id = application.id(), %reason, "loan application declined");
            }
        }

        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .emit(DecisionEvent::new(application.id(), decision));

        Ok(decision)
    }

    /// drain the decisions recorded so far
    pub fn take_events(&self) -> Vec<DecisionEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take_events()
    }

    fn decide(&self, application: &LoanApplication) -> Decision {
        if !self.policy.salary_qualifies(application.applicant_salary()) {
            return Decision::declined(DeclineReason::SalaryBelowMinimum);
        }

        self.verifier_init.call_once(|| self.verifier.initialize());

        let verified = self.verifier.validate(
            application.applicant_name(),
            application.applicant_age(),
            application.applicant_address(),
        );
        if !verified {
            return Decision::declined(DeclineReason::IdentityNotVerified);
        }

        let score = {
            // the scorer keeps one shared result; hold the lock until it is read
            let _guard = self
                .scoring
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());

            if let Err(e) = self
                .scorer
                .calculate_score(application.applicant_name(), application.applicant_address())
            {
                warn!(application_id = application.id(), error = %e, "credit scoring failed");
                return Decision::declined(DeclineReason::ScoringFailed);
            }

            self.scorer.score_result().score_value().score()
        };

        if self.policy.score_qualifies(score) {
            Decision::Accepted { score }
        } else {
            Decision::declined(DeclineReason::ScoreBelowMinimum)
        }
    }
}
