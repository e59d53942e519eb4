use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use tracing::{debug, info, warn};

use crate::errors::VerificationError;
use crate::verification::{IdentityCheck, IdentityVerifier, VerificationTransport};

/// identity verifier backed by a remote service
///
/// The network call goes through the injected transport and check times come
/// from the injected time provider, so both can be controlled in tests.
pub struct IdentityVerifierServiceGateway<'t, T: VerificationTransport> {
    transport: T,
    time: &'t SafeTimeProvider,
    connected: Mutex<bool>,
    last_check_time: Mutex<Option<DateTime<Utc>>>,
}

impl<'t, T: VerificationTransport> IdentityVerifierServiceGateway<'t, T> {
    pub fn new(transport: T, time: &'t SafeTimeProvider) -> Self {
        Self {
            transport,
            time,
            connected: Mutex::new(false),
            last_check_time: Mutex::new(None),
        }
    }

    /// time of the most recent call to the service
    pub fn last_check_time(&self) -> Option<DateTime<Utc>> {
        *self
            .last_check_time
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn is_initialized(&self) -> bool {
        *self
            .connected
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// connect unless already connected; true once a connection is open
    fn ensure_connected(&self) -> bool {
        let mut connected = self
            .connected
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if *connected {
            return true;
        }

        match self.transport.connect() {
            Ok(()) => {
                *connected = true;
                info!("identity verification service connected");
            }
            Err(e) => warn!(error = %e, "identity verification service connect failed"),
        }
        *connected
    }
}

impl<T: VerificationTransport> IdentityVerifier for IdentityVerifierServiceGateway<'_, T> {
    fn initialize(&self) {
        self.ensure_connected();
    }

    /// an unconnected gateway retries the connection first and reports
    /// unverified, without calling the service, if that fails again
    fn validate(&self, applicant_name: &str, applicant_age: u32, applicant_address: &str) -> bool {
        if !self.ensure_connected() {
            warn!("identity verification service not connected, treating as unverified");
            return false;
        }

        let outcome = self
            .transport
            .call_service(applicant_name, applicant_age, applicant_address);

        let now = self.time.now();
        *self
            .last_check_time
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(now);

        match outcome {
            Ok(verified) => {
                debug!(verified, checked_at = %now, "identity check completed");
                verified
            }
            Err(e) => {
                warn!(error = %e, checked_at = %now, "identity check failed, treating as unverified");
                false
            }
        }
    }
}

/// canned transport for tests and demos
pub struct StubTransport {
    response: Result<bool, VerificationError>,
    connect_error: Option<VerificationError>,
    connect_attempts: AtomicU32,
    calls: Mutex<Vec<IdentityCheck>>,
}

impl StubTransport {
    /// service answers every check with `verified`
    pub fn returning(verified: bool) -> Self {
        Self::with_response(Ok(verified))
    }

    /// service fails every check with `error`
    pub fn failing(error: VerificationError) -> Self {
        Self::with_response(Err(error))
    }

    fn with_response(response: Result<bool, VerificationError>) -> Self {
        Self {
            response,
            connect_error: None,
            connect_attempts: AtomicU32::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// make every connect attempt fail
    pub fn refusing_connections(mut self, error: VerificationError) -> Self {
        self.connect_error = Some(error);
        self
    }

    pub fn connect_attempts(&self) -> u32 {
        self.connect_attempts.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<IdentityCheck> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl VerificationTransport for StubTransport {
    fn connect(&self) -> Result<(), VerificationError> {
        self.connect_attempts.fetch_add(1, Ordering::SeqCst);
        match &self.connect_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    fn call_service(
        &self,
        applicant_name: &str,
        applicant_age: u32,
        applicant_address: &str,
    ) -> Result<bool, VerificationError> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(IdentityCheck::new(applicant_name, applicant_age, applicant_address));
        self.response.clone()
    }
}
