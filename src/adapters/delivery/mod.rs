//! Code-delivery adapters.
//!
//! Transport (SMTP, SMS gateways) is outside this core. `TracingCodeDelivery`
//! stands in for a real channel by logging the send; `RecordingCodeDelivery`
//! captures codes for tests that need to read them back.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::identity::{ConfirmationCode, Identity};
use crate::ports::CodeDelivery;

/// Logs each delivery instead of sending it anywhere.
#[derive(Default)]
pub struct TracingCodeDelivery;

impl TracingCodeDelivery {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CodeDelivery for TracingCodeDelivery {
    async fn send(&self, identity: &Identity, code: &ConfirmationCode) -> Result<(), DomainError> {
        tracing::info!(
            username = %identity.username(),
            email = %identity.email(),
            "confirmation code dispatched"
        );
        // The code itself stays out of info-level logs.
        tracing::debug!(code = %code.as_str(), "confirmation code value");
        Ok(())
    }
}

/// Records every delivered code; can be told to fail.
#[derive(Default)]
pub struct RecordingCodeDelivery {
    sent: Mutex<Vec<(String, String)>>,
    fail: bool,
}

impl RecordingCodeDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    /// A delivery double whose every send fails.
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Returns all (username, code) pairs sent so far.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    /// Returns the most recent code sent to `username`, if any.
    pub fn last_code_for(&self, username: &str) -> Option<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(name, _)| name == username)
            .map(|(_, code)| code.clone())
    }
}

#[async_trait]
impl CodeDelivery for RecordingCodeDelivery {
    async fn send(&self, identity: &Identity, code: &ConfirmationCode) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::new(
                ErrorCode::DeliveryError,
                "Simulated delivery failure",
            ));
        }
        self.sent.lock().unwrap().push((
            identity.username().as_str().to_string(),
            code.as_str().to_string(),
        ));
        Ok(())
    }
}
