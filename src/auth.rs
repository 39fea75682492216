//! Operator authentication gate.
//!
//! The check runs once at startup. A failed or cancelled login means the
//! registry is never opened.

use subtle::ConstantTimeEq;

pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "admin123";

/// Credential verification capability.
pub trait CredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// A single embedded username/password pair.
#[derive(Debug, Clone)]
pub struct FixedCredential {
    username: String,
    password: String,
}

impl FixedCredential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for FixedCredential {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }
}

impl CredentialVerifier for FixedCredential {
    fn verify(&self, username: &str, password: &str) -> bool {
        let user_ok = username.as_bytes().ct_eq(self.username.as_bytes());
        let pass_ok = password.as_bytes().ct_eq(self.password.as_bytes());
        bool::from(user_ok & pass_ok)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Granted,
    Denied,
    Cancelled,
}

impl LoginOutcome {
    pub fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Exact match of both fields. Empty input never authenticates.
pub fn authenticate(verifier: &dyn CredentialVerifier, username: &str, password: &str) -> bool {
    if username.is_empty() || password.is_empty() {
        return false;
    }
    verifier.verify(username, password)
}

/// Evaluate a login prompt result. `None` means the operator cancelled.
pub fn login(verifier: &dyn CredentialVerifier, attempt: Option<(&str, &str)>) -> LoginOutcome {
    let outcome = match attempt {
        None => LoginOutcome::Cancelled,
        Some((username, password)) if authenticate(verifier, username, password) => {
            LoginOutcome::Granted
        }
        Some(_) => LoginOutcome::Denied,
    };
    match outcome {
        LoginOutcome::Granted => log::info!("Login granted"),
        LoginOutcome::Denied => log::warn!("Login denied"),
        LoginOutcome::Cancelled => log::warn!("Login cancelled"),
    }
    outcome
}
