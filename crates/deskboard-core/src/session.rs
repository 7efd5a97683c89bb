//! Session gate - mock authenticated-session state machine
//!
//! The gate starts in `Loading` while a simulated async check resolves, then
//! settles on `SignedOut` or `SignedIn`. There is no credential store and no
//! network: login is a local mock rule, and a failed attempt is immediately
//! retryable.

use crate::error::CoreError;
use crate::validate;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Loading,
    SignedOut,
    SignedIn(UserProfile),
}

#[derive(Debug)]
pub struct SessionGate {
    state: SessionState,
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionGate {
    pub fn new() -> Self {
        Self {
            state: SessionState::Loading,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Loading)
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match &self.state {
            SessionState::SignedIn(user) => Some(user),
            _ => None,
        }
    }

    /// Complete the initial mock check. Only meaningful from `Loading`;
    /// a second call is ignored.
    pub fn resolve(&mut self, restored: Option<UserProfile>) {
        if !self.is_loading() {
            debug!("session already resolved, ignoring");
            return;
        }
        self.state = match restored {
            Some(user) => {
                info!(email = %user.email, "restored mock session");
                SessionState::SignedIn(user)
            }
            None => SessionState::SignedOut,
        };
    }

    /// Mock login rule: a well-formed email plus a password of at least
    /// 6 characters. On failure the state is unchanged.
    pub fn login(&mut self, email: &str, password: &str) -> Result<UserProfile, CoreError> {
        let email = validate::email(email).map_err(|_| CoreError::InvalidCredentials)?;
        if password.len() < 6 {
            return Err(CoreError::InvalidCredentials);
        }
        let user = UserProfile {
            name: display_name(&email),
            email,
            role: "Administrator".to_string(),
        };
        info!(email = %user.email, "signed in");
        self.state = SessionState::SignedIn(user.clone());
        Ok(user)
    }

    /// Clear the session synchronously. Callers must confirm with the user
    /// before invoking this.
    pub fn logout(&mut self) {
        info!("signed out");
        self.state = SessionState::SignedOut;
    }
}

/// "jane.doe@example.com" -> "Jane Doe"
fn display_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    local
        .split(['.', '_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_starts_loading() {
        let gate = SessionGate::new();
        assert!(gate.is_loading());
        assert!(gate.user().is_none());
    }

    #[test]
    fn resolve_without_restored_session_signs_out() {
        let mut gate = SessionGate::new();
        gate.resolve(None);
        assert_eq!(*gate.state(), SessionState::SignedOut);
        assert!(!gate.is_loading());
    }

    #[test]
    fn resolve_with_restored_session_signs_in() {
        let mut gate = SessionGate::new();
        gate.resolve(Some(UserProfile {
            name: "Jane Doe".into(),
            email: "jane.doe@example.com".into(),
            role: "Administrator".into(),
        }));
        assert_eq!(gate.user().unwrap().name, "Jane Doe");
    }

    #[test]
    fn second_resolve_is_ignored() {
        let mut gate = SessionGate::new();
        gate.resolve(None);
        gate.resolve(Some(UserProfile {
            name: "x".into(),
            email: "x@example.com".into(),
            role: "x".into(),
        }));
        assert_eq!(*gate.state(), SessionState::SignedOut);
    }

    #[test]
    fn login_with_valid_mock_credentials_signs_in() {
        let mut gate = SessionGate::new();
        gate.resolve(None);
        let user = gate.login("jane.doe@example.com", "secret123").unwrap();
        assert_eq!(user.name, "Jane Doe");
        assert_eq!(gate.user().unwrap().email, "jane.doe@example.com");
    }

    #[test]
    fn login_failure_leaves_state_unchanged_and_is_retryable() {
        let mut gate = SessionGate::new();
        gate.resolve(None);
        assert_eq!(
            gate.login("not-an-email", "secret123").unwrap_err(),
            CoreError::InvalidCredentials
        );
        assert_eq!(
            gate.login("jane@example.com", "short").unwrap_err(),
            CoreError::InvalidCredentials
        );
        assert_eq!(*gate.state(), SessionState::SignedOut);
        // retry succeeds with corrected input
        assert!(gate.login("jane@example.com", "secret123").is_ok());
    }

    #[test]
    fn logout_clears_synchronously() {
        let mut gate = SessionGate::new();
        gate.resolve(None);
        gate.login("jane@example.com", "secret123").unwrap();
        gate.logout();
        assert_eq!(*gate.state(), SessionState::SignedOut);
    }

    #[test]
    fn display_name_title_cases_the_local_part() {
        assert_eq!(display_name("jane.doe@example.com"), "Jane Doe");
        assert_eq!(display_name("admin@example.com"), "Admin");
        assert_eq!(display_name("a_b-c@example.com"), "A B C");
    }
}
