//! Session store
//!
//! Mock authentication backed by a single localStorage record. There is no
//! real credential check: any non-empty email with a password of at least
//! eight characters signs in. The stored session stays valid until an
//! explicit logout.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// localStorage key holding the serialized session.
pub const SESSION_KEY: &str = "refundable_user";

/// Minimum accepted password length (mock rule).
pub const MIN_PASSWORD_LEN: usize = 8;

/// The single persisted user record. Field names stay camelCase on disk so
/// the stored JSON matches what the product has always written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub is_authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// A form field is missing or malformed; blocks submission.
    Validation(&'static str),
    /// Mock credential check rejected the login.
    InvalidCredentials,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::Validation(msg) => write!(f, "{}", msg),
            AuthError::InvalidCredentials => write!(f, "Invalid email or password"),
        }
    }
}

/// Raw signup form fields, as submitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub password: String,
    pub confirm_password: String,
    pub accepted_terms: bool,
}

/// Reject empty login fields before the simulated network round trip.
pub fn validate_login(email: &str, password: &str) -> Result<(), AuthError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AuthError::Validation("Please fill in all fields"));
    }
    Ok(())
}

/// Mock credential check: succeeds for any email once the password is long
/// enough. Returns the placeholder identity the backend would supply.
pub fn authenticate(email: &str, password: &str) -> Result<UserSession, AuthError> {
    validate_login(email, password)?;

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::InvalidCredentials);
    }

    Ok(UserSession {
        email: email.trim().to_string(),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        company: "Company Inc.".to_string(),
        is_authenticated: true,
        login_time: Some(now_rfc3339()),
        created_at: None,
    })
}

/// Validate every signup field; the first failing rule wins.
pub fn validate_signup(form: &SignupForm) -> Result<(), AuthError> {
    let required = [
        &form.first_name,
        &form.last_name,
        &form.email,
        &form.company,
        &form.password,
        &form.confirm_password,
    ];
    if required.iter().any(|field| field.trim().is_empty()) {
        return Err(AuthError::Validation("Please fill in all fields"));
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::Validation(
            "Password must be at least 8 characters",
        ));
    }
    if form.password != form.confirm_password {
        return Err(AuthError::Validation("Passwords do not match"));
    }
    if !form.accepted_terms {
        return Err(AuthError::Validation(
            "Please agree to the Terms of Service",
        ));
    }
    Ok(())
}

/// Build the session a successful signup persists.
pub fn register(form: &SignupForm) -> Result<UserSession, AuthError> {
    validate_signup(form)?;

    Ok(UserSession {
        email: form.email.trim().to_string(),
        first_name: form.first_name.trim().to_string(),
        last_name: form.last_name.trim().to_string(),
        company: form.company.trim().to_string(),
        is_authenticated: true,
        login_time: None,
        created_at: Some(now_rfc3339()),
    })
}

fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Read the persisted session, if any. Storage failures degrade to "no
/// session" rather than raising.
pub fn load_session() -> Option<UserSession> {
    let raw = local_storage()?.get_item(SESSION_KEY).ok()??;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(err) => {
            log::warn!("discarding unreadable session record: {}", err);
            None
        }
    }
}

fn save_session(session: &UserSession) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Ok(raw) = serde_json::to_string(session) {
        let _ = storage.set_item(SESSION_KEY, &raw);
    }
}

fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

/// Reactive session state, provided once by the app shell.
#[derive(Clone, Copy)]
pub struct SessionState {
    pub user: RwSignal<Option<UserSession>>,
}

impl SessionState {
    /// Load any persisted session on startup.
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(load_session()),
        }
    }

    /// Persist a freshly authenticated session and make it current.
    pub fn log_in(&self, session: UserSession) {
        save_session(&session);
        self.user.set(Some(session));
    }

    /// Delete the stored record and clear the current session.
    pub fn log_out(&self) {
        clear_session();
        self.user.set(None);
    }

    pub fn current_user(&self) -> Option<UserSession> {
        self.user.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user
            .with(|user| user.as_ref().is_some_and(|u| u.is_authenticated))
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_session_state() {
    provide_context(SessionState::new());
}

pub fn use_session() -> SessionState {
    expect_context::<SessionState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SignupForm {
        SignupForm {
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            email: "jane@example.com".to_string(),
            company: "Acme Imports".to_string(),
            password: "hunter22".to_string(),
            confirm_password: "hunter22".to_string(),
            accepted_terms: true,
        }
    }

    #[test]
    fn test_login_rejects_empty_fields() {
        assert_eq!(
            validate_login("", "password123"),
            Err(AuthError::Validation("Please fill in all fields"))
        );
        assert_eq!(
            validate_login("jane@example.com", ""),
            Err(AuthError::Validation("Please fill in all fields"))
        );
        assert!(validate_login("jane@example.com", "password123").is_ok());
    }

    #[test]
    fn test_authenticate_rejects_short_password() {
        assert_eq!(
            authenticate("jane@example.com", "seven77"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_authenticate_accepts_eight_char_password() {
        let session = authenticate("jane@example.com", "eight888").unwrap();
        assert!(session.is_authenticated);
        assert_eq!(session.email, "jane@example.com");
        // login issues the placeholder identity
        assert_eq!(session.first_name, "John");
        assert_eq!(session.last_name, "Doe");
        assert!(session.login_time.is_some());
        assert!(session.created_at.is_none());
    }

    #[test]
    fn test_signup_password_boundary() {
        let mut form = valid_form();
        form.password = "1234567".to_string();
        form.confirm_password = "1234567".to_string();
        assert_eq!(
            validate_signup(&form),
            Err(AuthError::Validation(
                "Password must be at least 8 characters"
            ))
        );

        form.password = "12345678".to_string();
        form.confirm_password = "12345678".to_string();
        assert!(validate_signup(&form).is_ok());
    }

    #[test]
    fn test_signup_rejects_missing_fields() {
        for blank in 0..6 {
            let mut form = valid_form();
            match blank {
                0 => form.first_name.clear(),
                1 => form.last_name.clear(),
                2 => form.email.clear(),
                3 => form.company.clear(),
                4 => form.password.clear(),
                _ => form.confirm_password.clear(),
            }
            assert_eq!(
                validate_signup(&form),
                Err(AuthError::Validation("Please fill in all fields")),
                "field {} should be required",
                blank
            );
        }
    }

    #[test]
    fn test_signup_rejects_mismatched_passwords() {
        let mut form = valid_form();
        form.confirm_password = "different1".to_string();
        assert_eq!(
            validate_signup(&form),
            Err(AuthError::Validation("Passwords do not match"))
        );
    }

    #[test]
    fn test_signup_requires_terms() {
        let mut form = valid_form();
        form.accepted_terms = false;
        assert_eq!(
            validate_signup(&form),
            Err(AuthError::Validation(
                "Please agree to the Terms of Service"
            ))
        );
    }

    #[test]
    fn test_register_builds_session_from_form() {
        let session = register(&valid_form()).unwrap();
        assert!(session.is_authenticated);
        assert_eq!(session.first_name, "Jane");
        assert_eq!(session.company, "Acme Imports");
        assert!(session.created_at.is_some());
        assert!(session.login_time.is_none());
    }

    #[test]
    fn test_session_json_uses_camel_case_keys() {
        let session = register(&valid_form()).unwrap();
        let raw = serde_json::to_string(&session).unwrap();
        assert!(raw.contains("\"firstName\""));
        assert!(raw.contains("\"isAuthenticated\":true"));
        assert!(raw.contains("\"createdAt\""));
        assert!(!raw.contains("\"loginTime\""));

        let back: UserSession = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
        assert_eq!(
            AuthError::Validation("Please fill in all fields").to_string(),
            "Please fill in all fields"
        );
    }
}
