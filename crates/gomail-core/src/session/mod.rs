//! Session management.
//!
//! The session is the client's record of who is authenticated, derived
//! entirely from one persisted credential token. Identity and role are pure
//! functions of that token; nothing else is stored. Credentials are never
//! validated locally — validity is only established when an authenticated
//! request succeeds or fails remotely.

pub mod token;

mod store;

pub use store::{KeyringTokenStore, MemoryTokenStore, TokenStore, TokenStoreError, TokenStoreResult};

use gomail_api::{AuthHeader, Credentials};
use tracing::{debug, warn};

use crate::config::CoreConfig;
use crate::error::Result;
use crate::gateway::AuthGateway;

/// Local registration gate, checked before any network call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// Not of the form `local@domain`.
    #[error("invalid email format")]
    InvalidEmail,

    /// Correctly formed, but outside the configured mail domain.
    #[error("only {domain} addresses may register")]
    WrongDomain {
        /// The domain registration is restricted to.
        domain: String,
    },
}

/// Holds the current session and mediates login, registration and logout.
///
/// Passed by reference into whatever needs identity or the auth header;
/// there is no ambient global.
#[derive(Debug)]
pub struct SessionManager<S: TokenStore> {
    store: S,
    token: Option<String>,
    mail_domain: String,
    admin_domain_suffix: String,
}

impl<S: TokenStore> SessionManager<S> {
    /// Creates a manager, restoring any token the store persisted.
    ///
    /// A store that fails to load is treated as holding no token; a broken
    /// keyring must not take the whole client down.
    pub fn new(store: S, config: &CoreConfig) -> Self {
        let token = match store.load() {
            Ok(token) => token,
            Err(e) => {
                warn!("failed to load session token: {e}");
                None
            }
        };

        Self {
            store,
            token,
            mail_domain: config.mail_domain.clone(),
            admin_domain_suffix: config.admin_domain_suffix.clone(),
        }
    }

    /// Authenticates against the service and establishes the session.
    ///
    /// The token is only built and persisted after the service confirms the
    /// credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the service rejects the credentials or the token
    /// cannot be persisted.
    pub async fn login<G: AuthGateway>(
        &mut self,
        gateway: &G,
        email: &str,
        password: &str,
    ) -> Result<()> {
        gateway
            .login(&Credentials {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;

        self.establish(email, password)
    }

    /// Registers a new account and establishes the session.
    ///
    /// The email must belong to the configured mail domain; that is checked
    /// locally and rejected before any network call.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError`] for a locally rejected email, or an API
    /// error if the service refuses the registration.
    pub async fn register<G: AuthGateway>(
        &mut self,
        gateway: &G,
        email: &str,
        password: &str,
    ) -> Result<()> {
        validate_registration_email(email, &self.mail_domain)?;

        gateway
            .register(&Credentials {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;

        self.establish(email, password)
    }

    fn establish(&mut self, email: &str, password: &str) -> Result<()> {
        let encoded = token::encode(email, password);
        self.store.save(&encoded)?;
        self.token = Some(encoded);
        debug!(identity = %email, "session established");
        Ok(())
    }

    /// Destroys the session, in memory and in the store. Idempotent.
    ///
    /// A store that fails to clear is logged and otherwise ignored; the
    /// in-memory session is gone either way.
    pub fn logout(&mut self) {
        self.token = None;
        if let Err(e) = self.store.clear() {
            warn!("failed to clear persisted session token: {e}");
        }
    }

    /// Whether a session is currently established.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The authenticated identity, decoded from the token.
    ///
    /// Returns `None` when no token is present or the token is malformed;
    /// never fails to the caller.
    #[must_use]
    pub fn current_identity(&self) -> Option<String> {
        let token = self.token.as_deref()?;
        token::decode(token).map(|(identity, _)| identity)
    }

    /// Whether the authenticated identity holds the admin role.
    ///
    /// True iff the identity ends with the configured admin domain suffix.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.current_identity()
            .is_some_and(|identity| identity.ends_with(&self.admin_domain_suffix))
    }

    /// The auth header for protected requests, when a token is present.
    #[must_use]
    pub fn auth_header(&self) -> Option<AuthHeader> {
        self.token.as_deref().map(AuthHeader::basic)
    }
}

/// Checks the `^[^@]+@<mail_domain>$` registration rule.
fn validate_registration_email(
    email: &str,
    mail_domain: &str,
) -> std::result::Result<(), RegistrationError> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err(RegistrationError::InvalidEmail);
    };

    if local.is_empty() || local.contains('@') || domain.contains('@') {
        return Err(RegistrationError::InvalidEmail);
    }

    if domain != mail_domain {
        return Err(RegistrationError::WrongDomain {
            domain: mail_domain.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use gomail_api::ApiError;

    use super::*;
    use crate::error::Error;

    /// Scripted auth gateway recording which calls were made.
    #[derive(Default)]
    struct ScriptedAuth {
        reject: bool,
        calls: Mutex<Vec<&'static str>>,
    }

    impl ScriptedAuth {
        fn rejecting() -> Self {
            Self {
                reject: true,
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }

        fn outcome(&self) -> gomail_api::Result<()> {
            if self.reject {
                Err(ApiError::Status {
                    status: 401,
                    message: Some("Invalid credentials".to_string()),
                })
            } else {
                Ok(())
            }
        }
    }

    impl AuthGateway for ScriptedAuth {
        async fn login(&self, _credentials: &Credentials) -> gomail_api::Result<()> {
            self.calls.lock().unwrap().push("login");
            self.outcome()
        }

        async fn register(&self, _credentials: &Credentials) -> gomail_api::Result<()> {
            self.calls.lock().unwrap().push("register");
            self.outcome()
        }
    }

    fn manager() -> SessionManager<MemoryTokenStore> {
        SessionManager::new(MemoryTokenStore::new(), &CoreConfig::default())
    }

    #[tokio::test]
    async fn test_login_then_logout() {
        let gateway = ScriptedAuth::default();
        let mut session = manager();

        session
            .login(&gateway, "alice@gomail.kurs", "hunter2")
            .await
            .unwrap();
        assert_eq!(
            session.current_identity(),
            Some("alice@gomail.kurs".to_string())
        );
        assert!(session.auth_header().is_some());

        session.logout();
        assert_eq!(session.current_identity(), None);
        assert!(session.auth_header().is_none());
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let mut session = manager();
        session.logout();
        session.logout();
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_rejected_login_leaves_no_session() {
        let gateway = ScriptedAuth::rejecting();
        let mut session = manager();

        let err = session
            .login(&gateway, "alice@gomail.kurs", "wrong")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Status { status: 401, .. })));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_session_restored_from_store() {
        let store = MemoryTokenStore::with_token(token::encode("bob@gomail.kurs", "pw"));
        let session = SessionManager::new(store, &CoreConfig::default());
        assert_eq!(
            session.current_identity(),
            Some("bob@gomail.kurs".to_string())
        );
    }

    #[test]
    fn test_malformed_persisted_token_is_absent_identity() {
        let store = MemoryTokenStore::with_token("garbage!!");
        let session = SessionManager::new(store, &CoreConfig::default());
        // Token present but undecodable: identity fails safe to None.
        assert!(session.is_authenticated());
        assert_eq!(session.current_identity(), None);
        assert!(!session.is_admin());
    }

    #[tokio::test]
    async fn test_admin_role_from_domain_suffix() {
        let gateway = ScriptedAuth::default();
        let mut session = manager();

        session
            .login(&gateway, "admin@admin.gomail.kurs", "pw")
            .await
            .unwrap();
        assert!(session.is_admin());

        session
            .login(&gateway, "alice@gomail.kurs", "pw")
            .await
            .unwrap();
        assert!(!session.is_admin());
    }

    #[tokio::test]
    async fn test_register_rejects_foreign_domain_without_network() {
        let gateway = ScriptedAuth::default();
        let mut session = manager();

        let err = session
            .register(&gateway, "alice@elsewhere.com", "pw")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Registration(RegistrationError::WrongDomain { .. })
        ));
        assert!(gateway.calls().is_empty());
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_register_establishes_session() {
        let gateway = ScriptedAuth::default();
        let mut session = manager();

        session
            .register(&gateway, "carol@gomail.kurs", "pw")
            .await
            .unwrap();
        assert_eq!(gateway.calls(), vec!["register"]);
        assert_eq!(
            session.current_identity(),
            Some("carol@gomail.kurs".to_string())
        );
    }

    #[test]
    fn test_registration_email_rule() {
        let domain = "gomail.kurs";
        assert!(validate_registration_email("a@gomail.kurs", domain).is_ok());
        assert_eq!(
            validate_registration_email("nodomain", domain),
            Err(RegistrationError::InvalidEmail)
        );
        assert_eq!(
            validate_registration_email("@gomail.kurs", domain),
            Err(RegistrationError::InvalidEmail)
        );
        assert_eq!(
            validate_registration_email("a@b@gomail.kurs", domain),
            Err(RegistrationError::InvalidEmail)
        );
        assert!(matches!(
            validate_registration_email("a@other.kurs", domain),
            Err(RegistrationError::WrongDomain { .. })
        ));
    }
}
