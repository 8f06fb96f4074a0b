//! Session token persistence.
//!
//! The encoded credential token is the only persisted session field. In
//! production it lives in the platform's native credential storage:
//! - Linux: Secret Service (GNOME Keyring, `KWallet`)
//! - macOS: Keychain
//! - Windows: Credential Manager

use keyring::Entry;
use tracing::debug;

/// Service name used for keyring entries.
const SERVICE_NAME: &str = "gomail";

/// Keyring entry key for the session token.
const TOKEN_KEY: &str = "session_token";

/// Error type for token store operations.
#[derive(Debug, thiserror::Error)]
pub enum TokenStoreError {
    /// Failed to access keyring.
    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),
}

/// Result type for token store operations.
pub type TokenStoreResult<T> = std::result::Result<T, TokenStoreError>;

/// Persistence seam for the session token.
pub trait TokenStore {
    /// Loads the persisted token, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage fails.
    fn load(&self) -> TokenStoreResult<Option<String>>;

    /// Persists the token, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage fails.
    fn save(&self, token: &str) -> TokenStoreResult<()>;

    /// Removes the persisted token. Removing an absent token is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage fails.
    fn clear(&self) -> TokenStoreResult<()>;
}

/// Token store backed by the system keyring.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyringTokenStore;

impl TokenStore for KeyringTokenStore {
    fn load(&self) -> TokenStoreResult<Option<String>> {
        let entry = Entry::new(SERVICE_NAME, TOKEN_KEY)?;
        match entry.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => {
                debug!("no session token in keyring");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, token: &str) -> TokenStoreResult<()> {
        let entry = Entry::new(SERVICE_NAME, TOKEN_KEY)?;
        entry.set_password(token)?;
        debug!("stored session token");
        Ok(())
    }

    fn clear(&self) -> TokenStoreResult<()> {
        let entry = Entry::new(SERVICE_NAME, TOKEN_KEY)?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory token store for tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: std::sync::Mutex<Option<String>>,
}

impl MemoryTokenStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `token`, as after a previous run.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: std::sync::Mutex::new(Some(token.into())),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> TokenStoreResult<Option<String>> {
        Ok(self.slot().clone())
    }

    fn save(&self, token: &str) -> TokenStoreResult<()> {
        *self.slot() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> TokenStoreResult<()> {
        *self.slot() = None;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    // The keyring tests interact with the actual system credential storage.
    // They are ignored by default to avoid polluting it during automated
    // testing. Run manually with `cargo test -- --ignored`.

    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.load().unwrap(), None);

        store.save("dG9rZW4=").unwrap();
        assert_eq!(store.load().unwrap(), Some("dG9rZW4=".to_string()));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_memory_store_clear_is_idempotent() {
        let store = MemoryTokenStore::new();
        store.clear().unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    #[ignore = "Interacts with system keyring"]
    fn test_keyring_store_round_trip() {
        let store = KeyringTokenStore;
        store.save("dGVzdF90b2tlbg==").unwrap();
        assert_eq!(store.load().unwrap(), Some("dGVzdF90b2tlbg==".to_string()));
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
