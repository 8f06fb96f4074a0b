//! Reversible credential token encoding.
//!
//! The session token is the Basic-auth credential pair, base64-encoded as
//! `identity:secret`. It is built and decoded entirely client-side; the
//! server never issues it and cannot revoke it. That is a known trust
//! weakness of the service contract, preserved here for compatibility.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Separator between identity and secret inside the token.
const SEPARATOR: char = ':';

/// Encodes an identity/secret pair into an opaque token.
///
/// Decoding splits on the first separator, so a secret may contain `:` but
/// an identity must not; an identity with a `:` will not round-trip.
/// Identities are email addresses in practice, which never contain one.
#[must_use]
pub fn encode(identity: &str, secret: &str) -> String {
    STANDARD.encode(format!("{identity}{SEPARATOR}{secret}"))
}

/// Decodes a token back into its identity/secret pair.
///
/// Returns `None` for anything malformed: invalid base64, non-UTF-8
/// payload, or a payload without a separator. Never panics.
#[must_use]
pub fn decode(token: &str) -> Option<(String, String)> {
    let bytes = STANDARD.decode(token).ok()?;
    let text = String::from_utf8(bytes).ok()?;
    let (identity, secret) = text.split_once(SEPARATOR)?;
    Some((identity.to_string(), secret.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_round_trip() {
        let token = encode("alice@gomail.kurs", "hunter2");
        assert_eq!(
            decode(&token),
            Some(("alice@gomail.kurs".to_string(), "hunter2".to_string()))
        );
    }

    #[test]
    fn test_secret_may_contain_separator() {
        let token = encode("alice@gomail.kurs", "pa:ss:word");
        assert_eq!(
            decode(&token),
            Some(("alice@gomail.kurs".to_string(), "pa:ss:word".to_string()))
        );
    }

    #[test]
    fn test_malformed_tokens_decode_to_none() {
        assert_eq!(decode("not base64!!"), None);
        // Valid base64, but no separator in the payload.
        assert_eq!(decode(&STANDARD.encode("no-separator")), None);
        // Valid base64, but not UTF-8.
        assert_eq!(decode(&STANDARD.encode([0xff, 0xfe, 0x3a])), None);
    }

    proptest! {
        #[test]
        fn prop_round_trip(identity in "[^:]{0,40}", secret in ".{0,40}") {
            let token = encode(&identity, &secret);
            prop_assert_eq!(decode(&token), Some((identity, secret)));
        }
    }
}
