//! Session token generation.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of generated session tokens.
pub const SESSION_TOKEN_LEN: usize = 48;

/// Generates a random alphanumeric session token.
///
/// Uses the thread-local CSPRNG. The token is handed to the user once;
/// only its HMAC hash is stored server-side.
pub fn generate_session_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_TOKEN_LEN)
        .map(char::from)
        .collect()
}

/// Length of anonymous visitor identifiers.
pub const VISITOR_ID_LEN: usize = 32;

/// Generates a random identifier for an anonymous visitor session.
///
/// Visitor ids only key advisory view flags, so they carry no
/// authentication weight.
pub fn generate_visitor_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(VISITOR_ID_LEN)
        .map(char::from)
        .collect()
}
