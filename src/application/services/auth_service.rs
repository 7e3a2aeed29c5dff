//! Authentication service for session token validation.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repositories::SessionRepository;
use crate::error::AppError;
use crate::utils::token::generate_session_token;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Service for authenticating requests via session-token cookies.
///
/// Tokens are hashed with HMAC-SHA256 (keyed by `signing_secret`) before
/// storage and comparison. An attacker with read-only access to the database
/// cannot verify or forge tokens without the server-side secret.
pub struct AuthService<R: SessionRepository> {
    repository: Arc<R>,
    signing_secret: String,
}

impl<R: SessionRepository> AuthService<R> {
    /// Creates a new authentication service.
    ///
    /// `signing_secret` must match the value used when sessions were issued.
    pub fn new(repository: Arc<R>, signing_secret: String) -> Self {
        Self {
            repository,
            signing_secret,
        }
    }

    /// Hashes a raw token with HMAC-SHA256 using the server signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    fn hash_token(&self, token: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Authenticates a raw session token and resolves it to its user.
    ///
    /// On success, updates the session's `last_used_at` timestamp for
    /// monitoring and audit purposes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is unknown or the
    /// session was revoked. Returns [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let token_hash = self.hash_token(token);

        let user = self
            .repository
            .find_user(&token_hash)
            .await?
            .ok_or_else(|| {
                AppError::unauthorized(
                    "Unauthorized",
                    json!({"reason": "Invalid or revoked session"}),
                )
            })?;

        let _ = self.repository.touch(&token_hash).await;

        Ok(user)
    }

    /// Issues a new session for a user and returns the raw token.
    ///
    /// The raw token is returned exactly once; only its hash is stored.
    pub async fn issue_session(&self, user_id: i64) -> Result<String, AppError> {
        let token = generate_session_token();
        let token_hash = self.hash_token(&token);

        self.repository.create(user_id, &token_hash).await?;

        Ok(token)
    }

    /// Revokes the session behind a raw token.
    ///
    /// Returns `true` if a live session was revoked.
    pub async fn revoke_session(&self, token: &str) -> Result<bool, AppError> {
        let token_hash = self.hash_token(token);
        self.repository.revoke(&token_hash).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockSessionRepository;
    use chrono::Utc;

    fn test_secret() -> String {
        "test-signing-secret".to_string()
    }

    fn test_user(id: i64) -> User {
        User {
            id,
            username: "alice".to_string(),
            created_at: Utc::now(),
        }
    }

    fn compute_expected_hash(token: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(test_secret().as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let mut mock_repo = MockSessionRepository::new();

        let token = "valid-token";
        let expected_hash = compute_expected_hash(token);

        mock_repo
            .expect_find_user()
            .withf(move |hash| hash == expected_hash)
            .times(1)
            .returning(|_| Ok(Some(test_user(3))));
        mock_repo.expect_touch().times(1).returning(|_| Ok(()));

        let service = AuthService::new(Arc::new(mock_repo), test_secret());
        let user = service.authenticate(token).await.unwrap();

        assert_eq!(user.id, 3);
    }

    #[tokio::test]
    async fn test_authenticate_unknown_token() {
        let mut mock_repo = MockSessionRepository::new();
        mock_repo.expect_find_user().times(1).returning(|_| Ok(None));

        let service = AuthService::new(Arc::new(mock_repo), test_secret());
        let result = service.authenticate("bogus").await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::Unauthorized { .. }
        ));
    }

    #[tokio::test]
    async fn test_issue_session_stores_hash_not_token() {
        let mut mock_repo = MockSessionRepository::new();

        mock_repo
            .expect_create()
            .withf(|_, hash| hash.len() == 64 && hash.chars().all(|c| c.is_ascii_hexdigit()))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = AuthService::new(Arc::new(mock_repo), test_secret());
        let token = service.issue_session(1).await.unwrap();

        // The raw token is alphanumeric, not the stored hex hash.
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(token.len(), 64);
    }

    #[tokio::test]
    async fn test_hash_token_consistency() {
        let service = AuthService::new(Arc::new(MockSessionRepository::new()), test_secret());

        let hash1 = service.hash_token("test-token");
        let hash2 = service.hash_token("test-token");

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[tokio::test]
    async fn test_hash_token_secret_matters() {
        let svc1 = AuthService::new(
            Arc::new(MockSessionRepository::new()),
            "secret-a".to_string(),
        );
        let svc2 = AuthService::new(
            Arc::new(MockSessionRepository::new()),
            "secret-b".to_string(),
        );

        assert_ne!(svc1.hash_token("token"), svc2.hash_token("token"));
    }
}
