use std::sync::Arc;

use argon2::{Argon2, password_hash::{PasswordHasher, PasswordVerifier, SaltString}, PasswordHash};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header as JwtHeader, Validation};
use rand::rngs::OsRng;
use tracing::{debug, info, instrument};

use super::domain::{AuthSession, AuthUser, Claims, Identity, LoginInput, RegisterInput, Role};
use super::errors::AuthError;
use super::repository::AuthRepository;

/// Auth service configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
}

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository + ?Sized> {
    repo: Arc<R>,
    cfg: AuthConfig,
}

impl<R: AuthRepository + ?Sized> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Self { Self { repo, cfg } }

    /// Register a new user with a hashed password.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockAuthRepository};
    /// use service::auth::domain::{RegisterInput, Role};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let svc = AuthService::new(repo, AuthConfig { jwt_secret: "secret".into(), token_ttl_hours: 1 });
    /// let input = RegisterInput { username: "frontdesk".into(), password: "Secret123".into(), role: Role::Staff };
    /// let user = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(user.username, "frontdesk");
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn register(&self, input: RegisterInput) -> Result<AuthUser, AuthError> {
        models::app_user::validate_username(&input.username).map_err(|e| AuthError::InvalidAccount(e.to_string()))?;
        if input.password.len() < 8 {
            return Err(AuthError::InvalidAccount("password too short (>=8)".into()));
        }
        if let Some(existing) = self.repo.find_by_username(input.username.trim()).await? {
            debug!("user exists: {}", existing.user.username);
            return Err(AuthError::UsernameTaken);
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(input.password.as_bytes(), &salt)
            .map_err(|e| AuthError::Hashing(e.to_string()))?
            .to_string();

        let user = self.repo.create_user(input.username.trim(), &hash, input.role).await?;
        info!(user_id = user.id, username = %user.username, role = user.role.as_str(), "user_registered");
        Ok(user)
    }

    /// Authenticate a user and issue a token.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockAuthRepository};
    /// use service::auth::domain::{RegisterInput, LoginInput, Role};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let svc = AuthService::new(repo.clone(), AuthConfig { jwt_secret: "secret".into(), token_ttl_hours: 1 });
    /// let _ = tokio_test::block_on(svc.register(RegisterInput { username: "boss".into(), password: "Passw0rd".into(), role: Role::Admin }));
    /// let session = tokio_test::block_on(svc.login(LoginInput { username: "boss".into(), password: "Passw0rd".into() })).unwrap();
    /// assert!(session.user.role.is_admin());
    /// assert!(!session.token.is_empty());
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let stored = self.repo
            .find_by_username(input.username.trim())
            .await?
            .ok_or(AuthError::BadCredentials)?;

        let parsed = PasswordHash::new(&stored.password_hash).map_err(|e| AuthError::Hashing(e.to_string()))?;
        if Argon2::default().verify_password(input.password.as_bytes(), &parsed).is_err() {
            return Err(AuthError::BadCredentials);
        }

        let token = self.issue_token(&stored.user)?;
        info!(user_id = stored.user.id, event = "login", "user_logged_in");
        Ok(AuthSession { user: stored.user, token })
    }

    /// Create the account unless a user with that name already exists.
    /// Returns `true` when it was created.
    pub async fn ensure_user(&self, username: &str, password: &str, role: Role) -> Result<bool, AuthError> {
        if self.repo.find_by_username(username.trim()).await?.is_some() {
            return Ok(false);
        }
        let input = RegisterInput { username: username.to_string(), password: password.to_string(), role };
        match self.register(input).await {
            Ok(_) => Ok(true),
            Err(AuthError::UsernameTaken) => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub fn issue_token(&self, user: &AuthUser) -> Result<String, AuthError> {
        let now = chrono::Utc::now();
        let claims = Claims {
            sub: user.username.clone(),
            uid: user.id,
            role: user.role,
            iat: now.timestamp(),
            exp: (now + chrono::Duration::hours(self.cfg.token_ttl_hours)).timestamp(),
        };
        encode(&JwtHeader::default(), &claims, &EncodingKey::from_secret(self.cfg.jwt_secret.as_bytes()))
            .map_err(|e| AuthError::Token(e.to_string()))
    }

    /// Check signature and expiry; the identity is taken from the claims only.
    pub fn verify_token(&self, token: &str) -> Result<Identity, AuthError> {
        let data = decode::<Claims>(token, &DecodingKey::from_secret(self.cfg.jwt_secret.as_bytes()), &Validation::default())
            .map_err(|e| AuthError::Token(e.to_string()))?;
        Ok(data.claims.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repository::mock::MockAuthRepository;

    fn svc() -> AuthService<MockAuthRepository> {
        AuthService::new(Arc::new(MockAuthRepository::default()), AuthConfig { jwt_secret: "test-secret".into(), token_ttl_hours: 1 })
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_unauthorized() {
        let svc = svc();
        svc.register(RegisterInput { username: "staff1".into(), password: "correct-horse".into(), role: Role::Staff }).await.unwrap();
        let err = svc.login(LoginInput { username: "staff1".into(), password: "wrong-horse".into() }).await.unwrap_err();
        assert!(matches!(err, AuthError::BadCredentials));
        let err = svc.login(LoginInput { username: "ghost".into(), password: "whatever".into() }).await.unwrap_err();
        assert!(matches!(err, AuthError::BadCredentials));
    }

    #[tokio::test]
    async fn register_rejects_short_password_and_duplicates() {
        let svc = svc();
        let short = svc.register(RegisterInput { username: "a".into(), password: "short".into(), role: Role::Staff }).await;
        assert!(matches!(short, Err(AuthError::InvalidAccount(_))));
        svc.register(RegisterInput { username: "a".into(), password: "long-enough".into(), role: Role::Staff }).await.unwrap();
        let dup = svc.register(RegisterInput { username: "a".into(), password: "long-enough".into(), role: Role::Staff }).await;
        assert!(matches!(dup, Err(AuthError::UsernameTaken)));
    }

    #[tokio::test]
    async fn token_round_trip_keeps_role() {
        let svc = svc();
        let session = {
            svc.register(RegisterInput { username: "boss".into(), password: "Passw0rd!".into(), role: Role::Admin }).await.unwrap();
            svc.login(LoginInput { username: "boss".into(), password: "Passw0rd!".into() }).await.unwrap()
        };
        let identity = svc.verify_token(&session.token).unwrap();
        assert_eq!(identity.username, "boss");
        assert!(identity.is_admin());
    }

    #[test]
    fn tampered_or_foreign_tokens_are_rejected() {
        let svc = svc();
        let user = AuthUser { id: 1, username: "staff".into(), role: Role::Staff };
        let token = svc.issue_token(&user).unwrap();

        let other = AuthService::new(Arc::new(MockAuthRepository::default()), AuthConfig { jwt_secret: "another".into(), token_ttl_hours: 1 });
        assert!(matches!(other.verify_token(&token), Err(AuthError::Token(_))));
        assert!(svc.verify_token("not-a-jwt").is_err());
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let svc = AuthService::new(Arc::new(MockAuthRepository::default()), AuthConfig { jwt_secret: "test-secret".into(), token_ttl_hours: -2 });
        let token = svc.issue_token(&AuthUser { id: 1, username: "staff".into(), role: Role::Staff }).unwrap();
        assert!(svc.verify_token(&token).is_err());
    }

    #[tokio::test]
    async fn ensure_user_is_idempotent() {
        let svc = svc();
        assert!(svc.ensure_user("admin", "change-me-now", Role::Admin).await.unwrap());
        assert!(!svc.ensure_user("admin", "another-password", Role::Admin).await.unwrap());
        svc.login(LoginInput { username: "admin".into(), password: "change-me-now".into() }).await.unwrap();
    }
}
