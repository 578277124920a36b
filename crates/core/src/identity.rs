//! Caller identity seam.
//!
//! The gallery access layer never looks the current user up ambiently; it
//! receives an [`IdentityProvider`] and asks it, synchronously, before each
//! operation. [`Session`] is the stock implementation: either anonymous or
//! bound to a user id, optionally recovered from an HS256 session token
//! issued by the auth provider.

use std::sync::Arc;

use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// Audience carried by access tokens issued to signed-in users.
pub const AUTHENTICATED_AUDIENCE: &str = "authenticated";

/// Source of the acting user's identity.
pub trait IdentityProvider: Send + Sync {
    /// The authenticated user, or `None` when nobody is signed in.
    fn current_user(&self) -> Option<UserId>;
}

impl<T: IdentityProvider + ?Sized> IdentityProvider for &T {
    fn current_user(&self) -> Option<UserId> {
        (**self).current_user()
    }
}

impl<T: IdentityProvider + ?Sized> IdentityProvider for Arc<T> {
    fn current_user(&self) -> Option<UserId> {
        (**self).current_user()
    }
}

/// Claims read from a session access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject -- the user's id.
    pub sub: UserId,
    /// Audience; must be [`AUTHENTICATED_AUDIENCE`].
    pub aud: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Auth provider role name, when present.
    #[serde(default)]
    pub role: Option<String>,
}

/// A request-scoped identity: anonymous or a single authenticated user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    user_id: Option<UserId>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }

    pub fn authenticated(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    /// Validate an HS256 access token and bind the session to its subject.
    ///
    /// Signature, expiry and audience are all checked. Callers that want to
    /// degrade to an anonymous session on a bad token can do so with
    /// `unwrap_or_default()`.
    pub fn from_access_token(
        token: &str,
        secret: &str,
    ) -> Result<Self, jsonwebtoken::errors::Error> {
        let mut validation = Validation::default();
        validation.set_audience(&[AUTHENTICATED_AUDIENCE]);

        let data = decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )?;
        Ok(Self::authenticated(data.claims.sub))
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }
}

impl IdentityProvider for Session {
    fn current_user(&self) -> Option<UserId> {
        self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use uuid::Uuid;

    const SECRET: &str = "test-secret-that-is-long-enough-for-hs256";

    fn token(sub: Uuid, aud: &str, exp_offset_secs: i64, secret: &str) -> String {
        let claims = SessionClaims {
            sub,
            aud: aud.to_string(),
            exp: chrono::Utc::now().timestamp() + exp_offset_secs,
            role: Some("authenticated".to_string()),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn anonymous_session_has_no_user() {
        assert_eq!(Session::anonymous().current_user(), None);
        assert!(!Session::default().is_authenticated());
    }

    #[test]
    fn valid_token_yields_subject() {
        let user = Uuid::new_v4();
        let session =
            Session::from_access_token(&token(user, AUTHENTICATED_AUDIENCE, 3600, SECRET), SECRET)
                .unwrap();
        assert_eq!(session.current_user(), Some(user));
    }

    #[test]
    fn expired_token_is_rejected() {
        let jwt = token(Uuid::new_v4(), AUTHENTICATED_AUDIENCE, -3600, SECRET);
        assert!(Session::from_access_token(&jwt, SECRET).is_err());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let jwt = token(Uuid::new_v4(), AUTHENTICATED_AUDIENCE, 3600, "some-other-secret");
        assert!(Session::from_access_token(&jwt, SECRET).is_err());
    }

    #[test]
    fn foreign_audience_is_rejected() {
        let jwt = token(Uuid::new_v4(), "anon", 3600, SECRET);
        assert!(Session::from_access_token(&jwt, SECRET).is_err());
    }

    #[test]
    fn bad_token_degrades_to_anonymous() {
        let session = Session::from_access_token("not-a-jwt", SECRET).unwrap_or_default();
        assert_eq!(session.current_user(), None);
    }

    #[test]
    fn shared_providers_delegate() {
        let user = Uuid::new_v4();
        let shared = Arc::new(Session::authenticated(user));
        assert_eq!(shared.current_user(), Some(user));
        assert_eq!((&*shared).current_user(), Some(user));
    }
}
