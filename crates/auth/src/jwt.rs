//! HS256 JSON Web Tokens.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use usersvc_core::User;

use crate::{TokenClaims, TokenError, validate_claims};

/// Verifies a bearer token and returns its claims.
pub trait JwtValidator: Send + Sync {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, TokenError>;
}

/// Mints a bearer token for a freshly authenticated user.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user: &User, now: DateTime<Utc>) -> Result<String, TokenError>;
}

/// Shared-secret token keys with a fixed lifetime for issued tokens.
///
/// The time window is carried in our own `issued_at`/`expires_at` claims, so
/// the library's registered-claim checks (`exp`, `nbf`, `aud`) are disabled and
/// [`validate_claims`] runs after the signature check instead.
pub struct Hs256Jwt {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl Hs256Jwt {
    pub fn new(secret: impl AsRef<[u8]>, ttl: Duration) -> Self {
        let secret = secret.as_ref();
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl core::fmt::Debug for Hs256Jwt {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Hs256Jwt").field("ttl", &self.ttl).finish_non_exhaustive()
    }
}

impl JwtValidator for Hs256Jwt {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, TokenError> {
        let data = jsonwebtoken::decode::<TokenClaims>(token, &self.decoding, &self.validation)
            .map_err(|e| TokenError::Invalid(e.to_string()))?;
        validate_claims(&data.claims, now)?;
        Ok(data.claims)
    }
}

impl TokenIssuer for Hs256Jwt {
    fn issue(&self, user: &User, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = TokenClaims {
            user_id: user.id,
            username: user.username.clone(),
            issued_at: now,
            expires_at: now + self.ttl,
        };
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use usersvc_core::UserId;

    fn user() -> User {
        User::new(UserId::new(10), "jmarie", "issilly")
    }

    #[test]
    fn issued_token_validates_with_same_secret() {
        let jwt = Hs256Jwt::new("secret", Duration::minutes(10));
        let now = Utc::now();
        let token = jwt.issue(&user(), now).unwrap();

        let claims = jwt.validate(&token, now + Duration::minutes(1)).unwrap();
        assert_eq!(claims.user_id, UserId::new(10));
        assert_eq!(claims.username, "jmarie");
        assert_eq!(claims.expires_at - claims.issued_at, Duration::minutes(10));
    }

    #[test]
    fn token_from_other_secret_is_invalid() {
        let now = Utc::now();
        let token = Hs256Jwt::new("other", Duration::minutes(10))
            .issue(&user(), now)
            .unwrap();

        let err = Hs256Jwt::new("secret", Duration::minutes(10))
            .validate(&token, now)
            .unwrap_err();
        assert!(matches!(err, TokenError::Invalid(_)));
    }

    #[test]
    fn expired_token_is_rejected_after_signature_check() {
        let jwt = Hs256Jwt::new("secret", Duration::minutes(1));
        let now = Utc::now();
        let token = jwt.issue(&user(), now).unwrap();
        assert_eq!(
            jwt.validate(&token, now + Duration::minutes(2)),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn garbage_is_invalid() {
        let jwt = Hs256Jwt::new("secret", Duration::minutes(1));
        assert!(matches!(
            jwt.validate("not-a-jwt", Utc::now()),
            Err(TokenError::Invalid(_))
        ));
    }
}
