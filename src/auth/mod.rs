//! Admin session tokens and credential verification.
//!
//! The site has a single administrator. Rather than hardcoding that identity
//! in the handlers, it is modelled as a minimal user record ([`AdminUser`])
//! built from configuration, so the login/session path stays generic even
//! though only one record ever exists.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use thiserror::Error;
use uuid::Uuid;

/// Name of the session cookie set at login and cleared at logout.
pub const TOKEN_COOKIE: &str = "token";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub username: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(admin: &AdminUser, ttl_hours: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: admin.id,
            username: admin.username.clone(),
            role: admin.role.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(ttl_hours)).timestamp(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token generation failed: {0}")]
    TokenGeneration(String),

    #[error("invalid or expired token")]
    InvalidToken,
}

/// Sign claims into a compact HS256 token.
pub fn issue_token(claims: &Claims, secret: &str) -> Result<String, AuthError> {
    let key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), claims, &key).map_err(|e| AuthError::TokenGeneration(e.to_string()))
}

/// Verify signature and expiry, returning the embedded claims.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    decode::<Claims>(token, &key, &Validation::default())
        .map(|data| data.claims)
        .map_err(|_| AuthError::InvalidToken)
}

/// The configured administrator record.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub role: String,
    pub credential: Credential,
}

/// Profile returned by the session endpoints. Field names match what the
/// frontend consumes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub role: String,
}

impl AdminUser {
    /// Check a login attempt. Both the username and the password comparison
    /// run before returning so a rejection never reveals which one failed.
    pub fn verify_login(&self, username: &str, password: &str) -> bool {
        let username_ok: bool = username
            .as_bytes()
            .ct_eq(self.username.as_bytes())
            .into();
        let password_ok = self.credential.verify(password);
        username_ok && password_ok
    }

    pub fn profile(&self) -> AdminProfile {
        AdminProfile {
            id: self.id,
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            role: self.role.clone(),
        }
    }
}

/// How the admin password is verified. The mode is an explicit configuration
/// choice: `Plain` is only accepted outside production (enforced at config
/// load), `SaltedSha256` compares against a pre-hashed value.
#[derive(Debug, Clone)]
pub enum Credential {
    Plain(String),
    SaltedSha256 { salt: String, digest: Vec<u8> },
}

#[derive(Debug, Error)]
pub enum CredentialParseError {
    #[error("password hash must be of the form salt$hexdigest")]
    MalformedHash,

    #[error("password hash digest is not valid hex")]
    InvalidDigest,
}

impl Credential {
    /// Parse a stored `salt$hexdigest` pair, where the digest is
    /// SHA-256(salt || password).
    pub fn parse_hash(raw: &str) -> Result<Self, CredentialParseError> {
        let (salt, digest_hex) = raw
            .split_once('$')
            .ok_or(CredentialParseError::MalformedHash)?;
        if salt.is_empty() || digest_hex.is_empty() {
            return Err(CredentialParseError::MalformedHash);
        }
        let digest = hex::decode(digest_hex).map_err(|_| CredentialParseError::InvalidDigest)?;
        Ok(Credential::SaltedSha256 {
            salt: salt.to_string(),
            digest,
        })
    }

    /// Constant-time password check in either mode.
    pub fn verify(&self, password: &str) -> bool {
        match self {
            Credential::Plain(expected) => {
                password.as_bytes().ct_eq(expected.as_bytes()).into()
            }
            Credential::SaltedSha256 { salt, digest } => {
                let mut hasher = Sha256::new();
                hasher.update(salt.as_bytes());
                hasher.update(password.as_bytes());
                let computed = hasher.finalize();
                computed.as_slice().ct_eq(digest).into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin(credential: Credential) -> AdminUser {
        AdminUser {
            id: Uuid::from_u128(1),
            username: "admin".to_string(),
            first_name: "Selin".to_string(),
            role: "admin".to_string(),
            credential,
        }
    }

    fn hash_of(salt: &str, password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(salt.as_bytes());
        hasher.update(password.as_bytes());
        format!("{}${}", salt, hex::encode(hasher.finalize()))
    }

    #[test]
    fn plain_credential_accepts_exact_password_only() {
        let admin = admin(Credential::Plain("s3cret".to_string()));
        assert!(admin.verify_login("admin", "s3cret"));
        assert!(!admin.verify_login("admin", "s3cret "));
        assert!(!admin.verify_login("root", "s3cret"));
    }

    #[test]
    fn salted_hash_round_trip() {
        let credential = Credential::parse_hash(&hash_of("pepper", "hunter2")).unwrap();
        assert!(credential.verify("hunter2"));
        assert!(!credential.verify("hunter3"));
    }

    #[test]
    fn malformed_hashes_are_rejected() {
        assert!(Credential::parse_hash("no-dollar-sign").is_err());
        assert!(Credential::parse_hash("$deadbeef").is_err());
        assert!(Credential::parse_hash("salt$").is_err());
        assert!(Credential::parse_hash("salt$nothex!").is_err());
    }

    #[test]
    fn token_round_trip_preserves_claims() {
        let admin = admin(Credential::Plain("pw".to_string()));
        let claims = Claims::new(&admin, 24);
        let token = issue_token(&claims, "test-secret").unwrap();

        let decoded = verify_token(&token, "test-secret").unwrap();
        assert_eq!(decoded.sub, admin.id);
        assert_eq!(decoded.username, "admin");
        assert_eq!(decoded.role, "admin");
    }

    #[test]
    fn tampered_and_foreign_tokens_fail_verification() {
        let admin = admin(Credential::Plain("pw".to_string()));
        let claims = Claims::new(&admin, 24);
        let token = issue_token(&claims, "test-secret").unwrap();

        assert!(verify_token(&token, "other-secret").is_err());

        let mut tampered = token.clone();
        tampered.push('x');
        assert!(verify_token(&tampered, "test-secret").is_err());
    }

    #[test]
    fn expired_token_fails_verification() {
        let admin = admin(Credential::Plain("pw".to_string()));
        // Expired well past the default validation leeway.
        let claims = Claims {
            sub: admin.id,
            username: admin.username.clone(),
            role: admin.role.clone(),
            iat: Utc::now().timestamp() - 7200,
            exp: Utc::now().timestamp() - 3600,
        };
        let token = issue_token(&claims, "test-secret").unwrap();
        assert!(verify_token(&token, "test-secret").is_err());
    }
}
