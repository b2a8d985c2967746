//! Token Service
//!
//! Issues and verifies stateless HS256 bearer tokens. A token carries exactly
//! one account id under the `accountId` claim, a random `jti` so that no two
//! tokens are alike, and expires after a fixed lifetime. There is no refresh token and no revocation list: a token stays
//! valid until it expires.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::JwtSettings;
use crate::domain::AccountId;

/// Claim key holding the account id.
pub const ACCOUNT_ID_CLAIM: &str = "accountId";

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account the token was issued to
    #[serde(rename = "accountId")]
    pub account_id: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Unique token id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

/// Signed bearer token, to be sent back as `Authorization: Bearer <token>`.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}

/// Token errors
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Invalid token")]
    Invalid,

    #[error("Signing key is empty")]
    EmptyKey,

    #[error("Token signing failed: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// Issues and verifies bearer tokens with a single shared HMAC key.
///
/// Built once at startup and shared read-only between requests.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// Create a token service for `secret`.
    ///
    /// Signs a probe token so that an unusable key fails here, at startup,
    /// rather than on the first request.
    pub fn new(secret: &[u8], ttl: Duration) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::EmptyKey);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        let service = Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        };

        service.issue(&AccountId::new_v4())?;

        Ok(service)
    }

    /// Create a token service from JWT settings.
    pub fn from_settings(settings: &JwtSettings) -> Result<Self, TokenError> {
        Self::new(
            settings.secret.as_bytes(),
            Duration::minutes(settings.token_expiry_minutes),
        )
    }

    /// Issue a token for `account_id`, valid from now.
    pub fn issue(&self, account_id: &AccountId) -> Result<BearerToken, TokenError> {
        self.issue_at(account_id, Utc::now())
    }

    /// Issue a token as if it had been issued at `issued_at`.
    pub fn issue_at(
        &self,
        account_id: &AccountId,
        issued_at: DateTime<Utc>,
    ) -> Result<BearerToken, TokenError> {
        let claims = Claims {
            account_id: account_id.to_string(),
            exp: (issued_at + self.ttl).timestamp(),
            iat: issued_at.timestamp(),
            jti: Some(Uuid::new_v4().to_string()),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map(BearerToken)
            .map_err(TokenError::Signing)
    }

    /// Decode and validate a token's signature, structure and expiry.
    pub fn decode_claims(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }

    /// Verify a token and return the account id it was issued to.
    pub fn verify(&self, token: &str) -> Result<AccountId, TokenError> {
        let claims = self.decode_claims(token)?;

        AccountId::parse(&claims.account_id).map_err(|_| TokenError::Invalid)
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
