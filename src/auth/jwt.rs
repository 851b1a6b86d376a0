//! JWT envelope decoding
//!
//! The client never holds the signing key, so tokens are decoded without
//! signature verification. The server remains the authority: a forged or
//! revoked token is rejected there with a 401.

use crate::auth::models::{Identity, Role};
use crate::error::{Error, Result};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims issued by the marketplace API
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (numeric user ID as a string)
    pub sub: String,
    /// Account role
    pub role: String,
    /// Expiration time, seconds since epoch
    #[serde(default)]
    pub exp: Option<i64>,
    /// Issued at
    #[serde(default)]
    pub iat: Option<i64>,
}

impl Claims {
    /// Parse the role claim
    pub fn get_role(&self) -> Result<Role> {
        self.role.parse()
    }

    /// Build the identity this token stands for
    pub fn identity(&self) -> Result<Identity> {
        let id = self
            .sub
            .parse::<u64>()
            .map_err(|_| Error::InvalidToken(format!("subject '{}' is not a user id", self.sub)))?;
        Ok(Identity::new(id, self.get_role()?))
    }

    /// Check expiry against `now` (seconds since epoch). A token without
    /// `exp` counts as expired.
    pub fn is_expired_at(&self, now: i64) -> bool {
        match self.exp {
            Some(exp) => exp <= now,
            None => true,
        }
    }

    /// Check if token is expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(chrono::Utc::now().timestamp())
    }
}

/// Decode a token's claims without checking its signature or expiry
pub fn decode_token(token: &str) -> Result<Claims> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|e| Error::InvalidToken(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn token_for(claims: &serde_json::Value) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(b"server-side-secret"),
        )
        .expect("Failed to create token")
    }

    #[test]
    fn test_decode_without_key() {
        let exp = chrono::Utc::now().timestamp() + 3600;
        let token = token_for(&serde_json::json!({"sub": "42", "role": "client", "exp": exp}));
        let claims = decode_token(&token).expect("Failed to decode token");

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.exp, Some(exp));
        assert!(!claims.is_expired());
        assert_eq!(claims.identity().unwrap(), Identity::new(42, Role::Client));
    }

    #[test]
    fn test_invalid_token() {
        assert!(decode_token("invalid.token.here").is_err());
        assert!(decode_token("").is_err());
    }

    #[test]
    fn test_expiry_boundary() {
        let claims = Claims {
            sub: "1".to_string(),
            role: "freelancer".to_string(),
            exp: Some(1_000),
            iat: None,
        };
        assert!(claims.is_expired_at(1_000));
        assert!(claims.is_expired_at(1_001));
        assert!(!claims.is_expired_at(999));
    }

    #[test]
    fn test_missing_exp_counts_as_expired() {
        let token = token_for(&serde_json::json!({"sub": "3", "role": "admin"}));
        let claims = decode_token(&token).unwrap();
        assert!(claims.exp.is_none());
        assert!(claims.is_expired());
    }

    #[test]
    fn test_non_numeric_subject_rejected() {
        let claims = Claims {
            sub: "alice".to_string(),
            role: "client".to_string(),
            exp: None,
            iat: None,
        };
        assert!(claims.identity().is_err());
    }
}
