use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use super::model::AuthenticatedUser;
use crate::core::error::AppError;
use crate::features::users::models::UserRole;

/// Validates HS256 access tokens issued by the identity provider.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    leeway: u64,
}

#[derive(Debug, Clone, Deserialize)]
struct Claims {
    /// User id
    sub: String,
    #[serde(rename = "exp")]
    _exp: u64,
    username: String,
    role: UserRole,
    #[serde(default)]
    secondary_role: Option<UserRole>,
}

impl JwtValidator {
    pub fn new(secret: &str, leeway_secs: u64) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            leeway: leeway_secs,
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = self.leeway;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AppError::Unauthorized(e.to_string()))?;

        let claims = token_data.claims;

        let id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| AppError::Unauthorized("Invalid subject claim".to_string()))?;

        Ok(AuthenticatedUser {
            id,
            username: claims.username,
            role: claims.role,
            secondary_role: claims.secondary_role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;

    fn make_token(secret: &str, sub: &str, role: &str) -> String {
        let exp = chrono::Utc::now().timestamp() + 3600;
        let claims = json!({
            "sub": sub,
            "exp": exp,
            "username": "jdoe",
            "role": role,
        });
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_valid_token_round_trip() {
        let validator = JwtValidator::new("test-secret", 0);
        let token = make_token("test-secret", "42", "lecturer");

        let user = validator.validate_token(&token).unwrap();
        assert_eq!(user.id, 42);
        assert_eq!(user.role, UserRole::Lecturer);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let validator = JwtValidator::new("test-secret", 0);
        let token = make_token("other-secret", "42", "student");

        assert!(validator.validate_token(&token).is_err());
    }

    #[test]
    fn test_non_numeric_subject_rejected() {
        let validator = JwtValidator::new("test-secret", 0);
        let token = make_token("test-secret", "not-a-number", "student");

        assert!(validator.validate_token(&token).is_err());
    }
}
