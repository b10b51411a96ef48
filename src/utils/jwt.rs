use jsonwebtoken::{decode, encode, errors::Error as JwtError, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user ID)
    pub exp: usize,  // Expiration time
    pub iat: usize,  // Issued at
}

impl Claims {
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}

/// Signing settings shared by login and the auth middleware.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub secret: String,
    pub expires_in_hours: i64,
}

impl TokenConfig {
    pub fn from_env() -> Self {
        Self {
            secret: constants::config::get_jwt_secret(),
            expires_in_hours: constants::config::get_token_expires_in_hours(),
        }
    }
}

pub fn create_jwt_token(user_id: i64, config: &TokenConfig) -> Result<String, JwtError> {
    let now = chrono::Utc::now();
    let exp = (now + chrono::Duration::hours(config.expires_in_hours)).timestamp() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        exp,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_ref()),
    )
}

pub fn validate_jwt_token(token: &str, config: &TokenConfig) -> Result<Claims, JwtError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_ref()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}
