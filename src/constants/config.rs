use std::env;
use std::path::PathBuf;

const DEV_JWT_SECRET: &str = "flatfile-bank-dev-secret";

pub fn get_server_address() -> String {
    env::var("SERVER_ADDRESS")
        .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
}

/// Directory holding one JSON file per collection.
pub fn get_data_dir() -> PathBuf {
    env::var("DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("json"))
}

pub fn get_jwt_secret() -> String {
    env::var("JWT_SECRET").unwrap_or_else(|_| {
        log::warn!("JWT_SECRET is not set, falling back to the development secret");
        DEV_JWT_SECRET.to_string()
    })
}

pub fn get_token_expires_in_hours() -> i64 {
    env::var("TOKEN_EXPIRES_IN_HOURS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(24)
}

pub fn get_bcrypt_cost() -> u32 {
    env::var("BCRYPT_COST")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(bcrypt::DEFAULT_COST)
}

/// When set, transfers run one at a time behind a single ledger lock.
pub fn get_serialize_transfers() -> bool {
    env::var("SERIALIZE_TRANSFERS")
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
