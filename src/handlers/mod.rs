pub mod account_handler;
pub mod auth_handler;
pub mod health;
pub mod history_handler;
pub mod session_handler;
pub mod transaction_handler;
pub mod transfer_handler;
pub mod user_handler;
