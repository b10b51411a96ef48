pub mod account;
pub mod auth;
pub mod history;
pub mod response;
pub mod session;
pub mod transaction;
pub mod transfer;
pub mod user;
