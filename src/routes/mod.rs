pub mod account;
pub mod api;
pub mod auth;
pub mod history;
pub mod session;
pub mod transfer;
pub mod user;
