pub mod account_service;
pub mod auth_service;
pub mod history_service;
pub mod session_service;
pub mod transfer_service;
pub mod user_service;
pub mod wallet_service;

#[cfg(test)]
pub(crate) mod test_support;

use std::path::Path;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

use crate::store::{JsonFileStore, SharedStore};
use crate::types::{account::Account, history::History, session::Session, transfer::Transfer, user::User};
use crate::utils::jwt::TokenConfig;

use account_service::AccountService;
use auth_service::AuthService;
use history_service::HistoryService;
use session_service::SessionService;
use transfer_service::TransferService;
use user_service::UserService;
use wallet_service::WalletService;

/// Optional single-writer point for balance-changing operations.
pub type LedgerLock = Option<Arc<Mutex<()>>>;

pub(crate) async fn hold(lock: &LedgerLock) -> Option<MutexGuard<'_, ()>> {
    match lock {
        Some(lock) => Some(lock.lock().await),
        None => None,
    }
}

/// One store per collection.
#[derive(Clone)]
pub struct Stores {
    pub users: SharedStore<User>,
    pub accounts: SharedStore<Account>,
    pub histories: SharedStore<History>,
    pub transfers: SharedStore<Transfer>,
    pub sessions: SharedStore<Session>,
}

impl Stores {
    /// JSON files `user.json`, `account.json`, ... under `dir`.
    pub fn json_files(dir: &Path) -> Self {
        Self {
            users: Arc::new(JsonFileStore::<User>::in_dir(dir)),
            accounts: Arc::new(JsonFileStore::<Account>::in_dir(dir)),
            histories: Arc::new(JsonFileStore::<History>::in_dir(dir)),
            transfers: Arc::new(JsonFileStore::<Transfer>::in_dir(dir)),
            sessions: Arc::new(JsonFileStore::<Session>::in_dir(dir)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub bcrypt_cost: u32,
    pub token: TokenConfig,
    pub serialize_transfers: bool,
}

#[derive(Clone)]
pub struct Services {
    pub users: Arc<UserService>,
    pub accounts: Arc<AccountService>,
    pub histories: Arc<HistoryService>,
    pub transfers: Arc<TransferService>,
    pub sessions: Arc<SessionService>,
    pub auth: Arc<AuthService>,
    pub wallet: Arc<WalletService>,
}

impl Services {
    pub fn new(stores: Stores, settings: ServiceSettings) -> Self {
        let ledger_lock: LedgerLock = settings
            .serialize_transfers
            .then(|| Arc::new(Mutex::new(())));

        let users = Arc::new(UserService::new(stores.users, settings.bcrypt_cost));
        let accounts = Arc::new(AccountService::new(
            stores.accounts,
            users.clone(),
            ledger_lock.clone(),
        ));
        let histories = Arc::new(HistoryService::new(stores.histories, accounts.clone()));
        let transfers = Arc::new(TransferService::new(
            stores.transfers,
            accounts.clone(),
            histories.clone(),
            ledger_lock.clone(),
        ));
        let sessions = Arc::new(SessionService::new(stores.sessions, users.clone()));
        let auth = Arc::new(AuthService::new(users.clone(), sessions.clone(), settings.token));
        let wallet = Arc::new(WalletService::new(accounts.clone(), histories.clone(), ledger_lock));

        Self {
            users,
            accounts,
            histories,
            transfers,
            sessions,
            auth,
            wallet,
        }
    }
}
