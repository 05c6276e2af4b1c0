use std::collections::HashMap;

use log::{error, info, warn};

use crate::error::{Error, Result, ValidationError};
use crate::models::Account;
use crate::storage::AccountStore;

pub struct UserDirectory<S> {
    accounts: HashMap<String, Account>,
    store: S,
}

impl<S: AccountStore> UserDirectory<S> {
    pub fn new(store: S) -> Self {
        UserDirectory {
            accounts: HashMap::new(),
            store,
        }
    }

    /// A failing store leaves the directory empty instead of aborting startup.
    pub fn load(store: S) -> Self {
        let mut directory = Self::new(store);
        match directory.store.load_all_accounts() {
            Ok(accounts) => directory.initialize(accounts),
            Err(e) => error!("Failed to load accounts, starting empty: {}", e),
        }
        directory
    }

    pub fn initialize(&mut self, accounts: Vec<Account>) {
        for account in accounts {
            self.accounts.insert(account.username.clone(), account);
        }
        info!("User directory loaded with {} account(s)", self.accounts.len());
    }

    pub fn find(&self, username: &str) -> Option<&Account> {
        self.accounts.get(username)
    }

    pub fn register(&mut self, account: Account) -> Result<()> {
        validate(&account)?;
        if self.find(&account.username).is_some() {
            warn!("Registration rejected, username {} is taken", account.username);
            return Err(Error::UsernameTaken(account.username));
        }

        let username = account.username.clone();
        self.accounts.insert(username.clone(), account.clone());
        if let Err(e) = self.store.insert_account(&account) {
            self.accounts.remove(&username);
            error!("Failed to persist account {}: {}", username, e);
            return Err(e);
        }

        info!("Registered account {}", username);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn validate(account: &Account) -> std::result::Result<(), ValidationError> {
    let fields = [
        ("name", &account.display_name),
        ("username", &account.username),
        ("password", &account.password),
    ];
    for (field, value) in fields {
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyField(field));
        }
    }
    Ok(())
}
