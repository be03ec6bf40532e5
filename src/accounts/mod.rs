//! Local user accounts and the per-session signed-in identity.
//!
//! Credentials are stored as given and compared verbatim, matching the
//! original client-side behaviour. This module is an identity convenience
//! for partitioning history per user, not a security boundary.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::{session_key, users_key, Storage};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredAccount {
    #[serde(flatten)]
    account: UserAccount,
    password: String,
}

/// Registry of all known accounts under one storage key.
pub struct AccountStore<S: Storage> {
    storage: S,
}

impl<S: Storage> AccountStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Create an account; errors if the email is already registered.
    pub fn register(&mut self, name: &str, email: &str, password: &str) -> Result<UserAccount> {
        let mut accounts = self.load()?;
        if accounts.iter().any(|a| a.account.email == email) {
            bail!("An account already exists for {email}");
        }
        let account = UserAccount {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            created_at: Utc::now(),
        };
        accounts.push(StoredAccount {
            account: account.clone(),
            password: password.to_string(),
        });
        self.save(&accounts)?;
        Ok(account)
    }

    /// None on unknown email or wrong password; never an error for a failed
    /// attempt.
    pub fn login(&self, email: &str, password: &str) -> Result<Option<UserAccount>> {
        let accounts = self.load()?;
        Ok(accounts
            .into_iter()
            .find(|a| a.account.email == email && a.password == password)
            .map(|a| a.account))
    }

    /// Look up an account by email, creating one on first sight. The display
    /// name is taken from the local part of the email; the password starts
    /// empty until the user registers properly.
    pub fn find_or_register(&mut self, email: &str) -> Result<UserAccount> {
        if let Some(existing) = self.find_by_email(email)? {
            return Ok(existing);
        }
        let name = email.split('@').next().unwrap_or(email);
        self.register(name, email, "")
    }

    pub fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>> {
        let accounts = self.load()?;
        Ok(accounts
            .into_iter()
            .find(|a| a.account.email == email)
            .map(|a| a.account))
    }

    fn load(&self) -> Result<Vec<StoredAccount>> {
        let Some(payload) = self.storage.get(&users_key())? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&payload).context("Failed to parse the account registry")
    }

    fn save(&mut self, accounts: &[StoredAccount]) -> Result<()> {
        let payload = serde_json::to_string_pretty(accounts)?;
        self.storage.set(&users_key(), &payload)
    }
}

/// Holds the currently signed-in user for one session.
pub struct SessionStore<S: Storage> {
    storage: S,
}

impl<S: Storage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn set_current(&mut self, user: &UserAccount) -> Result<()> {
        let payload = serde_json::to_string_pretty(user)?;
        self.storage.set(&session_key(), &payload)
    }

    pub fn current(&self) -> Result<Option<UserAccount>> {
        let Some(payload) = self.storage.get(&session_key())? else {
            return Ok(None);
        };
        let user = serde_json::from_str(&payload).context("Failed to parse the session record")?;
        Ok(Some(user))
    }

    pub fn clear(&mut self) -> Result<()> {
        self.storage.remove(&session_key())
    }
}
