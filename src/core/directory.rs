//! User and account directory
//!
//! This module provides the `Directory` struct which keeps the registered
//! users and opened accounts in memory and writes every change through to its
//! record stores immediately.
//!
//! The Directory is responsible for:
//! - Looking users up by national ID
//! - Registering users, rejecting duplicate national IDs
//! - Opening accounts for existing users only
//! - Listing accounts in the order they were opened
//!
//! # Write-Through
//!
//! A successful create persists the whole affected collection before
//! returning. Rejected creates touch neither memory nor storage. If the write
//! itself fails, the in-memory append is undone so memory and disk agree.

use crate::core::traits::RecordStore;
use crate::types::{Account, AccountNumber, BankError, User};
use log::{debug, error, info};
use std::io::{self, Write};

/// In-memory user and account collections backed by record stores
pub struct Directory {
    users: Vec<User>,
    accounts: Vec<Account>,
    user_store: Box<dyn RecordStore<User>>,
    account_store: Box<dyn RecordStore<Account>>,
}

impl Directory {
    /// Load both collections from their stores
    ///
    /// # Errors
    ///
    /// Returns the store's error if either collection cannot be read. A store
    /// that has never been written loads as empty and is not an error.
    pub fn open(
        user_store: Box<dyn RecordStore<User>>,
        account_store: Box<dyn RecordStore<Account>>,
    ) -> Result<Self, BankError> {
        let users = user_store.load()?;
        let accounts = account_store.load()?;

        debug!(
            "directory opened with {} users and {} accounts",
            users.len(),
            accounts.len()
        );

        Ok(Directory {
            users,
            accounts,
            user_store,
            account_store,
        })
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Find the first user whose national ID equals `national_id`
    pub fn find_user(&self, national_id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.national_id == national_id)
    }

    /// Register a new user and persist the user collection
    ///
    /// # Errors
    ///
    /// - `BankError::DuplicateUser` if the national ID is already registered
    /// - the store's error if the collection cannot be written
    pub fn create_user(&mut self, user: User) -> Result<&User, BankError> {
        if self.find_user(&user.national_id).is_some() {
            return Err(BankError::duplicate_user(&user.national_id));
        }

        self.users.push(user);
        if let Err(e) = self.user_store.save(&self.users) {
            error!("failed to persist users: {}", e);
            self.users.pop();
            return Err(e);
        }

        let created = &self.users[self.users.len() - 1];
        info!("user {} registered", created.national_id);
        Ok(created)
    }

    /// Number the next opened account will get
    ///
    /// Account numbers are `current account count + 1`.
    ///
    /// # Errors
    ///
    /// Returns `BankError::ArithmeticOverflow` once the count no longer fits
    /// an `AccountNumber`.
    pub fn next_account_number(&self) -> Result<AccountNumber, BankError> {
        account_number_after(self.accounts.len())
    }

    /// Open an account for the user with `national_id` and persist the
    /// account collection
    ///
    /// The account embeds a copy of the user record as it is now.
    ///
    /// # Arguments
    ///
    /// * `branch` - Branch code for the new account
    /// * `number` - Account number, usually [`next_account_number`](Self::next_account_number)
    /// * `national_id` - National ID of the owner
    ///
    /// # Errors
    ///
    /// - `BankError::UserNotFound` if no user has this national ID
    /// - the store's error if the collection cannot be written
    pub fn create_account(
        &mut self,
        branch: &str,
        number: AccountNumber,
        national_id: &str,
    ) -> Result<&Account, BankError> {
        let owner = self
            .find_user(national_id)
            .cloned()
            .ok_or_else(|| BankError::user_not_found(national_id))?;

        self.accounts.push(Account::new(branch, number, owner));
        if let Err(e) = self.account_store.save(&self.accounts) {
            error!("failed to persist accounts: {}", e);
            self.accounts.pop();
            return Err(e);
        }

        let created = &self.accounts[self.accounts.len() - 1];
        info!(
            "account {}/{} opened for {}",
            created.branch, created.number, created.owner.national_id
        );
        Ok(created)
    }

    /// Write every account to `out` in the order they were opened
    ///
    /// Each entry is preceded by a 50-character separator line; a final
    /// separator closes the listing, so an empty directory prints just one.
    pub fn render_accounts<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        let separator = "=".repeat(50);

        for account in &self.accounts {
            writeln!(out, "{}", separator)?;
            writeln!(out, "Agência:\t{}", account.branch)?;
            writeln!(out, "C/C:\t\t{}", account.number)?;
            writeln!(out, "Titular:\t{}", account.owner.full_name)?;
            writeln!(out)?;
        }

        writeln!(out, "{}", separator)
    }
}

fn account_number_after(count: usize) -> Result<AccountNumber, BankError> {
    AccountNumber::try_from(count)
        .ok()
        .and_then(|n| n.checked_add(1))
        .ok_or_else(|| BankError::arithmetic_overflow("account number"))
}
