use anyhow::Result;
use std::collections::HashMap;
use thiserror::Error;

use crate::bank::account::{Account, AccountError, AccountKind};
use crate::bank::amount::Amount;

// Keeps the familiar ten digit account number shape
const FIRST_ACCOUNT_NUMBER: u64 = 1_000_000_000;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Account operation failed: {0}")]
    Account(#[from] AccountError),

    #[error("Account {0} not found")]
    AccountNotFound(u64),
}

/// In-memory book of accounts, keyed by account number. Numbers are
/// handed out from a monotonic counter so they never collide.
pub struct Ledger {
    accounts: HashMap<u64, Account>,
    next_number: u64,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger {
            accounts: HashMap::new(),
            next_number: FIRST_ACCOUNT_NUMBER,
        }
    }

    pub fn open_account(
        &mut self,
        owner: String,
        kind: AccountKind,
        opening: Amount,
    ) -> Result<u64> {
        let number = self.next_number;
        let account = Account::open(number, owner, kind, opening).map_err(LedgerError::from)?;
        self.next_number += 1;
        self.accounts.insert(number, account);
        Ok(number)
    }

    pub fn deposit(&mut self, number: u64, amount: Amount) -> Result<Amount> {
        let balance = self
            .account_mut(number)?
            .deposit(amount)
            .map_err(LedgerError::from)?;
        Ok(balance)
    }

    pub fn withdraw(&mut self, number: u64, amount: Amount) -> Result<Amount> {
        let balance = self
            .account_mut(number)?
            .withdraw(amount)
            .map_err(LedgerError::from)?;
        Ok(balance)
    }

    pub fn account(&self, number: u64) -> Result<&Account> {
        match self.accounts.get(&number) {
            Some(account) => Ok(account),
            None => Err(LedgerError::AccountNotFound(number).into()),
        }
    }

    fn account_mut(&mut self, number: u64) -> Result<&mut Account, LedgerError> {
        self.accounts
            .get_mut(&number)
            .ok_or(LedgerError::AccountNotFound(number))
    }
}
