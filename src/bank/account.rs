use std::fmt;
use thiserror::Error;

use crate::bank::amount::{Amount, AmountError};
use crate::bank::record::{TransactionKind, TransactionRecord};

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Amount must be greater than zero")]
    InvalidAmount,

    #[error("Insufficient funds: balance is {balance}, requested {requested}")]
    InsufficientFunds { balance: Amount, requested: Amount },

    #[error("Withdrawal would leave {remaining}, below the {floor} minimum balance")]
    BelowMinimumBalance { remaining: Amount, floor: Amount },

    #[error(transparent)]
    Amount(#[from] AmountError),
}

/// Which capability set the account carries. Fixed at creation; savings
/// accounts earn interest on deposit and keep a minimum balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Standard,
    Savings { rate_bps: i64, floor: Amount },
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountKind::Standard => write!(f, "standard"),
            AccountKind::Savings { .. } => write!(f, "savings"),
        }
    }
}

// Customer account
pub struct Account {
    pub number: u64, // Unique
    pub owner: String,
    kind: AccountKind,
    balance: Amount,
    history: Vec<TransactionRecord>,
}

impl Account {
    pub fn open(
        number: u64,
        owner: String,
        kind: AccountKind,
        opening: Amount,
    ) -> Result<Self, AccountError> {
        if !opening.is_positive() {
            return Err(AccountError::InvalidAmount);
        }
        if let AccountKind::Savings { floor, .. } = kind {
            if opening < floor {
                return Err(AccountError::BelowMinimumBalance {
                    remaining: opening,
                    floor,
                });
            }
        }
        Ok(Account {
            number,
            owner,
            kind,
            balance: opening,
            history: Vec::new(),
        })
    }

    /// Credits `amount` and returns the new balance. Savings accounts
    /// also earn interest on the running balance as part of the same
    /// deposit, recorded under the combined credited amount.
    pub fn deposit(&mut self, amount: Amount) -> Result<Amount, AccountError> {
        if !amount.is_positive() {
            return Err(AccountError::InvalidAmount);
        }

        let credit = match self.kind {
            AccountKind::Savings { rate_bps, .. } => {
                amount.add(&self.balance.interest_at(rate_bps)?)?
            }
            AccountKind::Standard => amount,
        };

        self.balance = self.balance.add(&credit)?;
        self.history.push(TransactionRecord {
            kind: TransactionKind::Deposit,
            amount: credit,
            balance: self.balance,
        });

        Ok(self.balance)
    }

    /// Debits `amount` and returns the new balance. Savings accounts
    /// refuse to go below their floor.
    pub fn withdraw(&mut self, amount: Amount) -> Result<Amount, AccountError> {
        if !amount.is_positive() {
            return Err(AccountError::InvalidAmount);
        }
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                balance: self.balance,
                requested: amount,
            });
        }

        let remaining = self.balance.sub(&amount)?;
        if let AccountKind::Savings { floor, .. } = self.kind {
            if remaining < floor {
                return Err(AccountError::BelowMinimumBalance { remaining, floor });
            }
        }

        self.balance = remaining;
        self.history.push(TransactionRecord {
            kind: TransactionKind::Withdrawal,
            amount,
            balance: self.balance,
        });

        Ok(self.balance)
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn history(&self) -> &[TransactionRecord] {
        &self.history
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }
}
