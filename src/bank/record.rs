use serde::Serialize;
use std::fmt;

use crate::bank::Amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => write!(f, "deposit"),
            TransactionKind::Withdrawal => write!(f, "withdrawal"),
        }
    }
}

// One entry of an account's history. `balance` is the balance the
// operation left behind.
#[derive(Debug, Clone, Copy)]
pub struct TransactionRecord {
    pub kind: TransactionKind,
    pub amount: Amount,
    pub balance: Amount,
}

/// A statement line rendered from a TransactionRecord.
/// It decouples the exported CSV from the in-memory history and keeps
/// serialisation trivial.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct StatementRow {
    pub kind: String,
    pub amount: String,
    pub balance: String,
}

impl From<&TransactionRecord> for StatementRow {
    fn from(record: &TransactionRecord) -> Self {
        StatementRow {
            kind: record.kind.to_string(),
            amount: record.amount.to_string(),
            balance: record.balance.to_string(),
        }
    }
}
