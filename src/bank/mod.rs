mod account;
mod amount;
mod ledger;
mod record;

pub use account::{Account, AccountError, AccountKind};
pub use amount::{Amount, AmountError};
pub use ledger::{Ledger, LedgerError};
pub use record::{StatementRow, TransactionKind, TransactionRecord};
