use core::fmt;

use crate::domain::Money;

/// One recorded account event. The mini statement renders these through
/// Display, so the ledger stays typed instead of a bag of strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerEntry {
    Opened { balance: Money },
    Deposit { amount: Money, balance: Money },
    Withdrawal { amount: Money, balance: Money },
}

impl fmt::Display for LedgerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerEntry::Opened { balance } => {
                write!(f, "Account opened | Balance: Rs {}", balance)
            }
            LedgerEntry::Deposit { amount, balance } => {
                write!(f, "Deposited: Rs {} | Balance: Rs {}", amount, balance)
            }
            LedgerEntry::Withdrawal { amount, balance } => {
                write!(f, "Withdrew: Rs {} | Balance: Rs {}", amount, balance)
            }
        }
    }
}
