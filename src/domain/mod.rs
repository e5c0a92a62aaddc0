pub mod account;
pub mod error;
pub mod ledger;
pub mod money;
pub mod pin;
pub mod traits;

pub use account::{Account, AccountKind, MAX_PIN_ATTEMPTS, STATEMENT_WINDOW};
pub use error::Error;
pub use ledger::LedgerEntry;
pub use money::Money;
pub use pin::PinHash;
pub use traits::Console;
