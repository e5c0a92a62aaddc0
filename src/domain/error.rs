#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("account is locked")]
    AccountLocked,

    #[error("amount must be greater than zero")]
    NonPositiveAmount,

    #[error("insufficient balance")]
    InsufficientFunds,

    #[error("withdrawal exceeds the overdraft limit")]
    OverdraftExceeded,

    #[error("amount is out of range")]
    AmountOutOfRange,
}
