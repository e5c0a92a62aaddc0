use crate::domain::{Error, LedgerEntry, Money, PinHash};

pub const MAX_PIN_ATTEMPTS: u8 = 3;
pub const STATEMENT_WINDOW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Savings,
    Current { overdraft_limit: Money },
}

impl AccountKind {
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Savings => "Savings",
            AccountKind::Current { .. } => "Current (Overdraft enabled)",
        }
    }

    /// Lowest balance this account may reach: zero for Savings,
    /// -overdraft_limit for Current.
    fn floor(&self) -> Money {
        match self {
            AccountKind::Savings => Money::ZERO,
            AccountKind::Current { overdraft_limit } => Money::ZERO
                .checked_sub(*overdraft_limit)
                .unwrap_or(Money::from_minor(i64::MIN)),
        }
    }
}

/// The one in-memory account of a session. Lock state is monotonic: once
/// three PIN attempts have failed, every later verification fails closed.
#[derive(Debug)]
pub struct Account {
    holder_name: String,
    account_number: String,
    pin_hash: PinHash,
    balance: Money,
    wrong_attempts: u8,
    locked: bool,
    ledger: Vec<LedgerEntry>,
    kind: AccountKind,
}

impl Account {
    pub fn open(
        kind: AccountKind,
        holder_name: String,
        account_number: String,
        pin: &str,
        opening_balance: Money,
    ) -> Self {
        Self {
            holder_name,
            account_number,
            pin_hash: PinHash::digest(pin),
            balance: opening_balance,
            wrong_attempts: 0,
            locked: false,
            ledger: vec![LedgerEntry::Opened {
                balance: opening_balance,
            }],
            kind,
        }
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn remaining_attempts(&self) -> u8 {
        MAX_PIN_ATTEMPTS.saturating_sub(self.wrong_attempts)
    }

    /// Fails closed once locked. A correct PIN resets the wrong-attempt
    /// counter; the third consecutive failure locks the account for good.
    pub fn verify_pin(&mut self, candidate: &str) -> bool {
        if self.locked {
            return false;
        }
        if self.pin_hash.matches(candidate) {
            self.wrong_attempts = 0;
            true
        } else {
            self.wrong_attempts += 1;
            if self.wrong_attempts >= MAX_PIN_ATTEMPTS {
                self.locked = true;
            }
            false
        }
    }

    /// Credits the balance and appends a ledger entry. Returns the new
    /// balance; on any rejection the account is left untouched.
    pub fn deposit(&mut self, amount: Money) -> Result<Money, Error> {
        if self.locked {
            return Err(Error::AccountLocked);
        }
        if !amount.is_positive() {
            return Err(Error::NonPositiveAmount);
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(Error::AmountOutOfRange)?;
        self.ledger.push(LedgerEntry::Deposit {
            amount,
            balance: self.balance,
        });
        Ok(self.balance)
    }

    /// Debits the balance down to the variant floor. Both variants record
    /// the withdrawal in the ledger.
    pub fn withdraw(&mut self, amount: Money) -> Result<Money, Error> {
        if self.locked {
            return Err(Error::AccountLocked);
        }
        if !amount.is_positive() {
            return Err(Error::NonPositiveAmount);
        }
        let new_balance = self
            .balance
            .checked_sub(amount)
            .ok_or(Error::AmountOutOfRange)?;
        if new_balance < self.kind.floor() {
            return Err(match self.kind {
                AccountKind::Savings => Error::InsufficientFunds,
                AccountKind::Current { .. } => Error::OverdraftExceeded,
            });
        }
        self.balance = new_balance;
        self.ledger.push(LedgerEntry::Withdrawal {
            amount,
            balance: self.balance,
        });
        Ok(self.balance)
    }

    /// Last five ledger entries in chronological order, numbered 1-based
    /// against the full ledger.
    pub fn mini_statement(&self) -> impl Iterator<Item = (usize, &LedgerEntry)> {
        let start = self.ledger.len().saturating_sub(STATEMENT_WINDOW);
        self.ledger[start..]
            .iter()
            .enumerate()
            .map(move |(i, entry)| (start + i + 1, entry))
    }
}

#[cfg(test)]
mod tests {
    use super::{Account, AccountKind};
    use crate::domain::{Error, LedgerEntry, Money};

    fn savings(opening_minor: i64) -> Account {
        Account::open(
            AccountKind::Savings,
            "Asha".to_string(),
            "SB12345678".to_string(),
            "1234",
            Money::from_minor(opening_minor),
        )
    }

    fn current(opening_minor: i64, overdraft_minor: i64) -> Account {
        Account::open(
            AccountKind::Current {
                overdraft_limit: Money::from_minor(overdraft_minor),
            },
            "Asha".to_string(),
            "SB12345678".to_string(),
            "1234",
            Money::from_minor(opening_minor),
        )
    }

    #[test]
    fn deposit_adds_and_records() {
        let mut account = savings(500_000);
        let balance = account.deposit(Money::from_minor(10_000)).unwrap();
        assert_eq!(balance, Money::from_minor(510_000));
        let expected = LedgerEntry::Deposit {
            amount: Money::from_minor(10_000),
            balance: Money::from_minor(510_000),
        };
        assert_eq!(account.mini_statement().last(), Some((2, &expected)));
    }

    #[test]
    fn savings_withdrawal_cannot_exceed_balance() {
        let mut account = savings(500_000);
        let err = account.withdraw(Money::from_minor(500_001)).unwrap_err();
        assert!(matches!(err, Error::InsufficientFunds));
        assert_eq!(account.balance(), Money::from_minor(500_000));
        assert_eq!(account.mini_statement().count(), 1); // only the opening entry

        let balance = account.withdraw(Money::from_minor(500_000)).unwrap();
        assert_eq!(balance, Money::ZERO);
    }

    #[test]
    fn current_withdrawal_may_go_negative_down_to_the_limit() {
        let mut account = current(500_000, 100_000);
        let balance = account.withdraw(Money::from_minor(550_000)).unwrap();
        assert_eq!(balance, Money::from_minor(-50_000));

        // One more paisa than the floor allows.
        let err = account.withdraw(Money::from_minor(50_001)).unwrap_err();
        assert!(matches!(err, Error::OverdraftExceeded));
        assert_eq!(account.balance(), Money::from_minor(-50_000));
    }

    #[test]
    fn current_withdrawal_is_recorded_in_the_ledger() {
        let mut account = current(500_000, 100_000);
        account.withdraw(Money::from_minor(20_000)).unwrap();
        let expected = LedgerEntry::Withdrawal {
            amount: Money::from_minor(20_000),
            balance: Money::from_minor(480_000),
        };
        assert_eq!(account.mini_statement().last(), Some((2, &expected)));
    }

    #[test]
    fn non_positive_amounts_change_nothing() {
        let mut account = savings(500_000);
        for amount in [Money::ZERO, Money::from_minor(-100)] {
            assert!(matches!(
                account.deposit(amount),
                Err(Error::NonPositiveAmount)
            ));
            assert!(matches!(
                account.withdraw(amount),
                Err(Error::NonPositiveAmount)
            ));
        }
        assert_eq!(account.balance(), Money::from_minor(500_000));
        assert_eq!(account.mini_statement().count(), 1);
    }

    #[test]
    fn three_wrong_pins_lock_the_account_permanently() {
        let mut account = savings(500_000);
        for _ in 0..3 {
            assert!(!account.verify_pin("0000"));
        }
        assert!(account.is_locked());
        assert_eq!(account.remaining_attempts(), 0);

        // Even the correct PIN fails once locked.
        assert!(!account.verify_pin("1234"));
        assert!(matches!(
            account.deposit(Money::from_minor(100)),
            Err(Error::AccountLocked)
        ));
        assert!(matches!(
            account.withdraw(Money::from_minor(100)),
            Err(Error::AccountLocked)
        ));
    }

    #[test]
    fn correct_pin_resets_the_attempt_counter() {
        let mut account = savings(500_000);
        assert!(!account.verify_pin("0000"));
        assert!(!account.verify_pin("1111"));
        assert!(account.verify_pin("1234"));
        assert!(!account.is_locked());
        assert_eq!(account.remaining_attempts(), 3);

        // The counter starts over, so two more failures do not lock.
        assert!(!account.verify_pin("0000"));
        assert!(!account.verify_pin("0000"));
        assert!(!account.is_locked());
    }

    #[test]
    fn mini_statement_shows_the_last_five_entries() {
        let mut account = savings(500_000);
        // Opening entry plus six deposits: seven events in total.
        for i in 1..=6 {
            account.deposit(Money::from_minor(i * 100)).unwrap();
        }
        let statement: Vec<_> = account.mini_statement().collect();
        assert_eq!(statement.len(), 5);
        // Numbered against the full ledger: entries 3 through 7.
        assert_eq!(statement.first().map(|(n, _)| *n), Some(3));
        assert_eq!(statement.last().map(|(n, _)| *n), Some(7));
        assert_eq!(
            statement.last().map(|(_, e)| **e),
            Some(LedgerEntry::Deposit {
                amount: Money::from_minor(600),
                balance: Money::from_minor(502_100),
            })
        );
    }

    #[test]
    fn deposit_then_withdraw_scenario() {
        let mut account = savings(500_000);
        account.deposit(Money::from_minor(10_000)).unwrap();
        account.withdraw(Money::from_minor(20_000)).unwrap();
        assert_eq!(account.balance(), Money::from_minor(490_000));

        let lines: Vec<String> = account
            .mini_statement()
            .map(|(n, e)| format!("{}. {}", n, e))
            .collect();
        assert_eq!(
            lines,
            vec![
                "1. Account opened | Balance: Rs 5000.00".to_string(),
                "2. Deposited: Rs 100.00 | Balance: Rs 5100.00".to_string(),
                "3. Withdrew: Rs 200.00 | Balance: Rs 4900.00".to_string(),
            ]
        );
    }
}
