use rand::Rng;
use tracing::{debug, info, warn};

use crate::domain::{Account, AccountKind, Console, Error, Money, pin};

/// Every account starts with Rs 5000.00.
pub const OPENING_BALANCE: Money = Money::from_minor(500_000);

/// Fixed overdraft allowance for Current accounts: Rs 1000.00.
pub const OVERDRAFT_LIMIT: Money = Money::from_minor(100_000);

/// One interactive ATM run: create an account, authenticate, then serve
/// the menu until the user exits or the account locks.
pub struct Session<C: Console> {
    console: C,
}

impl<C: Console> Session<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }

    pub fn run(&mut self) -> Result<(), Error> {
        self.console.write_line("===== CREATE ACCOUNT =====")?;

        let holder_name = loop {
            let name = self.console.prompt("Enter Holder Name")?;
            if name.is_empty() {
                self.console.write_line("Name must not be empty.")?;
                continue;
            }
            break name;
        };

        let kind = self.choose_kind()?;
        let account_number = generate_account_number();
        self.console
            .write_line(&format!("Your generated Account Number: {}", account_number))?;
        self.console
            .write_line("Now set your ATM PIN (the PIN is never displayed).")?;

        let chosen_pin = self.create_pin()?;
        let mut account = Account::open(kind, holder_name, account_number, &chosen_pin, OPENING_BALANCE);
        info!(
            account_number = account.account_number(),
            kind = account.kind().label(),
            "account created"
        );

        self.console.write_line("")?;
        self.console.write_line("Account created successfully.")?;
        self.console
            .write_line(&format!("Holder Name : {}", account.holder_name()))?;
        self.console
            .write_line(&format!("Account No  : {}", account.account_number()))?;
        self.console
            .write_line("(PIN stored as a digest and never displayed)")?;

        if self.login(&mut account)? {
            self.menu(&mut account)?;
        }
        Ok(())
    }

    fn choose_kind(&mut self) -> Result<AccountKind, Error> {
        self.console.write_line("Account Type:")?;
        self.console.write_line("1) Savings")?;
        self.console.write_line("2) Current (Overdraft enabled)")?;
        loop {
            let choice = self.console.prompt("Choose")?;
            match choice.as_str() {
                "" | "1" => return Ok(AccountKind::Savings),
                "2" => {
                    return Ok(AccountKind::Current {
                        overdraft_limit: OVERDRAFT_LIMIT,
                    });
                }
                _ => self.console.write_line("Invalid option.")?,
            }
        }
    }

    fn create_pin(&mut self) -> Result<String, Error> {
        loop {
            let first = self.console.prompt_secret("Create 4-digit PIN")?;
            if !pin::is_well_formed(&first) {
                self.console.write_line("PIN must be exactly 4 digits.")?;
                continue;
            }
            let second = self.console.prompt_secret("Confirm PIN")?;
            if first != second {
                self.console.write_line("PIN mismatch. Try again.")?;
                continue;
            }
            return Ok(first);
        }
    }

    /// Returns Ok(true) once authenticated, Ok(false) if the account locks
    /// before a correct PIN is entered.
    fn login(&mut self, account: &mut Account) -> Result<bool, Error> {
        self.console.write_line("")?;
        self.console.write_line("===== ATM LOGIN =====")?;
        loop {
            if account.is_locked() {
                warn!(
                    account_number = account.account_number(),
                    "account locked after too many wrong PIN attempts"
                );
                self.console
                    .write_line("Account LOCKED after 3 wrong PIN attempts.")?;
                return Ok(false);
            }
            let candidate = self.console.prompt_secret("Enter PIN")?;
            if account.verify_pin(&candidate) {
                info!(account_number = account.account_number(), "login successful");
                self.console.write_line("Login successful.")?;
                return Ok(true);
            }
            self.console.write_line(&format!(
                "Wrong PIN. Attempts left: {}",
                account.remaining_attempts()
            ))?;
        }
    }

    fn menu(&mut self, account: &mut Account) -> Result<(), Error> {
        loop {
            self.console.write_line("")?;
            self.console.write_line("===== ATM MENU =====")?;
            self.console.write_line("1) Check Balance")?;
            self.console.write_line("2) Deposit")?;
            self.console.write_line("3) Withdraw")?;
            self.console.write_line("4) Mini Statement")?;
            self.console.write_line("5) Exit")?;

            let choice = self.console.prompt("Choose")?;
            match choice.as_str() {
                "1" => {
                    self.console
                        .write_line(&format!("Account Type: {}", account.kind().label()))?;
                    self.console
                        .write_line(&format!("Balance: Rs {}", account.balance()))?;
                }
                "2" => {
                    if let Some(amount) = self.read_amount("Deposit Amount (Rs)")? {
                        match account.deposit(amount) {
                            Ok(balance) => {
                                debug!(amount = %amount, balance = %balance, "deposit");
                                self.console.write_line(&format!(
                                    "Deposit successful. Balance: Rs {}",
                                    balance
                                ))?;
                            }
                            Err(e) => {
                                self.console.write_line(&format!("Deposit failed: {}.", e))?
                            }
                        }
                    }
                }
                "3" => {
                    if let Some(amount) = self.read_amount("Withdraw Amount (Rs)")? {
                        match account.withdraw(amount) {
                            Ok(balance) => {
                                debug!(amount = %amount, balance = %balance, "withdrawal");
                                self.console.write_line(&format!(
                                    "Withdraw successful. Balance: Rs {}",
                                    balance
                                ))?;
                            }
                            Err(e) => {
                                self.console.write_line(&format!("Withdraw failed: {}.", e))?
                            }
                        }
                    }
                }
                "4" => {
                    self.console.write_line("--- Mini Statement (Last 5) ---")?;
                    let lines: Vec<String> = account
                        .mini_statement()
                        .map(|(n, entry)| format!("{}. {}", n, entry))
                        .collect();
                    for line in lines {
                        self.console.write_line(&line)?;
                    }
                }
                "5" => {
                    info!(account_number = account.account_number(), "session ended");
                    self.console.write_line("Logged out.")?;
                    return Ok(());
                }
                _ => self.console.write_line("Invalid option.")?,
            }
        }
    }

    /// Reads an amount in major units; None means the input was rejected
    /// and the caller should fall back to the menu.
    fn read_amount(&mut self, label: &str) -> Result<Option<Money>, Error> {
        let raw = self.console.prompt(label)?;
        match Money::from_decimal_str(&raw) {
            Some(amount) => Ok(Some(amount)),
            None => {
                self.console.write_line("Invalid amount.")?;
                Ok(None)
            }
        }
    }
}

/// 8 random digits behind a fixed branch prefix. A single-account process
/// never checks uniqueness; a multi-account extension would have to.
pub fn generate_account_number() -> String {
    let number: u32 = rand::thread_rng().gen_range(10_000_000..100_000_000);
    format!("SB{}", number)
}
