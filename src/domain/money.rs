use core::fmt;

/// Amount in minor currency units (paise). Integer arithmetic only,
/// so balances never pick up floating-point rounding error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(i64);

impl Money {
    pub const SCALE: i64 = 100; // 2 decimal places
    pub const ZERO: Money = Money(0);

    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Parses a user-entered amount in major units ("120", "120.5", "-3.25").
    /// At most two fraction digits; anything else is rejected.
    pub fn from_decimal_str(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        let neg = s.starts_with('-');
        let body = s.strip_prefix('-').unwrap_or(s);
        let mut parts = body.split('.');

        let int_part = parts.next()?;
        if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let int_val: i64 = int_part.parse().ok()?;

        let frac_val: i64 = match parts.next() {
            None => 0,
            Some(frac) => {
                if frac.is_empty() || frac.len() > 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                let parsed: i64 = frac.parse().ok()?;
                if frac.len() == 1 { parsed * 10 } else { parsed }
            }
        };
        if parts.next().is_some() {
            return None;
        }

        let minor = int_val.checked_mul(Self::SCALE)?.checked_add(frac_val)?;
        Some(Self(if neg { -minor } else { minor }))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Split on the absolute value and emit a single sign marker, so an
        // overdrawn balance of -150 renders "-1.50" and not "-2.-50".
        let abs = self.0.unsigned_abs();
        let scale = Self::SCALE as u64;
        let int_part = abs / scale;
        let frac_part = abs % scale;
        if self.0 < 0 {
            write!(f, "-{}.{:02}", int_part, frac_part)
        } else {
            write!(f, "{}.{:02}", int_part, frac_part)
        }
    }
}
