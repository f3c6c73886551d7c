use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const SCALE: i64 = 10_000;

/// Monetary value as entered by the user or held in an account.
/// Backed by an i64 with four places past the decimal so that balances
/// never accumulate floating point rounding error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount {
    store: i64,
}

#[derive(Error, Debug, Clone)]
pub enum AmountError {
    #[error("Amount parsing error: {0}")]
    Parse(String),

    #[error("Overflow error while computing Amount")]
    Overflow,

    #[error("Underflow error while computing Amount")]
    Underflow,
}

impl Amount {
    /// Amount from a whole number of currency units, for policy constants.
    pub const fn from_whole(units: i64) -> Self {
        Amount {
            store: units * SCALE,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.store > 0
    }

    pub fn add(&self, other: &Amount) -> Result<Amount, AmountError> {
        self.store
            .checked_add(other.store)
            .map(|store| Amount { store })
            .ok_or(AmountError::Overflow)
    }

    pub fn sub(&self, other: &Amount) -> Result<Amount, AmountError> {
        self.store
            .checked_sub(other.store)
            .map(|store| Amount { store })
            .ok_or(AmountError::Underflow)
    }

    /// Interest earned on this amount at a fixed rate given in basis
    /// points (100 bps = 1%). Truncates toward zero.
    pub fn interest_at(&self, rate_bps: i64) -> Result<Amount, AmountError> {
        self.store
            .checked_mul(rate_bps)
            .map(|scaled| Amount {
                store: scaled / SCALE,
            })
            .ok_or(AmountError::Overflow)
    }

    // Whole units and fractional part of the absolute value.
    fn split_abs(&self) -> (i64, i64) {
        let abs = self.store.abs();
        (abs / SCALE, abs % SCALE)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        if digits.is_empty() {
            Err(AmountError::Parse(s.into()))?
        }

        let (whole_str, frac_str) = match digits.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (digits, ""),
        };

        // Integer part may be empty (ex: ".05")
        let whole_str = if whole_str.is_empty() { "0" } else { whole_str };

        let units: i64 = whole_str
            .parse()
            .map_err(|_| AmountError::Parse(s.into()))?;
        let whole = match units.checked_mul(SCALE) {
            Some(v) => v,
            None => Err(AmountError::Overflow)?,
        };

        if !frac_str.chars().all(|c| c.is_ascii_digit()) {
            Err(AmountError::Parse(s.into()))?
        }

        // Four digits of precision; anything past that is truncated
        let mut frac_digits = frac_str.to_owned();
        frac_digits.truncate(4);
        while frac_digits.len() < 4 {
            frac_digits.push('0');
        }
        let frac: i64 = frac_digits
            .parse()
            .map_err(|_| AmountError::Parse(s.into()))?;

        let total = match whole.checked_add(frac) {
            Some(v) => v,
            None => Err(AmountError::Overflow)?,
        };

        let store = if negative { -total } else { total };
        Ok(Amount { store })
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.store < 0 { "-" } else { "" };
        let (whole, frac) = self.split_abs();
        write!(f, "{sign}{whole}.{frac:04}")
    }
}
