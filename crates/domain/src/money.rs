//! Monetary value types shared by the pricing policies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Supported settlement currencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Inr,
    Ngn,
    Kes,
    Brl,
}

impl Currency {
    /// ISO 4217 code for this currency
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Inr => "INR",
            Self::Ngn => "NGN",
            Self::Kes => "KES",
            Self::Brl => "BRL",
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// An immutable amount-plus-currency value.
///
/// Arithmetic returns new values; the currency of the left operand is
/// preserved. Cross-currency math is not validated here; callers are
/// expected to supply consistent inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Multiply the amount by a whole quantity.
    pub fn times(&self, quantity: u32) -> Money {
        Money::new(self.amount * Decimal::from(quantity), self.currency)
    }

    /// Apply a percentage reduction: `amount * (1 - percent/100)`.
    ///
    /// `percent` is expected to already be validated into [0, 100] by the
    /// policy constructors.
    pub fn discounted_by(&self, percent: Decimal) -> Money {
        let factor = Decimal::ONE - percent / Decimal::ONE_HUNDRED;
        Money::new(self.amount * factor, self.currency)
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
