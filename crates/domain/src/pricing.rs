//! Pricing policies for event tickets.
//!
//! A closed set of variants behind one capability: [`PricingPolicy::calculate_price`].
//! Policies are immutable value objects, constructed once per pricing rule
//! and queried per purchase attempt.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::PricingError;
use crate::money::Money;

/// A ticket pricing rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum PricingPolicy {
    /// Flat per-unit price.
    Standard { base_price: Money },
    /// Percentage discount strictly before the cutoff instant. The cutoff
    /// itself and anything later pays full price.
    EarlyBird {
        base_price: Money,
        cutoff_date: DateTime<Utc>,
        discount_percent: Decimal,
    },
    /// Percentage discount once the booked quantity reaches the group
    /// threshold.
    GroupDiscount {
        base_price: Money,
        min_group_size: u32,
        discount_percent: Decimal,
    },
}

impl PricingPolicy {
    /// Flat pricing at `base_price` per unit.
    pub fn standard(base_price: Money) -> Result<Self, PricingError> {
        validate_base_price(&base_price)?;
        Ok(Self::Standard { base_price })
    }

    /// Early-bird pricing: `discount_percent` off per unit strictly before
    /// `cutoff_date`.
    pub fn early_bird(
        base_price: Money,
        cutoff_date: DateTime<Utc>,
        discount_percent: Decimal,
    ) -> Result<Self, PricingError> {
        validate_base_price(&base_price)?;
        validate_percent(discount_percent)?;
        Ok(Self::EarlyBird {
            base_price,
            cutoff_date,
            discount_percent,
        })
    }

    /// Group pricing: `discount_percent` off per unit for bookings of at
    /// least `min_group_size`.
    pub fn group_discount(
        base_price: Money,
        min_group_size: u32,
        discount_percent: Decimal,
    ) -> Result<Self, PricingError> {
        validate_base_price(&base_price)?;
        validate_percent(discount_percent)?;
        if min_group_size <= 1 {
            return Err(PricingError::GroupSizeTooSmall);
        }
        Ok(Self::GroupDiscount {
            base_price,
            min_group_size,
            discount_percent,
        })
    }

    /// The configured per-unit base price.
    pub fn base_price(&self) -> &Money {
        match self {
            Self::Standard { base_price }
            | Self::EarlyBird { base_price, .. }
            | Self::GroupDiscount { base_price, .. } => base_price,
        }
    }

    /// Total price for `quantity` units as of `as_of`, in the base price's
    /// currency.
    pub fn calculate_price(
        &self,
        quantity: u32,
        as_of: DateTime<Utc>,
    ) -> Result<Money, PricingError> {
        if quantity == 0 {
            return Err(PricingError::NonPositiveQuantity);
        }

        let unit = match self {
            Self::Standard { base_price } => *base_price,
            Self::EarlyBird {
                base_price,
                cutoff_date,
                discount_percent,
            } => {
                if as_of < *cutoff_date {
                    base_price.discounted_by(*discount_percent)
                } else {
                    *base_price
                }
            }
            Self::GroupDiscount {
                base_price,
                min_group_size,
                discount_percent,
            } => {
                if quantity >= *min_group_size {
                    base_price.discounted_by(*discount_percent)
                } else {
                    *base_price
                }
            }
        };

        Ok(unit.times(quantity))
    }
}

fn validate_base_price(base_price: &Money) -> Result<(), PricingError> {
    if !base_price.is_positive() {
        return Err(PricingError::NonPositiveBasePrice);
    }
    Ok(())
}

fn validate_percent(percent: Decimal) -> Result<(), PricingError> {
    if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
        return Err(PricingError::DiscountOutOfRange);
    }
    Ok(())
}
