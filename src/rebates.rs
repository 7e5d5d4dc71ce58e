//! Rebates

use decimal_percentage::Percentage;
use rust_decimal::Decimal;

use crate::incentives::IncentiveType;

/// A rebate definition. Immutable once fetched for a calculation.
#[derive(Debug, Clone)]
pub struct Rebate {
    /// Unique identifier for the rebate.
    pub identifier: String,

    /// The calculation strategy for this rebate.
    pub incentive: IncentiveType,

    /// Fixed amount, used by `FixedCashAmount` and `AmountPerUom`.
    pub amount: Decimal,

    /// Price multiplier, used by `FixedRateRebate` (`0.10` is 10%).
    pub percentage: Percentage,
}

/// A request to calculate the rebate for a product volume.
#[derive(Debug, Clone)]
pub struct CalculationRequest {
    /// Identifier of the rebate to apply.
    pub rebate_identifier: String,

    /// Identifier of the product under consideration.
    pub product_identifier: String,

    /// Volume of product under consideration. Expected to be non-negative,
    /// but not required to be integral.
    pub volume: Decimal,
}

/// The outcome of a rebate calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    /// Whether the calculation produced a positive rebate.
    pub success: bool,

    /// The calculated amount; zero when unsuccessful.
    pub rebate_amount: Decimal,

    /// Failure detail. Set only for invalid lookups; an unsupported
    /// incentive/product combination carries no message.
    pub error_message: Option<String>,
}

impl CalculationResult {
    /// Build a result from a computed amount.
    ///
    /// Success means the amount is strictly positive, so a correctly
    /// computed zero rebate reads as a failure with no message.
    #[must_use]
    pub fn from_amount(amount: Decimal) -> Self {
        Self {
            success: amount > Decimal::ZERO,
            rebate_amount: amount,
            error_message: None,
        }
    }

    /// A failed calculation carrying no message.
    #[must_use]
    pub fn failure() -> Self {
        Self {
            success: false,
            rebate_amount: Decimal::ZERO,
            error_message: None,
        }
    }

    /// A failed calculation carrying a message.
    #[must_use]
    pub fn failure_with_message(message: impl Into<String>) -> Self {
        Self {
            success: false,
            rebate_amount: Decimal::ZERO,
            error_message: Some(message.into()),
        }
    }
}

/// Audit record persisted after a successful rebate calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct RebateCalculation {
    /// Identifier of the rebate that was applied.
    pub rebate_identifier: String,

    /// Identifier of the product the rebate was applied to.
    pub product_identifier: String,

    /// The amount that was calculated.
    pub rebate_amount: Decimal,
}
