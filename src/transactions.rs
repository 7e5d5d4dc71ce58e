//! Transactions

use jiff::Timestamp;
use rust_decimal::Decimal;

/// A recorded customer purchase. Append-only once recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Identifier of the customer who made the purchase.
    pub customer_id: String,

    /// Identifier of the purchased product.
    pub product_id: String,

    /// Units purchased.
    pub quantity: u32,

    /// Pre-rebate total: unit price times quantity at the time of purchase.
    pub total_amount: Decimal,

    /// Rebate applied to the transaction, if any.
    pub rebate_amount: Decimal,

    /// Assigned when the transaction is created.
    pub timestamp: Timestamp,
}

impl Transaction {
    /// Create a transaction stamped with the current time.
    #[must_use]
    pub fn new(
        customer_id: impl Into<String>,
        product_id: impl Into<String>,
        quantity: u32,
        total_amount: Decimal,
        rebate_amount: Decimal,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            product_id: product_id.into(),
            quantity,
            total_amount,
            rebate_amount,
            timestamp: Timestamp::now(),
        }
    }
}

/// The outcome of a purchase attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionResult {
    /// Whether the purchase went through.
    pub success: bool,

    /// Balance left after the purchase; meaningful only on success.
    pub remaining_balance: Decimal,

    /// Why the purchase was rejected, when it was.
    pub error_message: Option<String>,
}

impl TransactionResult {
    /// A settled purchase leaving the given balance.
    #[must_use]
    pub fn settled(remaining_balance: Decimal) -> Self {
        Self {
            success: true,
            remaining_balance,
            error_message: None,
        }
    }

    /// A rejected purchase with the reason it was rejected.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            remaining_balance: Decimal::ZERO,
            error_message: Some(message.into()),
        }
    }
}
