//! Customers

use rust_decimal::Decimal;

/// A customer with a spendable balance.
#[derive(Debug, Clone)]
pub struct Customer {
    /// Unique identifier for the customer.
    pub identifier: String,

    /// Display name.
    pub name: String,

    /// Current balance. Purchases are rejected up front rather than ever
    /// driving this negative; top-ups raise it.
    pub balance: Decimal,
}
