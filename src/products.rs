//! Products

use rust_decimal::Decimal;

use crate::incentives::SupportedIncentives;

/// A product available for purchase and, optionally, rebates.
#[derive(Debug, Clone)]
pub struct Product {
    /// Unique identifier for the product.
    pub identifier: String,

    /// Display name.
    pub name: String,

    /// Unit price. Never negative.
    pub price: Decimal,

    /// The incentive types this product accepts.
    pub supported_incentives: SupportedIncentives,
}
