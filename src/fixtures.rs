//! Fixtures
//!
//! Sample data sets defined in YAML and loaded into fresh in-memory stores,
//! for demos and tests.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    customers::Customer,
    incentives::{IncentiveType, SupportedIncentives},
    products::Product,
    rebates::Rebate,
    stores::{
        CustomerStore, ProductStore, RebateStore,
        memory::{InMemoryCustomerStore, InMemoryProductStore, InMemoryRebateStore},
    },
};

/// Fixture parsing errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// YAML parsing error.
    #[error("failed to parse fixture YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Incentive name not recognised.
    #[error("unknown incentive type: {0}")]
    UnknownIncentive(String),
}

#[derive(Debug, Deserialize)]
struct CustomerFixture {
    identifier: String,
    name: String,
    balance: Decimal,
}

#[derive(Debug, Deserialize)]
struct ProductFixture {
    identifier: String,
    name: String,
    price: Decimal,
    #[serde(default)]
    supported_incentives: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RebateFixture {
    identifier: String,
    incentive: String,
    #[serde(default)]
    amount: Decimal,
    #[serde(default)]
    percentage: Decimal,
}

#[derive(Debug, Default, Deserialize)]
struct FixtureSet {
    #[serde(default)]
    customers: Vec<CustomerFixture>,
    #[serde(default)]
    products: Vec<ProductFixture>,
    #[serde(default)]
    rebates: Vec<RebateFixture>,
}

/// A sample data set loaded into fresh in-memory stores.
#[derive(Debug, Default)]
pub struct Fixture {
    /// Seeded customer store.
    pub customers: InMemoryCustomerStore,

    /// Seeded product store.
    pub products: InMemoryProductStore,

    /// Seeded rebate store.
    pub rebates: InMemoryRebateStore,
}

impl Fixture {
    /// Parse a fixture set from YAML and seed in-memory stores with it.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the YAML is malformed or names an
    /// unknown incentive type.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        let set: FixtureSet = serde_norway::from_str(yaml)?;
        let mut fixture = Self::default();

        for customer in set.customers {
            fixture.customers.add(Customer {
                identifier: customer.identifier,
                name: customer.name,
                balance: customer.balance,
            });
        }

        for product in set.products {
            let mut supported = SupportedIncentives::none();
            for name in &product.supported_incentives {
                supported |= parse_incentive(name)?;
            }

            fixture.products.add(Product {
                identifier: product.identifier,
                name: product.name,
                price: product.price,
                supported_incentives: supported,
            });
        }

        for rebate in set.rebates {
            fixture.rebates.add(Rebate {
                identifier: rebate.identifier,
                incentive: parse_incentive(&rebate.incentive)?,
                amount: rebate.amount,
                percentage: Percentage::from(rebate.percentage),
            });
        }

        Ok(fixture)
    }
}

fn parse_incentive(name: &str) -> Result<IncentiveType, FixtureError> {
    match name {
        "fixed_cash_amount" => Ok(IncentiveType::FixedCashAmount),
        "fixed_rate_rebate" => Ok(IncentiveType::FixedRateRebate),
        "amount_per_uom" => Ok(IncentiveType::AmountPerUom),
        other => Err(FixtureError::UnknownIncentive(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_fixture_set() -> Result<(), FixtureError> {
        let fixture = Fixture::from_yaml(
            "
customers:
  - identifier: Cust001
    name: John Doe
    balance: 1000

products:
  - identifier: Prod001
    name: Laptop
    price: 200
    supported_incentives: [fixed_cash_amount, amount_per_uom]

rebates:
  - identifier: Reb001
    incentive: fixed_cash_amount
    amount: 20
",
        )?;

        assert_eq!(
            fixture.customers.get("Cust001").map(|c| c.balance),
            Some(Decimal::from(1000)),
        );
        assert_eq!(
            fixture.products.get("Prod001").map(|p| p.price),
            Some(Decimal::from(200)),
        );
        assert_eq!(
            fixture
                .products
                .get("Prod001")
                .map(|p| p.supported_incentives),
            Some(IncentiveType::FixedCashAmount | IncentiveType::AmountPerUom),
        );
        assert_eq!(
            fixture.rebates.get("Reb001").map(|r| r.amount),
            Some(Decimal::from(20)),
        );

        Ok(())
    }

    #[test]
    fn unknown_incentive_names_are_rejected() {
        let outcome = Fixture::from_yaml(
            "
rebates:
  - identifier: Reb001
    incentive: loyalty_points
",
        );

        assert!(
            matches!(outcome, Err(FixtureError::UnknownIncentive(name)) if name == "loyalty_points"),
            "unknown incentive must be rejected"
        );
    }

    #[test]
    fn malformed_yaml_is_reported_as_a_parse_error() {
        let outcome = Fixture::from_yaml("customers: [unterminated");

        assert!(
            matches!(outcome, Err(FixtureError::Yaml(_))),
            "malformed YAML must surface as a parse error"
        );
    }

    #[test]
    fn empty_documents_yield_empty_stores() -> Result<(), FixtureError> {
        let fixture = Fixture::from_yaml("{}")?;

        assert!(fixture.products.products().is_empty(), "no products expected");
        assert!(fixture.rebates.rebates().is_empty(), "no rebates expected");

        Ok(())
    }
}
