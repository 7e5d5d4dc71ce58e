//! Rebate engine prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    calculators::{
        RebateCalculator, StandardCalculator,
        registry::{CalculatorRegistry, RegistryError},
    },
    customers::Customer,
    fixtures::{Fixture, FixtureError},
    incentives::{IncentiveType, SupportedIncentives},
    products::Product,
    rebates::{CalculationRequest, CalculationResult, Rebate, RebateCalculation},
    services::{rebates::RebateService, transactions::CustomerTransactionService},
    stores::{
        CustomerStore, ProductStore, RebateStore, TransactionStore,
        memory::{
            InMemoryCustomerStore, InMemoryProductStore, InMemoryRebateStore,
            InMemoryTransactionStore,
        },
    },
    transactions::{Transaction, TransactionResult},
};
