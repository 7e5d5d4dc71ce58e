//! Collaborator data stores
//!
//! The services only depend on these contracts; the in-memory
//! implementations live in [`memory`]. Lookups key on string identifiers,
//! additions upsert silently, and the append-only stores preserve insertion
//! order. None of the operations can fail.

use crate::{
    customers::Customer,
    products::Product,
    rebates::{Rebate, RebateCalculation},
    transactions::Transaction,
};

pub mod memory;

/// Customer lookup and persistence.
pub trait CustomerStore {
    /// Fetch a customer by identifier.
    fn get(&self, customer_id: &str) -> Option<&Customer>;

    /// Insert a customer, replacing any existing entry with the same
    /// identifier.
    fn add(&mut self, customer: Customer);

    /// Persist a customer's updated balance, keyed by identifier.
    fn update_balance(&mut self, customer: Customer);
}

/// Product lookup and persistence.
pub trait ProductStore {
    /// Fetch a product by identifier.
    fn get(&self, product_identifier: &str) -> Option<&Product>;

    /// Insert a product, replacing any existing entry with the same
    /// identifier.
    fn add(&mut self, product: Product);
}

/// Rebate lookup, persistence and the calculation audit trail.
pub trait RebateStore {
    /// Fetch a rebate by identifier.
    fn get(&self, rebate_identifier: &str) -> Option<&Rebate>;

    /// Insert a rebate, replacing any existing entry with the same
    /// identifier.
    fn add(&mut self, rebate: Rebate);

    /// Append an audit record for a successful calculation.
    fn store_calculation(&mut self, calculation: RebateCalculation);
}

/// Append-only transaction history.
pub trait TransactionStore {
    /// Append a transaction.
    fn record(&mut self, transaction: Transaction);

    /// All transactions for the customer, in the order recorded. Empty if
    /// the customer has none.
    fn by_customer(&self, customer_id: &str) -> Vec<Transaction>;
}
