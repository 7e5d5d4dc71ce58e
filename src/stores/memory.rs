//! In-memory stores
//!
//! Simple map- and vec-backed implementations of the store contracts. State
//! lives with whoever owns the store value; there are no module-level
//! singletons and no interior locking, so sharing a store across threads
//! needs external synchronisation.

use rustc_hash::FxHashMap;

use crate::{
    customers::Customer,
    products::Product,
    rebates::{Rebate, RebateCalculation},
    stores::{CustomerStore, ProductStore, RebateStore, TransactionStore},
    transactions::Transaction,
};

/// In-memory customer store keyed by customer identifier.
#[derive(Debug, Default)]
pub struct InMemoryCustomerStore {
    customers: FxHashMap<String, Customer>,
}

impl InMemoryCustomerStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CustomerStore for InMemoryCustomerStore {
    fn get(&self, customer_id: &str) -> Option<&Customer> {
        self.customers.get(customer_id)
    }

    fn add(&mut self, customer: Customer) {
        self.customers.insert(customer.identifier.clone(), customer);
    }

    fn update_balance(&mut self, customer: Customer) {
        self.customers.insert(customer.identifier.clone(), customer);
    }
}

/// In-memory product store keyed by product identifier.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: FxHashMap<String, Product>,
}

impl InMemoryProductStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All products, sorted by identifier for stable listing.
    #[must_use]
    pub fn products(&self) -> Vec<&Product> {
        let mut products: Vec<&Product> = self.products.values().collect();
        products.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        products
    }
}

impl ProductStore for InMemoryProductStore {
    fn get(&self, product_identifier: &str) -> Option<&Product> {
        self.products.get(product_identifier)
    }

    fn add(&mut self, product: Product) {
        self.products.insert(product.identifier.clone(), product);
    }
}

/// In-memory rebate store keyed by rebate identifier, with an append-only
/// list of calculation audit records.
#[derive(Debug, Default)]
pub struct InMemoryRebateStore {
    rebates: FxHashMap<String, Rebate>,
    calculations: Vec<RebateCalculation>,
}

impl InMemoryRebateStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All rebates, sorted by identifier for stable listing.
    #[must_use]
    pub fn rebates(&self) -> Vec<&Rebate> {
        let mut rebates: Vec<&Rebate> = self.rebates.values().collect();
        rebates.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        rebates
    }

    /// The calculation audit trail, in the order recorded.
    #[must_use]
    pub fn calculations(&self) -> &[RebateCalculation] {
        &self.calculations
    }
}

impl RebateStore for InMemoryRebateStore {
    fn get(&self, rebate_identifier: &str) -> Option<&Rebate> {
        self.rebates.get(rebate_identifier)
    }

    fn add(&mut self, rebate: Rebate) {
        self.rebates.insert(rebate.identifier.clone(), rebate);
    }

    fn store_calculation(&mut self, calculation: RebateCalculation) {
        self.calculations.push(calculation);
    }
}

/// In-memory append-only transaction store.
#[derive(Debug, Default)]
pub struct InMemoryTransactionStore {
    transactions: Vec<Transaction>,
}

impl InMemoryTransactionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransactionStore for InMemoryTransactionStore {
    fn record(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    fn by_customer(&self, customer_id: &str) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|transaction| transaction.customer_id == customer_id)
            .cloned()
            .collect()
    }
}
