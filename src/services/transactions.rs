//! Customer transaction service

use std::fmt;

use rust_decimal::Decimal;

use crate::{
    stores::{CustomerStore, ProductStore, TransactionStore},
    transactions::{Transaction, TransactionResult},
};

/// Orchestrates purchases: lookups, validation, balance deduction and
/// transaction recording.
pub struct CustomerTransactionService<'a> {
    customers: &'a mut dyn CustomerStore,
    products: &'a dyn ProductStore,
    transactions: &'a mut dyn TransactionStore,
}

impl fmt::Debug for CustomerTransactionService<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomerTransactionService")
            .finish_non_exhaustive()
    }
}

impl<'a> CustomerTransactionService<'a> {
    /// Create a service over the given stores.
    #[must_use]
    pub fn new(
        customers: &'a mut dyn CustomerStore,
        products: &'a dyn ProductStore,
        transactions: &'a mut dyn TransactionStore,
    ) -> Self {
        Self {
            customers,
            products,
            transactions,
        }
    }

    /// Process a purchase: validate, deduct the total cost from the
    /// customer's balance and record the transaction.
    ///
    /// Validation short-circuits at the first failure and leaves every store
    /// untouched; only a successful purchase mutates state. The recorded
    /// transaction carries no rebate amount; rebate integration, where
    /// wanted, happens outside this workflow. The balance update is an
    /// unguarded read-modify-write, so callers sharing stores across
    /// threads need their own locking.
    pub fn process_purchase(
        &mut self,
        customer_id: &str,
        product_id: &str,
        quantity: u32,
    ) -> TransactionResult {
        let Some(mut customer) = self.customers.get(customer_id).cloned() else {
            return TransactionResult::rejected("Customer not found.");
        };

        let Some(product) = self.products.get(product_id) else {
            return TransactionResult::rejected("Product not found.");
        };

        if quantity == 0 {
            return TransactionResult::rejected("Invalid quantity.");
        }

        let total_cost = product.price * Decimal::from(quantity);
        if customer.balance < total_cost {
            return TransactionResult::rejected("Insufficient balance.");
        }

        customer.balance -= total_cost;
        let remaining_balance = customer.balance;
        self.customers.update_balance(customer);

        self.transactions.record(Transaction::new(
            customer_id,
            product_id,
            quantity,
            total_cost,
            Decimal::ZERO,
        ));

        TransactionResult::settled(remaining_balance)
    }

    /// Every transaction recorded for the customer, in the order recorded.
    #[must_use]
    pub fn transaction_history(&self, customer_id: &str) -> Vec<Transaction> {
        self.transactions.by_customer(customer_id)
    }
}
