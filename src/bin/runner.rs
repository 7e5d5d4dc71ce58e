//! Interactive console for exploring the rebate engine.
//!
//! Seeds the demo fixture set and offers a small menu: buy a product (with
//! the applicable rebate computed alongside the purchase), list what was
//! bought, and top up the balance.

#![expect(
    clippy::print_stdout,
    reason = "interactive console talks over stdout"
)]

use std::io::{self, BufRead, Write};

use clap::Parser;
use rust_decimal::Decimal;
use tabled::{Table, Tabled};

use rebate_engine::prelude::*;

const DEMO_FIXTURE_YAML: &str = include_str!("../../fixtures/demo.yml");

/// Arguments for the interactive runner.
#[derive(Debug, Parser)]
struct RunnerArgs {
    /// Customer to act as
    #[clap(short, long, default_value = "Cust001")]
    customer: String,
}

/// Purchases made during this session, with running totals.
#[derive(Debug, Default)]
struct PurchaseLog {
    transactions: Vec<Transaction>,
    total_purchased: Decimal,
    total_rebate: Decimal,
}

type Lines = io::Lines<io::StdinLock<'static>>;

fn main() -> anyhow::Result<()> {
    let args = RunnerArgs::parse();
    let mut fixture = Fixture::from_yaml(DEMO_FIXTURE_YAML)?;
    let registry = CalculatorRegistry::standard();

    let mut lines = io::stdin().lock().lines();
    let mut log = PurchaseLog::default();

    loop {
        let Some(customer) = fixture.customers.get(&args.customer).cloned() else {
            println!("Customer not found.");
            return Ok(());
        };

        println!("\n--- Customer: {}, Balance: {} ---", customer.name, customer.balance);
        println!("\n--- Main Menu ---");
        println!("1. Buy a product");
        println!("2. List purchased products");
        println!("3. Add balance");
        println!("4. Exit");

        let Some(option) = prompt(&mut lines, "Select an option: ")? else {
            break;
        };

        match option.trim() {
            "1" => buy_product(&args.customer, &mut fixture, &registry, &mut lines, &mut log)?,
            "2" => list_purchases(&log),
            "3" => add_balance(&args.customer, &mut fixture.customers, &mut lines)?,
            "4" => {
                println!("Exiting...");
                break;
            }
            _ => println!("Invalid option. Please try again."),
        }
    }

    Ok(())
}

fn prompt(lines: &mut Lines, message: &str) -> io::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    lines.next().transpose()
}

fn buy_product(
    customer_id: &str,
    fixture: &mut Fixture,
    registry: &CalculatorRegistry,
    lines: &mut Lines,
    log: &mut PurchaseLog,
) -> anyhow::Result<()> {
    let products: Vec<Product> = fixture.products.products().into_iter().cloned().collect();

    println!("\n--- Products ---");
    for (index, product) in products.iter().enumerate() {
        println!("{}. {} ({})", index + 1, product.name, product.price);
    }

    let Some(selection) = prompt(lines, "Select a product to buy: ")? else {
        return Ok(());
    };
    let Some(product) = selection
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|index| index.checked_sub(1))
        .and_then(|index| products.get(index))
    else {
        println!("Invalid product selection.");
        return Ok(());
    };

    let Some(quantity) = prompt(lines, "Enter quantity: ")? else {
        return Ok(());
    };
    let Ok(quantity) = quantity.trim().parse::<u32>() else {
        println!("Invalid quantity.");
        return Ok(());
    };

    let rebate_amount = rebate_for(fixture, registry, product, quantity)?;

    let total_cost_before_rebate = product.price * Decimal::from(quantity);
    let total_cost = (total_cost_before_rebate - rebate_amount).max(Decimal::ZERO);

    let Some(mut customer) = fixture.customers.get(customer_id).cloned() else {
        println!("Customer not found.");
        return Ok(());
    };

    if customer.balance < total_cost {
        println!(
            "Purchase failed. Insufficient balance. Total cost: {total_cost}, Current balance: {}",
            customer.balance
        );
        return Ok(());
    }

    customer.balance -= total_cost;
    let remaining_balance = customer.balance;
    fixture.customers.update_balance(customer);

    log.transactions.push(Transaction::new(
        customer_id,
        product.identifier.clone(),
        quantity,
        total_cost_before_rebate,
        rebate_amount,
    ));
    log.total_purchased += total_cost_before_rebate;
    log.total_rebate += rebate_amount;

    println!("Purchase successful. Remaining balance: {remaining_balance}");
    println!("Rebate for this purchase: {rebate_amount}");
    println!("Total cost after rebate: {total_cost}");

    Ok(())
}

/// Rebate integration happens here, outside the purchase workflow: pick a
/// rebate the product supports, compute it, and let the caller apply it to
/// the cost. A failed calculation simply means no rebate.
fn rebate_for(
    fixture: &mut Fixture,
    registry: &CalculatorRegistry,
    product: &Product,
    quantity: u32,
) -> Result<Decimal, RegistryError> {
    let Some(rebate_identifier) = fixture
        .rebates
        .rebates()
        .iter()
        .find(|rebate| product.supported_incentives.contains(rebate.incentive))
        .map(|rebate| rebate.identifier.clone())
    else {
        return Ok(Decimal::ZERO);
    };

    let request = CalculationRequest {
        rebate_identifier,
        product_identifier: product.identifier.clone(),
        volume: Decimal::from(quantity),
    };
    let mut rebate_service = RebateService::new(&mut fixture.rebates, &fixture.products, registry);
    let result = rebate_service.calculate(&request)?;

    if result.success {
        Ok(result.rebate_amount)
    } else {
        Ok(Decimal::ZERO)
    }
}

#[derive(Tabled)]
struct PurchaseRow {
    #[tabled(rename = "Product")]
    product: String,
    #[tabled(rename = "Quantity")]
    quantity: u32,
    #[tabled(rename = "Total")]
    total: Decimal,
    #[tabled(rename = "Rebate")]
    rebate: Decimal,
}

fn list_purchases(log: &PurchaseLog) {
    println!("\n--- Purchased Products ---");
    if log.transactions.is_empty() {
        println!("No products purchased yet.");
        return;
    }

    let rows = log.transactions.iter().map(|transaction| PurchaseRow {
        product: transaction.product_id.clone(),
        quantity: transaction.quantity,
        total: transaction.total_amount,
        rebate: transaction.rebate_amount,
    });
    println!("{}", Table::new(rows));

    println!("\nTotal Purchased: {}", log.total_purchased);
    println!("Total Rebate: {}", log.total_rebate);
}

fn add_balance(
    customer_id: &str,
    customers: &mut InMemoryCustomerStore,
    lines: &mut Lines,
) -> io::Result<()> {
    let Some(mut customer) = customers.get(customer_id).cloned() else {
        println!("Customer not found.");
        return Ok(());
    };

    let Some(amount) = prompt(lines, "Enter amount to add: ")? else {
        return Ok(());
    };
    let Ok(amount) = amount.trim().parse::<Decimal>() else {
        println!("Invalid amount.");
        return Ok(());
    };
    if amount <= Decimal::ZERO {
        println!("Invalid amount.");
        return Ok(());
    }

    customer.balance += amount;
    let new_balance = customer.balance;
    customers.update_balance(customer);

    println!("Balance updated. New balance: {new_balance}");

    Ok(())
}
