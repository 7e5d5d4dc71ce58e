//! Rebate service integration tests.
//!
//! Wires real in-memory stores and the standard calculator registry through
//! the service, checking the lookup failure messages, the dispatch, and the
//! audit-record persistence rule: a record is stored if and only if the
//! calculation succeeds.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use testresult::TestResult;

use rebate_engine::prelude::*;

fn seeded_stores() -> (InMemoryRebateStore, InMemoryProductStore) {
    let mut rebates = InMemoryRebateStore::new();
    rebates.add(Rebate {
        identifier: "Reb001".to_string(),
        incentive: IncentiveType::FixedCashAmount,
        amount: Decimal::from(100),
        percentage: Percentage::from(Decimal::ZERO),
    });

    let mut products = InMemoryProductStore::new();
    products.add(Product {
        identifier: "Prod001".to_string(),
        name: "Laptop".to_string(),
        price: Decimal::from(200),
        supported_incentives: IncentiveType::FixedCashAmount.into(),
    });

    (rebates, products)
}

fn request(rebate: &str, product: &str) -> CalculationRequest {
    CalculationRequest {
        rebate_identifier: rebate.to_string(),
        product_identifier: product.to_string(),
        volume: Decimal::from(5),
    }
}

#[test]
fn successful_calculation_persists_an_audit_record() -> TestResult {
    let (mut rebates, products) = seeded_stores();
    let registry = CalculatorRegistry::standard();

    let mut service = RebateService::new(&mut rebates, &products, &registry);
    let result = service.calculate(&request("Reb001", "Prod001"))?;

    assert!(result.success, "calculation must succeed");
    assert_eq!(result.rebate_amount, Decimal::from(100));

    let recorded: Vec<(String, String, Decimal)> = rebates
        .calculations()
        .iter()
        .map(|calculation| {
            (
                calculation.rebate_identifier.clone(),
                calculation.product_identifier.clone(),
                calculation.rebate_amount,
            )
        })
        .collect();
    assert_eq!(
        recorded,
        vec![(
            "Reb001".to_string(),
            "Prod001".to_string(),
            Decimal::from(100)
        )],
    );

    Ok(())
}

#[test]
fn failed_calculation_persists_nothing() -> TestResult {
    let (mut rebates, mut products) = seeded_stores();
    products.add(Product {
        identifier: "Prod001".to_string(),
        name: "Laptop".to_string(),
        price: Decimal::from(200),
        supported_incentives: SupportedIncentives::none(),
    });
    let registry = CalculatorRegistry::standard();

    let mut service = RebateService::new(&mut rebates, &products, &registry);
    let result = service.calculate(&request("Reb001", "Prod001"))?;

    assert!(!result.success, "unsupported incentive must fail");
    assert_eq!(result.rebate_amount, Decimal::ZERO);
    assert_eq!(result.error_message, None);
    assert!(
        rebates.calculations().is_empty(),
        "no audit record may be stored on failure"
    );

    Ok(())
}

#[test]
fn unknown_rebate_fails_without_invoking_the_calculator() -> TestResult {
    let (mut rebates, products) = seeded_stores();
    // An empty registry would turn any dispatch into a hard error, so a
    // clean business failure here proves the calculator was never consulted.
    let registry = CalculatorRegistry::empty();

    let mut service = RebateService::new(&mut rebates, &products, &registry);
    let result = service.calculate(&request("Missing", "Prod001"))?;

    assert!(!result.success, "unknown rebate must fail");
    assert_eq!(
        result.error_message.as_deref(),
        Some("Invalid rebate or product."),
    );

    Ok(())
}

#[test]
fn unknown_product_fails_without_invoking_the_calculator() -> TestResult {
    let (mut rebates, products) = seeded_stores();
    let registry = CalculatorRegistry::empty();

    let mut service = RebateService::new(&mut rebates, &products, &registry);
    let result = service.calculate(&request("Reb001", "Missing"))?;

    assert!(!result.success, "unknown product must fail");
    assert_eq!(
        result.error_message.as_deref(),
        Some("Invalid rebate or product."),
    );

    Ok(())
}

#[test]
fn unregistered_incentive_type_propagates_as_a_hard_error() {
    let (mut rebates, products) = seeded_stores();
    let registry = CalculatorRegistry::empty();

    let mut service = RebateService::new(&mut rebates, &products, &registry);
    let outcome = service.calculate(&request("Reb001", "Prod001"));

    assert_eq!(
        outcome.err(),
        Some(RegistryError::Unregistered(IncentiveType::FixedCashAmount)),
    );
    assert!(
        rebates.calculations().is_empty(),
        "no audit record may be stored on a wiring error"
    );
}

#[test]
fn demo_fixture_supports_both_shipped_rebates() -> TestResult {
    let mut fixture = Fixture::from_yaml(include_str!("../fixtures/demo.yml"))?;
    let registry = CalculatorRegistry::standard();

    let mut service = RebateService::new(&mut fixture.rebates, &fixture.products, &registry);

    // Reb001 pays a fixed 20 on the laptop.
    let fixed_cash = service.calculate(&request("Reb001", "Prod001"))?;
    assert!(fixed_cash.success, "fixed cash rebate must succeed");
    assert_eq!(fixed_cash.rebate_amount, Decimal::from(20));

    // Reb002 pays 10% of the smartphone price, scaled by volume 5.
    let fixed_rate = service.calculate(&request("Reb002", "Prod002"))?;
    assert!(fixed_rate.success, "fixed rate rebate must succeed");
    assert_eq!(fixed_rate.rebate_amount, Decimal::from(50));

    Ok(())
}
