//! Rebate calculators

use rust_decimal::Decimal;

use crate::{
    incentives::IncentiveType,
    products::Product,
    rebates::{CalculationRequest, CalculationResult, Rebate},
};

pub mod registry;

/// Behaviour contract for rebate calculators.
///
/// Calculators are pure: no side effects, no I/O. Inputs arrive as `Option`s
/// because callers may hand over lookups that found nothing; any absent
/// input fails the calculation before any arithmetic runs.
pub trait RebateCalculator {
    /// Calculate the rebate for the given rebate, product and request.
    fn calculate(
        &self,
        rebate: Option<&Rebate>,
        product: Option<&Product>,
        request: Option<&CalculationRequest>,
    ) -> CalculationResult;
}

/// The stock calculator covering every built-in incentive type.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCalculator;

impl StandardCalculator {
    /// Create a standard calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn fixed_cash_amount(rebate: &Rebate, product: &Product) -> Decimal {
        if product
            .supported_incentives
            .contains(IncentiveType::FixedCashAmount)
        {
            rebate.amount
        } else {
            Decimal::ZERO
        }
    }

    fn fixed_rate_rebate(
        rebate: &Rebate,
        product: &Product,
        request: &CalculationRequest,
    ) -> Decimal {
        if !product
            .supported_incentives
            .contains(IncentiveType::FixedRateRebate)
            || product.price == Decimal::ZERO
            || request.volume == Decimal::ZERO
        {
            return Decimal::ZERO;
        }

        (rebate.percentage * product.price) * request.volume
    }

    fn amount_per_uom(rebate: &Rebate, product: &Product, request: &CalculationRequest) -> Decimal {
        if product
            .supported_incentives
            .contains(IncentiveType::AmountPerUom)
            && request.volume > Decimal::ZERO
        {
            rebate.amount * request.volume
        } else {
            Decimal::ZERO
        }
    }
}

impl RebateCalculator for StandardCalculator {
    fn calculate(
        &self,
        rebate: Option<&Rebate>,
        product: Option<&Product>,
        request: Option<&CalculationRequest>,
    ) -> CalculationResult {
        let (Some(rebate), Some(product), Some(request)) = (rebate, product, request) else {
            return CalculationResult::failure();
        };

        let amount = match rebate.incentive {
            IncentiveType::FixedCashAmount => Self::fixed_cash_amount(rebate, product),
            IncentiveType::FixedRateRebate => Self::fixed_rate_rebate(rebate, product, request),
            IncentiveType::AmountPerUom => Self::amount_per_uom(rebate, product, request),
        };

        CalculationResult::from_amount(amount)
    }
}
