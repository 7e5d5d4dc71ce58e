//! Rebate service

use std::fmt;

use crate::{
    calculators::registry::{CalculatorRegistry, RegistryError},
    rebates::{CalculationRequest, CalculationResult, RebateCalculation},
    stores::{ProductStore, RebateStore},
};

/// Orchestrates rebate lookups, calculator dispatch and audit persistence.
pub struct RebateService<'a> {
    rebates: &'a mut dyn RebateStore,
    products: &'a dyn ProductStore,
    registry: &'a CalculatorRegistry,
}

impl fmt::Debug for RebateService<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RebateService").finish_non_exhaustive()
    }
}

impl<'a> RebateService<'a> {
    /// Create a service over the given stores and calculator registry.
    #[must_use]
    pub fn new(
        rebates: &'a mut dyn RebateStore,
        products: &'a dyn ProductStore,
        registry: &'a CalculatorRegistry,
    ) -> Self {
        Self {
            rebates,
            products,
            registry,
        }
    }

    /// Calculate the rebate described by the request.
    ///
    /// An unknown rebate or product identifier is a business failure carried
    /// inside the returned [`CalculationResult`], and the calculator is
    /// never invoked. A successful calculation appends a
    /// [`RebateCalculation`] audit record to the rebate store; the
    /// calculator's result is returned unchanged either way.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Unregistered`] if the rebate names an
    /// incentive type with no bound calculator. That is a wiring bug rather
    /// than a business outcome, so it is not folded into the result.
    pub fn calculate(
        &mut self,
        request: &CalculationRequest,
    ) -> Result<CalculationResult, RegistryError> {
        let rebate = self.rebates.get(&request.rebate_identifier).cloned();
        let product = self.products.get(&request.product_identifier);

        let (Some(rebate), Some(product)) = (rebate, product) else {
            return Ok(CalculationResult::failure_with_message(
                "Invalid rebate or product.",
            ));
        };

        let calculator = self.registry.lookup(rebate.incentive)?;
        let result = calculator.calculate(Some(&rebate), Some(product), Some(request));

        if result.success {
            self.rebates.store_calculation(RebateCalculation {
                rebate_identifier: request.rebate_identifier.clone(),
                product_identifier: request.product_identifier.clone(),
                rebate_amount: result.rebate_amount,
            });
        }

        Ok(result)
    }
}
