//! Calculator registry

use std::collections::hash_map::Entry;
use std::fmt;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    calculators::{RebateCalculator, StandardCalculator},
    incentives::IncentiveType,
};

/// Registry wiring failures.
///
/// Both variants indicate a deployment bug (an incentive type added but not
/// wired, or wired twice), not a recoverable business outcome; callers are
/// expected to propagate them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// No calculator is bound to the incentive type.
    #[error("no calculator registered for incentive type {0}")]
    Unregistered(IncentiveType),

    /// The incentive type already has a calculator bound to it.
    #[error("a calculator for incentive type {0} is already registered")]
    AlreadyRegistered(IncentiveType),
}

/// Maps each incentive type to the calculator bound to it.
pub struct CalculatorRegistry {
    calculators: FxHashMap<IncentiveType, Box<dyn RebateCalculator>>,
}

impl fmt::Debug for CalculatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalculatorRegistry")
            .field("incentives", &self.calculators.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl CalculatorRegistry {
    /// An empty registry with nothing bound, for callers wiring their own
    /// calculators.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            calculators: FxHashMap::default(),
        }
    }

    /// A registry with the [`StandardCalculator`] bound to every built-in
    /// incentive type.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::empty();

        for incentive in IncentiveType::ALL {
            registry
                .calculators
                .insert(incentive, Box::new(StandardCalculator::new()));
        }

        registry
    }

    /// Bind a calculator to an incentive type.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AlreadyRegistered`] if the incentive type is
    /// already bound. Rebinding is deliberately disallowed; the data stores,
    /// by contrast, overwrite silently.
    pub fn register(
        &mut self,
        incentive: IncentiveType,
        calculator: Box<dyn RebateCalculator>,
    ) -> Result<(), RegistryError> {
        match self.calculators.entry(incentive) {
            Entry::Occupied(_) => Err(RegistryError::AlreadyRegistered(incentive)),
            Entry::Vacant(slot) => {
                slot.insert(calculator);
                Ok(())
            }
        }
    }

    /// Look up the calculator bound to an incentive type.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Unregistered`] if nothing is bound to the
    /// incentive type.
    pub fn lookup(&self, incentive: IncentiveType) -> Result<&dyn RebateCalculator, RegistryError> {
        self.calculators
            .get(&incentive)
            .map(|calculator| &**calculator)
            .ok_or(RegistryError::Unregistered(incentive))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_covers_every_incentive_type() {
        let registry = CalculatorRegistry::standard();

        for incentive in IncentiveType::ALL {
            assert!(
                registry.lookup(incentive).is_ok(),
                "standard registry must cover {incentive}"
            );
        }
    }

    #[test]
    fn empty_registry_reports_unregistered() {
        let registry = CalculatorRegistry::empty();

        assert_eq!(
            registry.lookup(IncentiveType::FixedCashAmount).err(),
            Some(RegistryError::Unregistered(IncentiveType::FixedCashAmount)),
        );
    }

    #[test]
    fn register_binds_a_calculator() {
        let mut registry = CalculatorRegistry::empty();

        let bound = registry.register(
            IncentiveType::AmountPerUom,
            Box::new(StandardCalculator::new()),
        );

        assert_eq!(bound, Ok(()));
        assert!(
            registry.lookup(IncentiveType::AmountPerUom).is_ok(),
            "registered incentive must resolve"
        );
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = CalculatorRegistry::standard();

        let rebound = registry.register(
            IncentiveType::FixedRateRebate,
            Box::new(StandardCalculator::new()),
        );

        assert_eq!(
            rebound,
            Err(RegistryError::AlreadyRegistered(
                IncentiveType::FixedRateRebate
            )),
        );
    }
}
