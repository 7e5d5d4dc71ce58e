//! Incentive types

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// The calculation strategy attached to a rebate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncentiveType {
    /// A fixed cash amount, independent of volume.
    FixedCashAmount,

    /// A percentage of the product's price, scaled by volume.
    FixedRateRebate,

    /// A fixed amount for each unit of measure.
    AmountPerUom,
}

impl IncentiveType {
    /// Every incentive type, in declaration order.
    pub const ALL: [Self; 3] = [
        Self::FixedCashAmount,
        Self::FixedRateRebate,
        Self::AmountPerUom,
    ];

    const fn bit(self) -> u8 {
        match self {
            Self::FixedCashAmount => 1,
            Self::FixedRateRebate => 1 << 1,
            Self::AmountPerUom => 1 << 2,
        }
    }
}

impl fmt::Display for IncentiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FixedCashAmount => "FixedCashAmount",
            Self::FixedRateRebate => "FixedRateRebate",
            Self::AmountPerUom => "AmountPerUom",
        })
    }
}

/// The set of incentive types a product accepts.
///
/// A product may support zero, one, or several incentive types at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SupportedIncentives(u8);

impl SupportedIncentives {
    /// The empty set: no incentives supported.
    #[must_use]
    pub const fn none() -> Self {
        Self(0)
    }

    /// The set containing every incentive type.
    #[must_use]
    pub const fn all() -> Self {
        Self(
            IncentiveType::FixedCashAmount.bit()
                | IncentiveType::FixedRateRebate.bit()
                | IncentiveType::AmountPerUom.bit(),
        )
    }

    /// Return this set with the given incentive type added.
    #[must_use]
    pub const fn with(self, incentive: IncentiveType) -> Self {
        Self(self.0 | incentive.bit())
    }

    /// Return whether the set contains the given incentive type.
    #[must_use]
    pub const fn contains(self, incentive: IncentiveType) -> bool {
        self.0 & incentive.bit() != 0
    }

    /// Return whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<IncentiveType> for SupportedIncentives {
    fn from(incentive: IncentiveType) -> Self {
        Self::none().with(incentive)
    }
}

impl BitOr for IncentiveType {
    type Output = SupportedIncentives;

    fn bitor(self, rhs: Self) -> SupportedIncentives {
        SupportedIncentives::none().with(self).with(rhs)
    }
}

impl BitOr<IncentiveType> for SupportedIncentives {
    type Output = Self;

    fn bitor(self, rhs: IncentiveType) -> Self {
        self.with(rhs)
    }
}

impl BitOrAssign<IncentiveType> for SupportedIncentives {
    fn bitor_assign(&mut self, rhs: IncentiveType) {
        *self = self.with(rhs);
    }
}
