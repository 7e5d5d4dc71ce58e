//! Rebate Engine
//!
//! A monetary rebate calculation and customer purchase processing engine built on exact decimal arithmetic.

pub mod calculators;
pub mod customers;
pub mod fixtures;
pub mod incentives;
pub mod prelude;
pub mod products;
pub mod rebates;
pub mod services;
pub mod stores;
pub mod transactions;
