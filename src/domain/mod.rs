//! Product catalog, configuration model and the pricing rules.
//!
//! Everything here is synchronous and free of I/O except the collaborator
//! traits in [`ports`].

pub mod catalog;
pub mod configuration;
pub mod delivery;
pub mod money;
pub mod order;
pub mod ports;
pub mod pricing;
pub mod record;
