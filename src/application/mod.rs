//! Application layer: the checkout session and order placement.
//!
//! `CheckoutSession` owns a configuration and applies selections to it,
//! repricing after each one. `CheckoutService` drives the collaborator ports
//! once the session reaches payment.

pub mod checkout;
pub mod session;
