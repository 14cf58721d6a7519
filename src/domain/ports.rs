use super::money::Price;
use super::order::{NewOrder, Order, PaymentReceipt};
use crate::error::Result;
use async_trait::async_trait;

/// Persistence for placed orders.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persists a new order with status `Pending`, assigning its id.
    async fn insert(&self, order: NewOrder) -> Result<Order>;
    /// Overwrites an existing order.
    async fn store(&self, order: Order) -> Result<()>;
    async fn get(&self, order_id: u64) -> Result<Option<Order>>;
    /// All orders of one customer, newest first.
    async fn orders_for(&self, customer_id: &str) -> Result<Vec<Order>>;
}

/// The hosted payment widget.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, email: &str, amount: Price) -> Result<PaymentReceipt>;
}

/// Trigger for the order-confirmation email.
#[async_trait]
pub trait OrderNotifier: Send + Sync {
    async fn order_confirmed(&self, order: &Order, email: &str) -> Result<()>;
}

pub type OrderStoreBox = Box<dyn OrderStore>;
pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
pub type OrderNotifierBox = Box<dyn OrderNotifier>;
