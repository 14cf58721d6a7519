use crate::domain::money::Price;
use crate::domain::order::{NewOrder, Order, PaymentReceipt};
use crate::domain::ports::{OrderNotifier, OrderStore, PaymentGateway};
use crate::error::{ConfiguratorError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for orders.
///
/// Uses `Arc<RwLock<HashMap<u64, Order>>>` so clones share the same orders.
/// Ids are assigned sequentially starting at 1.
#[derive(Default, Clone)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<HashMap<u64, Order>>>,
    next_id: Arc<AtomicU64>,
}

impl InMemoryOrderStore {
    /// Creates a new, empty in-memory order store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn insert(&self, order: NewOrder) -> Result<Order> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let order = Order::from_new(id, order, OffsetDateTime::now_utc());
        let mut orders = self.orders.write().await;
        orders.insert(id, order.clone());
        Ok(order)
    }

    async fn store(&self, order: Order) -> Result<()> {
        let mut orders = self.orders.write().await;
        if !orders.contains_key(&order.id) {
            return Err(ConfiguratorError::NotFound(format!("order {}", order.id)));
        }
        orders.insert(order.id, order);
        Ok(())
    }

    async fn get(&self, order_id: u64) -> Result<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.get(&order_id).cloned())
    }

    async fn orders_for(&self, customer_id: &str) -> Result<Vec<Order>> {
        let orders = self.orders.read().await;
        let mut matching: Vec<Order> = orders
            .values()
            .filter(|o| o.customer_id == customer_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(matching)
    }
}

/// A payment gateway stand-in that approves (or declines) every charge and
/// remembers what it was asked to charge.
#[derive(Default, Clone)]
pub struct InMemoryPaymentGateway {
    charges: Arc<RwLock<Vec<(String, Price)>>>,
    decline: bool,
}

impl InMemoryPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// A gateway that declines every charge.
    pub fn declining() -> Self {
        Self {
            decline: true,
            ..Self::default()
        }
    }

    /// Approved charges as `(email, amount)`, in order.
    pub async fn charges(&self) -> Vec<(String, Price)> {
        self.charges.read().await.clone()
    }
}

#[async_trait]
impl PaymentGateway for InMemoryPaymentGateway {
    async fn charge(&self, email: &str, amount: Price) -> Result<PaymentReceipt> {
        if self.decline {
            return Err(ConfiguratorError::PaymentError(format!(
                "Charge of {} declined",
                amount
            )));
        }
        let mut charges = self.charges.write().await;
        charges.push((email.to_string(), amount));
        Ok(PaymentReceipt {
            reference: format!("PAY-{:06}", charges.len()),
            amount,
        })
    }
}

/// Records confirmation emails instead of sending them.
#[derive(Default, Clone)]
pub struct InMemoryNotifier {
    sent: Arc<RwLock<Vec<(u64, String)>>>,
    fail: bool,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose every send fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Sent notifications as `(order id, email)`, in order.
    pub async fn sent(&self) -> Vec<(u64, String)> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl OrderNotifier for InMemoryNotifier {
    async fn order_confirmed(&self, order: &Order, email: &str) -> Result<()> {
        if self.fail {
            return Err(ConfiguratorError::IoError(std::io::Error::other(
                "mail relay unavailable",
            )));
        }
        self.sent.write().await.push((order.id, email.to_string()));
        Ok(())
    }
}
