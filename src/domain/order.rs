use super::configuration::ProductConfiguration;
use super::money::Price;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A signed-in customer, as handed to us by the authentication provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub email: String,
}

impl Customer {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
}

impl OrderStatus {
    /// Orders only ever move forward, one step at a time.
    pub fn can_advance_to(&self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Confirmed)
                | (OrderStatus::Confirmed, OrderStatus::Completed)
        )
    }
}

/// Proof of a successful charge from the payment gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub reference: String,
    pub amount: Price,
}

/// An order before the order store has assigned it an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub customer_id: String,
    pub config: ProductConfiguration,
    pub payment_reference: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    pub customer_id: String,
    /// Frozen copy of the configuration at submission time.
    pub config: ProductConfiguration,
    pub status: OrderStatus,
    pub payment_reference: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Order {
    pub fn from_new(id: u64, order: NewOrder, created_at: OffsetDateTime) -> Self {
        Self {
            id,
            customer_id: order.customer_id,
            config: order.config,
            status: OrderStatus::Pending,
            payment_reference: order.payment_reference,
            created_at,
        }
    }

    pub fn total(&self) -> Price {
        self.config.price()
    }
}
