use crate::application::session::{CheckoutSession, CheckoutStep};
use crate::domain::order::{Customer, NewOrder, Order, OrderStatus};
use crate::domain::ports::{OrderNotifierBox, OrderStoreBox, PaymentGatewayBox};
use crate::error::{ConfiguratorError, Result};
use tracing::{info, warn};

/// Places and tracks orders on behalf of checkout sessions.
///
/// `CheckoutService` owns the collaborator ports (order storage, payment,
/// notification). It never touches pricing: the amount charged is the price
/// the session already holds.
pub struct CheckoutService {
    orders: OrderStoreBox,
    payments: PaymentGatewayBox,
    notifier: OrderNotifierBox,
}

impl CheckoutService {
    /// Creates a new `CheckoutService`.
    ///
    /// # Arguments
    ///
    /// * `orders` - Where placed orders are persisted.
    /// * `payments` - The gateway charged for each order.
    /// * `notifier` - Sends the order-confirmation email.
    pub fn new(
        orders: OrderStoreBox,
        payments: PaymentGatewayBox,
        notifier: OrderNotifierBox,
    ) -> Self {
        Self {
            orders,
            payments,
            notifier,
        }
    }

    /// Charges the customer and records the order.
    ///
    /// The session must be at the payment step with a signed-in customer.
    /// On success the order is stored as confirmed and the session moves to
    /// the confirmation step. A failed confirmation email is logged but does
    /// not fail the order.
    ///
    /// The session remembers the receipt and the stored order as soon as each
    /// exists, so calling this again after a failure resumes where the last
    /// attempt stopped and never charges twice.
    pub async fn place_order(&self, session: &mut CheckoutSession) -> Result<Order> {
        if session.step() != CheckoutStep::Payment {
            return Err(ConfiguratorError::ValidationError(format!(
                "Checkout is at {:?}, not awaiting payment",
                session.step()
            )));
        }
        let customer = session.customer().cloned().ok_or_else(|| {
            ConfiguratorError::ValidationError("Sign in before paying".to_string())
        })?;

        let amount = session.price();
        let receipt = match session.receipt().cloned() {
            Some(receipt) => {
                info!(reference = %receipt.reference, "reusing earlier payment");
                receipt
            }
            None => {
                let receipt = self.payments.charge(&customer.email, amount).await?;
                session.record_payment(receipt.clone());
                receipt
            }
        };

        let order = match session.order_id() {
            Some(order_id) => self
                .orders
                .get(order_id)
                .await?
                .ok_or_else(|| ConfiguratorError::NotFound(format!("order {}", order_id)))?,
            None => {
                let order = self
                    .orders
                    .insert(NewOrder {
                        customer_id: customer.id.clone(),
                        config: session.config().clone(),
                        payment_reference: receipt.reference.clone(),
                    })
                    .await
                    .inspect_err(|e| {
                        warn!(
                            reference = %receipt.reference,
                            "Payment taken but order not saved: {}",
                            e
                        )
                    })?;
                session.record_order(order.id);
                info!(order_id = order.id, customer = %customer.id, %amount, "order placed");
                order
            }
        };

        let order = if order.status == OrderStatus::Pending {
            self.advance(order, OrderStatus::Confirmed).await?
        } else {
            order
        };

        if let Err(e) = self.notifier.order_confirmed(&order, &customer.email).await {
            warn!(order_id = order.id, "Failed to send order confirmation: {}", e);
        }

        session.proceed();
        Ok(order)
    }

    /// Marks a confirmed order as delivered.
    pub async fn complete_order(&self, order_id: u64) -> Result<Order> {
        let order = self
            .orders
            .get(order_id)
            .await?
            .ok_or_else(|| ConfiguratorError::NotFound(format!("order {}", order_id)))?;
        self.advance(order, OrderStatus::Completed).await
    }

    /// The customer's orders, newest first.
    pub async fn order_history(&self, customer: &Customer) -> Result<Vec<Order>> {
        self.orders.orders_for(&customer.id).await
    }

    async fn advance(&self, mut order: Order, status: OrderStatus) -> Result<Order> {
        if !order.status.can_advance_to(status) {
            return Err(ConfiguratorError::ValidationError(format!(
                "Order {} cannot move from {:?} to {:?}",
                order.id, order.status, status
            )));
        }
        order.status = status;
        self.orders.store(order.clone()).await?;
        info!(order_id = order.id, status = ?status, "order status changed");
        Ok(order)
    }
}
