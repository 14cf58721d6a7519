use crate::domain::catalog::{Addon, BoxSize, CakeSize, ProductType, Shape};
use crate::domain::configuration::ProductConfiguration;
use crate::domain::delivery::DeliveryDetails;
use crate::domain::money::Price;
use crate::domain::order::{Customer, PaymentReceipt};
use crate::error::{ConfiguratorError, Result};
use tracing::debug;

/// A single user selection on the customize screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    ChangeProductType(ProductType),
    SetSize(CakeSize),
    SetLayers(u32),
    SetFlavor(String),
    ToggleAddon(Addon),
    SetText(String),
    SetShape(Shape),
    SetBoxSize(BoxSize),
    ToggleBoxFlavor(String),
    StartOver,
}

/// The linear checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckoutStep {
    Customize,
    Authenticate,
    Delivery,
    Payment,
    Confirmation,
}

impl CheckoutStep {
    pub fn next(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Customize => Some(CheckoutStep::Authenticate),
            CheckoutStep::Authenticate => Some(CheckoutStep::Delivery),
            CheckoutStep::Delivery => Some(CheckoutStep::Payment),
            CheckoutStep::Payment => Some(CheckoutStep::Confirmation),
            CheckoutStep::Confirmation => None,
        }
    }
}

/// Owner of one customer's configuration for the length of a checkout.
///
/// Every accepted [`SelectionAction`] is followed by a reprice, so
/// [`price`](Self::price) is always current. The configuration is frozen
/// once the session leaves [`CheckoutStep::Customize`].
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    config: ProductConfiguration,
    step: CheckoutStep,
    customer: Option<Customer>,
    receipt: Option<PaymentReceipt>,
    order_id: Option<u64>,
}

impl Default for CheckoutSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckoutSession {
    pub fn new() -> Self {
        Self::with_configuration(ProductConfiguration::default())
    }

    /// Resumes customizing from an existing configuration.
    pub fn with_configuration(mut config: ProductConfiguration) -> Self {
        config.reprice();
        Self {
            config,
            step: CheckoutStep::Customize,
            customer: None,
            receipt: None,
            order_id: None,
        }
    }

    pub fn config(&self) -> &ProductConfiguration {
        &self.config
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn price(&self) -> Price {
        self.config.price()
    }

    pub fn customer(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    pub fn receipt(&self) -> Option<&PaymentReceipt> {
        self.receipt.as_ref()
    }

    pub fn order_id(&self) -> Option<u64> {
        self.order_id
    }

    /// Applies a selection and reprices. Returns `false` when the action was
    /// refused (an invariant would break, the field does not apply to the
    /// current product, or the configuration is already frozen).
    pub fn apply(&mut self, action: SelectionAction) -> bool {
        if self.step != CheckoutStep::Customize && action != SelectionAction::StartOver {
            debug!(?action, step = ?self.step, "configuration is frozen");
            return false;
        }

        let applied = match action.clone() {
            SelectionAction::StartOver => {
                self.start_over();
                true
            }
            SelectionAction::ChangeProductType(product_type) => {
                self.config.change_product_type(product_type)
            }
            SelectionAction::SetSize(size) => self.config.set_size(size),
            SelectionAction::SetLayers(layers) => self.config.set_layers(layers),
            SelectionAction::SetFlavor(flavor) => self.config.set_flavor(flavor),
            SelectionAction::ToggleAddon(addon) => self.config.toggle_addon(addon),
            SelectionAction::SetText(text) => self.config.set_text(text),
            SelectionAction::SetShape(shape) => self.config.set_shape(shape),
            SelectionAction::SetBoxSize(size) => self.config.set_box_size(size),
            SelectionAction::ToggleBoxFlavor(flavor) => self.config.toggle_box_flavor(flavor),
        };

        let price = self.config.reprice();
        if applied {
            debug!(?action, %price, "selection applied");
        } else {
            debug!(?action, "selection refused");
        }
        applied
    }

    /// Whether the gate of the current step is satisfied.
    pub fn can_proceed(&self) -> bool {
        match self.step {
            CheckoutStep::Customize => self.config.can_proceed(),
            CheckoutStep::Authenticate => self.customer.is_some(),
            CheckoutStep::Delivery => self.config.delivery.validate().is_ok(),
            CheckoutStep::Payment => self.receipt.is_some() && self.order_id.is_some(),
            CheckoutStep::Confirmation => false,
        }
    }

    /// Moves to the next step if the current gate holds; otherwise nothing
    /// happens and `false` is returned.
    pub fn proceed(&mut self) -> bool {
        if !self.can_proceed() {
            return false;
        }
        match self.step.next() {
            Some(next) => {
                debug!(from = ?self.step, to = ?next, "checkout advanced");
                self.step = next;
                true
            }
            None => false,
        }
    }

    pub fn sign_in(&mut self, customer: Customer) {
        self.customer = Some(customer);
    }

    pub fn sign_out(&mut self) {
        self.customer = None;
    }

    /// Records validated delivery details. Refused once payment has started.
    pub fn set_delivery_details(&mut self, details: DeliveryDetails) -> Result<()> {
        if self.step > CheckoutStep::Delivery {
            return Err(ConfiguratorError::ValidationError(
                "Delivery details can no longer be changed".to_string(),
            ));
        }
        details.validate()?;
        self.config.delivery = details;
        Ok(())
    }

    /// Keeps the receipt of a successful charge so a retried order placement
    /// does not charge again.
    pub(crate) fn record_payment(&mut self, receipt: PaymentReceipt) {
        self.receipt = Some(receipt);
    }

    pub(crate) fn record_order(&mut self, order_id: u64) {
        self.order_id = Some(order_id);
    }

    /// Drops every selection and returns to the first step. The signed-in
    /// customer is kept.
    pub fn start_over(&mut self) {
        self.config = ProductConfiguration::default();
        self.config.reprice();
        self.step = CheckoutStep::Customize;
        self.receipt = None;
        self.order_id = None;
    }
}
