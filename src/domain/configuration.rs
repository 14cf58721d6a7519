use super::catalog::{
    Addon, BoxSize, CakeSize, MAX_BOX_FLAVORS, MAX_LAYERS, MAX_TEXT_LEN, ProductType, Shape,
};
use super::delivery::DeliveryDetails;
use super::money::Price;
use super::pricing;
use super::record::ConfigRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Selections that only make sense for a cake.
///
/// Size, layers and text are only reachable through their setters, so a
/// Bento cake always has one layer and the text never exceeds
/// `MAX_TEXT_LEN` characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CakeOptions {
    size: Option<CakeSize>,
    layers: u32,
    pub flavor: String,
    pub addons: BTreeSet<Addon>,
    text: String,
    pub shape: Option<Shape>,
}

impl Default for CakeOptions {
    fn default() -> Self {
        Self {
            size: None,
            layers: 1,
            flavor: String::new(),
            addons: BTreeSet::new(),
            text: String::new(),
            shape: Some(Shape::Circle),
        }
    }
}

impl CakeOptions {
    pub fn size(&self) -> Option<CakeSize> {
        self.size
    }

    pub fn layers(&self) -> u32 {
        self.layers
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Selects a size. Choosing Bento collapses the cake to a single layer in
    /// the same update.
    pub fn set_size(&mut self, size: CakeSize) -> bool {
        if size == CakeSize::Bento && self.layers > 1 {
            self.layers = 1;
        }
        self.size = Some(size);
        true
    }

    /// Sets the layer count. Refused for Bento cakes above one layer and
    /// for counts outside `1..=MAX_LAYERS`.
    pub fn set_layers(&mut self, layers: u32) -> bool {
        if !(1..=MAX_LAYERS).contains(&layers) {
            return false;
        }
        if self.size == Some(CakeSize::Bento) && layers > 1 {
            return false;
        }
        self.layers = layers;
        true
    }

    pub fn set_flavor(&mut self, flavor: impl Into<String>) -> bool {
        self.flavor = flavor.into();
        true
    }

    pub fn toggle_addon(&mut self, addon: Addon) -> bool {
        if !self.addons.remove(&addon) {
            self.addons.insert(addon);
        }
        true
    }

    /// Sets the writing on the cake. Text longer than `MAX_TEXT_LEN`
    /// characters is refused; the empty string clears it.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text.chars().count() > MAX_TEXT_LEN {
            return false;
        }
        self.text = text;
        true
    }

    pub fn set_shape(&mut self, shape: Shape) -> bool {
        self.shape = Some(shape);
        true
    }
}

/// Selections for a box of cookies or muffins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoxOptions {
    pub size: Option<BoxSize>,
    flavors: Vec<String>,
}

impl BoxOptions {
    pub fn flavors(&self) -> &[String] {
        &self.flavors
    }

    /// Changing the box size discards the flavors picked so far.
    pub fn set_size(&mut self, size: BoxSize) -> bool {
        self.size = Some(size);
        self.flavors.clear();
        true
    }

    /// Removes a selected flavor, or adds it while fewer than
    /// `MAX_BOX_FLAVORS` are selected. A full box ignores new flavors.
    pub fn toggle_flavor(&mut self, flavor: impl Into<String>) -> bool {
        let flavor = flavor.into();
        if let Some(pos) = self.flavors.iter().position(|f| *f == flavor) {
            self.flavors.remove(pos);
            true
        } else if self.flavors.len() < MAX_BOX_FLAVORS {
            self.flavors.push(flavor);
            true
        } else {
            false
        }
    }
}

/// The product being configured. Only the field group of the selected
/// product type exists, so stale cake fields cannot linger on a box order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Product {
    Cake(CakeOptions),
    Cookies(BoxOptions),
    Muffins(BoxOptions),
}

impl Product {
    /// A freshly reset product of the given type.
    pub fn blank(product_type: ProductType) -> Self {
        match product_type {
            ProductType::Cake => Product::Cake(CakeOptions::default()),
            ProductType::Cookies => Product::Cookies(BoxOptions::default()),
            ProductType::Muffins => Product::Muffins(BoxOptions::default()),
        }
    }

    pub fn product_type(&self) -> ProductType {
        match self {
            Product::Cake(_) => ProductType::Cake,
            Product::Cookies(_) => ProductType::Cookies,
            Product::Muffins(_) => ProductType::Muffins,
        }
    }

    pub fn cake(&self) -> Option<&CakeOptions> {
        match self {
            Product::Cake(options) => Some(options),
            _ => None,
        }
    }

    pub fn boxed(&self) -> Option<&BoxOptions> {
        match self {
            Product::Cookies(options) | Product::Muffins(options) => Some(options),
            Product::Cake(_) => None,
        }
    }
}

impl Default for Product {
    fn default() -> Self {
        Product::blank(ProductType::Cake)
    }
}

/// One customer's in-progress selection.
///
/// The price is derived state: it is only ever written by [`reprice`],
/// which the owning session calls after every mutation. Setters for the
/// inactive product group are no-ops and return `false`, as do refused
/// changes.
///
/// On the wire this is the flat [`ConfigRecord`].
///
/// [`reprice`]: ProductConfiguration::reprice
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "ConfigRecord", try_from = "ConfigRecord")]
pub struct ProductConfiguration {
    product: Product,
    price: Price,
    pub delivery: DeliveryDetails,
}

impl ProductConfiguration {
    pub fn new(product: Product) -> Self {
        let mut config = Self {
            product,
            ..Self::default()
        };
        config.reprice();
        config
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn product_type(&self) -> ProductType {
        self.product.product_type()
    }

    /// The price as of the last [`reprice`](Self::reprice).
    pub fn price(&self) -> Price {
        self.price
    }

    /// Recomputes the stored price from the current selection.
    pub fn reprice(&mut self) -> Price {
        self.price = pricing::compute_price(self);
        self.price
    }

    pub fn can_proceed(&self) -> bool {
        pricing::can_proceed(self)
    }

    /// Switches product type, discarding every selection of the old type.
    /// The price drops to zero until the next reprice.
    pub fn change_product_type(&mut self, product_type: ProductType) -> bool {
        self.product = Product::blank(product_type);
        self.price = Price::ZERO;
        true
    }

    pub fn set_size(&mut self, size: CakeSize) -> bool {
        self.cake_mut().is_some_and(|cake| cake.set_size(size))
    }

    pub fn set_layers(&mut self, layers: u32) -> bool {
        self.cake_mut().is_some_and(|cake| cake.set_layers(layers))
    }

    pub fn set_flavor(&mut self, flavor: impl Into<String>) -> bool {
        self.cake_mut().is_some_and(|cake| cake.set_flavor(flavor))
    }

    pub fn toggle_addon(&mut self, addon: Addon) -> bool {
        self.cake_mut().is_some_and(|cake| cake.toggle_addon(addon))
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        self.cake_mut().is_some_and(|cake| cake.set_text(text))
    }

    pub fn set_shape(&mut self, shape: Shape) -> bool {
        self.cake_mut().is_some_and(|cake| cake.set_shape(shape))
    }

    pub fn set_box_size(&mut self, size: BoxSize) -> bool {
        self.box_mut().is_some_and(|boxed| boxed.set_size(size))
    }

    pub fn toggle_box_flavor(&mut self, flavor: impl Into<String>) -> bool {
        self.box_mut().is_some_and(|boxed| boxed.toggle_flavor(flavor))
    }

    fn cake_mut(&mut self) -> Option<&mut CakeOptions> {
        match &mut self.product {
            Product::Cake(options) => Some(options),
            _ => None,
        }
    }

    fn box_mut(&mut self) -> Option<&mut BoxOptions> {
        match &mut self.product {
            Product::Cookies(options) | Product::Muffins(options) => Some(options),
            Product::Cake(_) => None,
        }
    }
}
