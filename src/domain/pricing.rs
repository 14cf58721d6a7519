//! Price and checkout-readiness of a configuration.
//!
//! Both functions are pure and total: incomplete selections contribute
//! nothing to the price and simply fail the readiness check.

use super::catalog::LAYER_MULTIPLIER;
use super::configuration::{BoxOptions, CakeOptions, Product, ProductConfiguration};
use super::money::Price;
use rust_decimal::Decimal;

/// Computes the price of a configuration in whole naira.
///
/// Cakes: size base price, compounded by [`LAYER_MULTIPLIER`] for each layer
/// past the first, plus flat add-on surcharges, rounded once at the end.
/// Boxes: the box-size base price; flavors never change it.
pub fn compute_price(config: &ProductConfiguration) -> Price {
    match config.product() {
        Product::Cake(cake) => Price::from_total(cake_total(cake)),
        Product::Cookies(boxed) | Product::Muffins(boxed) => Price::from_total(box_total(boxed)),
    }
}

/// Whether the selection is complete enough to leave the customize step.
pub fn can_proceed(config: &ProductConfiguration) -> bool {
    match config.product() {
        Product::Cake(cake) => {
            cake.size().is_some() && !cake.flavor.is_empty() && cake.shape.is_some()
        }
        Product::Cookies(boxed) | Product::Muffins(boxed) => {
            boxed.size.is_some() && !boxed.flavors().is_empty()
        }
    }
}

/// `LAYER_MULTIPLIER ^ (layers - 1)`, saturating for absurd layer counts.
pub fn layer_factor(layers: u32) -> Decimal {
    let mut factor = Decimal::ONE;
    for _ in 1..layers {
        if factor == Decimal::MAX {
            break;
        }
        factor = factor.saturating_mul(LAYER_MULTIPLIER);
    }
    factor
}

fn cake_total(cake: &CakeOptions) -> Decimal {
    let base = cake
        .size()
        .map(|size| size.base_price())
        .unwrap_or(Decimal::ZERO);

    cake.addons
        .iter()
        .fold(base.saturating_mul(layer_factor(cake.layers())), |total, addon| {
            total.saturating_add(addon.surcharge())
        })
}

fn box_total(boxed: &BoxOptions) -> Decimal {
    boxed
        .size
        .map(|size| size.base_price())
        .unwrap_or(Decimal::ZERO)
}
