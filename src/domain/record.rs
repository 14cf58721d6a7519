use super::catalog::{
    Addon, BoxSize, CakeSize, MAX_BOX_FLAVORS, MAX_LAYERS, MAX_TEXT_LEN, ProductType, Shape,
};
use super::configuration::{BoxOptions, CakeOptions, Product, ProductConfiguration};
use super::delivery::DeliveryDetails;
use super::money::Price;
use crate::error::{ConfiguratorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Flat transport form of a [`ProductConfiguration`].
///
/// Every product-specific field is optional and only the fields of the active
/// product type are written. An incoming `price` is ignored: decoding always
/// recomputes it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigRecord {
    pub product_type: ProductType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layers: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addons: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_size: Option<BoxSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_flavors: Option<Vec<String>>,
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub delivery_details: DeliveryDetails,
}

impl From<ProductConfiguration> for ConfigRecord {
    fn from(config: ProductConfiguration) -> Self {
        let mut record = ConfigRecord {
            product_type: config.product_type(),
            price: config.price(),
            delivery_details: config.delivery.clone(),
            ..ConfigRecord::default()
        };

        match config.product() {
            Product::Cake(cake) => {
                record.size = Some(cake.size().map(|s| s.as_str()).unwrap_or("").to_string());
                record.layers = Some(cake.layers());
                record.flavor = Some(cake.flavor.clone());
                record.addons = Some(
                    cake.addons
                        .iter()
                        .map(|a| a.as_str().to_string())
                        .collect(),
                );
                record.text = Some(cake.text().to_string());
                record.shape = cake.shape.map(|s| s.as_str().to_string());
            }
            Product::Cookies(boxed) | Product::Muffins(boxed) => {
                record.box_size = boxed.size;
                record.box_flavors = Some(boxed.flavors().to_vec());
            }
        }

        record
    }
}

impl TryFrom<ConfigRecord> for ProductConfiguration {
    type Error = ConfiguratorError;

    fn try_from(record: ConfigRecord) -> Result<Self> {
        let product = match record.product_type {
            ProductType::Cake => Product::Cake(cake_from_record(&record)?),
            ProductType::Cookies => Product::Cookies(box_from_record(&record)?),
            ProductType::Muffins => Product::Muffins(box_from_record(&record)?),
        };

        let mut config = ProductConfiguration::new(product);
        config.delivery = record.delivery_details;
        Ok(config)
    }
}

fn cake_from_record(record: &ConfigRecord) -> Result<CakeOptions> {
    let mut options = CakeOptions::default();

    if let Some(size) = record.size.as_deref().filter(|s| !s.is_empty()) {
        options.set_size(size.parse::<CakeSize>()?);
    }

    let layers = record.layers.unwrap_or(1);
    if !(1..=MAX_LAYERS).contains(&layers) {
        return Err(ConfiguratorError::ValidationError(format!(
            "Layers must be between 1 and {}",
            MAX_LAYERS
        )));
    }
    if !options.set_layers(layers) {
        return Err(ConfiguratorError::ValidationError(
            "Bento cakes are only available in a single layer".to_string(),
        ));
    }

    options.addons = record
        .addons
        .iter()
        .flatten()
        .map(|a| a.parse::<Addon>())
        .collect::<Result<BTreeSet<_>>>()?;

    if !options.set_text(record.text.clone().unwrap_or_default()) {
        return Err(ConfiguratorError::ValidationError(format!(
            "Cake text is limited to {} characters",
            MAX_TEXT_LEN
        )));
    }

    options.flavor = record.flavor.clone().unwrap_or_default();
    options.shape = record
        .shape
        .as_deref()
        .map(str::parse::<Shape>)
        .transpose()?;

    Ok(options)
}

fn box_from_record(record: &ConfigRecord) -> Result<BoxOptions> {
    let flavors = record.box_flavors.clone().unwrap_or_default();
    if flavors.len() > MAX_BOX_FLAVORS {
        return Err(ConfiguratorError::ValidationError(format!(
            "A box holds at most {} flavors",
            MAX_BOX_FLAVORS
        )));
    }

    let mut options = BoxOptions::default();
    if let Some(size) = record.box_size {
        options.set_size(size);
    }
    for flavor in flavors {
        if !options.toggle_flavor(flavor.clone()) || !options.flavors().contains(&flavor) {
            return Err(ConfiguratorError::ValidationError(format!(
                "Duplicate box flavor '{}'",
                flavor
            )));
        }
    }
    Ok(options)
}
