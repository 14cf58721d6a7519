use crate::domain::configuration::{Product, ProductConfiguration};
use crate::error::Result;
use std::io::Write;

/// Writes an order summary as `field,value` CSV rows.
///
/// Only the fields of the selected product type are listed, followed by the
/// price (raw and formatted) and whether checkout can proceed. Add-ons and box
/// flavors get one row each, in the same shape as the script actions.
pub struct SummaryWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> SummaryWriter<W> {
    pub fn new(destination: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(destination),
        }
    }

    pub fn write_summary(&mut self, config: &ProductConfiguration) -> Result<()> {
        self.writer.write_record(["field", "value"])?;
        self.row("product", config.product_type().as_str())?;

        match config.product() {
            Product::Cake(cake) => {
                self.row("shape", cake.shape.map(|s| s.as_str()).unwrap_or(""))?;
                self.row("size", cake.size().map(|s| s.as_str()).unwrap_or(""))?;
                self.row("layers", &cake.layers().to_string())?;
                self.row("flavor", &cake.flavor)?;
                for addon in &cake.addons {
                    self.row("addon", addon.as_str())?;
                }
                self.row("text", cake.text())?;
            }
            Product::Cookies(boxed) | Product::Muffins(boxed) => {
                let size = boxed.size.map(|s| s.to_string()).unwrap_or_default();
                self.row("box_size", &size)?;
                for flavor in boxed.flavors() {
                    self.row("box_flavor", flavor)?;
                }
            }
        }

        let price = config.price();
        self.row("price", &price.as_u64().to_string())?;
        self.row("price_display", &price.to_string())?;
        self.row("can_proceed", &config.can_proceed().to_string())?;
        self.writer.flush()?;
        Ok(())
    }

    fn row(&mut self, field: &str, value: &str) -> Result<()> {
        self.writer.write_record([field, value])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Addon, BoxSize, CakeSize, ProductType};

    fn render(config: &ProductConfiguration) -> String {
        let mut buffer = Vec::new();
        {
            let mut writer = SummaryWriter::new(&mut buffer);
            writer.write_summary(config).unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_cake_summary() {
        let mut config = ProductConfiguration::default();
        config.set_size(CakeSize::Ten);
        config.set_layers(3);
        config.set_flavor("red velvet");
        config.toggle_addon(Addon::Fruit);
        config.toggle_addon(Addon::Text);
        config.reprice();

        let output = render(&config);
        assert!(output.starts_with("field,value\nproduct,cake\n"));
        assert!(output.contains("size,10\n"));
        assert!(output.contains("addon,fruit\naddon,text\n"));
        assert!(output.contains("price,194\n"));
        assert!(output.contains("price_display,₦194\n"));
        assert!(output.contains("can_proceed,true\n"));
        assert!(!output.contains("box_size"));
    }

    #[test]
    fn test_box_summary() {
        let mut config = ProductConfiguration::default();
        config.change_product_type(ProductType::Cookies);
        config.set_box_size(BoxSize::Twelve);
        config.toggle_box_flavor("oatmeal");
        config.toggle_box_flavor("peanut butter");
        config.reprice();

        let output = render(&config);
        assert!(output.contains("box_size,12\n"));
        assert!(output.contains("box_flavor,oatmeal\nbox_flavor,peanut butter\n"));
        assert!(output.contains("price,50\n"));
        assert!(!output.contains("layers"));
    }

    #[test]
    fn test_flavor_with_separator_characters() {
        let mut config = ProductConfiguration::default();
        config.change_product_type(ProductType::Muffins);
        config.set_box_size(BoxSize::Four);
        config.toggle_box_flavor("lemon; poppy seed");
        config.toggle_box_flavor("banana, walnut");
        config.reprice();

        let output = render(&config);
        let mut reader = csv::Reader::from_reader(output.as_bytes());
        let flavors: Vec<String> = reader
            .records()
            .map(|r| r.unwrap())
            .filter(|r| &r[0] == "box_flavor")
            .map(|r| r[1].to_string())
            .collect();
        assert_eq!(flavors, ["lemon; poppy seed", "banana, walnut"]);
    }
}
