use crate::domain::configuration::ProductConfiguration;
use crate::domain::record::ConfigRecord;
use crate::error::Result;
use serde::Serialize;
use std::io::{Read, Write};

/// The flat configuration record plus the readiness flag, as emitted by
/// `--format json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    #[serde(flatten)]
    pub config: ConfigRecord,
    pub can_proceed: bool,
}

impl From<&ProductConfiguration> for Quote {
    fn from(config: &ProductConfiguration) -> Self {
        Self {
            config: config.clone().into(),
            can_proceed: config.can_proceed(),
        }
    }
}

/// Reads a starting configuration from a JSON record. The stored price is
/// ignored and recomputed.
pub fn read_configuration<R: Read>(source: R) -> Result<ProductConfiguration> {
    Ok(serde_json::from_reader(source)?)
}

pub fn write_quote<W: Write>(mut destination: W, config: &ProductConfiguration) -> Result<()> {
    serde_json::to_writer_pretty(&mut destination, &Quote::from(config))?;
    writeln!(destination)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Price;

    #[test]
    fn test_read_configuration_recomputes_price() {
        let json = r#"{"productType":"cookies","boxSize":6,"boxFlavors":["vanilla"],"price":999}"#;
        let config = read_configuration(json.as_bytes()).unwrap();
        assert_eq!(config.price(), Price::from(28));
    }

    #[test]
    fn test_read_configuration_rejects_invalid_record() {
        let json = r#"{"productType":"cake","size":"Bento","layers":3}"#;
        assert!(read_configuration(json.as_bytes()).is_err());
    }

    #[test]
    fn test_write_quote() {
        let json = r#"{"productType":"muffins"}"#;
        let config = read_configuration(json.as_bytes()).unwrap();

        let mut buffer = Vec::new();
        write_quote(&mut buffer, &config).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["productType"], "muffins");
        assert_eq!(value["price"], 0);
        assert_eq!(value["canProceed"], false);
    }
}
