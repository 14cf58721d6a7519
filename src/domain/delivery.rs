use crate::error::{ConfiguratorError, Result};
use serde::{Deserialize, Serialize};

/// States we deliver to: the 36 Nigerian states plus the Federal Capital Territory.
pub const DELIVERY_STATES: [&str; 37] = [
    "Abia",
    "Adamawa",
    "Akwa Ibom",
    "Anambra",
    "Bauchi",
    "Bayelsa",
    "Benue",
    "Borno",
    "Cross River",
    "Delta",
    "Ebonyi",
    "Edo",
    "Ekiti",
    "Enugu",
    "FCT",
    "Gombe",
    "Imo",
    "Jigawa",
    "Kaduna",
    "Kano",
    "Katsina",
    "Kebbi",
    "Kogi",
    "Kwara",
    "Lagos",
    "Nasarawa",
    "Niger",
    "Ogun",
    "Ondo",
    "Osun",
    "Oyo",
    "Plateau",
    "Rivers",
    "Sokoto",
    "Taraba",
    "Yobe",
    "Zamfara",
];

const MIN_PHONE_DIGITS: usize = 10;
const MAX_PHONE_DIGITS: usize = 15;

/// Where and to whom an order is delivered. Never read by pricing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeliveryDetails {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub state: String,
}

impl DeliveryDetails {
    /// Checks that every field is filled in, the phone number has 10 to 15
    /// digits once punctuation is stripped, and the state is one we deliver to.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("name", &self.name),
            ("address", &self.address),
            ("phone", &self.phone),
            ("state", &self.state),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfiguratorError::ValidationError(format!(
                "Delivery {} is required",
                field
            )));
        }

        let digits = self.phone.chars().filter(char::is_ascii_digit).count();
        if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits) {
            return Err(ConfiguratorError::ValidationError(format!(
                "Phone number must have {}-{} digits",
                MIN_PHONE_DIGITS, MAX_PHONE_DIGITS
            )));
        }

        if !DELIVERY_STATES.contains(&self.state.as_str()) {
            return Err(ConfiguratorError::ValidationError(format!(
                "We do not deliver to '{}'",
                self.state
            )));
        }

        Ok(())
    }
}
