use merch_catalog::NewInventoryItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("missing required fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },
    #[error("invalid {field}: {reason}")]
    InvalidField { field: String, reason: String },
}

/// The "Send us a message" form. Every recognized field is enumerated;
/// there is no open-ended field map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Check the required fields, naming every blank one.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MissingFields`] listing each blank field.
    pub fn validate(&self) -> Result<(), FormError> {
        let mut missing = Vec::new();
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                missing.push(field.to_string());
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::MissingFields { fields: missing })
        }
    }
}

/// Raw text from the admin "Add New Product" form, before parsing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub stock: String,
}

impl ProductDraft {
    /// Parse and validate the draft into an inventory submission.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MissingFields`] when any field is blank, or
    /// [`FormError::InvalidField`] when a numeric field does not parse
    /// or the price is negative.
    pub fn parse(&self) -> Result<NewInventoryItem, FormError> {
        let mut missing = Vec::new();
        for (field, value) in [
            ("name", &self.name),
            ("price", &self.price),
            ("stock", &self.stock),
        ] {
            if value.trim().is_empty() {
                missing.push(field.to_string());
            }
        }
        if !missing.is_empty() {
            return Err(FormError::MissingFields { fields: missing });
        }

        let price: Decimal =
            self.price
                .trim()
                .parse()
                .map_err(|e: rust_decimal::Error| FormError::InvalidField {
                    field: "price".to_string(),
                    reason: e.to_string(),
                })?;
        if price < Decimal::ZERO {
            return Err(FormError::InvalidField {
                field: "price".to_string(),
                reason: "must be non-negative".to_string(),
            });
        }

        let stock: u32 = self
            .stock
            .trim()
            .parse()
            .map_err(|e: std::num::ParseIntError| FormError::InvalidField {
                field: "stock".to_string(),
                reason: e.to_string(),
            })?;

        Ok(NewInventoryItem {
            name: self.name.trim().to_string(),
            price,
            stock,
        })
    }
}
