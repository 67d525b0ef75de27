//! Product request validation.
//!
//! Request bodies are first read into a [`ProductPayload`], where every field
//! is an untyped JSON value. [`ProductPayload::validate`] then checks presence
//! and type of each field and collects every failure, so the caller sees the
//! full list instead of only the first problem serde would stop at.

use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::error::{CoreError, FieldError};

/// Loosely-typed product body as received over the wire.
///
/// `id`, `created_at` and `updated_at` are store-assigned and are ignored
/// if present, along with any other unknown key.
#[derive(Debug, Default, Deserialize)]
pub struct ProductPayload {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub quantity: Option<Value>,
}

/// The full replacement field set for a product, after validation.
///
/// Used for both create and update.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct ProductInput {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
}

impl ProductPayload {
    /// Validate the payload, returning a [`ProductInput`] or a
    /// [`CoreError::InvalidFields`] naming every field that failed.
    pub fn validate(self) -> Result<ProductInput, CoreError> {
        let mut errors = Vec::new();

        let name = required_string(&mut errors, "name", self.name);
        let description = optional_string(&mut errors, "description", self.description);
        let price = required_number(&mut errors, "price", self.price);
        let quantity = required_quantity(&mut errors, "quantity", self.quantity);

        let (Some(name), Some(description), Some(price), Some(quantity)) =
            (name, description, price, quantity)
        else {
            return Err(CoreError::InvalidFields(errors));
        };

        let input = ProductInput {
            name,
            description,
            price,
            quantity,
        };

        if let Err(validation) = input.validate() {
            for (field, field_errors) in validation.field_errors() {
                for err in field_errors {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    errors.push(FieldError::new(field.to_string(), message));
                }
            }
            return Err(CoreError::InvalidFields(errors));
        }

        Ok(input)
    }
}

fn required_string(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: Option<Value>,
) -> Option<String> {
    match value {
        None => {
            errors.push(FieldError::new(field, "is required"));
            None
        }
        Some(Value::String(s)) => Some(s),
        Some(_) => {
            errors.push(FieldError::new(field, "must be a string"));
            None
        }
    }
}

fn optional_string(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: Option<Value>,
) -> Option<String> {
    match value {
        None => Some(String::new()),
        Some(Value::String(s)) => Some(s),
        Some(_) => {
            errors.push(FieldError::new(field, "must be a string"));
            None
        }
    }
}

fn required_number(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: Option<Value>,
) -> Option<f64> {
    match value {
        None => {
            errors.push(FieldError::new(field, "is required"));
            None
        }
        Some(Value::Number(n)) => match n.as_f64() {
            Some(v) => Some(v),
            None => {
                errors.push(FieldError::new(field, "must be a number"));
                None
            }
        },
        Some(_) => {
            errors.push(FieldError::new(field, "must be a number"));
            None
        }
    }
}

fn required_quantity(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: Option<Value>,
) -> Option<i32> {
    match value {
        None => {
            errors.push(FieldError::new(field, "is required"));
            None
        }
        Some(Value::Number(n)) => match n.as_i64().map(i32::try_from) {
            Some(Ok(v)) => Some(v),
            Some(Err(_)) => {
                errors.push(FieldError::new(field, "is out of range"));
                None
            }
            None => {
                errors.push(FieldError::new(field, "must be an integer"));
                None
            }
        },
        Some(_) => {
            errors.push(FieldError::new(field, "must be an integer"));
            None
        }
    }
}
