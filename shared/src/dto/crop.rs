//! # Crop DTOs
//!
//! Listings come back in at least three shapes depending on which endpoint
//! produced them, so [`CropRecord`] keeps every candidate field optional and
//! [`crate::normalize::normalize_crop`] resolves them.

use serde::{Deserialize, Serialize};

use super::user::UserRecord;
use super::Id;

/// Raw crop listing as sent by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CropRecord {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farmer: Option<UserRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farmer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farmer_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_available: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_unit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub harvest_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Farmer's new listing form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCropRequest {
    pub crop_name: String,
    pub quantity: f64,
    pub unit: String,
    pub price_per_unit: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harvest_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewCropRequest {
    /// Validate raw form text into a request.
    pub fn from_form(
        crop_name: &str,
        quantity: &str,
        unit: &str,
        price_per_unit: &str,
        harvest_date: &str,
        description: &str,
    ) -> Result<Self, String> {
        let crop_name = crop_name.trim();
        if crop_name.is_empty() {
            return Err("Crop name is required".to_string());
        }
        let quantity: f64 = quantity
            .trim()
            .parse()
            .map_err(|_| "Quantity must be a number".to_string())?;
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err("Quantity must be greater than zero".to_string());
        }
        let price_per_unit: f64 = price_per_unit
            .trim()
            .parse()
            .map_err(|_| "Price must be a number".to_string())?;
        if !price_per_unit.is_finite() || price_per_unit < 0.0 {
            return Err("Price cannot be negative".to_string());
        }
        let unit = match unit.trim() {
            "" => "kg".to_string(),
            other => other.to_string(),
        };
        let optional = |s: &str| {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        Ok(Self {
            crop_name: crop_name.to_string(),
            quantity,
            unit,
            price_per_unit,
            harvest_date: optional(harvest_date),
            description: optional(description),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_crop_from_form() {
        let request = NewCropRequest::from_form("Maize", "250", "", "45.5", "2026-03-01", " ").unwrap();
        assert_eq!(request.crop_name, "Maize");
        assert_eq!(request.quantity, 250.0);
        assert_eq!(request.unit, "kg");
        assert_eq!(request.price_per_unit, 45.5);
        assert_eq!(request.harvest_date.as_deref(), Some("2026-03-01"));
        assert_eq!(request.description, None);
    }

    #[test]
    fn test_new_crop_rejects_bad_input() {
        assert!(NewCropRequest::from_form(" ", "1", "kg", "1", "", "").is_err());
        assert!(NewCropRequest::from_form("Beans", "lots", "kg", "1", "", "").is_err());
        assert!(NewCropRequest::from_form("Beans", "0", "kg", "1", "", "").is_err());
        assert!(NewCropRequest::from_form("Beans", "5", "kg", "-2", "", "").is_err());
    }
}
