use serde::{Deserialize, Serialize};

use crate::shared::serde_helpers::{opt_string, string_id, string_list};
use crate::shared::validation::{optional_amount, require, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "string_id")]
    pub id: String,
    #[serde(default, alias = "product_name", alias = "productName", deserialize_with = "opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub sku: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub supplier: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub stock: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub images: Vec<String>,
    #[serde(default, alias = "createdAt", deserialize_with = "opt_string")]
    pub created_at: Option<String>,
    #[serde(default, alias = "updated", alias = "updatedAt", deserialize_with = "opt_string")]
    pub updated_at: Option<String>,
}

impl Product {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed Product")
    }

    pub fn price_value(&self) -> Option<f64> {
        self.price.as_deref()?.trim().parse().ok()
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Date shown on the card: last update, else creation.
    pub fn last_touched(&self) -> Option<&str> {
        self.updated_at.as_deref().or(self.created_at.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "string_id")]
    pub id: String,
    #[serde(default, alias = "category_name")]
    pub name: String,
}

/// Add-product form. Images travel as separate multipart parts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub product_name: String,
    pub sku: String,
    pub category: String,
    pub supplier: String,
    pub price: String,
    pub stock: String,
    pub description: String,
}

pub const PRODUCT_IMAGES_FIELD: &str = "images";

impl ProductDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("a product name", &self.product_name)?;
        require("a SKU", &self.sku)?;
        optional_amount("Price", &self.price)?;
        if !self.stock.trim().is_empty() && self.stock.trim().parse::<u64>().is_err() {
            return Err(ValidationError::Invalid {
                field: "Stock",
                expected: "a whole number",
            });
        }
        Ok(())
    }

    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        [
            ("product_name", &self.product_name),
            ("sku", &self.sku),
            ("category", &self.category),
            ("supplier", &self.supplier),
            ("price", &self.price),
            ("stock", &self.stock),
            ("description", &self.description),
        ]
        .into_iter()
        .map(|(k, v)| (k, v.trim().to_string()))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_payload::ListPayload;

    #[test]
    fn decodes_both_list_shapes_and_name_spellings() {
        let plain: ListPayload<Product> = serde_json::from_str(
            r#"[{"id":1,"name":"Mug","price":"4.50","images":[{"url":"https://cdn/m.png"}]}]"#,
        )
        .unwrap();
        let wrapped: ListPayload<Product> =
            serde_json::from_str(r#"{"data":[{"id":"p2","product_name":"Jar","stock":12}]}"#).unwrap();

        let plain = plain.into_vec();
        assert_eq!(plain[0].display_name(), "Mug");
        assert_eq!(plain[0].price_value(), Some(4.5));
        assert_eq!(plain[0].cover_image(), Some("https://cdn/m.png"));

        let wrapped = wrapped.into_vec();
        assert_eq!(wrapped[0].display_name(), "Jar");
        assert_eq!(wrapped[0].stock.as_deref(), Some("12"));
        assert_eq!(wrapped[0].cover_image(), None);
    }

    #[test]
    fn unnamed_product_placeholder() {
        let p: Product = serde_json::from_str(r#"{"id":3}"#).unwrap();
        assert_eq!(p.display_name(), "Unnamed Product");
        assert_eq!(p.last_touched(), None);
    }

    #[test]
    fn draft_validation() {
        let mut d = ProductDraft {
            product_name: "Mug".into(),
            sku: "MUG-1".into(),
            ..Default::default()
        };
        assert!(d.validate().is_ok());
        d.stock = "many".into();
        assert!(d.validate().is_err());
        d.stock = "10".into();
        d.price = "-2".into();
        assert!(d.validate().is_err());
        assert_eq!(d.form_fields().len(), 7);
    }
}
