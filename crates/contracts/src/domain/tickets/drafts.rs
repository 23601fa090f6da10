//! Form models for the three ticket creation screens and the response form.
//!
//! Each draft validates itself and flattens into the text parts of the
//! multipart body. Files are appended separately by the caller under
//! [`SUPPORTING_DOCS_FIELD`] / [`ATTACHMENTS_FIELD`].

use serde::{Deserialize, Serialize};

use super::{Priority, TicketType};
use crate::shared::validation::{optional_amount, positive_quantity, require, ValidationError};

pub const SUPPORTING_DOCS_FIELD: &str = "supporting_docs";
pub const ATTACHMENTS_FIELD: &str = "attachments";

pub trait TicketDraft {
    const TICKET_TYPE: TicketType;

    fn validate(&self) -> Result<(), ValidationError>;

    /// Named text parts, excluding blanks. Always leads with `ticket_type`.
    fn form_fields(&self) -> Vec<(&'static str, String)>;
}

fn non_blank(ticket_type: TicketType, pairs: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
    std::iter::once(("ticket_type", ticket_type.as_str().to_string()))
        .chain(
            pairs
                .iter()
                .filter(|(_, v)| !v.trim().is_empty())
                .map(|(k, v)| (*k, v.trim().to_string())),
        )
        .collect()
}

fn priority_str(priority: Option<Priority>) -> &'static str {
    priority.map(|p| p.as_str()).unwrap_or("")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProductDraft {
    pub product_name: String,
    pub subject: String,
    pub description: String,
    pub expected_new_price: String,
    pub preferred_supplier: String,
    pub total_expected_price: String,
    pub expected_delivery_date: String,
    pub assigned_to: String,
    pub priority: Option<Priority>,
}

impl TicketDraft for NewProductDraft {
    const TICKET_TYPE: TicketType = TicketType::NewProduct;

    fn validate(&self) -> Result<(), ValidationError> {
        require("a product name", &self.product_name)?;
        require("a subject", &self.subject)?;
        optional_amount("Expected price", &self.expected_new_price)?;
        optional_amount("Total expected price", &self.total_expected_price)
    }

    fn form_fields(&self) -> Vec<(&'static str, String)> {
        non_blank(
            Self::TICKET_TYPE,
            &[
                ("product_name", self.product_name.as_str()),
                ("subject", self.subject.as_str()),
                ("description", self.description.as_str()),
                ("expected_new_price", self.expected_new_price.as_str()),
                ("preferred_supplier", self.preferred_supplier.as_str()),
                ("total_expected_price", self.total_expected_price.as_str()),
                ("expected_delivery_date", self.expected_delivery_date.as_str()),
                ("assigned_to", self.assigned_to.as_str()),
                ("priority", priority_str(self.priority)),
            ],
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExistingProductDraft {
    pub product_id: String,
    pub current_product_name: String,
    pub quantity: String,
    pub reason_for_update: String,
    pub fields_to_modify: String,
    pub expected_new_price: String,
    pub priority: Option<Priority>,
}

impl TicketDraft for ExistingProductDraft {
    const TICKET_TYPE: TicketType = TicketType::ExistingProduct;

    fn validate(&self) -> Result<(), ValidationError> {
        require("a product ID", &self.product_id)?;
        require("a reason for the update", &self.reason_for_update)?;
        if !self.quantity.trim().is_empty() {
            positive_quantity("Quantity", &self.quantity)?;
        }
        optional_amount("Expected new price", &self.expected_new_price)
    }

    fn form_fields(&self) -> Vec<(&'static str, String)> {
        non_blank(
            Self::TICKET_TYPE,
            &[
                ("product_id", self.product_id.as_str()),
                ("product_name", self.current_product_name.as_str()),
                ("quantity", self.quantity.as_str()),
                ("description", self.reason_for_update.as_str()),
                ("fields_to_modify", self.fields_to_modify.as_str()),
                ("expected_new_price", self.expected_new_price.as_str()),
                ("priority", priority_str(self.priority)),
            ],
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkOrderDraft {
    pub product_id: String,
    pub quantity: String,
    pub expected_unit_price: String,
    pub total_expected_price: String,
    pub preferred_supplier: String,
    pub delivery_date: String,
    pub reason_for_bulk_order: String,
    pub priority: Option<Priority>,
}

impl BulkOrderDraft {
    /// Unit price times quantity, when both parse. Used to prefill the total.
    pub fn computed_total(&self) -> Option<f64> {
        let qty = self.quantity.trim().parse::<u64>().ok()?;
        let unit = self.expected_unit_price.trim().parse::<f64>().ok()?;
        Some(qty as f64 * unit)
    }
}

impl TicketDraft for BulkOrderDraft {
    const TICKET_TYPE: TicketType = TicketType::BulkOrder;

    fn validate(&self) -> Result<(), ValidationError> {
        require("a product name or SKU", &self.product_id)?;
        positive_quantity("Quantity", &self.quantity)?;
        optional_amount("Expected unit price", &self.expected_unit_price)?;
        optional_amount("Total expected price", &self.total_expected_price)
    }

    fn form_fields(&self) -> Vec<(&'static str, String)> {
        non_blank(
            Self::TICKET_TYPE,
            &[
                ("product_id", self.product_id.as_str()),
                ("quantity", self.quantity.as_str()),
                ("expected_unit_price", self.expected_unit_price.as_str()),
                ("total_expected_price", self.total_expected_price.as_str()),
                ("preferred_supplier", self.preferred_supplier.as_str()),
                ("expected_delivery_date", self.delivery_date.as_str()),
                ("description", self.reason_for_bulk_order.as_str()),
                ("priority", priority_str(self.priority)),
            ],
        )
    }
}

/// Body of `POST /tickets/:id/responses` minus the attachments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseDraft {
    pub title: String,
    pub description: String,
}

impl ResponseDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("a title", &self.title)?;
        require("a description", &self.description)
    }

    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.trim().to_string()),
            ("description", self.description.trim().to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_product_requires_name_then_subject() {
        let mut d = NewProductDraft::default();
        assert_eq!(d.validate(), Err(ValidationError::Missing("a product name")));
        d.product_name = "Mug".into();
        assert_eq!(d.validate(), Err(ValidationError::Missing("a subject")));
        d.subject = "Stock a mug".into();
        assert!(d.validate().is_ok());
        d.expected_new_price = "cheap".into();
        assert!(d.validate().is_err());
    }

    #[test]
    fn fields_skip_blanks_and_lead_with_type() {
        let d = NewProductDraft {
            product_name: " Mug ".into(),
            subject: "s".into(),
            priority: Some(Priority::High),
            ..Default::default()
        };
        let fields = d.form_fields();
        assert_eq!(fields[0], ("ticket_type", "new_product".to_string()));
        assert!(fields.contains(&("product_name", "Mug".to_string())));
        assert!(fields.contains(&("priority", "high".to_string())));
        assert!(!fields.iter().any(|(k, _)| *k == "description"));
    }

    #[test]
    fn bulk_order_needs_positive_quantity() {
        let mut d = BulkOrderDraft {
            product_id: "SKU-9".into(),
            ..Default::default()
        };
        assert_eq!(d.validate(), Err(ValidationError::Missing("Quantity")));
        d.quantity = "0".into();
        assert!(d.validate().is_err());
        d.quantity = "250".into();
        assert!(d.validate().is_ok());
        d.expected_unit_price = "1.5".into();
        assert_eq!(d.computed_total(), Some(375.0));
        assert_eq!(d.form_fields()[0].1, "bulk_order");
    }

    #[test]
    fn existing_product_quantity_is_optional_but_checked() {
        let mut d = ExistingProductDraft {
            product_id: "P-1".into(),
            reason_for_update: "price change".into(),
            ..Default::default()
        };
        assert!(d.validate().is_ok());
        d.quantity = "-3".into();
        assert!(d.validate().is_err());
    }

    #[test]
    fn response_requires_title_and_description() {
        let mut r = ResponseDraft::default();
        assert_eq!(r.validate(), Err(ValidationError::Missing("a title")));
        r.title = "Quote".into();
        assert_eq!(r.validate(), Err(ValidationError::Missing("a description")));
        r.description = "Supplier quoted 2.10".into();
        assert!(r.validate().is_ok());
    }
}
