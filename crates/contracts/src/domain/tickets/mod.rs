pub mod drafts;
pub mod status;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::paging::one;
use crate::shared::serde_helpers::{opt_string, string_id, string_list};

pub use status::{TicketAffordances, TicketStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketType {
    NewProduct,
    ExistingProduct,
    BulkOrder,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [
        TicketType::NewProduct,
        TicketType::ExistingProduct,
        TicketType::BulkOrder,
    ];

    /// Wire value; also the last segment of `POST /tickets/:ticketType`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::NewProduct => "new_product",
            TicketType::ExistingProduct => "existing_product",
            TicketType::BulkOrder => "bulk_order",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(value.trim()))
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketType::NewProduct => "New Product",
            TicketType::ExistingProduct => "Existing Product",
            TicketType::BulkOrder => "Bulk Order",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            TicketType::NewProduct => {
                "Create a ticket for adding a completely new product to the system"
            }
            TicketType::ExistingProduct => {
                "Create a ticket for updating an already existing product in the system"
            }
            TicketType::BulkOrder => {
                "Submit a ticket for a large quantity or special pricing request"
            }
        }
    }

    pub fn create_path(&self) -> &'static str {
        match self {
            TicketType::NewProduct => "/tickets/createticket/newproduct",
            TicketType::ExistingProduct => "/tickets/createticket/existingproduct",
            TicketType::BulkOrder => "/tickets/createticket/bulkorder",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(value.trim()))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

/// A ticket as the API returns it.
///
/// Field names are snake_case on the wire. The older camelCase spellings are
/// accepted as aliases so both generations of payload decode to one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(deserialize_with = "string_id", alias = "ticketId")]
    pub id: String,
    #[serde(alias = "ticketType")]
    pub ticket_type: TicketType,
    #[serde(default)]
    pub status: TicketStatus,
    #[serde(default, deserialize_with = "lenient_priority")]
    pub priority: Option<Priority>,
    #[serde(default, alias = "createdBy", deserialize_with = "opt_string")]
    pub created_by: Option<String>,
    #[serde(default, alias = "assignedTo", deserialize_with = "opt_string")]
    pub assigned_to: Option<String>,
    #[serde(default, alias = "createdAt", deserialize_with = "opt_string")]
    pub created_at: Option<String>,
    #[serde(default, alias = "updatedAt", deserialize_with = "opt_string")]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub subject: Option<String>,
    #[serde(default, alias = "productName", alias = "currentProductName", deserialize_with = "opt_string")]
    pub product_name: Option<String>,
    #[serde(default, alias = "productId", deserialize_with = "opt_string")]
    pub product_id: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub quantity: Option<String>,
    #[serde(default, alias = "expectedNewPrice", deserialize_with = "opt_string")]
    pub expected_new_price: Option<String>,
    #[serde(default, alias = "expectedUnitPrice", deserialize_with = "opt_string")]
    pub expected_unit_price: Option<String>,
    #[serde(default, alias = "totalExpectedPrice", deserialize_with = "opt_string")]
    pub total_expected_price: Option<String>,
    #[serde(default, alias = "preferredSupplier", deserialize_with = "opt_string")]
    pub preferred_supplier: Option<String>,
    #[serde(
        default,
        alias = "expectedDeliveryDate",
        alias = "deliveryDate",
        alias = "delivery_date",
        deserialize_with = "opt_string"
    )]
    pub expected_delivery_date: Option<String>,
    #[serde(default, alias = "supportingDocs", deserialize_with = "string_list")]
    pub supporting_docs: Vec<String>,
}

fn lenient_priority<'de, D>(deserializer: D) -> Result<Option<Priority>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = opt_string(deserializer)?;
    Ok(raw.as_deref().and_then(Priority::parse))
}

impl Ticket {
    /// First characters of the id, as shown in tables and breadcrumbs.
    pub fn short_id(&self) -> &str {
        let end = self
            .id
            .char_indices()
            .nth(6)
            .map(|(i, _)| i)
            .unwrap_or(self.id.len());
        &self.id[..end]
    }

    /// Headline for tables: product name, then subject, then product id.
    pub fn headline(&self) -> &str {
        self.product_name
            .as_deref()
            .or(self.subject.as_deref())
            .or(self.product_id.as_deref())
            .unwrap_or("N/A")
    }
}

/// `GET /tickets?page&limit`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketPage {
    #[serde(default)]
    pub data: Vec<Ticket>,
    #[serde(default)]
    pub total: usize,
    #[serde(default = "one", rename = "totalPages", alias = "total_pages")]
    pub total_pages: usize,
}

/// `GET /tickets/:id` wraps the single ticket in a list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TicketEnvelope {
    #[serde(default)]
    pub tickets: Vec<Ticket>,
}

impl TicketEnvelope {
    pub fn into_ticket(self) -> Option<Ticket> {
        self.tickets.into_iter().next()
    }
}

/// Body of `PUT /tickets/:id/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: TicketStatus,
}

/// One entry of a ticket's conversation history. Never edited once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketResponse {
    #[serde(default, deserialize_with = "opt_string")]
    pub id: Option<String>,
    #[serde(default, alias = "ticketId", deserialize_with = "opt_string")]
    pub ticket_id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "string_list")]
    pub attachments: Vec<String>,
    #[serde(default, alias = "respondedBy", deserialize_with = "opt_string")]
    pub responded_by: Option<String>,
    #[serde(default, alias = "createdAt", deserialize_with = "opt_string")]
    pub created_at: Option<String>,
}

/// Tickets per status over a loaded page, for dashboard cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub completed: usize,
    pub closed: usize,
    pub other: usize,
}

impl StatusCounts {
    pub fn tally(tickets: &[Ticket]) -> Self {
        tickets.iter().fold(Self::default(), |mut acc, t| {
            match t.status {
                TicketStatus::Pending => acc.pending += 1,
                TicketStatus::Approved => acc.approved += 1,
                TicketStatus::Rejected => acc.rejected += 1,
                TicketStatus::Completed => acc.completed += 1,
                TicketStatus::Closed => acc.closed += 1,
                TicketStatus::Unknown => acc.other += 1,
            }
            acc
        })
    }

    pub fn get(&self, status: TicketStatus) -> usize {
        match status {
            TicketStatus::Pending => self.pending,
            TicketStatus::Approved => self.approved,
            TicketStatus::Rejected => self.rejected,
            TicketStatus::Completed => self.completed,
            TicketStatus::Closed => self.closed,
            TicketStatus::Unknown => self.other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAKE: &str = r#"{
        "id": "9f1c2d3e4b5a",
        "ticket_type": "new_product",
        "status": "pending",
        "priority": "High",
        "created_by": "u-17",
        "product_name": "Ceramic Mug",
        "subject": "Add mug",
        "expected_new_price": 4.5,
        "supporting_docs": "[\"https://cdn/x.png\"]",
        "created_at": "2024-03-15T14:02:26.123Z"
    }"#;

    const CAMEL: &str = r#"{
        "ticketId": 12,
        "ticketType": "bulk_order",
        "status": "approved",
        "createdBy": "u-3",
        "productId": "SKU-1",
        "quantity": 500,
        "expectedUnitPrice": "2.10",
        "deliveryDate": "2024-04-01",
        "supportingDocs": ["a.pdf"]
    }"#;

    #[test]
    fn decodes_snake_case_payload() {
        let t: Ticket = serde_json::from_str(SNAKE).unwrap();
        assert_eq!(t.ticket_type, TicketType::NewProduct);
        assert_eq!(t.priority, Some(Priority::High));
        assert_eq!(t.expected_new_price.as_deref(), Some("4.5"));
        assert_eq!(t.supporting_docs, vec!["https://cdn/x.png"]);
        assert_eq!(t.short_id(), "9f1c2d");
        assert_eq!(t.headline(), "Ceramic Mug");
    }

    #[test]
    fn decodes_camel_case_payload() {
        let t: Ticket = serde_json::from_str(CAMEL).unwrap();
        assert_eq!(t.id, "12");
        assert_eq!(t.ticket_type, TicketType::BulkOrder);
        assert_eq!(t.status, TicketStatus::Approved);
        assert_eq!(t.quantity.as_deref(), Some("500"));
        assert_eq!(t.expected_delivery_date.as_deref(), Some("2024-04-01"));
        assert_eq!(t.priority, None);
        assert_eq!(t.headline(), "SKU-1");
    }

    #[test]
    fn ticket_page_reads_total_pages() {
        let page: TicketPage =
            serde_json::from_str(&format!(r#"{{"data":[{SNAKE}],"total":21,"totalPages":3}}"#)).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.total, 21);
        assert_eq!(page.total_pages, 3);

        let empty: TicketPage = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.total_pages, 1);
    }

    #[test]
    fn row_without_status_keeps_the_page() {
        let bare = r#"{"id":"t-2","ticket_type":"bulk_order"}"#;
        let page: TicketPage = serde_json::from_str(&format!(r#"{{"data":[{SNAKE},{bare}]}}"#)).unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].status, TicketStatus::Pending);
        assert_eq!(page.data[1].status, TicketStatus::Unknown);
    }

    #[test]
    fn envelope_yields_first_ticket() {
        let env: TicketEnvelope = serde_json::from_str(&format!(r#"{{"tickets":[{SNAKE}]}}"#)).unwrap();
        assert_eq!(env.into_ticket().map(|t| t.id), Some("9f1c2d3e4b5a".to_string()));
        let none: TicketEnvelope = serde_json::from_str(r#"{"tickets":[]}"#).unwrap();
        assert!(none.into_ticket().is_none());
    }

    #[test]
    fn status_update_body() {
        let body = serde_json::to_string(&StatusUpdate { status: TicketStatus::Completed }).unwrap();
        assert_eq!(body, r#"{"status":"completed"}"#);
    }

    #[test]
    fn status_counts() {
        let mut a: Ticket = serde_json::from_str(SNAKE).unwrap();
        let b = a.clone();
        a.status = TicketStatus::Completed;
        let counts = StatusCounts::tally(&[a, b]);
        assert_eq!(counts.get(TicketStatus::Pending), 1);
        assert_eq!(counts.get(TicketStatus::Completed), 1);
        assert_eq!(counts.get(TicketStatus::Closed), 0);
    }

    #[test]
    fn type_helpers() {
        assert_eq!(TicketType::parse("EXISTING_PRODUCT"), Some(TicketType::ExistingProduct));
        assert_eq!(TicketType::BulkOrder.as_str(), "bulk_order");
        assert_eq!(TicketType::BulkOrder.to_string(), "Bulk Order");
    }
}
