use serde::{Deserialize, Serialize};

use crate::shared::paging::one;
use crate::shared::serde_helpers::{opt_string, string_id};
use crate::shared::validation::{require, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(deserialize_with = "string_id")]
    pub id: String,
    #[serde(default, alias = "companyName")]
    pub company_name: String,
    #[serde(default, alias = "contactPerson", deserialize_with = "opt_string")]
    pub contact_person: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub gst: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub address: Option<String>,
    #[serde(default, alias = "emailAddress", deserialize_with = "opt_string")]
    pub email: Option<String>,
    #[serde(default, alias = "phoneNumber", deserialize_with = "opt_string")]
    pub phone_number: Option<String>,
    #[serde(default, alias = "websiteUrl", deserialize_with = "opt_string")]
    pub website_url: Option<String>,
    #[serde(default, alias = "productsServices", deserialize_with = "opt_string")]
    pub products_services: Option<String>,
}

/// `GET /suppliers?page&limit`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierPage {
    #[serde(default)]
    pub suppliers: Vec<Supplier>,
    #[serde(default = "one", rename = "totalPages", alias = "total_pages")]
    pub total_pages: usize,
}

/// Body of `POST /suppliers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierDraft {
    pub company_name: String,
    pub contact_person: String,
    pub gst: String,
    pub address: String,
    pub email: String,
    pub phone_number: String,
    pub website_url: String,
    pub products_services: String,
}

impl SupplierDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("a company name", &self.company_name)?;
        require("a contact person", &self.contact_person)?;
        if !self.email.trim().is_empty() && !self.email.contains('@') {
            return Err(ValidationError::Invalid {
                field: "Email",
                expected: "a valid email address",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supplier_page_with_camel_case_rows() {
        let page: SupplierPage = serde_json::from_str(
            r#"{"page":2,"limit":8,"totalPages":4,"suppliers":[{"id":5,"companyName":"Acme","phoneNumber":5551234}]}"#,
        )
        .unwrap();
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.suppliers[0].company_name, "Acme");
        assert_eq!(page.suppliers[0].phone_number.as_deref(), Some("5551234"));
    }

    #[test]
    fn missing_suppliers_key_is_an_empty_page() {
        let page: SupplierPage = serde_json::from_str(r#"{"items":[]}"#).unwrap();
        assert!(page.suppliers.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn draft_requires_company_and_contact() {
        let mut d = SupplierDraft::default();
        assert_eq!(d.validate(), Err(ValidationError::Missing("a company name")));
        d.company_name = "Acme".into();
        d.contact_person = "Ravi".into();
        d.email = "nope".into();
        assert!(d.validate().is_err());
        d.email = "ravi@acme.io".into();
        assert!(d.validate().is_ok());
    }
}
