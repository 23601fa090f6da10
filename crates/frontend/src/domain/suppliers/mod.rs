pub mod api;
pub mod ui;

use contracts::domain::suppliers::Supplier;

use crate::shared::list_utils::{any_field_contains, Searchable};

impl Searchable for Supplier {
    fn matches_filter(&self, needle: &str) -> bool {
        any_field_contains(
            [
                Some(self.company_name.as_str()),
                self.contact_person.as_deref(),
                self.email.as_deref(),
                self.phone_number.as_deref(),
            ],
            needle,
        )
    }
}

#[cfg(test)]
mod tests {
    use contracts::domain::suppliers::Supplier;

    use crate::shared::list_utils::filter_list;

    fn supplier(company: &str, contact: &str, email: &str, phone: &str) -> Supplier {
        serde_json::from_value(serde_json::json!({
            "id": 7,
            "company_name": company,
            "contact_person": contact,
            "email": email,
            "phone_number": phone,
        }))
        .unwrap()
    }

    #[test]
    fn search_covers_company_contact_email_and_phone() {
        let rows = vec![
            supplier("Acme Ceramics", "Dana Ortiz", "dana@acme.test", "555-0101"),
            supplier("Northwind Lighting", "Sam Lee", "sam@northwind.test", "555-0199"),
        ];
        assert_eq!(filter_list(&rows, "acme").len(), 1);
        assert_eq!(filter_list(&rows, "sam lee")[0].company_name, "Northwind Lighting");
        assert_eq!(filter_list(&rows, "NORTHWIND.test").len(), 1);
        assert_eq!(filter_list(&rows, "0199").len(), 1);
        assert_eq!(filter_list(&rows, "555").len(), 2);
        assert!(filter_list(&rows, "gst").is_empty());
    }
}
