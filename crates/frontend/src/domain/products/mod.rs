pub mod api;
pub mod ui;

use contracts::domain::products::Product;

use crate::shared::list_utils::{any_field_contains, Searchable};

impl Searchable for Product {
    fn matches_filter(&self, needle: &str) -> bool {
        any_field_contains(
            [self.name.as_deref(), self.sku.as_deref(), self.category.as_deref()],
            needle,
        )
    }
}

#[cfg(test)]
mod tests {
    use contracts::domain::products::Product;

    use crate::shared::list_utils::filter_list;

    fn product(name: &str, sku: &str, category: &str) -> Product {
        serde_json::from_value(serde_json::json!({
            "id": sku,
            "product_name": name,
            "sku": sku,
            "category": category,
        }))
        .unwrap()
    }

    #[test]
    fn search_covers_name_sku_and_category() {
        let items = vec![
            product("Travel Mug", "MUG-01", "Kitchen"),
            product("Desk Lamp", "LMP-07", "Lighting"),
        ];
        assert_eq!(filter_list(&items, "mug").len(), 1);
        assert_eq!(filter_list(&items, "lmp-07")[0].display_name(), "Desk Lamp");
        assert_eq!(filter_list(&items, "  LIGHT ").len(), 1);
        assert_eq!(filter_list(&items, "").len(), 2);
        assert!(filter_list(&items, "garden").is_empty());
    }
}
