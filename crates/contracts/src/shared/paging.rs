use serde::{Deserialize, Serialize};

/// Rows per server page on the sales ticket list and the admin overview.
pub const TICKETS_PAGE_LIMIT: usize = 10;
/// The purchase queue shows a short page so the newest requests stay on top.
pub const PURCHASE_QUEUE_LIMIT: usize = 3;
pub const SUPPLIERS_PAGE_LIMIT: usize = 8;
/// Inventory is paged client-side over the full product list.
pub const INVENTORY_PAGE_SIZE: usize = 10;
/// Number of page buttons rendered by the pager.
pub const PAGER_WINDOW: usize = 5;

/// `?page=&limit=` query. Pages are 1-based on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: usize,
    pub limit: usize,
}

impl PageQuery {
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }
}

/// Number of pages needed for `total` rows; never less than one so the pager
/// always has a current page to highlight.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 || total == 0 {
        return 1;
    }
    total.div_ceil(page_size)
}

/// Rows of `items` on 1-based `page`. Out-of-range pages are empty.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(items.len());
    items.get(start..end).unwrap_or(&[])
}

pub(crate) fn one() -> usize {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up_and_has_a_floor_of_one() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(5, 0), 1);
    }

    #[test]
    fn page_slice_is_one_based() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(page_slice(&items, 1, 10), &items[0..10]);
        assert_eq!(page_slice(&items, 3, 10), &items[20..25]);
        assert!(page_slice(&items, 4, 10).is_empty());
        assert_eq!(page_slice(&items, 0, 10), &items[0..10]);
    }

    #[test]
    fn page_query_clamps_to_first_page() {
        assert_eq!(PageQuery::new(0, 0), PageQuery { page: 1, limit: 1 });
    }
}
