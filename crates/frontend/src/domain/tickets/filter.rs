//! Page-local ticket filtering. Only rows of the currently loaded page are
//! ever considered; changing a filter never triggers a request.

use contracts::domain::tickets::{Ticket, TicketStatus, TicketType};

use crate::shared::list_utils::{any_field_contains, normalize_query, Searchable};

impl Searchable for Ticket {
    fn matches_filter(&self, needle: &str) -> bool {
        any_field_contains(
            [
                Some(self.id.as_str()),
                self.subject.as_deref(),
                self.product_name.as_deref(),
                self.created_by.as_deref(),
            ],
            needle,
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TicketFilter {
    pub query: String,
    pub ticket_type: Option<TicketType>,
    pub status: Option<TicketStatus>,
}

impl TicketFilter {
    pub fn admits(&self, ticket: &Ticket) -> bool {
        let needle = normalize_query(&self.query);
        (needle.is_empty() || ticket.matches_filter(&needle))
            && self.ticket_type.map_or(true, |t| t == ticket.ticket_type)
            && self.status.map_or(true, |s| s == ticket.status)
    }

    pub fn apply(&self, page: &[Ticket]) -> Vec<Ticket> {
        page.iter().filter(|t| self.admits(t)).cloned().collect()
    }
}

/// Tabs on the purchase queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueueTab {
    All,
    AwaitingMe,
    Pending,
    Approved,
    Completed,
}

impl QueueTab {
    pub const ALL: [QueueTab; 5] = [
        QueueTab::All,
        QueueTab::AwaitingMe,
        QueueTab::Pending,
        QueueTab::Approved,
        QueueTab::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QueueTab::All => "All",
            QueueTab::AwaitingMe => "Awaiting Me",
            QueueTab::Pending => "Pending",
            QueueTab::Approved => "Approved",
            QueueTab::Completed => "Completed",
        }
    }

    /// `viewer` is the display name tickets are assigned by.
    pub fn admits(&self, ticket: &Ticket, viewer: &str) -> bool {
        match self {
            QueueTab::All => true,
            QueueTab::AwaitingMe => is_assigned_to(ticket, viewer),
            QueueTab::Pending => ticket.status == TicketStatus::Pending,
            QueueTab::Approved => ticket.status == TicketStatus::Approved,
            QueueTab::Completed => ticket.status == TicketStatus::Completed,
        }
    }
}

pub fn is_assigned_to(ticket: &Ticket, viewer: &str) -> bool {
    !viewer.trim().is_empty() && ticket.assigned_to.as_deref() == Some(viewer)
}

#[cfg(test)]
pub(crate) fn sample_ticket(id: &str, subject: &str, status: TicketStatus, ticket_type: TicketType) -> Ticket {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "ticket_type": ticket_type.as_str(),
        "status": status.as_str(),
        "subject": subject,
        "created_by": "Asha",
    }))
    .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<Ticket> {
        vec![
            sample_ticket("t-1", "Steel mugs", TicketStatus::Pending, TicketType::NewProduct),
            sample_ticket("t-2", "Glass jars", TicketStatus::Approved, TicketType::BulkOrder),
            sample_ticket("t-3", "Mug price update", TicketStatus::Completed, TicketType::ExistingProduct),
        ]
    }

    #[test]
    fn query_matches_m_of_n_rows_case_insensitively() {
        let filter = TicketFilter { query: "MUG".into(), ..Default::default() };
        let ids: Vec<_> = filter.apply(&page()).into_iter().map(|t| t.id).collect();
        assert_eq!(ids, ["t-1", "t-3"]);
    }

    #[test]
    fn query_also_matches_id_and_creator() {
        let by_id = TicketFilter { query: "t-2".into(), ..Default::default() };
        assert_eq!(by_id.apply(&page()).len(), 1);
        let by_creator = TicketFilter { query: "asha".into(), ..Default::default() };
        assert_eq!(by_creator.apply(&page()).len(), 3);
    }

    #[test]
    fn type_and_status_intersect_with_query() {
        let filter = TicketFilter {
            query: "mug".into(),
            ticket_type: Some(TicketType::ExistingProduct),
            status: None,
        };
        assert_eq!(filter.apply(&page()).len(), 1);

        let filter = TicketFilter {
            status: Some(TicketStatus::Rejected),
            ..Default::default()
        };
        assert!(filter.apply(&page()).is_empty());
    }

    #[test]
    fn no_match_on_loaded_page_is_empty_even_if_other_pages_exist() {
        let filter = TicketFilter { query: "printer".into(), ..Default::default() };
        assert!(filter.apply(&page()).is_empty());
    }

    #[test]
    fn queue_tabs() {
        let mut t = sample_ticket("t-9", "x", TicketStatus::Pending, TicketType::NewProduct);
        assert!(QueueTab::Pending.admits(&t, "Ravi"));
        assert!(!QueueTab::AwaitingMe.admits(&t, "Ravi"));
        t.assigned_to = Some("Ravi".into());
        assert!(QueueTab::AwaitingMe.admits(&t, "Ravi"));
        assert!(!QueueTab::AwaitingMe.admits(&t, ""));
        assert!(!QueueTab::Completed.admits(&t, "Ravi"));
    }
}
