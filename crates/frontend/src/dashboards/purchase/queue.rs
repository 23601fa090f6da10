//! Row selection for the purchase queue.

use chrono::NaiveDateTime;
use contracts::domain::tickets::Ticket;

use crate::domain::tickets::filter::{is_assigned_to, QueueTab};
use crate::shared::date_utils::{due_text, parse_timestamp, urgency, Urgency};
use crate::shared::list_utils::{normalize_query, Searchable};

/// Cards shown under "Requires Your Response".
pub const RESPONSE_CARDS: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct ResponseCard {
    pub ticket: Ticket,
    pub urgency: Option<Urgency>,
}

/// Tickets assigned to `viewer` on the loaded page, in page order.
pub fn response_cards(page: &[Ticket], viewer: &str, now: NaiveDateTime) -> Vec<ResponseCard> {
    page.iter()
        .filter(|t| is_assigned_to(t, viewer))
        .take(RESPONSE_CARDS)
        .map(|t| ResponseCard {
            urgency: t
                .expected_delivery_date
                .as_deref()
                .and_then(parse_timestamp)
                .and_then(|due| urgency(due, now)),
            ticket: t.clone(),
        })
        .collect()
}

pub fn queue_rows(page: &[Ticket], tab: QueueTab, viewer: &str, query: &str) -> Vec<Ticket> {
    let needle = normalize_query(query);
    page.iter()
        .filter(|t| needle.is_empty() || t.matches_filter(&needle))
        .filter(|t| tab.admits(t, viewer))
        .cloned()
        .collect()
}

/// Status column text: due-date wording when a delivery date is known.
pub fn status_or_due(ticket: &Ticket, now: NaiveDateTime) -> String {
    match ticket.expected_delivery_date.as_deref().and_then(parse_timestamp) {
        Some(due) => due_text(due, now),
        None => ticket.status.queue_label().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tickets::filter::sample_ticket;
    use crate::shared::date_utils::Severity;
    use contracts::domain::tickets::{TicketStatus, TicketType};

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn assigned(id: &str, to: &str, due: Option<&str>) -> Ticket {
        let mut t = sample_ticket(id, "Mugs", TicketStatus::Pending, TicketType::BulkOrder);
        t.assigned_to = Some(to.to_string());
        t.expected_delivery_date = due.map(str::to_string);
        t
    }

    #[test]
    fn cards_are_limited_to_my_first_three() {
        let page = vec![
            assigned("a", "Ravi", None),
            assigned("b", "Mina", None),
            assigned("c", "Ravi", None),
            assigned("d", "Ravi", None),
            assigned("e", "Ravi", None),
        ];
        let cards = response_cards(&page, "Ravi", at("2024-03-10 09:00"));
        let ids: Vec<_> = cards.iter().map(|c| c.ticket.id.as_str()).collect();
        assert_eq!(ids, ["a", "c", "d"]);
        assert!(response_cards(&page, "", at("2024-03-10 09:00")).is_empty());
    }

    #[test]
    fn card_urgency_comes_from_delivery_date() {
        let page = vec![
            assigned("late", "Ravi", Some("2024-03-07")),
            assigned("far", "Ravi", Some("2024-04-01")),
        ];
        let cards = response_cards(&page, "Ravi", at("2024-03-10 09:00"));
        let late = cards[0].urgency.as_ref().unwrap();
        assert_eq!(late.severity, Severity::Critical);
        assert_eq!(late.text, "3 days overdue");
        assert_eq!(cards[1].urgency, None);
    }

    #[test]
    fn rows_combine_tab_and_search() {
        let mut approved = sample_ticket("x1", "Lamps", TicketStatus::Approved, TicketType::NewProduct);
        approved.assigned_to = Some("Ravi".into());
        let page = vec![
            sample_ticket("x2", "Mugs", TicketStatus::Pending, TicketType::BulkOrder),
            approved,
        ];
        assert_eq!(queue_rows(&page, QueueTab::All, "Ravi", "").len(), 2);
        assert_eq!(queue_rows(&page, QueueTab::AwaitingMe, "Ravi", "")[0].id, "x1");
        assert_eq!(queue_rows(&page, QueueTab::Pending, "Ravi", "lamp").len(), 0);
        assert_eq!(queue_rows(&page, QueueTab::All, "Ravi", "MUG")[0].id, "x2");
    }

    #[test]
    fn status_column_prefers_due_text() {
        let now = at("2024-03-10 09:00");
        let t = assigned("a", "Ravi", Some("2024-03-11"));
        assert_eq!(status_or_due(&t, now), "Due: Tomorrow");
        let t = assigned("b", "Ravi", None);
        assert_eq!(status_or_due(&t, now), "Waiting for price");
    }
}
