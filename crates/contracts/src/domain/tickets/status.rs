use serde::{Deserialize, Serialize};
use std::fmt;

use crate::system::roles::Role;

/// Ticket workflow state.
///
/// Backend-driven transitions: `pending -> approved | rejected`,
/// `approved | pending -> completed`, `any -> closed`. The client drives only
/// the move to `completed`, through [`TicketStatus::close`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
    Closed,
    /// Any state this client does not model (`in_progress`, `quote_received`).
    #[default]
    #[serde(other)]
    Unknown,
}

impl TicketStatus {
    pub const FILTERABLE: [TicketStatus; 5] = [
        TicketStatus::Pending,
        TicketStatus::Approved,
        TicketStatus::Rejected,
        TicketStatus::Completed,
        TicketStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Pending => "pending",
            TicketStatus::Approved => "approved",
            TicketStatus::Rejected => "rejected",
            TicketStatus::Completed => "completed",
            TicketStatus::Closed => "closed",
            TicketStatus::Unknown => "unknown",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::FILTERABLE
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(value.trim()))
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Pending => "Pending",
            TicketStatus::Approved => "Approved",
            TicketStatus::Rejected => "Rejected",
            TicketStatus::Completed => "Completed",
            TicketStatus::Closed => "Closed",
            TicketStatus::Unknown => "Unknown",
        }
    }

    /// Wording used on the purchase queue, which reads from the buyer's side.
    pub fn queue_label(&self) -> &'static str {
        match self {
            TicketStatus::Pending => "Waiting for price",
            other => other.label(),
        }
    }

    /// Responses and the close action are both gated on this one predicate.
    pub fn is_open(&self) -> bool {
        !matches!(self, TicketStatus::Completed)
    }

    /// Status after the "Close Ticket" action, or `None` when the ticket is
    /// already completed.
    pub fn close(self) -> Option<TicketStatus> {
        self.is_open().then_some(TicketStatus::Completed)
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the current viewer may do with a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketAffordances {
    pub can_close: bool,
    pub can_respond: bool,
}

impl TicketAffordances {
    /// `status` is `None` until the ticket has loaded; nothing is offered then.
    pub fn for_viewer(role: Option<Role>, status: Option<TicketStatus>) -> Self {
        let open = status.is_some_and(|s| s.is_open());
        Self {
            can_close: open && role == Some(Role::Sales),
            can_respond: open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [TicketStatus; 6] = [
        TicketStatus::Pending,
        TicketStatus::Approved,
        TicketStatus::Rejected,
        TicketStatus::Completed,
        TicketStatus::Closed,
        TicketStatus::Unknown,
    ];

    #[test]
    fn closing_moves_every_open_status_to_completed() {
        for status in ALL {
            if status == TicketStatus::Completed {
                assert_eq!(status.close(), None);
            } else {
                assert_eq!(status.close(), Some(TicketStatus::Completed));
            }
        }
    }

    #[test]
    fn after_closing_nothing_is_offered() {
        for role in [None, Some(Role::Sales), Some(Role::Purchase), Some(Role::Admin)] {
            for status in ALL {
                if let Some(next) = status.close() {
                    let after = TicketAffordances::for_viewer(role, Some(next));
                    assert!(!after.can_close);
                    assert!(!after.can_respond);
                }
            }
        }
    }

    #[test]
    fn only_sales_may_close() {
        let sales = TicketAffordances::for_viewer(Some(Role::Sales), Some(TicketStatus::Pending));
        assert!(sales.can_close && sales.can_respond);

        let purchase = TicketAffordances::for_viewer(Some(Role::Purchase), Some(TicketStatus::Pending));
        assert!(!purchase.can_close);
        assert!(purchase.can_respond);

        let nobody = TicketAffordances::for_viewer(None, Some(TicketStatus::Approved));
        assert!(!nobody.can_close);
    }

    #[test]
    fn close_and_respond_gates_agree_on_openness() {
        for status in ALL {
            let a = TicketAffordances::for_viewer(Some(Role::Sales), Some(status));
            assert_eq!(a.can_close, a.can_respond);
        }
    }

    #[test]
    fn unloaded_ticket_offers_nothing() {
        for role in [None, Some(Role::Sales), Some(Role::Purchase), Some(Role::Admin)] {
            let a = TicketAffordances::for_viewer(role, None);
            assert!(!a.can_close);
            assert!(!a.can_respond);
        }
    }

    #[test]
    fn unmodelled_wire_values_deserialize_as_unknown() {
        let s: TicketStatus = serde_json::from_str("\"in_progress\"").unwrap();
        assert_eq!(s, TicketStatus::Unknown);
        let s: TicketStatus = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(s, TicketStatus::Rejected);
    }

    #[test]
    fn labels() {
        assert_eq!(TicketStatus::Completed.to_string(), "Completed");
        assert_eq!(TicketStatus::Pending.queue_label(), "Waiting for price");
        assert_eq!(TicketStatus::parse("Approved"), Some(TicketStatus::Approved));
        assert_eq!(TicketStatus::parse("unknown"), None);
    }
}
