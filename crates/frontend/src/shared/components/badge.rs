use contracts::domain::tickets::{Priority, TicketStatus};
use contracts::system::roles::Role;
use leptos::prelude::*;

pub fn status_class(status: TicketStatus) -> &'static str {
    match status {
        TicketStatus::Pending => "badge badge--warning",
        TicketStatus::Approved => "badge badge--info",
        TicketStatus::Rejected => "badge badge--error",
        TicketStatus::Completed => "badge badge--success",
        TicketStatus::Closed | TicketStatus::Unknown => "badge badge--neutral",
    }
}

fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "badge badge--error",
        Priority::Medium => "badge badge--warning",
        Priority::Low => "badge badge--success",
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] status: Signal<TicketStatus>) -> impl IntoView {
    view! {
        <span class=move || status_class(status.get())>{move || status.get().label()}</span>
    }
}

#[component]
pub fn PriorityBadge(priority: Option<Priority>) -> impl IntoView {
    match priority {
        Some(p) => view! { <span class=priority_class(p)>{p.label()}</span> }.into_any(),
        None => view! { <span class="badge badge--neutral">"N/A"</span> }.into_any(),
    }
}

#[component]
pub fn RoleBadge(role: Option<Role>) -> impl IntoView {
    let (class, label) = match role {
        Some(Role::Admin) => ("badge badge--error", "Admin"),
        Some(Role::Purchase) => ("badge badge--info", "Purchase"),
        Some(Role::Sales) => ("badge badge--success", "Sales"),
        None => ("badge badge--neutral", "Unassigned"),
    };
    view! { <span class=class>{label}</span> }
}
