use leptos::prelude::*;

/// Stroke paths (24x24 viewBox) for each icon name.
fn paths(name: &str) -> &'static [&'static str] {
    match name {
        "layout-dashboard" => &["M3 3h7v9H3z", "M14 3h7v5h-7z", "M14 12h7v9h-7z", "M3 16h7v5H3z"],
        "ticket" => &[
            "M2 9a3 3 0 0 0 0 6v2a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2v-2a3 3 0 0 0 0-6V7a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2z",
            "M13 5v2", "M13 17v2", "M13 11v2",
        ],
        "inventory" => &["M3 3h7v7H3z", "M14 3h7v7h-7z", "M14 14h7v7h-7z", "M3 14h7v7H3z"],
        "package" => &[
            "M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z",
            "M3.27 6.96 12 12l8.73-5.04", "M12 22V12",
        ],
        "suppliers" => &["M3 22h18", "M6 22V8l6-5 6 5v14", "M9 13h6v9H9z"],
        "users" => &[
            "M17 21v-2a4 4 0 0 0-4-4H7a4 4 0 0 0-4 4v2",
            "M9 3a4 4 0 1 0 0 8 4 4 0 0 0 0-8z",
            "M23 21v-2a4 4 0 0 0-3-3.87", "M16 3.13a4 4 0 0 1 0 7.75",
        ],
        "user" => &["M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2", "M12 3a4 4 0 1 0 0 8 4 4 0 0 0 0-8z"],
        "plus" => &["M12 5v14", "M5 12h14"],
        "x" => &["M18 6 6 18", "M6 6l12 12"],
        "log-out" => &["M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4", "M16 17l5-5-5-5", "M21 12H9"],
        "panel-left-close" => &["M3 3h18v18H3z", "M9 3v18", "M16 15l-3-3 3-3"],
        "panel-left-open" => &["M3 3h18v18H3z", "M9 3v18", "M14 9l3 3-3 3"],
        "chevron-left" => &["M15 18l-6-6 6-6"],
        "chevron-right" => &["M9 18l6-6-6-6"],
        "arrow-left" => &["M19 12H5", "M12 19l-7-7 7-7"],
        "search" => &["M11 3a8 8 0 1 0 0 16 8 8 0 0 0 0-16z", "M21 21l-4.35-4.35"],
        "refresh" => &["M23 4v6h-6", "M1 20v-6h6", "M3.51 9a9 9 0 0 1 14.85-3.36L23 10M1 14l4.64 4.36A9 9 0 0 0 20.49 15"],
        "upload" => &["M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4", "M17 8l-5-5-5 5", "M12 3v12"],
        "file" => &["M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z", "M14 2v6h6"],
        "clock" => &["M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20z", "M12 6v6l4 2"],
        "check" => &["M20 6 9 17l-5-5"],
        "alert" => &["M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20z", "M12 8v4", "M12 16h.01"],
        "send" => &["M22 2 11 13", "M22 2l-7 20-4-9-9-4z"],
        "filter" => &["M22 3H2l8 9.46V19l4 2v-8.54z"],
        _ => &["M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20z", "M12 8v4l3 3"],
    }
}

pub fn icon(name: &str) -> AnyView {
    let size = if name.starts_with("chevron") { "16" } else { "20" };
    view! {
        <svg width=size height=size viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {paths(name).iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
    .into_any()
}
