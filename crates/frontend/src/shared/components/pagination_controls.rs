use crate::shared::icons::icon;
use contracts::shared::paging::PAGER_WINDOW;
use leptos::prelude::*;

/// Page numbers to show: at most `width` consecutive pages centred on
/// `current` and clamped to `[1, total]`.
pub fn page_window(current: usize, total: usize, width: usize) -> Vec<usize> {
    let total = total.max(1);
    let width = width.clamp(1, total);
    let current = current.clamp(1, total);
    let start = current.saturating_sub(width / 2).max(1);
    let start = start.min(total + 1 - width);
    (start..start + width).collect()
}

/// Prev / numbered / next pager. Pages are 1-based.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let go = move |page: usize| {
        if page >= 1 && page <= total_pages.get_untracked().max(1) && page != current_page.get_untracked() {
            on_page_change.run(page);
        }
    };

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| go(current_page.get().saturating_sub(1))
                disabled=move || current_page.get() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
                " Previous"
            </button>
            {move || {
                let current = current_page.get();
                page_window(current, total_pages.get(), PAGER_WINDOW)
                    .into_iter()
                    .map(|page| view! {
                        <button
                            class="pagination-btn pagination-btn--page"
                            class:pagination-btn--active=page == current
                            on:click=move |_| go(page)
                        >
                            {page.to_string()}
                        </button>
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| go(current_page.get() + 1)
                disabled=move || current_page.get() >= total_pages.get().max(1)
                title="Next page"
            >
                "Next "
                {icon("chevron-right")}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_centred_and_clamped() {
        assert_eq!(page_window(1, 3, 5), [1, 2, 3]);
        assert_eq!(page_window(1, 10, 5), [1, 2, 3, 4, 5]);
        assert_eq!(page_window(6, 10, 5), [4, 5, 6, 7, 8]);
        assert_eq!(page_window(10, 10, 5), [6, 7, 8, 9, 10]);
        assert_eq!(page_window(9, 10, 5), [6, 7, 8, 9, 10]);
    }

    #[test]
    fn degenerate_inputs_still_show_page_one() {
        assert_eq!(page_window(0, 0, 5), [1]);
        assert_eq!(page_window(7, 2, 5), [1, 2]);
    }
}
