//! Local list search shared by the ticket, product and supplier pages.
//!
//! Search only ever runs over rows already loaded in the browser; it never
//! triggers a request.

use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

pub trait Searchable {
    /// `needle` is already trimmed and lowercased.
    fn matches_filter(&self, needle: &str) -> bool;
}

/// Case-insensitive substring test over a set of optional fields.
pub fn any_field_contains<'a>(
    fields: impl IntoIterator<Item = Option<&'a str>>,
    needle: &str,
) -> bool {
    fields
        .into_iter()
        .flatten()
        .any(|f| f.to_lowercase().contains(needle))
}

pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Rows matching `query`; a blank query keeps everything.
pub fn filter_list<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(&needle))
        .cloned()
        .collect()
}

#[component]
pub fn SearchInput(
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <Input value=value placeholder=placeholder />
            <Show when=move || !value.get().is_empty()>
                <button class="search-input__clear" title="Clear" on:click=move |_| value.set(String::new())>
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str, Option<&'static str>);

    impl Searchable for Row {
        fn matches_filter(&self, needle: &str) -> bool {
            any_field_contains([Some(self.0), self.1], needle)
        }
    }

    #[test]
    fn blank_query_keeps_all_rows() {
        let rows = [Row("Mug", None), Row("Jar", Some("glass"))];
        assert_eq!(filter_list(&rows, "   ").len(), 2);
    }

    #[test]
    fn matching_is_case_insensitive_over_optional_fields() {
        let rows = [Row("Mug", None), Row("Jar", Some("Glass")), Row("Cup", Some("ceramic"))];
        assert_eq!(filter_list(&rows, "GLA"), vec![Row("Jar", Some("Glass"))]);
        assert_eq!(filter_list(&rows, " mug "), vec![Row("Mug", None)]);
        assert!(filter_list(&rows, "steel").is_empty());
    }
}
