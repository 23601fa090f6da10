use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn class(&self) -> &'static str {
        match self {
            Tone::Neutral => "stat-card",
            Tone::Info => "stat-card stat-card--info",
            Tone::Success => "stat-card stat-card--success",
            Tone::Warning => "stat-card stat-card--warning",
            Tone::Error => "stat-card stat-card--error",
        }
    }
}

/// Count tile on the dashboards. `None` renders a dash while loading.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    icon_name: &'static str,
    #[prop(into)] value: Signal<Option<usize>>,
    #[prop(optional)] tone: Option<Tone>,
) -> impl IntoView {
    let tone = tone.unwrap_or(Tone::Neutral);
    view! {
        <div class=tone.class()>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || value.get().map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())}
                </div>
            </div>
        </div>
    }
}
