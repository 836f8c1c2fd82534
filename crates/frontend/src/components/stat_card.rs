//! Statistics card component.

use yew::prelude::*;

/// Properties for StatCard component.
#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub value: AttrValue,
    pub label: AttrValue,
    /// Colour variant, e.g. "blue" or "green"
    #[prop_or_default]
    pub tone: Option<&'static str>,
}

/// Statistics card component.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let class = classes!("stat-card", props.tone);

    html! {
        <div class={class}>
            <div class="stat-label">{ &props.label }</div>
            <div class="stat-value">{ &props.value }</div>
        </div>
    }
}

/// Percentage text for a stat card, "-" when there is nothing to show.
pub fn percent_label(value: Option<u32>) -> String {
    value
        .map(|v| format!("{v}%"))
        .unwrap_or_else(|| "-".to_string())
}
