use leptos::prelude::*;

/// Column title as rendered inside a table header cell.
#[component]
pub fn HeaderCell(
    #[prop(into)] title: String,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let class = match class {
        Some(extra) if !extra.is_empty() => format!("header-cell {}", extra),
        _ => "header-cell".to_string(),
    };

    view! { <span class=class>{title}</span> }
}
