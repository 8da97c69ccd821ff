use leptos::prelude::*;

/// Title row of a list page, with an optional live subtitle and an actions slot.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    /// e.g. "47 listings"
    #[prop(optional, into)]
    subtitle: Option<Signal<String>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-text">
                <h1 class="page__title">{title}</h1>
                {subtitle.map(|s| view! {
                    <div class="page__subtitle">{move || s.get()}</div>
                })}
            </div>
            <div class="page__header-actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
