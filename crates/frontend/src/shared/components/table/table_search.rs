//! Search box shown above a table, with a slot for filters and buttons.
//!
//! ```ignore
//! <TableSearch
//!     placeholder="Search vehicles..."
//!     on_search=Callback::new(move |text: String| set_query.set(text))
//!     on_refresh=Callback::new(move |_| client.invalidate(&key))
//! >
//!     <FilterSelect ... />
//! </TableSearch>
//! ```

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Quiet period before typed text is emitted.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

#[component]
pub fn TableSearch(
    /// Receives the trimmed search text
    #[prop(into)]
    on_search: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    /// Text shown on mount, e.g. restored from a filter store
    #[prop(optional, into)]
    initial: Option<String>,
    /// Shows a refresh button when set
    #[prop(optional)]
    on_refresh: Option<Callback<()>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Search...".to_string());
    let text = RwSignal::new(initial.unwrap_or_default());
    // replacing the pending timer drops and cancels it
    let pending = StoredValue::new_local(None::<Timeout>);

    let emit = move || {
        pending.set_value(None);
        on_search.run(text.get_untracked().trim().to_string());
    };

    let on_input = move |ev| {
        text.set(event_target_value(&ev));
        let timer = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            on_search.run(text.get_untracked().trim().to_string());
        });
        pending.set_value(Some(timer));
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            emit();
        }
    };

    let clear = move |_| {
        text.set(String::new());
        emit();
    };

    view! {
        <div class="table-search">
            <div class="table-search__box">
                <span class="table-search__icon">{icon("search")}</span>
                <input
                    type="text"
                    class="table-search__input"
                    placeholder=placeholder
                    prop:value=move || text.get()
                    on:input=on_input
                    on:keydown=on_keydown
                />
                <Show when=move || !text.with(String::is_empty)>
                    <button class="table-search__clear" on:click=clear title="Clear">
                        {icon("x")}
                    </button>
                </Show>
            </div>
            {on_refresh.map(|refresh| view! {
                <button class="button button--icon table-search__refresh" on:click=move |_| refresh.run(()) title="Refresh">
                    {icon("refresh")}
                </button>
            })}
            <div class="table-search__slot">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
