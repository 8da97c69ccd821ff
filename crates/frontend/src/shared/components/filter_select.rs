use leptos::prelude::*;

/// Value the "All" option maps to.
pub const ANY: &str = "";

/// Empty selection means "no filter".
pub fn selection_to_filter(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Dropdown filter with a leading "All" entry. Emits `None` when cleared.
#[component]
pub fn FilterSelect(
    #[prop(into)] label: String,
    /// `(value, label)` pairs
    options: Vec<(String, String)>,
    #[prop(into)] value: Signal<Option<String>>,
    on_change: Callback<Option<String>>,
) -> impl IntoView {
    let all_label = format!("All {}", label.to_lowercase());

    view! {
        <label class="filter-select">
            <span class="filter-select__label">{label}</span>
            <select
                class="form__select"
                prop:value=move || value.get().unwrap_or_default()
                on:change=move |ev| on_change.run(selection_to_filter(&event_target_value(&ev)))
            >
                <option value=ANY>{all_label}</option>
                {options.into_iter().map(|(option_value, option_label)| {
                    let current = option_value.clone();
                    view! {
                        <option
                            value=option_value
                            selected=move || value.with(|v| v.as_deref() == Some(current.as_str()))
                        >
                            {option_label}
                        </option>
                    }
                }).collect_view()}
            </select>
        </label>
    }
}
