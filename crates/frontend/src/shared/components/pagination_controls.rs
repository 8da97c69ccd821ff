use crate::shared::icons::icon;
use leptos::prelude::*;

/// Most page buttons shown at once.
pub const MAX_PAGE_BUTTONS: u64 = 5;

/// Page sizes offered in the size selector.
pub const PAGE_SIZE_OPTIONS: [u64; 4] = [10, 20, 50, 100];

/// Controlled pagination: the caller owns `current` and `page_size` and
/// clamps `current` to the valid range.
#[derive(Clone, Copy)]
pub struct PaginationOptions {
    pub total: Signal<u64>,
    /// 1-based page index.
    pub current: Signal<u64>,
    pub page_size: Signal<u64>,
    pub on_change: Callback<u64>,
    pub on_page_size_change: Option<Callback<u64>>,
}

/// `ceil(total / page_size)`; zero when there is nothing to show.
pub fn total_pages(total: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Page numbers to render as buttons, keeping `current` inside a window of
/// at most [`MAX_PAGE_BUTTONS`].
pub fn page_window(current: u64, total_pages: u64) -> Vec<u64> {
    let max = MAX_PAGE_BUTTONS;
    if total_pages <= max {
        (1..=total_pages).collect()
    } else if current <= 3 {
        (1..=max).collect()
    } else if current >= total_pages - 2 {
        (total_pages - max + 1..=total_pages).collect()
    } else {
        (current - 2..=current + 2).collect()
    }
}

pub fn prev_disabled(current: u64) -> bool {
    current <= 1
}

pub fn next_disabled(current: u64, total_pages: u64) -> bool {
    total_pages == 0 || current >= total_pages
}

/// "Showing 21 to 40 of 47 results"
pub fn range_summary(current: u64, page_size: u64, total: u64) -> String {
    let from = current.saturating_sub(1) * page_size + 1;
    let to = (current * page_size).min(total);
    format!("Showing {} to {} of {} results", from, to, total)
}

/// Page-number control rendered under `AdminTable`.
#[component]
pub fn PaginationControls(options: PaginationOptions) -> impl IntoView {
    let PaginationOptions {
        total,
        current,
        page_size,
        on_change,
        on_page_size_change,
    } = options;

    let pages = move || total_pages(total.get(), page_size.get());

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || range_summary(current.get(), page_size.get(), total.get())}
            </span>

            <div class="pagination-actions">
                {on_page_size_change.map(|on_size| view! {
                    <select
                        class="page-size-select"
                        on:change=move |ev| {
                            if let Ok(size) = event_target_value(&ev).parse::<u64>() {
                                on_size.run(size);
                            }
                        }
                        prop:value=move || page_size.get().to_string()
                    >
                        {PAGE_SIZE_OPTIONS.iter().map(|&size| {
                            view! {
                                <option value=size.to_string() selected=move || page_size.get() == size>
                                    {format!("{} / page", size)}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                })}

                <button
                    class="pagination-btn"
                    on:click=move |_| on_change.run(current.get().saturating_sub(1).max(1))
                    disabled=move || prev_disabled(current.get())
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>

                {move || {
                    let active = current.get();
                    page_window(active, pages())
                        .into_iter()
                        .map(|num| {
                            let class = if num == active {
                                "pagination-btn pagination-btn--active"
                            } else {
                                "pagination-btn"
                            };
                            view! {
                                <button class=class on:click=move |_| on_change.run(num)>
                                    {num.to_string()}
                                </button>
                            }
                        })
                        .collect_view()
                }}

                <button
                    class="pagination-btn"
                    on:click=move |_| on_change.run((current.get() + 1).min(pages()))
                    disabled=move || next_disabled(current.get(), pages())
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>
            </div>
        </div>
    }
}
