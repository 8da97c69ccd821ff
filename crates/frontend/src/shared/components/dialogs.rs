//! Confirmation dialogs driven by `ListingActions` and the account pages.
//!
//! Each dialog is mounted only while `open` is true, so its local state
//! (e.g. the selected status) starts fresh every time it opens.

use contracts::listings::LISTING_STATUSES;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Confirm is enabled only for a real change that is not already running.
pub fn can_confirm_status(selected: &str, current: &str, is_loading: bool) -> bool {
    !selected.is_empty() && selected != current && !is_loading
}

pub fn toggle_label(is_active: bool) -> &'static str {
    if is_active {
        "Disable"
    } else {
        "Enable"
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Overlay + panel shared by the dialogs. Escape and overlay clicks cancel
/// unless a request is running.
#[component]
fn DialogFrame(
    title: String,
    description: String,
    #[prop(into)] is_loading: Signal<bool>,
    on_cancel: Callback<()>,
    children: Children,
) -> impl IntoView {
    let cancel = move || {
        if !is_loading.get_untracked() {
            on_cancel.run(());
        }
    };

    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            cancel();
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
        <div class="modal-overlay" on:click=move |_| cancel()>
            <div
                class="modal modal--dialog"
                role="alertdialog"
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| cancel()>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    <p class="modal-description">{description}</p>
                    {children()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn DeleteConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] is_loading: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    /// Used in the default description, e.g. "this vehicle"
    #[prop(optional, into)]
    item_name: Option<String>,
) -> impl IntoView {
    let title = title.unwrap_or_else(|| "Are you sure?".to_string());
    let item_name = item_name.unwrap_or_else(|| "this item".to_string());
    let description = description.unwrap_or_else(|| {
        format!(
            "This action cannot be undone. This will permanently delete {}.",
            item_name
        )
    });

    view! {
        <Show when=move || open.get()>
            <DialogFrame
                title=title.clone()
                description=description.clone()
                is_loading=is_loading
                on_cancel=on_cancel
            >
                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                        disabled=is_loading
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        class="button--danger"
                        on_click=move |_| on_confirm.run(())
                        disabled=is_loading
                    >
                        {icon("trash")}
                        {move || if is_loading.get() { " Deleting..." } else { " Delete" }}
                    </Button>
                </div>
            </DialogFrame>
        </Show>
    }
}

#[component]
pub fn UpdateStatusDialog(
    #[prop(into)] open: Signal<bool>,
    /// Status of the row being edited; the selection starts here
    #[prop(into)]
    current_status: Signal<String>,
    #[prop(into)] is_loading: Signal<bool>,
    on_confirm: Callback<String>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] options: Option<&'static [&'static str]>,
) -> impl IntoView {
    let title = title.unwrap_or_else(|| "Update Status".to_string());
    let description = description.unwrap_or_else(|| "Change the status of this item".to_string());
    let options = options.unwrap_or(&LISTING_STATUSES);

    view! {
        <Show when=move || open.get()>
            {
                let selected = RwSignal::new(current_status.get_untracked());
                let confirm_disabled = Signal::derive(move || {
                    !can_confirm_status(&selected.get(), &current_status.get(), is_loading.get())
                });
                let confirm = move |_| {
                    let value = selected.get_untracked();
                    if can_confirm_status(&value, &current_status.get_untracked(), is_loading.get_untracked()) {
                        on_confirm.run(value);
                    }
                };

                view! {
                    <DialogFrame
                        title=title.clone()
                        description=description.clone()
                        is_loading=is_loading
                        on_cancel=on_cancel
                    >
                        <div class="form__group">
                            <label class="form__label" for="status-select">"Select New Status"</label>
                            <select
                                id="status-select"
                                class="form__select"
                                disabled=move || is_loading.get()
                                prop:value=move || selected.get()
                                on:change=move |ev| selected.set(event_target_value(&ev))
                            >
                                {options.iter().map(|&status| view! {
                                    <option value=status selected=move || selected.get() == status>
                                        {capitalize(status)}
                                    </option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="modal-footer">
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| on_cancel.run(())
                                disabled=is_loading
                            >
                                "Cancel"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=confirm
                                disabled=confirm_disabled
                            >
                                {move || if is_loading.get() { "Updating..." } else { "Update Status" }}
                            </Button>
                        </div>
                    </DialogFrame>
                }
            }
        </Show>
    }
}

#[component]
pub fn EnableDisableDialog(
    #[prop(into)] open: Signal<bool>,
    /// Current state of the account; confirming flips it
    #[prop(into)]
    is_active: Signal<bool>,
    #[prop(into)] is_loading: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] item_name: Option<String>,
) -> impl IntoView {
    let title = title.unwrap_or_else(|| "Are you sure?".to_string());
    let item_name = item_name.unwrap_or_else(|| "this account".to_string());

    view! {
        <Show when=move || open.get()>
            {
                let active = is_active.get_untracked();
                let description = format!(
                    "This will {} {}.",
                    toggle_label(active).to_lowercase(),
                    item_name
                );
                let class = if active { "button--danger" } else { "button--success" };

                view! {
                    <DialogFrame
                        title=title.clone()
                        description=description
                        is_loading=is_loading
                        on_cancel=on_cancel
                    >
                        <div class="modal-footer">
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| on_cancel.run(())
                                disabled=is_loading
                            >
                                "Cancel"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                class=class
                                on_click=move |_| on_confirm.run(())
                                disabled=is_loading
                            >
                                {icon("power")}
                                {format!(" {}", toggle_label(active))}
                            </Button>
                        </div>
                    </DialogFrame>
                }
            }
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_confirm_requires_change() {
        assert!(!can_confirm_status("available", "available", false));
        assert!(can_confirm_status("closed", "available", false));
    }

    #[test]
    fn test_status_confirm_blocked_while_loading_or_empty() {
        assert!(!can_confirm_status("closed", "available", true));
        assert!(!can_confirm_status("", "available", false));
    }

    #[test]
    fn test_toggle_label() {
        assert_eq!(toggle_label(true), "Disable");
        assert_eq!(toggle_label(false), "Enable");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("deactivated"), "Deactivated");
        assert_eq!(capitalize(""), "");
    }
}
