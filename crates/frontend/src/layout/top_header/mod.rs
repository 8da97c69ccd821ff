//! Application top bar: sidebar toggle, brand and sign-out.

use crate::layout::global_context::use_layout;
use crate::shared::api_utils::SESSION_EXPIRED_URL;
use crate::shared::icons::icon;
use crate::system::auth::storage;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let layout = use_layout();
    let is_sidebar_visible = move || layout.left_open.get();

    let logout = move |_| {
        log::info!("signing out");
        storage::clear_tokens();
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(SESSION_EXPIRED_URL);
        }
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| layout.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Rentals Admin"</span>
            </div>

            <div class="top-header__actions">
                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </header>
    }
}
