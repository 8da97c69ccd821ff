use crate::layout::global_context::use_layout;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let layout = use_layout();
    let is_open = move || layout.left_open.get();

    view! {
        <aside data-zone="left" class="left" class:hidden=move || !is_open()>
            {children()}
        </aside>
    }
}
