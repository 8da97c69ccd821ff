use leptos::prelude::*;
use thaw::*;

/// Badge colour for a listing or account status.
pub fn status_badge_color(status: &str) -> BadgeColor {
    match status {
        "available" | "active" => BadgeColor::Success,
        "rented" | "booked" => BadgeColor::Informative,
        "closed" | "cancelled" | "inactive" => BadgeColor::Danger,
        _ => BadgeColor::Subtle,
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let color = status_badge_color(&status);
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color class="status-badge">
            {status}
        </Badge>
    }
}
