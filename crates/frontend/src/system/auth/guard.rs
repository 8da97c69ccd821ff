use contracts::accounts::UserRole;
use leptos::prelude::*;

use super::storage;
use crate::shared::api_utils::SESSION_EXPIRED_URL;

/// Role needed to open the dashboard.
pub const REQUIRED_ROLE: UserRole = UserRole::Admin;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAccess {
    Granted,
    SignedOut,
    Forbidden,
}

/// A stored token is required. A stored role below [`REQUIRED_ROLE`] is
/// refused; a missing role is left to the API to enforce.
pub fn session_access(token: Option<&str>, role: Option<UserRole>) -> SessionAccess {
    match (token, role) {
        (None, _) => SessionAccess::SignedOut,
        (Some(_), Some(role)) if !role.can_access(REQUIRED_ROLE) => SessionAccess::Forbidden,
        (Some(_), _) => SessionAccess::Granted,
    }
}

/// Renders children only for a signed-in staff session. Sign-in itself is
/// served outside this app.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let access = session_access(storage::get_access_token().as_deref(), storage::get_role());
    if access != SessionAccess::Granted {
        log::info!("dashboard access refused: {:?}", access);
    }

    view! {
        <Show
            when=move || access == SessionAccess::Granted
            fallback=move || match access {
                SessionAccess::Forbidden => view! {
                    <div class="alert alert--error">
                        "This account does not have access to the admin dashboard."
                    </div>
                }
                .into_any(),
                _ => view! {
                    <div class="alert alert--error">
                        "Not authenticated. Sign in through the marketplace login page, then reload this dashboard. "
                        <a href=SESSION_EXPIRED_URL>"Go to sign-in"</a>
                    </div>
                }
                .into_any(),
            }
        >
            {children()}
        </Show>
    }
}
