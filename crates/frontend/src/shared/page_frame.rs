//! Root wrapper for every routed page.
//!
//! The root element carries `id = "{entity}--{category}"` and
//! `data-page-category`, e.g. `id="vehicles--list"`.
//!
//! ```ignore
//! view! {
//!     <PageFrame page_id="users--list" category=PAGE_CAT_ACCOUNTS>
//!         <div class="page__header">...</div>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use leptos::prelude::*;

/// Listing moderation table.
pub const PAGE_CAT_LIST: &str = "list";

/// User or admin account table.
pub const PAGE_CAT_ACCOUNTS: &str = "accounts";

/// `{entity}--{category}` with both parts non-empty.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, category)) if !entity.is_empty() && !category.is_empty())
}

#[component]
pub fn PageFrame(
    #[prop(into)] page_id: String,
    category: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(&page_id), "bad page id: {}", page_id);

    let base_class = match category {
        PAGE_CAT_ACCOUNTS => "page page--accounts",
        _ => "page",
    };
    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("vehicles--list"));
        assert!(is_valid_page_id("users--accounts"));
        assert!(!is_valid_page_id("vehicles"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("vehicles--"));
    }
}
