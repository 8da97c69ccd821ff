use std::rc::Rc;

use contracts::category::Category;
use contracts::listings::LISTING_STATUSES;
use leptos::prelude::*;
use thaw::*;

use crate::domain::listings::api::{search_params, ListingsApi};
use crate::domain::listings::columns::listing_columns;
use crate::domain::listings::filters::use_listing_filters;
use crate::domain::listings::options::{sub_categories, CITIES};
use crate::shared::components::dialogs::{DeleteConfirmDialog, UpdateStatusDialog};
use crate::shared::components::filter_select::FilterSelect;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationOptions;
use crate::shared::components::table::{AdminTable, RowClass, TableSearch};
use crate::shared::list_state::create_state;
use crate::shared::listing_actions::{use_listing_actions, ListingActionsOptions};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::paged_query::{use_page_clamp, use_paged_query};
use crate::shared::query_cache::{use_query_client, QueryInvalidator, QueryKey};

fn pairs(values: impl IntoIterator<Item = (&'static str, &'static str)>) -> Vec<(String, String)> {
    values
        .into_iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect()
}

fn status_options() -> Vec<(String, String)> {
    LISTING_STATUSES
        .iter()
        .map(|s| {
            let mut label = s.to_string();
            if let Some(first) = label.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            (s.to_string(), label)
        })
        .collect()
}

/// Moderation table for one listing category.
#[component]
pub fn ListingsPage(category: Category) -> impl IntoView {
    let list = create_state();
    let filters = use_listing_filters(category);
    let client = use_query_client();
    let api = ListingsApi::from_context();

    let actions = use_listing_actions(
        ListingActionsOptions::new(category.label()),
        Rc::new(api.clone()),
    );

    let query = use_paged_query(
        QueryKey::new("admin-listings").with(category.api_value()),
        move || list.with(|l| filters.with(|f| search_params(category, l, f))),
        move |params| {
            let api = api.clone();
            async move { api.fetch(params).await }
        },
    );

    use_page_clamp(list, query);

    let pagination = PaginationOptions {
        total: query.total.into(),
        current: Signal::derive(move || list.with(|s| s.page)),
        page_size: Signal::derive(move || list.with(|s| s.limit)),
        on_change: Callback::new(move |page| list.update(|s| s.go_to(page))),
        on_page_size_change: Some(Callback::new(move |size| list.update(|s| s.set_limit(size)))),
    };

    let set_sub_category = Callback::new(move |value: Option<String>| {
        filters.update(|f| f.set_sub_category(value));
        list.update(|s| s.reset_page());
    });
    let set_status = Callback::new(move |value: Option<String>| {
        filters.update(|f| f.set_status(value));
        list.update(|s| s.reset_page());
    });
    let set_city = Callback::new(move |value: Option<String>| {
        filters.update(|f| f.set_city(value));
        list.update(|s| s.reset_page());
    });
    let reset_filters = move |_| {
        filters.update(|f| f.reset());
        list.update(|s| s.reset_page());
    };

    let types = sub_categories(category);
    let title = category.title();
    let noun = category.noun();

    view! {
        <PageFrame page_id=format!("{}--list", category.api_value()) category=PAGE_CAT_LIST>
            <PageHeader
                title=title
                subtitle=Signal::derive(move || format!("{} listings", query.total.get()))
            />

            <div class="page__content">
                <TableSearch
                    placeholder=format!("Search {}...", title.to_lowercase())
                    initial=list.with_untracked(|s| s.search.clone())
                    on_search=Callback::new(move |text: String| list.update(|s| s.set_search(text)))
                    on_refresh=Callback::new(move |_| client.invalidate(&QueryKey::new("admin-listings")))
                >
                    {(!types.is_empty()).then(|| view! {
                        <FilterSelect
                            label="Type"
                            options=pairs(types.iter().copied())
                            value=Signal::derive(move || filters.with(|f| f.sub_category.clone()))
                            on_change=set_sub_category
                        />
                    })}
                    <FilterSelect
                        label="Status"
                        options=status_options()
                        value=Signal::derive(move || filters.with(|f| f.status.clone()))
                        on_change=set_status
                    />
                    <FilterSelect
                        label="City"
                        options=pairs(CITIES.iter().map(|c| (*c, *c)))
                        value=Signal::derive(move || filters.with(|f| f.city.clone()))
                        on_change=set_city
                    />
                    <Show when=move || filters.with(|f| f.active_count() > 0)>
                        <Button appearance=ButtonAppearance::Subtle on_click=reset_filters>
                            "Clear filters"
                        </Button>
                    </Show>
                </TableSearch>

                <AdminTable
                    data=query.items
                    columns=listing_columns(category, actions)
                    is_loading=query.loading
                    pagination=pagination
                    empty_message=format!("No {} found", title.to_lowercase())
                    row_class=RowClass::striped()
                />
            </div>

            <UpdateStatusDialog
                open=Signal::derive(move || actions.status_update().is_some())
                current_status=Signal::derive(move || {
                    actions.status_update().map(|d| d.current_status).unwrap_or_default()
                })
                is_loading=Signal::derive(move || actions.is_updating_status())
                on_confirm=Callback::new(move |status: String| actions.handle_update_status(status))
                on_cancel=Callback::new(move |_| actions.close_status_dialog())
                title=format!("Update {} Status", category.label())
                description=format!("Change the availability status of this {}", noun)
            />

            <DeleteConfirmDialog
                open=Signal::derive(move || actions.delete_id().is_some())
                is_loading=Signal::derive(move || actions.is_deleting())
                on_confirm=Callback::new(move |_| actions.handle_delete())
                on_cancel=Callback::new(move |_| actions.close_delete_dialog())
                item_name=format!("the {}", category.label().to_lowercase())
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_options_are_labelled() {
        let options = status_options();
        assert_eq!(options.len(), LISTING_STATUSES.len());
        assert_eq!(options[1], ("available".to_string(), "Available".to_string()));
    }
}
