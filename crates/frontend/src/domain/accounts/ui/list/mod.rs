use std::rc::Rc;

use leptos::prelude::*;
use thaw::*;

use crate::domain::accounts::api::{accounts_params, parse_active, status_toast, toggled_status, AccountsApi};
use crate::domain::accounts::columns::account_columns;
use crate::domain::accounts::filters::{AccountFilterStores, ACCOUNT_STATUS_FILTERS};
use crate::domain::accounts::kind::AccountKind;
use crate::shared::components::dialogs::{DeleteConfirmDialog, EnableDisableDialog};
use crate::shared::components::filter_select::FilterSelect;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationOptions;
use crate::shared::components::table::{AdminTable, TableSearch};
use crate::shared::list_state::create_state;
use crate::shared::listing_actions::{use_listing_actions, ListingActionsOptions};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_ACCOUNTS};
use crate::shared::paged_query::{use_page_clamp, use_paged_query};
use crate::shared::query_cache::{use_query_client, QueryInvalidator};

/// Users or admins table with enable/disable and delete.
#[component]
pub fn AccountsPage(kind: AccountKind) -> impl IntoView {
    let stores = use_context::<AccountFilterStores>().expect("AccountFilterStores not provided");
    let filters = match kind {
        AccountKind::Users => stores.users,
        AccountKind::Admins => stores.admins,
    };
    let list = create_state();
    let client = use_query_client();
    let api = AccountsApi::from_context(kind);
    let scope = kind.scope();
    let collection = scope.collection.clone();

    let actions = use_listing_actions(
        ListingActionsOptions::new(kind.label())
            .with_scope(scope)
            .with_status_message(move |status| status_toast(kind, status)),
        Rc::new(api.clone()),
    );

    let query = use_paged_query(
        collection.clone(),
        move || list.with(|l| filters.with(|f| accounts_params(l, f))),
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

    let set_status = Callback::new(move |value: Option<String>| {
        filters.update(|f| f.set_status(value));
        list.update(|s| s.reset_page());
    });

    let pending_active = Signal::derive(move || {
        actions
            .status_update()
            .and_then(|d| parse_active(&d.current_status))
            .unwrap_or(false)
    });

    let title = kind.title();
    let noun = kind.noun();

    view! {
        <PageFrame page_id=kind.page_id() category=PAGE_CAT_ACCOUNTS>
            <PageHeader
                title=title
                subtitle=Signal::derive(move || format!("{} {}s", query.total.get(), noun))
            />

            <div class="page__content">
                <TableSearch
                    placeholder=format!("Search {}s by name, email or phone...", noun)
                    initial=list.with_untracked(|s| s.search.clone())
                    on_search=Callback::new(move |text: String| list.update(|s| s.set_search(text)))
                    on_refresh=Callback::new(move |_| client.invalidate(&collection))
                >
                    <FilterSelect
                        label="Status"
                        options={ACCOUNT_STATUS_FILTERS
                            .iter()
                            .map(|(value, label)| (value.to_string(), label.to_string()))
                            .collect::<Vec<_>>()}
                        value=Signal::derive(move || filters.with(|f| f.status.clone()))
                        on_change=set_status
                    />
                    <Show when=move || filters.with(|f| !f.is_empty())>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| {
                                filters.update(|f| f.reset());
                                list.update(|s| s.reset_page());
                            }
                        >
                            "Clear filters"
                        </Button>
                    </Show>
                </TableSearch>

                <AdminTable
                    data=query.items
                    columns=account_columns(actions)
                    is_loading=query.loading
                    pagination=pagination
                    empty_message=format!("No {}s found", noun)
                />
            </div>

            <EnableDisableDialog
                open=Signal::derive(move || actions.status_update().is_some())
                is_active=pending_active
                is_loading=Signal::derive(move || actions.is_updating_status())
                on_confirm=Callback::new(move |_| {
                    if let Some(data) = actions.status_update() {
                        actions.handle_update_status(toggled_status(&data.current_status).to_string());
                    }
                })
                on_cancel=Callback::new(move |_| actions.close_status_dialog())
                item_name=format!("this {}", noun)
            />

            <DeleteConfirmDialog
                open=Signal::derive(move || actions.delete_id().is_some())
                is_loading=Signal::derive(move || actions.is_deleting())
                on_confirm=Callback::new(move |_| actions.handle_delete())
                on_cancel=Callback::new(move |_| actions.close_delete_dialog())
                item_name=format!("this {} account", noun)
            />
        </PageFrame>
    }
}
