use contracts::category::Category;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;
use thaw::{ConfigProvider, ToasterProvider};

use crate::domain::accounts::filters::AccountFilterStores;
use crate::domain::accounts::kind::AccountKind;
use crate::domain::accounts::ui::list::AccountsPage;
use crate::domain::listings::filters::ListingFilterStores;
use crate::domain::listings::ui::list::ListingsPage;
use crate::layout::global_context::LayoutContext;
use crate::layout::Shell;
use crate::shared::config::AppConfig;
use crate::shared::query_cache::QueryClient;
use crate::system::auth::guard::RequireAuth;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--empty">
            <h2>"Page not found"</h2>
            <a href=Category::Vehicles.route()>"Back to vehicles"</a>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppConfig::load());
    provide_context(QueryClient::new());
    // filter choices survive navigation between tables
    provide_context(ListingFilterStores::new());
    provide_context(AccountFilterStores::new());
    provide_context(LayoutContext::new());

    view! {
        <ConfigProvider>
            <ToasterProvider>
                <Router>
                    <RequireAuth>
                        <Shell>
                            <Routes fallback=|| view! { <NotFound /> }>
                                <Route path=path!("/") view=|| view! { <Redirect path=Category::Vehicles.route() /> } />
                                <Route path=path!("/vehicles") view=|| view! { <ListingsPage category=Category::Vehicles /> } />
                                <Route path=path!("/residential") view=|| view! { <ListingsPage category=Category::Residential /> } />
                                <Route path=path!("/commercial") view=|| view! { <ListingsPage category=Category::Commercial /> } />
                                <Route path=path!("/construction") view=|| view! { <ListingsPage category=Category::Construction /> } />
                                <Route path=path!("/events") view=|| view! { <ListingsPage category=Category::Events /> } />
                                <Route path=path!("/users") view=|| view! { <AccountsPage kind=AccountKind::Users /> } />
                                <Route path=path!("/admins") view=|| view! { <AccountsPage kind=AccountKind::Admins /> } />
                            </Routes>
                        </Shell>
                    </RequireAuth>
                </Router>
            </ToasterProvider>
        </ConfigProvider>
    }
}
