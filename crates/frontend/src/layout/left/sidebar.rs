//! Navigation between the listing categories and the account tables.

use contracts::category::Category;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::domain::accounts::kind::AccountKind;
use crate::shared::icons::icon;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    items: Vec<MenuItem>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct MenuItem {
    href: &'static str,
    label: &'static str,
    icon: &'static str,
}

pub fn category_icon(category: Category) -> &'static str {
    match category {
        Category::Vehicles => "car",
        Category::Residential => "home",
        Category::Commercial => "building",
        Category::Construction => "wrench",
        Category::Events => "sparkles",
    }
}

pub fn account_route(kind: AccountKind) -> &'static str {
    match kind {
        AccountKind::Users => "/users",
        AccountKind::Admins => "/admins",
    }
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "listings",
            label: "Listings",
            items: Category::ALL
                .iter()
                .map(|&c| MenuItem {
                    href: c.route(),
                    label: c.title(),
                    icon: category_icon(c),
                })
                .collect(),
        },
        MenuGroup {
            id: "accounts",
            label: "Accounts",
            items: vec![
                MenuItem {
                    href: account_route(AccountKind::Users),
                    label: AccountKind::Users.title(),
                    icon: "users",
                },
                MenuItem {
                    href: account_route(AccountKind::Admins),
                    label: AccountKind::Admins.title(),
                    icon: "shield",
                },
            ],
        },
    ]
}

/// Active when the path is the item itself or one of its sub-pages.
fn is_active(pathname: &str, href: &str) -> bool {
    pathname == href
        || pathname
            .strip_prefix(href)
            .map(|rest| rest.starts_with('/'))
            .unwrap_or(false)
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;

    view! {
        <nav class="app-sidebar__content">
            {menu_groups().into_iter().map(|group| {
                view! {
                    <div class="app-sidebar__group" data-group=group.id>
                        <div class="app-sidebar__group-label">{group.label}</div>
                        {group.items.into_iter().map(|item| {
                            view! {
                                <a
                                    href=item.href
                                    class="app-sidebar__item"
                                    class:app-sidebar__item--active=move || pathname.with(|p| is_active(p, item.href))
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon(item.icon)}
                                        <span>{item.label}</span>
                                    </div>
                                </a>
                            }
                        }).collect_view()}
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
