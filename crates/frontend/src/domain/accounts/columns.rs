use contracts::accounts::Account;
use leptos::prelude::*;
use thaw::*;

use super::api::toggled_status;
use crate::shared::components::status_badge::status_badge_color;
use crate::shared::components::table::{ColumnDef, TableRecord};
use crate::shared::date_utils::{format_date, time_ago};
use crate::shared::icons::icon;
use crate::shared::listing_actions::ListingActions;

impl TableRecord for Account {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "name" => Some(self.name.clone()),
            "email" => self.email.clone(),
            "phone" => self.phone.clone(),
            "status" => Some(self.status_label().to_string()),
            "createdAt" => Some(self.created_at.clone()),
            "listingsCount" => Some(self.listings_count.unwrap_or(0).to_string()),
            "role" => self.role.map(|r| r.display_name().to_string()),
            _ => None,
        }
    }
}

pub fn account_columns(actions: ListingActions) -> Vec<ColumnDef<Account>> {
    vec![
        ColumnDef::new("account", "User")
            .width(250)
            .render(|_, row: &Account, _| {
                let secondary = row.email.clone().unwrap_or_else(|| "No email".to_string());
                view! {
                    <div class="account-cell">
                        <div class="account-cell__avatar">{icon("users")}</div>
                        <div>
                            <p class="cell__primary">{row.name.clone()}</p>
                            <p class="cell__secondary">{secondary}</p>
                        </div>
                    </div>
                }
                .into_any()
            }),
        ColumnDef::new("phone", "Phone")
            .data_index("phone")
            .width(150)
            .render(|value, _, _| view! { <span>{value.unwrap_or_else(|| "-".to_string())}</span> }.into_any()),
        ColumnDef::new("role", "Role")
            .data_index("role")
            .width(110)
            .render(|value, _, _| view! { <span class="cell__muted">{value.unwrap_or_else(|| "-".to_string())}</span> }.into_any()),
        ColumnDef::new("listingsCount", "Listings")
            .data_index("listingsCount")
            .width(100)
            .class("cell--center")
            .render(|value, _, _| view! { <span class="count-pill">{value.unwrap_or_default()}</span> }.into_any()),
        ColumnDef::new("status", "Status")
            .data_index("status")
            .width(120)
            .render(|_, row: &Account, _| {
                let label = if row.is_active { "Active" } else { "Disabled" };
                view! {
                    <Badge appearance=BadgeAppearance::Tint color=status_badge_color(row.status_label())>
                        {label}
                    </Badge>
                }
                .into_any()
            }),
        ColumnDef::new("createdAt", "Joined")
            .data_index("createdAt")
            .width(130)
            .render(|value, _, _| {
                let value = value.unwrap_or_default();
                view! {
                    <span class="cell__muted cell__nowrap" title=format_date(&value)>
                        {time_ago(&value)}
                    </span>
                }
                .into_any()
            }),
        ColumnDef::new("actions", "Actions")
            .width(90)
            .class("cell--actions")
            .render(move |_, row: &Account, _| {
                let toggle_id = row.id.clone();
                let current = row.status_label().to_string();
                let toggle_title = if toggled_status(&current) == "active" { "Enable" } else { "Disable" };
                let delete_id = row.id.clone();
                view! {
                    <div class="row-actions">
                        <button
                            class="button button--icon"
                            title=toggle_title
                            on:click=move |_| actions.open_status_dialog(toggle_id.clone(), current.clone())
                        >
                            {icon("power")}
                        </button>
                        <button
                            class="button button--icon button--danger"
                            title="Delete"
                            on:click=move |_| actions.open_delete_dialog(delete_id.clone())
                        >
                            {icon("trash")}
                        </button>
                    </div>
                }
                .into_any()
            }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(is_active: bool) -> Account {
        serde_json::from_value(serde_json::json!({
            "id": "u-1",
            "name": "Sara",
            "phone": "0911",
            "role": "admin",
            "isActive": is_active,
            "createdAt": "2024-01-02T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_record_fields() {
        let row = account(false);
        assert_eq!(row.field("status").as_deref(), Some("inactive"));
        assert_eq!(row.field("listingsCount").as_deref(), Some("0"));
        assert_eq!(row.field("role").as_deref(), Some("Admin"));
        assert_eq!(row.field("email"), None);
    }
}
