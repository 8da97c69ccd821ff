use contracts::category::Category;
use contracts::listings::Listing;
use leptos::prelude::*;

use super::options::sub_category_label;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::table::{ColumnDef, TableRecord};
use crate::shared::date_utils::{format_date, time_ago};
use crate::shared::icons::icon;
use crate::shared::listing_actions::ListingActions;

impl TableRecord for Listing {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "title" => Some(self.title.clone()),
            "subCategory" => self.sub_category.clone(),
            "city" => Some(self.city.clone()),
            "location" => self.location.clone(),
            "status" => Some(self.status.clone()),
            "price" => Some(format_price(self.price)),
            "contactName" => Some(self.contact_name.clone()),
            "postedDate" => Some(self.posted_date.clone()),
            "createdAt" => Some(self.created_at.clone()),
            _ => None,
        }
    }
}

/// Whole amounts without decimals, otherwise two places.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{:.0}", price)
    } else {
        format!("{:.2}", price)
    }
}

/// "Toyota Land Cruiser" from the brand/model attributes, if any.
pub fn make_and_model(listing: &Listing) -> Option<String> {
    let parts: Vec<String> = ["brand", "model"]
        .iter()
        .filter_map(|name| listing.attribute(name))
        .filter(|v| !v.trim().is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join(" "))
}

fn primary_title(category: Category) -> &'static str {
    match category {
        Category::Vehicles => "Vehicle",
        Category::Residential | Category::Commercial => "Property",
        Category::Construction => "Equipment",
        Category::Events => "Service",
    }
}

pub fn listing_columns(category: Category, actions: ListingActions) -> Vec<ColumnDef<Listing>> {
    vec![
        ColumnDef::new("listing", primary_title(category))
            .width(240)
            .render(|_, row: &Listing, _| {
                let thumb = match row.images.first() {
                    Some(src) => view! { <img class="listing-cell__thumb" src=src.clone() alt=row.title.clone() /> }.into_any(),
                    None => view! { <div class="listing-cell__thumb listing-cell__thumb--empty">"No img"</div> }.into_any(),
                };
                view! {
                    <div class="listing-cell">
                        {thumb}
                        <div>
                            <p class="cell__primary">{row.title.clone()}</p>
                            <p class="cell__secondary">{make_and_model(row).unwrap_or_default()}</p>
                        </div>
                    </div>
                }
                .into_any()
            }),
        ColumnDef::new("subCategory", "Type")
            .data_index("subCategory")
            .width(110)
            .render(move |value, _, _| {
                let label = value
                    .map(|v| sub_category_label(category, &v))
                    .unwrap_or_else(|| "-".to_string());
                view! { <span class="cell__capitalize">{label}</span> }.into_any()
            }),
        ColumnDef::new("owner", "Owner")
            .width(170)
            .render(|_, row: &Listing, _| {
                view! {
                    <div>
                        <p class="cell__primary">{row.owner_name().to_string()}</p>
                        <p class="cell__secondary">{row.owner_phone().to_string()}</p>
                    </div>
                }
                .into_any()
            }),
        ColumnDef::new("price", "Price")
            .width(110)
            .render(|_, row: &Listing, _| {
                view! {
                    <div>
                        <p class="cell__primary cell__primary--strong">{format!("{} ETB", format_price(row.price))}</p>
                        <p class="cell__secondary">{format!("per {}", row.rental_unit.as_str())}</p>
                        {row.negotiable.then(|| view! { <p class="cell__secondary">"Negotiable"</p> })}
                    </div>
                }
                .into_any()
            }),
        ColumnDef::new("location", "Location")
            .width(140)
            .render(|_, row: &Listing, _| {
                view! {
                    <div>
                        <p class="cell__primary">{row.city.clone()}</p>
                        <p class="cell__secondary">{row.location.clone().unwrap_or_default()}</p>
                    </div>
                }
                .into_any()
            }),
        ColumnDef::new("status", "Status")
            .data_index("status")
            .width(110)
            .render(|value, _, _| view! { <StatusBadge status=value.unwrap_or_default() /> }.into_any()),
        ColumnDef::new("postedDate", "Posted")
            .data_index("postedDate")
            .width(120)
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
            .render(move |_, row: &Listing, _| {
                let status_id = row.id.clone();
                let current = row.status.clone();
                let delete_id = row.id.clone();
                view! {
                    <div class="row-actions">
                        <button
                            class="button button--icon"
                            title="Change status"
                            on:click=move |_| actions.open_status_dialog(status_id.clone(), current.clone())
                        >
                            {icon("refresh")}
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

    fn listing(attributes: serde_json::Value) -> Listing {
        serde_json::from_value(serde_json::json!({
            "id": "l-1",
            "category": "vehicles",
            "title": "Land Cruiser",
            "city": "Adama",
            "status": "available",
            "contactName": "Abebe",
            "contactPhone": "0911",
            "price": 4500.0,
            "rentalUnit": "day",
            "attributes": attributes,
            "postedDate": "2024-03-15T14:02:26Z",
            "createdAt": "2024-03-15T14:02:26Z",
            "updatedAt": "2024-03-15T14:02:26Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(4500.0), "4500");
        assert_eq!(format_price(12.5), "12.50");
    }

    #[test]
    fn test_make_and_model() {
        let full = listing(serde_json::json!({"brand": "Toyota", "model": "Land Cruiser"}));
        assert_eq!(make_and_model(&full).as_deref(), Some("Toyota Land Cruiser"));

        let none = listing(serde_json::json!({}));
        assert_eq!(make_and_model(&none), None);
    }

    #[test]
    fn test_record_fields() {
        let row = listing(serde_json::json!({}));
        assert_eq!(TableRecord::id(&row), "l-1");
        assert_eq!(row.field("status").as_deref(), Some("available"));
        assert_eq!(row.field("subCategory"), None);
        assert_eq!(row.field("unknown"), None);
    }
}
