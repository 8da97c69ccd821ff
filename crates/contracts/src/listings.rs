use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Statuses a moderator can assign to a listing, in menu order.
pub const LISTING_STATUSES: [&str; 4] = ["pending", "available", "deactivated", "closed"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RentalUnit {
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl RentalUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            RentalUnit::Hour => "hour",
            RentalUnit::Day => "day",
            RentalUnit::Week => "week",
            RentalUnit::Month => "month",
            RentalUnit::Year => "year",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingOwner {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// A rentable item as returned by the listings endpoints.
///
/// Category-specific attributes are kept as raw JSON; the dashboard only
/// reads a handful of them for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub category: String,
    #[serde(default)]
    pub sub_category: Option<String>,
    pub title: String,
    pub city: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub status: String,
    #[serde(default)]
    pub listed_by: Option<String>,
    pub contact_name: String,
    pub contact_phone: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub contact_views: u64,
    pub price: f64,
    pub rental_unit: RentalUnit,
    #[serde(default)]
    pub negotiable: bool,
    #[serde(default)]
    pub attributes: Map<String, Value>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user: Option<ListingOwner>,
    pub posted_date: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Listing {
    /// String form of an attribute, numbers and booleans included.
    pub fn attribute(&self, name: &str) -> Option<String> {
        match self.attributes.get(name)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn owner_name(&self) -> &str {
        self.user
            .as_ref()
            .map(|u| u.name.as_str())
            .unwrap_or(&self.contact_name)
    }

    pub fn owner_phone(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.phone.as_deref())
            .unwrap_or(&self.contact_phone)
    }
}

/// Query parameters for `GET /listings`. Unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchListingParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub page: u64,
    pub limit: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING_JSON: &str = r#"{
        "id": "l-1",
        "category": "vehicles",
        "subCategory": "suv",
        "title": "Toyota Land Cruiser",
        "city": "Addis Ababa",
        "location": "Bole",
        "status": "available",
        "contactName": "Abebe",
        "contactPhone": "+251900000000",
        "images": [],
        "contactViews": 12,
        "price": 4500,
        "rentalUnit": "day",
        "negotiable": true,
        "attributes": {"brand": "Toyota", "model": "Land Cruiser", "year": 2019},
        "user": {"id": "u-1", "name": "Abebe Kebede"},
        "postedDate": "2024-03-15T14:02:26.123Z",
        "createdAt": "2024-03-15T14:02:26.123Z",
        "updatedAt": "2024-03-16T09:00:00.000Z"
    }"#;

    #[test]
    fn test_listing_from_api_json() {
        let listing: Listing = serde_json::from_str(LISTING_JSON).unwrap();
        assert_eq!(listing.sub_category.as_deref(), Some("suv"));
        assert_eq!(listing.rental_unit, RentalUnit::Day);
        assert_eq!(listing.attribute("brand").as_deref(), Some("Toyota"));
        assert_eq!(listing.attribute("year").as_deref(), Some("2019"));
        assert_eq!(listing.attribute("color"), None);
    }

    #[test]
    fn test_owner_falls_back_to_contact() {
        let mut listing: Listing = serde_json::from_str(LISTING_JSON).unwrap();
        assert_eq!(listing.owner_name(), "Abebe Kebede");
        assert_eq!(listing.owner_phone(), "+251900000000");

        listing.user = None;
        assert_eq!(listing.owner_name(), "Abebe");
    }

    #[test]
    fn test_search_params_skip_unset_filters() {
        let params = SearchListingParams {
            category: Some("events".to_string()),
            page: 2,
            limit: 20,
            ..Default::default()
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"category": "events", "page": 2, "limit": 20})
        );
    }
}
