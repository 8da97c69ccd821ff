use serde::{Deserialize, Serialize};

/// Top-level listing category. The serialized form is the API's category slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "vehicles")]
    Vehicles,
    #[serde(rename = "residential-houses")]
    Residential,
    #[serde(rename = "commercial-houses")]
    Commercial,
    #[serde(rename = "construction-equipment")]
    Construction,
    #[serde(rename = "events")]
    Events,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Vehicles,
        Category::Residential,
        Category::Commercial,
        Category::Construction,
        Category::Events,
    ];

    /// Slug sent as the `category` query parameter.
    pub fn api_value(self) -> &'static str {
        match self {
            Category::Vehicles => "vehicles",
            Category::Residential => "residential-houses",
            Category::Commercial => "commercial-houses",
            Category::Construction => "construction-equipment",
            Category::Events => "events",
        }
    }

    /// Dashboard route segment.
    pub fn route(self) -> &'static str {
        match self {
            Category::Vehicles => "/vehicles",
            Category::Residential => "/residential",
            Category::Commercial => "/commercial",
            Category::Construction => "/construction",
            Category::Events => "/events",
        }
    }

    /// Singular noun used in notifications ("vehicle deleted successfully").
    pub fn noun(self) -> &'static str {
        match self {
            Category::Vehicles => "vehicle",
            Category::Residential => "residential listing",
            Category::Commercial => "commercial listing",
            Category::Construction => "equipment listing",
            Category::Events => "event listing",
        }
    }

    /// Sentence-case noun for notifications ("Vehicle listing deleted successfully").
    pub fn label(self) -> &'static str {
        match self {
            Category::Vehicles => "Vehicle listing",
            Category::Residential => "Residential listing",
            Category::Commercial => "Commercial listing",
            Category::Construction => "Equipment listing",
            Category::Events => "Event listing",
        }
    }

    /// Menu and page title.
    pub fn title(self) -> &'static str {
        match self {
            Category::Vehicles => "Vehicles",
            Category::Residential => "Residential",
            Category::Commercial => "Commercial",
            Category::Construction => "Construction Equipments",
            Category::Events => "Events",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_api_slug() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.api_value()));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Category::Vehicles.noun(), "vehicle");
        assert_eq!(Category::Vehicles.label(), "Vehicle listing");
        assert_eq!(Category::Construction.label(), "Equipment listing");
    }
}
