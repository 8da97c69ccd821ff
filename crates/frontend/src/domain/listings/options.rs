//! Choices offered by the listing filters.

use contracts::category::Category;

/// Cities the marketplace operates in.
pub const CITIES: [&str; 18] = [
    "Addis Ababa",
    "Adama",
    "Assosa",
    "Bahir Dar",
    "Bishoftu",
    "Debre Birhan",
    "Debre Markos",
    "Debre Tabor",
    "Harar",
    "Hawassa",
    "Hosaaina",
    "Jijiga",
    "Jimma",
    "Mojo",
    "Sebeta",
    "Shashemene",
    "Yirga Alem",
    "Ziway",
];

/// `(value, label)` pairs for the type filter. Empty when the category has
/// no fixed sub-categories.
pub fn sub_categories(category: Category) -> &'static [(&'static str, &'static str)] {
    match category {
        Category::Vehicles => &[
            ("cars", "Cars"),
            ("trucks", "Trucks"),
            ("limousine", "Limousine"),
            ("vans", "Vans"),
        ],
        Category::Commercial => &[
            ("office-space", "Office Space"),
            ("shop", "Retail Shop"),
            ("warehouse", "Warehouse"),
            ("complex", "Complex (Full Building)"),
            ("coworking", "Coworking Space"),
            ("restaurants", "Restaurant/Cafe"),
            ("storage-units", "Storage Unit"),
        ],
        Category::Construction => &[
            ("excavators", "Excavators"),
            ("loaders", "Loaders"),
            ("rollers", "Rollers"),
            ("mixers", "Mixers"),
            ("compactors", "Compactors"),
            ("cranes", "Cranes"),
            ("generators", "Generators"),
            ("scaffolding", "Scaffolding"),
            ("winch", "Winch"),
            ("tools", "Tools"),
        ],
        Category::Events => &[
            ("cateringMaterials", "Catering Materials"),
            ("eventPackages", "Event Packages"),
            ("photography", "Photography"),
            ("videography", "Videography"),
            ("djServices", "DJ Services"),
            ("decoration", "Decoration"),
            ("makeupHair", "Makeup & Hair"),
            ("mcServices", "MC Services"),
            ("eventVenues", "Event Venues"),
        ],
        Category::Residential => &[],
    }
}

/// Human label for a sub-category value, falling back to the raw value.
pub fn sub_category_label(category: Category, value: &str) -> String {
    sub_categories(category)
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_category_label() {
        assert_eq!(sub_category_label(Category::Events, "djServices"), "DJ Services");
        assert_eq!(sub_category_label(Category::Vehicles, "bikes"), "bikes");
    }

    #[test]
    fn test_residential_has_no_fixed_types() {
        assert!(sub_categories(Category::Residential).is_empty());
        assert!(!sub_categories(Category::Construction).is_empty());
    }
}
