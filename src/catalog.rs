// src/catalog.rs
//! Static pick lists for the two filter selectors.
//!
//! The directory filters by full state name, not postal code, so the
//! selector carries the names verbatim. Category tags are the
//! directory's published `by_type` vocabulary.

/// US states accepted by the `by_state` filter, in selector order.
pub const REGIONS: [&str; 50] = [
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado",
    "Connecticut", "Delaware", "Florida", "Georgia", "Hawaii", "Idaho",
    "Illinois", "Indiana", "Iowa", "Kansas", "Kentucky", "Louisiana",
    "Maine", "Maryland", "Massachusetts", "Michigan", "Minnesota",
    "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada",
    "New Hampshire", "New Jersey", "New Mexico", "New York",
    "North Carolina", "North Dakota", "Ohio", "Oklahoma", "Oregon",
    "Pennsylvania", "Rhode Island", "South Carolina", "South Dakota",
    "Tennessee", "Texas", "Utah", "Vermont", "Virginia", "Washington",
    "West Virginia", "Wisconsin", "Wyoming",
];

/// Brewery types accepted by the `by_type` filter.
pub const CATEGORIES: [&str; 10] = [
    "micro", "nano", "regional", "brewpub", "large",
    "planning", "bar", "contract", "proprietor", "closed",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_all_states_in_order() {
        assert_eq!(REGIONS.len(), 50);
        assert!(REGIONS.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(REGIONS[0], "Alabama");
        assert_eq!(REGIONS[49], "Wyoming");
    }

    #[test]
    fn categories_need_no_query_escaping() {
        // The defensive percent-encoding in the client should be a
        // no-op for every tag we actually offer.
        for t in CATEGORIES {
            assert!(t.chars().all(|c| c.is_ascii_lowercase()));
        }
    }
}
