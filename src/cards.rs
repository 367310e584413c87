// src/cards.rs
//
// Pure record → card mapping. All presentational rules live here so
// the grid component only has to lay things out.

use crate::directory::Brewery;

/// Display model for one result card. Built fresh on every fetch and
/// dropped wholesale with the view that owns it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub category: String,
    pub location: String,
    pub street: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
}

/// Map records to cards, one per record, preserving input order.
pub fn build_cards(records: &[Brewery]) -> Vec<Card> {
    records.iter().map(card_from).collect()
}

fn card_from(b: &Brewery) -> Card {
    Card {
        title: b.name.clone(),
        category: b
            .brewery_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("Unknown")
            .to_string(),
        location: format!("{}, {}", b.city, b.state),
        street: non_empty(&b.street),
        phone: non_empty(&b.phone).map(|p| format_phone(&p)),
        website: non_empty(&b.website_url),
    }
}

// The directory sometimes sends "" where it means absent.
fn non_empty(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Reformat a phone number as `(AAA) BBB-CCCC` when it holds exactly
/// ten digits; anything else passes through untouched.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        raw.to_string()
    }
}
