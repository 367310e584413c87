// src/directory/model.rs

use serde::Deserialize;

/// One record from the directory API, trimmed to the fields the cards
/// consume. Records are fetched fresh per request and replaced
/// wholesale by the next fetch; nothing here is persisted.
#[derive(Clone, Debug, Deserialize)]
pub struct Brewery {
    pub name: String,
    pub brewery_type: Option<String>,
    pub city: String,
    pub state: String,
    pub street: Option<String>,
    pub phone: Option<String>,
    pub website_url: Option<String>,
}
