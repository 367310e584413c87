// src/directory/mod.rs
//
// Folder module facade: everything the rest of the app needs from the
// directory API lives behind these three names.

mod client; // src/directory/client.rs
mod error;  // src/directory/error.rs
mod model;  // src/directory/model.rs

pub use client::DirectoryClient;
pub use error::FetchError;
pub use model::Brewery;
