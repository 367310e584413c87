// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{animate,fetch}.

mod animate; // src/gui/actions/animate.rs
mod fetch;   // src/gui/actions/fetch.rs

pub use animate::animate;
pub use fetch::fetch;
