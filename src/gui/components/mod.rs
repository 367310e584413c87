// src/gui/components/mod.rs
//
// One file per visual region; each exposes a single draw(ui, app).

pub mod card_grid;  // src/gui/components/card_grid.rs
pub mod filter_bar; // src/gui/components/filter_bar.rs
