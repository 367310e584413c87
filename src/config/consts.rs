// src/config/consts.rs

// Directory API
pub const API_BASE: &str = "https://api.openbrewerydb.org/v1/breweries";
pub const PER_PAGE: u32 = 50;
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Initial fetch
pub const DEFAULT_REGION: &str = "California";
pub const DEFAULT_CATEGORY: &str = "micro";

// Entrance animation: cards run in from below, growing and fading in
pub const ENTRANCE_OFFSET_Y: f32 = 100.0;
pub const ENTRANCE_SCALE: f32 = 0.8;
pub const ENTRANCE_STIFFNESS: f32 = 300.0;
pub const ENTRANCE_DAMPING: f32 = 20.0;
pub const ENTRANCE_STAGGER_SECS: f32 = 0.150; // per card index

// Hover animation: stiffer spring, small grow
pub const HOVER_SCALE: f32 = 1.05;
pub const HOVER_STIFFNESS: f32 = 400.0;
pub const HOVER_DAMPING: f32 = 25.0;
pub const HOVER_ARM_DELAY_MS: u64 = 100; // after fetch settles

pub const SPRING_MASS: f32 = 1.0;

// User-facing copy
pub const MSG_NO_RESULTS: &str = "No breweries found for the selected criteria.";
pub const MSG_FETCH_ERROR: &str = "Error fetching breweries. Please try again.";

// Card layout
pub const CARD_WIDTH: f32 = 260.0;
pub const CARD_HEIGHT: f32 = 160.0;
pub const CARD_GAP: f32 = 12.0;
