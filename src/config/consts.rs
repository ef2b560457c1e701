// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.cinemagia.ro/filme/";
pub const PAGE_PARAM: &str = "pn";

// Display/export stand-in for a field the page did not carry
pub const NOT_AVAILABLE: &str = "N/A";

// Scrape
pub const DEFAULT_PAGES: u32 = 10;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "movies";

// Concurrency (1 = strictly sequential, page after page)
pub const WORKERS: usize = 1;
pub const MAX_WORKERS: usize = 8;

// Report
pub const GOOD_RATING: f64 = 8.0;
pub const GREAT_RATING: f64 = 9.0;
