// src/lib.rs
//! Scraper for the cinemagia.ro movie listings: fetch pages, read the
//! listings off each one, export or summarize the lot.

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod specs;

pub mod data;
pub mod file;
pub mod progress;
pub mod report;
pub mod scrape;

pub use data::{Movie, MovieCollection};
pub use error::{Error, FetchError};
pub use scrape::{collect_movies, scrape};
