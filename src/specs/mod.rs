// src/specs/mod.rs
//! # Page specs
//!
//! Where the ground truth lives in the listing page's HTML, and how to read it.
//!
//! ## What lives here
//! - The **selector table**: one [`NodeQuery`] (tag + class marker) per node the
//!   extractor looks at. A markup change on the site should mean editing these
//!   constants, not the extraction code.
//! - The **cast markers**: which label in a cast line feeds which field.
//! - **Pure parsing** of one page of markup into [`Movie`](crate::data::Movie)s
//!   ([`movies`]).
//!
//! ## What does **not** live here
//! - Fetching (`core::net`), page iteration and merging (`scrape`).
//! - Cleaning, statistics or export formatting (`report`, `file`).
//!
//! ## Conventions
//! - A missing node is never an error: the field stays `None`.
//! - Specs are testable offline against literal markup.
pub mod movies;

pub use movies::MovieSpec;

/// Structural query: element name plus one class it must carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeQuery {
    pub tag: &'static str,
    pub class: Option<&'static str>,
}

impl NodeQuery {
    pub const fn tagged(tag: &'static str, class: &'static str) -> Self {
        Self { tag, class: Some(class) }
    }

    pub const fn tag(tag: &'static str) -> Self {
        Self { tag, class: None }
    }

    /// CSS form, e.g. `li.movie`.
    pub fn css(&self) -> String {
        match self.class {
            Some(class) => format!("{}.{}", self.tag, class),
            None => self.tag.to_string(),
        }
    }
}

/// One `<li class="movie">` per listing.
pub const LISTING: NodeQuery = NodeQuery::tagged("li", "movie");
pub const TITLE: NodeQuery = NodeQuery::tagged("div", "title");
/// Text reads like `IMDB: 7.4`.
pub const RATING: NodeQuery = NodeQuery::tagged("a", "rating-imdb");
pub const CAST: NodeQuery = NodeQuery::tagged("ul", "cast");
pub const CAST_ITEM: NodeQuery = NodeQuery::tag("li");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CastField {
    Actors,
    Director,
    Genre,
}

/// Checked in this order against each cast line; the first marker the line
/// contains decides its field.
pub const CAST_MARKERS: [(&str, CastField); 3] = [
    ("Cu", CastField::Actors),
    ("Regia", CastField::Director),
    ("Gen film", CastField::Genre),
];
