// src/report.rs
use std::fmt;

use tracing::debug;

use crate::config::consts::{GOOD_RATING, GREAT_RATING};
use crate::data::{Movie, MovieCollection};

/// A movie whose rating made it through cleaning.
#[derive(Clone, Debug, PartialEq)]
pub struct RatedMovie<'a> {
    /// Position in the scraped collection, before cleaning.
    pub index: usize,
    pub movie: &'a Movie,
    pub rating: f64,
}

/// Numeric rating of a scraped rating text. The site shows `0` for titles
/// without an IMDb score, so that counts as no rating too.
pub fn parse_rating(text: &str) -> Option<f64> {
    let text = text.trim();
    if text == "0" {
        return None;
    }
    text.parse::<f64>().ok().filter(|r| r.is_finite())
}

/// Movies with a usable rating, in collection order. Each keeps its
/// original position so dropped rows leave gaps in the numbering.
pub fn clean(movies: &MovieCollection) -> Vec<RatedMovie<'_>> {
    movies
        .iter()
        .enumerate()
        .filter_map(|(index, movie)| {
            let text = movie.imdb_rating.as_deref()?;
            match parse_rating(text) {
                Some(rating) => Some(RatedMovie { index, movie, rating }),
                None => {
                    debug!("Report: dropped {:?} (rating {text:?})", movie.title());
                    None
                }
            }
        })
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Summary {
    pub count: usize,
    /// None when nothing survived cleaning.
    pub mean: Option<f64>,
    pub over_8: usize,
    pub over_9: usize,
}

impl Summary {
    pub fn of(rated: &[RatedMovie<'_>]) -> Self {
        let count = rated.len();
        let sum: f64 = rated.iter().map(|r| r.rating).sum();
        Self {
            count,
            mean: (count > 0).then(|| sum / count as f64),
            over_8: rated.iter().filter(|r| r.rating >= GOOD_RATING).count(),
            over_9: rated.iter().filter(|r| r.rating >= GREAT_RATING).count(),
        }
    }

    /// Mean to two decimals, `-` when there is none.
    pub fn mean_display(&self) -> String {
        match self.mean {
            Some(m) => format!("{m:.2}"),
            None => s!("-"),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of movies: {}", self.count)?;
        writeln!(f, "Average rating:   {}", self.mean_display())?;
        writeln!(f, "Movies over 8:    {}", self.over_8)?;
        write!(f, "Movies over 9:    {}", self.over_9)
    }
}
