// src/data.rs
use crate::config::consts::NOT_AVAILABLE;

/// One listing from a movies page. `None` means the page did not carry the
/// field; it becomes [`NOT_AVAILABLE`] only when displayed or exported.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Movie {
    pub title: Option<String>,
    /// Text after the label ("IMDB: 7.4" → "7.4"). Still text here.
    pub imdb_rating: Option<String>,
    pub director: Option<String>,
    pub actors: Option<String>,
    pub genre: Option<String>,
}

impl Movie {
    pub fn title(&self) -> &str {
        or_na(&self.title)
    }
    pub fn imdb_rating(&self) -> &str {
        or_na(&self.imdb_rating)
    }
    pub fn director(&self) -> &str {
        or_na(&self.director)
    }
    pub fn actors(&self) -> &str {
        or_na(&self.actors)
    }
    pub fn genre(&self) -> &str {
        or_na(&self.genre)
    }
}

fn or_na(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or(NOT_AVAILABLE)
}

/// Movies of one run, in crawl order (page 1 listings, then page 2, ...).
/// Grows a page at a time; no dedup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MovieCollection {
    movies: Vec<Movie>,
}

impl MovieCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one page's movies, keeping their order.
    pub fn extend_page(&mut self, page: Vec<Movie>) {
        self.movies.extend(page);
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
    pub fn as_slice(&self) -> &[Movie] {
        &self.movies
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }
    pub fn into_inner(self) -> Vec<Movie> {
        self.movies
    }
}

impl<'a> IntoIterator for &'a MovieCollection {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}

impl FromIterator<Movie> for MovieCollection {
    fn from_iter<I: IntoIterator<Item = Movie>>(iter: I) -> Self {
        Self { movies: iter.into_iter().collect() }
    }
}
