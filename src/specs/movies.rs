// src/specs/movies.rs
use scraper::{ElementRef, Html, Selector};
use tracing::trace;

use super::{CAST, CAST_ITEM, CAST_MARKERS, CastField, LISTING, NodeQuery, RATING, TITLE};
use crate::core::html::{first_text, text_of};
use crate::core::sanitize::{after_first, non_empty, strip_label};
use crate::data::Movie;
use crate::error::{Error, Result};

/// Compiled selector table for the movies listing page.
#[derive(Debug)]
pub struct MovieSpec {
    listing: Selector,
    title: Selector,
    rating: Selector,
    cast: Selector,
    cast_item: Selector,
}

impl MovieSpec {
    pub fn new() -> Result<Self> {
        Ok(Self {
            listing: compile(LISTING)?,
            title: compile(TITLE)?,
            rating: compile(RATING)?,
            cast: compile(CAST)?,
            cast_item: compile(CAST_ITEM)?,
        })
    }

    /// Every listing on the page, in document order. A page without
    /// listings gives an empty Vec.
    pub fn parse_page(&self, html_doc: &str) -> Vec<Movie> {
        let doc = Html::parse_document(html_doc);
        let movies: Vec<Movie> = doc
            .select(&self.listing)
            .map(|li| self.parse_listing(li))
            .collect();
        movies
    }

    fn parse_listing(&self, li: ElementRef<'_>) -> Movie {
        let title = first_text(li, &self.title).and_then(|t| non_empty(&t));

        // "IMDB: 7.4" → "7.4"
        let imdb_rating = first_text(li, &self.rating)
            .and_then(|t| non_empty(after_first(&t, ':')));

        let mut movie = Movie { title, imdb_rating, ..Movie::default() };

        // No cast list → cast fields stay None for this listing only.
        let Some(cast) = li.select(&self.cast).next() else {
            trace!("listing {:?} has no cast list", movie.title);
            return movie;
        };

        // Later lines overwrite earlier ones for the same field.
        for item in cast.select(&self.cast_item) {
            let line = text_of(item);
            let Some((marker, field)) = classify(&line) else { continue };
            let value = non_empty(strip_label(&line, marker));
            match field {
                CastField::Actors => movie.actors = value,
                CastField::Director => movie.director = value,
                CastField::Genre => movie.genre = value,
            }
        }
        movie
    }
}

/// First marker (in table order) the line contains.
fn classify(line: &str) -> Option<(&'static str, CastField)> {
    CAST_MARKERS
        .iter()
        .find(|(marker, _)| line.contains(*marker))
        .copied()
}

fn compile(q: NodeQuery) -> Result<Selector> {
    let css = q.css();
    Selector::parse(&css).map_err(|e| Error::Selector { reason: e.to_string(), query: css.clone() })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> MovieSpec {
        MovieSpec::new().unwrap()
    }

    fn na(m: &Movie) -> [&str; 5] {
        [m.title(), m.imdb_rating(), m.director(), m.actors(), m.genre()]
    }

    #[test]
    fn film_a_and_film_b() {
        let doc = r##"
            <html><body><ul class="list">
              <li class="movie">
                <div class="title"><a href="/filme/a">Film A</a></div>
                <a class="rating-imdb" href="#">IMDB:8.5</a>
                <ul class="cast">
                  <li>Cu Actor X</li>
                  <li>Regia Director Y</li>
                  <li>Gen film Drama</li>
                </ul>
              </li>
              <li class="movie">
                <div class="title">Film B</div>
              </li>
            </ul></body></html>
        "##;

        let movies = spec().parse_page(doc);
        assert_eq!(movies.len(), 2);
        assert_eq!(
            movies[0],
            Movie {
                title: Some(s!("Film A")),
                imdb_rating: Some(s!("8.5")),
                director: Some(s!("Director Y")),
                actors: Some(s!("Actor X")),
                genre: Some(s!("Drama")),
            }
        );
        assert_eq!(na(&movies[1]), ["Film B", "N/A", "N/A", "N/A", "N/A"]);
    }

    #[test]
    fn missing_title_is_none() {
        let doc = r#"<ul><li class="movie"><a class="rating-imdb">IMDB: 6.1</a></li></ul>"#;
        let movies = spec().parse_page(doc);
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, None);
        assert_eq!(movies[0].title(), "N/A");
        assert_eq!(movies[0].imdb_rating.as_deref(), Some("6.1"));
    }

    #[test]
    fn rating_keeps_text_after_first_colon() {
        let doc = r#"<ul>
            <li class="movie"><a class="rating-imdb">  IMDB:   7.25 </a></li>
            <li class="movie"><a class="rating-imdb">IMDB: 0</a></li>
            <li class="movie"><a class="rating-imdb">IMDB:</a></li>
            <li class="movie"><a class="rating-imdb">5.5</a></li>
        </ul>"#;
        let ratings: Vec<Option<String>> =
            spec().parse_page(doc).into_iter().map(|m| m.imdb_rating).collect();
        assert_eq!(
            ratings,
            vec![Some(s!("7.25")), Some(s!("0")), None, Some(s!("5.5"))]
        );
    }

    #[test]
    fn real_page_layout_with_labels_and_links() {
        let doc = r#"
            <li class="movie">
              <div class="title">
                <h2><a href="/filme/oppenheimer-123/">Oppenheimer</a></h2>
                <span class="year">(2023)</span>
              </div>
              <a class="rating-imdb" href="https://imdb.com/title/x">IMDB: 8.3</a>
              <ul class="cast">
                <li>Regia: <a href="/actori/c-nolan/">Christopher Nolan</a></li>
                <li>Cu: <a>Cillian Murphy</a>, <a>Emily Blunt</a></li>
                <li>Gen film: <a>Biografic</a>, <a>Dramă</a></li>
              </ul>
            </li>"#;
        let m = &spec().parse_page(doc)[0];
        assert_eq!(m.title(), "Oppenheimer (2023)");
        assert_eq!(m.imdb_rating(), "8.3");
        assert_eq!(m.director(), "Christopher Nolan");
        assert_eq!(m.actors(), "Cillian Murphy, Emily Blunt");
        assert_eq!(m.genre(), "Biografic, Dramă");
    }

    #[test]
    fn repeated_marker_last_line_wins() {
        let doc = r#"<li class="movie"><ul class="cast">
            <li>Regia: First</li>
            <li>Regia: Second</li>
        </ul></li>"#;
        assert_eq!(spec().parse_page(doc)[0].director(), "Second");
    }

    #[test]
    fn marker_order_decides_an_ambiguous_line() {
        // Contains both "Cu" and "Gen film": the actors marker is checked first.
        let doc = r#"<li class="movie"><ul class="cast">
            <li>Gen film: Documentar despre Cuba</li>
            <li>Altceva</li>
        </ul></li>"#;
        let m = &spec().parse_page(doc)[0];
        assert_eq!(m.actors(), "Gen film: Documentar despre Cuba");
        assert_eq!(m.genre(), "N/A");
        assert_eq!(m.director(), "N/A");
    }

    #[test]
    fn no_cast_list_does_not_affect_neighbours() {
        let doc = r#"<ul>
            <li class="movie"><div class="title">Lonely</div></li>
            <li class="movie"><div class="title">Cast</div>
                <ul class="cast"><li>Regia: Someone</li></ul></li>
        </ul>"#;
        let movies = spec().parse_page(doc);
        assert_eq!(movies[0].director, None);
        assert_eq!(movies[1].director(), "Someone");
    }

    #[test]
    fn no_listings_is_empty() {
        assert!(spec().parse_page("<html><body><p>nimic</p></body></html>").is_empty());
        assert!(spec().parse_page("").is_empty());
        // A plain <li> is not a listing.
        assert!(spec().parse_page("<ul><li>Film</li></ul>").is_empty());
    }

    #[test]
    fn parsing_twice_gives_equal_output() {
        let doc = r#"<li class="movie"><div class="title">X</div>
            <a class="rating-imdb">IMDB: 7</a></li>"#;
        let spec = spec();
        assert_eq!(spec.parse_page(doc), spec.parse_page(doc));
    }
}
