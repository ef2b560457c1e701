// tests/parse_page.rs
//
// Extraction against a saved listing page.
//
use cinemagia_scrape::specs::MovieSpec;

const PAGE: &str = include_str!("fixtures/filme_p1.html");

#[test]
fn fixture_page_reads_every_listing_in_order() {
    let spec = MovieSpec::new().unwrap();
    let movies = spec.parse_page(PAGE);
    assert_eq!(movies.len(), 4);

    let titles: Vec<&str> = movies.iter().map(|m| m.title()).collect();
    assert_eq!(
        titles,
        [
            "Închisoarea îngerilor The Shawshank Redemption (1994)",
            "Amintiri din epoca de aur",
            "Un film nou",
            "N/A",
        ]
    );

    let first = &movies[0];
    assert_eq!(first.imdb_rating(), "9.3");
    assert_eq!(first.director(), "Frank Darabont");
    assert_eq!(first.actors(), "Tim Robbins, Morgan Freeman");
    assert_eq!(first.genre(), "Dramă");

    // No "Cu:" line → actors stay missing.
    let second = &movies[1];
    assert_eq!(second.director(), "Cristian Mungiu, Hanno Höfer");
    assert_eq!(second.actors(), "N/A");
    assert_eq!(second.genre(), "Comedie, Dramă");

    // No cast list at all.
    let third = &movies[2];
    assert_eq!(third.imdb_rating(), "0");
    assert_eq!(
        [third.director(), third.actors(), third.genre()],
        ["N/A", "N/A", "N/A"]
    );

    // Bare listing: every field falls back.
    assert_eq!(movies[3], Default::default());
}

#[test]
fn same_markup_same_movies() {
    let spec = MovieSpec::new().unwrap();
    assert_eq!(spec.parse_page(PAGE), spec.parse_page(PAGE));
}
