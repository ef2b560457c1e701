// src/scrape.rs
use std::{
    sync::{ mpsc, atomic::{ AtomicU64, Ordering }},
    thread,
    time::Instant,
};

use tracing::{info, warn};

use crate::{
    config::options::{PageCount, ScrapeOptions},
    core::net::{Fetch, HttpFetcher},
    data::{Movie, MovieCollection},
    error::{FetchError, Result},
    progress::Progress,
    specs::MovieSpec,
};

/// Crawl `pages` listing pages of the live site, one after another.
pub fn scrape(pages: PageCount) -> Result<MovieCollection> {
    let spec = MovieSpec::new()?;
    Ok(collect_movies(&HttpFetcher::new(), &spec, &ScrapeOptions::new(pages), None))
}

/// Fetch and parse pages `1..=opts.pages`, appending each page's movies in
/// page order. A page that fails to fetch is logged, reported to `progress`
/// and skipped; it never stops the crawl.
pub fn collect_movies<F: Fetch + ?Sized>(
    fetcher: &F,
    spec: &MovieSpec,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> MovieCollection {
    let total = opts.pages.get();
    let t = Instant::now();
    info!("Scrape: Begin pages={total} workers={}", opts.workers);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(total as usize);
    }

    let movies = if opts.workers <= 1 || total == 1 {
        collect_sequential(fetcher, spec, opts.pages, &mut progress)
    } else {
        collect_parallel(fetcher, spec, opts, &mut progress)
    };

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    info!("Scrape: Done movies={} in {:?}", movies.len(), t.elapsed());
    movies
}

fn collect_sequential<F: Fetch + ?Sized>(
    fetcher: &F,
    spec: &MovieSpec,
    pages: PageCount,
    progress: &mut Option<&mut dyn Progress>,
) -> MovieCollection {
    let mut movies = MovieCollection::new();
    for page in pages.pages() {
        let result = fetch_and_parse(fetcher, spec, page);
        if let Some(found) = record(page, result, progress) {
            movies.extend_page(found);
        }
    }
    movies
}

/// Up to `opts.workers` threads claim pages from a shared counter. Pages
/// that made it are sorted back by index, so the final order matches a
/// sequential run.
fn collect_parallel<F: Fetch + ?Sized>(
    fetcher: &F,
    spec: &MovieSpec,
    opts: &ScrapeOptions,
    progress: &mut Option<&mut dyn Progress>,
) -> MovieCollection {
    let total = opts.pages.get();
    let workers = opts.workers.min(total as usize).max(1);
    // Wider than a page number so claiming past u32::MAX cannot wrap.
    let next = AtomicU64::new(1);
    let mut per_page: Vec<(u32, Vec<Movie>)> = Vec::new();

    thread::scope(|scope| {
        let (tx, rx) = mpsc::channel::<(u32, Result<Vec<Movie>, FetchError>)>();

        for _ in 0..workers {
            let tx = tx.clone();
            let next = &next;
            scope.spawn(move || {
                loop {
                    let claimed = next.fetch_add(1, Ordering::Relaxed);
                    let Ok(page) = u32::try_from(claimed) else { break };
                    if page > total {
                        break;
                    }
                    let result = fetch_and_parse(fetcher, spec, page);
                    if tx.send((page, result)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(tx); // this thread is the sole receiver now

        for (page, result) in rx {
            if let Some(found) = record(page, result, progress) {
                per_page.push((page, found));
            }
        }
    });

    per_page.sort_by_key(|(page, _)| *page);
    let mut movies = MovieCollection::new();
    for (_, found) in per_page {
        movies.extend_page(found);
    }
    movies
}

fn fetch_and_parse<F: Fetch + ?Sized>(
    fetcher: &F,
    spec: &MovieSpec,
    page: u32,
) -> Result<Vec<Movie>, FetchError> {
    let html_doc = timed!(format!("Page {page}: fetch"), fetcher.fetch_page(page))?;
    Ok(timed!(format!("Page {page}: parse"), spec.parse_page(&html_doc)))
}

/// Report one page outcome; hand back its movies if there are any to keep.
fn record(
    page: u32,
    result: Result<Vec<Movie>, FetchError>,
    progress: &mut Option<&mut dyn Progress>,
) -> Option<Vec<Movie>> {
    match result {
        Ok(found) => {
            if let Some(p) = progress.as_deref_mut() {
                p.page_done(page, found.len());
            }
            Some(found)
        }
        Err(e) => {
            warn!("Page {page}: skipped: {e}");
            if let Some(p) = progress.as_deref_mut() {
                p.page_failed(page, &e);
            }
            None
        }
    }
}
