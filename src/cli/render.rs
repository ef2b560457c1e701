// src/cli/render.rs
use std::fmt::Write;

use crate::report::RatedMovie;

/// Compact fixed-width table of rated movies, at most `limit` rows when a
/// limit is given. The `#` column is the movie's place in the crawl.
pub fn table(rated: &[RatedMovie<'_>], limit: Option<usize>) -> String {
    let shown = limit.unwrap_or(rated.len()).min(rated.len());
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4} | {:<32} | {:>5} | {:<22} | {:<28} | {:<18}",
        "#", "Title", "IMDb", "Director", "Actors", "Genre"
    );
    let _ = writeln!(out, "{}", "-".repeat(124));

    for r in &rated[..shown] {
        let m = r.movie;
        let _ = writeln!(
            out,
            "{:>4} | {:<32} | {:>5.1} | {:<22} | {:<28} | {:<18}",
            r.index,
            truncate(m.title(), 32),
            r.rating,
            truncate(m.director(), 22),
            truncate(m.actors(), 28),
            truncate(m.genre(), 18),
        );
    }

    if rated.len() > shown {
        let _ = writeln!(out, "... {} more", rated.len() - shown);
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
