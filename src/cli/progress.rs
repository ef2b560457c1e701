// src/cli/progress.rs
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::FetchError;
use crate::log;
use crate::progress::Progress;

/// Terminal progress bar over pages. Also keeps which pages failed so the
/// caller can tell the user once the crawl is over. The bar lives on
/// [`log::bars`], so log lines print above it instead of through it.
pub struct CliProgress {
    bar: ProgressBar,
    movies: usize,
    failed: Vec<u32>,
}

impl CliProgress {
    pub fn new() -> Self {
        Self { bar: ProgressBar::hidden(), movies: 0, failed: Vec::new() }
    }

    pub fn failed(&self) -> usize {
        self.failed.len()
    }

    /// Failed pages, ascending.
    pub fn failed_pages(&self) -> &[u32] {
        &self.failed
    }
}

impl Default for CliProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.bar = log::bars().add(ProgressBar::new(total as u64));
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} pages {msg}")
        {
            self.bar.set_style(style.progress_chars("=> "));
        }
    }

    fn page_done(&mut self, _page: u32, records: usize) {
        self.movies += records;
        self.bar.set_message(format!("({} movies)", self.movies));
        self.bar.inc(1);
    }

    fn page_failed(&mut self, page: u32, _err: &FetchError) {
        self.failed.push(page);
        self.bar.inc(1);
    }

    fn finish(&mut self) {
        self.failed.sort_unstable();
        self.bar.finish_and_clear();
        log::bars().remove(&self.bar);
    }
}
