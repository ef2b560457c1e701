// src/progress.rs
use crate::error::FetchError;

/// Progress reporting for a crawl. Frontends implement this to surface
/// status to users; every method has a no-op default.
pub trait Progress {
    /// Called once with the number of pages about to be attempted.
    fn begin(&mut self, _total: usize) {}

    /// A page was fetched and parsed into `_records` movies.
    fn page_done(&mut self, _page: u32, _records: usize) {}

    /// A page could not be fetched; the crawl goes on without it.
    fn page_failed(&mut self, _page: u32, _err: &FetchError) {}

    /// Called at the end, however many pages made it.
    fn finish(&mut self) {}
}
