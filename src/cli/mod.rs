// src/cli/mod.rs
pub mod progress;
pub mod render;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::{
    config::options::{AppOptions, ExportFormat, PageCount, ScrapeOptions},
    core::net::HttpFetcher,
    data::MovieCollection,
    error::Result,
    file, report,
    scrape::collect_movies,
    specs::MovieSpec,
};
use progress::CliProgress;

#[derive(Debug, Parser)]
#[command(name = "cinemagia_scrape", version, about = "Scrape movie listings from cinemagia.ro")]
pub struct Cli {
    /// More log output (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scrape and write every movie to a CSV/TSV file
    Export {
        #[command(flatten)]
        crawl: CrawlArgs,
        /// Output file [default: out/movies.<format>]
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
        /// Leave out the header line
        #[arg(long)]
        no_headers: bool,
    },
    /// Scrape, then print rating statistics and the rated movies
    Report {
        #[command(flatten)]
        crawl: CrawlArgs,
        /// Max table rows to print [default: all]
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

#[derive(Debug, Args)]
pub struct CrawlArgs {
    /// Number of listing pages to fetch, starting at page 1
    #[arg(short, long, default_value_t = PageCount::default(), value_parser = parse_pages)]
    pub pages: PageCount,
    /// Pages fetched at once (1 = one after another)
    #[arg(short, long, default_value_t = 1)]
    pub workers: usize,
}

impl CrawlArgs {
    fn scrape_options(&self) -> ScrapeOptions {
        ScrapeOptions::new(self.pages).with_workers(self.workers)
    }
}

fn parse_pages(s: &str) -> Result<PageCount, String> {
    s.parse().map_err(|e: crate::error::Error| e.to_string())
}

/// Build options from the parsed command line and run it.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Export { crawl, out, format, no_headers } => {
            let mut opts = AppOptions { scrape: crawl.scrape_options(), ..AppOptions::default() };
            opts.export.format = format;
            opts.export.include_headers = !no_headers;
            if let Some(out) = out {
                opts.export.set_path(&out.to_string_lossy());
            }

            let movies = crawl_site(&opts.scrape)?;
            let path = file::write_export(&opts.export, &movies)?;
            println!("Wrote {} movies to {}", movies.len(), path.display());
            Ok(())
        }
        Command::Report { crawl, limit } => {
            let movies = crawl_site(&crawl.scrape_options())?;
            let rated = report::clean(&movies);
            info!("Report: {} of {} movies rated", rated.len(), movies.len());

            println!("{}", report::Summary::of(&rated));
            println!();
            print!("{}", render::table(&rated, limit));
            Ok(())
        }
    }
}

fn crawl_site(opts: &ScrapeOptions) -> Result<MovieCollection> {
    let spec = MovieSpec::new()?;
    let fetcher = HttpFetcher::new();
    let mut prog = CliProgress::new();

    // → This is where the scrape happens ←
    let movies = collect_movies(&fetcher, &spec, opts, Some(&mut prog));

    if prog.failed() > 0 {
        eprintln!(
            "{} of {} pages failed and were skipped: {:?}",
            prog.failed(),
            opts.pages,
            prog.failed_pages()
        );
    }
    Ok(movies)
}
