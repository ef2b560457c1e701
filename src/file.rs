// src/file.rs

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;
use tracing::info;

use crate::config::options::ExportOptions;
use crate::data::{Movie, MovieCollection};
use crate::error::Result;

/// Column names after the unnamed leading index column.
pub const HEADERS: [&str; 5] = ["title", "imdb_rating", "director", "actors", "genre"];

/// One exported line. The index is the row's position in the collection.
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    index: usize,
    title: &'a str,
    imdb_rating: &'a str,
    director: &'a str,
    actors: &'a str,
    genre: &'a str,
}

impl<'a> ExportRow<'a> {
    fn new(index: usize, m: &'a Movie) -> Self {
        Self {
            index,
            title: m.title(),
            imdb_rating: m.imdb_rating(),
            director: m.director(),
            actors: m.actors(),
            genre: m.genre(),
        }
    }
}

/// Write the whole collection to the file `export` points at, creating
/// parent directories as needed. Returns the path written to.
pub fn write_export(export: &ExportOptions, movies: &MovieCollection) -> Result<PathBuf> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = fs::File::create(&path)?; // truncate/overwrite
    write_rows(file, export, movies)?;
    info!("Export: Wrote {} rows → {}", movies.len(), path.display());
    Ok(path)
}

/// Serialize `movies` into any writer using `export`'s delimiter and
/// header policy.
pub fn write_rows<W: Write>(w: W, export: &ExportOptions, movies: &MovieCollection) -> Result<()> {
    let mut out = csv::WriterBuilder::new()
        .delimiter(export.format.delim())
        .has_headers(false)
        .from_writer(w);

    if export.include_headers {
        let mut header = vec![""];
        header.extend(HEADERS);
        out.write_record(&header)?;
    }
    for (i, m) in movies.iter().enumerate() {
        out.serialize(ExportRow::new(i, m))?;
    }
    out.flush()?;
    Ok(())
}

/// Same as [`write_rows`], into a String.
pub fn to_export_string(export: &ExportOptions, movies: &MovieCollection) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_rows(&mut buf, export, movies)?;

    // Every field going in is a &str, so the bytes are UTF-8.
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!(
            "path exists but is not a directory: {}",
            dir.display()
        ))
        .into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
