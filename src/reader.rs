//! Access to the header of a file from a reference to it
//!
//! The identification only needs the primary header of a file. Everything
//! able to turn a reference into a [`Header`] can be used as a reader, so that
//! other stores or in-memory fixtures can be plugged in place of the built-in
//! one.
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use url::Url;

use crate::error::Error;
use crate::gz::GzReader;
use crate::header::Header;

pub trait HeaderReader {
    /// Open the file behind `file_ref` and return its primary header
    ///
    /// # Errors
    /// * [`Error::NotFound`] when the reference cannot be resolved
    /// * [`Error::UnreadableFile`] when the bytes are not a FITS primary header
    fn open(&self, file_ref: &str) -> Result<Header, Error>;
}

impl<F> HeaderReader for F
where
    F: Fn(&str) -> Result<Header, Error>,
{
    fn open(&self, file_ref: &str) -> Result<Header, Error> {
        self(file_ref)
    }
}

/// Reads the primary header of possibly gzip-compressed FITS files
///
/// References are paths, `file://` URLs or, with the `remote` feature,
/// `http(s)://` URLs. Only the bytes up to the `END` card are read.
#[derive(Debug, Default, Clone, Copy)]
pub struct FitsHeaderReader;

impl FitsHeaderReader {
    pub fn new() -> Self {
        Self
    }
}

impl HeaderReader for FitsHeaderReader {
    fn open(&self, file_ref: &str) -> Result<Header, Error> {
        match resolve(file_ref)? {
            Location::Local(path) => open_local(&path),
            Location::Remote(url) => open_remote(&url),
        }
    }
}

#[derive(Debug, PartialEq)]
enum Location {
    Local(PathBuf),
    Remote(Url),
}

fn resolve(file_ref: &str) -> Result<Location, Error> {
    // an existing file is never taken for a URL
    if Path::new(file_ref).exists() {
        return Ok(Location::Local(PathBuf::from(file_ref)));
    }
    match Url::parse(file_ref) {
        Ok(url) if url.scheme() == "file" => url
            .to_file_path()
            .map(Location::Local)
            .map_err(|_| Error::NotFound(file_ref.to_owned())),
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Location::Remote(url)),
        _ => Ok(Location::Local(PathBuf::from(file_ref))),
    }
}

fn open_local(path: &Path) -> Result<Header, Error> {
    // The file is closed when `reader` goes out of scope, on every path
    let f = File::open(path)?;
    let bufreader = BufReader::new(f);
    // Decorate the reader with a gz decoder
    let mut reader = GzReader::new(bufreader)?;
    Header::parse(&mut reader)
}

#[cfg(feature = "remote")]
fn open_remote(url: &Url) -> Result<Header, Error> {
    let response = reqwest::blocking::get(url.as_str())
        .and_then(|r| r.error_for_status())
        .map_err(|e| Error::NotFound(format!("{url}: {e}")))?;
    // The body is streamed and the connection dropped once `END` is read
    let mut reader = GzReader::from_buf_read(BufReader::new(response))?;
    Header::parse(&mut reader)
}

#[cfg(not(feature = "remote"))]
fn open_remote(url: &Url) -> Result<Header, Error> {
    Err(Error::NotFound(format!(
        "{url} (remote references need the `remote` feature)"
    )))
}
