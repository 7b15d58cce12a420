//! Identification of a file against catalogs of signatures
use serde::{Deserialize, Serialize};

use crate::catalog::FormatCatalog;
use crate::error::Error;
use crate::header::Header;
use crate::reader::{FitsHeaderReader, HeaderReader};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentifyOptions {
    /// Propagate the errors of the header reader instead of reporting
    /// an unreadable file as not matching
    pub strict: bool,
}

impl IdentifyOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// Decides whether files belong to a format from their primary header
///
/// Holds no state besides its reader and options: every call opens the file
/// once, evaluates its header and drops it.
#[derive(Debug, Clone)]
pub struct FormatIdentifier<R> {
    reader: R,
    options: IdentifyOptions,
}

impl Default for FormatIdentifier<FitsHeaderReader> {
    fn default() -> Self {
        Self::new(FitsHeaderReader)
    }
}

impl<R> FormatIdentifier<R>
where
    R: HeaderReader,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            options: IdentifyOptions::default(),
        }
    }

    pub fn with_options(mut self, options: IdentifyOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &IdentifyOptions {
        &self.options
    }

    /// Whether the file matches one of the signatures of `catalog`
    ///
    /// `mode` is accepted for any value and does not change the outcome.
    /// An error is only returned in strict mode, when the header cannot be read.
    pub fn identify(&self, mode: &str, file_ref: &str, catalog: &FormatCatalog) -> Result<bool, Error> {
        Ok(self.identify_format(mode, file_ref, catalog)?.is_some())
    }

    /// Family-level check, shared by the per-format predicates
    pub fn identify_family(&self, file_ref: &str, catalog: &FormatCatalog) -> Result<bool, Error> {
        Ok(self.identify_format("read", file_ref, catalog)?.is_some())
    }

    /// Name of the first signature of `catalog` matched by the file
    ///
    /// `Ok(None)` when none matches, or when the header cannot be read
    /// outside strict mode.
    pub fn identify_format(
        &self,
        mode: &str,
        file_ref: &str,
        catalog: &FormatCatalog,
    ) -> Result<Option<String>, Error> {
        log::trace!("identify {} in mode {:?}", file_ref, mode);
        let verdict = self.read_header(file_ref)?.and_then(|header| {
            catalog
                .find_match(&header)
                .map(|signature| signature.name.clone())
        });
        match &verdict {
            Some(signature) => log::debug!("{}: {} ({})", file_ref, catalog.name, signature),
            None => log::debug!("{}: not {}", file_ref, catalog.name),
        }
        Ok(verdict)
    }

    /// Read the header of a file, applying the strict policy
    ///
    /// `Ok(None)` stands for a read failure swallowed in non-strict mode.
    pub(crate) fn read_header(&self, file_ref: &str) -> Result<Option<Header>, Error> {
        match self.reader.open(file_ref) {
            Ok(header) => Ok(Some(header)),
            Err(err) if self.options.strict => Err(err),
            Err(err) => {
                log::warn!("{}: {}, considered as not matching", file_ref, err);
                Ok(None)
            }
        }
    }
}
