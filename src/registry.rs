//! Registry of the known formats
//!
//! Formats are tried in registration order against a header read once per
//! file, the first one matching gives the identified format.
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::catalog::FormatCatalog;
use crate::error::Error;
use crate::formats::spex;
use crate::identify::FormatIdentifier;
use crate::reader::HeaderReader;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatEntry {
    pub name: String,
    pub catalog: FormatCatalog,
    /// Usual file extensions, for information only
    pub extensions: Vec<String>,
}

impl FormatEntry {
    pub fn new<N: Into<String>>(name: N, catalog: FormatCatalog, extensions: &[&str]) -> Self {
        Self {
            name: name.into(),
            catalog,
            extensions: extensions.iter().map(|e| (*e).to_owned()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    entries: Vec<FormatEntry>,
}

static BUILTIN: LazyLock<Registry> = LazyLock::new(|| {
    Registry::new()
        .with_format(FormatEntry::new(
            "Spex Prism",
            FormatCatalog::single(spex::prism_signature().clone()),
            &["fits"],
        ))
        .with_format(FormatEntry::new(
            "SpeX SXD",
            FormatCatalog::single(spex::sxd_signature().clone()),
            &["fits"],
        ))
});

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The formats known by this crate
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    pub fn with_format(mut self, entry: FormatEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FormatEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn formats(&self) -> impl Iterator<Item = &FormatEntry> {
        self.entries.iter()
    }

    /// Identify the format of a file, reading its header only once
    ///
    /// Returns `Ok(None)` when no format matches or, outside strict mode,
    /// when the header could not be read.
    pub fn identify<R: HeaderReader>(
        &self,
        identifier: &FormatIdentifier<R>,
        mode: &str,
        file_ref: &str,
    ) -> Result<Option<&FormatEntry>, Error> {
        log::trace!("identify {} in mode {:?}", file_ref, mode);
        let Some(header) = identifier.read_header(file_ref)? else {
            return Ok(None);
        };
        let entry = self.entries.iter().find(|e| e.catalog.matches(&header));
        match entry {
            Some(e) => log::debug!("{}: identified as {}", file_ref, e.name),
            None => log::debug!("{}: unknown format", file_ref),
        }
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::{FormatEntry, Registry};
    use crate::catalog::FormatCatalog;
    use crate::error::Error;
    use crate::header::Header;
    use crate::identify::{FormatIdentifier, IdentifyOptions};
    use crate::signature::{FieldRule, Signature};

    fn spex_header(grat: &str) -> Header {
        [
            ("TELESCOP", "NASA IRTF"),
            ("INSTRUME", "SPeX, IRTF Spectrograph"),
            ("GRAT", grat),
            ("XUNITS", "Microns "),
            ("YUNITS", "ergs s-1 cm-2 A-1"),
        ]
        .into_iter()
        .collect()
    }

    fn reading(header: Header) -> impl Fn(&str) -> Result<Header, Error> {
        move |_: &str| Ok(header.clone())
    }

    #[test]
    fn test_builtin_formats() {
        let registry = Registry::builtin();
        assert_eq!(
            registry.formats().map(|e| e.name.as_str()).collect::<Vec<_>>(),
            vec!["Spex Prism", "SpeX SXD"]
        );
        assert_eq!(registry.get("Spex Prism").map(|e| e.extensions.clone()), Some(vec!["fits".to_owned()]));
        assert!(registry.get("Spex").is_none());
    }

    #[test]
    fn test_identify_dispatch() {
        let registry = Registry::builtin();

        let identifier = FormatIdentifier::new(reading(spex_header("LowRes15 ")));
        let entry = registry.identify(&identifier, "read", "U10013_SpeX.fits").unwrap();
        assert_eq!(entry.map(|e| e.name.as_str()), Some("Spex Prism"));

        let identifier = FormatIdentifier::new(reading(spex_header("ShortXD")));
        let entry = registry.identify(&identifier, "read", "sxd.fits").unwrap();
        assert_eq!(entry.map(|e| e.name.as_str()), Some("SpeX SXD"));

        let identifier = FormatIdentifier::new(reading(spex_header("MISSING")));
        assert_eq!(registry.identify(&identifier, "read", "other.fits"), Ok(None));
    }

    #[test]
    fn test_identify_read_failure() {
        let failing = |r: &str| -> Result<Header, Error> { Err(Error::NotFound(r.to_owned())) };
        let registry = Registry::builtin();

        let identifier = FormatIdentifier::new(failing);
        assert_eq!(registry.identify(&identifier, "read", "nowhere.fits"), Ok(None));

        let identifier = FormatIdentifier::new(failing).with_options(IdentifyOptions::strict());
        assert_eq!(
            registry.identify(&identifier, "read", "nowhere.fits"),
            Err(Error::NotFound("nowhere.fits".to_owned()))
        );
    }

    #[test]
    fn test_first_registered_wins() {
        let any = FormatCatalog::single(Signature::new("any", vec![]));
        let grat = FormatCatalog::single(Signature::new("grat", vec![FieldRule::exact("GRAT", "ShortXD")]));
        let registry = Registry::new()
            .with_format(FormatEntry::new("specific", grat, &[]))
            .with_format(FormatEntry::new("fallback", any, &[]));

        let identifier = FormatIdentifier::new(reading(spex_header("ShortXD")));
        let entry = registry.identify(&identifier, "read", "f").unwrap();
        assert_eq!(entry.map(|e| e.name.as_str()), Some("specific"));

        let identifier = FormatIdentifier::new(reading(Header::new()));
        let entry = registry.identify(&identifier, "read", "f").unwrap();
        assert_eq!(entry.map(|e| e.name.as_str()), Some("fallback"));
    }
}
