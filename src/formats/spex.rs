//! SpeX, the medium resolution spectrograph of the NASA Infrared Telescope
//! Facility
//!
//! Reduced SpeX spectra carry the grating used in the `GRAT` card: `LowRes15`
//! for the prism mode, `ShortXD`/`LongXD*` for the cross-dispersed modes.
//! The public predicates only look at the header, never at the file name.
use std::sync::LazyLock;

use crate::catalog::FormatCatalog;
use crate::error::Error;
use crate::identify::FormatIdentifier;
use crate::reader::{FitsHeaderReader, HeaderReader};
use crate::signature::{FieldRule, Signature};

const TELESCOPE: &str = "NASA IRTF";
const INSTRUMENT: &str = "SPeX, IRTF Spectrograph";

static PRISM: LazyLock<Signature> = LazyLock::new(|| {
    Signature::new(
        "SpeX Prism",
        vec![
            FieldRule::exact("TELESCOP", TELESCOPE),
            FieldRule::exact("INSTRUME", INSTRUMENT),
            FieldRule::exact("GRAT", "LowRes15"),
            FieldRule::exact("XUNITS", "Microns"),
            FieldRule::exact("YUNITS", "ergs s-1 cm-2 A-1"),
        ],
    )
});

static SXD: LazyLock<Signature> = LazyLock::new(|| {
    Signature::new(
        "SpeX SXD",
        vec![
            FieldRule::exact("TELESCOP", TELESCOPE),
            FieldRule::exact("INSTRUME", INSTRUMENT),
            FieldRule::one_of("GRAT", ["ShortXD", "LongXD1.9", "LongXD2.1", "LongXD2.3"]),
            FieldRule::exact("XUNITS", "Microns"),
        ],
    )
});

static PRISM_CATALOG: LazyLock<FormatCatalog> =
    LazyLock::new(|| FormatCatalog::single(PRISM.clone()));

static FAMILY: LazyLock<FormatCatalog> = LazyLock::new(|| {
    FormatCatalog::new("SpeX")
        .with_signature(PRISM.clone())
        .with_signature(SXD.clone())
});

pub fn prism_signature() -> &'static Signature {
    &PRISM
}

pub fn sxd_signature() -> &'static Signature {
    &SXD
}

/// Every known SpeX variant, the prism first
pub fn spex_family() -> &'static FormatCatalog {
    &FAMILY
}

impl<R> FormatIdentifier<R>
where
    R: HeaderReader,
{
    /// Whether the file is a SpeX prism spectrum
    pub fn identify_spex_prism(&self, mode: &str, file_ref: &str) -> Result<bool, Error> {
        self.identify(mode, file_ref, &PRISM_CATALOG)
    }

    /// Whether the file comes from SpeX, whatever its grating
    pub fn identify_spex(&self, file_ref: &str) -> Result<bool, Error> {
        self.identify_family(file_ref, spex_family())
    }
}

/// Whether the file is a SpeX prism spectrum
///
/// Unreadable or unresolvable files are reported as not matching.
///
/// # Params
/// * `mode` - the I/O mode of the caller, any value is accepted
/// * `file_ref` - a path, a `file://` URL or, with the `remote` feature, an `http(s)://` URL
pub fn identify_spex_prism(mode: &str, file_ref: &str) -> bool {
    FormatIdentifier::new(FitsHeaderReader)
        .identify_spex_prism(mode, file_ref)
        .unwrap_or(false)
}

/// Whether the file comes from SpeX, whatever its grating
pub fn identify_spex(file_ref: &str) -> bool {
    FormatIdentifier::new(FitsHeaderReader)
        .identify_spex(file_ref)
        .unwrap_or(false)
}
