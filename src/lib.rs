//! This crate identifies astronomical spectral files from their FITS header
//!
//! A file is recognized when its primary header holds the cards expected for
//! a given instrument. Values are compared regardless of case and surrounding
//! whitespaces, and the file name is never taken into account.
//!
//! # Examples
//!
//! Basic usage:
//!
//! ```no_run
//! use fitsid::formats::spex::{identify_spex, identify_spex_prism};
//!
//! if identify_spex_prism("read", "samples/U10013_SpeX.fits") {
//!     // ... hand the file to the prism spectrum loader
//! }
//! assert!(!identify_spex("I am not a valid spex prism file"));
//! ```
//!
//! Headers can come from anything implementing [`HeaderReader`], which
//! allows plugging a remote store or in-memory headers:
//!
//! ```
//! use fitsid::{Error, FormatIdentifier, Header};
//!
//! let reader = |_: &str| -> Result<Header, Error> {
//!     Ok([
//!         ("TELESCOP", "NASA IRTF"),
//!         ("INSTRUME", "SPeX, IRTF Spectrograph"),
//!         ("GRAT", "LowRes15 "),
//!         ("XUNITS", "Microns "),
//!         ("YUNITS", "ergs s-1 cm-2 A-1"),
//!     ]
//!     .into_iter()
//!     .collect())
//! };
//! let identifier = FormatIdentifier::new(reader);
//! assert_eq!(identifier.identify_spex_prism("read", "https://example.com/U10013_SpeX.fits"), Ok(true));
//! ```

#[macro_use]
extern crate quick_error;

pub mod card;
pub mod catalog;
pub mod error;
pub mod formats;
pub mod gz;
pub mod header;
pub mod identify;
pub mod reader;
pub mod registry;
pub mod signature;

pub use card::Value;
pub use catalog::FormatCatalog;
pub use error::Error;
pub use header::Header;
pub use identify::{FormatIdentifier, IdentifyOptions};
pub use reader::{FitsHeaderReader, HeaderReader};
pub use registry::{FormatEntry, Registry};
pub use signature::{FieldRule, Matcher, Signature};
