use serde::{Deserialize, Serialize};

use crate::header::Header;
use crate::signature::Signature;

/// A family of signatures, for instance the gratings of one instrument
///
/// A header belongs to the family when it matches at least one of its
/// signatures. Signatures are tried in registration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatCatalog {
    pub name: String,
    pub signatures: Vec<Signature>,
}

impl FormatCatalog {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            signatures: Vec::new(),
        }
    }

    /// A catalog holding a single signature, named after it
    pub fn single(signature: Signature) -> Self {
        Self {
            name: signature.name.clone(),
            signatures: vec![signature],
        }
    }

    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.signatures.push(signature);
        self
    }

    /// Returns the first signature matched by the header
    pub fn find_match(&self, header: &Header) -> Option<&Signature> {
        self.signatures.iter().find(|s| s.matches(header))
    }

    pub fn matches(&self, header: &Header) -> bool {
        self.find_match(header).is_some()
    }
}
