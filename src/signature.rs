//! Declarative header signatures
//!
//! A [`Signature`] is a list of [`FieldRule`]s, all of them must hold for a
//! header to match. Values are compared on their normalized form: leading and
//! trailing whitespaces are ignored, and so is the case.
use serde::{Deserialize, Serialize};

use crate::card::normalize;
use crate::header::Header;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Matcher {
    /// The value must be equal to the expected one
    Exact(String),
    /// The value must be equal to one of the accepted ones
    OneOf(Vec<String>),
}

impl Matcher {
    fn accepts(&self, normalized: &str) -> bool {
        match self {
            Matcher::Exact(expected) => normalize(expected) == normalized,
            Matcher::OneOf(accepted) => accepted.iter().any(|a| normalize(a) == normalized),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRule {
    /// Keyword of the card, case sensitive
    pub key: String,
    pub matcher: Matcher,
}

impl FieldRule {
    pub fn exact<K: Into<String>, V: Into<String>>(key: K, expected: V) -> Self {
        Self {
            key: key.into(),
            matcher: Matcher::Exact(expected.into()),
        }
    }

    pub fn one_of<K, I, V>(key: K, accepted: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            key: key.into(),
            matcher: Matcher::OneOf(accepted.into_iter().map(Into::into).collect()),
        }
    }

    /// A missing keyword never matches
    pub fn matches(&self, header: &Header) -> bool {
        match header.get(&self.key) {
            Some(value) => {
                let observed = value.normalized();
                let ok = self.matcher.accepts(&observed);
                if !ok {
                    log::trace!("{}: {:?} does not match {:?}", self.key, observed, self.matcher);
                }
                ok
            }
            None => {
                log::trace!("{}: keyword not found", self.key);
                false
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    pub name: String,
    pub rules: Vec<FieldRule>,
}

impl Signature {
    pub fn new<N: Into<String>>(name: N, rules: Vec<FieldRule>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }

    /// Whether every rule holds, stopping at the first failing one
    pub fn matches(&self, header: &Header) -> bool {
        matches(header, self)
    }
}

pub fn matches(header: &Header, signature: &Signature) -> bool {
    signature.rules.iter().all(|rule| rule.matches(header))
}
