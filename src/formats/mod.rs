//! Signatures of the instruments known by this crate
pub mod spex;
