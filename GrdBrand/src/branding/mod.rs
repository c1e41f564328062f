//! Branding engine
//!
//! - [`profile`] - the distributor's names and the ordered rule lists
//! - [`rewriter`] - substitutions on strings and message elements
//! - [`fingerprint`] - translation IDs

pub mod fingerprint;
pub mod profile;
pub mod rewriter;

pub use fingerprint::{GritFingerprint, IdentifierFunction, MessageId};
pub use profile::{BrandProfile, BrandRule, UnbrandRule};
pub use rewriter::{rewrite, rewrite_element};
