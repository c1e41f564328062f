//! GRIT translation IDs
//!
//! A message's translation ID is a 63-bit fingerprint of its text (and its
//! meaning, when present). It is the only link between a GRD message and its
//! XTB translations, so it must match what GRIT itself computes.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// A GRIT translation ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MessageId {
    type Err = Error;

    /// Only the canonical decimal form is accepted, the one [`Display`]
    /// writes: no sign, no surrounding whitespace, no leading zeros.
    ///
    /// [`Display`]: fmt::Display
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = !s.is_empty()
            && s.bytes().all(|b| b.is_ascii_digit())
            && !(s.len() > 1 && s.starts_with('0'));
        match s.parse() {
            Ok(id) if canonical => Ok(MessageId(id)),
            _ => Err(Error::InvalidMessageId(s.to_owned())),
        }
    }
}

/// Maps message text plus an optional meaning to a translation ID.
///
/// Implementations must be pure: equal inputs always give equal IDs.
pub trait IdentifierFunction {
    fn compute_identifier(&self, text: &str, meaning: Option<&str>) -> MessageId;
}

/// GRIT's MD5-based message fingerprint.
#[derive(Debug, Clone, Copy, Default)]
pub struct GritFingerprint;

const ID_MASK: u64 = 0x7fff_ffff_ffff_ffff;

/// First 64 bits of the MD5 digest, big-endian.
fn fingerprint(s: &str) -> u64 {
    let digest = md5::compute(s.as_bytes());
    let mut high = [0_u8; 8];
    high.copy_from_slice(&digest.0[..8]);
    u64::from_be_bytes(high)
}

impl IdentifierFunction for GritFingerprint {
    fn compute_identifier(&self, text: &str, meaning: Option<&str>) -> MessageId {
        let mut fp = fingerprint(text);

        if let Some(meaning) = meaning.filter(|m| !m.is_empty()) {
            // Signed arithmetic in GRIT; only the low 63 bits survive the mask,
            // so wrapping unsigned arithmetic gives the same result.
            let negative = fp >> 63 == 1;
            fp = fingerprint(meaning)
                .wrapping_add(fp.wrapping_shl(1))
                .wrapping_add(u64::from(negative));
        }

        MessageId(fp & ID_MASK)
    }
}
