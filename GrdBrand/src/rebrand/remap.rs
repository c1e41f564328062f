//! Old-to-new translation ID mapping

use crate::branding::MessageId;
use std::collections::HashMap;

/// Where a vendor translation ID moved to after branding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemapEntry {
    /// ID of the branded message.
    pub new_id: MessageId,
    /// Whether the source message needed provider substitution; its
    /// translations get the same treatment.
    pub provider_substitution: bool,
}

/// Vendor translation ID to [`RemapEntry`], for every translatable message
/// that had text both before and after branding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierRemap {
    entries: HashMap<MessageId, RemapEntry>,
}

impl IdentifierRemap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mapping, replacing any previous one for `old_id`.
    pub fn insert(&mut self, old_id: MessageId, entry: RemapEntry) {
        self.entries.insert(old_id, entry);
    }

    #[must_use]
    pub fn get(&self, old_id: MessageId) -> Option<&RemapEntry> {
        self.entries.get(&old_id)
    }

    #[must_use]
    pub fn contains(&self, old_id: MessageId) -> bool {
        self.entries.contains_key(&old_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add all of `other`'s entries; on conflict `other` wins.
    pub fn merge(&mut self, other: IdentifierRemap) {
        self.entries.extend(other.entries);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MessageId, &RemapEntry)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64, provider: bool) -> RemapEntry {
        RemapEntry {
            new_id: MessageId(id),
            provider_substitution: provider,
        }
    }

    #[test]
    fn test_merge_later_wins() {
        let mut primary = IdentifierRemap::new();
        primary.insert(MessageId(1), entry(10, false));
        primary.insert(MessageId(2), entry(20, false));

        let mut part = IdentifierRemap::new();
        part.insert(MessageId(2), entry(21, true));
        part.insert(MessageId(3), entry(30, false));

        primary.merge(part);

        assert_eq!(primary.len(), 3);
        assert_eq!(primary.get(MessageId(2)), Some(&entry(21, true)));
        assert!(primary.contains(MessageId(3)));
        assert!(!primary.contains(MessageId(4)));
    }
}
