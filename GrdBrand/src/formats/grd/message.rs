//! Read-only view of a `<message>` element

use super::{MEANING_ATTR, NAME_ATTR, PLACEHOLDER_TAG, TRANSLATEABLE_ATTR};
use crate::error::{Error, Result};
use crate::formats::xml::XmlElement;

/// A named `<ph>` child and the text that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub name: String,
    pub tail: Option<String>,
}

/// One translatable unit of a resource document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceMessage {
    /// The message's `name` attribute (e.g. `IDS_PRODUCT_NAME`).
    pub name: Option<String>,
    /// Character data before the first child; `None` when there is none.
    pub raw_text: Option<String>,
    /// The `meaning` attribute, which separates otherwise identical texts.
    pub disambiguation_tag: Option<String>,
    /// Direct `<ph>` children in document order.
    pub placeholders: Vec<Placeholder>,
    /// `false` only for `translateable="false"`.
    pub translatable: bool,
}

impl ResourceMessage {
    /// Snapshot a `<message>` element.
    ///
    /// # Errors
    /// Returns [`Error::PlaceholderWithoutName`] if a `<ph>` has no `name`.
    pub fn from_element(element: &XmlElement) -> Result<Self> {
        let name = element.get(NAME_ATTR).map(str::to_owned);

        let placeholders = element
            .children_named(PLACEHOLDER_TAG)
            .map(|ph| -> Result<Placeholder> {
                let ph_name = ph.get(NAME_ATTR).ok_or_else(|| Error::PlaceholderWithoutName {
                    message: name.clone(),
                })?;
                Ok(Placeholder {
                    name: ph_name.to_owned(),
                    tail: ph.tail.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ResourceMessage {
            raw_text: element.text.clone(),
            disambiguation_tag: element.get(MEANING_ATTR).map(str::to_owned),
            placeholders,
            translatable: element.get(TRANSLATEABLE_ATTR) != Some("false"),
            name,
        })
    }

    /// The text a translation ID is computed from.
    ///
    /// Body text followed by, for each placeholder, its uppercased name and its
    /// tail; then triple-quote stripped. `None` when the body text is absent.
    #[must_use]
    pub fn identifier_text(&self) -> Option<String> {
        let mut text = self.raw_text.clone()?;
        for placeholder in &self.placeholders {
            text.push_str(&placeholder.name.to_uppercase());
            text.push_str(placeholder.tail.as_deref().unwrap_or_default());
        }
        Some(strip_triple_quotes(&text).to_owned())
    }
}

/// Strip surrounding whitespace and one pair of `'''` quotes.
///
/// Some resource strings are wrapped in triple quotes to keep leading or
/// trailing whitespace; neither the quotes nor that whitespace are part of
/// the translation ID.
#[must_use]
pub fn strip_triple_quotes(val: &str) -> &str {
    let val = val.trim();
    let val = val.strip_prefix("'''").unwrap_or(val);
    let val = val.strip_suffix("'''").unwrap_or(val);
    val.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::xml::parse_xml;

    #[test]
    fn test_identifier_text_joins_placeholders() {
        let element = parse_xml(
            r#"<message name="IDS_A" meaning="menu">Open <ph name="url">$1</ph> in <ph name="BROWSER"/></message>"#,
        )
        .unwrap();
        let message = ResourceMessage::from_element(&element).unwrap();

        assert_eq!(message.name.as_deref(), Some("IDS_A"));
        assert_eq!(message.disambiguation_tag.as_deref(), Some("menu"));
        assert!(message.translatable);
        assert_eq!(message.identifier_text().as_deref(), Some("Open URL in BROWSER"));
    }

    #[test]
    fn test_absent_text_has_no_identifier_text() {
        let element = parse_xml(r#"<message><ph name="A"/> tail</message>"#).unwrap();
        let message = ResourceMessage::from_element(&element).unwrap();
        assert_eq!(message.raw_text, None);
        assert_eq!(message.identifier_text(), None);
    }

    #[test]
    fn test_translateable_false() {
        let element = parse_xml(r#"<message translateable="false">Chromium</message>"#).unwrap();
        assert!(!ResourceMessage::from_element(&element).unwrap().translatable);
    }

    #[test]
    fn test_placeholder_without_name() {
        let element = parse_xml(r#"<message name="IDS_B">a <ph/> b</message>"#).unwrap();
        assert!(matches!(
            ResourceMessage::from_element(&element),
            Err(Error::PlaceholderWithoutName { message: Some(_) })
        ));
    }

    #[test]
    fn test_strip_triple_quotes() {
        assert_eq!(strip_triple_quotes("  '''  padded  '''\n"), "padded");
        assert_eq!(strip_triple_quotes("'''only leading"), "only leading");
        assert_eq!(strip_triple_quotes("plain"), "plain");
    }
}
