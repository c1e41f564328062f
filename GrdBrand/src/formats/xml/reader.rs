//! XML reading into an [`XmlElement`] tree
//!
//! Comments, processing instructions and the doctype are dropped, and the XML
//! declaration is not retained.

use super::document::XmlElement;
use crate::error::{Error, Result};
use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use std::fs;
use std::path::Path;

/// Read an XML file from disk
///
/// # Errors
/// Returns an error if the file cannot be read or has invalid XML.
pub fn read_xml<P: AsRef<Path>>(path: P) -> Result<XmlElement> {
    let content = fs::read_to_string(path)?;
    parse_xml(&content)
}

/// Parse an XML string into its root element
///
/// # Errors
/// Returns an error if the XML is malformed or has no root element.
pub fn parse_xml(content: &str) -> Result<XmlElement> {
    let mut reader = Reader::from_str(content);
    // Whitespace is content here: message text and tails must survive as-is
    reader.trim_text(false);

    let mut buf = Vec::new();
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                stack.push(element_from_start(&e)?);
            }
            Ok(Event::Empty(e)) => {
                let element = element_from_start(&e)?;
                attach(&mut stack, &mut root, element);
            }
            Ok(Event::End(e)) => {
                let found = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                let Some(element) = stack.pop() else {
                    return Err(Error::MismatchedEndTag {
                        expected: String::new(),
                        found,
                    });
                };
                if element.tag != found {
                    return Err(Error::MismatchedEndTag {
                        expected: element.tag,
                        found,
                    });
                }
                attach(&mut stack, &mut root, element);
            }
            Ok(Event::Text(e)) => {
                let text = e.unescape().map_err(Error::XmlError)?;
                append_text(&mut stack, &text);
            }
            Ok(Event::CData(e)) => {
                let text = String::from_utf8(e.into_inner().into_owned())?;
                append_text(&mut stack, &text);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::XmlError(e)),
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.pop() {
        return Err(Error::MismatchedEndTag {
            expected: open.tag,
            found: String::new(),
        });
    }

    root.ok_or(Error::EmptyDocument)
}

fn element_from_start(e: &BytesStart<'_>) -> Result<XmlElement> {
    let mut element = XmlElement::new(String::from_utf8_lossy(e.name().as_ref()).into_owned());
    for attr in e.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let raw = std::str::from_utf8(&attr.value).map_err(|err| Error::XmlAttrError(err.to_string()))?;
        let value = unescape(&normalize_attribute_whitespace(raw))
            .map_err(|err| Error::XmlError(err.into()))?
            .into_owned();
        element.attributes.insert(key, value);
    }
    Ok(element)
}

/// Attribute-value normalization: literal line breaks and tabs become spaces.
///
/// Applied before entity expansion, so `&#10;` still yields a newline.
fn normalize_attribute_whitespace(raw: &str) -> String {
    raw.replace("\r\n", " ").replace(['\r', '\n', '\t'], " ")
}

/// Close `element` into its parent, or make it the document root.
fn attach(stack: &mut [XmlElement], root: &mut Option<XmlElement>, element: XmlElement) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    } else if root.is_none() {
        *root = Some(element);
    } else {
        tracing::warn!("Ignoring extra top-level element <{}>", element.tag);
    }
}

/// Character data goes to the open element's text until it has children,
/// after which it belongs to the tail of the last child.
fn append_text(stack: &mut [XmlElement], text: &str) {
    let Some(open) = stack.last_mut() else {
        return;
    };
    let text = text.replace("\r\n", "\n");
    let slot = match open.children.last_mut() {
        Some(last) => &mut last.tail,
        None => &mut open.text,
    };
    slot.get_or_insert_with(String::new).push_str(&text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_tails() {
        let root = parse_xml(
            r#"<message name="IDS_X">Open <ph name="URL">$1<ex>x</ex></ph> now</message>"#,
        )
        .unwrap();

        assert_eq!(root.tag, "message");
        assert_eq!(root.get("name"), Some("IDS_X"));
        assert_eq!(root.text.as_deref(), Some("Open "));
        assert_eq!(root.children.len(), 1);

        let ph = &root.children[0];
        assert_eq!(ph.get("name"), Some("URL"));
        assert_eq!(ph.text.as_deref(), Some("$1"));
        assert_eq!(ph.tail.as_deref(), Some(" now"));
        assert_eq!(ph.children[0].text.as_deref(), Some("x"));
    }

    #[test]
    fn test_absent_text_before_first_child() {
        let root = parse_xml(r#"<message><ph name="A"/>tail</message>"#).unwrap();
        assert_eq!(root.text, None);
        assert_eq!(root.children[0].tail.as_deref(), Some("tail"));

        let empty = parse_xml("<message></message>").unwrap();
        assert_eq!(empty.text, None);
    }

    #[test]
    fn test_entities_are_unescaped() {
        let root = parse_xml("<m a=\"&quot;x&quot;\">Tom &amp; Jerry &lt;3</m>").unwrap();
        assert_eq!(root.get("a"), Some("\"x\""));
        assert_eq!(root.text.as_deref(), Some("Tom & Jerry <3"));
    }

    #[test]
    fn test_attribute_whitespace_is_normalized() {
        let root = parse_xml("<message meaning=\"menu\n  item\" desc=\"a\r\nb\tc\" x=\"1&#10;2\">Hi</message>").unwrap();
        assert_eq!(root.get("meaning"), Some("menu   item"));
        assert_eq!(root.get("desc"), Some("a b c"));
        // Character references are not whitespace in the source
        assert_eq!(root.get("x"), Some("1\n2"));
    }

    #[test]
    fn test_comments_and_doctype_dropped() {
        let root = parse_xml(
            "<?xml version=\"1.0\" ?>\n<!DOCTYPE translationbundle>\n<translationbundle lang=\"es\"><!-- note --><translation id=\"1\">Hola</translation></translationbundle>",
        )
        .unwrap();
        assert_eq!(root.tag, "translationbundle");
        assert_eq!(root.text, None);
        assert_eq!(root.children.len(), 1);
    }

    #[test]
    fn test_malformed_is_error() {
        assert!(parse_xml("<a><b></a>").is_err());
        assert!(parse_xml("<a>").is_err());
        assert!(matches!(parse_xml("   "), Err(Error::EmptyDocument)));
    }
}
