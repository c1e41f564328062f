//! XML element serialization
//!
//! Output mirrors a plain element-tree serializer: no declaration, no added
//! whitespace, `<tag />` for empty elements, minimal escaping.

use super::document::XmlElement;
use crate::error::Result;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::borrow::Cow;

/// Escape the characters that must not appear raw in XML text content.
fn escape_text(s: &str) -> Cow<'_, str> {
    if s.contains(['&', '<', '>']) {
        Cow::Owned(
            s.replace('&', "&amp;")
                .replace('<', "&lt;")
                .replace('>', "&gt;"),
        )
    } else {
        Cow::Borrowed(s)
    }
}

/// Escape an attribute value for use inside double quotes.
fn escape_attribute(s: &str) -> Cow<'_, str> {
    if s.contains(['&', '<', '>', '"', '\n', '\r', '\t']) {
        Cow::Owned(
            s.replace('&', "&amp;")
                .replace('<', "&lt;")
                .replace('>', "&gt;")
                .replace('"', "&quot;")
                .replace('\n', "&#10;")
                .replace('\r', "&#13;")
                .replace('\t', "&#09;"),
        )
    } else {
        Cow::Borrowed(s)
    }
}

/// Serialize an element (without its tail) to an XML string
///
/// # Errors
/// Returns an error if XML serialization fails.
pub fn serialize_element(element: &XmlElement) -> Result<String> {
    let mut output = Vec::new();
    let mut writer = Writer::new(&mut output);
    write_element(&mut writer, element)?;
    finish(output)
}

/// Serialize the content of an element without its own start and end tags
///
/// # Errors
/// Returns an error if XML serialization fails.
pub fn inner_markup(element: &XmlElement) -> Result<String> {
    let mut output = Vec::new();
    let mut writer = Writer::new(&mut output);
    write_content(&mut writer, element)?;
    finish(output)
}

fn finish(output: Vec<u8>) -> Result<String> {
    let xml = String::from_utf8(output)?;
    // Escaped text and attributes never contain a raw '>', so this only touches tags
    Ok(xml.replace("/>", " />"))
}

fn write_element<W: std::io::Write>(writer: &mut Writer<W>, element: &XmlElement) -> Result<()> {
    let mut start = BytesStart::new(element.tag.as_str());
    for (key, value) in &element.attributes {
        let escaped = escape_attribute(value);
        start.push_attribute((key.as_bytes(), escaped.as_bytes()));
    }

    let has_text = element.text.as_deref().is_some_and(|t| !t.is_empty());
    if !has_text && element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start.borrow()))?;
    write_content(writer, element)?;
    writer.write_event(Event::End(BytesEnd::new(element.tag.as_str())))?;
    Ok(())
}

fn write_content<W: std::io::Write>(writer: &mut Writer<W>, element: &XmlElement) -> Result<()> {
    if let Some(text) = &element.text {
        write_text(writer, text)?;
    }
    for child in &element.children {
        write_element(writer, child)?;
        if let Some(tail) = &child.tail {
            write_text(writer, tail)?;
        }
    }
    Ok(())
}

fn write_text<W: std::io::Write>(writer: &mut Writer<W>, text: &str) -> Result<()> {
    if !text.is_empty() {
        writer.write_event(Event::Text(BytesText::from_escaped(escape_text(text))))?;
    }
    Ok(())
}
