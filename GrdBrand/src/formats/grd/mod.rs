//! GRD / GRDP resource-definition documents
//!
//! A GRD file is the top-level GRIT resource description: `<messages>` holding
//! `<message>` and `<part>` elements, and `<translations>` holding one `<file>`
//! per locale XTB bundle. A GRDP file is a `<grit-part>` fragment included
//! through a `<part>` element.

mod message;

pub use message::{Placeholder, ResourceMessage, strip_triple_quotes};

use crate::error::Result;
use crate::formats::xml::{XmlElement, read_xml, serialize_element};
use std::fs;
use std::path::Path;

/// `<message>` element
pub const MESSAGE_TAG: &str = "message";
/// `<ph>` placeholder inside a message or translation
pub const PLACEHOLDER_TAG: &str = "ph";
/// `<part>` sub-document inclusion
pub const PART_TAG: &str = "part";
/// `<file>` translation bundle inclusion
pub const FILE_TAG: &str = "file";
/// Container for messages and parts
pub const MESSAGES_TAG: &str = "messages";
/// Container for translation file inclusions
pub const TRANSLATIONS_TAG: &str = "translations";

pub const NAME_ATTR: &str = "name";
pub const MEANING_ATTR: &str = "meaning";
/// Spelled this way in GRIT.
pub const TRANSLATEABLE_ATTR: &str = "translateable";
pub const FILE_ATTR: &str = "file";
pub const PATH_ATTR: &str = "path";
pub const LANG_ATTR: &str = "lang";

/// Provenance header written before every generated GRD/GRDP document.
pub const GRD_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
<!-- This file was created by grdbrand. -->\n";

/// Read a GRD or GRDP file from disk
///
/// # Errors
/// Returns an error if the file cannot be read or has invalid XML.
pub fn read_grd<P: AsRef<Path>>(path: P) -> Result<XmlElement> {
    read_xml(path)
}

/// Serialize a GRD or GRDP document with the provenance header
///
/// # Errors
/// Returns an error if XML serialization fails.
pub fn serialize_grd(root: &XmlElement) -> Result<String> {
    let mut output = String::from(GRD_HEADER);
    output.push_str(&serialize_element(root)?);
    Ok(output)
}

/// Write a GRD or GRDP document to disk
///
/// # Errors
/// Returns an error if serialization or file writing fails.
pub fn write_grd<P: AsRef<Path>>(root: &XmlElement, path: P) -> Result<()> {
    let xml = serialize_grd(root)?;
    fs::write(path, xml)?;
    Ok(())
}
