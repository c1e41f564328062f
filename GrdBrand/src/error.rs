//! Error types for `GrdBrand`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `GrdBrand` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Configuration Errors ====================
    /// A `<part>` references a GRDP file that was not declared for branding.
    ///
    /// Skipping it would ship an unbranded sub-document, so the whole run stops.
    #[error("GRDP file \"{file}\" must be declared as a GRDP file to brand")]
    UndeclaredPart {
        /// The `file` attribute of the offending `<part>`.
        file: String,
    },

    /// A declared input file or directory does not exist.
    #[error("could not find {}", path.display())]
    MissingInput {
        /// The missing path.
        path: PathBuf,
    },

    /// Extras were requested but the document has no element to append them to.
    #[error("document has no <{tag}> element to receive extra files")]
    MissingContainer {
        /// The container tag that was searched for.
        tag: &'static str,
    },

    /// A required setting was given neither on the command line nor in the manifest.
    #[error("missing required setting: {0}")]
    MissingSetting(&'static str),

    // ==================== GRD Structure Errors ====================
    /// A `<ph>` inside a message has no `name` attribute.
    #[error("placeholder without a name in message {message:?}")]
    PlaceholderWithoutName {
        /// The `name` attribute of the enclosing message, if any.
        message: Option<String>,
    },

    /// An element lacks an attribute the pipeline needs.
    #[error("<{tag}> element is missing the \"{attribute}\" attribute")]
    MissingAttribute {
        /// The element's tag.
        tag: &'static str,
        /// The missing attribute.
        attribute: &'static str,
    },

    // ==================== Parsing Errors ====================
    /// A translation ID that is not a canonical decimal number.
    #[error("invalid translation ID: {0:?}")]
    InvalidMessageId(String),

    /// XML parsing error.
    #[error("XML parse error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// XML attribute error.
    #[error("XML attribute error: {0}")]
    XmlAttrError(String),

    /// An end tag does not match the open element.
    #[error("mismatched end tag: expected </{expected}>, found </{found}>")]
    MismatchedEndTag {
        /// The tag of the innermost open element.
        expected: String,
        /// The end tag found in the input.
        found: String,
    },

    /// The document contains no root element.
    #[error("document has no root element")]
    EmptyDocument,

    /// Manifest parsing error.
    #[error("manifest error: {0}")]
    ManifestError(#[from] toml::de::Error),

    /// UTF-8 conversion error.
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlAttrError(err.to_string())
    }
}

/// A specialized Result type for `GrdBrand` operations.
pub type Result<T> = std::result::Result<T, Error>;
