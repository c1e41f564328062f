//! File format handlers for GRIT resource files
//!
//! - [`xml`] - the shared mixed-content element tree
//! - [`grd`] - GRD/GRDP resource definitions
//! - [`xtb`] - per-locale translation bundles

pub mod xml;
pub mod grd;
pub mod xtb;

// Re-export main document types
pub use xml::{XmlElement, parse_xml, read_xml, serialize_element, inner_markup};
pub use grd::{ResourceMessage, Placeholder, read_grd, write_grd, serialize_grd};
pub use xtb::{TranslationBundle, read_xtb, parse_xtb, write_xtb, serialize_xtb};
